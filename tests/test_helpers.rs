// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的领域夹具与可编程后端桩
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use fleet_transport_aps::api::dto::{
    AvailabilityQuery, ConfirmReceipt, PreviewRequest, VehicleWithDriver,
};
use fleet_transport_aps::api::error::{BackendError, BackendResult};
use fleet_transport_aps::api::planning_backend::PlanningBackend;
use fleet_transport_aps::domain::cluster::Cluster;
use fleet_transport_aps::domain::group::EmployeeGroup;
use fleet_transport_aps::domain::preview::PreviewResult;
use fleet_transport_aps::domain::site::Site;
use fleet_transport_aps::domain::types::{GeoPoint, PlanningDirection, Recurrence};
use fleet_transport_aps::domain::vehicle::Vehicle;

// ==========================================
// 领域夹具
// ==========================================

/// 创建测试用的员工组
pub fn make_groupe(id: &str) -> EmployeeGroup {
    EmployeeGroup {
        id: id.to_string(),
        nom: format!("Groupe {}", id),
        heure_debut: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        heure_fin: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        recurrence: Recurrence::hebdomadaire(vec![1, 2, 3, 4, 5]),
        site_id: "S001".to_string(),
        direction: PlanningDirection::Depart,
    }
}

/// 创建测试用的车辆
pub fn make_vehicule(id: &str, capacite: u32) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        immatriculation: format!("XX-{}-YY", id),
        capacite,
        disponible: true,
    }
}

/// 创建测试用的可用车辆（带司机）
pub fn make_vehicule_avec_chauffeur(id: &str, capacite: u32) -> VehicleWithDriver {
    VehicleWithDriver {
        vehicule: make_vehicule(id, capacite),
        chauffeur: Some(format!("Chauffeur {}", id)),
    }
}

/// 创建测试用的集群
pub fn make_cluster(ordre: u32, vehicule_id: &str) -> Cluster {
    Cluster {
        position: GeoPoint::new(48.85 + f64::from(ordre) * 0.01, 2.35),
        ordre,
        vehicule_id: vehicule_id.to_string(),
        employee_ids: vec![format!("E{:03}", ordre)],
    }
}

/// 创建测试用的预览聚合（每组给定一组集群序号）
pub fn make_preview(date: NaiveDate, groups: &[(&str, &[u32])]) -> PreviewResult {
    let mut clusters_par_groupe = HashMap::new();
    let mut groupes = Vec::new();
    for (groupe_id, ordres) in groups {
        groupes.push(make_groupe(groupe_id));
        let clusters: Vec<Cluster> = ordres.iter().map(|&o| make_cluster(o, "V001")).collect();
        clusters_par_groupe.insert(groupe_id.to_string(), Arc::new(clusters));
    }

    let mut sites = HashMap::new();
    sites.insert(
        "S001".to_string(),
        Site {
            id: "S001".to_string(),
            nom: "Site test".to_string(),
            position: GeoPoint::new(48.93, 2.36),
        },
    );

    PreviewResult {
        date_reference: date,
        groupes: Arc::new(groupes),
        employes_par_groupe: Arc::new(HashMap::new()),
        vehicules: Arc::new(vec![make_vehicule("V001", 8)]),
        affectations: Arc::new(Vec::new()),
        clusters_par_groupe,
        sites: Arc::new(sites),
    }
}

// ==========================================
// 可编程后端桩
// ==========================================

/// 可用车辆查询的脚本化响应
pub enum AvailabilityScript {
    /// 返回给定车辆
    Vehicules(Vec<VehicleWithDriver>),
    /// 调用成功但列表为空（业务性阻断）
    Vide,
    /// 传输失败
    Transport,
}

/// 可编程后端桩
///
/// 记录每个端点的调用次数, 响应按脚本返回,
/// 并捕获最后一次 confirm 的完整负载供断言。
pub struct MockBackend {
    pub availability: Mutex<AvailabilityScript>,
    pub preview_template: Mutex<Option<PreviewResult>>,
    pub preview_fails: Mutex<bool>,
    pub confirm_fails: Mutex<bool>,

    pub availability_calls: AtomicUsize,
    pub preview_calls: AtomicUsize,
    pub confirm_calls: AtomicUsize,

    pub last_confirmed: Mutex<Option<PreviewResult>>,
}

impl MockBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            availability: Mutex::new(AvailabilityScript::Vehicules(vec![
                make_vehicule_avec_chauffeur("V001", 8),
            ])),
            preview_template: Mutex::new(None),
            preview_fails: Mutex::new(false),
            confirm_fails: Mutex::new(false),
            availability_calls: AtomicUsize::new(0),
            preview_calls: AtomicUsize::new(0),
            confirm_calls: AtomicUsize::new(0),
            last_confirmed: Mutex::new(None),
        })
    }

    pub fn script_availability(&self, script: AvailabilityScript) {
        *self.availability.lock().unwrap() = script;
    }

    pub fn script_preview(&self, preview: PreviewResult) {
        *self.preview_template.lock().unwrap() = Some(preview);
    }

    pub fn fail_preview(&self, fails: bool) {
        *self.preview_fails.lock().unwrap() = fails;
    }

    pub fn fail_confirm(&self, fails: bool) {
        *self.confirm_fails.lock().unwrap() = fails;
    }

    pub fn availability_call_count(&self) -> usize {
        self.availability_calls.load(Ordering::SeqCst)
    }

    pub fn preview_call_count(&self) -> usize {
        self.preview_calls.load(Ordering::SeqCst)
    }

    pub fn confirm_call_count(&self) -> usize {
        self.confirm_calls.load(Ordering::SeqCst)
    }

    pub fn last_confirmed(&self) -> Option<PreviewResult> {
        self.last_confirmed.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanningBackend for MockBackend {
    async fn fetch_vehicules_disponibles_pour_planning(
        &self,
        _query: AvailabilityQuery,
    ) -> BackendResult<Vec<VehicleWithDriver>> {
        self.availability_calls.fetch_add(1, Ordering::SeqCst);
        match &*self.availability.lock().unwrap() {
            AvailabilityScript::Vehicules(vehicules) => Ok(vehicules.clone()),
            AvailabilityScript::Vide => Ok(Vec::new()),
            AvailabilityScript::Transport => {
                Err(BackendError::Transport("connexion refusée".to_string()))
            }
        }
    }

    async fn preview_auto_plan(&self, request: PreviewRequest) -> BackendResult<PreviewResult> {
        self.preview_calls.fetch_add(1, Ordering::SeqCst);
        if *self.preview_fails.lock().unwrap() {
            return Err(BackendError::Server {
                status: 500,
                message: "optimiseur indisponible".to_string(),
            });
        }

        let template = self.preview_template.lock().unwrap().clone();
        let mut preview = template.unwrap_or_else(|| {
            make_preview(request.date_reference, &[("G001", &[1, 2, 3])])
        });
        preview.date_reference = request.date_reference;
        Ok(preview)
    }

    async fn confirm_auto_plan(&self, plan: &PreviewResult) -> BackendResult<ConfirmReceipt> {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        if *self.confirm_fails.lock().unwrap() {
            return Err(BackendError::Server {
                status: 409,
                message: "conflit de planification".to_string(),
            });
        }

        *self.last_confirmed.lock().unwrap() = Some(plan.clone());
        Ok(ConfirmReceipt {
            confirmation_id: "CONF-TEST".to_string(),
            clusters_persistes: plan.total_clusters(),
        })
    }

    async fn fetch_groupes_employes(&self) -> BackendResult<Vec<EmployeeGroup>> {
        Ok(vec![make_groupe("G001"), make_groupe("G002")])
    }

    async fn fetch_sites(&self) -> BackendResult<Vec<Site>> {
        Ok(Vec::new())
    }

    async fn fetch_groupes_deja_planifies(&self, _date: NaiveDate) -> BackendResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn fetch_vehicules(&self) -> BackendResult<Vec<Vehicle>> {
        Ok(vec![make_vehicule("V001", 8)])
    }
}
