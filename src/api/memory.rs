// ==========================================
// 通勤车队排班辅助系统 - 内存后端实现
// ==========================================
// 职责: PlanningBackend 的进程内实现, 供本地开发与测试
// 说明: 真实聚类/线路优化在服务端完成; 此实现仅按车辆
//       容量顺序切分员工并取住址质心作为停靠点, 用来
//       产出形状正确的预览聚合, 不代表任何优化语义
// ==========================================

use crate::api::dto::{AvailabilityQuery, ConfirmReceipt, PreviewRequest, VehicleWithDriver};
use crate::api::error::{BackendError, BackendResult};
use crate::api::planning_backend::PlanningBackend;
use crate::domain::cluster::Cluster;
use crate::domain::employee::Employee;
use crate::domain::group::EmployeeGroup;
use crate::domain::preview::PreviewResult;
use crate::domain::site::Site;
use crate::domain::types::{GeoPoint, PlanningDirection, Recurrence};
use crate::domain::vehicle::{DriverAssignment, Vehicle};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// 内部存储
// ==========================================

#[derive(Debug, Default)]
struct Store {
    groupes: Vec<EmployeeGroup>,
    employes_par_groupe: HashMap<String, Vec<Employee>>,
    vehicules: Vec<Vehicle>,
    affectations: Vec<DriverAssignment>,
    sites: HashMap<String, Site>,
    /// 日期 -> 当日已确认排班的员工组ID
    planifies: HashMap<NaiveDate, Vec<String>>,
    confirmations: Vec<ConfirmReceipt>,
}

/// 内存排班后端
pub struct InMemoryPlanningBackend {
    store: Mutex<Store>,
}

impl InMemoryPlanningBackend {
    /// 创建空后端
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store::default()),
        }
    }

    /// 创建带演示数据的后端（桌面壳与手工联调用）
    pub fn with_demo_data() -> Self {
        let backend = Self::new();
        backend.seed_demo_data();
        backend
    }

    fn seed_demo_data(&self) {
        let site = Site {
            id: "S001".to_string(),
            nom: "Site industriel Nord".to_string(),
            position: GeoPoint::new(48.9355, 2.3570),
        };

        let groupes = vec![
            EmployeeGroup {
                id: "G001".to_string(),
                nom: "Equipe matin A".to_string(),
                heure_debut: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN),
                heure_fin: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
                recurrence: Recurrence::hebdomadaire(vec![1, 2, 3, 4, 5]),
                site_id: site.id.clone(),
                direction: PlanningDirection::Depart,
            },
            EmployeeGroup {
                id: "G002".to_string(),
                nom: "Equipe soir B".to_string(),
                heure_debut: NaiveTime::from_hms_opt(21, 0, 0).unwrap_or(NaiveTime::MIN),
                heure_fin: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or(NaiveTime::MIN),
                recurrence: Recurrence::hebdomadaire(vec![1, 2, 3, 4, 5]),
                site_id: site.id.clone(),
                direction: PlanningDirection::Retour,
            },
        ];

        let employes: Vec<Employee> = (1..=9)
            .map(|i| Employee {
                id: format!("E{:03}", i),
                nom: format!("Dupont{}", i),
                prenom: "Alex".to_string(),
                domicile: GeoPoint::new(48.80 + 0.01 * f64::from(i), 2.30 + 0.008 * f64::from(i)),
                groupe_id: if i <= 5 { "G001" } else { "G002" }.to_string(),
            })
            .collect();

        let vehicules = vec![
            Vehicle {
                id: "V001".to_string(),
                immatriculation: "AB-123-CD".to_string(),
                capacite: 8,
                disponible: true,
            },
            Vehicle {
                id: "V002".to_string(),
                immatriculation: "EF-456-GH".to_string(),
                capacite: 4,
                disponible: true,
            },
            Vehicle {
                id: "V003".to_string(),
                immatriculation: "IJ-789-KL".to_string(),
                capacite: 8,
                disponible: false,
            },
        ];

        let affectations = vec![
            DriverAssignment {
                chauffeur_id: "C001".to_string(),
                chauffeur_nom: "Martin Leroy".to_string(),
                vehicule_id: "V001".to_string(),
            },
            DriverAssignment {
                chauffeur_id: "C002".to_string(),
                chauffeur_nom: "Sofia Bernard".to_string(),
                vehicule_id: "V002".to_string(),
            },
        ];

        let mut store = match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        store.sites.insert(site.id.clone(), site);
        for employe in employes {
            store
                .employes_par_groupe
                .entry(employe.groupe_id.clone())
                .or_default()
                .push(employe);
        }
        store.groupes = groupes;
        store.vehicules = vehicules;
        store.affectations = affectations;

        info!(
            groupes = store.groupes.len(),
            vehicules = store.vehicules.len(),
            "内存后端演示数据已加载"
        );
    }

    /// 注入员工组（测试装配）
    pub fn add_groupe(&self, groupe: EmployeeGroup, employes: Vec<Employee>) {
        let mut store = self.lock_store();
        store
            .employes_par_groupe
            .insert(groupe.id.clone(), employes);
        store.groupes.push(groupe);
    }

    /// 注入车辆（测试装配）
    pub fn add_vehicule(&self, vehicule: Vehicle) {
        self.lock_store().vehicules.push(vehicule);
    }

    /// 注入站点（测试装配）
    pub fn add_site(&self, site: Site) {
        self.lock_store().sites.insert(site.id.clone(), site);
    }

    /// 已确认的排班批次数
    pub fn confirmation_count(&self) -> usize {
        self.lock_store().confirmations.len()
    }

    fn lock_store(&self) -> std::sync::MutexGuard<'_, Store> {
        match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// 按选中车辆顺序切分员工为集群
    ///
    /// 占位聚类: 依次用每辆车的容量切一段员工, 停靠点取该段
    /// 住址质心, 序号按切分顺序 1..N 连续编号。
    fn build_clusters(employes: &[Employee], vehicules: &[Vehicle]) -> Vec<Cluster> {
        if employes.is_empty() || vehicules.is_empty() {
            return Vec::new();
        }

        let mut clusters = Vec::new();
        let mut cursor = 0usize;
        let mut vehicule_idx = 0usize;

        while cursor < employes.len() {
            let vehicule = &vehicules[vehicule_idx % vehicules.len()];
            let take = (vehicule.capacite as usize).max(1);
            let chunk = &employes[cursor..(cursor + take).min(employes.len())];

            let lat = chunk.iter().map(|e| e.domicile.latitude).sum::<f64>() / chunk.len() as f64;
            let lng = chunk.iter().map(|e| e.domicile.longitude).sum::<f64>() / chunk.len() as f64;

            let mut cluster = Cluster::new(
                GeoPoint::new(lat, lng),
                clusters.len() as u32 + 1,
                vehicule.id.clone(),
            );
            cluster.employee_ids = chunk.iter().map(|e| e.id.clone()).collect();
            clusters.push(cluster);

            cursor += chunk.len();
            vehicule_idx += 1;
        }

        clusters
    }
}

impl Default for InMemoryPlanningBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanningBackend for InMemoryPlanningBackend {
    async fn fetch_vehicules_disponibles_pour_planning(
        &self,
        query: AvailabilityQuery,
    ) -> BackendResult<Vec<VehicleWithDriver>> {
        let store = self.lock_store();
        let disponibles: Vec<VehicleWithDriver> = store
            .vehicules
            .iter()
            .filter(|v| v.disponible)
            .map(|v| VehicleWithDriver {
                vehicule: v.clone(),
                chauffeur: store
                    .affectations
                    .iter()
                    .find(|a| a.vehicule_id == v.id)
                    .map(|a| a.chauffeur_nom.clone()),
            })
            .collect();

        debug!(
            date = %query.date,
            debut = %query.heure_debut,
            fin = %query.heure_fin,
            count = disponibles.len(),
            "可用车辆查询"
        );
        Ok(disponibles)
    }

    async fn preview_auto_plan(&self, request: PreviewRequest) -> BackendResult<PreviewResult> {
        let store = self.lock_store();

        let mut groupes = Vec::new();
        for groupe_id in &request.groupe_ids {
            let groupe = store
                .groupes
                .iter()
                .find(|g| &g.id == groupe_id)
                .ok_or_else(|| BackendError::NotFound(format!("员工组 {}", groupe_id)))?;
            groupes.push(groupe.clone());
        }

        let vehicules: Vec<Vehicle> = store
            .vehicules
            .iter()
            .filter(|v| request.vehicule_ids.contains(&v.id))
            .cloned()
            .collect();
        if vehicules.is_empty() {
            return Err(BackendError::NotFound("选中车辆".to_string()));
        }

        let mut employes_par_groupe = HashMap::new();
        let mut clusters_par_groupe = HashMap::new();
        for groupe in &groupes {
            let employes = store
                .employes_par_groupe
                .get(&groupe.id)
                .cloned()
                .unwrap_or_default();
            let clusters = Self::build_clusters(&employes, &vehicules);
            clusters_par_groupe.insert(groupe.id.clone(), Arc::new(clusters));
            employes_par_groupe.insert(groupe.id.clone(), employes);
        }

        info!(
            date = %request.date_reference,
            groupes = groupes.len(),
            vehicules = vehicules.len(),
            "排班预览已生成"
        );

        Ok(PreviewResult {
            date_reference: request.date_reference,
            groupes: Arc::new(groupes),
            employes_par_groupe: Arc::new(employes_par_groupe),
            vehicules: Arc::new(vehicules),
            affectations: Arc::new(store.affectations.clone()),
            clusters_par_groupe,
            sites: Arc::new(store.sites.clone()),
        })
    }

    async fn confirm_auto_plan(&self, plan: &PreviewResult) -> BackendResult<ConfirmReceipt> {
        if plan.clusters_par_groupe.is_empty() {
            return Err(BackendError::Server {
                status: 422,
                message: "预览中没有任何集群".to_string(),
            });
        }

        let receipt = ConfirmReceipt {
            confirmation_id: Uuid::new_v4().to_string(),
            clusters_persistes: plan.total_clusters(),
        };

        let mut store = self.lock_store();
        let planifies = store.planifies.entry(plan.date_reference).or_default();
        for groupe in plan.groupes.iter() {
            if !planifies.contains(&groupe.id) {
                planifies.push(groupe.id.clone());
            }
        }
        store.confirmations.push(receipt.clone());

        info!(
            confirmation_id = %receipt.confirmation_id,
            clusters = receipt.clusters_persistes,
            "排班方案已确认"
        );
        Ok(receipt)
    }

    async fn fetch_groupes_employes(&self) -> BackendResult<Vec<EmployeeGroup>> {
        Ok(self.lock_store().groupes.clone())
    }

    async fn fetch_sites(&self) -> BackendResult<Vec<Site>> {
        Ok(self.lock_store().sites.values().cloned().collect())
    }

    async fn fetch_groupes_deja_planifies(&self, date: NaiveDate) -> BackendResult<Vec<String>> {
        Ok(self
            .lock_store()
            .planifies
            .get(&date)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_vehicules(&self) -> BackendResult<Vec<Vehicle>> {
        Ok(self.lock_store().vehicules.clone())
    }
}
