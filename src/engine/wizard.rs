// ==========================================
// 通勤车队排班辅助系统 - 自动排班助手控制器
// ==========================================
// 依据: 自动排班交互流程 v1.2
// 职责: 五步向导的状态机与推进门槛
// 状态: SelectGroups -> SelectVehicles -> SelectDate
//       -> Preview -> Confirmed (线性前进, 单步回退)
// ==========================================
// 说明: 单线程持有预览聚合的唯一可变副本; 网络调用期间
//       以 busy 标志拒绝重复推进; 失败一律停在当前步骤,
//       由操作员修正输入后手动重试 (无自动重试)
// ==========================================

use crate::api::dto::{PreviewRequest, VehicleWithDriver};
use crate::api::planning_backend::PlanningBackend;
use crate::domain::group::EmployeeGroup;
use crate::domain::preview::PreviewResult;
use crate::engine::availability;
use crate::engine::error::{WizardError, WizardResult};
use crate::engine::notify::{Notice, WizardNotifier};
use crate::engine::preview_edit;
use crate::i18n::{t, t_with_args};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

// ==========================================
// 向导步骤
// ==========================================

/// 向导步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    /// 选择员工组
    SelectGroups,
    /// 选择车辆
    SelectVehicles,
    /// 选择参考日期
    SelectDate,
    /// 预览与编辑
    Preview,
    /// 已确认（终态, 仅 reset 可离开）
    Confirmed,
}

impl WizardStep {
    /// 转换为字符串标识
    pub fn as_str(&self) -> &str {
        match self {
            WizardStep::SelectGroups => "SelectGroups",
            WizardStep::SelectVehicles => "SelectVehicles",
            WizardStep::SelectDate => "SelectDate",
            WizardStep::Preview => "Preview",
            WizardStep::Confirmed => "Confirmed",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 向导状态快照
// ==========================================

/// 向导状态快照（序列化后交给前端渲染）
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    /// 当前步骤
    pub step: WizardStep,

    /// 已选员工组
    pub groupes: Vec<EmployeeGroup>,

    /// 门槛查询返回的可用车辆
    pub vehicules_disponibles: Vec<VehicleWithDriver>,

    /// 已选车辆ID
    pub vehicule_ids: Vec<String>,

    /// 参考日期
    pub date_reference: Option<NaiveDate>,

    /// 当前预览（Preview/Confirmed 步骤存在）
    pub preview: Option<PreviewResult>,

    /// 预览是否有未确认的本地编辑
    pub has_unsaved_edits: bool,

    /// 是否有网络调用在途
    pub busy: bool,
}

// ==========================================
// AutoPlanWizard - 助手控制器
// ==========================================

/// 自动排班助手
pub struct AutoPlanWizard {
    step: WizardStep,
    groupes: Vec<EmployeeGroup>,
    vehicules_disponibles: Vec<VehicleWithDriver>,
    vehicule_ids: Vec<String>,
    date_reference: Option<NaiveDate>,
    preview: Option<PreviewResult>,
    preview_edited: bool,
    busy: bool,

    /// 可用车辆探测时间窗（配置默认值）
    fenetre: (NaiveTime, NaiveTime),

    backend: Arc<dyn PlanningBackend>,
    notifier: Arc<dyn WizardNotifier>,
}

impl AutoPlanWizard {
    /// 创建新的助手实例
    ///
    /// # 参数
    /// - `backend`: 排班后端
    /// - `notifier`: 操作提示发布者
    /// - `fenetre`: 可用车辆探测时间窗
    pub fn new(
        backend: Arc<dyn PlanningBackend>,
        notifier: Arc<dyn WizardNotifier>,
        fenetre: (NaiveTime, NaiveTime),
    ) -> Self {
        Self {
            step: WizardStep::SelectGroups,
            groupes: Vec::new(),
            vehicules_disponibles: Vec::new(),
            vehicule_ids: Vec::new(),
            date_reference: None,
            preview: None,
            preview_edited: false,
            busy: false,
            fenetre,
            backend,
            notifier,
        }
    }

    // ==========================================
    // 只读访问
    // ==========================================

    /// 当前步骤
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// 当前预览
    pub fn preview(&self) -> Option<&PreviewResult> {
        self.preview.as_ref()
    }

    /// 门槛查询返回的可用车辆
    pub fn vehicules_disponibles(&self) -> &[VehicleWithDriver] {
        &self.vehicules_disponibles
    }

    /// 预览是否有未确认的本地编辑
    pub fn has_unsaved_edits(&self) -> bool {
        self.preview_edited
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            step: self.step,
            groupes: self.groupes.clone(),
            vehicules_disponibles: self.vehicules_disponibles.clone(),
            vehicule_ids: self.vehicule_ids.clone(),
            date_reference: self.date_reference,
            preview: self.preview.clone(),
            has_unsaved_edits: self.preview_edited,
            busy: self.busy,
        }
    }

    // ==========================================
    // 选择器写入（仅在对应步骤允许）
    // ==========================================

    /// 写入员工组选择
    pub fn set_groupes(&mut self, groupes: Vec<EmployeeGroup>) -> WizardResult<()> {
        self.require_step(WizardStep::SelectGroups)?;
        self.groupes = groupes;
        Ok(())
    }

    /// 写入车辆选择
    pub fn set_vehicule_ids(&mut self, vehicule_ids: Vec<String>) -> WizardResult<()> {
        self.require_step(WizardStep::SelectVehicles)?;
        self.vehicule_ids = vehicule_ids;
        Ok(())
    }

    /// 写入参考日期
    pub fn set_date_reference(&mut self, date: NaiveDate) -> WizardResult<()> {
        self.require_step(WizardStep::SelectDate)?;
        self.date_reference = Some(date);
        Ok(())
    }

    // ==========================================
    // 步骤推进
    // ==========================================

    /// 前进一步（跨网络门槛的推进在此发起调用）
    ///
    /// 失败一律停在当前步骤; 所有门槛失败都会发布一条提示。
    pub async fn next(&mut self) -> WizardResult<WizardStep> {
        if self.busy {
            return Err(WizardError::OperationInFlight);
        }

        match self.step {
            WizardStep::SelectGroups => self.advance_from_groups().await,
            WizardStep::SelectVehicles => self.advance_from_vehicles(),
            WizardStep::SelectDate => self.advance_from_date().await,
            WizardStep::Preview => self.confirm().await,
            WizardStep::Confirmed => Err(self.refuse_transition(WizardStep::Confirmed)),
        }
    }

    /// 离开 SelectGroups: 选择非空 + 可用车辆查询非空
    async fn advance_from_groups(&mut self) -> WizardResult<WizardStep> {
        if self.groupes.is_empty() {
            // 本地校验失败: 不发网络请求
            let message = t("wizard.groups_required");
            self.notifier.notify(Notice::error(&message));
            return Err(WizardError::IncompleteSelection(message));
        }

        // 参考日期尚未选择时用今天探测（与后端约定的默认时段语义）
        let date = self
            .date_reference
            .unwrap_or_else(|| Local::now().date_naive());

        self.busy = true;
        let result =
            availability::fetch_vehicules_disponibles(&self.backend, &self.groupes, date, self.fenetre)
                .await;
        self.busy = false;

        match result {
            Ok(vehicules) => {
                self.notifier.notify(Notice::success(t_with_args(
                    "wizard.vehicles_found",
                    &[("count", &vehicules.len().to_string())],
                )));
                self.vehicules_disponibles = vehicules;
                self.step = WizardStep::SelectVehicles;
                info!(step = %self.step, "助手推进");
                Ok(self.step)
            }
            Err(err) => {
                self.notify_gate_failure(&err);
                Err(err)
            }
        }
    }

    /// 离开 SelectVehicles: 选择非空（纯本地门槛）
    fn advance_from_vehicles(&mut self) -> WizardResult<WizardStep> {
        if self.vehicule_ids.is_empty() {
            let message = t("wizard.vehicles_required");
            self.notifier.notify(Notice::error(&message));
            return Err(WizardError::IncompleteSelection(message));
        }

        self.step = WizardStep::SelectDate;
        info!(step = %self.step, "助手推进");
        Ok(self.step)
    }

    /// 离开 SelectDate: 日期已选 + 预览调用成功
    async fn advance_from_date(&mut self) -> WizardResult<WizardStep> {
        let date = match self.date_reference {
            Some(date) => date,
            None => {
                let message = t("wizard.date_required");
                self.notifier.notify(Notice::error(&message));
                return Err(WizardError::IncompleteSelection(message));
            }
        };

        let request = PreviewRequest {
            groupe_ids: self.groupes.iter().map(|g| g.id.clone()).collect(),
            vehicule_ids: self.vehicule_ids.clone(),
            date_reference: date,
        };

        self.busy = true;
        let result = self.backend.preview_auto_plan(request).await;
        self.busy = false;

        match result {
            Ok(preview) => {
                debug!(clusters = preview.total_clusters(), "预览聚合已接收");
                self.preview = Some(preview);
                self.preview_edited = false;
                self.step = WizardStep::Preview;
                self.notifier.notify(Notice::success(t("wizard.preview_ready")));
                info!(step = %self.step, "助手推进");
                Ok(self.step)
            }
            Err(err) => {
                let err: WizardError = err.into();
                self.notifier.notify(Notice::error(t_with_args(
                    "wizard.preview_failed",
                    &[("error", &err.to_string())],
                )));
                Err(err)
            }
        }
    }

    /// 确认当前预览（操作员触发; Preview 步骤的唯一出口）
    pub async fn confirm(&mut self) -> WizardResult<WizardStep> {
        self.require_step(WizardStep::Preview)?;
        if self.busy {
            return Err(WizardError::OperationInFlight);
        }

        let preview = self
            .preview
            .as_ref()
            .ok_or_else(|| WizardError::IncompleteSelection("没有可确认的预览".to_string()))?
            .clone();

        self.busy = true;
        let result = self.backend.confirm_auto_plan(&preview).await;
        self.busy = false;

        match result {
            Ok(receipt) => {
                info!(
                    confirmation_id = %receipt.confirmation_id,
                    clusters = receipt.clusters_persistes,
                    "排班方案确认成功"
                );
                self.preview_edited = false;
                self.step = WizardStep::Confirmed;
                self.notifier
                    .notify(Notice::success(t("wizard.confirm_success")));
                Ok(self.step)
            }
            Err(err) => {
                let err: WizardError = err.into();
                warn!(error = %err, "排班方案确认失败");
                self.notifier.notify(Notice::error(t_with_args(
                    "wizard.confirm_failed",
                    &[("error", &err.to_string())],
                )));
                Err(err)
            }
        }
    }

    /// 回退一步
    ///
    /// Preview 回到 SelectDate 时丢弃预览（重新预览会整体替换）。
    pub fn back(&mut self) -> WizardResult<WizardStep> {
        let previous = match self.step {
            WizardStep::SelectVehicles => WizardStep::SelectGroups,
            WizardStep::SelectDate => WizardStep::SelectVehicles,
            WizardStep::Preview => {
                self.preview = None;
                self.preview_edited = false;
                WizardStep::SelectDate
            }
            WizardStep::SelectGroups | WizardStep::Confirmed => {
                return Err(self.refuse_transition(self.step));
            }
        };

        self.step = previous;
        debug!(step = %self.step, "助手回退");
        Ok(self.step)
    }

    /// 重置助手（无条件清空全部选择与预览, 不做二次确认）
    pub fn reset(&mut self) {
        self.step = WizardStep::SelectGroups;
        self.groupes.clear();
        self.vehicules_disponibles.clear();
        self.vehicule_ids.clear();
        self.date_reference = None;
        self.preview = None;
        self.preview_edited = false;
        self.busy = false;
        self.notifier.notify(Notice::info(t("wizard.reset_done")));
        info!("助手已重置");
    }

    // ==========================================
    // 预览编辑（仅 Preview 步骤; 纯本地, 不发网络请求）
    // ==========================================

    /// 移动停靠点坐标
    pub fn move_cluster_marker(
        &mut self,
        groupe_id: &str,
        cluster_index: usize,
        latitude: f64,
        longitude: f64,
    ) -> WizardResult<()> {
        self.apply_edit(groupe_id, |preview| {
            preview_edit::move_marker(preview, groupe_id, cluster_index, latitude, longitude)
        })
    }

    /// 调整停靠顺序
    pub fn set_cluster_order(
        &mut self,
        groupe_id: &str,
        cluster_index: usize,
        new_order: i64,
    ) -> WizardResult<()> {
        self.apply_edit(groupe_id, |preview| {
            preview_edit::set_order(preview, groupe_id, cluster_index, new_order)
        })
    }

    /// 编辑集群员工列表
    pub fn edit_cluster_employees(
        &mut self,
        groupe_id: &str,
        cluster_index: usize,
        employee_ids: Vec<String>,
    ) -> WizardResult<()> {
        self.apply_edit(groupe_id, |preview| {
            preview_edit::edit_employees(preview, groupe_id, cluster_index, employee_ids)
        })
    }

    /// 应用一次纯编辑并替换持有的预览引用
    fn apply_edit<F>(&mut self, groupe_id: &str, edit: F) -> WizardResult<()>
    where
        F: FnOnce(&PreviewResult) -> PreviewResult,
    {
        self.require_step(WizardStep::Preview)?;
        let preview = self
            .preview
            .as_ref()
            .ok_or_else(|| WizardError::IncompleteSelection("没有可编辑的预览".to_string()))?;

        let edited = edit(preview);

        // 通过组集群列表的 Arc 指针判断是否真的发生了编辑
        let changed = match (preview.clusters(groupe_id), edited.clusters(groupe_id)) {
            (Some(before), Some(after)) => !Arc::ptr_eq(before, after),
            _ => false,
        };

        self.preview = Some(edited);
        if changed {
            self.preview_edited = true;
        }
        Ok(())
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    fn require_step(&self, expected: WizardStep) -> WizardResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidStepTransition {
                from: self.step.to_string(),
                to: expected.to_string(),
            })
        }
    }

    fn refuse_transition(&self, from: WizardStep) -> WizardError {
        WizardError::InvalidStepTransition {
            from: from.to_string(),
            to: "-".to_string(),
        }
    }

    /// 门槛失败提示: 空结果用专用文案, 其余带原始错误
    fn notify_gate_failure(&self, err: &WizardError) {
        let message = match err {
            WizardError::NoVehicleAvailable {
                date,
                heure_debut,
                heure_fin,
            } => t_with_args(
                "wizard.no_vehicle_available",
                &[
                    ("date", &date.to_string()),
                    ("debut", &heure_debut.format("%H:%M").to_string()),
                    ("fin", &heure_fin.format("%H:%M").to_string()),
                ],
            ),
            other => other.to_string(),
        };
        self.notifier.notify(Notice::error(message));
    }
}
