// ==========================================
// 通勤车队排班辅助系统 - 排班后端契约
// ==========================================
// 职责: 定义外部排班后端的调用 trait, 实现依赖倒置
// 说明: 数据持久化/鉴权/聚类算法全部在后端完成,
//       本系统只通过此契约消费; 测试与本地开发使用
//       内存实现 (InMemoryPlanningBackend)
// ==========================================

use crate::api::dto::{AvailabilityQuery, ConfirmReceipt, PreviewRequest, VehicleWithDriver};
use crate::api::error::BackendResult;
use crate::domain::group::EmployeeGroup;
use crate::domain::preview::PreviewResult;
use crate::domain::site::Site;
use crate::domain::vehicle::Vehicle;
use async_trait::async_trait;
use chrono::NaiveDate;

/// 排班后端契约
///
/// 外部 REST 后端的函数调用视图。所有方法均为非阻塞异步调用；
/// 调用方不做自动重试，失败直接上抛由操作员决定下一步。
#[async_trait]
pub trait PlanningBackend: Send + Sync {
    /// 查询指定时段的可用车辆（带当班司机）
    ///
    /// # 返回
    /// - `Ok(vec)`: 可用车辆列表，可能为空（空列表不是错误，
    ///   是否阻断流程由调用方判定）
    async fn fetch_vehicules_disponibles_pour_planning(
        &self,
        query: AvailabilityQuery,
    ) -> BackendResult<Vec<VehicleWithDriver>>;

    /// 请求服务端计算排班预览
    ///
    /// 聚类/线路优化算法在服务端执行，本系统只接收结果聚合。
    async fn preview_auto_plan(&self, request: PreviewRequest) -> BackendResult<PreviewResult>;

    /// 确认（持久化）一份可能经过本地编辑的预览
    ///
    /// 员工重复、容量超载等校验由服务端在此步执行。
    async fn confirm_auto_plan(&self, plan: &PreviewResult) -> BackendResult<ConfirmReceipt>;

    // ==========================================
    // 选择器数据源（只读列表）
    // ==========================================

    /// 员工组列表
    async fn fetch_groupes_employes(&self) -> BackendResult<Vec<EmployeeGroup>>;

    /// 站点列表
    async fn fetch_sites(&self) -> BackendResult<Vec<Site>>;

    /// 指定日期已有排班的员工组ID（选择器用于置灰）
    async fn fetch_groupes_deja_planifies(&self, date: NaiveDate) -> BackendResult<Vec<String>>;

    /// 车辆全量列表（含不可用车辆）
    async fn fetch_vehicules(&self) -> BackendResult<Vec<Vehicle>>;
}
