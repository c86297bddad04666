// ==========================================
// 通勤车队排班辅助系统 - 可用车辆门槛
// ==========================================
// 职责: 员工组选择步骤的推进门槛
// 说明: 空结果与网络失败对操作员走同一条提示通道,
//       但内部是不同错误 -- 空结果换员工组/日期即可重试,
//       网络失败原样重试
// ==========================================

use crate::api::dto::{AvailabilityQuery, VehicleWithDriver};
use crate::api::planning_backend::PlanningBackend;
use crate::domain::group::EmployeeGroup;
use crate::domain::types::RecurrenceType;
use crate::engine::error::{WizardError, WizardResult};
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::{debug, info};

/// 查询时段内的可用车辆, 空结果视为门槛失败
///
/// # 参数
/// - `groupes`: 已选员工组（重复类型取第一个组的设置）
/// - `date`: 参考日期
/// - `fenetre`: 探测时间窗（来自配置的默认值）
///
/// # 返回
/// - `Ok(vec)`: 非空可用车辆列表
/// - `Err(NoVehicleAvailable)`: 调用成功但列表为空
/// - `Err(Backend)`: 传输或服务端失败
pub async fn fetch_vehicules_disponibles(
    backend: &Arc<dyn PlanningBackend>,
    groupes: &[EmployeeGroup],
    date: NaiveDate,
    fenetre: (NaiveTime, NaiveTime),
) -> WizardResult<Vec<VehicleWithDriver>> {
    let recurrence_type = groupes
        .first()
        .map(|g| g.recurrence.recurrence_type)
        .unwrap_or(RecurrenceType::Unique);

    let query = AvailabilityQuery {
        date,
        heure_debut: fenetre.0,
        heure_fin: fenetre.1,
        recurrence_type,
    };
    debug!(
        date = %date,
        debut = %fenetre.0,
        fin = %fenetre.1,
        recurrence = %recurrence_type,
        groupes = groupes.len(),
        "查询可用车辆"
    );

    let vehicules = backend
        .fetch_vehicules_disponibles_pour_planning(query)
        .await?;

    if vehicules.is_empty() {
        return Err(WizardError::NoVehicleAvailable {
            date,
            heure_debut: fenetre.0,
            heure_fin: fenetre.1,
        });
    }

    info!(count = vehicules.len(), "可用车辆查询成功");
    Ok(vehicules)
}
