// ==========================================
// 通勤车队排班辅助系统 - 员工组实体
// ==========================================
// 职责: 员工组 (共享时间窗与目的站点的排班选择单元)
// 说明: 助手会话内只读, 仅作为选择对象
// ==========================================

use crate::domain::types::{PlanningDirection, Recurrence};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// 员工组
///
/// 一组共享接送时间窗与目的站点的员工，是自动排班的选择单元。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeGroup {
    /// 员工组ID
    pub id: String,

    /// 显示名称
    pub nom: String,

    /// 时间窗开始
    pub heure_debut: NaiveTime,

    /// 时间窗结束
    pub heure_fin: NaiveTime,

    /// 重复规则
    pub recurrence: Recurrence,

    /// 目的站点ID
    pub site_id: String,

    /// 行程方向（出发/返程）
    pub direction: PlanningDirection,
}
