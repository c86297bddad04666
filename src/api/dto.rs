// ==========================================
// 通勤车队排班辅助系统 - 后端接口数据契约
// ==========================================
// 职责: 各端点的显式请求/响应类型
// 说明: 不使用动态负载; 每个端点一个具体结构体,
//       字段命名与后端 REST 契约保持一致
// ==========================================

use crate::domain::types::RecurrenceType;
use crate::domain::vehicle::Vehicle;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ==========================================
// 可用车辆查询
// ==========================================

/// 可用车辆查询参数
///
/// 对应端点 `fetchVehiculesDisponiblesPourPlanning`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// 查询日期
    pub date: NaiveDate,

    /// 时间窗开始
    pub heure_debut: NaiveTime,

    /// 时间窗结束
    pub heure_fin: NaiveTime,

    /// 重复类型（影响后端对既有排班的占用判断）
    pub recurrence_type: RecurrenceType,
}

/// 可用车辆（带当班司机）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleWithDriver {
    pub vehicule: Vehicle,

    /// 当班司机显示名称（无在岗指派时为 None）
    pub chauffeur: Option<String>,
}

// ==========================================
// 预览请求
// ==========================================

/// 自动排班预览请求
///
/// 对应端点 `previewAutoPlan`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// 选中的员工组ID
    pub groupe_ids: Vec<String>,

    /// 选中的车辆ID
    pub vehicule_ids: Vec<String>,

    /// 参考日期
    pub date_reference: NaiveDate,
}

// ==========================================
// 确认回执
// ==========================================

/// 自动排班确认回执
///
/// 对应端点 `confirmAutoPlan`; 前端只消费成功/失败,
/// 回执ID仅用于操作追踪
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmReceipt {
    /// 确认批次ID
    pub confirmation_id: String,

    /// 落库的集群总数
    pub clusters_persistes: usize,
}
