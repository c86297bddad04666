// ==========================================
// 通勤车队排班辅助系统 - 车辆与司机指派
// ==========================================
// 职责: 车辆主数据与司机-车辆在岗指派
// 说明: 助手内只读 (仅选择, 不编辑)
// ==========================================

use serde::{Deserialize, Serialize};

/// 车辆
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// 车辆ID
    pub id: String,

    /// 车牌号
    pub immatriculation: String,

    /// 座位容量
    pub capacite: u32,

    /// 是否可用
    pub disponible: bool,
}

/// 司机-车辆在岗指派
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverAssignment {
    /// 司机ID
    pub chauffeur_id: String,

    /// 司机显示名称
    pub chauffeur_nom: String,

    /// 指派车辆ID
    pub vehicule_id: String,
}
