// ==========================================
// 通勤车队排班辅助系统 - 站点实体
// ==========================================
// 职责: 目的站点主数据 (厂区/园区等接送目的地)
// ==========================================

use crate::domain::types::GeoPoint;
use serde::{Deserialize, Serialize};

/// 站点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// 站点ID
    pub id: String,

    /// 站点名称
    pub nom: String,

    /// 站点坐标
    pub position: GeoPoint,
}
