// ==========================================
// 通勤车队排班辅助系统 - 员工实体
// ==========================================
// 职责: 员工主数据 (姓名/住址坐标/所属员工组)
// 说明: 助手内只读; 集群归属变更只改写 Cluster.employee_ids
// ==========================================

use crate::domain::types::GeoPoint;
use serde::{Deserialize, Serialize};

/// 员工
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// 员工ID
    pub id: String,

    /// 姓
    pub nom: String,

    /// 名
    pub prenom: String,

    /// 住址坐标
    pub domicile: GeoPoint,

    /// 所属员工组ID
    pub groupe_id: String,
}

impl Employee {
    /// 显示名称（姓 + 名）
    pub fn display_name(&self) -> String {
        format!("{} {}", self.nom, self.prenom)
    }
}
