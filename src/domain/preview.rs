// ==========================================
// 通勤车队排班辅助系统 - 排班预览聚合
// ==========================================
// 职责: 预览接口返回的根聚合, 确认前由助手独占持有
// 说明: 集合字段置于 Arc 之后, 编辑操作仅复制被触碰的
//       员工组集群列表, 其余状态按引用共享 (结构共享)
// 生命周期: 预览成功创建 -> 本地编辑 -> 确认提交或重置丢弃
// ==========================================

use crate::domain::cluster::Cluster;
use crate::domain::employee::Employee;
use crate::domain::group::EmployeeGroup;
use crate::domain::site::Site;
use crate::domain::vehicle::{DriverAssignment, Vehicle};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// 排班预览结果
///
/// 由后端预览接口计算返回，确认前仅存在于助手内存中。
/// 每次重新预览都会整体替换；助手关闭或重置时直接丢弃。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewResult {
    /// 参考日期
    pub date_reference: NaiveDate,

    /// 参与排班的员工组
    pub groupes: Arc<Vec<EmployeeGroup>>,

    /// 员工组ID -> 组内员工列表
    pub employes_par_groupe: Arc<HashMap<String, Vec<Employee>>>,

    /// 可用车辆
    pub vehicules: Arc<Vec<Vehicle>>,

    /// 在岗司机-车辆指派
    pub affectations: Arc<Vec<DriverAssignment>>,

    /// 员工组ID -> 有序集群列表（唯一可本地编辑的部分）
    pub clusters_par_groupe: HashMap<String, Arc<Vec<Cluster>>>,

    /// 站点ID -> 站点
    pub sites: Arc<HashMap<String, Site>>,
}

impl PreviewResult {
    /// 指定员工组的集群列表
    pub fn clusters(&self, groupe_id: &str) -> Option<&Arc<Vec<Cluster>>> {
        self.clusters_par_groupe.get(groupe_id)
    }

    /// 预览中的集群总数（跨员工组）
    pub fn total_clusters(&self) -> usize {
        self.clusters_par_groupe.values().map(|c| c.len()).sum()
    }
}
