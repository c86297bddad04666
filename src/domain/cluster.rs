// ==========================================
// 通勤车队排班辅助系统 - 停靠点集群
// ==========================================
// 职责: 员工组排班方案中的单个停靠点/车次载荷
// 不变量: 同一员工组的集群序号 `ordre` 恒为 {1..N}, 无缺口无重复
// ==========================================

use crate::domain::types::GeoPoint;
use serde::{Deserialize, Serialize};

/// 停靠点集群
///
/// 预览接口计算出的一个停靠点：地理位置 + 组内序号 + 指派车辆 +
/// 上车员工列表。确认前可在本地编辑，确认后由后端落库。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// 停靠点坐标
    pub position: GeoPoint,

    /// 组内序号（1-based, 组内连续且唯一）
    pub ordre: u32,

    /// 指派车辆ID
    pub vehicule_id: String,

    /// 上车员工ID列表
    pub employee_ids: Vec<String>,
}

impl Cluster {
    pub fn new(position: GeoPoint, ordre: u32, vehicule_id: impl Into<String>) -> Self {
        Self {
            position,
            ordre,
            vehicule_id: vehicule_id.into(),
            employee_ids: Vec::new(),
        }
    }
}

/// 检查集群序号是否满足组内不变量（恰好为 {1..N}）
pub fn ordinals_contiguous(clusters: &[Cluster]) -> bool {
    let mut seen = vec![false; clusters.len()];
    for cluster in clusters {
        let ordre = cluster.ordre as usize;
        if ordre == 0 || ordre > clusters.len() || seen[ordre - 1] {
            return false;
        }
        seen[ordre - 1] = true;
    }
    true
}
