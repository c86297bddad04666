// ==========================================
// 通勤车队排班辅助系统 - 预览编辑操作
// ==========================================
// 职责: 排班预览的三个本地编辑操作
// 输入: PreviewResult + 员工组ID + 组内集群下标
// 输出: 新的 PreviewResult (结构共享, 不改写入参)
// 不变量: 编辑后组内集群序号恒为 {1..N}, 无缺口无重复
// ==========================================
// 注: 纯本地编辑, 不发网络请求; 员工归属/容量校验
//     留给服务端确认步骤
// ==========================================

use crate::domain::cluster::Cluster;
use crate::domain::preview::PreviewResult;
use crate::domain::types::GeoPoint;
use std::sync::Arc;
use tracing::debug;

/// 替换指定员工组的集群列表, 其余状态按引用共享
fn with_clusters(preview: &PreviewResult, groupe_id: &str, clusters: Vec<Cluster>) -> PreviewResult {
    let mut next = preview.clone();
    next.clusters_par_groupe
        .insert(groupe_id.to_string(), Arc::new(clusters));
    next
}

/// 员工组存在且下标有效时返回其集群列表
///
/// 组缺失或下标越界按静默空操作处理, 调用方直接返回入参克隆
/// (克隆只复制 Arc, 与入参深度相等且共享底层数据)
fn clusters_for_edit<'a>(
    preview: &'a PreviewResult,
    groupe_id: &str,
    cluster_index: usize,
) -> Option<&'a Arc<Vec<Cluster>>> {
    match preview.clusters_par_groupe.get(groupe_id) {
        Some(clusters) if cluster_index < clusters.len() => Some(clusters),
        Some(clusters) => {
            debug!(
                groupe_id,
                cluster_index,
                len = clusters.len(),
                "集群下标越界, 编辑按空操作处理"
            );
            None
        }
        None => {
            debug!(groupe_id, "员工组不存在, 编辑按空操作处理");
            None
        }
    }
}

// ==========================================
// MoveMarker - 移动停靠点
// ==========================================

/// 移动停靠点坐标
///
/// 仅替换目标集群的经纬度；序号与员工归属不受影响。
pub fn move_marker(
    preview: &PreviewResult,
    groupe_id: &str,
    cluster_index: usize,
    latitude: f64,
    longitude: f64,
) -> PreviewResult {
    let clusters = match clusters_for_edit(preview, groupe_id, cluster_index) {
        Some(clusters) => clusters,
        None => return preview.clone(),
    };

    let mut list = clusters.as_ref().clone();
    list[cluster_index].position = GeoPoint::new(latitude, longitude);
    with_clusters(preview, groupe_id, list)
}

// ==========================================
// SetOrder - 调整停靠顺序
// ==========================================

/// 调整目标集群的组内序号
///
/// `new_order` 先钳制到有效区间 `[1, N]`（越界值不拒绝）。
/// 与当前序号相同时为空操作。否则位于 `current` 与目标值之间
/// 半开区间内的其他集群整体向腾出的空位移动一格：
/// - 前移时 `[new_order, current)` 内的序号 +1
/// - 后移时 `(current, new_order]` 内的序号 -1
///
/// 最后一遍安全归一化：按序号稳定排名并重新编号 `1..N`。
/// 两遍处理（平移 + 归一化）是刻意的，即使输入序号已经
/// 残缺或重复也会收敛到合法排列。数组位置始终不变，
/// 只有 `ordre` 字段被改写。
pub fn set_order(
    preview: &PreviewResult,
    groupe_id: &str,
    cluster_index: usize,
    new_order: i64,
) -> PreviewResult {
    let clusters = match clusters_for_edit(preview, groupe_id, cluster_index) {
        Some(clusters) => clusters,
        None => return preview.clone(),
    };

    let n = clusters.len() as i64;
    let target = new_order.clamp(1, n) as u32;
    let current = clusters[cluster_index].ordre;

    if target == current {
        return preview.clone();
    }

    let mut list = clusters.as_ref().clone();

    // 平移: 让出目标位, 填补原位
    for (i, cluster) in list.iter_mut().enumerate() {
        if i == cluster_index {
            continue;
        }
        if target < current && cluster.ordre >= target && cluster.ordre < current {
            cluster.ordre += 1;
        } else if target > current && cluster.ordre > current && cluster.ordre <= target {
            cluster.ordre -= 1;
        }
    }
    list[cluster_index].ordre = target;

    renormalize_ordinals(&mut list);

    debug!(
        groupe_id,
        cluster_index, current, target, "停靠顺序已调整"
    );
    with_clusters(preview, groupe_id, list)
}

/// 按序号稳定排名并重新编号 1..N（不移动数组元素）
fn renormalize_ordinals(clusters: &mut [Cluster]) {
    let mut ranked: Vec<usize> = (0..clusters.len()).collect();
    // sort_by_key 是稳定排序: 序号重复时保持数组顺序
    ranked.sort_by_key(|&i| clusters[i].ordre);
    for (rank, &i) in ranked.iter().enumerate() {
        clusters[i].ordre = rank as u32 + 1;
    }
}

// ==========================================
// EditEmployees - 编辑集群员工
// ==========================================

/// 替换目标集群的员工ID列表
///
/// 列表原样写入：不去重、不做组归属校验、不做容量校验。
/// 这些约束由服务端在确认步骤执行。
pub fn edit_employees(
    preview: &PreviewResult,
    groupe_id: &str,
    cluster_index: usize,
    employee_ids: Vec<String>,
) -> PreviewResult {
    let clusters = match clusters_for_edit(preview, groupe_id, cluster_index) {
        Some(clusters) => clusters,
        None => return preview.clone(),
    };

    let mut list = clusters.as_ref().clone();
    list[cluster_index].employee_ids = employee_ids;
    with_clusters(preview, groupe_id, list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cluster::ordinals_contiguous;
    use crate::domain::group::EmployeeGroup;
    use crate::domain::types::{PlanningDirection, Recurrence};
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::HashMap;

    // ==========================================
    // 测试辅助函数
    // ==========================================

    fn test_cluster(ordre: u32) -> Cluster {
        Cluster {
            position: GeoPoint::new(48.85 + f64::from(ordre) * 0.01, 2.35),
            ordre,
            vehicule_id: "V001".to_string(),
            employee_ids: vec![format!("E{:03}", ordre)],
        }
    }

    fn test_groupe(id: &str) -> EmployeeGroup {
        EmployeeGroup {
            id: id.to_string(),
            nom: format!("Groupe {}", id),
            heure_debut: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            heure_fin: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            recurrence: Recurrence::unique(),
            site_id: "S001".to_string(),
            direction: PlanningDirection::Depart,
        }
    }

    /// 构造带指定集群序号的预览 (每组一个序号列表)
    fn test_preview(groups: &[(&str, &[u32])]) -> PreviewResult {
        let mut clusters_par_groupe = HashMap::new();
        let mut groupes = Vec::new();
        for (groupe_id, ordres) in groups {
            groupes.push(test_groupe(groupe_id));
            let clusters: Vec<Cluster> = ordres.iter().map(|&o| test_cluster(o)).collect();
            clusters_par_groupe.insert(groupe_id.to_string(), Arc::new(clusters));
        }

        PreviewResult {
            date_reference: NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            groupes: Arc::new(groupes),
            employes_par_groupe: Arc::new(HashMap::new()),
            vehicules: Arc::new(Vec::new()),
            affectations: Arc::new(Vec::new()),
            clusters_par_groupe,
            sites: Arc::new(HashMap::new()),
        }
    }

    fn ordres(preview: &PreviewResult, groupe_id: &str) -> Vec<u32> {
        preview.clusters(groupe_id).unwrap().iter().map(|c| c.ordre).collect()
    }

    // ==========================================
    // MoveMarker
    // ==========================================

    #[test]
    fn test_move_marker_changes_only_position() {
        let preview = test_preview(&[("G1", &[1, 2, 3]), ("G2", &[1, 2])]);
        let edited = move_marker(&preview, "G1", 1, 49.0, 3.0);

        let cluster = &edited.clusters("G1").unwrap()[1];
        assert_eq!(cluster.position, GeoPoint::new(49.0, 3.0));
        // 序号与员工不受影响
        assert_eq!(cluster.ordre, 2);
        assert_eq!(cluster.employee_ids, vec!["E002".to_string()]);

        // 组内其他集群不变
        assert_eq!(
            edited.clusters("G1").unwrap()[0],
            preview.clusters("G1").unwrap()[0]
        );
        // 其他员工组按引用共享
        assert!(Arc::ptr_eq(
            edited.clusters("G2").unwrap(),
            preview.clusters("G2").unwrap()
        ));
        // 入参未被改写
        assert_eq!(
            preview.clusters("G1").unwrap()[1].position,
            test_cluster(2).position
        );
    }

    #[test]
    fn test_move_marker_missing_group_is_noop() {
        let preview = test_preview(&[("G1", &[1, 2])]);
        let edited = move_marker(&preview, "G9", 0, 49.0, 3.0);
        assert_eq!(edited, preview);
        assert!(Arc::ptr_eq(
            edited.clusters("G1").unwrap(),
            preview.clusters("G1").unwrap()
        ));
    }

    #[test]
    fn test_move_marker_out_of_bounds_is_noop() {
        let preview = test_preview(&[("G1", &[1, 2])]);
        let edited = move_marker(&preview, "G1", 5, 49.0, 3.0);
        assert_eq!(edited, preview);
    }

    // ==========================================
    // SetOrder
    // ==========================================

    #[test]
    fn test_set_order_same_position_is_noop() {
        let preview = test_preview(&[("G1", &[1, 2, 3])]);
        let edited = set_order(&preview, "G1", 1, 2);
        assert_eq!(edited, preview);
        assert!(Arc::ptr_eq(
            edited.clusters("G1").unwrap(),
            preview.clusters("G1").unwrap()
        ));
    }

    #[test]
    fn test_set_order_move_first_to_last() {
        // 具体场景: 序号 [1,2,3], 把下标0的集群移到第3位
        // 期望 (按数组下标): idx0=3, idx1=1, idx2=2
        let preview = test_preview(&[("G1", &[1, 2, 3])]);
        let edited = set_order(&preview, "G1", 0, 3);
        assert_eq!(ordres(&edited, "G1"), vec![3, 1, 2]);
        assert!(ordinals_contiguous(edited.clusters("G1").unwrap()));
    }

    #[test]
    fn test_set_order_move_last_to_first() {
        let preview = test_preview(&[("G1", &[1, 2, 3])]);
        let edited = set_order(&preview, "G1", 2, 1);
        assert_eq!(ordres(&edited, "G1"), vec![2, 3, 1]);
    }

    #[test]
    fn test_set_order_move_middle_backward() {
        // [1,2,3,4], 下标2 (序号3) 前移到 1
        let preview = test_preview(&[("G1", &[1, 2, 3, 4])]);
        let edited = set_order(&preview, "G1", 2, 1);
        assert_eq!(ordres(&edited, "G1"), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_set_order_clamps_above_range() {
        let preview = test_preview(&[("G1", &[1, 2, 3])]);
        // 目标 99 钳制为 3
        let edited = set_order(&preview, "G1", 0, 99);
        assert_eq!(ordres(&edited, "G1"), vec![3, 1, 2]);
    }

    #[test]
    fn test_set_order_clamps_below_range() {
        let preview = test_preview(&[("G1", &[1, 2, 3])]);
        // 目标 -5 钳制为 1
        let edited = set_order(&preview, "G1", 2, -5);
        assert_eq!(ordres(&edited, "G1"), vec![2, 3, 1]);
    }

    #[test]
    fn test_set_order_preserves_invariant_exhaustively() {
        // N=5 的全部 (下标, 目标) 组合
        for idx in 0..5usize {
            for target in 1..=5i64 {
                let preview = test_preview(&[("G1", &[1, 2, 3, 4, 5])]);
                let edited = set_order(&preview, "G1", idx, target);
                let clusters = edited.clusters("G1").unwrap();
                assert!(
                    ordinals_contiguous(clusters),
                    "不变量被破坏: idx={}, target={}, ordres={:?}",
                    idx,
                    target,
                    ordres(&edited, "G1")
                );
                // 目标集群落到钳制后的位置
                assert_eq!(clusters[idx].ordre as i64, target);
            }
        }
    }

    #[test]
    fn test_set_order_repairs_malformed_ordinals() {
        // 残缺输入 (缺口 + 重复): 归一化兜底仍收敛到合法排列
        let preview = test_preview(&[("G1", &[1, 5, 5])]);
        let edited = set_order(&preview, "G1", 0, 2);
        assert!(ordinals_contiguous(edited.clusters("G1").unwrap()));
    }

    #[test]
    fn test_set_order_does_not_touch_other_groups() {
        let preview = test_preview(&[("G1", &[1, 2, 3]), ("G2", &[1, 2])]);
        let edited = set_order(&preview, "G1", 0, 3);
        assert!(Arc::ptr_eq(
            edited.clusters("G2").unwrap(),
            preview.clusters("G2").unwrap()
        ));
    }

    #[test]
    fn test_set_order_missing_group_is_noop() {
        let preview = test_preview(&[("G1", &[1, 2, 3])]);
        let edited = set_order(&preview, "G9", 0, 2);
        assert_eq!(edited, preview);
    }

    // ==========================================
    // EditEmployees
    // ==========================================

    #[test]
    fn test_edit_employees_replaces_verbatim() {
        let preview = test_preview(&[("G1", &[1, 2])]);
        let ids = vec!["E010".to_string(), "E011".to_string()];
        let edited = edit_employees(&preview, "G1", 0, ids.clone());
        assert_eq!(edited.clusters("G1").unwrap()[0].employee_ids, ids);
        // 入参不变
        assert_eq!(
            preview.clusters("G1").unwrap()[0].employee_ids,
            vec!["E001".to_string()]
        );
    }

    #[test]
    fn test_edit_employees_keeps_duplicates_and_empty() {
        let preview = test_preview(&[("G1", &[1])]);

        // 重复ID原样保留 -- 去重属于服务端确认的职责
        let dupes = vec!["E001".to_string(), "E001".to_string()];
        let edited = edit_employees(&preview, "G1", 0, dupes.clone());
        assert_eq!(edited.clusters("G1").unwrap()[0].employee_ids, dupes);

        // 空列表同样原样写入
        let emptied = edit_employees(&preview, "G1", 0, Vec::new());
        assert!(emptied.clusters("G1").unwrap()[0].employee_ids.is_empty());
    }

    #[test]
    fn test_edit_employees_missing_group_is_noop() {
        let preview = test_preview(&[("G1", &[1])]);
        let edited = edit_employees(&preview, "G9", 0, vec!["E001".to_string()]);
        assert_eq!(edited, preview);
    }
}
