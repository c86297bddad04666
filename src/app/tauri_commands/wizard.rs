use crate::app::state::AppState;

use super::common::{emit_frontend_event, map_wizard_error, parse_date};
use crate::engine::error::WizardError;

// ==========================================
// 自动排班助手相关命令
// ==========================================

/// 状态变更事件（前端据此重新渲染助手）
const EVENT_WIZARD_STATE: &str = "wizard://state-changed";

fn serialize_snapshot(
    snapshot: &crate::engine::wizard::WizardSnapshot,
) -> Result<String, String> {
    serde_json::to_string(snapshot).map_err(|e| format!("序列化失败: {}", e))
}

/// 读取助手当前状态
#[tauri::command(rename_all = "snake_case")]
pub async fn get_wizard_state(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let wizard = state.wizard.lock().await;
    serialize_snapshot(&wizard.snapshot())
}

/// 写入员工组选择（按ID解析为完整记录）
#[tauri::command(rename_all = "snake_case")]
pub async fn wizard_select_groupes(
    state: tauri::State<'_, AppState>,
    app: tauri::AppHandle,
    groupe_ids: Vec<String>,
) -> Result<String, String> {
    let groupes = state
        .backend
        .fetch_groupes_employes()
        .await
        .map_err(|e| map_wizard_error(e.into()))?;

    let mut selection = Vec::new();
    for groupe_id in &groupe_ids {
        match groupes.iter().find(|g| &g.id == groupe_id) {
            Some(groupe) => selection.push(groupe.clone()),
            None => {
                return Err(map_wizard_error(WizardError::IncompleteSelection(format!(
                    "员工组 {} 不存在",
                    groupe_id
                ))))
            }
        }
    }

    let mut wizard = state.wizard.lock().await;
    wizard.set_groupes(selection).map_err(map_wizard_error)?;

    let snapshot = wizard.snapshot();
    emit_frontend_event(&app, EVENT_WIZARD_STATE, serde_json::json!({ "step": snapshot.step }));
    serialize_snapshot(&snapshot)
}

/// 写入车辆选择
#[tauri::command(rename_all = "snake_case")]
pub async fn wizard_select_vehicules(
    state: tauri::State<'_, AppState>,
    vehicule_ids: Vec<String>,
) -> Result<String, String> {
    let mut wizard = state.wizard.lock().await;
    wizard
        .set_vehicule_ids(vehicule_ids)
        .map_err(map_wizard_error)?;
    serialize_snapshot(&wizard.snapshot())
}

/// 写入参考日期
#[tauri::command(rename_all = "snake_case")]
pub async fn wizard_set_date(
    state: tauri::State<'_, AppState>,
    date_reference: String,
) -> Result<String, String> {
    let date = parse_date(&date_reference)?;
    let mut wizard = state.wizard.lock().await;
    wizard.set_date_reference(date).map_err(map_wizard_error)?;
    serialize_snapshot(&wizard.snapshot())
}

/// 前进一步（跨网络门槛在引擎内发起）
#[tauri::command(rename_all = "snake_case")]
pub async fn wizard_next(
    state: tauri::State<'_, AppState>,
    app: tauri::AppHandle,
) -> Result<String, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.next().await.map_err(map_wizard_error)?;

    let snapshot = wizard.snapshot();
    emit_frontend_event(&app, EVENT_WIZARD_STATE, serde_json::json!({ "step": snapshot.step }));
    serialize_snapshot(&snapshot)
}

/// 回退一步
#[tauri::command(rename_all = "snake_case")]
pub async fn wizard_back(
    state: tauri::State<'_, AppState>,
    app: tauri::AppHandle,
) -> Result<String, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.back().map_err(map_wizard_error)?;

    let snapshot = wizard.snapshot();
    emit_frontend_event(&app, EVENT_WIZARD_STATE, serde_json::json!({ "step": snapshot.step }));
    serialize_snapshot(&snapshot)
}

/// 重置助手（无条件丢弃选择与未确认编辑）
#[tauri::command(rename_all = "snake_case")]
pub async fn wizard_reset(
    state: tauri::State<'_, AppState>,
    app: tauri::AppHandle,
) -> Result<String, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.reset();

    let snapshot = wizard.snapshot();
    emit_frontend_event(&app, EVENT_WIZARD_STATE, serde_json::json!({ "step": snapshot.step }));
    serialize_snapshot(&snapshot)
}

/// 确认当前预览
#[tauri::command(rename_all = "snake_case")]
pub async fn wizard_confirm(
    state: tauri::State<'_, AppState>,
    app: tauri::AppHandle,
) -> Result<String, String> {
    let mut wizard = state.wizard.lock().await;
    wizard.confirm().await.map_err(map_wizard_error)?;

    let snapshot = wizard.snapshot();
    emit_frontend_event(&app, EVENT_WIZARD_STATE, serde_json::json!({ "step": snapshot.step }));
    serialize_snapshot(&snapshot)
}

// ==========================================
// 预览编辑命令（纯本地, 不发网络请求）
// ==========================================

/// 移动停靠点坐标
#[tauri::command(rename_all = "snake_case")]
pub async fn wizard_move_marker(
    state: tauri::State<'_, AppState>,
    groupe_id: String,
    cluster_index: usize,
    latitude: f64,
    longitude: f64,
) -> Result<String, String> {
    let mut wizard = state.wizard.lock().await;
    wizard
        .move_cluster_marker(&groupe_id, cluster_index, latitude, longitude)
        .map_err(map_wizard_error)?;
    serialize_snapshot(&wizard.snapshot())
}

/// 调整停靠顺序
#[tauri::command(rename_all = "snake_case")]
pub async fn wizard_set_cluster_order(
    state: tauri::State<'_, AppState>,
    groupe_id: String,
    cluster_index: usize,
    new_order: i64,
) -> Result<String, String> {
    let mut wizard = state.wizard.lock().await;
    wizard
        .set_cluster_order(&groupe_id, cluster_index, new_order)
        .map_err(map_wizard_error)?;
    serialize_snapshot(&wizard.snapshot())
}

/// 编辑集群员工列表
#[tauri::command(rename_all = "snake_case")]
pub async fn wizard_edit_cluster_employees(
    state: tauri::State<'_, AppState>,
    groupe_id: String,
    cluster_index: usize,
    employee_ids: Vec<String>,
) -> Result<String, String> {
    let mut wizard = state.wizard.lock().await;
    wizard
        .edit_cluster_employees(&groupe_id, cluster_index, employee_ids)
        .map_err(map_wizard_error)?;
    serialize_snapshot(&wizard.snapshot())
}
