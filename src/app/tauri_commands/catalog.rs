use crate::app::state::AppState;

use super::common::{map_wizard_error, parse_date};

// ==========================================
// 选择器数据源命令（只读列表）
// ==========================================

/// 员工组列表
#[tauri::command(rename_all = "snake_case")]
pub async fn list_groupes_employes(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let groupes = state
        .backend
        .fetch_groupes_employes()
        .await
        .map_err(|e| map_wizard_error(e.into()))?;
    serde_json::to_string(&groupes).map_err(|e| format!("序列化失败: {}", e))
}

/// 站点列表
#[tauri::command(rename_all = "snake_case")]
pub async fn list_sites(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let sites = state
        .backend
        .fetch_sites()
        .await
        .map_err(|e| map_wizard_error(e.into()))?;
    serde_json::to_string(&sites).map_err(|e| format!("序列化失败: {}", e))
}

/// 车辆全量列表
#[tauri::command(rename_all = "snake_case")]
pub async fn list_vehicules(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let vehicules = state
        .backend
        .fetch_vehicules()
        .await
        .map_err(|e| map_wizard_error(e.into()))?;
    serde_json::to_string(&vehicules).map_err(|e| format!("序列化失败: {}", e))
}

/// 指定日期已有排班的员工组ID（选择器置灰用）
#[tauri::command(rename_all = "snake_case")]
pub async fn list_groupes_deja_planifies(
    state: tauri::State<'_, AppState>,
    date: String,
) -> Result<String, String> {
    let date = parse_date(&date)?;
    let groupe_ids = state
        .backend
        .fetch_groupes_deja_planifies(date)
        .await
        .map_err(|e| map_wizard_error(e.into()))?;
    serde_json::to_string(&groupe_ids).map_err(|e| format!("序列化失败: {}", e))
}

// ==========================================
// 会话命令
// ==========================================

/// 登录
#[tauri::command(rename_all = "snake_case")]
pub async fn session_login(
    state: tauri::State<'_, AppState>,
    email: String,
    password: String,
) -> Result<String, String> {
    let session = state
        .session
        .login(&email, &password)
        .await
        .map_err(|e| map_wizard_error(e.into()))?;
    serde_json::to_string(&session).map_err(|e| format!("序列化失败: {}", e))
}

/// 登出
#[tauri::command(rename_all = "snake_case")]
pub async fn session_logout(state: tauri::State<'_, AppState>) -> Result<(), String> {
    state
        .session
        .logout()
        .await
        .map_err(|e| map_wizard_error(e.into()))
}

/// 刷新会话
#[tauri::command(rename_all = "snake_case")]
pub async fn session_refresh(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let session = state
        .session
        .refresh()
        .await
        .map_err(|e| map_wizard_error(e.into()))?;
    serde_json::to_string(&session).map_err(|e| format!("序列化失败: {}", e))
}

/// 当前会话（未登录时返回 null）
#[tauri::command(rename_all = "snake_case")]
pub async fn session_current(state: tauri::State<'_, AppState>) -> Result<String, String> {
    serde_json::to_string(&state.session.current()).map_err(|e| format!("序列化失败: {}", e))
}
