use crate::app::state::AppState;
use crate::config::config_manager::AppConfig;

// ==========================================
// 配置管理相关命令
// ==========================================

/// 配置快照（设置页渲染用）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_config_snapshot(state: tauri::State<'_, AppState>) -> Result<String, String> {
    serde_json::to_string(&state.config.snapshot()).map_err(|e| format!("序列化失败: {}", e))
}

/// 覆写配置并持久化
#[tauri::command(rename_all = "snake_case")]
pub async fn update_config(
    state: tauri::State<'_, AppState>,
    config_json: String,
) -> Result<(), String> {
    let config: AppConfig =
        serde_json::from_str(&config_json).map_err(|e| format!("配置解析失败: {}", e))?;

    crate::i18n::set_locale(&config.locale);
    state
        .config
        .update(config)
        .map_err(|e| format!("配置保存失败: {}", e))
}
