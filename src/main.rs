// ==========================================
// 通勤车队排班辅助系统 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust
// 系统定位: 决策支持系统 (排班预览由操作员最终确认)
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri-app")]
fn main() {
    use fleet_transport_aps::app::tauri_commands::*;
    use fleet_transport_aps::app::AppState;

    // 初始化日志系统
    fleet_transport_aps::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", fleet_transport_aps::APP_NAME);
    tracing::info!("系统版本: {}", fleet_transport_aps::VERSION);
    tracing::info!("==================================================");

    // 创建AppState
    tracing::info!("正在初始化AppState...");
    let app_state = AppState::with_default_config().expect("无法初始化AppState");
    tracing::info!("启动Tauri应用...");

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 助手相关命令 (11个)
            // ==========================================
            get_wizard_state,
            wizard_select_groupes,
            wizard_select_vehicules,
            wizard_set_date,
            wizard_next,
            wizard_back,
            wizard_reset,
            wizard_confirm,
            wizard_move_marker,
            wizard_set_cluster_order,
            wizard_edit_cluster_employees,

            // ==========================================
            // 选择器数据源命令 (4个)
            // ==========================================
            list_groupes_employes,
            list_sites,
            list_vehicules,
            list_groupes_deja_planifies,

            // ==========================================
            // 会话命令 (4个)
            // ==========================================
            session_login,
            session_logout,
            session_refresh,
            session_current,

            // ==========================================
            // 配置命令 (2个)
            // ==========================================
            get_config_snapshot,
            update_config,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{}", fleet_transport_aps::APP_NAME);
    println!("系统版本: {}", fleet_transport_aps::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("或者使用库模式:");
    println!("use fleet_transport_aps::app::AppState;");
}
