// ==========================================
// 通勤车队排班辅助系统 - 应用层
// ==========================================
// 职责: Tauri 集成, 连接前端与引擎/接口层
// ==========================================

pub mod state;
pub mod tauri_commands;

// 重导出
pub use state::AppState;

#[cfg(feature = "tauri-app")]
pub use tauri_commands::*;
