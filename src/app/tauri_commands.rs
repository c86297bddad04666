// ==========================================
// 通勤车队排班辅助系统 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义, 连接前端与助手/后端契约
// ==========================================

#![cfg(feature = "tauri-app")]

mod catalog;
mod common;
mod config;
mod wizard;

pub use catalog::*;
pub use config::*;
pub use wizard::*;
