// ==========================================
// 通勤车队排班辅助系统 - 配置层
// ==========================================

pub mod config_manager;

pub use config_manager::{
    get_default_config_path, AppConfig, ConfigManager, FenetreDisponibilite, CONFIG_PATH_ENV,
};
