// ==========================================
// 通勤车队排班辅助系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写与快照
// 存储: 用户数据目录下的 config.json (可用环境变量覆盖路径)
// ==========================================

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

/// 配置路径环境变量
pub const CONFIG_PATH_ENV: &str = "FLEET_APS_CONFIG_PATH";

// ==========================================
// 配置模型
// ==========================================

/// 可用车辆探测时间窗
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FenetreDisponibilite {
    pub debut: NaiveTime,
    pub fin: NaiveTime,
}

impl Default for FenetreDisponibilite {
    fn default() -> Self {
        // 后端约定的默认探测时段
        Self {
            debut: NaiveTime::from_hms_opt(6, 0, 0).unwrap_or(NaiveTime::MIN),
            fin: NaiveTime::from_hms_opt(20, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 界面语言（"zh-CN" 或 "en"）
    pub locale: String,

    /// 可用车辆探测时间窗
    pub fenetre_disponibilite: FenetreDisponibilite,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "zh-CN".to_string(),
            fenetre_disponibilite: FenetreDisponibilite::default(),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================

pub struct ConfigManager {
    path: PathBuf,
    config: Mutex<AppConfig>,
}

impl ConfigManager {
    /// 从指定路径加载配置
    ///
    /// 文件不存在时使用默认配置（首次启动场景）；
    /// 文件损坏时记录警告并回退默认配置, 不阻塞启动。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let config = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<AppConfig>(&raw) {
                Ok(config) => {
                    info!(path = %path.display(), "配置已加载");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "配置解析失败, 使用默认配置");
                    AppConfig::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "配置文件不存在, 使用默认配置");
                AppConfig::default()
            }
        };

        Self {
            path,
            config: Mutex::new(config),
        }
    }

    /// 使用默认路径加载配置
    pub fn load_default() -> Self {
        Self::load(get_default_config_path())
    }

    fn lock(&self) -> MutexGuard<'_, AppConfig> {
        match self.config.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// 可用车辆探测时间窗
    pub fn fenetre_disponibilite(&self) -> (NaiveTime, NaiveTime) {
        let config = self.lock();
        (
            config.fenetre_disponibilite.debut,
            config.fenetre_disponibilite.fin,
        )
    }

    /// 界面语言
    pub fn locale(&self) -> String {
        self.lock().locale.clone()
    }

    /// 覆写配置并持久化
    pub fn update(&self, config: AppConfig) -> Result<(), Box<dyn Error>> {
        {
            let mut guard = self.lock();
            *guard = config;
        }
        self.save()
    }

    /// 持久化当前配置
    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&*self.lock())?;
        std::fs::write(&self.path, raw)?;
        info!(path = %self.path.display(), "配置已保存");
        Ok(())
    }

    /// 配置快照（JSON 格式, 供前端设置页与操作追踪使用）
    pub fn snapshot(&self) -> serde_json::Value {
        let config = self.lock();
        json!({
            "path": self.path.display().to_string(),
            "config": &*config,
        })
    }
}

// ==========================================
// 默认配置路径
// ==========================================

/// 获取默认配置文件路径
///
/// # 返回
/// - 环境变量 `FLEET_APS_CONFIG_PATH` 显式指定时优先
/// - 开发环境: 用户数据目录/fleet-transport-aps-dev/config.json
/// - 生产环境: 用户数据目录/fleet-transport-aps/config.json
pub fn get_default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    let mut path = PathBuf::from("./config.json");
    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("fleet-transport-aps-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("fleet-transport-aps");
        }

        std::fs::create_dir_all(&path).ok();
        path = path.join("config.json");
    }

    path
}
