// ==========================================
// 通勤车队排班辅助系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态与助手实例
// 说明: 会话与后端都作为显式能力注入, 不使用全局存储
// ==========================================

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::api::memory::InMemoryPlanningBackend;
use crate::api::planning_backend::PlanningBackend;
use crate::api::session::{InMemorySessionProvider, SessionProvider};
use crate::config::config_manager::ConfigManager;
use crate::engine::notify::{TracingNotifier, WizardNotifier};
use crate::engine::wizard::AutoPlanWizard;

/// 应用状态
///
/// 在 Tauri 应用中作为全局托管状态；headless 模式下
/// 同样可以直接构造用于联调。
pub struct AppState {
    /// 配置管理器
    pub config: Arc<ConfigManager>,

    /// 排班后端（外部协作方的契约实现）
    pub backend: Arc<dyn PlanningBackend>,

    /// 会话提供者
    pub session: Arc<dyn SessionProvider>,

    /// 操作提示发布者
    pub notifier: Arc<dyn WizardNotifier>,

    /// 自动排班助手（单实例; 命令层串行访问）
    pub wizard: Mutex<AutoPlanWizard>,
}

impl AppState {
    /// 创建新的 AppState 实例
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 加载配置并应用界面语言
    /// 2. 构造后端/会话/提示的能力实现
    /// 3. 创建助手实例
    pub fn new(config: ConfigManager) -> Result<Self, String> {
        tracing::info!("初始化AppState");

        let config = Arc::new(config);
        crate::i18n::set_locale(&config.locale());

        // 本地开发与演示使用内存后端; 接入真实 REST 后端时
        // 在此替换为对应的 PlanningBackend 实现
        let backend: Arc<dyn PlanningBackend> = Arc::new(InMemoryPlanningBackend::with_demo_data());
        let session: Arc<dyn SessionProvider> = Arc::new(InMemorySessionProvider::new());
        let notifier: Arc<dyn WizardNotifier> = Arc::new(TracingNotifier);

        let wizard = AutoPlanWizard::new(
            backend.clone(),
            notifier.clone(),
            config.fenetre_disponibilite(),
        );

        tracing::info!("AppState初始化完成");
        Ok(Self {
            config,
            backend,
            session,
            notifier,
            wizard: Mutex::new(wizard),
        })
    }

    /// 使用默认配置路径创建
    pub fn with_default_config() -> Result<Self, String> {
        Self::new(ConfigManager::load_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_state_builds_wizard_with_config_window() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigManager::load(dir.path().join("config.json"));
        let state = AppState::new(config).unwrap();

        let wizard = state.wizard.lock().await;
        assert_eq!(
            wizard.step(),
            crate::engine::wizard::WizardStep::SelectGroups
        );
    }
}
