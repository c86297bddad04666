// ==========================================
// 通勤车队排班辅助系统 - 核心库
// ==========================================
// 技术栈: Tauri + Rust
// 系统定位: 决策支持系统 (排班预览由操作员最终确认)
// 说明: 数据持久化/鉴权/聚类算法由外部后端承担,
//       本库只负责助手状态机、预览编辑与接口契约
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 助手状态机与预览编辑
pub mod engine;

// 外部接口层 - 后端与会话契约
pub mod api;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    Cluster, DriverAssignment, Employee, EmployeeGroup, GeoPoint, PlanningDirection,
    PreviewResult, Recurrence, RecurrenceType, Site, Vehicle,
};

// 引擎
pub use engine::{
    AutoPlanWizard, Notice, NoticeLevel, WizardError, WizardNotifier, WizardSnapshot, WizardStep,
};

// 外部接口
pub use api::{
    AvailabilityQuery, BackendError, ConfirmReceipt, InMemoryPlanningBackend, PlanningBackend,
    PreviewRequest, Session, SessionProvider, VehicleWithDriver,
};

// 配置
pub use config::{AppConfig, ConfigManager};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "通勤车队排班辅助系统";
