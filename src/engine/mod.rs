// ==========================================
// 通勤车队排班辅助系统 - 引擎层
// ==========================================
// 职责: 助手状态机、推进门槛与预览编辑
// ==========================================

pub mod availability;
pub mod error;
pub mod notify;
pub mod preview_edit;
pub mod wizard;

// 重导出
pub use error::{WizardError, WizardResult};
pub use notify::{NoOpNotifier, Notice, NoticeLevel, RecordingNotifier, TracingNotifier, WizardNotifier};
pub use preview_edit::{edit_employees, move_marker, set_order};
pub use wizard::{AutoPlanWizard, WizardSnapshot, WizardStep};
