// ==========================================
// 通勤车队排班辅助系统 - 外部接口层
// ==========================================
// 职责: 排班后端与会话的类型化契约及其内存实现
// ==========================================

pub mod dto;
pub mod error;
pub mod memory;
pub mod planning_backend;
pub mod session;

// 重导出
pub use dto::{AvailabilityQuery, ConfirmReceipt, PreviewRequest, VehicleWithDriver};
pub use error::{BackendError, BackendResult};
pub use memory::InMemoryPlanningBackend;
pub use planning_backend::PlanningBackend;
pub use session::{InMemorySessionProvider, Session, SessionProvider};
