// ==========================================
// 通勤车队排班辅助系统 - 领域层
// ==========================================
// 职责: 实体与值类型定义
// ==========================================

pub mod cluster;
pub mod employee;
pub mod group;
pub mod preview;
pub mod site;
pub mod types;
pub mod vehicle;

// 重导出常用类型
pub use cluster::{ordinals_contiguous, Cluster};
pub use employee::Employee;
pub use group::EmployeeGroup;
pub use preview::PreviewResult;
pub use site::Site;
pub use types::{GeoPoint, PlanningDirection, Recurrence, RecurrenceType};
pub use vehicle::{DriverAssignment, Vehicle};
