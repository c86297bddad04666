// ==========================================
// 通勤车队排班辅助系统 - 助手错误类型
// ==========================================
// 职责: 排班助手的错误分类
// 说明: 三类错误走同一条提示通道但语义不同 --
//       本地校验失败不发网络请求; 空结果是业务性阻断
//       (换参数可立即重试); 后端错误原样重试即可
// ==========================================

use crate::api::error::BackendError;
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// 排班助手错误
#[derive(Error, Debug)]
pub enum WizardError {
    // ===== 本地校验错误（不发网络请求） =====
    #[error("选择不完整: {0}")]
    IncompleteSelection(String),

    #[error("无效的步骤转换: from={from} to={to}")]
    InvalidStepTransition { from: String, to: String },

    #[error("上一步操作仍在进行中")]
    OperationInFlight,

    // ===== 业务性空结果（网络调用成功但阻断推进） =====
    #[error("该时段无可用车辆: date={date}, 时间窗={heure_debut}-{heure_fin}")]
    NoVehicleAvailable {
        date: NaiveDate,
        heure_debut: NaiveTime,
        heure_fin: NaiveTime,
    },

    // ===== 后端调用错误 =====
    #[error("后端调用失败: {0}")]
    Backend(#[from] BackendError),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WizardError {
    /// 错误代码（返回给前端的稳定标识）
    pub fn code(&self) -> &'static str {
        match self {
            WizardError::IncompleteSelection(_) => "INCOMPLETE_SELECTION",
            WizardError::InvalidStepTransition { .. } => "INVALID_STEP_TRANSITION",
            WizardError::OperationInFlight => "OPERATION_IN_FLIGHT",
            WizardError::NoVehicleAvailable { .. } => "NO_VEHICLE_AVAILABLE",
            WizardError::Backend(_) => "BACKEND_ERROR",
            WizardError::Other(_) => "OTHER_ERROR",
        }
    }
}

/// Result 类型别名
pub type WizardResult<T> = Result<T, WizardError>;
