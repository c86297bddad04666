// ==========================================
// 通勤车队排班辅助系统 - 后端接口错误类型
// ==========================================
// 职责: 外部排班后端的调用错误分类
// 说明: 传输失败与服务端业务失败是不同变体,
//       上层据此决定重试提示 (换参数重试 vs 原样重试)
// ==========================================

use thiserror::Error;

/// 后端调用错误
#[derive(Error, Debug)]
pub enum BackendError {
    // ===== 传输层错误 =====
    #[error("网络错误: {0}")]
    Transport(String),

    // ===== 服务端错误 =====
    #[error("服务端错误(status={status}): {message}")]
    Server { status: u16, message: String },

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("未认证或会话已过期")]
    Unauthorized,

    // ===== 客户端解析错误 =====
    #[error("响应解析失败: {0}")]
    Decode(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}

/// Result 类型别名
pub type BackendResult<T> = Result<T, BackendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_reason() {
        let err = BackendError::Server {
            status: 503,
            message: "service indisponible".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("service indisponible"));
    }

    #[test]
    fn test_decode_from_serde() {
        let parse_err = serde_json::from_str::<u32>("not-a-number").unwrap_err();
        let err: BackendError = parse_err.into();
        assert!(matches!(err, BackendError::Decode(_)));
    }
}
