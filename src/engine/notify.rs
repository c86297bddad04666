// ==========================================
// 通勤车队排班辅助系统 - 操作提示发布
// ==========================================
// 职责: 定义非阻塞操作提示 trait, 实现依赖倒置
// 说明: 助手只负责发布提示; 桌面壳把提示适配为
//       前端 toast 事件, 无宿主时退化为日志输出
// ==========================================

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

// ==========================================
// 提示类型
// ==========================================

/// 提示级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    /// 转换为字符串标识
    pub fn as_str(&self) -> &str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// 操作提示（toast 等价物）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// 级别
    pub level: NoticeLevel,

    /// 操作员可读消息
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

// ==========================================
// 提示发布 Trait
// ==========================================

/// 提示发布者 Trait
///
/// 发布必须是非阻塞且不可失败的；任何下游问题只记日志，
/// 绝不向助手流程上抛。
pub trait WizardNotifier: Send + Sync {
    /// 发布一条操作提示
    fn notify(&self, notice: Notice);
}

/// 空操作提示发布者
///
/// 用于不需要提示的场景（如单元测试）
#[derive(Debug, Clone, Default)]
pub struct NoOpNotifier;

impl WizardNotifier for NoOpNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(
            level = notice.level.as_str(),
            message = %notice.message,
            "NoOpNotifier: 跳过提示发布"
        );
    }
}

/// 日志提示发布者
///
/// 无前端宿主（headless/CLI 调试）时把提示写入 tracing
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl WizardNotifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => {
                tracing::info!(level = notice.level.as_str(), "{}", notice.message);
            }
            NoticeLevel::Warning => tracing::warn!("{}", notice.message),
            NoticeLevel::Error => tracing::error!("{}", notice.message),
        }
    }
}

/// 记录式提示发布者
///
/// 收集全部提示供断言使用（集成测试）
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 已记录的全部提示
    pub fn notices(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 指定级别的提示条数
    pub fn count_level(&self, level: NoticeLevel) -> usize {
        self.notices().iter().filter(|n| n.level == level).count()
    }

    /// 清空记录
    pub fn clear(&self) {
        match self.notices.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl WizardNotifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        match self.notices.lock() {
            Ok(mut guard) => guard.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_constructors() {
        assert_eq!(Notice::success("ok").level, NoticeLevel::Success);
        assert_eq!(Notice::info("fyi").level, NoticeLevel::Info);
        assert_eq!(Notice::error("ko").level, NoticeLevel::Error);
    }

    #[test]
    fn test_recording_notifier_collects() {
        let recorder = RecordingNotifier::new();
        recorder.notify(Notice::success("un"));
        recorder.notify(Notice::error("deux"));

        assert_eq!(recorder.notices().len(), 2);
        assert_eq!(recorder.count_level(NoticeLevel::Error), 1);

        recorder.clear();
        assert!(recorder.notices().is_empty());
    }

    #[test]
    fn test_noop_notifier_accepts_everything() {
        let notifier = NoOpNotifier;
        notifier.notify(Notice::info("ignoré"));
    }
}
