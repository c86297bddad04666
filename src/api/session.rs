// ==========================================
// 通勤车队排班辅助系统 - 会话能力
// ==========================================
// 职责: 将登录会话作为显式注入的能力对象传递,
//       取代进程级全局鉴权状态
// 生命周期: login -> (refresh)* -> logout
// ==========================================

use crate::api::error::{BackendError, BackendResult};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// 登录会话
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// 用户ID
    pub user_id: String,

    /// 显示名称
    pub display_name: String,

    /// 访问令牌
    pub token: String,

    /// 过期时间
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// 会话是否已过期
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// 会话提供者契约
///
/// 由宿主注入到应用状态; 各视图通过它读取会话,
/// 而不是访问自由浮动的全局存储。
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// 登录, 建立新会话
    async fn login(&self, email: &str, password: &str) -> BackendResult<Session>;

    /// 登出, 丢弃当前会话
    async fn logout(&self) -> BackendResult<()>;

    /// 刷新当前会话的令牌与过期时间
    async fn refresh(&self) -> BackendResult<Session>;

    /// 当前会话 (未登录时为 None)
    fn current(&self) -> Option<Session>;
}

// ==========================================
// 内存会话提供者
// ==========================================

/// 内存会话提供者（本地开发与测试）
///
/// 接受任意非空凭据; 令牌为随机 UUID, 有效期固定 8 小时。
pub struct InMemorySessionProvider {
    current: Mutex<Option<Session>>,
}

impl InMemorySessionProvider {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for InMemorySessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn login(&self, email: &str, password: &str) -> BackendResult<Session> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(BackendError::Unauthorized);
        }

        let session = Session {
            user_id: Uuid::new_v4().to_string(),
            display_name: email.trim().to_string(),
            token: Uuid::new_v4().to_string(),
            expires_at: Utc::now() + Duration::hours(8),
        };
        info!(user = %session.display_name, "会话已建立");

        *self.lock() = Some(session.clone());
        Ok(session)
    }

    async fn logout(&self) -> BackendResult<()> {
        *self.lock() = None;
        info!("会话已登出");
        Ok(())
    }

    async fn refresh(&self) -> BackendResult<Session> {
        let mut guard = self.lock();
        match guard.as_mut() {
            Some(session) => {
                session.token = Uuid::new_v4().to_string();
                session.expires_at = Utc::now() + Duration::hours(8);
                Ok(session.clone())
            }
            None => Err(BackendError::Unauthorized),
        }
    }

    fn current(&self) -> Option<Session> {
        self.lock().clone()
    }
}
