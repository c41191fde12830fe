//! 测试辅助模块
//!
//! 提供 mock 后端实现。

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{TtlError, TtlResult};
use crate::traits::TtlBackend;
use crate::types::{Ttl, TtlValues};

// ===== MockTtlBackend =====

pub struct MockTtlBackend {
    values: RwLock<TtlValues>,
    get_count: RwLock<usize>,
    set_calls: RwLock<Vec<Ttl>>,
    /// 如果 Some，get 时返回此错误
    get_error: RwLock<Option<String>>,
    /// 如果 Some，set 时返回此错误
    set_error: RwLock<Option<String>>,
}

impl MockTtlBackend {
    pub fn new(values: TtlValues) -> Self {
        Self {
            values: RwLock::new(values),
            get_count: RwLock::new(0),
            set_calls: RwLock::new(Vec::new()),
            get_error: RwLock::new(None),
            set_error: RwLock::new(None),
        }
    }

    pub async fn fail_get(&self, err: Option<&str>) {
        *self.get_error.write().await = err.map(str::to_string);
    }

    pub async fn fail_set(&self, err: Option<&str>) {
        *self.set_error.write().await = err.map(str::to_string);
    }

    pub async fn get_count(&self) -> usize {
        *self.get_count.read().await
    }

    pub async fn set_calls(&self) -> Vec<Ttl> {
        self.set_calls.read().await.clone()
    }
}

impl Default for MockTtlBackend {
    fn default() -> Self {
        Self::new(TtlValues { ipv4: 64, ipv6: 64 })
    }
}

#[async_trait]
impl TtlBackend for MockTtlBackend {
    async fn get(&self) -> TtlResult<TtlValues> {
        *self.get_count.write().await += 1;
        if let Some(ref msg) = *self.get_error.read().await {
            return Err(TtlError::Backend(msg.clone()));
        }
        Ok(*self.values.read().await)
    }

    async fn set(&self, ttl: Ttl) -> TtlResult<()> {
        self.set_calls.write().await.push(ttl);
        if let Some(ref msg) = *self.set_error.read().await {
            return Err(TtlError::Backend(msg.clone()));
        }
        *self.values.write().await = TtlValues {
            ipv4: ttl.get(),
            ipv6: ttl.get(),
        };
        Ok(())
    }
}
