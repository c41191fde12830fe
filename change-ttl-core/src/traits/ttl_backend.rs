//! TTL 后端抽象 Trait

use async_trait::async_trait;

use crate::error::TtlResult;
use crate::types::{Ttl, TtlValues};

/// TTL 后端 Trait
///
/// 平台实现:
/// - Linux: `SysctlTtlService` (procfs)
/// - 测试: `MockTtlBackend`
///
/// 失败时错误的 `Display` 文本会被前端原样展示。
#[async_trait]
pub trait TtlBackend: Send + Sync {
    /// 读取当前的 IPv4 TTL 与 IPv6 hop limit
    async fn get(&self) -> TtlResult<TtlValues>;

    /// 同时设置 IPv4 TTL 与 IPv6 hop limit
    ///
    /// # Arguments
    /// * `ttl` - 已校验的 TTL 值
    async fn set(&self, ttl: Ttl) -> TtlResult<()>;
}
