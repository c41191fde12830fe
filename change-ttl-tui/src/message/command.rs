//! 后端命令

use change_ttl_core::{FetchTicket, Ttl};

/// Update 层请求执行的后端操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 读取 IPv4 / IPv6 TTL，结果连同票据一起送回
    FetchTtl(FetchTicket),

    /// 写入新 TTL，成功后重新读取
    SetTtl(Ttl),
}
