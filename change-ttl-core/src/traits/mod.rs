//! 平台抽象 Trait 定义
//!
//! 前端只依赖这些 trait，不直接接触系统网络栈。

mod ttl_backend;

pub use ttl_backend::TtlBackend;
