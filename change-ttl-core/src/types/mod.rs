//! 类型定义模块

mod response;
mod ttl;

pub use response::PluginResponse;
pub use ttl::{Ttl, TtlValues};
