//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责与 change-ttl-core 打交道。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置加载（JSON 文件）
//!         mod dispatcher;         // 命令调度（tokio 任务 + mpsc 回传）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 Enter 提交
//!         ↓
//!     Update 层校验输入，返回 Command::SetTtl(ttl)
//!         ↓
//!     主循环调用 Dispatcher::dispatch()
//!         ↓
//!     tokio 任务中依次执行 set(ttl) → get()
//!         ↓
//!     结果包装成 AppMessage::Backend(...) 发回主循环
//!         ↓
//!     Update 层更新 Model，View 层重新渲染
//!

mod config_service;
mod dispatcher;

pub use config_service::{default_log_path, AppConfig, ConfigService, LocalConfigService};
pub use dispatcher::Dispatcher;
