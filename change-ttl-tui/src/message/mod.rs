//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 用户按键和后端返回的结果都翻译成 Message，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod panel;          // TTL 面板子消息
//!         mod modal;          // 弹窗子消息
//!         mod command;        // Update 层发往 Backend 层的命令
//!
//!
//!     消息的来源有两个：
//!         · src/event/handler.rs      键盘 / 粘贴事件 → AppMessage
//!         · src/backend/dispatcher.rs 后端任务结束 → AppMessage::Backend(...)
//!
//!     反方向上，update() 返回 Option<Command>，
//!     主循环把 Command 交给 Dispatcher 异步执行。
//!

mod app;
mod command;
mod modal;
mod panel;

pub use app::{AppMessage, BackendEvent};
pub use command::Command;
pub use modal::ModalMessage;
pub use panel::PanelMessage;
