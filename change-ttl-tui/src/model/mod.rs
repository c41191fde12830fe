//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 只保存数据，不包含 I/O。
//! 唯一可以修改 Model 的地方是 Update 层。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 主状态
//!         mod focus;          // 焦点（输入控件 / 提交按钮）
//!         pub mod state;      // 弹窗等子状态
//!
//!
//!     App {
//!         should_quit: bool,              // 是否退出
//!         focus: FocusField,              // 当前焦点
//!         panel: PanelState,              // TTL 面板状态（来自 change-ttl-core）
//!         modal: ModalState,              // 弹窗
//!         status_message: Option<String>, // 状态栏消息
//!     }
//!
//!     面板的校验、错误行与成功确认都由 change-ttl-core::PanelState 维护，
//!     TUI 这一侧只负责焦点、弹窗和状态栏。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusField;
pub use state::{Modal, ModalState};
