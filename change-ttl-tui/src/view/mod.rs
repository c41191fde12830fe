//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 面板 + 状态栏 + 弹窗
//!         mod components;         // 状态栏、弹窗
//!         mod pages;              // TTL 面板
//!         pub mod theme;          // 主题和颜色
//!
//!
//!     ┌──────────────────────────────────────────┐
//!     │ Change TTL v0.1.0                        │  标题栏
//!     ├──────────────────────────────────────────┤
//!     │        ┌──── Change TTL ────┐            │
//!     │        │ Current IPv4 TTL   │            │  TTL 面板（居中）
//!     │        │ Current IPv6 TTL   │            │
//!     │        │ New TTL (1-255)    │            │
//!     │        │ [ Set New TTL ]    │            │
//!     │        └────────────────────┘            │
//!     ├──────────────────────────────────────────┤
//!     │ Tab Switch focus │ Enter Set │ ...       │  状态栏
//!     └──────────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
