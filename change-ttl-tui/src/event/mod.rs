//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘 / 粘贴等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)        // 键盘事件
//!             Event::Paste(String)        // 粘贴（需开启 bracketed paste），作为文本输入
//!             Event::Resize(..)           // 终端大小变化，下一轮自动重绘
//!
//!             键盘事件的判断顺序：
//!                 - 有弹窗打开时，只处理关闭弹窗与强制退出
//!                 - 全局快捷键（退出、帮助、刷新、切换焦点、提交）
//!                 - 焦点位于输入控件时，转成 InputEdit
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
