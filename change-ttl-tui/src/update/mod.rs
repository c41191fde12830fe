//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod panel;          // TTL 面板子消息处理
//!         mod modal;          // 弹窗子消息处理
//!         mod backend;        // 后端结果处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {...}
//!
//!
//!     update 本身不做 I/O。需要访问后端时返回一个 Command，
//!     由主循环交给 Dispatcher：
//!
//!         AppMessage::Panel(Submit)  ──▶  Some(Command::SetTtl(ttl))
//!         AppMessage::Refresh        ──▶  Some(Command::FetchTtl(ticket))
//!         其他                        ──▶  None
//!
//!     后端结果以 AppMessage::Backend(...) 的形式再次进入 update。
//!

mod backend;
mod modal;
mod panel;

use crate::i18n::t;
use crate::message::{AppMessage, Command};
use crate::model::{App, Modal};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }
        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
            None
        }
        AppMessage::Panel(panel_msg) => panel::update(app, panel_msg),
        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
            None
        }
        AppMessage::Backend(event) => {
            backend::update(app, event);
            None
        }
        AppMessage::Refresh => {
            // 提交完成后面板会自行刷新
            if app.panel.is_submitting() {
                return None;
            }
            app.set_status(t().status_bar.refreshing);
            Some(Command::FetchTtl(app.panel.begin_fetch()))
        }
        AppMessage::ShowHelp => {
            app.modal.show(Modal::Help);
            None
        }
        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }
        AppMessage::Noop => None,
    }
}
