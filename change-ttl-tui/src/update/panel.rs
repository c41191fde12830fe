//! TTL 面板消息处理

use crate::i18n::t;
use crate::message::{Command, PanelMessage};
use crate::model::App;

/// 处理面板消息
pub fn update(app: &mut App, msg: PanelMessage) -> Option<Command> {
    match msg {
        PanelMessage::Edit(edit) => {
            app.panel.handle_ttl_change(edit);
            None
        }
        PanelMessage::Submit => match app.panel.begin_submit() {
            Ok(ttl) => {
                log::info!("Submitting TTL {ttl}");
                app.set_status(t().status_bar.applying);
                Some(Command::SetTtl(ttl))
            }
            // 错误行已由 PanelState 设置；Busy 时按钮本就处于禁用状态
            Err(_) => None,
        },
    }
}
