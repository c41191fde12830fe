//! 弹窗消息处理

use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => {
            if let Some(Modal::Success { .. }) = app.modal.close() {
                app.panel.dismiss_confirmation();
            }
        }
    }
}
