//! 后端结果处理

use change_ttl_core::SubmitOutcome;

use crate::message::BackendEvent;
use crate::model::{App, Modal};

/// 把后端结果写回 Model
pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::Fetched(ticket, result) => {
            // 写入开始后才返回的旧读取结果直接丢弃，状态栏归正在进行的提交
            if app.panel.apply_fetch_for(ticket, result) {
                app.clear_status();
            }
        }
        BackendEvent::Submitted(outcome) => {
            if let SubmitOutcome::Applied { ttl, .. } = &outcome {
                log::info!("TTL set to {ttl}");
            }
            app.panel.apply_submit(outcome);
            app.clear_status();

            if let Some(confirmation) = app.panel.confirmation() {
                app.modal.show(Modal::Success { ttl: confirmation.ttl });
            }
        }
    }
}
