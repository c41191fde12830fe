//! TTL 面板消息类型

use change_ttl_core::InputEdit;

/// TTL 面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMessage {
    /// 编辑输入控件
    Edit(InputEdit),

    /// 提交（"Set New TTL"）
    Submit,
}
