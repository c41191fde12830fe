//! 应用主消息类型

use change_ttl_core::{FetchTicket, SubmitOutcome, TtlResult, TtlValues};

use super::{ModalMessage, PanelMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 在输入控件与提交按钮之间切换焦点
    ToggleFocus,

    /// TTL 面板消息
    Panel(PanelMessage),

    /// 弹窗消息
    Modal(ModalMessage),

    /// 后端任务结果
    Backend(BackendEvent),

    /// 重新读取当前 TTL
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 清除状态栏消息
    ClearStatus,

    /// 无操作
    Noop,
}

/// 后端任务结果
#[derive(Debug)]
pub enum BackendEvent {
    /// `get` 完成
    Fetched(FetchTicket, TtlResult<TtlValues>),

    /// `set`（及随后的 `get`）完成
    Submitted(SubmitOutcome),
}
