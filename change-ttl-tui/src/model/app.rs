//! 应用主状态结构

use change_ttl_core::{InputMode, PanelState};

use super::{FocusField, ModalState};

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: FocusField,

    /// TTL 面板状态
    pub panel: PanelState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(mode: InputMode) -> Self {
        Self {
            should_quit: false,
            focus: FocusField::default(),
            panel: PanelState::new(mode),
            modal: ModalState::new(),
            status_message: None,
        }
    }

    /// 当前输入方式
    pub fn input_mode(&self) -> InputMode {
        self.panel.input().mode()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(InputMode::default())
    }
}
