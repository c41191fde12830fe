//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use change_ttl_core::InputEdit;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ModalMessage, PanelMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Paste(text) if !app.modal.is_open() && app.focus.is_input() => {
            edit(InputEdit::Text(text))
        }
        _ => AppMessage::Noop,
    }
}

fn edit(edit: InputEdit) -> AppMessage {
    AppMessage::Panel(PanelMessage::Edit(edit))
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 部分终端会给 '?' 带上 SHIFT
    let plain = !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    if DefaultKeymap::HELP.matches(&key) || (plain && key.code == KeyCode::Char('?')) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::CLOSE.matches(&key) {
        return AppMessage::ClearStatus;
    }

    // Tab / Shift+Tab: 切换焦点
    if DefaultKeymap::FOCUS_NEXT.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::ToggleFocus;
    }

    // 无论焦点在哪，Enter 都提交当前输入
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Panel(PanelMessage::Submit);
    }

    if app.focus.is_input() {
        handle_input_keys(key)
    } else {
        handle_button_keys(key)
    }
}

/// 弹窗打开时：Esc / Enter 关闭
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}

/// 输入控件的按键
///
/// 两种输入方式共用一套映射，控件自己忽略不适用的编辑。
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return AppMessage::Noop;
    }

    match key.code {
        KeyCode::Right | KeyCode::Up => edit(InputEdit::Increment),
        KeyCode::Left | KeyCode::Down => edit(InputEdit::Decrement),
        KeyCode::PageUp => edit(InputEdit::PageUp),
        KeyCode::PageDown => edit(InputEdit::PageDown),
        KeyCode::Home => edit(InputEdit::First),
        KeyCode::End => edit(InputEdit::Last),
        KeyCode::Backspace => edit(InputEdit::Backspace),
        KeyCode::Char(c) => edit(InputEdit::Text(c.to_string())),
        _ => AppMessage::Noop,
    }
}

/// 提交按钮的按键：空格等同于 Enter
fn handle_button_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Char(' ') if key.modifiers.is_empty() => AppMessage::Panel(PanelMessage::Submit),
        _ => AppMessage::Noop,
    }
}
