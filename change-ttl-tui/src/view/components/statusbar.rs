//! 底部状态栏组件

use change_ttl_core::InputMode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusField};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在最右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    if app.modal.is_open() {
        return vec![(keys.enter, texts.common.close), (keys.esc, texts.common.close)];
    }

    let mut hints = vec![(keys.tab, actions.switch_focus)];

    match (app.focus, app.input_mode()) {
        (FocusField::Input, InputMode::Slider) => {
            hints.push((keys.arrows, actions.adjust));
            hints.push((keys.page, actions.adjust_ten));
            hints.push((keys.home_end, actions.min_max));
        }
        (FocusField::Input, InputMode::Text) => {
            hints.push((keys.digits, actions.type_value));
            hints.push((keys.backspace, actions.delete));
        }
        (FocusField::SubmitButton, _) => {}
    }

    hints.push((keys.enter, actions.submit));
    hints.push((keys.refresh, actions.refresh));
    hints.push((keys.help, actions.help));
    hints.push((keys.quit, texts.common.quit));

    hints
}
