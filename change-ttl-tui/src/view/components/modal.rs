//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::layout::centered_rect;
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Success { .. } => render_success(frame),
        Modal::Help => render_help(frame),
    }
}

fn modal_block(title: &str) -> Block<'_> {
    let c = colors();
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg).fg(c.fg))
}

/// 内容区域（去掉边框和左右留白）
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 写入成功的确认弹窗，只有一个 OK 按钮
fn render_success(frame: &mut Frame) {
    let texts = &t().modal.success;
    let c = colors();

    let area = centered_rect(46, 7, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(texts.title), area);

    let ok = Style::default()
        .bg(c.highlight)
        .fg(c.selected_fg)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled(texts.message, Style::default().fg(c.success)),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(format!("[ {} ]", texts.ok), ok)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_rect(area));
}

fn shortcut(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), Styles::hint_key()),
        Span::styled(desc.to_string(), Style::default().fg(colors().fg)),
    ])
}

/// 帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let c = colors();

    let area = centered_rect(50, 19, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(texts.help.title), area);

    let heading = Style::default().fg(c.highlight).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled(texts.help.global_shortcuts, heading),
        shortcut(keys.tab, actions.switch_focus),
        shortcut(keys.enter, actions.submit),
        shortcut(keys.refresh, actions.refresh),
        shortcut(keys.help, actions.help),
        shortcut(keys.quit, texts.common.quit),
        Line::from(""),
        Line::styled(texts.help.panel_shortcuts, heading),
        shortcut(keys.arrows, actions.adjust),
        shortcut(keys.page, actions.adjust_ten),
        shortcut(keys.home_end, actions.min_max),
        shortcut(keys.digits, actions.type_value),
        shortcut(keys.backspace, actions.delete),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner_rect(area));
}
