//! TTL 面板页面

use change_ttl_core::{InputMode, Ttl};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::layout::centered_rect;
use crate::view::theme::{colors, Styles};

const PANEL_WIDTH: u16 = 52;
const PANEL_HEIGHT: u16 = 14;

/// 渲染 TTL 面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let area = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
    let block = Block::default()
        .title(format!(" {} ", texts.panel.title))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg).fg(c.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // IPv4
            Constraint::Length(1), // IPv6
            Constraint::Length(1),
            Constraint::Length(1), // 输入标签
            Constraint::Length(1), // 输入控件
            Constraint::Length(1), // 提示
            Constraint::Length(1),
            Constraint::Length(1), // 按钮
            Constraint::Length(1),
            Constraint::Min(1), // 错误行
        ])
        .split(inner);

    let values = app.panel.values();
    frame.render_widget(value_row(texts.panel.current_ipv4, values.ipv4), rows[0]);
    frame.render_widget(value_row(texts.panel.current_ipv6, values.ipv6), rows[1]);

    let label_style = if app.focus.is_input() {
        Style::default().fg(c.border_focused).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let label = Line::from(vec![
        Span::styled(texts.panel.new_ttl, label_style),
        Span::styled(format!(" ({})", texts.panel.range), Style::default().fg(c.muted)),
    ]);
    frame.render_widget(Paragraph::new(label), rows[3]);

    render_input(app, frame, rows[4]);

    let input = app.panel.input();
    if input.is_unset() {
        let hint = match input.mode() {
            InputMode::Slider => texts.panel.unset_hint_slider,
            InputMode::Text => texts.panel.unset_hint_text,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(c.muted))),
            rows[5],
        );
    }

    render_button(app, frame, rows[7]);

    if let Some(error) = app.panel.error() {
        let error = Paragraph::new(Span::styled(error, Style::default().fg(c.error)))
            .wrap(Wrap { trim: true });
        frame.render_widget(error, rows[9]);
    }
}

fn value_row(label: &str, value: u8) -> Paragraph<'_> {
    let c = colors();
    Paragraph::new(Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(c.muted)),
        Span::styled(value.to_string(), Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
    ]))
}

/// 输入控件：滑块用进度条表示，文本框显示输入内容和光标
fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let input = app.panel.input();
    let focused = app.focus.is_input();

    match input.mode() {
        InputMode::Slider => {
            let value = input
                .candidate()
                .and_then(|v| u8::try_from(v).ok())
                .unwrap_or(0);
            let ratio = f64::from(value) / f64::from(Ttl::MAX);
            let fill = if focused { c.border_focused } else { c.muted };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(fill).bg(c.border))
                .ratio(ratio)
                .label(input.display());
            frame.render_widget(gauge, area);
        }
        InputMode::Text => {
            let cursor = if focused { "▎" } else { "" };
            let style = if focused {
                Style::default().fg(c.fg).bg(c.border)
            } else {
                Style::default().fg(c.fg)
            };
            let line = format!(" {}{cursor}", input.display());
            frame.render_widget(Paragraph::new(line).style(style), area);
        }
    }
}

/// "Set New TTL" 按钮，提交期间变灰
fn render_button(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let (label, style) = if app.panel.is_submitting() {
        (texts.panel.applying, Style::default().fg(c.muted))
    } else if app.focus.is_button() {
        (
            texts.panel.set_button,
            Style::default()
                .bg(c.highlight)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (texts.panel.set_button, Style::default().fg(c.fg))
    };

    let button = Paragraph::new(Span::styled(format!("[ {label} ]"), style)).alignment(Alignment::Center);
    frame.render_widget(button, area);
}
