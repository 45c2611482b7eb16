// Handles the rendering of widgets to the terminal frame.

use super::model::{FEATURE_CARDS, FeatureCard, ServiceState, StatusPayload, ViewState};
use super::status::ErrorKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const TITLE: &str = "Strategic Space - Quantitative Trading System";

/// Main render function called every frame. Output depends only on the
/// arguments.
pub fn render(f: &mut Frame, state: &ViewState, copyright_year: i32) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(7),
            Constraint::Length(4),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_status(f, chunks[1], state);
    render_features(f, chunks[2]);
    render_footer(f, chunks[3], copyright_year);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, area: Rect, state: &ViewState) {
    let lines = match state {
        ViewState::Loading => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        ))],
        ViewState::Failed(err) => {
            let style = match err.kind() {
                ErrorKind::Network => Style::default().fg(Color::Red),
                ErrorKind::Parse => Style::default().fg(Color::Magenta),
            };
            vec![Line::from(Span::styled(format!("Error: {err}"), style))]
        }
        ViewState::Ready(payload) => status_lines(payload),
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" System Status "));

    f.render_widget(paragraph, area);
}

fn status_lines(payload: &StatusPayload) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::raw("API server: "),
        Span::styled("running", Style::default().fg(Color::Green)),
    ])];

    if let Some(data) = &payload.data {
        lines.push(service_line("Data service", &data.services.data_service));
        lines.push(service_line("Model service", &data.services.model_service));
    }
    lines
}

fn service_line(label: &'static str, state: &ServiceState) -> Line<'static> {
    let (status_symbol, text, color) = if state.is_running() {
        ("●", "running", Color::Green)
    } else {
        ("○", "not running", Color::Red)
    };

    Line::from(vec![
        Span::styled(status_symbol, Style::default().fg(color)),
        Span::raw(format!(" {label}: ")),
        Span::styled(text, Style::default().fg(color)),
    ])
}

fn render_features(f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Main Features ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, FEATURE_CARDS.len() as u32); FEATURE_CARDS.len()])
        .split(inner);

    for (card, area) in FEATURE_CARDS.iter().zip(columns.iter()) {
        render_feature_card(f, *area, card);
    }
}

// The entry action is drawn dimmed and has no key binding.
fn render_feature_card(f: &mut Frame, area: Rect, card: &FeatureCard) {
    let content = vec![
        Line::from(card.description),
        Line::from(""),
        Line::from(Span::styled(
            "[ Enter ]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )),
    ];

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", card.title)),
    );

    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, area: Rect, copyright_year: i32) {
    let lines = vec![
        Line::from(format!(
            "Strategic Space © {copyright_year} - Quantitative Trading System"
        )),
        Line::from(vec![
            Span::raw("Refresh: "),
            Span::styled("r ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("| Quit: "),
            Span::styled("q/Esc", Style::default().fg(Color::Red)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}
