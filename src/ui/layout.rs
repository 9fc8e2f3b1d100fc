//! Layout components (title block, body, status bar)

use crate::app::App;
use crate::platform::{EXPORT_SHORTCUT, SAVE_SHORTCUT};
use crate::state::{FieldKind, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Form title shown above the fields
pub const TITLE: &str = "DUSHANBE's OD Survey";

/// Width of the action panel on the right
const ACTION_PANEL_WIDTH: u16 = 24;

/// Screen regions
pub struct ScreenAreas {
    pub form: Rect,
    pub actions: Rect,
    pub status: Rect,
}

/// Split the screen into the bordered form body, action panel and status bar
pub fn create_layout(frame: &mut Frame) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let outer = Block::default()
        .title(Span::styled(
            format!(" {TITLE} "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(chunks[0]);
    frame.render_widget(outer, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),                    // Fields
            Constraint::Length(ACTION_PANEL_WIDTH), // Actions
        ])
        .split(inner);

    ScreenAreas {
        form: body[0],
        actions: body[1],
        status: chunks[1],
    }
}

/// Draw the status bar: the status message when there is one, key hints otherwise
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    match &app.status_message {
        Some(msg) => spans.push(Span::styled(msg, status_style(msg))),
        None => spans.push(Span::styled(
            get_focus_hints(app),
            Style::default().fg(Color::Gray),
        )),
    }

    let path = format!(" {} ", app.store.path().display());
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Store location on the right when there is room for it
    let path_width = path.chars().count() as u16;
    let used = app
        .status_message
        .as_deref()
        .map_or(0, |m| m.chars().count() as u16 + 2);
    if used + path_width < area.width {
        let path_area = Rect {
            x: area.x + area.width - path_width,
            width: path_width,
            ..area
        };
        let path_widget =
            Paragraph::new(path).style(Style::default().bg(Color::DarkGray).fg(Color::Blue));
        frame.render_widget(path_widget, path_area);
    }
}

fn status_style(msg: &str) -> Style {
    if msg.starts_with("Please") || msg.starts_with("No data") {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }
}

/// Keyboard hints for whatever has focus
fn get_focus_hints(app: &App) -> String {
    let globals = format!("{SAVE_SHORTCUT}:save  {EXPORT_SHORTCUT}:export  ^C:quit");
    let local = match app.state.focus {
        Focus::ActionPanel => "j/k:select  Enter:run",
        Focus::Field(field) => match field.kind() {
            FieldKind::Text => "type to edit",
            FieldKind::TextWithPick => "type or Enter:list",
            FieldKind::Pick => "Enter:list",
            FieldKind::Choice => "←/→ or 1-9:choose",
            FieldKind::Toggle => "y/n/Space:toggle",
        },
    };
    format!("Tab:next  {local}  {globals}")
}
