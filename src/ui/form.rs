//! Survey form rows and the action panel

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::platform::{EXPORT_SHORTCUT, SAVE_SHORTCUT};
use crate::state::{ActionButton, FieldId, FieldKind, Focus, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Column the values start at
const LABEL_WIDTH: usize = 29;

/// Draw every field as one row, scrolled to keep the focused one visible
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let focused = app.state.focused_field();

    let items: Vec<ListItem> = FieldId::ALL
        .iter()
        .map(|&field| ListItem::new(field_line(form, field, focused == Some(field))))
        .collect();

    let selected = focused.unwrap_or(FieldId::Frequency).position();
    render_scrollable_list(frame, area, List::new(items), selected);
}

/// One form row: label column followed by the value widget
fn field_line(form: &FormState, field: FieldId, is_active: bool) -> Line<'static> {
    let enabled = form.is_field_enabled(field);

    let label_style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if is_active { "> " } else { "  " };

    let mut spans = vec![Span::styled(
        format!("{marker}{:<LABEL_WIDTH$}", field.label()),
        label_style,
    )];
    spans.extend(value_spans(form, field, is_active, enabled));
    Line::from(spans)
}

fn value_spans(
    form: &FormState,
    field: FieldId,
    is_active: bool,
    enabled: bool,
) -> Vec<Span<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let value_style = if !enabled {
        dim
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    match field.kind() {
        FieldKind::Text | FieldKind::TextWithPick | FieldKind::Pick => {
            let value = form.display_value(field);
            let mut spans = Vec::new();
            if value.is_empty() {
                spans.push(Span::styled(
                    field.placeholder().to_string(),
                    dim.add_modifier(Modifier::ITALIC),
                ));
            } else if field == FieldId::Route && !form.route.is_valid() {
                spans.push(Span::styled(value, Style::default().fg(Color::Red)));
            } else {
                spans.push(Span::styled(value, value_style));
            }
            if is_active && field.kind() != FieldKind::Pick {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            if is_active && field.kind() != FieldKind::Text {
                spans.push(Span::styled(" ▾", dim));
            }
            if field == FieldId::Route && !form.route.is_valid() {
                spans.push(Span::styled(
                    "  Invalid Option",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
            }
            spans
        }
        FieldKind::Choice => {
            let Some(group) = field.choice_group() else {
                return Vec::new();
            };
            let (labels, selected) = form.choice_options(group);
            radio_spans(&labels, selected, value_style)
        }
        FieldKind::Toggle => {
            let on = field
                .transfer_side()
                .is_some_and(|side| form.transfer(side).is_enabled());
            radio_spans(&["Yes", "No"], Some(if on { 0 } else { 1 }), value_style)
        }
    }
}

/// Exclusive options rendered as radio buttons
fn radio_spans(labels: &[&str], selected: Option<usize>, style: Style) -> Vec<Span<'static>> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let (mark, style) = if selected == Some(i) {
                ("(•)", style.add_modifier(Modifier::BOLD))
            } else {
                ("( )", style)
            };
            Span::styled(format!("{mark} {label}  "), style)
        })
        .collect()
}

/// Draw the action buttons stacked at the top of the panel
pub fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let panel_focused = app.state.focus == Focus::ActionPanel;

    let mut constraints = vec![Constraint::Length(BUTTON_HEIGHT); ActionButton::ALL.len()];
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, button) in ActionButton::ALL.iter().enumerate() {
        let shortcut = match button {
            ActionButton::Save => Some(SAVE_SHORTCUT),
            ActionButton::Export => Some(EXPORT_SHORTCUT),
            ActionButton::Quit => None,
        };
        let is_selected = panel_focused && app.state.selected_button == idx;
        render_action_button(frame, chunks[idx], button.label(), shortcut, is_selected);
    }
}
