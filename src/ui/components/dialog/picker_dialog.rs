//! Pick-list popup for fields with a fixed set of values

use super::base::{centered_area, dialog_block};
use crate::state::PickerState;
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Clear, List, ListItem},
    Frame,
};

/// Tallest the popup gets before the list scrolls
const MAX_VISIBLE: u16 = 12;

pub fn render_picker_dialog(frame: &mut Frame, picker: &PickerState) {
    let longest = picker
        .options
        .iter()
        .map(|o| o.chars().count())
        .max()
        .unwrap_or(0)
        .max(picker.field.label().len()) as u16;
    let width = longest + 8;
    let height = (picker.options.len() as u16).min(MAX_VISIBLE) + 2;

    let area = centered_area(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = picker
        .options
        .iter()
        .map(|o| ListItem::new(format!(" {o}")))
        .collect();

    let list = List::new(items)
        .block(dialog_block(picker.field.label(), Color::Cyan))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    render_scrollable_list(frame, area, list, picker.selected);
}
