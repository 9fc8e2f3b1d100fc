//! List rendering shared by the form body and the pick-list popup

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render `list` scrolled so that row `selected` is on screen.
///
/// The form passes the focused field's position, the pick-list its
/// highlighted option; both outgrow small terminals (22 fields, 60 minutes).
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected: usize) {
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, widgets::ListItem, Terminal};

    fn visible_rows(selected: usize) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(6, 4)).unwrap();
        terminal
            .draw(|frame| {
                let items: Vec<ListItem> =
                    (0..60).map(|m| ListItem::new(format!("{m:02}"))).collect();
                render_scrollable_list(frame, frame.area(), List::new(items), selected);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..4)
            .map(|y| {
                (0..6)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_first_rows_shown_for_top_selection() {
        assert_eq!(visible_rows(0), vec!["00", "01", "02", "03"]);
    }

    #[test]
    fn test_scrolls_to_last_minute() {
        assert_eq!(visible_rows(59).last().map(String::as_str), Some("59"));
    }
}
