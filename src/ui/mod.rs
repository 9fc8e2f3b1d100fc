//! UI module for rendering the TUI

mod components;
mod form;
mod layout;
mod widgets;

use crate::app::App;
use components::{render_error_dialog, render_picker_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame);

    form::draw_form(frame, areas.form, app);
    form::draw_action_panel(frame, areas.actions, app);
    layout::draw_status_bar(frame, areas.status, app);

    // Overlays, errors on top
    if let Some(picker) = &app.state.picker {
        render_picker_dialog(frame, picker);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurveyConfig;
    use crate::state::FieldId;
    use crate::store::{MockShareTarget, RecordStore};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        App::with_parts(
            SurveyConfig::default(),
            None,
            RecordStore::new(dir.path().join("survey_data.csv")),
            Box::new(MockShareTarget::new()),
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_draws_title_fields_and_actions() {
        let dir = TempDir::new().unwrap();
        let screen = render(&test_app(&dir));
        assert!(screen.contains("DUSHANBE's OD Survey"));
        assert!(screen.contains("Interviewer ID"));
        assert!(screen.contains("Route Code"));
        assert!(screen.contains("Save Record"));
        assert!(screen.contains("Export / Share"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        assert!(render(&app).contains("Tab:next"));
        app.status_message = Some("Record Saved!".to_string());
        let screen = render(&app);
        assert!(screen.contains("Record Saved!"));
        assert!(!screen.contains("Tab:next"));
    }

    #[test]
    fn test_error_dialog_overlay() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.push_error("Error: disk full");
        let screen = render(&app);
        assert!(screen.contains("Error: disk full"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_picker_overlay() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.state.open_picker(FieldId::Month);
        let screen = render(&app);
        assert!(screen.contains("Date (Month)"));
        assert!(screen.contains("Jan"));
    }
}
