//! Application state definitions

use super::forms::{FieldId, FormState};

/// Buttons on the action panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    Save,
    Export,
    Quit,
}

impl ActionButton {
    pub const ALL: [ActionButton; 3] = [Self::Save, Self::Export, Self::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Save => "Save Record",
            Self::Export => "Export / Share",
            Self::Quit => "Quit",
        }
    }
}

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    ActionPanel,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::InterviewerId)
    }
}

/// Open pick-list popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    pub field: FieldId,
    pub options: Vec<String>,
    pub selected: usize,
}

impl PickerState {
    pub fn next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The record in progress
    pub form: FormState,
    /// Route allow-list
    pub route_codes: Vec<String>,
    pub focus: Focus,
    /// Selected button while the action panel has focus
    pub selected_button: usize,
    /// Pick-list popup, when open
    pub picker: Option<PickerState>,
    /// Queue of errors shown one at a time in a modal dialog
    pub error_queue: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(super::forms::default_route_codes())
    }
}

impl AppState {
    pub fn new(route_codes: Vec<String>) -> Self {
        Self {
            form: FormState::new(),
            route_codes,
            focus: Focus::default(),
            selected_button: 0,
            picker: None,
            error_queue: Vec::new(),
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }

    pub fn focused_field(&self) -> Option<FieldId> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::ActionPanel => None,
        }
    }

    pub fn selected_action(&self) -> ActionButton {
        ActionButton::ALL[self.selected_button.min(ActionButton::ALL.len() - 1)]
    }

    /// Move focus, treating the move as focus loss for the field being left
    pub fn set_focus(&mut self, focus: Focus) {
        if focus != self.focus {
            self.blur();
        }
        self.focus = focus;
    }

    /// Focus-loss handling of the focused field: the route code is validated here
    pub fn blur(&mut self) {
        if self.focus == Focus::Field(FieldId::Route) {
            let valid = self.form.validate_route_code(&self.route_codes);
            tracing::debug!("Route code {:?} valid={valid}", self.form.route.value);
        }
    }

    /// Tab order: enabled fields, then the action panel
    pub fn next_focus(&mut self) {
        let next = match self.focus {
            Focus::Field(FieldId::Frequency) => Focus::ActionPanel,
            Focus::Field(field) => Focus::Field(self.form.next_enabled_field(field)),
            Focus::ActionPanel => Focus::Field(FieldId::InterviewerId),
        };
        self.set_focus(next);
    }

    pub fn prev_focus(&mut self) {
        let prev = match self.focus {
            Focus::Field(FieldId::InterviewerId) => Focus::ActionPanel,
            Focus::Field(field) => Focus::Field(self.form.prev_enabled_field(field)),
            Focus::ActionPanel => Focus::Field(FieldId::Frequency),
        };
        self.set_focus(prev);
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % ActionButton::ALL.len();
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = ActionButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Open the pick-list of `field`, preselecting its current value
    pub fn open_picker(&mut self, field: FieldId) -> bool {
        let options = field.pick_options(&self.route_codes);
        if options.is_empty() {
            return false;
        }
        let selected = self
            .form
            .pick_index(field, &self.route_codes)
            .filter(|i| *i < options.len())
            .unwrap_or(0);
        self.picker = Some(PickerState {
            field,
            options,
            selected,
        });
        true
    }

    /// Apply the highlighted entry and close the popup
    pub fn confirm_picker(&mut self) {
        if let Some(picker) = self.picker.take() {
            self.form
                .set_pick(picker.field, picker.selected, &self.route_codes);
        }
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TransferSide;

    mod errors {
        use super::*;

        #[test]
        fn test_error_queue_is_fifo() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
            state.dismiss_error();
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_default_focus_is_first_field() {
            let state = AppState::default();
            assert_eq!(state.focused_field(), Some(FieldId::InterviewerId));
        }

        #[test]
        fn test_leaving_route_validates() {
            let mut state = AppState::default();
            state.set_focus(Focus::Field(FieldId::Route));
            state.form.route.value = "99".to_string();
            assert!(state.form.route.is_valid());

            state.next_focus();
            assert_eq!(state.focused_field(), Some(FieldId::Day));
            assert!(!state.form.route.is_valid());
        }

        #[test]
        fn test_staying_on_route_does_not_validate() {
            let mut state = AppState::default();
            state.set_focus(Focus::Field(FieldId::Route));
            state.form.route.value = "99".to_string();
            state.set_focus(Focus::Field(FieldId::Route));
            assert!(state.form.route.is_valid());
        }

        #[test]
        fn test_tab_order_reaches_action_panel_and_wraps() {
            let mut state = AppState::default();
            state.set_focus(Focus::Field(FieldId::Frequency));
            state.next_focus();
            assert_eq!(state.focus, Focus::ActionPanel);
            state.next_focus();
            assert_eq!(state.focused_field(), Some(FieldId::InterviewerId));
            state.prev_focus();
            assert_eq!(state.focus, Focus::ActionPanel);
        }

        #[test]
        fn test_tab_skips_disabled_transfer_fields() {
            let mut state = AppState::default();
            state.set_focus(Focus::Field(FieldId::TransferFrom));
            state.next_focus();
            assert_eq!(state.focused_field(), Some(FieldId::TransferTo));

            state.form.set_transfer_enabled(TransferSide::To, true);
            state.next_focus();
            assert_eq!(state.focused_field(), Some(FieldId::ModeTo));
        }

        #[test]
        fn test_buttons_wrap() {
            let mut state = AppState::default();
            state.prev_button();
            assert_eq!(state.selected_action(), ActionButton::Quit);
            state.next_button();
            assert_eq!(state.selected_action(), ActionButton::Save);
        }
    }

    mod picker {
        use super::*;

        #[test]
        fn test_open_preselects_current_value() {
            let mut state = AppState::default();
            state.form.set_pick(FieldId::Month, 10, &[]);
            assert!(state.open_picker(FieldId::Month));
            let picker = state.picker.as_ref().unwrap();
            assert_eq!(picker.options.len(), 12);
            assert_eq!(picker.selected, 10);
        }

        #[test]
        fn test_no_picker_for_text_or_choice_fields() {
            let mut state = AppState::default();
            assert!(!state.open_picker(FieldId::Origin));
            assert!(!state.open_picker(FieldId::Direction));
            assert!(state.picker.is_none());
        }

        #[test]
        fn test_navigation_wraps() {
            let mut state = AppState::default();
            state.open_picker(FieldId::Day);
            let picker = state.picker.as_mut().unwrap();
            picker.prev();
            assert_eq!(picker.selected, 30);
            picker.next();
            assert_eq!(picker.selected, 0);
        }

        #[test]
        fn test_confirm_applies_and_closes() {
            let mut state = AppState::default();
            state.open_picker(FieldId::StartHour);
            for _ in 0..8 {
                state.picker.as_mut().unwrap().next();
            }
            state.confirm_picker();
            assert!(state.picker.is_none());
            assert_eq!(state.form.start_time.hour, Some(8));
        }

        #[test]
        fn test_close_discards() {
            let mut state = AppState::default();
            state.open_picker(FieldId::EndMinute);
            state.picker.as_mut().unwrap().next();
            state.close_picker();
            assert!(state.form.end_time.minute.is_none());
        }

        #[test]
        fn test_route_pick_marks_valid() {
            let mut state = AppState::default();
            state.form.route.value = "abc".to_string();
            state.set_focus(Focus::Field(FieldId::Route));
            state.blur();
            assert!(!state.form.route.is_valid());

            state.open_picker(FieldId::Route);
            state.confirm_picker();
            assert_eq!(state.form.route.value, "1");
            assert!(state.form.route.is_valid());
        }
    }
}
