//! Application state and core logic

use crate::config::SurveyConfig;
use crate::error::SurveyError;
use crate::platform;
use crate::state::{
    is_text_kind, ActionButton, AppState, FieldId, FieldKind, Focus, TransferSide,
};
use crate::store::{ExportOutcome, RecordStore, ShareTarget, SurveyRecord, SystemShare};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Store the records are appended to
    pub store: RecordStore,
    /// Share collaborator used by export
    share: Box<dyn ShareTarget>,
    config: SurveyConfig,
    /// Where `config` is persisted, if anywhere
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
    /// Transient status message, cleared on the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance backed by the platform store and OS share
    pub fn new(config: SurveyConfig, config_path: Option<PathBuf>) -> Self {
        let store = RecordStore::new(platform::store_path(&config));
        Self::with_parts(config, config_path, store, Box::new(SystemShare))
    }

    pub fn with_parts(
        config: SurveyConfig,
        config_path: Option<PathBuf>,
        store: RecordStore,
        share: Box<dyn ShareTarget>,
    ) -> Self {
        let mut state = AppState::new(config.route_codes());
        if let Some(id) = &config.interviewer_id {
            state.form.interviewer_id = id.clone();
        }

        tracing::info!("Survey store at {}", store.path().display());

        Self {
            state,
            store,
            share,
            config,
            config_path,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Pick-list popup (modal)
        if self.state.picker.is_some() {
            self.handle_picker_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('s') if ctrl => {
                self.save_record();
                return Ok(());
            }
            KeyCode::Char('e') if ctrl => {
                self.export_store();
                return Ok(());
            }
            KeyCode::Tab => {
                self.state.next_focus();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.prev_focus();
                return Ok(());
            }
            _ => {}
        }

        match self.state.focus {
            Focus::ActionPanel => self.handle_action_panel_key(key),
            Focus::Field(field) => self.handle_field_key(field, key),
        }
        Ok(())
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.state.picker.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => picker.prev(),
            KeyCode::Down | KeyCode::Char('j') => picker.next(),
            KeyCode::Enter => self.state.confirm_picker(),
            KeyCode::Esc => self.state.close_picker(),
            _ => {}
        }
    }

    fn handle_action_panel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.selected_button == 0 {
                    self.state.prev_focus();
                } else {
                    self.state.prev_button();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.state.next_button(),
            KeyCode::Enter => match self.state.selected_action() {
                ActionButton::Save => self.save_record(),
                ActionButton::Export => self.export_store(),
                ActionButton::Quit => self.quit = true,
            },
            _ => {}
        }
    }

    fn handle_field_key(&mut self, field: FieldId, key: KeyEvent) {
        // Up/Down move between fields everywhere on the form
        match key.code {
            KeyCode::Up => return self.state.prev_focus(),
            KeyCode::Down => return self.state.next_focus(),
            _ => {}
        }

        let kind = field.kind();
        match kind {
            _ if is_text_kind(kind) => self.handle_text_key(field, key),
            FieldKind::Pick => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.state.open_picker(field);
                }
                _ => {}
            },
            FieldKind::Choice => self.handle_choice_key(field, key),
            FieldKind::Toggle => self.handle_toggle_key(field, key),
            _ => {}
        }
    }

    fn handle_text_key(&mut self, field: FieldId, key: KeyEvent) {
        match key.code {
            KeyCode::Enter if field.kind() == FieldKind::TextWithPick => {
                self.state.open_picker(field);
            }
            KeyCode::Enter => self.state.next_focus(),
            KeyCode::Backspace => {
                if let Some(text) = self.state.form.text_mut(field) {
                    text.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(text) = self.state.form.text_mut(field) {
                    text.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_choice_key(&mut self, field: FieldId, key: KeyEvent) {
        let Some(group) = field.choice_group() else {
            return;
        };
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.form.cycle_choice(group, false),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                self.state.form.cycle_choice(group, true)
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.state.form.set_choice(group, index);
            }
            KeyCode::Enter => self.state.next_focus(),
            _ => {}
        }
    }

    fn handle_toggle_key(&mut self, field: FieldId, key: KeyEvent) {
        let Some(side) = field.transfer_side() else {
            return;
        };
        let enabled = self.state.form.transfer(side).is_enabled();
        let target = match key.code {
            KeyCode::Char('y') => true,
            KeyCode::Char('n') => false,
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => !enabled,
            KeyCode::Enter => {
                self.state.next_focus();
                return;
            }
            _ => return,
        };
        self.set_transfer(side, target);
    }

    fn set_transfer(&mut self, side: TransferSide, enabled: bool) {
        self.state.form.set_transfer_enabled(side, enabled);
        tracing::debug!("Transfer {side:?} enabled={enabled}");
    }

    /// Validate, flatten and append the current form.
    ///
    /// The form is left as it is whatever the outcome.
    pub fn save_record(&mut self) {
        // Invoking save takes focus away from the field being edited
        self.state.blur();

        let now = Local::now().naive_local();
        let result = SurveyRecord::build(&self.state.form, now)
            .and_then(|record| self.store.append(&record));

        match result {
            Ok(()) => {
                self.status_message = Some("Record Saved!".to_string());
                self.remember_interviewer();
            }
            Err(err) => match &err {
                SurveyError::Validation { route } => {
                    tracing::info!("Save rejected, route code {route:?} not accepted");
                    self.status_message = Some(err.to_string());
                }
                _ => {
                    tracing::error!("Failed to save record: {err}");
                    self.push_error(err.to_string());
                }
            },
        }
    }

    /// Hand the store file to the share collaborator
    pub fn export_store(&mut self) {
        self.state.blur();

        match self.store.export(self.share.as_ref()) {
            Ok(ExportOutcome::Shared) => {
                self.status_message = Some(format!("Shared {}", self.store.path().display()));
            }
            Ok(ExportOutcome::PathOnly(path)) => {
                let shown = path.display().to_string();
                let msg = match self.copy_to_clipboard(&shown) {
                    Ok(()) => format!("File at: {shown} (path copied)"),
                    Err(err) => {
                        tracing::debug!("Clipboard unavailable: {err}");
                        format!("File at: {shown}")
                    }
                };
                self.status_message = Some(msg);
            }
            Err(err) => match &err {
                SurveyError::NotFound(path) => {
                    tracing::info!("Nothing to export at {}", path.display());
                    self.status_message = Some(err.to_string());
                }
                _ => {
                    tracing::error!("Export failed: {err}");
                    self.push_error(err.to_string());
                }
            },
        }
    }

    /// Keep the interviewer ID for the next session
    fn remember_interviewer(&mut self) {
        let id = self.state.form.interviewer_id.trim();
        if id.is_empty() || self.config.interviewer_id.as_deref() == Some(id) {
            return;
        }
        self.config.interviewer_id = Some(id.to_string());
        if let Some(path) = &self.config_path {
            if let Err(err) = self.config.save_to(path) {
                tracing::warn!("Could not save config: {err:#}");
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
