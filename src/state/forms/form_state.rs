//! Survey form state and conditional-section rules

use super::choice::{Choice, Direction, Frequency, Month, PlaceType, Selection, TransferMode};
use super::field::{ChoiceGroup, FieldId, FieldKind, TransferSide};

/// Route codes accepted when no allow-list is configured
pub fn default_route_codes() -> Vec<String> {
    (1..=10).map(|n| n.to_string()).collect()
}

/// Route code as typed, plus the validity computed when the field loses focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCode {
    pub value: String,
    valid: bool,
}

impl Default for RouteCode {
    fn default() -> Self {
        Self {
            value: String::new(),
            valid: true,
        }
    }
}

impl RouteCode {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Recompute validity against the allow-list. An empty code is not flagged.
    pub fn validate(&mut self, allow_list: &[String]) -> bool {
        self.valid = self.value.is_empty() || allow_list.iter().any(|c| c == &self.value);
        self.valid
    }

    /// Take a value from the pick-list; listed values are valid by construction
    pub fn pick(&mut self, value: String) {
        self.value = value;
        self.valid = true;
    }
}

/// Hour and minute picked separately
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: Option<u8>,
    pub minute: Option<u8>,
}

impl ClockTime {
    #[cfg(test)]
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
        }
    }

    /// `HH:MM`, with an unset part left empty
    pub fn display(&self) -> String {
        format!("{}:{}", two_digits(self.hour), two_digits(self.minute))
    }
}

fn two_digits(value: Option<u8>) -> String {
    value.map(|v| format!("{v:02}")).unwrap_or_default()
}

/// Transfer sub-form: a two-state machine.
///
/// The mode and location only exist while the section is enabled, so
/// disabling it discards them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TransferSection {
    #[default]
    Disabled,
    Enabled {
        mode: Selection<TransferMode>,
        location: String,
    },
}

impl TransferSection {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        match (enabled, self.is_enabled()) {
            (true, false) => {
                *self = Self::Enabled {
                    mode: Selection::default(),
                    location: String::new(),
                }
            }
            (false, true) => *self = Self::Disabled,
            _ => {}
        }
    }

    pub fn mode(&self) -> Option<TransferMode> {
        match self {
            Self::Enabled { mode, .. } => mode.get(),
            Self::Disabled => None,
        }
    }

    pub fn mode_mut(&mut self) -> Option<&mut Selection<TransferMode>> {
        match self {
            Self::Enabled { mode, .. } => Some(mode),
            Self::Disabled => None,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Self::Enabled { location, .. } => location,
            Self::Disabled => "",
        }
    }

    pub fn location_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Enabled { location, .. } => Some(location),
            Self::Disabled => None,
        }
    }
}

/// The record in progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub interviewer_id: String,
    pub route: RouteCode,
    pub day: Option<u8>,
    pub month: Selection<Month>,
    pub direction: Selection<Direction>,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub interview_time: ClockTime,
    pub origin: String,
    pub origin_type: Selection<PlaceType>,
    pub destination: String,
    pub dest_type: Selection<PlaceType>,
    pub transfer_from: TransferSection,
    pub transfer_to: TransferSection,
    pub frequency: Selection<Frequency>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transfer(&self, side: TransferSide) -> &TransferSection {
        match side {
            TransferSide::From => &self.transfer_from,
            TransferSide::To => &self.transfer_to,
        }
    }

    fn transfer_mut(&mut self, side: TransferSide) -> &mut TransferSection {
        match side {
            TransferSide::From => &mut self.transfer_from,
            TransferSide::To => &mut self.transfer_to,
        }
    }

    /// Enable or disable a transfer section. Disabling clears its mode and location.
    pub fn set_transfer_enabled(&mut self, side: TransferSide, enabled: bool) {
        self.transfer_mut(side).set_enabled(enabled);
    }

    /// Record the option at `index` as the sole selection of `group`.
    ///
    /// Returns false when the group takes no input (disabled transfer
    /// section) or the index is out of range.
    pub fn set_choice(&mut self, group: ChoiceGroup, index: usize) -> bool {
        match group {
            ChoiceGroup::Direction => self.direction.set_index(index),
            ChoiceGroup::OriginType => self.origin_type.set_index(index),
            ChoiceGroup::DestType => self.dest_type.set_index(index),
            ChoiceGroup::Frequency => self.frequency.set_index(index),
            ChoiceGroup::ModeFrom => self
                .transfer_from
                .mode_mut()
                .is_some_and(|m| m.set_index(index)),
            ChoiceGroup::ModeTo => self
                .transfer_to
                .mode_mut()
                .is_some_and(|m| m.set_index(index)),
        }
    }

    /// Step the selection of `group` forwards or backwards
    pub fn cycle_choice(&mut self, group: ChoiceGroup, forward: bool) {
        fn step<T: Choice>(sel: &mut Selection<T>, forward: bool) {
            if forward {
                sel.cycle_next();
            } else {
                sel.cycle_prev();
            }
        }
        match group {
            ChoiceGroup::Direction => step(&mut self.direction, forward),
            ChoiceGroup::OriginType => step(&mut self.origin_type, forward),
            ChoiceGroup::DestType => step(&mut self.dest_type, forward),
            ChoiceGroup::Frequency => step(&mut self.frequency, forward),
            ChoiceGroup::ModeFrom => {
                if let Some(mode) = self.transfer_from.mode_mut() {
                    step(mode, forward);
                }
            }
            ChoiceGroup::ModeTo => {
                if let Some(mode) = self.transfer_to.mode_mut() {
                    step(mode, forward);
                }
            }
        }
    }

    /// Option labels of a group with the index of the selected one
    pub fn choice_options(&self, group: ChoiceGroup) -> (Vec<&'static str>, Option<usize>) {
        fn options<T: Choice>(selected: Option<T>) -> (Vec<&'static str>, Option<usize>) {
            (
                T::ALL.iter().map(|o| o.label()).collect(),
                selected.map(|s| s.index()),
            )
        }
        match group {
            ChoiceGroup::Direction => options(self.direction.get()),
            ChoiceGroup::OriginType => options(self.origin_type.get()),
            ChoiceGroup::DestType => options(self.dest_type.get()),
            ChoiceGroup::Frequency => options(self.frequency.get()),
            ChoiceGroup::ModeFrom => options(self.transfer_from.mode()),
            ChoiceGroup::ModeTo => options(self.transfer_to.mode()),
        }
    }

    /// Validate the route code, as done when the route field loses focus
    pub fn validate_route_code(&mut self, allow_list: &[String]) -> bool {
        self.route.validate(allow_list)
    }

    /// Whether `field` currently accepts input
    pub fn is_field_enabled(&self, field: FieldId) -> bool {
        if !field.is_transfer_dependent() {
            return true;
        }
        field
            .transfer_side()
            .is_some_and(|side| self.transfer(side).is_enabled())
    }

    /// Mutable text of a text field; `None` for other kinds or disabled fields
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::InterviewerId => Some(&mut self.interviewer_id),
            FieldId::Route => Some(&mut self.route.value),
            FieldId::Origin => Some(&mut self.origin),
            FieldId::Destination => Some(&mut self.destination),
            FieldId::LocFrom => self.transfer_from.location_mut(),
            FieldId::LocTo => self.transfer_to.location_mut(),
            _ => None,
        }
    }

    /// Apply entry `index` of the field's pick-list
    pub fn set_pick(&mut self, field: FieldId, index: usize, route_codes: &[String]) -> bool {
        if field == FieldId::Route {
            return match route_codes.get(index) {
                Some(code) => {
                    self.route.pick(code.clone());
                    true
                }
                None => false,
            };
        }
        let Ok(value) = u8::try_from(index) else {
            return false;
        };
        match field {
            FieldId::Day if value < 31 => {
                self.day = Some(value + 1);
                true
            }
            FieldId::Month => self.month.set_index(index),
            FieldId::StartHour if value < 24 => set_some(&mut self.start_time.hour, value),
            FieldId::EndHour if value < 24 => set_some(&mut self.end_time.hour, value),
            FieldId::InterviewHour if value < 24 => set_some(&mut self.interview_time.hour, value),
            FieldId::StartMinute if value < 60 => set_some(&mut self.start_time.minute, value),
            FieldId::EndMinute if value < 60 => set_some(&mut self.end_time.minute, value),
            FieldId::InterviewMinute if value < 60 => {
                set_some(&mut self.interview_time.minute, value)
            }
            _ => false,
        }
    }

    /// Index of the current value within the field's pick-list
    pub fn pick_index(&self, field: FieldId, route_codes: &[String]) -> Option<usize> {
        let index = |v: Option<u8>| v.map(usize::from);
        match field {
            FieldId::Route => route_codes.iter().position(|c| c == &self.route.value),
            FieldId::Day => self.day.map(|d| usize::from(d).saturating_sub(1)),
            FieldId::Month => self.month.get().map(|m| m.index()),
            FieldId::StartHour => index(self.start_time.hour),
            FieldId::StartMinute => index(self.start_time.minute),
            FieldId::EndHour => index(self.end_time.hour),
            FieldId::EndMinute => index(self.end_time.minute),
            FieldId::InterviewHour => index(self.interview_time.hour),
            FieldId::InterviewMinute => index(self.interview_time.minute),
            _ => None,
        }
    }

    /// Current value of a text or pick field as shown on screen
    pub fn display_value(&self, field: FieldId) -> String {
        match field {
            FieldId::InterviewerId => self.interviewer_id.clone(),
            FieldId::Route => self.route.value.clone(),
            FieldId::Day => two_digits(self.day),
            FieldId::Month => self.month.label().to_string(),
            FieldId::StartHour => two_digits(self.start_time.hour),
            FieldId::StartMinute => two_digits(self.start_time.minute),
            FieldId::EndHour => two_digits(self.end_time.hour),
            FieldId::EndMinute => two_digits(self.end_time.minute),
            FieldId::InterviewHour => two_digits(self.interview_time.hour),
            FieldId::InterviewMinute => two_digits(self.interview_time.minute),
            FieldId::Origin => self.origin.clone(),
            FieldId::Destination => self.destination.clone(),
            FieldId::LocFrom => self.transfer_from.location().to_string(),
            FieldId::LocTo => self.transfer_to.location().to_string(),
            _ => String::new(),
        }
    }

    /// Date column: the form has no year, it comes from the save time
    pub fn date_display(&self, year: i32) -> String {
        format!("{}-{}-{}", two_digits(self.day), self.month.label(), year)
    }

    /// Next field after `from` that accepts input, wrapping around
    pub fn next_enabled_field(&self, from: FieldId) -> FieldId {
        let count = FieldId::ALL.len();
        let start = from.position();
        (1..=count)
            .map(|step| FieldId::ALL[(start + step) % count])
            .find(|f| self.is_field_enabled(*f))
            .unwrap_or(from)
    }

    /// Previous field before `from` that accepts input, wrapping around
    pub fn prev_enabled_field(&self, from: FieldId) -> FieldId {
        let count = FieldId::ALL.len();
        let start = from.position();
        (1..=count)
            .map(|step| FieldId::ALL[(start + count - step) % count])
            .find(|f| self.is_field_enabled(*f))
            .unwrap_or(from)
    }
}

fn set_some(slot: &mut Option<u8>, value: u8) -> bool {
    *slot = Some(value);
    true
}

/// True when the field kind edits text through `FormState::text_mut`
pub fn is_text_kind(kind: FieldKind) -> bool {
    matches!(kind, FieldKind::Text | FieldKind::TextWithPick)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod route_code {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_every_listed_code_is_valid() {
            let codes = default_route_codes();
            for code in &codes {
                let mut route = RouteCode {
                    value: code.clone(),
                    valid: false,
                };
                assert!(route.validate(&codes), "code {code} should be valid");
            }
        }

        #[test]
        fn test_unlisted_codes_are_invalid() {
            let codes = default_route_codes();
            for value in ["0", "11", "99", "7a", " 7", "abc"] {
                let mut route = RouteCode::default();
                route.value = value.to_string();
                assert!(!route.validate(&codes), "code {value:?} should be invalid");
            }
        }

        #[test]
        fn test_empty_code_is_not_flagged() {
            let mut route = RouteCode::default();
            assert!(route.validate(&default_route_codes()));
        }

        #[test]
        fn test_typing_does_not_revalidate() {
            let mut state = FormState::new();
            state.route.value = "99".to_string();
            state.validate_route_code(&default_route_codes());
            assert!(!state.route.is_valid());

            state.text_mut(FieldId::Route).unwrap().truncate(1);
            assert_eq!(state.route.value, "9");
            assert!(!state.route.is_valid());

            state.validate_route_code(&default_route_codes());
            assert!(state.route.is_valid());
        }

        #[test]
        fn test_pick_clears_error() {
            let codes = default_route_codes();
            let mut state = FormState::new();
            state.route.value = "42".to_string();
            state.validate_route_code(&codes);
            assert!(state.set_pick(FieldId::Route, 6, &codes));
            assert_eq!(state.route.value, "7");
            assert!(state.route.is_valid());
        }
    }

    mod transfer_section {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_disabled() {
            let state = FormState::new();
            assert!(!state.transfer_from.is_enabled());
            assert!(!state.transfer_to.is_enabled());
        }

        #[test]
        fn test_disabling_clears_mode_and_location() {
            let mut state = FormState::new();
            state.set_transfer_enabled(TransferSide::From, true);
            assert!(state.set_choice(ChoiceGroup::ModeFrom, 2));
            state.text_mut(FieldId::LocFrom).unwrap().push_str("Central Station");
            assert_eq!(state.transfer_from.mode(), Some(TransferMode::Trolleybus));

            state.set_transfer_enabled(TransferSide::From, false);
            assert!(state.transfer_from.mode().is_none());
            assert_eq!(state.transfer_from.location(), "");
        }

        #[test]
        fn test_reenabling_does_not_restore_values() {
            let mut state = FormState::new();
            state.set_transfer_enabled(TransferSide::To, true);
            state.set_choice(ChoiceGroup::ModeTo, 0);
            state.text_mut(FieldId::LocTo).unwrap().push_str("Bazaar");
            state.set_transfer_enabled(TransferSide::To, false);
            state.set_transfer_enabled(TransferSide::To, true);
            assert!(state.transfer_to.mode().is_none());
            assert_eq!(state.transfer_to.location(), "");
        }

        #[test]
        fn test_enabling_twice_keeps_values() {
            let mut state = FormState::new();
            state.set_transfer_enabled(TransferSide::From, true);
            state.set_choice(ChoiceGroup::ModeFrom, 3);
            state.set_transfer_enabled(TransferSide::From, true);
            assert_eq!(state.transfer_from.mode(), Some(TransferMode::Taxi));
        }

        #[test]
        fn test_disabled_section_rejects_input() {
            let mut state = FormState::new();
            assert!(!state.set_choice(ChoiceGroup::ModeFrom, 0));
            assert!(state.text_mut(FieldId::LocFrom).is_none());
            assert!(!state.is_field_enabled(FieldId::ModeFrom));
            assert!(!state.is_field_enabled(FieldId::LocTo));
        }

        #[test]
        fn test_sections_are_independent() {
            let mut state = FormState::new();
            state.set_transfer_enabled(TransferSide::From, true);
            state.set_transfer_enabled(TransferSide::To, true);
            state.set_choice(ChoiceGroup::ModeTo, 1);
            state.set_transfer_enabled(TransferSide::From, false);
            assert_eq!(state.transfer_to.mode(), Some(TransferMode::Minibus));
        }
    }

    mod choices {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_choice_keeps_single_selection() {
            let mut state = FormState::new();
            state.set_choice(ChoiceGroup::OriginType, 0);
            state.set_choice(ChoiceGroup::OriginType, 1);
            let (labels, selected) = state.choice_options(ChoiceGroup::OriginType);
            assert_eq!(labels, vec!["Home", "Work", "School", "Other"]);
            assert_eq!(selected, Some(1));
        }

        #[test]
        fn test_groups_do_not_interfere() {
            let mut state = FormState::new();
            state.set_choice(ChoiceGroup::OriginType, 0);
            state.set_choice(ChoiceGroup::DestType, 2);
            assert_eq!(state.origin_type.get(), Some(PlaceType::Home));
            assert_eq!(state.dest_type.get(), Some(PlaceType::School));
        }

        #[test]
        fn test_cycle_choice() {
            let mut state = FormState::new();
            state.cycle_choice(ChoiceGroup::Direction, true);
            assert_eq!(state.direction.get(), Some(Direction::Inbound));
            state.cycle_choice(ChoiceGroup::Direction, false);
            assert_eq!(state.direction.get(), Some(Direction::Outbound));
        }

        #[test]
        fn test_cycle_choice_on_disabled_mode_is_noop() {
            let mut state = FormState::new();
            state.cycle_choice(ChoiceGroup::ModeTo, true);
            assert!(state.transfer_to.mode().is_none());
        }
    }

    mod picks {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_day_and_month() {
            let mut state = FormState::new();
            assert!(state.set_pick(FieldId::Day, 14, &[]));
            assert!(state.set_pick(FieldId::Month, 5, &[]));
            assert_eq!(state.date_display(2026), "15-Jun-2026");
            assert_eq!(state.pick_index(FieldId::Day, &[]), Some(14));
        }

        #[test]
        fn test_out_of_range_picks_rejected() {
            let mut state = FormState::new();
            assert!(!state.set_pick(FieldId::Day, 31, &[]));
            assert!(!state.set_pick(FieldId::StartHour, 24, &[]));
            assert!(!state.set_pick(FieldId::EndMinute, 60, &[]));
            assert!(!state.set_pick(FieldId::Origin, 0, &[]));
            assert_eq!(state, FormState::new());
        }

        #[test]
        fn test_time_display() {
            let mut state = FormState::new();
            state.set_pick(FieldId::StartHour, 8, &[]);
            state.set_pick(FieldId::StartMinute, 5, &[]);
            assert_eq!(state.start_time.display(), "08:05");
            assert_eq!(state.end_time.display(), ":");
        }

        #[test]
        fn test_unset_date_keeps_year() {
            let state = FormState::new();
            assert_eq!(state.date_display(2031), "--2031");
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_skips_disabled_transfer_fields() {
            let state = FormState::new();
            assert_eq!(
                state.next_enabled_field(FieldId::TransferFrom),
                FieldId::TransferTo
            );
            assert_eq!(
                state.prev_enabled_field(FieldId::Frequency),
                FieldId::TransferTo
            );
        }

        #[test]
        fn test_visits_enabled_transfer_fields() {
            let mut state = FormState::new();
            state.set_transfer_enabled(TransferSide::From, true);
            assert_eq!(
                state.next_enabled_field(FieldId::TransferFrom),
                FieldId::ModeFrom
            );
        }

        #[test]
        fn test_wraps_around() {
            let state = FormState::new();
            assert_eq!(
                state.next_enabled_field(FieldId::Frequency),
                FieldId::InterviewerId
            );
            assert_eq!(
                state.prev_enabled_field(FieldId::InterviewerId),
                FieldId::Frequency
            );
        }
    }
}
