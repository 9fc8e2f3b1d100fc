//! Field descriptors for the survey form

use super::choice::{labels, Month};

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Free text that can also be filled from a pick-list
    TextWithPick,
    /// Value picked from a modal list
    Pick,
    /// Mutually exclusive option group
    Choice,
    /// Yes/No switch enabling a transfer section
    Toggle,
}

/// Exclusive-choice groups of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceGroup {
    Direction,
    OriginType,
    DestType,
    ModeFrom,
    ModeTo,
    Frequency,
}

/// Which transfer section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSide {
    From,
    To,
}

/// Every field of the form, in the order the interviewer fills them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    InterviewerId,
    Route,
    Day,
    Month,
    Direction,
    StartHour,
    StartMinute,
    EndHour,
    EndMinute,
    InterviewHour,
    InterviewMinute,
    Origin,
    OriginType,
    Destination,
    DestType,
    TransferFrom,
    ModeFrom,
    LocFrom,
    TransferTo,
    ModeTo,
    LocTo,
    Frequency,
}

impl FieldId {
    pub const ALL: [FieldId; 22] = [
        Self::InterviewerId,
        Self::Route,
        Self::Day,
        Self::Month,
        Self::Direction,
        Self::StartHour,
        Self::StartMinute,
        Self::EndHour,
        Self::EndMinute,
        Self::InterviewHour,
        Self::InterviewMinute,
        Self::Origin,
        Self::OriginType,
        Self::Destination,
        Self::DestType,
        Self::TransferFrom,
        Self::ModeFrom,
        Self::LocFrom,
        Self::TransferTo,
        Self::ModeTo,
        Self::LocTo,
        Self::Frequency,
    ];

    /// Position in `ALL`
    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InterviewerId => "Interviewer ID",
            Self::Route => "Route Code",
            Self::Day => "Date (Day)",
            Self::Month => "Date (Month)",
            Self::Direction => "Direction",
            Self::StartHour => "Trip Start (HH)",
            Self::StartMinute => "Trip Start (MM)",
            Self::EndHour => "Trip End (HH)",
            Self::EndMinute => "Trip End (MM)",
            Self::InterviewHour => "Interview Time (HH)",
            Self::InterviewMinute => "Interview Time (MM)",
            Self::Origin => "Origin",
            Self::OriginType => "Origin Type",
            Self::Destination => "Destination",
            Self::DestType => "Dest Type",
            Self::TransferFrom => "Transfer FROM another mode?",
            Self::ModeFrom => "Mode (From)",
            Self::LocFrom => "Transfer Location",
            Self::TransferTo => "Transfer TO another mode?",
            Self::ModeTo => "Mode (To)",
            Self::LocTo => "Transfer Location",
            Self::Frequency => "Frequency",
        }
    }

    /// Hint shown while a field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::InterviewerId => "Enter ID",
            Self::Route => "Select or Type...",
            Self::Day => "Day",
            Self::Month => "Month",
            Self::StartHour | Self::EndHour | Self::InterviewHour => "HH",
            Self::StartMinute | Self::EndMinute | Self::InterviewMinute => "MM",
            Self::Origin | Self::Destination | Self::LocFrom | Self::LocTo => "Street/Landmark",
            _ => "",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::InterviewerId
            | Self::Origin
            | Self::Destination
            | Self::LocFrom
            | Self::LocTo => FieldKind::Text,
            Self::Route => FieldKind::TextWithPick,
            Self::Day
            | Self::Month
            | Self::StartHour
            | Self::StartMinute
            | Self::EndHour
            | Self::EndMinute
            | Self::InterviewHour
            | Self::InterviewMinute => FieldKind::Pick,
            Self::Direction
            | Self::OriginType
            | Self::DestType
            | Self::ModeFrom
            | Self::ModeTo
            | Self::Frequency => FieldKind::Choice,
            Self::TransferFrom | Self::TransferTo => FieldKind::Toggle,
        }
    }

    pub fn choice_group(&self) -> Option<ChoiceGroup> {
        match self {
            Self::Direction => Some(ChoiceGroup::Direction),
            Self::OriginType => Some(ChoiceGroup::OriginType),
            Self::DestType => Some(ChoiceGroup::DestType),
            Self::ModeFrom => Some(ChoiceGroup::ModeFrom),
            Self::ModeTo => Some(ChoiceGroup::ModeTo),
            Self::Frequency => Some(ChoiceGroup::Frequency),
            _ => None,
        }
    }

    /// Transfer section this field belongs to, for the toggle and its dependents
    pub fn transfer_side(&self) -> Option<TransferSide> {
        match self {
            Self::TransferFrom | Self::ModeFrom | Self::LocFrom => Some(TransferSide::From),
            Self::TransferTo | Self::ModeTo | Self::LocTo => Some(TransferSide::To),
            _ => None,
        }
    }

    /// True for fields that only take input while their transfer section is enabled
    pub fn is_transfer_dependent(&self) -> bool {
        matches!(
            self,
            Self::ModeFrom | Self::LocFrom | Self::ModeTo | Self::LocTo
        )
    }

    /// Entries of the pick-list for this field; empty for fields without one
    pub fn pick_options(&self, route_codes: &[String]) -> Vec<String> {
        match self {
            Self::Route => route_codes.to_vec(),
            Self::Day => (1..=31).map(|d| format!("{d:02}")).collect(),
            Self::Month => labels::<Month>().into_iter().map(String::from).collect(),
            Self::StartHour | Self::EndHour | Self::InterviewHour => {
                (0..24).map(|h| format!("{h:02}")).collect()
            }
            Self::StartMinute | Self::EndMinute | Self::InterviewMinute => {
                (0..60).map(|m| format!("{m:02}")).collect()
            }
            _ => Vec::new(),
        }
    }
}
