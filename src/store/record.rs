//! Flattening a form snapshot into the fixed store schema

use crate::error::{Result, SurveyError};
use crate::state::{Choice, FormState};
use chrono::{Datelike, NaiveDateTime};

/// Number of columns in every row of the store
pub const COLUMN_COUNT: usize = 19;

/// Header row, written once when the store is created. Append-only store:
/// the order must not change.
pub const HEADERS: [&str; COLUMN_COUNT] = [
    "Timestamp",
    "ID",
    "Route",
    "Date",
    "Direction",
    "Start",
    "End",
    "Interview Time",
    "Origin",
    "Origin Type",
    "Dest",
    "Dest Type",
    "Transfer From?",
    "Mode From",
    "Loc From",
    "Transfer To?",
    "Mode To",
    "Loc To",
    "Frequency",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One completed interview, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRecord {
    columns: [String; COLUMN_COUNT],
}

impl SurveyRecord {
    /// Build a record from the form at save time `now`.
    ///
    /// Fails when the route code is flagged invalid. The date takes its year
    /// from `now`; the timestamp is `now` itself.
    pub fn build(state: &FormState, now: NaiveDateTime) -> Result<Self> {
        if !state.route.is_valid() {
            return Err(SurveyError::Validation {
                route: state.route.value.clone(),
            });
        }

        let yes_no = |enabled: bool| (if enabled { "Yes" } else { "No" }).to_string();
        let from = &state.transfer_from;
        let to = &state.transfer_to;

        Ok(Self {
            columns: [
                now.format(TIMESTAMP_FORMAT).to_string(),
                state.interviewer_id.clone(),
                state.route.value.clone(),
                state.date_display(now.year()),
                state.direction.label().to_string(),
                state.start_time.display(),
                state.end_time.display(),
                state.interview_time.display(),
                state.origin.clone(),
                state.origin_type.label().to_string(),
                state.destination.clone(),
                state.dest_type.label().to_string(),
                yes_no(from.is_enabled()),
                from.mode().map(|m| m.label()).unwrap_or_default().to_string(),
                from.location().to_string(),
                yes_no(to.is_enabled()),
                to.mode().map(|m| m.label()).unwrap_or_default().to_string(),
                to.location().to_string(),
                state.frequency.label().to_string(),
            ],
        })
    }

    pub fn columns(&self) -> &[String; COLUMN_COUNT] {
        &self.columns
    }

    pub fn timestamp(&self) -> &str {
        &self.columns[0]
    }
}
