//! Form domain layer
//!
//! Type-safe survey form state: option sets, field descriptors and the
//! record in progress with its conditional transfer sections.

mod choice;
mod field;
mod form_state;

pub use choice::Choice;
pub use field::{FieldId, FieldKind, TransferSide};
pub use form_state::{default_route_codes, is_text_kind, FormState};

#[cfg(test)]
pub use choice::{Direction, TransferMode};
#[cfg(test)]
pub use field::ChoiceGroup;
#[cfg(test)]
pub use form_state::ClockTime;
