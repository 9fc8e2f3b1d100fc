//! Record store: row serialization, append-only file and export

mod record;
mod share;
mod writer;

pub use record::SurveyRecord;
pub use share::{ShareTarget, SystemShare};
pub use writer::{ExportOutcome, RecordStore, DEFAULT_FILE_NAME};

#[cfg(test)]
pub use record::HEADERS;
#[cfg(test)]
pub use share::MockShareTarget;
