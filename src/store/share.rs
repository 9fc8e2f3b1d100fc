//! Trait abstraction for handing the store file to the OS, enabling mocking in tests

use anyhow::{Context, Result};
use std::path::Path;

/// Something that can take the store file and share/export it
#[cfg_attr(test, mockall::automock)]
pub trait ShareTarget {
    /// Hand `path` over to the share flow
    fn share_file(&self, path: &Path) -> Result<()>;
}

/// Opens the file with the desktop's default handler
#[derive(Debug, Default)]
pub struct SystemShare;

impl ShareTarget for SystemShare {
    fn share_file(&self, path: &Path) -> Result<()> {
        open::that_detached(path)
            .with_context(|| format!("No share handler for {}", path.display()))
    }
}
