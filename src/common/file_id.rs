use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Identifier of a desktop file: its base filename, e.g. `firefox.desktop`.
/// This is the form the xdg command line tools expect.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopFileId(String);

impl DesktopFileId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DesktopFileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DesktopFileId {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DesktopFileId(s.into()))
    }
}

impl From<&str> for DesktopFileId {
    fn from(s: &str) -> Self {
        DesktopFileId(s.into())
    }
}
