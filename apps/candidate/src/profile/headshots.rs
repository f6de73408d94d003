use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;

const DEFAULT_CASUAL: &str = "🧑‍🦱";
const DEFAULT_FORMAL: &str = "💁‍♂️";

/// Two-valued selector for which headshot goes out with an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadshotStyle {
    Casual,
    Formal,
}

impl HeadshotStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            HeadshotStyle::Casual => "casual",
            HeadshotStyle::Formal => "formal",
        }
    }

    fn from_stem(stem: &str) -> Option<Self> {
        match stem {
            "casual" => Some(HeadshotStyle::Casual),
            "formal" => Some(HeadshotStyle::Formal),
            _ => None,
        }
    }
}

/// Image references keyed by style. Private to the profile.
#[derive(Clone, PartialEq, Eq)]
pub struct Headshots {
    casual: String,
    formal: String,
}

impl Default for Headshots {
    fn default() -> Self {
        Self::new(DEFAULT_CASUAL, DEFAULT_FORMAL)
    }
}

impl Headshots {
    pub fn new(casual: impl Into<String>, formal: impl Into<String>) -> Self {
        Self {
            casual: casual.into(),
            formal: formal.into(),
        }
    }

    /// Scans `dir` for files named `casual.*` / `formal.*` and uses their paths as references.
    /// A style with no matching file keeps its default reference. When several files share
    /// a stem, the lexicographically first path wins.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref();
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort();

        let mut casual = None;
        let mut formal = None;
        for path in paths {
            let Some(style) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(HeadshotStyle::from_stem)
            else {
                continue;
            };
            let slot = match style {
                HeadshotStyle::Casual => &mut casual,
                HeadshotStyle::Formal => &mut formal,
            };
            if slot.is_none() {
                debug!("Using {} for the {} headshot", path.display(), style.as_str());
                *slot = Some(path.display().to_string());
            }
        }

        Ok(Self::new(
            casual.unwrap_or_else(|| DEFAULT_CASUAL.to_string()),
            formal.unwrap_or_else(|| DEFAULT_FORMAL.to_string()),
        ))
    }

    pub fn get(&self, style: HeadshotStyle) -> &str {
        match style {
            HeadshotStyle::Casual => &self.casual,
            HeadshotStyle::Formal => &self.formal,
        }
    }
}

impl fmt::Debug for Headshots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Headshots(..)")
    }
}
