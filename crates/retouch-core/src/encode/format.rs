//! Encode targets and their file metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RetouchError;

/// The closed set of output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy JPEG. Alpha is flattened onto black.
    #[default]
    #[serde(alias = "jpg")]
    Jpeg,
    /// Lossless PNG. Quality is ignored.
    Png,
    /// Lossy WebP.
    WebP,
}

impl OutputFormat {
    /// Whether the quality factor affects the output.
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpeg | OutputFormat::WebP)
    }

    /// Lowercase tag used by the UI ("jpeg", "png", "webp").
    pub fn tag(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::WebP => "WebP",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }

    /// File extension for downloads. Matches the tag.
    pub fn extension(self) -> &'static str {
        self.tag()
    }
}

impl FromStr for OutputFormat {
    type Err = RetouchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "jpeg" | "jpg" | "image/jpeg" => Ok(OutputFormat::Jpeg),
            "png" | "image/png" => Ok(OutputFormat::Png),
            "webp" | "image/webp" => Ok(OutputFormat::WebP),
            _ => Err(RetouchError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
