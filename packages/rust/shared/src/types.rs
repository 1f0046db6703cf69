//! Core domain types for clientdocs.

use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Classification bucket for a generated reference file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Apis,
    Models,
    Requests,
    Responses,
    Other,
}

impl Category {
    /// Every category, in index/section order.
    pub const ALL: [Category; 5] = [
        Category::Apis,
        Category::Models,
        Category::Requests,
        Category::Responses,
        Category::Other,
    ];

    /// Display label used in headings, front matter and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Apis => "APIs",
            Self::Models => "Models",
            Self::Requests => "Requests",
            Self::Responses => "Responses",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// SourceDocument
// ---------------------------------------------------------------------------

/// A markdown file produced by the client generator, read once.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Path of the file inside the source directory.
    pub path: PathBuf,
    /// Raw UTF-8 text, or `None` when the file could not be read.
    pub content: Option<String>,
}

impl SourceDocument {
    /// File name including extension (e.g. `AddressApi.md`).
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Base name without extension (e.g. `AddressApi`).
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
