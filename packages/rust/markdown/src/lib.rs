//! Markdown text transforms for the client docs subsite.
//!
//! Everything here is a pure `&str -> String` function: title extraction,
//! front-matter building with YAML-safe values, Jekyll filename normalization,
//! and repair of the generator's broken navigation links.

mod links;

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

pub use links::repair_links;

// ---------------------------------------------------------------------------
// Title extraction
// ---------------------------------------------------------------------------

static FRONT_MATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Leading `---` line, lazily up to the first closing `---` line
    Regex::new(r"(?ms)\A---[ \t]*\r?\n(.*?)^---[ \t]*\r?$").expect("valid regex")
});

/// Extract a display title from markdown content.
///
/// Priority: `title:` in the leading front-matter block, then the first
/// `# ` heading. Returns `None` when neither yields a non-empty title, in
/// which case callers fall back to the file's base name.
pub fn extract_title(md: &str) -> Option<String> {
    let front_matter = FRONT_MATTER_RE.captures(md);

    if let Some(title) = front_matter
        .as_ref()
        .and_then(|caps| front_matter_title(&caps[1]))
    {
        return Some(title);
    }

    let body = match &front_matter {
        Some(caps) => &md[caps.get(0).map_or(0, |m| m.end())..],
        None => md,
    };
    first_heading(body)
}

/// `title:` value from a front-matter block, trimmed and unquoted.
fn front_matter_title(block: &str) -> Option<String> {
    static TITLE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?m)^title:(.*)$").expect("valid regex"));

    let caps = TITLE_RE.captures(block)?;
    let title = caps[1].trim().trim_matches(|c: char| c == '"' || c == '\'').trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Text of the first level-1 heading.
fn first_heading(md: &str) -> Option<String> {
    static H1_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").expect("valid regex"));

    H1_RE
        .captures_iter(md)
        .map(|c| c[1].trim().to_string())
        .find(|t| !t.is_empty())
}

// ---------------------------------------------------------------------------
// Filename normalization
// ---------------------------------------------------------------------------

/// Jekyll-style slug for a file stem.
///
/// Lowercase, with underscores turned into hyphens and a hyphen inserted at
/// each lower-to-upper camel-case boundary (`AddressApi` -> `address-api`).
/// Backs both the written page filename and every index link to it.
pub fn jekyll_slug(stem: &str) -> String {
    let mut slug = String::with_capacity(stem.len() + 4);
    let mut prev: Option<char> = None;

    for c in stem.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            slug.push('-');
        }
        if c == '_' {
            slug.push('-');
        } else {
            slug.extend(c.to_lowercase());
        }
        prev = Some(c);
    }

    slug
}

/// Destination filename for a page rendered from `stem`.
pub fn page_file_name(stem: &str) -> String {
    format!("{}.md", jekyll_slug(stem))
}

// ---------------------------------------------------------------------------
// Front matter
// ---------------------------------------------------------------------------

/// Quote a value for a YAML front-matter line.
///
/// Values with quotes, backslashes or line breaks get those characters
/// escaped; everything else is wrapped as-is.
pub fn escape_yaml_string(s: &str) -> String {
    if s.is_empty() {
        return "\"\"".to_string();
    }

    if s.contains(['"', '\\', '\n', '\r']) {
        let escaped = s
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r");
        format!("\"{escaped}\"")
    } else {
        format!("\"{s}\"")
    }
}

/// Builder for a `---`-delimited front-matter block.
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    lines: Vec<String>,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key whose value is emitted verbatim (numbers, booleans, fixed text).
    pub fn raw(mut self, key: &str, value: impl Display) -> Self {
        self.lines.push(format!("{key}: {value}"));
        self
    }

    /// Add a key whose value goes through [`escape_yaml_string`].
    pub fn quoted(mut self, key: &str, value: &str) -> Self {
        self.lines.push(format!("{key}: {}", escape_yaml_string(value)));
        self
    }

    /// Render the block, including both delimiters and a trailing newline.
    pub fn render(&self) -> String {
        let mut fm = String::from("---\n");
        for line in &self.lines {
            fm.push_str(line);
            fm.push('\n');
        }
        fm.push_str("---\n");
        fm
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
