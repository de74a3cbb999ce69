//! Rendering of successful checksums.
//!
//! - Text: one `<encoded>  <label>` line per entry (two spaces, like `sha256sum`)
//! - JSON: a pretty-printed array of `{"file": .., "crc64": ..}` objects
//!
//! Failures are not rendered here; they are reported on stderr by the caller.

use serde::Serialize;

use crate::batch::Entry;
use crate::checksum::Encoding;
use crate::config::{OutputConfig, OutputFormat};

/// One element of the JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Source label (path or `stdin`).
    pub file: String,
    /// Encoded checksum.
    pub crc64: String,
}

impl ReportEntry {
    /// Encodes an entry for output.
    pub fn new(entry: &Entry, encoding: Encoding) -> Self {
        Self {
            file: entry.label.clone(),
            crc64: entry.checksum.encode(encoding),
        }
    }
}

/// Formats a single text line, without the trailing newline.
///
/// # Example
///
/// ```
/// use s3crc::batch::Entry;
/// use s3crc::report::text_line;
/// use s3crc::{Checksum, Encoding};
///
/// let entry = Entry { label: "stdin".into(), checksum: Checksum::new(0) };
/// assert_eq!(text_line(&entry, Encoding::Hex), "0000000000000000  stdin");
/// ```
pub fn text_line(entry: &Entry, encoding: Encoding) -> String {
    format!("{}  {}", entry.checksum.encode(encoding), entry.label)
}

/// Renders entries as newline-terminated text lines.
pub fn render_text<'a, I>(entries: I, encoding: Encoding) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().fold(String::new(), |mut out, entry| {
        out.push_str(&text_line(entry, encoding));
        out.push('\n');
        out
    })
}

/// Renders entries as a pretty-printed JSON array, newline-terminated.
///
/// An empty batch renders as `[]`.
///
/// # Errors
///
/// Returns the serializer error if serialization fails.
pub fn render_json<'a, I>(entries: I, encoding: Encoding) -> Result<String, serde_json::Error>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let report: Vec<ReportEntry> = entries
        .into_iter()
        .map(|entry| ReportEntry::new(entry, encoding))
        .collect();
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

/// Renders entries according to `config`.
pub fn render<'a, I>(entries: I, config: &OutputConfig) -> Result<String, serde_json::Error>
where
    I: IntoIterator<Item = &'a Entry>,
{
    match config.format {
        OutputFormat::Text => Ok(render_text(entries, config.encoding)),
        OutputFormat::Json => render_json(entries, config.encoding),
    }
}
