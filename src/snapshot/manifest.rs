//! Dependency manifest parsing
//!
//! A manifest lists the wire types one deployable artifact depends on, one
//! entry per line, fields colon-delimited, with the qualified type name in
//! the second field. Blank lines are skipped; anything else that does not
//! parse is fatal, because a silently dropped entry would narrow the
//! fingerprint's scope without anyone noticing.

use crate::errors::WirehashError;

/// One parsed manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// 1-based line number in the manifest
    pub line_number: usize,
    /// The line exactly as it appeared
    pub raw_line: String,
    /// Qualified type name from field index 1
    pub qualified_name: String,
}

/// Parse a whole manifest into entries
pub fn parse_manifest(content: &str) -> Result<Vec<ManifestEntry>, WirehashError> {
    let mut entries = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split(':');
        let _artifact = fields.next();
        let qualified_name = fields
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| WirehashError::ManifestFormat {
                line_number,
                line: raw_line.to_string(),
            })?;

        entries.push(ManifestEntry {
            line_number,
            raw_line: raw_line.to_string(),
            qualified_name: qualified_name.to_string(),
        });
    }

    Ok(entries)
}
