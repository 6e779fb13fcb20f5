//! Line-oriented point files: one point per line, comma-separated.

use std::path::Path;

use anyhow::{Context, Result, anyhow};

/// Parses point rows from text.
///
/// Each line is trimmed and blank lines are skipped. Every other line is
/// split on commas and each field parsed as `u32`. Errors name the 1-based
/// line number. Row lengths are not checked here; the point store checks
/// them against the configured dimension count.
pub fn parse_points(text: &str) -> Result<Vec<Vec<u32>>> {
    text.lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            line.split(',')
                .map(|field| {
                    let field = field.trim();
                    field
                        .parse::<u32>()
                        .map_err(|e| anyhow!("line {line_no}: invalid coordinate {field:?}: {e}"))
                })
                .collect::<Result<Vec<u32>>>()
        })
        .collect()
}

/// Reads and parses a points file.
pub fn read_points(path: &Path) -> Result<Vec<Vec<u32>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read points file: {}", path.display()))?;
    parse_points(&text).with_context(|| format!("failed to parse points file: {}", path.display()))
}

/// Writes points in the format [`read_points`] accepts.
pub fn write_points<R>(path: &Path, rows: &[R]) -> Result<()>
where
    R: AsRef<[u32]>,
{
    let mut text = String::new();
    for row in rows {
        let fields: Vec<String> = row.as_ref().iter().map(u32::to_string).collect();
        text.push_str(&fields.join(","));
        text.push('\n');
    }
    std::fs::write(path, text)
        .with_context(|| format!("failed to write points file: {}", path.display()))
}
