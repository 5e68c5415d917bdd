use std::path::{Path, PathBuf};

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::foundation::error::{StillreelError, StillreelResult};

/// One discovered frame file and the numeric key that orders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub path: PathBuf,
    pub key: u64,
}

impl Frame {
    /// Build a frame from `path`, keyed by the digits of its file name.
    pub fn from_path(path: impl Into<PathBuf>) -> StillreelResult<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                StillreelError::index_extraction(format!(
                    "'{}' has no file name",
                    path.display()
                ))
            })?;
        let key = numeric_key(&name)?;
        Ok(Self { path, key })
    }
}

/// Concatenate every decimal digit in `name` and parse the result.
///
/// `"f007.ppm"` is 7, `"a1b2.png"` is 12. Any script's decimal digits count, so `"f\u{663}5"`
/// is 35.
pub fn numeric_key(name: &str) -> StillreelResult<u64> {
    let digits: String = name
        .chars()
        .filter_map(decimal_digit_value)
        .filter_map(|d| char::from_digit(d, 10))
        .collect();
    if digits.is_empty() {
        return Err(StillreelError::index_extraction(format!(
            "'{name}' contains no digits"
        )));
    }
    digits.parse::<u64>().map_err(|_| {
        StillreelError::index_extraction(format!(
            "digits of '{name}' do not fit a 64-bit index"
        ))
    })
}

/// Value of `c` if it is a Unicode decimal digit (general category Nd).
///
/// Nd characters are encoded in contiguous ascending runs of ten starting at zero, so the value
/// is the distance from the start of the run, modulo ten.
fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = u32::from(c);
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32)
        && is_decimal_digit(prev)
    {
        start -= 1;
    }
    Some((u32::from(c) - start) % 10)
}

fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Stable ascending sort by key; equal keys keep their enumeration order.
pub fn sort_frames(frames: &mut [Frame]) {
    frames.sort_by_key(|f| f.key);
}

/// Expand `pattern`, key every matched file and return them in playback order.
#[tracing::instrument]
pub fn discover_frames(pattern: &str) -> StillreelResult<Vec<Frame>> {
    let paths = glob_paths(pattern)?;
    if paths.is_empty() {
        return Err(StillreelError::NoFramesFound(pattern.to_owned()));
    }

    let mut frames = paths
        .into_iter()
        .map(Frame::from_path)
        .collect::<StillreelResult<Vec<_>>>()?;
    sort_frames(&mut frames);

    tracing::debug!(
        count = frames.len(),
        first = frames.first().map(|f| f.key),
        last = frames.last().map(|f| f.key),
        "discovered frames"
    );
    Ok(frames)
}

/// Expand a glob pattern into the list of matching files, skipping directories.
fn glob_paths(pattern: &str) -> StillreelResult<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| {
        StillreelError::discovery(format!("invalid glob pattern '{pattern}': {e}"))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| StillreelError::discovery(format!("glob entry error: {e}")))?;
        if is_file(&path) {
            paths.push(path);
        }
    }
    Ok(paths)
}

fn is_file(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frames.rs"]
mod tests;
