//! Output file naming

use cputemp_core::Core;
use std::path::{Path, PathBuf};

/// Shape of the dated prefix after `sensors-`: `d` is a digit, `.` any character
const DATE_SHAPE: &str = "dddd.dd.dd";
const LOG_PREFIX: &str = "sensors-";

/// Basename shared by every artifact written for `input`
///
/// `sensors-2018.12.26-no-labels.txt` yields `sensors-2018.12.26`; names
/// without the dated prefix fall back to the file stem.
pub fn output_basename(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(prefix) = dated_prefix(&name) {
        return prefix.to_string();
    }

    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "sensors".to_string())
}

fn dated_prefix(name: &str) -> Option<&str> {
    let rest = name.strip_prefix(LOG_PREFIX)?;
    let mut chars = rest.char_indices();
    let mut end = 0;
    for shape in DATE_SHAPE.chars() {
        let (i, c) = chars.next()?;
        let ok = match shape {
            'd' => c.is_ascii_digit(),
            _ => c != '\n',
        };
        if !ok {
            return None;
        }
        end = i + c.len_utf8();
    }
    Some(&name[..LOG_PREFIX.len() + end])
}

/// `{dir}/{basename}_{core}.{extension}`
pub fn output_path(dir: &Path, basename: &str, core: Core, extension: &str) -> PathBuf {
    dir.join(format!("{basename}_{core}.{extension}"))
}
