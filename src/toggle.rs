use std::{fs, path::Path};

use chrono::Local;
use log::debug;

use crate::error::SweepError;

/// lines at the top of the benchmark file that are never touched
const HEADER_LINES: usize = 5;

/// find the first and the last line on which the expression occurs.
///
/// the last line is only reported when the expression occurs at least twice;
/// a single occurrence leaves no block to uncomment, matching the historical
/// behavior of the driver.
fn find_first_last_lines(contents: &str, expr: &str) -> (Option<usize>, Option<usize>) {
    let mut first = None;
    let mut last = None;
    for (line_cnt, line) in contents.lines().enumerate() {
        if line.contains(expr) {
            if first.is_none() {
                first = Some(line_cnt);
            } else {
                last = Some(line_cnt);
            }
        }
    }
    (first, last)
}

/// select a benchmark by toggling comments in the benchmark-selection file.
///
/// the contiguous block bounded by the first and last line containing `expr`
/// is uncommented (one leading `#` stripped per line); every other line after
/// the fixed header is commented out. the rewrite goes through a uniquely
/// named scratch file in the same directory and replaces the original in one
/// rename.
pub fn comment_uncomment(file_path: &Path, expr: &str) -> Result<(), SweepError> {
    let contents = fs::read_to_string(file_path)?;
    let (first, last) = find_first_last_lines(&contents, expr);
    debug!(
        "toggling {} for `{}`: block {:?}..{:?}",
        file_path.display(),
        expr,
        first,
        last
    );

    let in_block = |line_cnt: usize| match (first, last) {
        (Some(first), Some(last)) => line_cnt >= first && line_cnt <= last,
        _ => false,
    };

    let mut out = String::with_capacity(contents.len());
    for (line_cnt, line) in contents.lines().enumerate() {
        let new_line = if line_cnt < HEADER_LINES {
            line.trim().to_string()
        } else if in_block(line_cnt) {
            // uncomment benchmark
            match line.strip_prefix('#') {
                Some(rest) => rest.trim().to_string(),
                None => line.trim().to_string(),
            }
        } else if !line.starts_with('#') {
            // blank body lines get commented out too
            format!("# {}", line.trim())
        } else {
            line.trim().to_string()
        };
        out.push_str(&new_line);
        out.push('\n');
    }

    // whole-file swap so a failed write never corrupts the original
    let scratch_name = format!(
        ".toggle-{}",
        Local::now().format("%Y-%m-%d-%H-%M-%S%.6f")
    );
    let scratch_path = file_path.with_file_name(scratch_name);
    fs::write(&scratch_path, out)?;
    fs::rename(&scratch_path, file_path)?;
    Ok(())
}
