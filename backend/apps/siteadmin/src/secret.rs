//! Password input
//!
//! Passwords given with `--password-stdin` are read one per line so they
//! stay out of the process list and shell history.

use std::io::BufRead;

use anyhow::{Context as _, bail};

/// Read `count` lines, without their line endings
pub fn read_lines(reader: impl BufRead, count: usize) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(count);
    for line in reader.lines().take(count) {
        let line = line.context("Failed to read password from stdin")?;
        lines.push(line.trim_end_matches('\r').to_string());
    }

    if lines.len() < count {
        bail!("Expected {count} line(s) on stdin, got {}", lines.len());
    }
    Ok(lines)
}

/// The value, or an error naming the missing option
pub fn required(value: Option<String>, option: &str) -> anyhow::Result<String> {
    value.with_context(|| format!("Missing {option} (or use --password-stdin)"))
}
