//! Choice intake: candidate lines from a file or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads candidate choices, one per line. Blank lines are dropped;
/// everything else, including interior whitespace and order, is kept as-is.
pub fn read_choices(path: Option<&Path>) -> io::Result<Vec<String>> {
    let contents = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(candidate_lines(&contents))
}

fn candidate_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}
