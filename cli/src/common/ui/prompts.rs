//! # a3sm Interactive Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! Simple line-oriented prompts on stdin/stdout. Used only when a required
//! input (credentials, installation directory) is absent from the saved
//! configuration; every prompt blocks the single-threaded command until
//! the user answers.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::{self, BufRead, Write};

/// Prints `question`, then reads one trimmed line from stdin.
pub fn prompt_line(question: &str) -> Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    prompt_line_from(question, &mut input)
}

/// Testable core of [`prompt_line`]: reads from any `BufRead`.
fn prompt_line_from(question: &str, input: &mut impl BufRead) -> Result<String> {
    print!("{question} ");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}
