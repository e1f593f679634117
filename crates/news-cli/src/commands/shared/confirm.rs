use std::io::{BufRead, Write};

use anyhow::Context;
use news_store::deletion::PendingDeletion;

/// Ask on stderr whether to go ahead with `pending`; read the answer from `input`.
///
/// Only `y` or `yes` (any case) confirms. End of input declines.
pub fn confirm_deletion(pending: &PendingDeletion, input: &mut impl BufRead) -> anyhow::Result<bool> {
    let mut stderr = std::io::stderr().lock();
    write!(
        stderr,
        "{}: {} [y/N] ",
        pending.title(),
        pending.message()
    )?;
    stderr.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
