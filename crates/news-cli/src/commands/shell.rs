//! `nws shell`: many commands against one live service.
//!
//! Each stdin line is parsed exactly like a command-line invocation, so
//! `source create --name "Daily News" --url https://daily.example` works.
//! Errors are printed and the loop continues; `exit`, `quit` or end of input
//! stops it.

use std::io::IsTerminal;

use anyhow::{Context, bail};
use clap::Parser;

use crate::cli::{Cli, Commands, GlobalFlags};
use crate::commands::dispatch::dispatch;
use crate::context::AppContext;

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Handle `nws shell`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal() && !flags.quiet;
    let mut line = String::new();
    loop {
        if interactive {
            eprint!("nws> ");
        }
        line.clear();
        if stdin
            .read_line(&mut line)
            .context("failed to read from stdin")?
            == 0
        {
            break;
        }
        match run_line(&line, ctx) {
            Ok(Step::Continue) => {}
            Ok(Step::Exit) => break,
            Err(error) => eprintln!("nws error: {error:#}"),
        }
    }
    Ok(())
}

fn run_line(line: &str, ctx: &mut AppContext) -> anyhow::Result<Step> {
    let words = split_words(line)?;
    match words.first().map(String::as_str) {
        None => return Ok(Step::Continue),
        Some("exit" | "quit") => return Ok(Step::Exit),
        Some(_) => {}
    }

    let cli = match Cli::try_parse_from(std::iter::once(String::from("nws")).chain(words)) {
        Ok(cli) => cli,
        Err(error) => {
            // Covers --help as well as real usage errors.
            error.print()?;
            return Ok(Step::Continue);
        }
    };
    if matches!(cli.command, Commands::Shell) {
        bail!("already in a shell");
    }
    let flags = cli.global_flags();
    dispatch(cli.command, ctx, &flags)?;
    Ok(Step::Continue)
}

/// Split a line into words. Single and double quotes group words; a
/// backslash escapes the next character outside single quotes.
fn split_words(line: &str) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (Some(open), c) if c == open => quote = None,
            (Some('"') | None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                    in_word = true;
                }
            }
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(open) = quote {
        bail!("unterminated {open} quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
