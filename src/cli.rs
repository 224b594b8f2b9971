use crate::ipv4::NetworkCalculator;
use crate::report::Report;
use anyhow::{anyhow, Context, Result};
use log::info;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub const BANNER: &str = "IPv4 network calculator";
pub const ADDRESS_PROMPT: &str = "Enter IPv4 address (e.g. 192.168.1.1): ";
pub const MASK_PROMPT: &str = "Enter mask (e.g. 255.255.255.0 or 24): ";

/// Whitespace separated tokens read lazily, one line at a time.
pub struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(input: R) -> Self {
        Tokens {
            input,
            pending: VecDeque::new(),
        }
    }

    /// `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self
                .input
                .read_line(&mut line)
                .context("failed to read input")?
                == 0
            {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

fn prompt<R: BufRead, W: Write>(tokens: &mut Tokens<R>, out: &mut W, text: &str) -> Result<String> {
    write!(out, "{}", text)?;
    out.flush()?;
    tokens
        .next_token()?
        .ok_or_else(|| anyhow!("invalid input format: missing input"))
}

/// Prompts for an address and a mask, then writes the full report.
///
/// Nothing after the prompts is written when either token fails to parse.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}", "=".repeat(BANNER.len()))?;

    let mut tokens = Tokens::new(input);
    let address = prompt(&mut tokens, out, ADDRESS_PROMPT)?;
    let mask = prompt(&mut tokens, out, MASK_PROMPT)?;

    let calc = NetworkCalculator::new(&address, &mask).context("invalid input format")?;
    info!("calculated {}", calc);
    write!(out, "{}", Report::from(&calc))?;
    out.flush()?;
    Ok(())
}
