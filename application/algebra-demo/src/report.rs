use std::fmt::Display;
use std::io::Write;

use anyhow::*;

const RULE: &str = "===============================================================";

/// Writes the walkthrough text: titled sections of right aligned labels, each
/// followed by a rendered value.
pub struct Report<'a, W: Write> {
  out: &'a mut W,
}

impl<'a, W: Write> Report<'a, W> {
  pub fn new(out: &'a mut W) -> Self {
    Self { out }
  }

  pub fn section(&mut self, title: &str) -> anyhow::Result<()> {
    log::debug!("section: {}", title);
    writeln!(self.out, "{}\n{}", RULE, title).context("Failed to write section title")
  }

  pub fn note(&mut self, text: &str) -> anyhow::Result<()> {
    writeln!(self.out, "{}", text).context("Failed to write note")
  }

  pub fn value(&mut self, label: &str, value: impl Display) -> anyhow::Result<()> {
    writeln!(self.out, "{:>40}{}", format!("{}: ", label), value)
      .with_context(|| format!("Failed to write value of {}", label))
  }
}
