use std::io::{BufRead, Write};

use anyhow::*;

use crate::{matrix_walkthrough, vector_walkthrough};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Choice {
  All,
  Vector,
  Matrix,
  Quit,
}

impl Choice {
  /// Menu numbers: 0 all, 1 vector, 2 matrix, 99 quit.
  pub fn parse(input: &str) -> Option<Self> {
    match input.trim().parse::<i32>().ok()? {
      0 => Some(Choice::All),
      1 => Some(Choice::Vector),
      2 => Some(Choice::Matrix),
      99 => Some(Choice::Quit),
      _ => None,
    }
  }
}

pub fn show_menu(out: &mut impl Write) -> anyhow::Result<()> {
  write!(
    out,
    "\n\nTest what?\n0)      All\n\n1)      Vector\n2)      Matrix\n\n99      Quit\n"
  )
  .context("Failed to write menu")?;
  out.flush().context("Failed to flush menu")
}

pub fn run_choice(choice: Choice, out: &mut impl Write) -> anyhow::Result<()> {
  match choice {
    Choice::All => {
      vector_walkthrough::run(out)?;
      matrix_walkthrough::run(out)?;
    }
    Choice::Vector => vector_walkthrough::run(out)?,
    Choice::Matrix => matrix_walkthrough::run(out)?,
    Choice::Quit => {}
  }
  Ok(())
}

/// Shows the menu and runs selections until 99 or the end of input.
pub fn menu_loop(mut input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
  let mut line = String::new();
  loop {
    show_menu(out)?;

    line.clear();
    if input.read_line(&mut line).context("Failed to read menu choice")? == 0 {
      log::info!("end of input, leaving");
      return Ok(());
    }

    match Choice::parse(&line) {
      Some(Choice::Quit) => {
        log::info!("quit selected");
        return Ok(());
      }
      Some(choice) => {
        log::info!("running {:?} walkthrough", choice);
        run_choice(choice, out)?;
      }
      None => {
        log::warn!("unrecognized menu input {:?}", line.trim());
        writeln!(out, "Unrecognized choice.  Please try again.").context("Failed to write reply")?;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  fn run_session(input: &str) -> String {
    let mut out = Vec::new();
    menu_loop(Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
  }

  #[test]
  fn parse_choices() {
    assert_eq!(Choice::parse("0"), Some(Choice::All));
    assert_eq!(Choice::parse(" 1\n"), Some(Choice::Vector));
    assert_eq!(Choice::parse("2"), Some(Choice::Matrix));
    assert_eq!(Choice::parse("99"), Some(Choice::Quit));
    assert_eq!(Choice::parse("3"), None);
    assert_eq!(Choice::parse("vector"), None);
    assert_eq!(Choice::parse(""), None);
  }

  #[test]
  fn quit_stops_the_loop() {
    let text = run_session("99\n1\n");
    assert_eq!(text.matches("Test what?").count(), 1);
    assert!(!text.contains("Testing Vector"));
  }

  #[test]
  fn end_of_input_stops_the_loop() {
    let text = run_session("");
    assert_eq!(text.matches("Test what?").count(), 1);
  }

  #[test]
  fn bad_input_is_reported_and_the_menu_shown_again() {
    let text = run_session("abc\n7\n99\n");
    assert_eq!(text.matches("Unrecognized choice").count(), 2);
    assert_eq!(text.matches("Test what?").count(), 3);
  }

  #[test]
  fn selections_run_the_walkthroughs() {
    let text = run_session("1\n2\n");
    assert!(text.contains("Testing Vector constructors"));
    assert!(text.contains("Testing Matrix multiplication"));
    assert_eq!(text.matches("Test what?").count(), 3);

    let mut all = Vec::new();
    run_choice(Choice::All, &mut all).unwrap();
    let all = String::from_utf8(all).unwrap();
    assert!(all.contains("Testing Vector constructors"));
    assert!(all.contains("Testing Matrix transform builders"));
  }
}
