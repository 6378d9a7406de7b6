use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::*;
use pico_args::Arguments;

mod matrix_walkthrough;
mod menu;
mod report;
mod vector_walkthrough;

use menu::*;

const HELP: &str = "\
algebra-demo: prints a walkthrough of the fixed size vector and matrix types

USAGE:
  algebra-demo [--choice <N>]

OPTIONS:
  --choice <N>  run one walkthrough and exit (0 all, 1 vector, 2 matrix)
  -h, --help    print this message

Without --choice an interactive menu is read from stdin.
Set RUST_LOG=debug to trace the walkthrough sections.
";

fn main() -> anyhow::Result<ExitCode> {
  env_logger::builder().init();

  let mut args = Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    print!("{}", HELP);
    return Ok(ExitCode::SUCCESS);
  }

  let choice: Option<String> = args
    .opt_value_from_str("--choice")
    .context("Expected --choice to be followed by a value")?;

  let remaining = args.finish();
  if !remaining.is_empty() {
    bail!("Unexpected arguments: {:?}", remaining);
  }

  let stdout = io::stdout();
  let mut out = stdout.lock();

  match choice {
    Some(choice) => {
      let choice = Choice::parse(&choice)
        .with_context(|| format!("Unknown choice {:?}, expected 0, 1, 2 or 99", choice))?;
      log::info!("running {:?} walkthrough", choice);
      run_choice(choice, &mut out)?;
    }
    None => {
      let stdin = io::stdin();
      menu_loop(stdin.lock(), &mut out)?;
    }
  }

  out.flush().context("Failed to flush stdout")?;
  Ok(ExitCode::SUCCESS)
}

