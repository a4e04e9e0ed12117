use colored::Colorize;
use fraction_calc::{
  calculate_with,
  config::{Command, Config, USAGE},
  Precision,
};
use std::{env, io::Write, process::ExitCode};

fn main() -> ExitCode {
  env_logger::init();
  let config = match Config::from_args(env::args().skip(1)) {
    Ok(config) => config,
    Err(err) => {
      eprintln!("{} {}", "error:".red().bold(), err);
      eprintln!("Run with --help for usage.");
      return ExitCode::from(2);
    }
  };
  log::debug!("running with {:?}", config);

  match config.command {
    Command::Help => {
      println!("{USAGE}");
      ExitCode::SUCCESS
    }
    Command::Version => {
      println!("fraction-calc {}", env!("CARGO_PKG_VERSION"));
      ExitCode::SUCCESS
    }
    Command::Calculate(input) => one_shot(&input, config.precision),
    Command::Repl => match repl(config.precision) {
      Ok(()) => ExitCode::SUCCESS,
      Err(err) => {
        log::error!("reading input failed: {err}");
        ExitCode::FAILURE
      }
    },
  }
}

fn one_shot(input: &str, precision: Precision) -> ExitCode {
  if is_exit(input) {
    println!("Application has ended.");
    return ExitCode::SUCCESS;
  }
  match calculate_with(input, precision) {
    Ok(result) => {
      println!("= {}", result.bold());
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("{}", err.to_string().red());
      ExitCode::FAILURE
    }
  }
}

fn repl(precision: Precision) -> std::io::Result<()> {
  println!("Enter an expression such as 1/2 * 3&3/4, or 'exit' to quit.");
  loop {
    print!("? ");
    std::io::stdout().flush()?;
    let mut input = String::new();
    if std::io::stdin().read_line(&mut input)? == 0 {
      println!();
      break;
    }
    let input = input.trim_end_matches(['\n', '\r']);
    if input.trim().is_empty() {
      continue;
    }
    if is_exit(input) {
      println!("Application has ended.");
      break;
    }
    match calculate_with(input, precision) {
      Ok(result) => println!("= {}", result.bold()),
      Err(err) => println!("{}", err.to_string().red()),
    }
  }
  Ok(())
}

fn is_exit(input: &str) -> bool {
  matches!(input.trim(), "exit" | "quit")
}
