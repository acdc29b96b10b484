use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use stowage::{error::Result, logging, run};

/// Assign cargo to containers by weight and volume, first fit in input order.
///
/// Without `--file`, containers and cargo are entered at the console.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Read the manifest from INPUT and write assignments to OUTPUT
    #[arg(long, num_args = 2, value_names = ["INPUT", "OUTPUT"], action = ArgAction::Set)]
    file: Option<Vec<PathBuf>>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Anything else; a first argument other than `--file` means interactive
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

impl Cli {
    /// Parse `args`, rejecting anything after `--file <INPUT> <OUTPUT>`.
    fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Self::try_parse_from(args)?;
        if let (Some(_), Some(extra)) = (&cli.file, cli.rest.first()) {
            return Err(Self::command().error(
                ErrorKind::WrongNumberOfValues,
                format!("unexpected argument '{extra}': --file takes exactly <INPUT> <OUTPUT>"),
            ));
        }
        Ok(cli)
    }
}

fn main() -> ExitCode {
    let cli = Cli::from_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    logging::init(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    if let Some([input, output]) = cli.file.as_deref() {
        run::file_mode(input, output)?;
        println!("Output file generated: {}", output.display());
    } else {
        run::interactive_mode(io::stdin().lock(), io::stdout().lock())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_mode_takes_exactly_two_paths() {
        let cli = Cli::from_args(["stowage", "--file", "in.txt", "out.txt"]).unwrap();
        assert_eq!(
            cli.file,
            Some(vec![PathBuf::from("in.txt"), PathBuf::from("out.txt")])
        );

        assert!(Cli::from_args(["stowage", "--file", "in.txt"]).is_err());
        assert!(Cli::from_args(["stowage", "--file", "a", "b", "c"]).is_err());
    }

    #[test]
    fn no_arguments_means_interactive() {
        let cli = Cli::from_args(["stowage"]).unwrap();
        assert!(cli.file.is_none());
        assert_eq!(cli.verbose, 0);

        let cli = Cli::from_args(["stowage", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn other_first_argument_means_interactive() {
        let cli = Cli::from_args(["stowage", "hello"]).unwrap();
        assert!(cli.file.is_none());

        let cli = Cli::from_args(["stowage", "hello", "--file", "in.txt", "out.txt"]).unwrap();
        assert!(cli.file.is_none());
    }
}
