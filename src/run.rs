//! The two ways of driving a run. Both read a [`Problem`](crate::Problem), solve it and
//! render the result with [`report::write_report`].

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::{Allocation, input, report};

/// Read a manifest from `input_path` and write the report to `output_path`.
///
/// The output file is only created once the whole manifest has been
/// validated, so a bad manifest never leaves an output file behind.
#[instrument(skip_all, fields(input = %input_path.display(), output = %output_path.display()))]
pub fn file_mode(input_path: &Path, output_path: &Path) -> Result<Allocation> {
    let source = fs::read_to_string(input_path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound {
            path: input_path.to_owned(),
        },
        _ => Error::Read {
            path: input_path.to_owned(),
            source,
        },
    })?;

    let problem = input::parse_manifest(&source)?;
    info!(
        containers = problem.containers.len(),
        cargo = problem.cargo.len(),
        "manifest loaded"
    );
    let allocation = problem.solve();

    let write_error = |source| Error::Write {
        path: output_path.to_owned(),
        source,
    };
    let file = File::create(output_path).map_err(write_error)?;
    report::write_report(BufWriter::new(file), &problem, &allocation).map_err(write_error)?;

    Ok(allocation)
}

/// Prompt for input on `output`, read answers from `input`, then print the
/// result to `output`.
pub fn interactive_mode<R: BufRead, W: Write>(input: R, mut output: W) -> Result<Allocation> {
    let problem = input::read_interactive(input, &mut output)?;
    let allocation = problem.solve();

    writeln!(output, "Result:").map_err(Error::Console)?;
    report::write_report(&mut output, &problem, &allocation).map_err(Error::Console)?;

    Ok(allocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputError;
    use std::io::Cursor;

    #[test]
    fn interactive_run_prints_prompts_then_result() {
        let answers = "2\n1 10 10\n2 5 5\n3\nA 4 4\nB 8 8\nC 3 3\n";
        let mut out = Vec::new();
        let allocation = interactive_mode(Cursor::new(answers), &mut out).unwrap();
        assert_eq!(allocation.assigned_count(), 2);

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Enter number of containers:\n"));
        assert!(out.ends_with("Result:\nA 4 4 1\nB 8 8 -1\nC 3 3 1\n"), "{out}");
    }

    #[test]
    fn interactive_run_stops_on_invalid_record() {
        let mut out = Vec::new();
        let err = interactive_mode(Cursor::new("1\n1 x 1\n"), &mut out).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::InvalidNumber { .. })));
        assert!(!String::from_utf8(out).unwrap().contains("Result:"));
    }
}
