//! Reading containers and cargo, either from a manifest or from a console.
//!
//! A manifest looks like this:
//!
//! ```text
//! 2
//! 1 10 10
//! 2 5 5
//! 3
//! A 4 4
//! B 8 8
//! C 3 3
//! ```
//!
//! A container count, that many `id max_weight max_volume` lines, a cargo
//! count, then that many `name weight volume` lines. The console reader asks
//! for the same values in the same order.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Field, InputError, Section};
use crate::types::{Cargo, Container, Problem};

type RecordParser<T> = fn(usize, &str) -> Result<T, InputError>;

/// Parse and validate a whole manifest. Nothing is returned unless every
/// line is well formed.
pub fn parse_manifest(source: &str) -> Result<Problem, InputError> {
    if source.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let mut manifest = Manifest::new(source);
    let containers = manifest.section(Section::Containers, parse_container)?;
    let cargo = manifest.section(Section::Cargo, parse_cargo)?;
    manifest.finish()?;

    Ok(Problem { containers, cargo })
}

/// Prompt on `output` and read answers from `input`, one line per answer.
pub fn read_interactive<R: BufRead, W: Write>(
    input: R,
    output: W,
) -> Result<Problem, InputError> {
    let mut console = Console {
        input,
        output,
        line: 0,
    };
    let containers = console.section(Section::Containers, parse_container)?;
    let cargo = console.section(Section::Cargo, parse_cargo)?;

    Ok(Problem { containers, cargo })
}

struct Manifest<'a> {
    lines: Vec<&'a str>,
    next: usize,
}

impl<'a> Manifest<'a> {
    fn new(source: &'a str) -> Self {
        let mut lines: Vec<&str> = source.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        Self { lines, next: 0 }
    }

    fn section<T>(&mut self, section: Section, parse: RecordParser<T>) -> Result<Vec<T>, InputError> {
        let line = self.next + 1;
        let text = self
            .lines
            .get(self.next)
            .ok_or(InputError::MissingCount { section, line })?;
        let declared = parse_count(section, line, text)?;
        self.next += 1;

        let available = self.lines.len() - self.next;
        if available < declared {
            return Err(InputError::Truncated {
                section,
                line,
                declared,
                available,
            });
        }

        let first = self.next;
        let records = self.lines[first..first + declared]
            .iter()
            .enumerate()
            .map(|(offset, text)| parse(first + offset + 1, text))
            .collect::<Result<Vec<_>, _>>()?;
        self.next += declared;

        debug!(%section, count = declared, "parsed manifest section");
        Ok(records)
    }

    fn finish(&self) -> Result<(), InputError> {
        if self.next < self.lines.len() {
            return Err(InputError::TrailingContent {
                line: self.next + 1,
            });
        }
        Ok(())
    }
}

struct Console<R, W> {
    input: R,
    output: W,
    line: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `None` once the input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(answer))
    }

    fn section<T>(&mut self, section: Section, parse: RecordParser<T>) -> Result<Vec<T>, InputError> {
        let line = self.line + 1;
        let answer = self
            .ask(&format!("Enter number of {}:", count_noun(section)))?
            .ok_or(InputError::MissingCount { section, line })?;
        let declared = parse_count(section, line, &answer)?;

        let mut records = Vec::new();
        for n in 1..=declared {
            let line = self.line + 1;
            let prompt = format!("Enter {} {n} ({}):", section.record(), section.shape());
            let answer = self.ask(&prompt)?.ok_or(InputError::Truncated {
                section,
                line,
                declared,
                available: n - 1,
            })?;
            records.push(parse(line, &answer)?);
        }

        debug!(%section, count = declared, "read console section");
        Ok(records)
    }
}

fn count_noun(section: Section) -> &'static str {
    match section {
        Section::Containers => "containers",
        Section::Cargo => "cargos",
    }
}

fn parse_count(section: Section, line: usize, text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    text.parse().map_err(|_| InputError::InvalidCount {
        section,
        line,
        value: text.to_owned(),
    })
}

fn parse_container(line: usize, text: &str) -> Result<Container, InputError> {
    let [id, max_weight, max_volume] = split_record(Section::Containers, line, text)?;
    let id = id.parse().map_err(|_| InputError::InvalidNumber {
        line,
        field: Field::ContainerId,
        value: id.to_owned(),
    })?;

    Ok(Container {
        id,
        max_weight: parse_measure(line, Field::MaxWeight, max_weight)?,
        max_volume: parse_measure(line, Field::MaxVolume, max_volume)?,
    })
}

fn parse_cargo(line: usize, text: &str) -> Result<Cargo, InputError> {
    let [name, weight, volume] = split_record(Section::Cargo, line, text)?;

    Ok(Cargo {
        name: name.to_owned(),
        weight: parse_measure(line, Field::Weight, weight)?,
        volume: parse_measure(line, Field::Volume, volume)?,
    })
}

fn split_record(section: Section, line: usize, text: &str) -> Result<[&str; 3], InputError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    <[&str; 3]>::try_from(fields).map_err(|fields| InputError::FieldCount {
        section,
        line,
        found: fields.len(),
    })
}

// Negative or non-finite capacities would poison every later comparison.
fn parse_measure(line: usize, field: Field, text: &str) -> Result<f64, InputError> {
    let value: f64 = text.parse().map_err(|_| InputError::InvalidNumber {
        line,
        field,
        value: text.to_owned(),
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(InputError::OutOfRange {
            line,
            field,
            value: text.to_owned(),
        });
    }
    Ok(value)
}
