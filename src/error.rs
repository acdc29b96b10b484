use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which part of the input a record or count belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Containers,
    Cargo,
}

/// A numeric field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ContainerId,
    MaxWeight,
    MaxVolume,
    Weight,
    Volume,
}

/// Problems with the shape or content of container/cargo input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input is empty")]
    Empty,

    #[error("line {line}: expected the number of {section}, found end of input")]
    MissingCount { section: Section, line: usize },

    #[error("line {line}: {value:?} is not a valid number of {section} (expected a non-negative integer)")]
    InvalidCount {
        section: Section,
        line: usize,
        value: String,
    },

    #[error("line {line}: {declared} {section} declared but only {available} record line(s) follow")]
    Truncated {
        section: Section,
        line: usize,
        declared: usize,
        available: usize,
    },

    #[error("line {line}: {} record must have exactly 3 fields ({}), found {found}", .section.record(), .section.shape())]
    FieldCount {
        section: Section,
        line: usize,
        found: usize,
    },

    #[error("line {line}: {field} {value:?} is not a valid {}", .field.kind())]
    InvalidNumber {
        line: usize,
        field: Field,
        value: String,
    },

    #[error("line {line}: {field} must be a finite, non-negative number, got {value}")]
    OutOfRange {
        line: usize,
        field: Field,
        value: String,
    },

    #[error("line {line}: unexpected content after the last cargo record")]
    TrailingContent { line: usize },

    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}

/// Anything that ends a run early.
#[derive(Error, Debug)]
pub enum Error {
    #[error("input file {} not found", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("error reading input file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("error writing output file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to write to console: {0}")]
    Console(#[source] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Section {
    pub(crate) fn record(self) -> &'static str {
        match self {
            Section::Containers => "container",
            Section::Cargo => "cargo",
        }
    }

    pub(crate) fn shape(self) -> &'static str {
        match self {
            Section::Containers => "ID MaxWeight MaxVolume",
            Section::Cargo => "Name Weight Volume",
        }
    }
}

impl Field {
    fn kind(self) -> &'static str {
        match self {
            Field::ContainerId => "integer",
            _ => "number",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Containers => "containers",
            Section::Cargo => "cargo items",
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::ContainerId => "container id",
            Field::MaxWeight => "max weight",
            Field::MaxVolume => "max volume",
            Field::Weight => "weight",
            Field::Volume => "volume",
        })
    }
}
