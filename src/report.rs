use std::fmt;
use std::io::{self, Write};

use crate::types::{Cargo, Problem, UNASSIGNED};
use crate::{Allocation, ContainerId};

/// One output line: `<name> <weight> <volume> <container id or -1>`.
#[derive(Debug)]
pub struct Line<'a> {
    pub cargo: &'a Cargo,
    pub container: Option<ContainerId>,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.cargo.name,
            self.cargo.weight,
            self.cargo.volume,
            self.container.unwrap_or(UNASSIGNED)
        )
    }
}

pub fn lines<'a>(
    problem: &'a Problem,
    allocation: &'a Allocation,
) -> impl Iterator<Item = Line<'a>> + 'a {
    problem
        .cargo
        .iter()
        .enumerate()
        .map(|(index, cargo)| Line {
            cargo,
            container: allocation.container_id(problem, index),
        })
}

/// Write every cargo item and its assignment, in input order.
pub fn write_report<W: Write>(
    mut out: W,
    problem: &Problem,
    allocation: &Allocation,
) -> io::Result<()> {
    for line in lines(problem, allocation) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Container;

    #[test]
    fn renders_assignments_and_sentinel() {
        let problem = Problem {
            containers: vec![Container::new(1, 10.0, 10.0), Container::new(2, 5.0, 5.0)],
            cargo: vec![
                Cargo::new("A", 4.0, 4.0),
                Cargo::new("B", 8.0, 8.0),
                Cargo::new("C", 3.0, 3.0),
            ],
        };
        let allocation = problem.solve();

        let mut out = Vec::new();
        write_report(&mut out, &problem, &allocation).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A 4 4 1\nB 8 8 -1\nC 3 3 1\n");
    }

    #[test]
    fn fractional_measures_keep_their_digits() {
        let cargo = Cargo::new("crate", 2.5, 0.125);
        let line = Line {
            cargo: &cargo,
            container: Some(12),
        };
        assert_eq!(line.to_string(), "crate 2.5 0.125 12");
    }

    #[test]
    fn empty_cargo_writes_nothing() {
        let problem = Problem::default();
        let mut out = Vec::new();
        write_report(&mut out, &problem, &problem.solve()).unwrap();
        assert!(out.is_empty());
    }
}
