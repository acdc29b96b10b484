pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod run;
mod types;

use tracing::{debug, info};

pub use error::{Error, InputError};
pub use types::{Assignment, Cargo, Container, ContainerId, Problem, Solution, UNASSIGNED};

/// Result of a first-fit pass: for every cargo item, the position of the
/// container it was placed in, or `None` if nothing could hold it.
///
/// Positions rather than ids are recorded because container ids may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    slots: Vec<Option<usize>>,
}

impl Problem {
    /// Assign cargo to containers greedily.
    ///
    /// Containers are visited in input order. During each container's pass,
    /// every cargo item still unassigned is checked in input order and placed
    /// if it fits the container's remaining weight and volume. Placements are
    /// never revisited.
    pub fn solve(&self) -> Allocation {
        let mut allocation = Allocation::unassigned(self.cargo.len());
        allocation.fill(self);
        allocation
    }
}

impl Allocation {
    pub fn unassigned(cargo_count: usize) -> Self {
        Self {
            slots: vec![None; cargo_count],
        }
    }

    /// Run a first-fit pass over the items that are still unassigned.
    ///
    /// A container's budget starts from whatever its existing items have left
    /// over, so filling an allocation twice is the same as filling it once.
    pub fn fill(&mut self, problem: &Problem) {
        self.slots.resize(problem.cargo.len(), None);

        for (index, container) in problem.containers.iter().enumerate() {
            let mut budget = self.remaining(problem, index);

            for (item_index, (slot, item)) in
                self.slots.iter_mut().zip(&problem.cargo).enumerate()
            {
                debug_assert!(item.weight >= 0.0 && item.volume >= 0.0);
                if slot.is_none() && budget.admits(item) {
                    budget.take(item);
                    *slot = Some(index);
                    debug!(
                        cargo = %item.name,
                        item_index,
                        container = container.id,
                        remaining_weight = budget.weight,
                        remaining_volume = budget.volume,
                        "placed cargo"
                    );
                }
            }
        }

        info!(
            containers = problem.containers.len(),
            assigned = self.assigned_count(),
            unassigned = self.unassigned_count(),
            "allocation pass complete"
        );
    }

    /// Forget every placement.
    pub fn reset(&mut self) {
        self.slots.fill(None);
    }

    /// Place cargo item `cargo` into the container at position `container`.
    ///
    /// Capacity is not checked. Used to seed an allocation before a partial
    /// [`fill`](Self::fill). Returns `false`, leaving the allocation
    /// untouched, if either position is outside `problem`.
    pub fn assign(&mut self, problem: &Problem, cargo: usize, container: usize) -> bool {
        if cargo >= problem.cargo.len() || container >= problem.containers.len() {
            return false;
        }
        self.slots.resize(problem.cargo.len(), None);
        self.slots[cargo] = Some(container);
        true
    }

    pub fn container_index(&self, cargo: usize) -> Option<usize> {
        self.slots.get(cargo).copied().flatten()
    }

    pub fn container_id(&self, problem: &Problem, cargo: usize) -> Option<ContainerId> {
        self.container_index(cargo)
            .and_then(|index| problem.containers.get(index))
            .map(|container| container.id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.slots.len() - self.assigned_count()
    }

    /// Total (weight, volume) of cargo placed in the container at `container`.
    pub fn load(&self, problem: &Problem, container: usize) -> (f64, f64) {
        self.items_in(problem, container)
            .fold((0.0, 0.0), |(weight, volume), item| {
                (weight + item.weight, volume + item.volume)
            })
    }

    pub fn to_solution(&self, problem: &Problem) -> Solution {
        let solution = problem
            .cargo
            .iter()
            .enumerate()
            .map(|(index, item)| Assignment {
                name: item.name.clone(),
                container: self.container_id(problem, index),
            })
            .collect();
        Solution { solution }
    }

    fn items_in<'a>(
        &'a self,
        problem: &'a Problem,
        container: usize,
    ) -> impl Iterator<Item = &'a Cargo> + 'a {
        self.slots
            .iter()
            .zip(&problem.cargo)
            .filter(move |(slot, _)| **slot == Some(container))
            .map(|(_, item)| item)
    }

    // Subtracts in cargo order so the result matches what a single pass leaves.
    fn remaining(&self, problem: &Problem, container: usize) -> Budget {
        let mut budget = Budget::of(&problem.containers[container]);
        for item in self.items_in(problem, container) {
            budget.take(item);
        }
        budget
    }
}

#[derive(Debug, Clone, Copy)]
struct Budget {
    weight: f64,
    volume: f64,
}

impl Budget {
    fn of(container: &Container) -> Self {
        Self {
            weight: container.max_weight,
            volume: container.max_volume,
        }
    }

    fn admits(&self, item: &Cargo) -> bool {
        item.weight <= self.weight && item.volume <= self.volume
    }

    fn take(&mut self, item: &Cargo) {
        self.weight -= item.weight;
        self.volume -= item.volume;
    }
}
