use serde::{Deserialize, Serialize};

/// Caller-supplied container identifier. Not required to be unique or sequential.
pub type ContainerId = i64;

/// Rendered in place of a container id when a cargo item could not be placed.
pub const UNASSIGNED: ContainerId = -1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    #[serde(rename = "maxWeight")]
    pub max_weight: f64,
    #[serde(rename = "maxVolume")]
    pub max_volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    pub name: String,
    pub weight: f64,
    pub volume: f64,
}

/// Containers and cargo, both in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub containers: Vec<Container>,
    pub cargo: Vec<Cargo>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub solution: Vec<Assignment>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    pub container: Option<ContainerId>,
}

impl Container {
    pub fn new(id: ContainerId, max_weight: f64, max_volume: f64) -> Self {
        Self {
            id,
            max_weight,
            max_volume,
        }
    }
}

impl Cargo {
    pub fn new(name: impl Into<String>, weight: f64, volume: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            volume,
        }
    }
}
