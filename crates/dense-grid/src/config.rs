use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GridError;

/// Which cells count as neighbors of a position.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    /// The 4 orthogonally adjacent cells.
    ///
    /// ```text
    /// ┌───┬───┬───┐
    /// │   │ 2 │   │
    /// ├───┼───┼───┤
    /// │ 3 │ · │ 1 │
    /// ├───┼───┼───┤
    /// │   │ 4 │   │
    /// └───┴───┴───┘
    /// ```
    VonNeumann,
    /// The 8 cells around a position, diagonals included.
    ///
    /// ```text
    /// ┌───┬───┬───┐
    /// │ 4 │ 3 │ 2 │
    /// ├───┼───┼───┤
    /// │ 5 │ · │ 1 │
    /// ├───┼───┼───┤
    /// │ 6 │ 7 │ 8 │
    /// └───┴───┴───┘
    /// ```
    #[default]
    Moore,
}

const VON_NEUMANN_OFFSETS: [(isize, isize); 4] = [(0, 1), (-1, 0), (0, -1), (1, 0)];

const MOORE_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Neighborhood {
    /// `(row, column)` offsets in the order neighbor queries report them.
    pub fn offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Neighborhood::VonNeumann => &VON_NEUMANN_OFFSETS,
            Neighborhood::Moore => &MOORE_OFFSETS,
        }
    }

    pub fn max_neighbors(&self) -> usize {
        self.offsets().len()
    }
}

impl FromStr for Neighborhood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "von_neumann" | "vonneumann" | "adjacent" | "4" => Ok(Neighborhood::VonNeumann),
            "moore" | "neighbors" | "8" => Ok(Neighborhood::Moore),
            _ => Err(format!(
                "Unknown neighborhood: {}. Expected one of `von_neumann`, `adjacent`, `4`, `moore`, `neighbors`, `8`",
                s
            )),
        }
    }
}

/// Controls how long `Simulation::run` keeps stepping.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Upper bound on the number of generations to compute.
    pub max_generations: u64,
    /// Stop as soon as a step leaves the grid unchanged.
    #[serde(default)]
    pub stop_when_stable: bool,
    /// Emit a progress record every `log_every` generations.
    #[serde(default = "default_log_every")]
    pub log_every: u64,
}

fn default_log_every() -> u64 {
    10
}

impl SimulationConfig {
    pub fn new(max_generations: u64) -> Self {
        Self {
            max_generations,
            ..Self::default()
        }
    }

    pub fn with_stop_when_stable(mut self, stop_when_stable: bool) -> Self {
        self.stop_when_stable = stop_when_stable;
        self
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.max_generations == 0 {
            return Err(GridError::InvalidConfig(
                "max_generations must be at least 1".to_string(),
            ));
        }
        if self.log_every == 0 {
            return Err(GridError::InvalidConfig(
                "log_every must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_generations: 100,
            stop_when_stable: false,
            log_every: default_log_every(),
        }
    }
}
