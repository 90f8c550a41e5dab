//! Generation-by-generation driver for cellular-automaton style updates.
//!
//! A step is a pure `Grid<T> -> Grid<T>` function built from
//! [`Grid::transform`]; the driver only holds the current grid and swaps in
//! each new generation.
use log::{info, trace, warn};

use crate::config::SimulationConfig;
use crate::error::GridError;
use crate::grid::Grid;

/// Computes the next value of one cell from the previous generation.
pub trait Rule<T> {
    fn next(&mut self, row: usize, column: usize, grid: &Grid<T>) -> T;
}

impl<T, F> Rule<T> for F
where
    F: FnMut(usize, usize, &Grid<T>) -> T,
{
    fn next(&mut self, row: usize, column: usize, grid: &Grid<T>) -> T {
        self(row, column, grid)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Simulation<T> {
    grid: Grid<T>,
    generation: u64,
}

impl<T> Simulation<T> {
    pub fn new(grid: Grid<T>) -> Self {
        Self { grid, generation: 0 }
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Number of steps applied since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // Replace the current grid with the next generation, handing back the
    // previous one.
    fn advance<R>(&mut self, rule: &mut R) -> Grid<T>
    where
        R: Rule<T> + ?Sized,
    {
        let next = self
            .grid
            .transform(|row, column, grid| rule.next(row, column, grid));
        self.generation += 1;
        trace!("Computed generation {} ({} grid)", self.generation, next.dimensions());
        std::mem::replace(&mut self.grid, next)
    }

    /// Apply `rule` to every cell once, simultaneously.
    pub fn step<R>(&mut self, rule: &mut R) -> &Grid<T>
    where
        R: Rule<T> + ?Sized,
    {
        self.advance(rule);
        &self.grid
    }
}

impl<T: PartialEq> Simulation<T> {
    /// Step until `config.max_generations` is reached or, with
    /// `stop_when_stable`, until a step leaves the grid unchanged.
    ///
    /// Returns the number of generations computed by this call.
    pub fn run<R>(&mut self, config: &SimulationConfig, rule: &mut R) -> Result<u64, GridError>
    where
        R: Rule<T> + ?Sized,
    {
        if let Err(err) = config.validate() {
            warn!("Refusing to run simulation: {}", err);
            return Err(err);
        }

        let mut steps = 0;
        while steps < config.max_generations {
            let previous = self.advance(rule);
            steps += 1;

            if steps % config.log_every == 0 {
                info!(
                    "Simulation at generation {} ({} of {} steps)",
                    self.generation, steps, config.max_generations
                );
            }

            if config.stop_when_stable && previous == self.grid {
                info!(
                    "Grid stable at generation {} after {} steps",
                    self.generation, steps
                );
                break;
            }
        }

        Ok(steps)
    }
}

impl<T> From<Grid<T>> for Simulation<T> {
    fn from(grid: Grid<T>) -> Self {
        Simulation::new(grid)
    }
}
