//! Random decisions the engine makes: who gets X, and where the computer
//! plays.

use crate::position::Position;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of the engine's random choices.
pub trait RandomSource {
    /// Fair coin. `true` gives X to player one.
    fn flip_coin(&mut self) -> bool;

    /// A uniformly random cell, occupied or not.
    fn pick_cell(&mut self) -> Position;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn flip_coin(&mut self) -> bool {
        (**self).flip_coin()
    }

    fn pick_cell(&mut self) -> Position {
        (**self).pick_cell()
    }
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<SmallRng> {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }

    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Default for RngSource<SmallRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn flip_coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn pick_cell(&mut self) -> Position {
        let row = self.rng.random_range(0..3);
        let col = self.rng.random_range(0..3);
        Position::ALL[row * 3 + col]
    }
}

/// Replays fixed coin flips and cells.
///
/// Once the script runs out, coins come up heads and cells are walked in
/// row-major order, so the computer's search for an empty cell always ends.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    coins: VecDeque<bool>,
    cells: VecDeque<Position>,
    sweep: usize,
}

impl ScriptedSource {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends coin flips.
    pub fn with_coins(mut self, coins: impl IntoIterator<Item = bool>) -> Self {
        self.coins.extend(coins);
        self
    }

    /// Appends cells.
    pub fn with_cells(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        self.cells.extend(cells);
        self
    }

    /// Script entries not yet consumed, as `(coins, cells)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.coins.len(), self.cells.len())
    }
}

impl RandomSource for ScriptedSource {
    fn flip_coin(&mut self) -> bool {
        self.coins.pop_front().unwrap_or(true)
    }

    fn pick_cell(&mut self) -> Position {
        self.cells.pop_front().unwrap_or_else(|| {
            let pos = Position::ALL[self.sweep % 9];
            self.sweep += 1;
            pos
        })
    }
}
