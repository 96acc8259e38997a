//! Render, pause, advance loop
//!
//! The loop itself knows nothing about terminals or clocks: output goes
//! through a [`FrameSink`], waiting goes through a [`Pacer`], and the caller
//! decides when to stop. Tests single-step generations with [`NoPause`].

use crate::grid::GridState;
use crate::render::{render_rows, Glyphs, Viewport};
use std::io;
use std::time::Duration;
use tracing::debug;

/// One rendered generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub generation: u64,
    pub population: usize,
    pub rows: Vec<String>,
}

impl Frame {
    pub fn status(&self) -> String {
        format!("generation {}, population {}", self.generation, self.population)
    }
}

/// Anything that can show a frame
pub trait FrameSink {
    fn show(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Waits between generations
pub trait Pacer {
    fn pause(&mut self, interval: Duration);
}

/// Real-time pacing
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn pause(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Never waits
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _interval: Duration) {}
}

/// A grid together with its generation counter
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    grid: GridState,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: GridState) -> Self {
        Self { grid, generation: 0 }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        self.grid.advance();
        self.generation += 1;
        debug!(generation = self.generation, population = self.grid.population(), "advanced");
    }

    pub fn frame(&self, viewport: &Viewport, glyphs: &Glyphs) -> Frame {
        Frame {
            generation: self.generation,
            population: self.grid.population(),
            rows: render_rows(&self.grid, viewport, glyphs),
        }
    }

    /// Show the current generation, then keep pausing and advancing until
    /// `should_stop` returns true for a generation that was just shown.
    ///
    /// With a stop condition that never fires this only returns on a
    /// display error.
    pub fn run<D, P, F>(
        &mut self,
        display: &mut D,
        pacer: &mut P,
        viewport: &Viewport,
        glyphs: &Glyphs,
        interval: Duration,
        mut should_stop: F,
    ) -> io::Result<()>
    where
        D: FrameSink + ?Sized,
        P: Pacer + ?Sized,
        F: FnMut(u64, &GridState) -> bool,
    {
        loop {
            display.show(&self.frame(viewport, glyphs))?;

            if should_stop(self.generation, &self.grid) {
                debug!(
                    generation = self.generation,
                    population = self.grid.population(),
                    bounds = ?self.grid.bounds(),
                    "simulation stopped"
                );
                return Ok(());
            }

            pacer.pause(interval);
            self.step();
        }
    }
}

/// Stop condition for an optional generation limit
pub fn generation_limit(limit: Option<u64>) -> impl FnMut(u64, &GridState) -> bool {
    move |generation: u64, _: &GridState| limit.is_some_and(|limit| generation >= limit)
}
