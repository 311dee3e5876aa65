//! Page-replacement simulation.
//!
//! The simulator replays a reference string through a fixed set of frames,
//! letting an eviction policy choose victims on misses.
//!
//! # Components
//! - [`Simulator`] - The step loop shared by every policy
//! - [`FrameSet`] - Fixed-capacity slots holding resident pages
//! - [`policy`] - FIFO, LRU and OPTIMAL implementations
//! - [`SimulationResult`] / [`StepRecord`] - Per-step table and aggregates
//! - [`ReplayStats`] - Hit, miss and eviction counters

mod frame_set;
pub mod policy;
mod result;
#[allow(clippy::module_inception)]
mod simulator;
mod stats;

pub use frame_set::FrameSet;
pub use result::{Outcome, PolicyComparison, SimulationResult, StepRecord, WireResult};
pub use simulator::Simulator;
pub use stats::ReplayStats;
