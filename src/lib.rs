//! pagesim - A demand-paging simulator for classic page-replacement policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           pagesim                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Input (reference/)                          │   │
//! │  │      "7045679" → ReferenceString → NextUseIndex          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulator (simulator/)                      │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Eviction Policies: FIFO | LRU | OPTIMAL       │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        FrameSet + ReplayStats + step loop                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │   SimulationResult: misses, steps, frames, step table    │   │
//! │  │            → WireResult (serde) for callers              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Slot, Error, config)
//! - [`reference`] - Reference string parsing and lookahead index
//! - [`simulator`] - Frames, policies, the step loop and its results
//!
//! # Quick Start
//! ```
//! use pagesim::PolicyKind;
//!
//! let result = pagesim::simulate("7045679", 3, PolicyKind::Lru).unwrap();
//! assert_eq!(result.misses(), 7);
//! assert_eq!(result.steps(), 7);
//!
//! let all = pagesim::compare("7045679", 3).unwrap();
//! assert_eq!(all.optimal.misses(), 6);
//! ```

pub mod common;
pub mod reference;
pub mod simulator;

pub use common::config::{LookaheadMode, SimulationConfig, EMPTY_SLOT, MAX_FRAMES, MIN_FRAMES};
pub use common::{Error, ErrorKind, FrameId, PageId, Result, Slot};
pub use reference::{NextUseIndex, ReferenceString};
pub use simulator::policy::{EvictionPolicy, PolicyKind};
pub use simulator::{
    FrameSet, Outcome, PolicyComparison, ReplayStats, SimulationResult, Simulator, StepRecord,
    WireResult,
};

/// Parse and validate `references` and `frames`, then replay one policy.
///
/// All validation happens before the first step, so an error never comes
/// with a partial table.
pub fn simulate(references: &str, frames: usize, kind: PolicyKind) -> Result<SimulationResult> {
    let references = ReferenceString::parse(references)?;
    let config = SimulationConfig::new(frames)?;
    Ok(Simulator::new(&references, config).run_kind(kind))
}

/// Like [`simulate`], but replays FIFO, LRU and OPTIMAL.
pub fn compare(references: &str, frames: usize) -> Result<PolicyComparison> {
    let references = ReferenceString::parse(references)?;
    let config = SimulationConfig::new(frames)?;
    Ok(Simulator::new(&references, config).compare())
}
