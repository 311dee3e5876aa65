//! Simulator - replays a reference string against one eviction policy.
//!
//! The [`Simulator`] provides:
//! - The shared step loop (hit test, miss handling, snapshot)
//! - Fresh frames and policy state for every run
//! - Side-by-side runs of all policies via [`Simulator::compare`]

use crate::common::config::SimulationConfig;
use crate::common::{Error, Result};
use crate::reference::ReferenceString;
use crate::simulator::policy::{EvictionPolicy, Fifo, Lru, Optimal, PolicyKind};
use crate::simulator::{
    FrameSet, Outcome, PolicyComparison, ReplayStats, SimulationResult, StepRecord,
};

/// Drives eviction policies over a validated reference string.
///
/// A simulator borrows its input and holds no mutable state, so one value
/// can serve any number of runs, from any number of threads.
///
/// # Usage
/// ```
/// use pagesim::common::config::SimulationConfig;
/// use pagesim::{PolicyKind, ReferenceString, Simulator};
///
/// let refs = ReferenceString::parse("7045679").unwrap();
/// let sim = Simulator::new(&refs, SimulationConfig::new(3).unwrap());
///
/// assert_eq!(sim.run_kind(PolicyKind::Fifo).misses(), 7);
/// assert_eq!(sim.run_kind(PolicyKind::Optimal).misses(), 6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator<'a> {
    references: &'a ReferenceString,
    config: SimulationConfig,
}

impl<'a> Simulator<'a> {
    pub fn new(references: &'a ReferenceString, config: SimulationConfig) -> Self {
        Self { references, config }
    }

    /// Build a fresh policy of `kind` sized for this simulation.
    pub fn policy(&self, kind: PolicyKind) -> Box<dyn EvictionPolicy + 'a> {
        let frames = self.config.frame_count();
        match kind {
            PolicyKind::Fifo => Box::new(Fifo::new(frames)),
            PolicyKind::Lru => Box::new(Lru::new(frames)),
            PolicyKind::Optimal => {
                Box::new(Optimal::new(self.references, self.config.lookahead()))
            }
        }
    }

    /// Replay with a freshly built policy of `kind`.
    pub fn run_kind(&self, kind: PolicyKind) -> SimulationResult {
        self.replay(self.policy(kind))
    }

    /// Replay every reference through a caller-built `policy`.
    ///
    /// # Errors
    /// `Error::InvariantViolation` if `policy` is sized for a different frame
    /// count or looks ahead in a different reference string.
    pub fn run<P: EvictionPolicy>(&self, policy: P) -> Result<SimulationResult> {
        self.check_binding(&policy)?;
        Ok(self.replay(policy))
    }

    fn check_binding<P: EvictionPolicy>(&self, policy: &P) -> Result<()> {
        let frames = self.config.frame_count();
        if let Some(capacity) = policy.capacity() {
            if capacity != frames {
                return Err(Error::InvariantViolation(format!(
                    "{} policy sized for {} frames, simulation has {}",
                    policy.kind(),
                    capacity,
                    frames
                )));
            }
        }
        if let Some(references) = policy.lookahead() {
            if !std::ptr::eq(references, self.references) && references != self.references {
                return Err(Error::InvariantViolation(format!(
                    "{} policy looks ahead in a different reference string",
                    policy.kind()
                )));
            }
        }
        Ok(())
    }

    /// For each position: test for a hit, otherwise let the policy pick a
    /// slot and install the page there, then snapshot all frames.
    fn replay<P: EvictionPolicy>(&self, mut policy: P) -> SimulationResult {
        let kind = policy.kind();
        let capacity = self.config.frame_count();
        let mut frames = FrameSet::new(capacity);
        let mut stats = ReplayStats::new();
        let mut table = Vec::with_capacity(self.references.len());

        log::debug!(
            "{}: replaying {} references over {} frames",
            kind,
            self.references.len(),
            capacity
        );

        for (position, page) in self.references.iter().enumerate() {
            let (outcome, evicted) = match frames.position_of(page) {
                Some(slot) => {
                    policy.record_hit(slot, position);
                    stats.record_hit();
                    (Outcome::Hit, None)
                }
                None => {
                    let slot = policy.select_slot(&frames, position);
                    let previous = frames.install(slot, page);
                    policy.record_fill(slot, position);
                    stats.record_miss(!previous.is_empty());
                    (Outcome::Miss, previous.page())
                }
            };

            table.push(StepRecord {
                position,
                reference: page,
                outcome,
                evicted,
                slots: frames.snapshot(),
            });
        }

        log::debug!(
            "{}: {} misses, {} evictions in {} steps",
            kind,
            stats.misses,
            stats.evictions,
            table.len()
        );

        SimulationResult::new(kind, capacity, stats, table)
    }

    /// Run FIFO, LRU and OPTIMAL independently on the same input.
    pub fn compare(&self) -> PolicyComparison {
        PolicyComparison {
            fifo: self.run_kind(PolicyKind::Fifo),
            lru: self.run_kind(PolicyKind::Lru),
            optimal: self.run_kind(PolicyKind::Optimal),
        }
    }
}
