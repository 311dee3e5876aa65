//! Simulation output: per-step snapshots and aggregates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageId, Result, Slot};
use crate::simulator::policy::PolicyKind;
use crate::simulator::ReplayStats;

/// Whether a reference found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Hit,
    Miss,
}

impl Outcome {
    #[inline]
    pub fn is_miss(&self) -> bool {
        matches!(self, Outcome::Miss)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit => f.write_str("HIT"),
            Outcome::Miss => f.write_str("MISS"),
        }
    }
}

/// The frame set as it stood after one reference was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub position: usize,
    pub reference: PageId,
    pub outcome: Outcome,
    /// Page displaced by this reference, if any.
    pub evicted: Option<PageId>,
    /// One entry per frame, in slot order.
    pub slots: Vec<Slot>,
}

/// One trace line, e.g. `Step 1: reference 7 => MISS | Frames: [7, -, -]`.
impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {}: reference {} => {} | Frames: [",
            self.position + 1,
            self.reference,
            self.outcome
        )?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", slot)?;
        }
        f.write_str("]")
    }
}

/// Outcome of replaying one policy over one reference string.
///
/// Invariants, established by the simulator:
/// - `table().len() == steps()`
/// - every row has exactly `frames()` slots
/// - `misses() <= steps()`
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    policy: PolicyKind,
    frames: usize,
    stats: ReplayStats,
    table: Vec<StepRecord>,
}

impl SimulationResult {
    pub(crate) fn new(
        policy: PolicyKind,
        frames: usize,
        stats: ReplayStats,
        table: Vec<StepRecord>,
    ) -> Self {
        debug_assert_eq!(stats.references() as usize, table.len());
        debug_assert!(table.iter().all(|row| row.slots.len() == frames));
        Self {
            policy,
            frames,
            stats,
            table,
        }
    }

    #[inline]
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    #[inline]
    pub fn misses(&self) -> usize {
        self.stats.misses as usize
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Misses that displaced a resident page.
    #[inline]
    pub fn evictions(&self) -> usize {
        self.stats.evictions as usize
    }

    #[inline]
    pub fn stats(&self) -> ReplayStats {
        self.stats
    }

    #[inline]
    pub fn table(&self) -> &[StepRecord] {
        &self.table
    }

    /// Snapshot rows only, without step metadata.
    pub fn rows(&self) -> impl Iterator<Item = &[Slot]> + '_ {
        self.table.iter().map(|step| step.slots.as_slice())
    }

    /// `(steps - misses) / steps * 100`, or 0.0 with no steps.
    pub fn hit_rate(&self) -> f64 {
        self.stats.hit_rate()
    }

    /// The serializable form handed to delivery layers.
    pub fn to_wire(&self) -> WireResult {
        WireResult {
            misses: self.misses(),
            steps: self.steps(),
            frames: self.frames,
            table: self.rows().map(<[Slot]>::to_vec).collect(),
            hit_rate: self.hit_rate(),
        }
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ misses: {}, steps: {}, frames: {}, hit_rate: {:.2}% }}",
            self.policy,
            self.misses(),
            self.steps(),
            self.frames,
            self.hit_rate()
        )
    }
}

/// Wire shape of a [`SimulationResult`].
///
/// Table cells serialize as integers, with `-1` for an empty slot:
/// ```json
/// {"misses":1,"steps":2,"frames":2,"table":[[0,-1],[0,-1]],"hitRate":50.0}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireResult {
    pub misses: usize,
    pub steps: usize,
    pub frames: usize,
    pub table: Vec<Vec<Slot>>,
    pub hit_rate: f64,
}

impl WireResult {
    /// Check the shape invariants of a result produced elsewhere, e.g. by
    /// another engine behind the same wire contract.
    ///
    /// # Errors
    /// `Error::InvariantViolation` naming the first broken invariant.
    pub fn validate(&self) -> Result<()> {
        if self.table.len() != self.steps {
            return Err(Error::InvariantViolation(format!(
                "table has {} rows for {} steps",
                self.table.len(),
                self.steps
            )));
        }
        if let Some((i, row)) = self
            .table
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.frames)
        {
            return Err(Error::InvariantViolation(format!(
                "row {} has {} slots for {} frames",
                i,
                row.len(),
                self.frames
            )));
        }
        if self.misses > self.steps {
            return Err(Error::InvariantViolation(format!(
                "{} misses exceed {} steps",
                self.misses, self.steps
            )));
        }
        Ok(())
    }
}

/// Results of all three policies on the same input.
///
/// Each run starts from fresh frames; nothing is shared between them.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyComparison {
    pub fifo: SimulationResult,
    pub lru: SimulationResult,
    pub optimal: SimulationResult,
}

impl PolicyComparison {
    pub fn get(&self, kind: PolicyKind) -> &SimulationResult {
        match kind {
            PolicyKind::Fifo => &self.fifo,
            PolicyKind::Lru => &self.lru,
            PolicyKind::Optimal => &self.optimal,
        }
    }

    /// Results in FIFO, LRU, OPTIMAL order.
    pub fn iter(&self) -> impl Iterator<Item = &SimulationResult> + '_ {
        PolicyKind::ALL.into_iter().map(move |kind| self.get(kind))
    }

    /// The lowest miss count among the policies.
    pub fn fewest_misses(&self) -> usize {
        self.iter().map(SimulationResult::misses).min().unwrap_or(0)
    }
}

impl fmt::Display for PolicyComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, result) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", result)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(position: usize, page: u8, outcome: Outcome, slots: Vec<Slot>) -> StepRecord {
        StepRecord {
            position,
            reference: PageId(page),
            outcome,
            evicted: None,
            slots,
        }
    }

    fn sample() -> SimulationResult {
        let mut stats = ReplayStats::new();
        stats.record_miss(false);
        stats.record_hit();
        let row = vec![Slot::Occupied(PageId(0)), Slot::Empty];
        SimulationResult::new(
            PolicyKind::Lru,
            2,
            stats,
            vec![
                step(0, 0, Outcome::Miss, row.clone()),
                step(1, 0, Outcome::Hit, row),
            ],
        )
    }

    #[test]
    fn test_step_display() {
        let record = step(
            0,
            7,
            Outcome::Miss,
            vec![Slot::Occupied(PageId(7)), Slot::Empty, Slot::Empty],
        );
        assert_eq!(
            record.to_string(),
            "Step 1: reference 7 => MISS | Frames: [7, -, -]"
        );
    }

    #[test]
    fn test_result_accessors() {
        let result = sample();
        assert_eq!(result.policy(), PolicyKind::Lru);
        assert_eq!(result.misses(), 1);
        assert_eq!(result.steps(), 2);
        assert_eq!(result.frames(), 2);
        assert_eq!(result.evictions(), 0);
        assert_eq!(result.hit_rate(), 50.0);
        assert_eq!(result.rows().count(), 2);
    }

    #[test]
    fn test_result_display() {
        assert_eq!(
            sample().to_string(),
            "LRU { misses: 1, steps: 2, frames: 2, hit_rate: 50.00% }"
        );
    }

    #[test]
    fn test_wire_result() {
        let wire = sample().to_wire();
        assert_eq!(wire.misses, 1);
        assert_eq!(wire.steps, 2);
        assert_eq!(wire.frames, 2);
        assert_eq!(wire.table.len(), 2);
        assert_eq!(i32::from(wire.table[0][1]), -1);
        assert_eq!(wire.hit_rate, 50.0);
        assert!(wire.validate().is_ok());
    }

    #[test]
    fn test_wire_validate_catches_bad_shape() {
        let mut wire = sample().to_wire();
        wire.table[1].pop();
        assert_eq!(
            wire.validate(),
            Err(Error::InvariantViolation("row 1 has 1 slots for 2 frames".into()))
        );

        let mut wire = sample().to_wire();
        wire.steps = 3;
        assert!(matches!(wire.validate(), Err(Error::InvariantViolation(_))));

        let mut wire = sample().to_wire();
        wire.misses = 5;
        assert_eq!(wire.validate().unwrap_err().kind(), crate::ErrorKind::InvariantViolation);
    }
}
