//! Daily dungeon sweep attempts with a tamper-resistant reset.
//!
//! Each dungeon carries its own attempt budget that refills once per
//! reset day. The reset only ever moves forward: a caller-supplied now
//! earlier than the last accepted reset is treated as a rolled-back
//! clock and refused, keeping the attempt count as it is rather than
//! granting a fresh budget.

mod clock;

pub use clock::ResetClock;

use crate::state::{DungeonId, PlayerState};

/// What a daily-reset check decided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The stored day already matches today.
    SameDay,
    /// A new day was accepted and the attempt count cleared.
    Reset,
    /// The supplied time is before the last accepted reset. Nothing was
    /// changed; the caller should surface a tamper warning.
    RefusedRollback {
        now_ms: i64,
        last_reset_ms: i64,
    },
}

/// Per-dungeon daily attempt accounting.
pub struct SweepTracker<'a> {
    state: &'a mut PlayerState,
    clock: ResetClock,
}

impl<'a> SweepTracker<'a> {
    pub fn new(state: &'a mut PlayerState, clock: ResetClock) -> Self {
        Self { state, clock }
    }

    /// Runs the day-boundary check for one dungeon and reports what
    /// happened. Every read or mutation of the daily budget goes through
    /// this first, so a stale day can never leak into a decision.
    pub fn check_reset(&mut self, dungeon: DungeonId, now_ms: i64) -> ResetOutcome {
        let today = self.clock.day_stamp(now_ms);
        let entry = self.state.sweeps.entry(dungeon).or_default();

        if entry.last_reset_date.as_deref() == Some(today.as_str()) {
            return ResetOutcome::SameDay;
        }

        if let Some(last_reset_ms) = entry.last_reset_ms {
            if now_ms < last_reset_ms {
                return ResetOutcome::RefusedRollback {
                    now_ms,
                    last_reset_ms,
                };
            }
        }

        entry.last_reset_date = Some(today);
        entry.used_attempts = 0;
        entry.last_reset_ms = Some(now_ms);
        ResetOutcome::Reset
    }

    /// Attempts left today, after the reset check.
    pub fn remaining_attempts(&mut self, dungeon: DungeonId, daily_limit: u32, now_ms: i64) -> u32 {
        self.check_reset(dungeon, now_ms);
        let used = self
            .state
            .sweeps
            .get(&dungeon)
            .map(|entry| entry.used_attempts)
            .unwrap_or(0);
        daily_limit.saturating_sub(used)
    }

    /// Whether a sweep is allowed: attempts remain and the dungeon has
    /// been cleared deep enough.
    pub fn can_sweep(
        &mut self,
        dungeon: DungeonId,
        current_level: u32,
        min_level: u32,
        daily_limit: u32,
        now_ms: i64,
    ) -> bool {
        self.remaining_attempts(dungeon, daily_limit, now_ms) > 0 && current_level >= min_level
    }

    /// Consumes one attempt. Re-checks the reset first and rejects once
    /// the budget is exhausted; the count can never exceed the limit
    /// through this path.
    pub fn use_attempt(&mut self, dungeon: DungeonId, daily_limit: u32, now_ms: i64) -> bool {
        self.check_reset(dungeon, now_ms);
        let entry = self.state.sweeps.entry(dungeon).or_default();
        if entry.used_attempts >= daily_limit {
            return false;
        }
        entry.used_attempts += 1;
        true
    }

    /// Bumps the lifetime sweep counter, independent of the daily budget.
    pub fn increment_sweep_count(&mut self, dungeon: DungeonId) -> u64 {
        let entry = self.state.sweeps.entry(dungeon).or_default();
        entry.sweep_count = entry.sweep_count.saturating_add(1);
        entry.sweep_count
    }

    /// Lifetime sweep completions for a dungeon.
    pub fn sweep_count(&self, dungeon: DungeonId) -> u64 {
        self.state
            .sweeps
            .get(&dungeon)
            .map(|entry| entry.sweep_count)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 24 * 3_600 * 1_000;
    // 2024-01-01T00:00:00Z; mid-morning in the reset zone.
    const T0: i64 = 1_704_067_200_000;
    const LIMIT: u32 = 3;

    fn tracker(state: &mut PlayerState) -> SweepTracker<'_> {
        SweepTracker::new(state, ResetClock::standard())
    }

    #[test]
    fn budget_holds_for_exactly_the_daily_limit() {
        let mut state = PlayerState::new();
        let mut sweeps = tracker(&mut state);

        for used in 0..LIMIT {
            assert_eq!(sweeps.remaining_attempts(DungeonId::Artifact, LIMIT, T0), LIMIT - used);
            assert!(sweeps.use_attempt(DungeonId::Artifact, LIMIT, T0));
        }
        assert!(!sweeps.use_attempt(DungeonId::Artifact, LIMIT, T0));
        assert_eq!(sweeps.remaining_attempts(DungeonId::Artifact, LIMIT, T0), 0);
    }

    #[test]
    fn a_new_day_refills_the_budget() {
        let mut state = PlayerState::new();
        let mut sweeps = tracker(&mut state);

        while sweeps.use_attempt(DungeonId::Gold, LIMIT, T0) {}
        assert_eq!(sweeps.remaining_attempts(DungeonId::Gold, LIMIT, T0), 0);

        assert_eq!(sweeps.remaining_attempts(DungeonId::Gold, LIMIT, T0 + DAY_MS), LIMIT);
        assert!(sweeps.use_attempt(DungeonId::Gold, LIMIT, T0 + DAY_MS));
    }

    #[test]
    fn clock_rollback_across_a_reset_is_refused() {
        let mut state = PlayerState::new();
        let mut sweeps = tracker(&mut state);

        // Establish today's reset, burn one attempt.
        assert!(sweeps.use_attempt(DungeonId::Artifact, LIMIT, T0));

        // Roll the clock back to yesterday. The date differs, so a reset
        // would fire, but the timestamp guard refuses it.
        let yesterday = T0 - DAY_MS;
        let outcome = sweeps.check_reset(DungeonId::Artifact, yesterday);
        assert_eq!(
            outcome,
            ResetOutcome::RefusedRollback {
                now_ms: yesterday,
                last_reset_ms: T0,
            }
        );

        // Attempts are untouched.
        assert_eq!(sweeps.remaining_attempts(DungeonId::Artifact, LIMIT, T0), LIMIT - 1);
    }

    #[test]
    fn refused_reset_does_not_refill_attempts() {
        let mut state = PlayerState::new();
        let mut sweeps = tracker(&mut state);

        while sweeps.use_attempt(DungeonId::Egg, LIMIT, T0) {}

        // Rolled-back "yesterday" must not hand out a fresh budget.
        assert_eq!(sweeps.remaining_attempts(DungeonId::Egg, LIMIT, T0 - DAY_MS), 0);
        assert!(!sweeps.use_attempt(DungeonId::Egg, LIMIT, T0 - DAY_MS));
    }

    #[test]
    fn sweep_count_is_lifetime_and_ignores_the_daily_budget() {
        let mut state = PlayerState::new();
        let mut sweeps = tracker(&mut state);

        assert_eq!(sweeps.sweep_count(DungeonId::Gold), 0);
        for expected in 1..=10 {
            assert_eq!(sweeps.increment_sweep_count(DungeonId::Gold), expected);
        }
        assert_eq!(sweeps.sweep_count(DungeonId::Gold), 10);
    }

    #[test]
    fn reset_dates_never_move_backwards() {
        let mut state = PlayerState::new();
        let mut sweeps = tracker(&mut state);

        sweeps.check_reset(DungeonId::Artifact, T0);
        let first = state.sweeps[&DungeonId::Artifact].last_reset_date.clone();

        let mut sweeps = tracker(&mut state);
        sweeps.check_reset(DungeonId::Artifact, T0 - 2 * DAY_MS);
        assert_eq!(state.sweeps[&DungeonId::Artifact].last_reset_date, first);
    }
}
