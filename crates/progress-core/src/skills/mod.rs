//! Skill cooldowns, buff windows, and learn/upgrade gating.
//!
//! The scheduler owns no timers. Every operation is a pure function of
//! the stored timestamps and a caller-supplied now (epoch ms), which is
//! what makes the whole state machine advanceable in tests without real
//! waiting.
//!
//! Two kinds of skill exist. An attack skill resolves instantly and its
//! cooldown starts on use. A buff skill opens a timed window on use and
//! its cooldown starts only when [`SkillScheduler::expire_buffs`]
//! observes the window's end; until then the skill reports as busy but
//! not cooling down.

mod catalog;

use crate::ledger::WalletLedger;
use crate::state::{BuffWindow, PlayerState, ResourceKind, SkillId, SkillKind};

/// Read-only cooldown/buff queries, evaluated against a supplied now.
pub struct SkillClock<'a> {
    state: &'a PlayerState,
}

impl<'a> SkillClock<'a> {
    pub fn new(state: &'a PlayerState) -> Self {
        Self { state }
    }

    /// Seconds of cooldown left at `now_ms`; zero if never used.
    pub fn remaining_cooldown(&self, skill: SkillId, now_ms: i64) -> f64 {
        let Some(&last_used) = self.state.skills.last_used_ms.get(&skill) else {
            return 0.0;
        };
        let elapsed_secs = (now_ms - last_used) as f64 / 1_000.0;
        (f64::from(skill.cooldown_secs()) - elapsed_secs).max(0.0)
    }

    /// True while `now_ms` falls inside the skill's open buff window.
    ///
    /// The window is half-open: active at `start_ms`, inactive at
    /// `end_ms`, even if the expiry transition has not run yet.
    pub fn is_buff_active(&self, skill: SkillId, now_ms: i64) -> bool {
        self.state
            .skills
            .active_buffs
            .get(&skill)
            .is_some_and(|window| window.start_ms <= now_ms && now_ms < window.end_ms)
    }

    /// Whether the skill could be used at `now_ms`.
    pub fn can_use(&self, skill: SkillId, now_ms: i64) -> bool {
        if !self.state.skills.learned.contains(&skill) {
            return false;
        }
        if self.remaining_cooldown(skill, now_ms) > 0.0 {
            return false;
        }
        // A buff window still counts as busy until its expiry has been
        // observed and the cooldown clock started.
        !(skill.kind() == SkillKind::Buff && self.state.skills.active_buffs.contains_key(&skill))
    }

    /// Effect magnitude at the skill's current level, recomputed on
    /// every read so a level change between reads is always visible.
    pub fn power(&self, skill: SkillId) -> i64 {
        match self.state.skill_level(skill) {
            Some(level) => skill.power(level),
            None => 0,
        }
    }
}

/// Mutating side of the skill state machine.
pub struct SkillScheduler<'a> {
    state: &'a mut PlayerState,
}

impl<'a> SkillScheduler<'a> {
    pub fn new(state: &'a mut PlayerState) -> Self {
        Self { state }
    }

    fn clock(&self) -> SkillClock<'_> {
        SkillClock::new(self.state)
    }

    /// Uses a skill at `now_ms`. For attack skills the cooldown clock
    /// starts immediately; for buff skills a window opens and the
    /// cooldown clock deliberately does not start.
    pub fn try_use(&mut self, skill: SkillId, now_ms: i64) -> bool {
        if !self.clock().can_use(skill, now_ms) {
            return false;
        }
        match skill.kind() {
            SkillKind::Attack => {
                self.state.skills.last_used_ms.insert(skill, now_ms);
            }
            SkillKind::Buff => {
                let duration_ms = i64::from(skill.buff_duration_secs()) * 1_000;
                self.state.skills.active_buffs.insert(
                    skill,
                    BuffWindow {
                        start_ms: now_ms,
                        end_ms: now_ms + duration_ms,
                    },
                );
            }
        }
        true
    }

    /// Drives the buffed-to-cooling transition. Removes every window
    /// whose end `now_ms` has reached and starts that skill's cooldown
    /// at `now_ms`. This is the only place a buff skill's cooldown clock
    /// starts. Returns the skills whose buff just ended.
    pub fn expire_buffs(&mut self, now_ms: i64) -> Vec<SkillId> {
        let expired: Vec<SkillId> = self
            .state
            .skills
            .active_buffs
            .iter()
            .filter(|(_, window)| now_ms >= window.end_ms)
            .map(|(&skill, _)| skill)
            .collect();

        for &skill in &expired {
            self.state.skills.active_buffs.remove(&skill);
            self.state.skills.last_used_ms.insert(skill, now_ms);
        }
        expired
    }

    /// Learns a skill for its skill-point price at level 1.
    pub fn try_learn(&mut self, skill: SkillId) -> bool {
        if self.state.skills.learned.contains(&skill) {
            return false;
        }
        if !WalletLedger::new(self.state).spend(ResourceKind::SkillPoints, skill.learn_cost_sp()) {
            return false;
        }
        self.state.skills.learned.insert(skill);
        self.state.skills.levels.insert(skill, 1);
        true
    }

    /// Raises a learned skill one level for its skill-point price.
    pub fn try_upgrade(&mut self, skill: SkillId) -> bool {
        let Some(level) = self.state.skill_level(skill) else {
            return false;
        };
        if level >= skill.max_level() {
            return false;
        }
        let cost = skill.upgrade_cost_sp(level);
        if !WalletLedger::new(self.state).spend(ResourceKind::SkillPoints, cost) {
            return false;
        }
        self.state.skills.levels.insert(skill, level + 1);
        true
    }

    /// Toggles auto-use for a learned skill.
    pub fn set_auto_use(&mut self, skill: SkillId, enabled: bool) -> bool {
        if !self.state.skills.learned.contains(&skill) {
            return false;
        }
        self.state.skills.auto_use.insert(skill, enabled);
        true
    }
}
