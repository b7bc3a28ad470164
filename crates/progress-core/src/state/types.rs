//! Sub-structures of the player progression state.
//!
//! Every struct here derives per-field serde defaults so a partially
//! corrupt snapshot still loads field by field instead of failing whole.

use std::collections::{BTreeMap, BTreeSet};

use super::ids::SkillId;

/// Spendable resource balances. All balances stay non-negative; debits go
/// through [`crate::ledger::WalletLedger`] which rejects overdrafts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Wallet {
    pub coins: i64,
    pub rubies: i64,
    pub meat: i64,
    pub skill_points: i64,
    /// How many skill points have been bought with coins. Drives the
    /// escalating purchase price and its hard cap.
    pub sp_purchased: u32,
}

impl Default for Wallet {
    fn default() -> Self {
        Self {
            coins: 0,
            rubies: 0,
            meat: 0,
            skill_points: 0,
            sp_purchased: 0,
        }
    }
}

/// Raw upgrade levels for the four combat stats.
///
/// Levels are inputs to the formulas in [`crate::stats`]; displayed values
/// always go through the effective-value getters, never these fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct StatLevels {
    /// Starts at 1; every other stat level starts at 0.
    pub attack_power: u32,
    pub attack_speed: u32,
    pub crit_chance: u32,
    pub crit_damage: u32,
}

impl Default for StatLevels {
    fn default() -> Self {
        Self {
            attack_power: 1,
            attack_speed: 0,
            crit_chance: 0,
            crit_damage: 0,
        }
    }
}

/// Chapter/stage counters and the per-stage kill tally.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct StageProgress {
    /// 1-based chapter counter.
    pub chapter: u32,
    /// Stage within the chapter, always in 1..=20.
    pub stage: u32,
    /// Kills inside the current stage, 0..=9 between advancements.
    pub kills_in_stage: u32,
    /// When set, the kill counter loops and the stage never advances.
    pub skip_boss_stage: bool,
}

impl Default for StageProgress {
    fn default() -> Self {
        Self {
            chapter: 1,
            stage: 1,
            kills_in_stage: 0,
            skip_boss_stage: false,
        }
    }
}

/// A timed buff window opened by using a buff skill.
///
/// `end_ms > start_ms` always holds; the window is removed by the
/// scheduler once a caller-supplied now at or past `end_ms` is observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct BuffWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl Default for BuffWindow {
    fn default() -> Self {
        Self {
            start_ms: 0,
            end_ms: 0,
        }
    }
}

/// Everything skill related: which skills are learned, their levels, the
/// auto-use toggles, last-use timestamps, and open buff windows.
///
/// Invariant: a [`SkillId`] has an entry in `levels` if and only if it is
/// in `learned`, and that level sits in `1..=max_level`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SkillBook {
    pub learned: BTreeSet<SkillId>,
    pub levels: BTreeMap<SkillId, u32>,
    pub auto_use: BTreeMap<SkillId, bool>,
    /// Epoch ms of the moment each skill's cooldown last started.
    pub last_used_ms: BTreeMap<SkillId, i64>,
    pub active_buffs: BTreeMap<SkillId, BuffWindow>,
}

/// Daily sweep bookkeeping for one dungeon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SweepState {
    /// Day stamp (`YYYY-MM-DD`, UTC+9) of the last accepted reset.
    pub last_reset_date: Option<String>,
    /// Attempts consumed since that reset.
    pub used_attempts: u32,
    /// Epoch ms of the last accepted reset; a now earlier than this is a
    /// clock rollback and refuses the reset.
    pub last_reset_ms: Option<i64>,
    /// Lifetime sweep completions, independent of the daily budget.
    pub sweep_count: u64,
}

/// Account/session identity round-tripped through external auth and save
/// collaborators. Never interpreted by the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Identity {
    pub uuid: String,
    pub sid: String,
}
