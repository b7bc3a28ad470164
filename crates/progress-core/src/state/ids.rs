//! Identifier enums for everything the progression state tracks by id.
//!
//! All of these serialize as plain strings so they can key JSON maps in the
//! persisted snapshot.

use strum::{Display, EnumIter, EnumString};

/// The four spendable player resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    Coins,
    Rubies,
    Meat,
    SkillPoints,
}

/// How a skill resolves when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillKind {
    /// Instant effect, then the cooldown starts immediately.
    Attack,
    /// Timed effect; the cooldown starts only once the buff window has
    /// been observed to end.
    Buff,
}

/// Playable skills.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SkillId {
    /// Single heavy hit scaling off attack power.
    PowerStrike,
    /// Screen-wide strike with a per-level damage table.
    Meteor,
    /// Attack-speed buff.
    Berserk,
    /// Gold-gain buff.
    GoldenTouch,
}

/// Sweepable dungeons. Each has its own daily attempt budget.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DungeonId {
    Artifact,
    Gold,
    Egg,
}

/// Passive stat artifacts. Each boosts exactly one stat per level.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArtifactId {
    /// Attack power, percent per level.
    WarDrum,
    /// Attack speed, percent per level.
    HawkFeather,
    /// Crit chance, flat points per level.
    LuckyCoin,
    /// Crit damage, flat points per level.
    Executioner,
}

/// Hatchable eggs from the egg dungeon gacha.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EggId {
    Dragon,
    Phoenix,
    Turtle,
}
