//! Authoritative progression state representation.
//!
//! This module owns the single mutable aggregate every component operates
//! on. Hosts create one [`PlayerState`] per session (loaded or defaulted),
//! hand it to the component engines by mutable borrow, and persist it
//! through the runtime crate's store.

mod ids;
mod types;

use std::collections::BTreeMap;

pub use ids::{ArtifactId, DungeonId, EggId, ResourceKind, SkillId, SkillKind};
pub use types::{BuffWindow, Identity, SkillBook, StageProgress, StatLevels, SweepState, Wallet};

/// Canonical snapshot of one player's progression.
///
/// All fields persist; transient concerns (pending save timers and the
/// like) live in the runtime layer, never here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PlayerState {
    pub wallet: Wallet,
    pub stats: StatLevels,
    pub stage: StageProgress,
    pub skills: SkillBook,

    /// Highest cleared level per dungeon. Absent entries read as 1.
    pub dungeon_levels: BTreeMap<DungeonId, u32>,
    /// Owned artifact levels. Absent entries read as 0 (not owned).
    pub artifact_levels: BTreeMap<ArtifactId, u32>,
    /// How many of each egg the gacha has produced.
    pub egg_counts: BTreeMap<EggId, u32>,
    /// Per-dungeon daily sweep bookkeeping.
    pub sweeps: BTreeMap<DungeonId, SweepState>,

    /// Refused daily-reset count, kept for tamper diagnostics.
    pub tamper_warnings: u32,

    pub identity: Identity,

    // ------------------------------------------------------------------
    // Legacy single-dungeon sweep fields (schema v1). Migrated into
    // `sweeps` at load time; kept serialized, never read afterwards.
    // ------------------------------------------------------------------
    pub artifact_dungeon_used_attempts: u32,
    pub artifact_dungeon_last_reset_date: Option<String>,
    pub artifact_dungeon_last_reset_ms: Option<i64>,
    pub artifact_dungeon_sweep_count: u64,
}

impl PlayerState {
    /// Fresh state for a brand-new player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of a dungeon, defaulting to 1 for dungeons never entered.
    pub fn dungeon_level(&self, dungeon: DungeonId) -> u32 {
        self.dungeon_levels.get(&dungeon).copied().unwrap_or(1)
    }

    /// Level of an artifact, 0 when not owned.
    pub fn artifact_level(&self, artifact: ArtifactId) -> u32 {
        self.artifact_levels.get(&artifact).copied().unwrap_or(0)
    }

    /// Total eggs hatched across all egg kinds.
    pub fn total_egg_count(&self) -> u32 {
        self.egg_counts.values().sum()
    }

    /// Level of a learned skill, `None` when unlearned.
    pub fn skill_level(&self, skill: SkillId) -> Option<u32> {
        self.skills.levels.get(&skill).copied()
    }
}
