//! Progression tuning constants and runtime-tunable parameters.

use crate::state::DungeonId;

/// Balance constants shared by every component.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressConfig {
    /// Milliseconds the debounced-save window stays open.
    pub debounce_save_ms: u64,
}

impl ProgressConfig {
    // ===== compile-time constants =====
    /// Stages per chapter; crossing stage 20 rolls into the next chapter.
    pub const STAGES_PER_CHAPTER: u32 = 20;
    /// Kills needed to clear a stage. The last kill of a stage is the boss.
    pub const KILLS_PER_STAGE: u32 = 10;
    /// Attack-power levels per pricing/value block.
    pub const ATTACK_POWER_BLOCK: u32 = 10;
    /// Attack speed upgrade cap.
    pub const ATTACK_SPEED_MAX_LEVEL: u32 = 15;
    /// Crit chance upgrade cap.
    pub const CRIT_CHANCE_MAX_LEVEL: u32 = 100;
    /// Crit damage upgrade cap.
    pub const CRIT_DAMAGE_MAX_LEVEL: u32 = 100;
    /// Hard cap on coin-bought skill points. The purchase mutator enforces
    /// this value; the cost getter mirrors it so the two cannot diverge.
    pub const SP_PURCHASE_CAP: u32 = 10;
    /// Base price of the first coin-bought skill point.
    pub const SP_PURCHASE_BASE_COST: i64 = 100_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DEBOUNCE_SAVE_MS: u64 = 1_000;

    pub fn new() -> Self {
        Self {
            debounce_save_ms: Self::DEFAULT_DEBOUNCE_SAVE_MS,
        }
    }

    /// Daily sweep attempt budget per dungeon.
    pub fn daily_sweep_limit(&self, dungeon: DungeonId) -> u32 {
        match dungeon {
            DungeonId::Artifact => 3,
            DungeonId::Gold => 5,
            DungeonId::Egg => 5,
        }
    }

    /// Minimum cleared dungeon level before sweeping unlocks.
    pub fn min_sweep_level(&self, dungeon: DungeonId) -> u32 {
        match dungeon {
            DungeonId::Artifact => 2,
            DungeonId::Gold => 2,
            DungeonId::Egg => 2,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self::new()
    }
}
