//! Chapter/stage advancement and enemy scaling.
//!
//! Twenty stages per chapter, ten kills per stage. The tenth enemy of a
//! stage is the boss unless boss stages are being skipped, in which case
//! the kill counter loops and the stage never advances. The scaling
//! helpers are pure functions of the counters so the UI can read them
//! every frame.

use crate::config::ProgressConfig;
use crate::state::StageProgress;

/// What a registered kill did to the counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KillOutcome {
    /// Still inside the current stage.
    Progressed,
    /// The stage's kill quota was met while skipping bosses; the counter
    /// looped without advancing.
    Looped,
    /// Advanced to the next stage.
    StageCleared,
    /// Advanced past stage 20 into the next chapter.
    ChapterCleared,
}

/// Absolute stage index across chapters, 1-based.
pub fn total_stage_number(progress: &StageProgress) -> u32 {
    (progress.chapter - 1) * ProgressConfig::STAGES_PER_CHAPTER + progress.stage
}

/// The tenth kill of a stage is the boss (zero-indexed check against the
/// kill counter), unless bosses are being skipped.
pub fn is_boss_stage(progress: &StageProgress) -> bool {
    !progress.skip_boss_stage && progress.kills_in_stage == ProgressConfig::KILLS_PER_STAGE - 1
}

/// Current enemy hit points. Bosses have four times the stage HP.
pub fn enemy_hp(progress: &StageProgress) -> i64 {
    let total = total_stage_number(progress);
    let base = (10.0 * 1.5_f64.powi(total as i32 - 1) * 0.25).floor() as i64;
    if is_boss_stage(progress) { base * 4 } else { base }
}

/// Coin reward for defeating the current enemy.
pub fn enemy_gold_reward(progress: &StageProgress) -> i64 {
    enemy_hp(progress) * 2
}

/// Display label, e.g. `3-17`.
pub fn stage_label(progress: &StageProgress) -> String {
    format!("{}-{}", progress.chapter, progress.stage)
}

/// Registers one enemy defeat and advances the counters.
pub fn register_kill(progress: &mut StageProgress) -> KillOutcome {
    progress.kills_in_stage += 1;

    if progress.kills_in_stage < ProgressConfig::KILLS_PER_STAGE {
        return KillOutcome::Progressed;
    }

    progress.kills_in_stage = 0;
    if progress.skip_boss_stage {
        return KillOutcome::Looped;
    }

    progress.stage += 1;
    if progress.stage > ProgressConfig::STAGES_PER_CHAPTER {
        progress.stage = 1;
        progress.chapter += 1;
        return KillOutcome::ChapterCleared;
    }
    KillOutcome::StageCleared
}
