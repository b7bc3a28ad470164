//! Deterministic progression rules for the idle-clicker economy.
//!
//! `progress-core` defines the canonical state aggregate and the pure
//! component engines that mutate it: resource ledgers, stat formulas,
//! the skill cooldown/buff scheduler, daily sweep accounting, and stage
//! advancement. Nothing here performs I/O or reads a clock; persistence
//! and wall time belong to the runtime crate, which supplies every
//! time-dependent call with an explicit now in epoch milliseconds.
pub mod collection;
pub mod config;
pub mod ledger;
pub mod skills;
pub mod stage;
pub mod state;
pub mod stats;
pub mod sweep;

pub use collection::CollectionEngine;
pub use config::ProgressConfig;
pub use ledger::WalletLedger;
pub use skills::{SkillClock, SkillScheduler};
pub use stage::KillOutcome;
pub use state::{
    ArtifactId, BuffWindow, DungeonId, EggId, Identity, PlayerState, ResourceKind, SkillBook,
    SkillId, SkillKind, StageProgress, StatLevels, SweepState, Wallet,
};
pub use stats::{StatBook, StatEngine};
pub use sweep::{ResetClock, ResetOutcome, SweepTracker};
