//! Single entry point external layers call into.
//!
//! The UI/game-loop layer reads accessors every frame and invokes
//! mutators on input; the remote-sync layer exchanges snapshots. Every
//! mutator here finishes by requesting persistence: earn-class changes
//! (rewards, counters, toggles) debounce, gate-class changes (spends,
//! upgrades, attempt consumption) write immediately so a reload cannot
//! replay them.
//!
//! Time never comes from inside: callers pass `now_ms` from their own
//! frame clock and the engine trusts it.

use std::sync::Arc;
use std::time::Duration;

use progress_core::{
    ArtifactId, CollectionEngine, DungeonId, EggId, KillOutcome, PlayerState, ProgressConfig,
    ResetClock, ResetOutcome, ResourceKind, SkillClock, SkillId, SkillScheduler, StatBook,
    StatEngine, SweepTracker, WalletLedger, stage, stats::formula,
};

use crate::repository::SaveRepository;
use crate::snapshot::SaveFile;
use crate::store::ProgressStore;

/// Facade over the whole progression engine for one player session.
pub struct PlayerSession {
    store: ProgressStore,
    config: ProgressConfig,
    clock: ResetClock,
}

impl PlayerSession {
    /// Opens a session against `repo`: loads the saved snapshot when one
    /// exists, otherwise starts a fresh player.
    pub fn open(repo: Arc<dyn SaveRepository>) -> Self {
        Self::with_parts(repo, ProgressConfig::default(), ResetClock::standard())
    }

    /// Opens a session with explicit tuning and reset clock, for tests
    /// and special hosts.
    pub fn with_parts(
        repo: Arc<dyn SaveRepository>,
        config: ProgressConfig,
        clock: ResetClock,
    ) -> Self {
        let debounce = Duration::from_millis(config.debounce_save_ms);
        let mut store = ProgressStore::new(repo, debounce);
        if store.load() {
            tracing::info!("session opened from saved snapshot");
        } else {
            tracing::info!("session opened with a fresh player");
        }
        Self {
            store,
            config,
            clock,
        }
    }

    /// Read-only view of the whole state.
    pub fn state(&self) -> &PlayerState {
        self.store.state()
    }

    // ==================================================================
    // Resources
    // ==================================================================

    pub fn balance(&self, kind: ResourceKind) -> i64 {
        match kind {
            ResourceKind::Coins => self.state().wallet.coins,
            ResourceKind::Rubies => self.state().wallet.rubies,
            ResourceKind::Meat => self.state().wallet.meat,
            ResourceKind::SkillPoints => self.state().wallet.skill_points,
        }
    }

    /// Credits a resource. Earning is frequent and low-stakes, so the
    /// write debounces.
    pub fn add_resource(&mut self, kind: ResourceKind, amount: i64) {
        if WalletLedger::new(self.store.state_mut()).add(kind, amount) {
            self.store.debounced_save();
        }
    }

    /// Debits a resource. A successful spend gates whatever the caller
    /// does next, so the write is immediate.
    pub fn spend_resource(&mut self, kind: ResourceKind, amount: i64) -> bool {
        if !WalletLedger::new(self.store.state_mut()).spend(kind, amount) {
            return false;
        }
        self.store.save();
        true
    }

    pub fn coins(&self) -> i64 {
        self.balance(ResourceKind::Coins)
    }

    pub fn add_coins(&mut self, amount: i64) {
        self.add_resource(ResourceKind::Coins, amount);
    }

    pub fn spend_coins(&mut self, amount: i64) -> bool {
        self.spend_resource(ResourceKind::Coins, amount)
    }

    // ==================================================================
    // Stats
    // ==================================================================

    pub fn attack_power(&self) -> i64 {
        StatBook::new(self.state()).attack_power()
    }

    pub fn attack_speed(&self) -> f64 {
        StatBook::new(self.state()).attack_speed()
    }

    pub fn crit_chance(&self) -> f64 {
        StatBook::new(self.state()).crit_chance()
    }

    pub fn crit_damage(&self) -> f64 {
        StatBook::new(self.state()).crit_damage()
    }

    pub fn attack_power_upgrade_cost(&self) -> i64 {
        formula::attack_power_upgrade_cost(self.state().stats.attack_power)
    }

    pub fn attack_speed_upgrade_cost(&self) -> i64 {
        formula::attack_speed_upgrade_cost(self.state().stats.attack_speed)
    }

    pub fn crit_chance_upgrade_cost(&self) -> i64 {
        formula::crit_chance_upgrade_cost(self.state().stats.crit_chance)
    }

    pub fn crit_damage_upgrade_cost(&self) -> i64 {
        formula::crit_damage_upgrade_cost(self.state().stats.crit_damage)
    }

    pub fn upgrade_attack_power(&mut self) -> bool {
        self.gated(|state| StatEngine::new(state).try_upgrade_attack_power())
    }

    pub fn upgrade_attack_speed(&mut self) -> bool {
        self.gated(|state| StatEngine::new(state).try_upgrade_attack_speed())
    }

    pub fn upgrade_crit_chance(&mut self) -> bool {
        self.gated(|state| StatEngine::new(state).try_upgrade_crit_chance())
    }

    pub fn upgrade_crit_damage(&mut self) -> bool {
        self.gated(|state| StatEngine::new(state).try_upgrade_crit_damage())
    }

    /// Coin price of the next skill point, `None` at the purchase cap.
    pub fn sp_purchase_cost(&self) -> Option<i64> {
        formula::sp_purchase_cost(self.state().wallet.sp_purchased)
    }

    pub fn buy_skill_point(&mut self) -> bool {
        self.gated(|state| StatEngine::new(state).try_buy_skill_point())
    }

    // ==================================================================
    // Skills
    // ==================================================================

    pub fn remaining_cooldown(&self, skill: SkillId, now_ms: i64) -> f64 {
        SkillClock::new(self.state()).remaining_cooldown(skill, now_ms)
    }

    pub fn is_buff_active(&self, skill: SkillId, now_ms: i64) -> bool {
        SkillClock::new(self.state()).is_buff_active(skill, now_ms)
    }

    pub fn can_use_skill(&self, skill: SkillId, now_ms: i64) -> bool {
        SkillClock::new(self.state()).can_use(skill, now_ms)
    }

    /// Effect magnitude of a learned skill at its current level.
    pub fn skill_power(&self, skill: SkillId) -> i64 {
        SkillClock::new(self.state()).power(skill)
    }

    pub fn try_learn_skill(&mut self, skill: SkillId) -> bool {
        self.gated(|state| SkillScheduler::new(state).try_learn(skill))
    }

    pub fn try_upgrade_skill(&mut self, skill: SkillId) -> bool {
        self.gated(|state| SkillScheduler::new(state).try_upgrade(skill))
    }

    pub fn try_use_skill(&mut self, skill: SkillId, now_ms: i64) -> bool {
        if !SkillScheduler::new(self.store.state_mut()).try_use(skill, now_ms) {
            return false;
        }
        self.store.debounced_save();
        true
    }

    /// Periodic tick from the game loop: closes elapsed buff windows and
    /// starts their cooldowns. Returns the skills that just expired.
    pub fn tick_buffs(&mut self, now_ms: i64) -> Vec<SkillId> {
        let expired = SkillScheduler::new(self.store.state_mut()).expire_buffs(now_ms);
        if !expired.is_empty() {
            tracing::debug!("buffs expired: {expired:?}");
            self.store.debounced_save();
        }
        expired
    }

    pub fn is_skill_auto_use(&self, skill: SkillId) -> bool {
        self.state()
            .skills
            .auto_use
            .get(&skill)
            .copied()
            .unwrap_or(false)
    }

    pub fn set_skill_auto_use(&mut self, skill: SkillId, enabled: bool) -> bool {
        if !SkillScheduler::new(self.store.state_mut()).set_auto_use(skill, enabled) {
            return false;
        }
        self.store.debounced_save();
        true
    }

    // ==================================================================
    // Dungeon sweeps
    // ==================================================================

    pub fn remaining_sweep_attempts(&mut self, dungeon: DungeonId, now_ms: i64) -> u32 {
        self.run_reset_check(dungeon, now_ms);
        let limit = self.config.daily_sweep_limit(dungeon);
        SweepTracker::new(self.store.state_mut(), self.clock).remaining_attempts(
            dungeon, limit, now_ms,
        )
    }

    pub fn can_sweep(&mut self, dungeon: DungeonId, now_ms: i64) -> bool {
        self.run_reset_check(dungeon, now_ms);
        let limit = self.config.daily_sweep_limit(dungeon);
        let min_level = self.config.min_sweep_level(dungeon);
        let current_level = self.state().dungeon_level(dungeon);
        SweepTracker::new(self.store.state_mut(), self.clock).can_sweep(
            dungeon,
            current_level,
            min_level,
            limit,
            now_ms,
        )
    }

    /// Resolves one sweep: consumes a daily attempt, bumps the lifetime
    /// counter, and persists immediately. Rewards are the caller's to
    /// grant. Rejects when the dungeon is locked or the budget is spent.
    pub fn use_sweep_attempt(&mut self, dungeon: DungeonId, now_ms: i64) -> bool {
        if !self.can_sweep(dungeon, now_ms) {
            return false;
        }
        let limit = self.config.daily_sweep_limit(dungeon);
        let mut sweeps = SweepTracker::new(self.store.state_mut(), self.clock);
        if !sweeps.use_attempt(dungeon, limit, now_ms) {
            return false;
        }
        sweeps.increment_sweep_count(dungeon);
        self.store.save();
        true
    }

    pub fn sweep_count(&self, dungeon: DungeonId) -> u64 {
        self.state()
            .sweeps
            .get(&dungeon)
            .map(|entry| entry.sweep_count)
            .unwrap_or(0)
    }

    /// Records a deeper manual clear of a dungeon. Returns the new level.
    pub fn increase_dungeon_level(&mut self, dungeon: DungeonId) -> u32 {
        let level = self.state().dungeon_level(dungeon) + 1;
        self.store.state_mut().dungeon_levels.insert(dungeon, level);
        self.store.debounced_save();
        level
    }

    /// Runs the day-boundary check once and surfaces a refused rollback
    /// as a tamper warning. Core re-checks later are no-ops for logging.
    fn run_reset_check(&mut self, dungeon: DungeonId, now_ms: i64) {
        let outcome = SweepTracker::new(self.store.state_mut(), self.clock)
            .check_reset(dungeon, now_ms);
        if let ResetOutcome::RefusedRollback {
            now_ms,
            last_reset_ms,
        } = outcome
        {
            let state = self.store.state_mut();
            state.tamper_warnings = state.tamper_warnings.saturating_add(1);
            tracing::warn!(
                "refused daily reset for {dungeon}: now {now_ms} is before last reset {last_reset_ms}"
            );
        }
    }

    // ==================================================================
    // Stage progression
    // ==================================================================

    pub fn stage_label(&self) -> String {
        stage::stage_label(&self.state().stage)
    }

    pub fn is_boss_stage(&self) -> bool {
        stage::is_boss_stage(&self.state().stage)
    }

    pub fn enemy_hp(&self) -> i64 {
        stage::enemy_hp(&self.state().stage)
    }

    pub fn enemy_gold_reward(&self) -> i64 {
        stage::enemy_gold_reward(&self.state().stage)
    }

    /// Registers one enemy defeat and advances the stage counters.
    pub fn register_kill(&mut self) -> KillOutcome {
        let outcome = stage::register_kill(&mut self.store.state_mut().stage);
        self.store.debounced_save();
        outcome
    }

    pub fn set_skip_boss_stage(&mut self, skip: bool) {
        self.store.state_mut().stage.skip_boss_stage = skip;
        self.store.debounced_save();
    }

    // ==================================================================
    // Artifacts and eggs
    // ==================================================================

    pub fn artifact_upgrade_cost(&self, artifact: ArtifactId) -> i64 {
        artifact.upgrade_cost_rubies(self.state().artifact_level(artifact))
    }

    pub fn upgrade_artifact(&mut self, artifact: ArtifactId) -> bool {
        self.gated(|state| CollectionEngine::new(state).try_upgrade_artifact(artifact))
    }

    pub fn pull_egg(&mut self, egg: EggId) -> bool {
        self.gated(|state| CollectionEngine::new(state).try_pull_egg(egg))
    }

    // ==================================================================
    // Identity, sync, persistence
    // ==================================================================

    pub fn set_identity(&mut self, uuid: impl Into<String>, sid: impl Into<String>) {
        let state = self.store.state_mut();
        state.identity.uuid = uuid.into();
        state.identity.sid = sid.into();
        self.store.save();
    }

    /// Upload payload for the remote-sync collaborator.
    pub fn snapshot(&self) -> SaveFile {
        self.store.snapshot()
    }

    /// Applies an authoritative downloaded snapshot (total overwrite,
    /// identity preserved where the remote leaves it blank).
    pub fn import_remote(&mut self, remote: SaveFile) {
        self.store.import_remote(remote);
    }

    pub fn save(&mut self) {
        self.store.save();
    }

    pub fn load(&mut self) -> bool {
        self.store.load()
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Whether a debounced write is still waiting (test hook).
    pub fn has_pending_save(&self) -> bool {
        self.store.has_pending_save()
    }

    /// Runs a gate-class mutation: on success the state persists
    /// immediately so the spend cannot be replayed by reloading.
    fn gated(&mut self, mutate: impl FnOnce(&mut PlayerState) -> bool) -> bool {
        if !mutate(self.store.state_mut()) {
            return false;
        }
        self.store.save();
        true
    }
}
