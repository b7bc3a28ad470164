//! Effective stat values and level-up purchases.
//!
//! Raw upgrade levels are never displayed directly. Every read goes
//! through [`StatBook`], which recomputes the level-derived value and
//! folds in artifact and egg bonuses on each call, so a bonus picked up
//! between two reads is always reflected.

pub mod formula;

use crate::config::ProgressConfig;
use crate::ledger::WalletLedger;
use crate::state::{ArtifactId, PlayerState, ResourceKind};

/// Percent (or flat-point) bonus granted per artifact level.
fn artifact_bonus_per_level(artifact: ArtifactId) -> f64 {
    match artifact {
        ArtifactId::WarDrum => 2.0,
        ArtifactId::HawkFeather => 1.0,
        ArtifactId::LuckyCoin => 1.0,
        ArtifactId::Executioner => 2.0,
    }
}

/// Read-only effective stat values.
pub struct StatBook<'a> {
    state: &'a PlayerState,
}

impl<'a> StatBook<'a> {
    pub fn new(state: &'a PlayerState) -> Self {
        Self { state }
    }

    fn artifact_bonus(&self, artifact: ArtifactId) -> f64 {
        f64::from(self.state.artifact_level(artifact)) * artifact_bonus_per_level(artifact)
    }

    /// Effective attack power: the block formula scaled by the war-drum
    /// percent bonus. A zero bonus leaves the multiplier at exactly 1.
    pub fn attack_power(&self) -> i64 {
        let base = formula::attack_power_value(self.state.stats.attack_power);
        let multiplier = 1.0 + self.artifact_bonus(ArtifactId::WarDrum) / 100.0;
        (base as f64 * multiplier).floor() as i64
    }

    /// Effective attacks-per-second multiplier, 1.0 at level 0.
    pub fn attack_speed(&self) -> f64 {
        let base = 1.0 + 0.1 * f64::from(self.state.stats.attack_speed);
        base * (1.0 + self.artifact_bonus(ArtifactId::HawkFeather) / 100.0)
    }

    /// Effective crit chance in percent, clamped to 100.
    pub fn crit_chance(&self) -> f64 {
        let base = f64::from(self.state.stats.crit_chance);
        (base + self.artifact_bonus(ArtifactId::LuckyCoin)).min(100.0)
    }

    /// Effective crit damage in percent of a normal hit. Every hatched
    /// egg adds one flat point on top of levels and artifacts.
    pub fn crit_damage(&self) -> f64 {
        150.0
            + 2.0 * f64::from(self.state.stats.crit_damage)
            + self.artifact_bonus(ArtifactId::Executioner)
            + f64::from(self.state.total_egg_count())
    }
}

/// Stat level-up purchases. Each upgrade prices the step with the level
/// formulas, spends coins, and bumps the raw level; any failed gate
/// (cap reached, insufficient coins) rejects with zero mutation.
pub struct StatEngine<'a> {
    state: &'a mut PlayerState,
}

impl<'a> StatEngine<'a> {
    pub fn new(state: &'a mut PlayerState) -> Self {
        Self { state }
    }

    pub fn try_upgrade_attack_power(&mut self) -> bool {
        let cost = formula::attack_power_upgrade_cost(self.state.stats.attack_power);
        if !WalletLedger::new(self.state).spend(ResourceKind::Coins, cost) {
            return false;
        }
        self.state.stats.attack_power += 1;
        true
    }

    pub fn try_upgrade_attack_speed(&mut self) -> bool {
        let level = self.state.stats.attack_speed;
        if level >= ProgressConfig::ATTACK_SPEED_MAX_LEVEL {
            return false;
        }
        let cost = formula::attack_speed_upgrade_cost(level);
        if !WalletLedger::new(self.state).spend(ResourceKind::Coins, cost) {
            return false;
        }
        self.state.stats.attack_speed += 1;
        true
    }

    pub fn try_upgrade_crit_chance(&mut self) -> bool {
        let level = self.state.stats.crit_chance;
        if level >= ProgressConfig::CRIT_CHANCE_MAX_LEVEL {
            return false;
        }
        let cost = formula::crit_chance_upgrade_cost(level);
        if !WalletLedger::new(self.state).spend(ResourceKind::Coins, cost) {
            return false;
        }
        self.state.stats.crit_chance += 1;
        true
    }

    pub fn try_upgrade_crit_damage(&mut self) -> bool {
        let level = self.state.stats.crit_damage;
        if level >= ProgressConfig::CRIT_DAMAGE_MAX_LEVEL {
            return false;
        }
        let cost = formula::crit_damage_upgrade_cost(level);
        if !WalletLedger::new(self.state).spend(ResourceKind::Coins, cost) {
            return false;
        }
        self.state.stats.crit_damage += 1;
        true
    }

    /// Buys one skill point with coins at the escalating price. The cap
    /// lives in the shared cost function; once it returns `None` the
    /// purchase is rejected outright.
    pub fn try_buy_skill_point(&mut self) -> bool {
        let Some(cost) = formula::sp_purchase_cost(self.state.wallet.sp_purchased) else {
            return false;
        };
        if !WalletLedger::new(self.state).spend(ResourceKind::Coins, cost) {
            return false;
        }
        self.state.wallet.sp_purchased += 1;
        self.state.wallet.skill_points += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_bonus_scales_attack_power_and_defaults_to_one() {
        let mut state = PlayerState::new();
        state.stats.attack_power = 20;
        assert_eq!(StatBook::new(&state).attack_power(), 30);

        // 5 war-drum levels = +10%.
        state.artifact_levels.insert(ArtifactId::WarDrum, 5);
        assert_eq!(StatBook::new(&state).attack_power(), 33);
    }

    #[test]
    fn capped_stats_reject_upgrades_at_their_caps() {
        let mut state = PlayerState::new();
        state.wallet.coins = i64::MAX;
        state.stats.attack_speed = ProgressConfig::ATTACK_SPEED_MAX_LEVEL;
        state.stats.crit_chance = ProgressConfig::CRIT_CHANCE_MAX_LEVEL;

        let coins_before = state.wallet.coins;
        let mut engine = StatEngine::new(&mut state);
        assert!(!engine.try_upgrade_attack_speed());
        assert!(!engine.try_upgrade_crit_chance());
        assert_eq!(state.wallet.coins, coins_before);
        assert_eq!(state.stats.attack_speed, ProgressConfig::ATTACK_SPEED_MAX_LEVEL);
    }

    #[test]
    fn upgrade_without_funds_leaves_level_untouched() {
        let mut state = PlayerState::new();
        state.wallet.coins = 0;

        assert!(!StatEngine::new(&mut state).try_upgrade_attack_power());
        assert_eq!(state.stats.attack_power, 1);
    }

    #[test]
    fn skill_point_purchase_walks_the_price_ladder() {
        let mut state = PlayerState::new();
        state.wallet.coins = 150_000;

        assert!(StatEngine::new(&mut state).try_buy_skill_point());
        assert_eq!(state.wallet.coins, 50_000);
        assert_eq!(state.wallet.skill_points, 1);
        assert_eq!(state.wallet.sp_purchased, 1);

        // Next point costs 1,000,000; 50,000 does not cover it.
        assert!(!StatEngine::new(&mut state).try_buy_skill_point());
        assert_eq!(state.wallet.skill_points, 1);
    }

    #[test]
    fn skill_point_purchase_stops_at_the_cap() {
        let mut state = PlayerState::new();
        state.wallet.coins = i64::MAX;
        state.wallet.sp_purchased = ProgressConfig::SP_PURCHASE_CAP;

        assert!(!StatEngine::new(&mut state).try_buy_skill_point());
        assert_eq!(state.wallet.skill_points, 0);
    }
}
