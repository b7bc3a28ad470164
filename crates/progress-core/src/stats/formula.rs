//! Pure stat-value and upgrade-cost formulas.
//!
//! Everything here is a function of raw levels only. Artifact and egg
//! bonuses are folded in one layer up, in [`super::StatBook`].

use crate::config::ProgressConfig;

/// One pricing tier for attack-power upgrades.
///
/// Rows are kept sorted descending by `threshold` and scanned linearly;
/// the first row whose threshold the level exceeds wins. The table is not
/// gap-free, so a linear first-match scan is the required lookup, not a
/// binary search.
#[derive(Clone, Copy, Debug)]
pub struct CostTier {
    pub threshold: u32,
    pub multiplier: f64,
    pub exponent: f64,
}

/// Attack-power pricing tiers, descending by threshold.
pub const ATTACK_POWER_COST_TIERS: [CostTier; 4] = [
    CostTier {
        threshold: 400,
        multiplier: 1_000.0,
        exponent: 2.9,
    },
    CostTier {
        threshold: 300,
        multiplier: 700.0,
        exponent: 2.7,
    },
    CostTier {
        threshold: 200,
        multiplier: 400.0,
        exponent: 2.5,
    },
    CostTier {
        threshold: 100,
        multiplier: 200.0,
        exponent: 2.3,
    },
];

/// Fallback tier applied below every threshold.
pub const ATTACK_POWER_COST_DEFAULT: CostTier = CostTier {
    threshold: 0,
    multiplier: 10.0,
    exponent: 2.0,
};

/// Attack-power value for a raw level.
///
/// Levels group into blocks of ten. Block `s` (0-indexed) advances by
/// `s + 1` per level, and opens at the previous block's final value plus
/// `s + 1`. Growth therefore accelerates without a per-level table:
/// levels 1..=10 yield 1..=10, levels 11..=20 yield 12, 14, .. 30, and
/// block 2 opens at 33.
pub fn attack_power_value(level: u32) -> i64 {
    let index = level.saturating_sub(1);
    let block = index / ProgressConfig::ATTACK_POWER_BLOCK;
    let position = (index % ProgressConfig::ATTACK_POWER_BLOCK) as i64;

    let mut block_start: i64 = 1;
    for s in 0..block {
        let increment = i64::from(s) + 1;
        let block_end = block_start + (i64::from(ProgressConfig::ATTACK_POWER_BLOCK) - 1) * increment;
        block_start = block_end + increment + 1;
    }

    block_start + position * (i64::from(block) + 1)
}

/// Coin cost of the next attack-power upgrade from `level`.
pub fn attack_power_upgrade_cost(level: u32) -> i64 {
    let tier = ATTACK_POWER_COST_TIERS
        .iter()
        .find(|tier| level > tier.threshold)
        .copied()
        .unwrap_or(ATTACK_POWER_COST_DEFAULT);

    let level = f64::from(level);
    (tier.multiplier + level * 10.0 + level.powf(tier.exponent) * 15.0).floor() as i64
}

/// Coin cost of the next attack-speed upgrade from `level`.
pub fn attack_speed_upgrade_cost(level: u32) -> i64 {
    (100.0 * 1.6_f64.powi(level as i32)).floor() as i64
}

/// Coin cost of the next crit-chance upgrade from `level`.
pub fn crit_chance_upgrade_cost(level: u32) -> i64 {
    (50.0 * 1.12_f64.powi(level as i32)).floor() as i64
}

/// Coin cost of the next crit-damage upgrade from `level`.
pub fn crit_damage_upgrade_cost(level: u32) -> i64 {
    (60.0 * 1.1_f64.powi(level as i32)).floor() as i64
}

/// Coin cost of the next coin-bought skill point, `None` once the
/// purchase cap is reached. The getter and the purchase mutator share
/// this single function so their caps cannot drift apart.
pub fn sp_purchase_cost(purchased: u32) -> Option<i64> {
    if purchased >= ProgressConfig::SP_PURCHASE_CAP {
        return None;
    }
    Some(ProgressConfig::SP_PURCHASE_BASE_COST * 10_i64.pow(purchased))
}
