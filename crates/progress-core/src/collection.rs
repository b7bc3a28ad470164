//! Artifact upgrades and egg gacha pulls, both priced in rubies.

use crate::ledger::WalletLedger;
use crate::state::{ArtifactId, EggId, PlayerState, ResourceKind};

impl ArtifactId {
    /// Ruby price of the next upgrade step from `level`.
    pub fn upgrade_cost_rubies(self, level: u32) -> i64 {
        let base: i64 = match self {
            ArtifactId::WarDrum => 100,
            ArtifactId::HawkFeather => 80,
            ArtifactId::LuckyCoin => 60,
            ArtifactId::Executioner => 120,
        };
        base * (i64::from(level) + 1)
    }
}

impl EggId {
    /// Ruby price of one gacha pull.
    pub fn pull_cost_rubies(self) -> i64 {
        match self {
            EggId::Dragon => 500,
            EggId::Phoenix => 400,
            EggId::Turtle => 300,
        }
    }
}

/// Ruby-priced collection purchases over artifacts and eggs.
pub struct CollectionEngine<'a> {
    state: &'a mut PlayerState,
}

impl<'a> CollectionEngine<'a> {
    pub fn new(state: &'a mut PlayerState) -> Self {
        Self { state }
    }

    /// Raises an artifact one level for rubies. Level 0 means unowned;
    /// the first purchase acquires it at level 1.
    pub fn try_upgrade_artifact(&mut self, artifact: ArtifactId) -> bool {
        let level = self.state.artifact_level(artifact);
        let cost = artifact.upgrade_cost_rubies(level);
        if !WalletLedger::new(self.state).spend(ResourceKind::Rubies, cost) {
            return false;
        }
        self.state.artifact_levels.insert(artifact, level + 1);
        true
    }

    /// Buys one gacha pull and records the hatched egg.
    pub fn try_pull_egg(&mut self, egg: EggId) -> bool {
        if !WalletLedger::new(self.state).spend(ResourceKind::Rubies, egg.pull_cost_rubies()) {
            return false;
        }
        *self.state.egg_counts.entry(egg).or_insert(0) += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_upgrades_escalate_in_price() {
        let mut state = PlayerState::new();
        state.wallet.rubies = 100 + 200;

        let mut collection = CollectionEngine::new(&mut state);
        assert!(collection.try_upgrade_artifact(ArtifactId::WarDrum));
        assert!(collection.try_upgrade_artifact(ArtifactId::WarDrum));
        // Third step costs 300; the wallet is empty.
        assert!(!collection.try_upgrade_artifact(ArtifactId::WarDrum));

        assert_eq!(state.artifact_level(ArtifactId::WarDrum), 2);
        assert_eq!(state.wallet.rubies, 0);
    }

    #[test]
    fn egg_pulls_accumulate_counts() {
        let mut state = PlayerState::new();
        state.wallet.rubies = 1_000;

        let mut collection = CollectionEngine::new(&mut state);
        assert!(collection.try_pull_egg(EggId::Turtle));
        assert!(collection.try_pull_egg(EggId::Turtle));
        assert!(!collection.try_pull_egg(EggId::Dragon));

        assert_eq!(state.egg_counts[&EggId::Turtle], 2);
        assert_eq!(state.total_egg_count(), 2);
        assert_eq!(state.wallet.rubies, 400);
    }
}
