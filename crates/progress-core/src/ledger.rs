//! Resource credit/debit operations over the wallet balances.
//!
//! Earning is unconditional; spending is check-then-mutate and reports the
//! outcome as a plain bool. A rejected spend leaves the balance untouched,
//! so every observable balance stays non-negative.

use crate::state::{PlayerState, ResourceKind};

/// Ledger over the four wallet balances.
///
/// Borrows the state for the duration of one call site, the same way the
/// other component engines do. Persistence classes (earning saves
/// debounced, spending saves immediately) are the facade's concern.
pub struct WalletLedger<'a> {
    state: &'a mut PlayerState,
}

impl<'a> WalletLedger<'a> {
    pub fn new(state: &'a mut PlayerState) -> Self {
        Self { state }
    }

    /// Current balance for a resource.
    pub fn balance(&self, kind: ResourceKind) -> i64 {
        *self.slot_ref(kind)
    }

    /// Credits a balance. Returns true when the balance changed.
    ///
    /// Zero and negative amounts are no-ops: a reward can never silently
    /// debit.
    pub fn add(&mut self, kind: ResourceKind, amount: i64) -> bool {
        if amount <= 0 {
            return false;
        }
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
        true
    }

    /// Debits a balance. Returns false and mutates nothing when the
    /// balance cannot cover the amount.
    pub fn spend(&mut self, kind: ResourceKind, amount: i64) -> bool {
        if amount < 0 {
            return false;
        }
        let balance = self.slot_mut(kind);
        if *balance < amount {
            return false;
        }
        *balance -= amount;
        true
    }

    fn slot_ref(&self, kind: ResourceKind) -> &i64 {
        match kind {
            ResourceKind::Coins => &self.state.wallet.coins,
            ResourceKind::Rubies => &self.state.wallet.rubies,
            ResourceKind::Meat => &self.state.wallet.meat,
            ResourceKind::SkillPoints => &self.state.wallet.skill_points,
        }
    }

    fn slot_mut(&mut self, kind: ResourceKind) -> &mut i64 {
        match kind {
            ResourceKind::Coins => &mut self.state.wallet.coins,
            ResourceKind::Rubies => &mut self.state.wallet.rubies,
            ResourceKind::Meat => &mut self.state.wallet.meat,
            ResourceKind::SkillPoints => &mut self.state.wallet.skill_points,
        }
    }
}
