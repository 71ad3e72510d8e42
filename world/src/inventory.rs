//! Resource bookkeeping exposed to the pickup and placement flows.

use garden_defence_core::{InventorySnapshot, ResourceKind};

/// Per-kind resource counts owned by the world.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Inventory {
    seeds: u32,
    chitin: u32,
}

impl Inventory {
    pub(crate) fn with_seeds(seeds: u32) -> Self {
        Self { seeds, chitin: 0 }
    }

    /// Adds the provided amount of a resource.
    ///
    /// Zero amounts are rejected without state change.
    pub(crate) fn add(&mut self, kind: ResourceKind, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        match kind {
            ResourceKind::Seed => self.seeds = self.seeds.saturating_add(amount),
            ResourceKind::ChitinScrap => self.chitin = self.chitin.saturating_add(amount),
        }
        true
    }

    /// String-keyed entry point matching the external resource contract.
    ///
    /// Unknown names are rejected without state change.
    pub(crate) fn add_by_name(&mut self, name: &str, amount: u32) -> bool {
        match ResourceKind::from_name(name) {
            Some(kind) => self.add(kind, amount),
            None => false,
        }
    }

    /// Spends the provided amount, failing without change when short.
    pub(crate) fn spend(&mut self, kind: ResourceKind, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        let slot = match kind {
            ResourceKind::Seed => &mut self.seeds,
            ResourceKind::ChitinScrap => &mut self.chitin,
        };
        if *slot < amount {
            return false;
        }
        *slot -= amount;
        true
    }

    pub(crate) fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            seeds: self.seeds,
            chitin: self.chitin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_and_spending_round_trips() {
        let mut inventory = Inventory::with_seeds(2);
        assert!(inventory.add(ResourceKind::ChitinScrap, 3));
        assert!(inventory.spend(ResourceKind::Seed, 1));
        assert!(inventory.spend(ResourceKind::ChitinScrap, 3));

        let snapshot = inventory.snapshot();
        assert_eq!(snapshot.seeds, 1);
        assert_eq!(snapshot.chitin, 0);
    }

    #[test]
    fn overspending_fails_without_state_change() {
        let mut inventory = Inventory::with_seeds(1);
        assert!(!inventory.spend(ResourceKind::Seed, 2));
        assert_eq!(inventory.snapshot().seeds, 1);
    }

    #[test]
    fn unknown_names_and_zero_amounts_are_rejected() {
        let mut inventory = Inventory::default();
        assert!(inventory.add_by_name("Seed", 4));
        assert!(!inventory.add_by_name("Obsidian", 4));
        assert!(!inventory.add_by_name("Seed", 0));
        assert!(!inventory.add(ResourceKind::Seed, 0));
        assert_eq!(inventory.snapshot().seeds, 4);
    }
}
