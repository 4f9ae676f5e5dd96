multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Burn lot: one burn waiting to be converted
// ============================================================

/// A lot is appended per burn and never removed. `distributed` flips to
/// `true` exactly once, when the zombie birds for the lot are minted.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct BurnLot {
    /// Zombie birds owed: burned candies / 4
    pub qty: u64,
    /// Block timestamp of the burn
    pub timestamp: u64,
    pub distributed: bool,
}

impl BurnLot {
    pub fn new(qty: u64, timestamp: u64) -> Self {
        BurnLot {
            qty,
            timestamp,
            distributed: false,
        }
    }

    /// `now` is matured once the full window has passed; the boundary itself counts.
    pub fn is_matured(&self, now: u64, maturation_period: u64) -> bool {
        now >= self.timestamp.saturating_add(maturation_period)
    }
}
