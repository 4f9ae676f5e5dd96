multiversx_sc::imports!();

use crate::errors::ERR_TOTAL_SUPPLY_HAS_REACHED;
use crate::{ledger, pause};

/// Hard cap on candies ever issued, across every channel.
pub const MAX_SUPPLY: u64 = 9_776;

// ============================================================
// Supply ledger
// `issuedSupply` only grows: burning a candy does not free room
// under the cap.
// ============================================================

#[multiversx_sc::module]
pub trait SupplyModule: ledger::LedgerModule + pause::PauseModule {
    /// Reserves `qty` under the cap, then mints. Every issuance path goes
    /// through here so that no candy exists without a reservation.
    fn issue_candies(&self, to: &ManagedAddress, qty: u64) -> u64 {
        self.reserve_supply(qty);
        self.mint_candies(to, qty)
    }

    fn reserve_supply(&self, qty: u64) {
        let issued = self.issued_supply().get();
        require!(
            issued
                .checked_add(qty)
                .map_or(false, |total| total <= MAX_SUPPLY),
            ERR_TOTAL_SUPPLY_HAS_REACHED
        );
        self.issued_supply().set(issued + qty);
    }

    #[view(getIssuedSupply)]
    fn get_issued_supply(&self) -> u64 {
        self.issued_supply().get()
    }

    #[view(getMaxSupply)]
    fn get_max_supply(&self) -> u64 {
        MAX_SUPPLY
    }

    #[storage_mapper("issuedSupply")]
    fn issued_supply(&self) -> SingleValueMapper<u64>;
}
