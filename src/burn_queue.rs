multiversx_sc::imports!();

use crate::errors::{
    ERR_CANDY_QTY_MUST_BE_IN_MULTIPLY_OF_4, ERR_CANDY_QTY_MUST_BE_LESS_OR_EQUAL_TO_BALANCE,
    ERR_CANDY_QTY_MUST_NOT_BE_0, ERR_IS_NOT_CANDY_OWNER, ERR_NO_ZOMBIE_BIRD_CAN_BE_CLAIMED,
    ERR_ZOMBIE_BIRD_ADDRESS_WAS_NOT_YET_SET, ERR_ZOMBIE_BIRD_ADDRESS_WAS_SET_BEFORE,
    ERR_ZOMBIE_BIRD_MINT_REJECTED,
};
use crate::types::BurnLot;
use crate::{ledger, pause, zombie_bird_proxy};

/// Candies burned per zombie bird.
pub const CANDY_PER_ZOMBIE_BIRD: u64 = 4;

/// A lot becomes claimable 30 days after its burn.
pub const MATURATION_PERIOD: u64 = 2_592_000;

// ============================================================
// Burn-to-convert queue
//
// Each burn appends one lot to the caller's list. Lots are
// released strictly in arrival order, one per claim, through
// a per-address cursor that only moves forward: every lot
// before the cursor is distributed, every lot from it on is not.
// ============================================================

#[multiversx_sc::module]
pub trait BurnQueueModule: ledger::LedgerModule + pause::PauseModule {
    // ========================================================
    // ENDPOINT: burnCandy
    // ========================================================

    #[endpoint(burnCandy)]
    fn burn_to_queue(&self, token_ids: ManagedVec<Self::Api, u64>) -> u64 {
        let caller = self.blockchain().get_caller();
        let candy_qty = token_ids.len() as u64;

        require!(candy_qty > 0, ERR_CANDY_QTY_MUST_NOT_BE_0);
        require!(
            candy_qty % CANDY_PER_ZOMBIE_BIRD == 0,
            ERR_CANDY_QTY_MUST_BE_IN_MULTIPLY_OF_4
        );
        require!(
            candy_qty <= self.balance_of(&caller),
            ERR_CANDY_QTY_MUST_BE_LESS_OR_EQUAL_TO_BALANCE
        );

        // Ownership is re-read per id, so a repeated id fails once it is burned.
        for token_id in token_ids.iter() {
            let owner = self.token_owner(token_id);
            require!(
                !owner.is_empty() && owner.get() == caller,
                ERR_IS_NOT_CANDY_OWNER
            );
            self.burn_candy(token_id);
        }

        let now = self.blockchain().get_block_timestamp();
        let lot = BurnLot::new(candy_qty / CANDY_PER_ZOMBIE_BIRD, now);
        let lot_index = self.burn_lots(&caller).len() as u64;
        self.burn_lots(&caller).push(&lot);

        self.burn_lot_queued_event(&caller, lot_index, lot.qty, now);
        lot_index
    }

    // ========================================================
    // ENDPOINT: claimZombieBird
    // Processes exactly one lot: the earliest undistributed one.
    // ========================================================

    #[endpoint(claimZombieBird)]
    fn claim_from_queue(&self) -> u64 {
        let zombie_bird_mapper = self.zombie_bird_address();
        require!(
            !zombie_bird_mapper.is_empty(),
            ERR_ZOMBIE_BIRD_ADDRESS_WAS_NOT_YET_SET
        );

        let caller = self.blockchain().get_caller();
        let lot_index = self.next_unclaimed_lot(&caller).get();
        require!(
            lot_index < self.burn_lots(&caller).len() as u64,
            ERR_NO_ZOMBIE_BIRD_CAN_BE_CLAIMED
        );

        // VecMapper is 1-based
        let mut lot = self.burn_lots(&caller).get(lot_index as usize + 1);
        let now = self.blockchain().get_block_timestamp();
        require!(
            lot.is_matured(now, MATURATION_PERIOD),
            ERR_NO_ZOMBIE_BIRD_CAN_BE_CLAIMED
        );

        let minted: bool = self
            .tx()
            .to(&zombie_bird_mapper.get())
            .typed(zombie_bird_proxy::ZombieBirdProxy)
            .mint(caller.clone(), lot.qty)
            .returns(ReturnsResult)
            .sync_call();
        require!(minted, ERR_ZOMBIE_BIRD_MINT_REJECTED);

        // Commit only after the collection confirmed the mint.
        lot.distributed = true;
        self.burn_lots(&caller).set(lot_index as usize + 1, &lot);
        self.next_unclaimed_lot(&caller).set(lot_index + 1);

        self.zombie_bird_claimed_event(&caller, lot_index, lot.qty);
        lot_index
    }

    // ========================================================
    // ADMIN: setZombieBirdAddress (write-once)
    // ========================================================

    #[only_owner]
    #[endpoint(setZombieBirdAddress)]
    fn set_zombie_bird_address(&self, address: ManagedAddress) {
        require!(
            self.zombie_bird_address().is_empty(),
            ERR_ZOMBIE_BIRD_ADDRESS_WAS_SET_BEFORE
        );

        self.zombie_bird_address().set(&address);
        self.zombie_bird_address_set_event(&address);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBurnLotCount)]
    fn get_burn_lot_count(&self, owner: &ManagedAddress) -> u64 {
        self.burn_lots(owner).len() as u64
    }

    /// `index` is 0-based, in burn order.
    #[view(getBurnLot)]
    fn get_burn_lot(&self, owner: &ManagedAddress, index: u64) -> BurnLot {
        self.burn_lots(owner).get(index as usize + 1)
    }

    #[view(getNextUnclaimedLot)]
    fn get_next_unclaimed_lot(&self, owner: &ManagedAddress) -> u64 {
        self.next_unclaimed_lot(owner).get()
    }

    #[view(getZombieBirdAddress)]
    fn get_zombie_bird_address(&self) -> OptionalValue<ManagedAddress> {
        let mapper = self.zombie_bird_address();
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("burnLotQueued")]
    fn burn_lot_queued_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] lot_index: u64,
        #[indexed] qty: u64,
        timestamp: u64,
    );

    #[event("zombieBirdClaimed")]
    fn zombie_bird_claimed_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] lot_index: u64,
        qty: u64,
    );

    #[event("zombieBirdAddressSet")]
    fn zombie_bird_address_set_event(&self, #[indexed] address: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("zombieBirdAddress")]
    fn zombie_bird_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("burnLots")]
    fn burn_lots(&self, owner: &ManagedAddress) -> VecMapper<BurnLot>;

    #[storage_mapper("nextUnclaimedLot")]
    fn next_unclaimed_lot(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;
}
