multiversx_sc::imports!();

use crate::errors::{
    ERR_APPROVAL_TO_CURRENT_OWNER, ERR_CALLER_IS_NOT_OWNER_NOR_APPROVED,
    ERR_TOKEN_DOES_NOT_EXIST, ERR_TRANSFER_FROM_INCORRECT_OWNER, ERR_TRANSFER_TO_ZERO_ADDRESS,
};
use crate::pause;

// ============================================================
// Candy ownership ledger
// Sequential ids from 0, one owner per id. Burned ids are
// never reissued.
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule: pause::PauseModule {
    // ========================================================
    // ENDPOINTS
    // ========================================================

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, token_id: u64) {
        self.require_not_paused();
        require!(!to.is_zero(), ERR_TRANSFER_TO_ZERO_ADDRESS);

        let owner = self.require_owner_of(token_id);
        require!(owner == from, ERR_TRANSFER_FROM_INCORRECT_OWNER);

        let caller = self.blockchain().get_caller();
        require!(
            self.is_approved_or_owner(&caller, &owner, token_id),
            ERR_CALLER_IS_NOT_OWNER_NOR_APPROVED
        );

        self.token_approval(token_id).clear();
        self.balance(&from).update(|b| *b -= 1);
        self.balance(&to).update(|b| *b += 1);
        self.token_owner(token_id).set(&to);

        self.candy_transferred_event(&from, &to, token_id);
    }

    #[endpoint(approve)]
    fn approve(&self, to: ManagedAddress, token_id: u64) {
        let owner = self.require_owner_of(token_id);
        require!(to != owner, ERR_APPROVAL_TO_CURRENT_OWNER);

        let caller = self.blockchain().get_caller();
        require!(
            caller == owner || self.operator_approval(&owner, &caller).get(),
            ERR_CALLER_IS_NOT_OWNER_NOR_APPROVED
        );

        self.token_approval(token_id).set(&to);
        self.approval_event(&owner, &to, token_id);
    }

    #[endpoint(setApprovalForAll)]
    fn set_approval_for_all(&self, operator: ManagedAddress, approved: bool) {
        let caller = self.blockchain().get_caller();
        require!(caller != operator, ERR_APPROVAL_TO_CURRENT_OWNER);

        self.operator_approval(&caller, &operator).set(approved);
        self.approval_for_all_event(&caller, &operator, approved);
    }

    // ========================================================
    // INTERNAL: mint / burn
    // Callers are responsible for the supply cap.
    // ========================================================

    /// Mints `qty` consecutive ids to `to` and returns the first id.
    fn mint_candies(&self, to: &ManagedAddress, qty: u64) -> u64 {
        self.require_not_paused();

        let first_id = self.next_token_id().get();
        for token_id in first_id..first_id + qty {
            self.token_owner(token_id).set(to);
        }
        self.next_token_id().set(first_id + qty);
        self.balance(to).update(|b| *b += qty);

        self.candy_minted_event(to, first_id, qty);
        first_id
    }

    fn burn_candy(&self, token_id: u64) {
        self.require_not_paused();

        let owner = self.require_owner_of(token_id);
        self.token_owner(token_id).clear();
        self.token_approval(token_id).clear();
        self.balance(&owner).update(|b| *b -= 1);
        self.burned_count().update(|c| *c += 1);

        self.candy_burned_event(&owner, token_id);
    }

    fn require_owner_of(&self, token_id: u64) -> ManagedAddress {
        let owner_mapper = self.token_owner(token_id);
        require!(!owner_mapper.is_empty(), ERR_TOKEN_DOES_NOT_EXIST);
        owner_mapper.get()
    }

    fn is_approved_or_owner(
        &self,
        spender: &ManagedAddress,
        owner: &ManagedAddress,
        token_id: u64,
    ) -> bool {
        if spender == owner || self.operator_approval(owner, spender).get() {
            return true;
        }
        let approval = self.token_approval(token_id);
        !approval.is_empty() && approval.get() == *spender
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, owner: &ManagedAddress) -> u64 {
        self.balance(owner).get()
    }

    #[view(ownerOf)]
    fn owner_of(&self, token_id: u64) -> ManagedAddress {
        self.require_owner_of(token_id)
    }

    /// Live candies: everything minted minus everything burned.
    #[view(totalSupply)]
    fn total_supply(&self) -> u64 {
        self.next_token_id().get() - self.burned_count().get()
    }

    #[view(tokenURI)]
    fn token_uri(&self, token_id: u64) -> ManagedBuffer {
        self.require_owner_of(token_id);

        let base_uri = self.base_uri().get();
        let id = BigUint::from(token_id);
        sc_format!("{}{}", base_uri, id)
    }

    #[view(getApproved)]
    fn get_approved(&self, token_id: u64) -> OptionalValue<ManagedAddress> {
        self.require_owner_of(token_id);

        let approval = self.token_approval(token_id);
        if approval.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(approval.get())
        }
    }

    #[view(isApprovedForAll)]
    fn is_approved_for_all(&self, owner: &ManagedAddress, operator: &ManagedAddress) -> bool {
        self.operator_approval(owner, operator).get()
    }

    #[view(baseURI)]
    fn get_base_uri(&self) -> ManagedBuffer {
        self.base_uri().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("candyMinted")]
    fn candy_minted_event(
        &self,
        #[indexed] to: &ManagedAddress,
        #[indexed] first_token_id: u64,
        qty: u64,
    );

    #[event("candyBurned")]
    fn candy_burned_event(&self, #[indexed] owner: &ManagedAddress, #[indexed] token_id: u64);

    #[event("candyTransferred")]
    fn candy_transferred_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] token_id: u64,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] approved: &ManagedAddress,
        #[indexed] token_id: u64,
    );

    #[event("approvalForAll")]
    fn approval_for_all_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] operator: &ManagedAddress,
        approved: bool,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("baseUri")]
    fn base_uri(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("nextTokenId")]
    fn next_token_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("burnedCount")]
    fn burned_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("tokenOwner")]
    fn token_owner(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("balance")]
    fn balance(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("tokenApproval")]
    fn token_approval(&self, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("operatorApproval")]
    fn operator_approval(
        &self,
        owner: &ManagedAddress,
        operator: &ManagedAddress,
    ) -> SingleValueMapper<bool>;
}
