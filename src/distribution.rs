multiversx_sc::imports!();

use crate::errors::{
    ERR_ADDRESSES_AND_QTYS_LENGTH_ARE_DIFFERENT, ERR_CANNOT_CLAIM_MORE_THAN_1_TIME,
    ERR_CANNOT_PURCHASE_MORE_THAN_1_TIME, ERR_NO_PUBLIC_MINT_AIRDROP, ERR_NO_PUBLIC_SALE_AIRDROP,
    ERR_PURCHASED_ETHER_MUST_BE_CORRECT,
};
use crate::{ledger, pause, phase, supply};

/// Candies per presale purchase.
pub const PRESALE_QTY: u64 = 4;

/// Exact presale price: 0.276 EGLD.
pub const PRESALE_PRICE: u64 = 276_000_000_000_000_000;

// ============================================================
// Distribution channels
//
// presale      one purchase per address, ever (flag)
// sale airdrop one claim per address, ever (flag survives reseeding)
// mint airdrop claim consumes the allocation; reseeding re-enables it
// ============================================================

#[multiversx_sc::module]
pub trait DistributionModule:
    phase::PhaseModule + supply::SupplyModule + ledger::LedgerModule + pause::PauseModule
{
    // ========================================================
    // ENDPOINT: presaleMint
    // ========================================================

    #[endpoint(presaleMint)]
    #[payable("EGLD")]
    fn presale_mint(&self, proof: ManagedVec<Self::Api, ManagedByteArray<Self::Api, 32>>) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        require!(
            !self.presale_purchased(&caller).get(),
            ERR_CANNOT_PURCHASE_MORE_THAN_1_TIME
        );
        self.require_whitelisted(&caller, &proof);
        require!(payment == PRESALE_PRICE, ERR_PURCHASED_ETHER_MUST_BE_CORRECT);

        self.issue_candies(&caller, PRESALE_QTY);
        self.presale_purchased(&caller).set(true);
        self.presale_minted_qty().update(|q| *q += PRESALE_QTY);

        self.presale_mint_event(&caller, PRESALE_QTY, &payment);
    }

    // ========================================================
    // ENDPOINT: publicMintSale
    // ========================================================

    #[endpoint(publicMintSale)]
    fn public_mint_sale(&self, proof: ManagedVec<Self::Api, ManagedByteArray<Self::Api, 32>>) {
        let caller = self.blockchain().get_caller();
        let qty = self.sale_airdrop_qty(&caller).get();

        require!(qty > 0, ERR_NO_PUBLIC_SALE_AIRDROP);
        require!(
            !self.sale_airdrop_claimed(&caller).get(),
            ERR_CANNOT_CLAIM_MORE_THAN_1_TIME
        );
        self.require_whitelisted(&caller, &proof);

        self.issue_candies(&caller, qty);
        // The allocation stays as seeded; the flag alone blocks a second claim.
        self.sale_airdrop_claimed(&caller).set(true);

        self.sale_airdrop_claimed_event(&caller, qty);
    }

    // ========================================================
    // ENDPOINT: publicMintAirdrop
    // ========================================================

    #[endpoint(publicMintAirdrop)]
    fn public_mint_airdrop(&self, proof: ManagedVec<Self::Api, ManagedByteArray<Self::Api, 32>>) {
        let caller = self.blockchain().get_caller();
        let qty = self.mint_airdrop_qty(&caller).get();

        require!(qty > 0, ERR_NO_PUBLIC_MINT_AIRDROP);
        self.require_whitelisted(&caller, &proof);

        self.issue_candies(&caller, qty);
        self.mint_airdrop_qty(&caller).clear();

        self.mint_airdrop_claimed_event(&caller, qty);
    }

    // ========================================================
    // ADMIN: allocation seeding (overwrite, never add)
    // ========================================================

    #[only_owner]
    #[endpoint(publicSaleAirDrop)]
    fn seed_sale_airdrop(
        &self,
        addresses: ManagedVec<Self::Api, ManagedAddress<Self::Api>>,
        qtys: ManagedVec<Self::Api, u64>,
    ) {
        require!(
            addresses.len() == qtys.len(),
            ERR_ADDRESSES_AND_QTYS_LENGTH_ARE_DIFFERENT
        );

        for (address, qty) in addresses.iter().zip(qtys.iter()) {
            self.sale_airdrop_qty(&address).set(qty);
        }
        self.sale_airdrop_seeded_event(addresses.len() as u64);
    }

    #[only_owner]
    #[endpoint(publicMintAirDrop)]
    fn seed_mint_airdrop(
        &self,
        addresses: ManagedVec<Self::Api, ManagedAddress<Self::Api>>,
        qtys: ManagedVec<Self::Api, u64>,
    ) {
        require!(
            addresses.len() == qtys.len(),
            ERR_ADDRESSES_AND_QTYS_LENGTH_ARE_DIFFERENT
        );

        for (address, qty) in addresses.iter().zip(qtys.iter()) {
            self.mint_airdrop_qty(&address).set(qty);
        }
        self.mint_airdrop_seeded_event(addresses.len() as u64);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasPresalePurchased)]
    fn has_presale_purchased(&self, address: &ManagedAddress) -> bool {
        self.presale_purchased(address).get()
    }

    #[view(getPresaleMintedQty)]
    fn get_presale_minted_qty(&self) -> u64 {
        self.presale_minted_qty().get()
    }

    #[view(getSaleAirdropQty)]
    fn get_sale_airdrop_qty(&self, address: &ManagedAddress) -> u64 {
        self.sale_airdrop_qty(address).get()
    }

    #[view(hasSaleAirdropClaimed)]
    fn has_sale_airdrop_claimed(&self, address: &ManagedAddress) -> bool {
        self.sale_airdrop_claimed(address).get()
    }

    #[view(getMintAirdropQty)]
    fn get_mint_airdrop_qty(&self, address: &ManagedAddress) -> u64 {
        self.mint_airdrop_qty(address).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("presaleMint")]
    fn presale_mint_event(
        &self,
        #[indexed] buyer: &ManagedAddress,
        #[indexed] qty: u64,
        paid: &BigUint,
    );

    #[event("saleAirdropClaimed")]
    fn sale_airdrop_claimed_event(&self, #[indexed] claimer: &ManagedAddress, qty: u64);

    #[event("mintAirdropClaimed")]
    fn mint_airdrop_claimed_event(&self, #[indexed] claimer: &ManagedAddress, qty: u64);

    #[event("saleAirdropSeeded")]
    fn sale_airdrop_seeded_event(&self, address_count: u64);

    #[event("mintAirdropSeeded")]
    fn mint_airdrop_seeded_event(&self, address_count: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("presalePurchased")]
    fn presale_purchased(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("presaleMintedQty")]
    fn presale_minted_qty(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("saleAirdropQty")]
    fn sale_airdrop_qty(&self, address: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("saleAirdropClaimed")]
    fn sale_airdrop_claimed(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("mintAirdropQty")]
    fn mint_airdrop_qty(&self, address: &ManagedAddress) -> SingleValueMapper<u64>;
}
