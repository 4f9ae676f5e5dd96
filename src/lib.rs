#![no_std]

multiversx_sc::imports!();

pub mod burn_queue;
pub mod candy_issuance_proxy;
pub mod distribution;
pub mod errors;
pub mod ledger;
pub mod merkle;
pub mod pause;
pub mod phase;
pub mod supply;
pub mod types;
pub mod zombie_bird_proxy;

// ============================================================
// Contract
// Spooky Birds candy: a fixed-supply collectible issued through
// admin mints, a paid presale and two airdrop channels. Candies
// can later be burned, four at a time, for zombie birds.
// ============================================================

#[multiversx_sc::contract]
pub trait CandyIssuance:
    ledger::LedgerModule
    + pause::PauseModule
    + phase::PhaseModule
    + supply::SupplyModule
    + distribution::DistributionModule
    + burn_queue::BurnQueueModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, base_uri: ManagedBuffer) {
        self.base_uri().set(&base_uri);
        self.phase().set(0u8);
        self.merkle_root()
            .set(ManagedByteArray::<Self::Api, 32>::new_from_bytes(&[0u8; 32]));
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ADMIN: direct issuance
    // ========================================================

    #[only_owner]
    #[endpoint(mint)]
    fn admin_mint(&self, to: ManagedAddress, qty: u64) -> u64 {
        self.issue_candies(&to, qty)
    }

    /// Burns any existing candy. No burn lot is recorded.
    #[only_owner]
    #[endpoint(burn)]
    fn admin_burn(&self, token_id: u64) {
        self.burn_candy(token_id);
    }

    #[only_owner]
    #[endpoint(setBaseURI)]
    fn set_base_uri(&self, base_uri: ManagedBuffer) {
        self.base_uri().set(&base_uri);
        self.base_uri_set_event(&base_uri);
    }

    // ========================================================
    // ADMIN: withdraw
    // Sweeps the presale proceeds to the owner.
    // ========================================================

    #[only_owner]
    #[endpoint(withdraw)]
    fn withdraw(&self) {
        let owner = self.blockchain().get_owner_address();
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);

        if balance > 0u64 {
            self.send().direct_egld(&owner, &balance);
        }
        self.withdraw_event(&owner, &balance);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("baseUriSet")]
    fn base_uri_set_event(&self, base_uri: &ManagedBuffer);

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);
}
