#![no_std]

multiversx_sc::imports!();

pub mod zombie_bird_mock_proxy;

pub const MINT_FAILED_ERR: &str = "ZombieBirdMintFailed";

/// Stand-in for the zombie bird collection. Counts mints per receiver. It
/// can refuse every mint by returning `false`, or be switched to revert.
#[multiversx_sc::contract]
pub trait ZombieBirdMock {
    #[init]
    fn init(&self, accept_mints: bool) {
        self.accept_mints().set(accept_mints);
    }

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress, qty: u64) -> bool {
        if self.reverting().get() {
            sc_panic!(MINT_FAILED_ERR);
        }
        if !self.accept_mints().get() {
            return false;
        }
        self.minted(&to).update(|minted| *minted += qty);
        self.mint_calls().update(|calls| *calls += 1);
        true
    }

    #[endpoint(setReverting)]
    fn set_reverting(&self, reverting: bool) {
        self.reverting().set(reverting);
    }

    #[view(getMinted)]
    fn get_minted(&self, owner: &ManagedAddress) -> u64 {
        self.minted(owner).get()
    }

    #[view(getMintCalls)]
    fn get_mint_calls(&self) -> u64 {
        self.mint_calls().get()
    }

    #[storage_mapper("acceptMints")]
    fn accept_mints(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("reverting")]
    fn reverting(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("minted")]
    fn minted(&self, owner: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("mintCalls")]
    fn mint_calls(&self) -> SingleValueMapper<u64>;
}
