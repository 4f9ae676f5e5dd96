multiversx_sc::imports!();

use crate::errors::{ERR_NOT_PAUSED, ERR_PAUSED};

/// Global stop switch for minting, burning and transfers.
#[multiversx_sc::module]
pub trait PauseModule {
    #[only_owner]
    #[endpoint(pause)]
    fn pause(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
        self.paused().set(true);
        self.paused_event(&self.blockchain().get_caller());
    }

    #[only_owner]
    #[endpoint(unpause)]
    fn unpause(&self) {
        require!(self.paused().get(), ERR_NOT_PAUSED);
        self.paused().set(false);
        self.unpaused_event(&self.blockchain().get_caller());
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    #[view(isPaused)]
    fn is_paused(&self) -> bool {
        self.paused().get()
    }

    #[event("paused")]
    fn paused_event(&self, #[indexed] by: &ManagedAddress);

    #[event("unpaused")]
    fn unpaused_event(&self, #[indexed] by: &ManagedAddress);

    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;
}
