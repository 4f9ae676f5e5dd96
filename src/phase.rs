multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_PHASE, ERR_NOT_A_WHITELISTED_ADDRESS};
use crate::merkle;

/// Phases run from 0 to 3; nothing else constrains the order.
pub const MAX_PHASE: u8 = 3;

#[multiversx_sc::module]
pub trait PhaseModule {
    /// Binds `root` to `phase`. Always overwrites, even for the current phase.
    #[only_owner]
    #[endpoint(setPhase)]
    fn set_phase(&self, phase: u8, root: ManagedByteArray<Self::Api, 32>) {
        require!(phase <= MAX_PHASE, ERR_INVALID_PHASE);

        self.phase().set(phase);
        self.merkle_root().set(&root);
        self.phase_set_event(phase, &root);
    }

    fn require_whitelisted(
        &self,
        address: &ManagedAddress,
        proof: &ManagedVec<Self::Api, ManagedByteArray<Self::Api, 32>>,
    ) {
        require!(
            self.is_whitelisted(address, proof),
            ERR_NOT_A_WHITELISTED_ADDRESS
        );
    }

    /// Checks `address` against the root bound right now, never an older one.
    #[view(isWhitelisted)]
    fn is_whitelisted(
        &self,
        address: &ManagedAddress,
        proof: &ManagedVec<Self::Api, ManagedByteArray<Self::Api, 32>>,
    ) -> bool {
        let root_mapper = self.merkle_root();
        if root_mapper.is_empty() {
            return false;
        }
        let root = root_mapper.get().to_byte_array();

        let keccak = |data: &[u8]| -> merkle::Hash {
            self.crypto()
                .keccak256(ManagedBuffer::new_from_bytes(data))
                .to_byte_array()
        };
        let leaf = keccak(&address.to_byte_array()[..]);
        let siblings = proof.iter().map(|node| node.to_byte_array());

        merkle::verify(&root, leaf, siblings, &keccak)
    }

    #[view(getPhase)]
    fn get_phase(&self) -> u8 {
        self.phase().get()
    }

    #[view(getMerkleRoot)]
    fn get_merkle_root(&self) -> ManagedByteArray<Self::Api, 32> {
        self.merkle_root().get()
    }

    #[event("phaseSet")]
    fn phase_set_event(&self, #[indexed] phase: u8, root: &ManagedByteArray<Self::Api, 32>);

    #[storage_mapper("phase")]
    fn phase(&self) -> SingleValueMapper<u8>;

    #[storage_mapper("merkleRoot")]
    fn merkle_root(&self) -> SingleValueMapper<ManagedByteArray<Self::Api, 32>>;
}
