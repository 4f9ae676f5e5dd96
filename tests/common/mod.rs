#![allow(dead_code)]

use candy_issuance::candy_issuance_proxy::CandyIssuanceProxy;
use candy_issuance::merkle::{self, Hash};
use candy_issuance::types::BurnLot;
use multiversx_sc_scenario::imports::*;
use sha3::{Digest, Keccak256};
use zombie_bird_mock::zombie_bird_mock_proxy::ZombieBirdMockProxy;

pub const CANDY_CODE: MxscPath = MxscPath::new("output/candy-issuance.mxsc.json");
pub const ZOMBIE_BIRD_CODE: MxscPath =
    MxscPath::new("test-contracts/zombie-bird-mock/output/zombie-bird-mock.mxsc.json");

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const USER1: TestAddress = TestAddress::new("user1");
pub const USER2: TestAddress = TestAddress::new("user2");
pub const USER3: TestAddress = TestAddress::new("user3");

pub const CANDY: TestSCAddress = TestSCAddress::new("candy");
pub const ZOMBIE_BIRD: TestSCAddress = TestSCAddress::new("zombie-bird");

pub const BASE_URI: &str = "http://bird/";
pub const START_BALANCE: u64 = 10_000_000_000_000_000_000;
pub const T0: u64 = 1_700_000_000;
pub const DAY: u64 = 86_400;

pub const OWNER_ONLY_ERR: &str = "Endpoint can only be called by owner";

pub fn keccak(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

// ============================================================
// Whitelist tree, built the way the off-chain tooling builds it:
// keccak(address) leaves, sorted pairs, odd node promoted.
// ============================================================

pub struct Whitelist {
    layers: Vec<Vec<Hash>>,
}

impl Whitelist {
    pub fn new(members: &[TestAddress]) -> Self {
        let leaves: Vec<Hash> = members.iter().map(|m| leaf_of(*m)).collect();
        let mut layers = vec![leaves];

        while layers.last().unwrap().len() > 1 {
            let next = layers
                .last()
                .unwrap()
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => merkle::hash_pair(a, b, &keccak),
                    [a] => *a,
                    _ => unreachable!(),
                })
                .collect();
            layers.push(next);
        }

        Whitelist { layers }
    }

    pub fn root(&self) -> Hash {
        self.layers.last().unwrap()[0]
    }

    pub fn proof(&self, member: TestAddress) -> Vec<Hash> {
        let leaf = leaf_of(member);
        let mut index = self.layers[0]
            .iter()
            .position(|l| *l == leaf)
            .expect("address is not in the whitelist");

        let mut proof = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = index ^ 1;
            if sibling < layer.len() {
                proof.push(layer[sibling]);
            }
            index /= 2;
        }
        proof
    }
}

pub fn leaf_of(address: TestAddress) -> Hash {
    keccak(address.to_address().as_bytes())
}

// ============================================================
// Managed argument helpers
// ============================================================

pub fn managed_address(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

pub fn managed_sc_address(address: TestSCAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

pub fn managed_hash(hash: &Hash) -> ManagedByteArray<StaticApi, 32> {
    ManagedByteArray::new_from_bytes(hash)
}

pub fn managed_proof(proof: &[Hash]) -> ManagedVec<StaticApi, ManagedByteArray<StaticApi, 32>> {
    let mut nodes = ManagedVec::new();
    for node in proof {
        nodes.push(managed_hash(node));
    }
    nodes
}

pub fn managed_ids<I: IntoIterator<Item = u64>>(ids: I) -> ManagedVec<StaticApi, u64> {
    let mut list = ManagedVec::new();
    for id in ids {
        list.push(id);
    }
    list
}

pub fn managed_addresses(
    addresses: &[TestAddress],
) -> ManagedVec<StaticApi, ManagedAddress<StaticApi>> {
    let mut list = ManagedVec::new();
    for address in addresses {
        list.push(managed_address(*address));
    }
    list
}

pub fn managed_qtys(qtys: &[u64]) -> ManagedVec<StaticApi, u64> {
    managed_ids(qtys.iter().copied())
}

// ============================================================
// Test state
// ============================================================

pub struct CandyTestState {
    pub world: ScenarioWorld,
}

impl CandyTestState {
    pub fn new() -> Self {
        let mut world = ScenarioWorld::new();
        world.register_contract(CANDY_CODE, candy_issuance::ContractBuilder);
        world.register_contract(ZOMBIE_BIRD_CODE, zombie_bird_mock::ContractBuilder);

        for account in [OWNER, USER1, USER2, USER3] {
            world.account(account).nonce(1).balance(START_BALANCE);
        }
        world.current_block().block_timestamp(T0);

        world
            .tx()
            .from(OWNER)
            .typed(CandyIssuanceProxy)
            .init(ManagedBuffer::<StaticApi>::from(BASE_URI))
            .code(CANDY_CODE)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .new_address(CANDY)
            .run();

        CandyTestState { world }
    }

    pub fn deploy_zombie_bird(&mut self, accept_mints: bool) -> &mut Self {
        self.world
            .tx()
            .from(OWNER)
            .typed(ZombieBirdMockProxy)
            .init(accept_mints)
            .code(ZOMBIE_BIRD_CODE)
            .new_address(ZOMBIE_BIRD)
            .run();
        self
    }

    pub fn make_zombie_bird_revert(&mut self) -> &mut Self {
        self.world
            .tx()
            .from(OWNER)
            .to(ZOMBIE_BIRD)
            .typed(ZombieBirdMockProxy)
            .set_reverting(true)
            .run();
        self
    }

    pub fn set_timestamp(&mut self, timestamp: u64) -> &mut Self {
        self.world.current_block().block_timestamp(timestamp);
        self
    }

    // ── Admin ──

    pub fn set_phase(&mut self, phase: u8, root: &Hash) -> &mut Self {
        self.world
            .tx()
            .from(OWNER)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .set_phase(phase, managed_hash(root))
            .run();
        self
    }

    pub fn admin_mint(&mut self, to: TestAddress, qty: u64) -> &mut Self {
        self.world
            .tx()
            .from(OWNER)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .admin_mint(managed_address(to), qty)
            .run();
        self
    }

    pub fn seed_sale_airdrop(&mut self, addresses: &[TestAddress], qtys: &[u64]) -> &mut Self {
        self.world
            .tx()
            .from(OWNER)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .seed_sale_airdrop(managed_addresses(addresses), managed_qtys(qtys))
            .run();
        self
    }

    pub fn seed_mint_airdrop(&mut self, addresses: &[TestAddress], qtys: &[u64]) -> &mut Self {
        self.world
            .tx()
            .from(OWNER)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .seed_mint_airdrop(managed_addresses(addresses), managed_qtys(qtys))
            .run();
        self
    }

    pub fn set_zombie_bird_address(&mut self) -> &mut Self {
        self.world
            .tx()
            .from(OWNER)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .set_zombie_bird_address(managed_sc_address(ZOMBIE_BIRD))
            .run();
        self
    }

    pub fn pause(&mut self) -> &mut Self {
        self.world
            .tx()
            .from(OWNER)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .pause()
            .run();
        self
    }

    pub fn unpause(&mut self) -> &mut Self {
        self.world
            .tx()
            .from(OWNER)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .unpause()
            .run();
        self
    }

    // ── Holders ──

    pub fn presale_mint(&mut self, buyer: TestAddress, proof: &[Hash], amount: u64) -> &mut Self {
        self.world
            .tx()
            .from(buyer)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .presale_mint(managed_proof(proof))
            .egld(amount)
            .run();
        self
    }

    pub fn presale_mint_expect_err(
        &mut self,
        buyer: TestAddress,
        proof: &[Hash],
        amount: u64,
        err: &str,
    ) -> &mut Self {
        self.world
            .tx()
            .from(buyer)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .presale_mint(managed_proof(proof))
            .egld(amount)
            .returns(ExpectError(4, err))
            .run();
        self
    }

    pub fn public_mint_sale(&mut self, claimer: TestAddress, proof: &[Hash]) -> &mut Self {
        self.world
            .tx()
            .from(claimer)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .public_mint_sale(managed_proof(proof))
            .run();
        self
    }

    pub fn public_mint_sale_expect_err(
        &mut self,
        claimer: TestAddress,
        proof: &[Hash],
        err: &str,
    ) -> &mut Self {
        self.world
            .tx()
            .from(claimer)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .public_mint_sale(managed_proof(proof))
            .returns(ExpectError(4, err))
            .run();
        self
    }

    pub fn public_mint_airdrop(&mut self, claimer: TestAddress, proof: &[Hash]) -> &mut Self {
        self.world
            .tx()
            .from(claimer)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .public_mint_airdrop(managed_proof(proof))
            .run();
        self
    }

    pub fn public_mint_airdrop_expect_err(
        &mut self,
        claimer: TestAddress,
        proof: &[Hash],
        err: &str,
    ) -> &mut Self {
        self.world
            .tx()
            .from(claimer)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .public_mint_airdrop(managed_proof(proof))
            .returns(ExpectError(4, err))
            .run();
        self
    }

    pub fn burn_candy(&mut self, holder: TestAddress, ids: std::ops::Range<u64>) -> &mut Self {
        self.world
            .tx()
            .from(holder)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .burn_to_queue(managed_ids(ids))
            .run();
        self
    }

    pub fn burn_candy_expect_err(&mut self, holder: TestAddress, ids: &[u64], err: &str) -> &mut Self {
        self.world
            .tx()
            .from(holder)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .burn_to_queue(managed_ids(ids.iter().copied()))
            .returns(ExpectError(4, err))
            .run();
        self
    }

    pub fn claim_zombie_bird(&mut self, holder: TestAddress) -> u64 {
        self.world
            .tx()
            .from(holder)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .claim_from_queue()
            .returns(ReturnsResult)
            .run()
    }

    pub fn claim_zombie_bird_expect_err(&mut self, holder: TestAddress, err: &str) -> &mut Self {
        self.world
            .tx()
            .from(holder)
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .claim_from_queue()
            .returns(ExpectError(4, err))
            .run();
        self
    }

    // ── Views ──

    pub fn balance_of(&mut self, owner: TestAddress) -> u64 {
        self.world
            .query()
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .balance_of(managed_address(owner))
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_supply(&mut self) -> u64 {
        self.world
            .query()
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .total_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn issued_supply(&mut self) -> u64 {
        self.world
            .query()
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .get_issued_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn burn_lot(&mut self, owner: TestAddress, index: u64) -> BurnLot {
        self.world
            .query()
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .get_burn_lot(managed_address(owner), index)
            .returns(ReturnsResult)
            .run()
    }

    pub fn burn_lot_count(&mut self, owner: TestAddress) -> u64 {
        self.world
            .query()
            .to(CANDY)
            .typed(CandyIssuanceProxy)
            .get_burn_lot_count(managed_address(owner))
            .returns(ReturnsResult)
            .run()
    }

    pub fn zombie_birds_minted(&mut self, owner: TestAddress) -> u64 {
        self.world
            .query()
            .to(ZOMBIE_BIRD)
            .typed(ZombieBirdMockProxy)
            .get_minted(managed_address(owner))
            .returns(ReturnsResult)
            .run()
    }

    pub fn zombie_bird_mint_calls(&mut self) -> u64 {
        self.world
            .query()
            .to(ZOMBIE_BIRD)
            .typed(ZombieBirdMockProxy)
            .get_mint_calls()
            .returns(ReturnsResult)
            .run()
    }
}
