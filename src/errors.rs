// Stable error identifiers. The value is what callers see as the error
// message, so it must never change once released.

// ── Phase / whitelist ──
pub const ERR_INVALID_PHASE: &str = "InvalidPhase";
pub const ERR_NOT_A_WHITELISTED_ADDRESS: &str = "NotAWhitelistedAddress";

// ── Supply ──
pub const ERR_TOTAL_SUPPLY_HAS_REACHED: &str = "TotalSupplyHasReached";

// ── Distribution channels ──
pub const ERR_CANNOT_PURCHASE_MORE_THAN_1_TIME: &str = "CannotPurchaseMoreThan1Time";
pub const ERR_PURCHASED_ETHER_MUST_BE_CORRECT: &str = "PurchasedEtherMustBeCorrect";
pub const ERR_NO_PUBLIC_SALE_AIRDROP: &str = "NoPublicSaleAirdrop";
pub const ERR_CANNOT_CLAIM_MORE_THAN_1_TIME: &str = "CannotClaimMoreThan1Time";
pub const ERR_NO_PUBLIC_MINT_AIRDROP: &str = "NoPublicMintAirdrop";
pub const ERR_ADDRESSES_AND_QTYS_LENGTH_ARE_DIFFERENT: &str = "AddressesAndQtysLengthAreDifferent";

// ── Burn queue ──
pub const ERR_CANDY_QTY_MUST_NOT_BE_0: &str = "CandyQtyMustNotBe0";
pub const ERR_CANDY_QTY_MUST_BE_IN_MULTIPLY_OF_4: &str = "CandyQtyMustBeInMultiplyOf4";
pub const ERR_CANDY_QTY_MUST_BE_LESS_OR_EQUAL_TO_BALANCE: &str =
    "CandyQtyMustBeLessOrEqualToBalance";
pub const ERR_IS_NOT_CANDY_OWNER: &str = "IsNotCandyOwner";
pub const ERR_ZOMBIE_BIRD_ADDRESS_WAS_NOT_YET_SET: &str = "ZombieBirdAddressWasNotYetSet";
pub const ERR_ZOMBIE_BIRD_ADDRESS_WAS_SET_BEFORE: &str = "ZombieBirdAddressWasSetBefore";
pub const ERR_NO_ZOMBIE_BIRD_CAN_BE_CLAIMED: &str = "NoZombieBirdCanBeClaimed";
pub const ERR_ZOMBIE_BIRD_MINT_REJECTED: &str = "ZombieBirdMintRejected";

// ── Pause gate ──
pub const ERR_PAUSED: &str = "Pausable: paused";
pub const ERR_NOT_PAUSED: &str = "Pausable: not paused";

// ── Ownership ledger ──
pub const ERR_TOKEN_DOES_NOT_EXIST: &str = "TokenDoesNotExist";
pub const ERR_CALLER_IS_NOT_OWNER_NOR_APPROVED: &str = "CallerIsNotOwnerNorApproved";
pub const ERR_TRANSFER_FROM_INCORRECT_OWNER: &str = "TransferFromIncorrectOwner";
pub const ERR_TRANSFER_TO_ZERO_ADDRESS: &str = "TransferToZeroAddress";
pub const ERR_APPROVAL_TO_CURRENT_OWNER: &str = "ApprovalToCurrentOwner";
