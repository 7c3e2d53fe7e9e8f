/// PDA seed for the airdrop state account
pub const AIRDROP_STATE_SEED: &[u8] = b"airdrop_state";

/// PDA seed for the claim bitmap word accounts
pub const CLAIM_BITMAP_SEED: &[u8] = b"claim_bitmap";

/// Prefix of the message a recipient signs to authorize a claimer
pub const CLAIM_MESSAGE_DOMAIN: &[u8] = b"merkle-claim:";

/// Allocation ids tracked by a single bitmap word
pub const BITMAP_WORD_BITS: u64 = 256;

/// End time meaning the window never closes
pub const NO_EXPIRY: u64 = u64::MAX;
