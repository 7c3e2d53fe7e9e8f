use anchor_lang::prelude::*;

/// Event emitted when an airdrop is created
#[event]
pub struct AirdropInitialized {
    pub airdrop_state: Pubkey,
    pub token_mint: Pubkey,
    pub root: [u8; 32],
    pub is_token_2022: bool,
    pub timestamp: i64,
}

/// Event emitted when an allocation is claimed
#[event]
pub struct TokensClaimed {
    pub airdrop_state: Pubkey,
    pub claimer: Pubkey,
    pub recipient: [u8; 20],
    pub allocation_id: u64,
    pub amount: u64,
    pub timestamp: i64,
}
