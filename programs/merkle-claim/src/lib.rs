use anchor_lang::prelude::*;

mod claim;
mod constants;
mod credential;
mod errors;
mod events;
mod leaf;
mod ledger;
mod processor;
mod state;
mod utils;
mod window;
pub use crate::claim::*;
pub use crate::constants::*;
pub use crate::credential::*;
pub use crate::errors::*;
pub use crate::events::*;
pub use crate::leaf::*;
pub use crate::ledger::*;
pub use crate::processor::*;
pub use crate::state::*;
pub use crate::utils::*;
pub use crate::window::*;

declare_id!("8wgHFBLPRt94hD2RUSqfJroWHdrJauE6fQRZsjzzJfhf");

#[program]
pub mod merkle_claim {
    use super::*;

    pub fn init(ctx: Context<InitializeAirdropState>, root: [u8; 32]) -> Result<()> {
        handle_init(ctx, root)
    }

    pub fn claim_tokens(ctx: Context<ClaimTokens>, params: ClaimParams) -> Result<()> {
        handle_claim_tokens(ctx, params)
    }

    pub fn check_valid_claim(ctx: Context<CheckValidClaim>, params: ClaimParams) -> Result<()> {
        handle_check_valid_claim(ctx, params)
    }

    pub fn token(ctx: Context<ReadAirdropState>) -> Result<Pubkey> {
        handle_token(ctx)
    }

    pub fn root(ctx: Context<ReadAirdropState>) -> Result<[u8; 32]> {
        handle_root(ctx)
    }

    pub fn is_claimed(ctx: Context<IsClaimed>, allocation_id: u64) -> Result<bool> {
        handle_is_claimed(ctx, allocation_id)
    }
}
