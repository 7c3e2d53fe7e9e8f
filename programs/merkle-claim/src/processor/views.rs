use crate::*;

#[derive(Accounts)]
pub struct ReadAirdropState<'info> {
    pub airdrop_state: Account<'info, AirdropState>,
}

#[derive(Accounts)]
#[instruction(allocation_id: u64)]
pub struct IsClaimed<'info> {
    pub airdrop_state: Account<'info, AirdropState>,

    /// CHECK: may not exist yet, the address is pinned by the seeds
    #[account(
        seeds = [
            CLAIM_BITMAP_SEED,
            airdrop_state.key().as_ref(),
            ClaimBitmap::word_index(allocation_id).to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub claim_bitmap: UncheckedAccount<'info>,
}

pub fn handle_token(ctx: Context<ReadAirdropState>) -> Result<Pubkey> {
    Ok(ctx.accounts.airdrop_state.token_mint)
}

pub fn handle_root(ctx: Context<ReadAirdropState>) -> Result<[u8; 32]> {
    Ok(ctx.accounts.airdrop_state.root)
}

pub fn handle_is_claimed(ctx: Context<IsClaimed>, allocation_id: u64) -> Result<bool> {
    read_claimed_bit(&ctx.accounts.claim_bitmap.to_account_info(), allocation_id)
}

/// A word that was never written has no claimed bits.
pub fn read_claimed_bit(claim_bitmap_info: &AccountInfo, allocation_id: u64) -> Result<bool> {
    if claim_bitmap_info.data_is_empty() {
        return Ok(false);
    }
    assert_owned_by(claim_bitmap_info, &crate::ID)?;
    let data = claim_bitmap_info.try_borrow_data()?;
    let claim_bitmap = ClaimBitmap::try_deserialize(&mut &data[..])?;
    Ok(claim_bitmap.is_claimed(allocation_id))
}
