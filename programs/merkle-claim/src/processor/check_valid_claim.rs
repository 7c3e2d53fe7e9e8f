use crate::*;

#[derive(Accounts)]
pub struct CheckValidClaim<'info> {
    pub claimer: Signer<'info>,

    pub airdrop_state: Account<'info, AirdropState>,
}

/// Runs the validation half of a claim without touching any state.
pub fn handle_check_valid_claim(ctx: Context<CheckValidClaim>, params: ClaimParams) -> Result<()> {
    let clock = Clock::get()?;
    let leaf = validate_claim(
        &ctx.accounts.airdrop_state.root,
        ctx.accounts.claimer.key,
        &params,
        unix_now(&clock),
    )?;
    msg!("Allocation {} is claimable", leaf.allocation_id);
    Ok(())
}
