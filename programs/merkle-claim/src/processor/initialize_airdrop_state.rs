use crate::*;

use anchor_spl::token_interface::{Mint, TokenInterface};

#[derive(Accounts)]
#[instruction(root: [u8; 32])]
pub struct InitializeAirdropState<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        seeds = [AirdropState::SEEDS_PREFIX, token_mint.key().as_ref(), root.as_ref()],
        bump,
        space = AirdropState::space_with_discriminator(),
        payer = payer
    )]
    pub airdrop_state: Account<'info, AirdropState>,

    #[account(mint::token_program = spl_token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The SPL token program account
    pub spl_token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handle_init(ctx: Context<InitializeAirdropState>, root: [u8; 32]) -> Result<()> {
    require!(root != [0u8; 32], MerkleClaimError::MerkleRootIsZeroed);

    let is_token_2022 = ctx.accounts.spl_token_program.key() == spl_token_2022::id();
    let airdrop_state = &mut ctx.accounts.airdrop_state;
    airdrop_state.token_mint = ctx.accounts.token_mint.key();
    airdrop_state.root = root;
    airdrop_state.is_token_2022 = is_token_2022;
    airdrop_state.bump = ctx.bumps.airdrop_state;

    msg!("Root {:02X?}", root);
    msg!("Token 2022 {}", is_token_2022);

    emit!(AirdropInitialized {
        airdrop_state: airdrop_state.key(),
        token_mint: airdrop_state.token_mint,
        root,
        is_token_2022,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
