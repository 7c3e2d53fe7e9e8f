use crate::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

#[derive(Accounts)]
#[instruction(params: ClaimParams)]
pub struct ClaimTokens<'info> {
    /// The caller. Receives the tokens and pays rent for a new bitmap word.
    #[account(mut)]
    pub claimer: Signer<'info>,

    /// CHECK: checked below
    #[account(mut)]
    pub claimer_mint_ata: UncheckedAccount<'info>,

    #[account(mint::token_program = spl_token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        has_one = token_mint,
        seeds = [AirdropState::SEEDS_PREFIX, token_mint.key().as_ref(), airdrop_state.root.as_ref()],
        bump = airdrop_state.bump,
    )]
    pub airdrop_state: Account<'info, AirdropState>,

    #[account(
        init_if_needed,
        payer = claimer,
        space = ClaimBitmap::space_with_discriminator(),
        seeds = [
            CLAIM_BITMAP_SEED,
            airdrop_state.key().as_ref(),
            ClaimBitmap::word_index(params.allocation_id).to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub claim_bitmap: Account<'info, ClaimBitmap>,

    #[account(mut,
        token::mint = token_mint,
        token::authority = airdrop_state,
        token::token_program = spl_token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// The SPL token program account
    pub spl_token_program: Interface<'info, TokenInterface>,
    pub ata_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

pub fn handle_claim_tokens(ctx: Context<ClaimTokens>, params: ClaimParams) -> Result<()> {
    let claim_bitmap_bump = ctx.bumps.claim_bitmap;
    let accounts = ctx.accounts;
    let claimer = &accounts.claimer;
    let token_mint = &accounts.token_mint;
    let claimer_mint_ata = &accounts.claimer_mint_ata;
    let airdrop_state = &accounts.airdrop_state;
    let vault = &accounts.vault;

    if claimer_mint_ata.data_is_empty() {
        make_ata(
            claimer_mint_ata.to_account_info(),
            claimer.to_account_info(),
            token_mint.to_account_info(),
            claimer.to_account_info(),
            accounts.ata_program.to_account_info(),
            accounts.spl_token_program.to_account_info(),
            accounts.system_program.to_account_info(),
        )?;
    }

    assert_is_ata(
        claimer_mint_ata,
        claimer.key,
        &token_mint.key(),
        airdrop_state.is_token_2022,
    )?;
    assert_is_ata(
        &vault.to_account_info(),
        &airdrop_state.key(),
        &token_mint.key(),
        airdrop_state.is_token_2022,
    )?;

    let claimer_key = claimer.key();
    let airdrop_state_key = airdrop_state.key();
    let root = airdrop_state.root;
    let token_mint_key = token_mint.key();
    let airdrop_state_bump = [airdrop_state.bump];
    let signer_seeds: &[&[u8]] = &[
        AirdropState::SEEDS_PREFIX,
        token_mint_key.as_ref(),
        root.as_ref(),
        &airdrop_state_bump,
    ];

    let mut ledger = VaultLedger {
        token_program: accounts.spl_token_program.to_account_info(),
        token_mint: token_mint.to_account_info(),
        decimals: token_mint.decimals,
        is_token_2022: airdrop_state.is_token_2022,
        vault: vault.to_account_info(),
        vault_authority: airdrop_state.to_account_info(),
        vault_authority_seeds: signer_seeds,
        recipient: claimer_key,
        recipient_token_account: claimer_mint_ata.to_account_info(),
    };
    msg!("Vault holds {:#} tokens", ledger.balance_of(&airdrop_state_key)?);

    let claim_bitmap = &mut accounts.claim_bitmap;
    claim_bitmap.bump = claim_bitmap_bump;
    claim_bitmap.word_index = ClaimBitmap::word_index(params.allocation_id);

    let clock = Clock::get()?;
    let leaf = execute_claim(
        &root,
        &claimer_key,
        &params,
        unix_now(&clock),
        claim_bitmap,
        &mut ledger,
    )?;

    msg!("Claimer holds {:#} tokens", ledger.balance_of(&claimer_key)?);

    emit!(TokensClaimed {
        airdrop_state: airdrop_state_key,
        claimer: claimer_key,
        recipient: leaf.recipient.to_bytes(),
        allocation_id: leaf.allocation_id,
        amount: leaf.amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
