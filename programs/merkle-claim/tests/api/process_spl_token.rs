use anchor_lang::solana_program::program_pack::Pack;
use anyhow::Result;
use solana_program_test::ProgramTestContext;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::system_instruction;
use spl_associated_token_account::get_associated_token_address_with_program_id;
use spl_token_2022::extension::StateWithExtensions;

use crate::api::process_memnet::process_instructions_with_signers;

/// Creates and initializes a mint owned by `token_program`, which may be
/// either SPL Token or Token-2022.
pub async fn process_spl_token_mint_new(
    context: &mut ProgramTestContext,
    token_program: &Pubkey,
    mint_authority: &Pubkey,
    decimals: u8,
) -> Result<Pubkey> {
    let mint = Keypair::new();
    let rent = context.banks_client.get_rent().await?;
    let space = spl_token_2022::state::Mint::LEN;
    let instructions = [
        system_instruction::create_account(
            &context.payer.pubkey(),
            &mint.pubkey(),
            rent.minimum_balance(space),
            space as u64,
            token_program,
        ),
        spl_token_2022::instruction::initialize_mint2(
            token_program,
            &mint.pubkey(),
            mint_authority,
            None,
            decimals,
        )?,
    ];
    process_instructions_with_signers(context, &instructions, &[&mint]).await?;
    Ok(mint.pubkey())
}

pub async fn process_spl_associated_token_account_init(
    context: &mut ProgramTestContext,
    token_program: &Pubkey,
    wallet: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey> {
    let instruction =
        spl_associated_token_account::instruction::create_associated_token_account(
            &context.payer.pubkey(),
            wallet,
            mint,
            token_program,
        );
    process_instructions_with_signers(context, &[instruction], &[]).await?;
    Ok(get_associated_token_address_with_program_id(
        wallet,
        mint,
        token_program,
    ))
}

pub async fn process_spl_token_mint_to(
    context: &mut ProgramTestContext,
    token_program: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Keypair,
    token_account: &Pubkey,
    amount: u64,
) -> Result<()> {
    let instruction = spl_token_2022::instruction::mint_to(
        token_program,
        mint,
        token_account,
        &mint_authority.pubkey(),
        &[],
        amount,
    )?;
    process_instructions_with_signers(
        context,
        &[instruction],
        &[mint_authority],
    )
    .await?;
    Ok(())
}

/// Zero when the token account does not exist yet.
pub async fn get_spl_token_balance(
    context: &mut ProgramTestContext,
    token_account: &Pubkey,
) -> Result<u64> {
    match context.banks_client.get_account(*token_account).await? {
        None => Ok(0),
        Some(account) => Ok(StateWithExtensions::<
            spl_token_2022::state::Account,
        >::unpack(&account.data)?
        .base
        .amount),
    }
}
