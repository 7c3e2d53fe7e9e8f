use anchor_lang::{
    prelude::*,
    solana_program::{
        keccak, program::invoke_signed, program_memory::sol_memcmp, pubkey::PUBKEY_BYTES,
    },
};
use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use spl_token_2022::extension::StateWithExtensions;

use crate::MerkleClaimError;

/// Nodes are arranged so the smaller one is on the left.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        keccak::hashv(&[a, b]).0
    } else {
        keccak::hashv(&[b, a]).0
    }
}

pub fn compute_root(proof: &[[u8; 32]], leaf: [u8; 32]) -> [u8; 32] {
    proof
        .iter()
        .fold(leaf, |current_hash, node| hash_pair(&current_hash, node))
}

pub fn verify_proof(proof: &[[u8; 32]], root: &[u8; 32], leaf: [u8; 32]) -> bool {
    let last_hash = compute_root(proof, leaf);
    msg!("Last Hash {:02X?}", last_hash);
    msg!("Root {:02X?}", root);
    last_hash == *root
}

/// Reads a token account of either token program.
pub fn unpack_token_account(account: &AccountInfo) -> Result<spl_token_2022::state::Account> {
    let data = account.try_borrow_data()?;
    let state = StateWithExtensions::<spl_token_2022::state::Account>::unpack(&data)?;
    if state.base.state == spl_token_2022::state::AccountState::Uninitialized {
        return err!(MerkleClaimError::UninitializedAccount);
    }
    Ok(state.base)
}

pub fn token_program_id(is_token_2022: bool) -> Pubkey {
    if is_token_2022 {
        spl_token_2022::id()
    } else {
        spl_token::id()
    }
}

pub fn assert_is_ata(
    ata: &AccountInfo,
    wallet: &Pubkey,
    mint: &Pubkey,
    is_token_2022: bool,
) -> Result<()> {
    let program_id = token_program_id(is_token_2022);
    assert_owned_by(ata, &program_id)?;
    let ata_account = unpack_token_account(ata)?;
    assert_keys_equal(ata_account.owner, *wallet)?;
    assert_keys_equal(ata_account.mint, *mint)?;
    assert_keys_equal(
        get_associated_token_address_with_program_id(wallet, mint, &program_id),
        *ata.key,
    )?;
    Ok(())
}

pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> Result<()> {
    if account.owner != owner {
        msg!("Wrong account owner: {} should be {}", account.owner, owner);
        return err!(MerkleClaimError::WrongAccountOwner);
    }
    Ok(())
}

pub fn assert_keys_equal(key1: Pubkey, key2: Pubkey) -> Result<()> {
    if sol_memcmp(key1.as_ref(), key2.as_ref(), PUBKEY_BYTES) != 0 {
        msg!("Wrong public key: {} should be {}", key1, key2);
        return err!(MerkleClaimError::PublicKeyMismatch);
    }
    Ok(())
}

pub fn make_ata<'a>(
    ata: AccountInfo<'a>,
    wallet: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    fee_payer: AccountInfo<'a>,
    ata_program: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    system_program: AccountInfo<'a>,
) -> Result<()> {
    invoke_signed(
        &spl_associated_token_account::instruction::create_associated_token_account(
            fee_payer.key,
            wallet.key,
            mint.key,
            token_program.key,
        ),
        &[
            ata,
            wallet,
            mint,
            fee_payer,
            ata_program,
            system_program,
            token_program,
        ],
        &[],
    )?;

    Ok(())
}
