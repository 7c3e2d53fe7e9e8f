use anchor_lang::{prelude::*, solana_program::program::invoke_signed};

use crate::{assert_keys_equal, unpack_token_account, MerkleClaimError};

/// What the claim flow needs from the token side: move value out of the
/// airdrop's holdings and read balances.
pub trait TokenLedger {
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()>;

    fn balance_of(&self, owner: &Pubkey) -> Result<u64>;
}

/// Ledger backed by the airdrop vault, paying out through the token program
/// with the airdrop state PDA as signing authority.
pub struct VaultLedger<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub token_mint: AccountInfo<'info>,
    pub decimals: u8,
    pub is_token_2022: bool,
    pub vault: AccountInfo<'info>,
    pub vault_authority: AccountInfo<'info>,
    pub vault_authority_seeds: &'a [&'a [u8]],
    pub recipient: Pubkey,
    pub recipient_token_account: AccountInfo<'info>,
}

impl<'a, 'info> VaultLedger<'a, 'info> {
    fn token_account_of(&self, owner: &Pubkey) -> Result<&AccountInfo<'info>> {
        if *owner == self.recipient {
            Ok(&self.recipient_token_account)
        } else if owner == self.vault_authority.key {
            Ok(&self.vault)
        } else {
            msg!("No token account known for {}", owner);
            err!(MerkleClaimError::PublicKeyMismatch)
        }
    }
}

impl<'a, 'info> TokenLedger for VaultLedger<'a, 'info> {
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        assert_keys_equal(*to, self.recipient)?;

        let transfer_ix = if self.is_token_2022 {
            spl_token_2022::instruction::transfer_checked(
                self.token_program.key,
                self.vault.key,
                self.token_mint.key,
                self.recipient_token_account.key,
                self.vault_authority.key,
                &[],
                amount,
                self.decimals,
            )?
        } else {
            spl_token::instruction::transfer(
                self.token_program.key,
                self.vault.key,
                self.recipient_token_account.key,
                self.vault_authority.key,
                &[],
                amount,
            )?
        };

        let mut invoke_args = vec![
            self.recipient_token_account.clone(),
            self.vault.clone(),
            self.token_program.clone(),
            self.vault_authority.clone(),
        ];
        if self.is_token_2022 {
            invoke_args.push(self.token_mint.clone());
        }

        invoke_signed(&transfer_ix, &invoke_args, &[self.vault_authority_seeds])?;
        Ok(())
    }

    fn balance_of(&self, owner: &Pubkey) -> Result<u64> {
        let token_account = self.token_account_of(owner)?;
        Ok(unpack_token_account(token_account)?.amount)
    }
}
