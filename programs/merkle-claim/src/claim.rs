use anchor_lang::prelude::*;

use crate::{
    verify_proof, AllocationLeaf, ClaimBitmap, ClaimWindow, Credential, MerkleClaimError,
    TokenLedger,
};

/// Everything a claimer presents. Shared by `claim_tokens` and
/// `check_valid_claim`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimParams {
    pub credential: Vec<u8>,
    pub amount: u64,
    pub allocation_id: u64,
    pub begin_time: u64,
    pub end_time: u64,
    pub merkle_proof: Vec<[u8; 32]>,
}

impl ClaimParams {
    pub fn window(&self) -> ClaimWindow {
        ClaimWindow::new(self.begin_time, self.end_time)
    }
}

/// Read-only validation: credential, leaf, proof and window. Returns the leaf
/// the claim resolves to.
pub fn validate_claim(
    root: &[u8; 32],
    claimer: &Pubkey,
    params: &ClaimParams,
    now: u64,
) -> Result<AllocationLeaf> {
    msg!("Amount {}", params.amount);
    msg!("Allocation Id {}", params.allocation_id);

    let credential = Credential::from_bytes(&params.credential)?;
    let recipient = credential.recover_recipient(claimer)?;
    msg!("Recipient {:?}", recipient);

    let leaf = AllocationLeaf {
        recipient,
        amount: params.amount,
        allocation_id: params.allocation_id,
        begin_time: params.begin_time,
        end_time: params.end_time,
    };

    if !verify_proof(&params.merkle_proof, root, leaf.to_merkle_hash()) {
        return err!(MerkleClaimError::InvalidProof);
    }

    params.window().check(now)?;

    Ok(leaf)
}

/// Validates, marks the allocation claimed, then pays the claimer. The bit is
/// set before the transfer so a re-entrant claim observes it. Callers must
/// discard `claim_bitmap` when this returns an error.
pub fn execute_claim<L: TokenLedger>(
    root: &[u8; 32],
    claimer: &Pubkey,
    params: &ClaimParams,
    now: u64,
    claim_bitmap: &mut ClaimBitmap,
    ledger: &mut L,
) -> Result<AllocationLeaf> {
    let leaf = validate_claim(root, claimer, params, now)?;

    claim_bitmap.set_claimed(leaf.allocation_id)?;

    msg!("Claiming {:#} tokens", leaf.amount);
    ledger.transfer(claimer, leaf.amount)?;

    Ok(leaf)
}
