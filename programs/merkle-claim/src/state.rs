use anchor_lang::prelude::*;

use crate::{MerkleClaimError, AIRDROP_STATE_SEED, BITMAP_WORD_BITS};

/// Immutable description of one airdrop. Written once by `init`.
#[account]
#[derive(Debug)]
pub struct AirdropState {
    pub token_mint: Pubkey,
    pub root: [u8; 32],
    pub is_token_2022: bool,
    pub bump: u8,
}

impl AirdropState {
    pub const SEEDS_PREFIX: &'static [u8] = AIRDROP_STATE_SEED;

    pub fn space_with_discriminator() -> usize {
        8 + std::mem::size_of::<AirdropState>()
    }
}

/// One 256-bit word of the claimed/unclaimed record. Bit `id % 256` of word
/// `id / 256` flips to 1 when allocation `id` is claimed and never flips back.
#[account]
#[derive(Debug, Default)]
pub struct ClaimBitmap {
    pub bump: u8,
    pub word_index: u64,
    pub bits: [u64; 4],
}

impl ClaimBitmap {
    pub fn space_with_discriminator() -> usize {
        8 + std::mem::size_of::<ClaimBitmap>()
    }

    pub fn word_index(allocation_id: u64) -> u64 {
        allocation_id / BITMAP_WORD_BITS
    }

    pub fn for_allocation(allocation_id: u64) -> ClaimBitmap {
        ClaimBitmap {
            word_index: Self::word_index(allocation_id),
            ..ClaimBitmap::default()
        }
    }

    fn limb_and_mask(allocation_id: u64) -> (usize, u64) {
        let bit = allocation_id % BITMAP_WORD_BITS;
        ((bit / 64) as usize, 1u64 << (bit % 64))
    }

    fn covers(&self, allocation_id: u64) -> bool {
        Self::word_index(allocation_id) == self.word_index
    }

    pub fn is_claimed(&self, allocation_id: u64) -> bool {
        if !self.covers(allocation_id) {
            return false;
        }
        let (limb, mask) = Self::limb_and_mask(allocation_id);
        self.bits[limb] & mask != 0
    }

    /// The only mutator: checks and sets the bit in one step.
    pub fn set_claimed(&mut self, allocation_id: u64) -> Result<()> {
        if !self.covers(allocation_id) {
            msg!(
                "Allocation {} does not belong to bitmap word {}",
                allocation_id,
                self.word_index
            );
            return err!(MerkleClaimError::BitmapWordMismatch);
        }
        let (limb, mask) = Self::limb_and_mask(allocation_id);
        if self.bits[limb] & mask != 0 {
            return err!(MerkleClaimError::AlreadyClaimed);
        }
        self.bits[limb] |= mask;
        Ok(())
    }

    pub fn claimed_count(&self) -> u32 {
        self.bits.iter().map(|limb| limb.count_ones()).sum()
    }
}
