use anchor_lang::prelude::*;

use crate::{MerkleClaimError, NO_EXPIRY};

/// Eligibility window `[begin_time, end_time)` in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimWindow {
    pub begin_time: u64,
    pub end_time: u64,
}

impl ClaimWindow {
    pub fn new(begin_time: u64, end_time: u64) -> ClaimWindow {
        ClaimWindow {
            begin_time,
            end_time,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.end_time == NO_EXPIRY
    }

    pub fn check(&self, now: u64) -> Result<()> {
        if now < self.begin_time {
            msg!("Claim opens at {}, now {}", self.begin_time, now);
            return err!(MerkleClaimError::NotReadyYet);
        }
        if now >= self.end_time {
            msg!("Claim closed at {}, now {}", self.end_time, now);
            return err!(MerkleClaimError::Expired);
        }
        Ok(())
    }
}

/// Clock timestamps before the epoch read as zero.
pub fn unix_now(clock: &Clock) -> u64 {
    u64::try_from(clock.unix_timestamp).unwrap_or(0)
}
