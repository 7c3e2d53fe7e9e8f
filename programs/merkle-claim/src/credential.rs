use anchor_lang::{
    prelude::*,
    solana_program::{keccak, secp256k1_recover::secp256k1_recover},
};

use crate::{EthAddress, MerkleClaimError, CLAIM_MESSAGE_DOMAIN};

const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// A recipient's recoverable secp256k1 signature authorizing one claimer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credential {
    signature: [u8; 64],
    recovery_id: u8,
}

impl Credential {
    pub const LEN: usize = 65;

    /// Accepts `r ‖ s ‖ v` with `v` either raw (0, 1) or Ethereum style (27, 28).
    pub fn from_bytes(bytes: &[u8]) -> Result<Credential> {
        if bytes.len() != Self::LEN {
            msg!("Credential length {} should be {}", bytes.len(), Self::LEN);
            return err!(MerkleClaimError::InvalidProof);
        }
        let recovery_id = match bytes[64] {
            0 | 1 => bytes[64],
            27 | 28 => bytes[64] - 27,
            v => {
                msg!("Credential recovery id {} is invalid", v);
                return err!(MerkleClaimError::InvalidProof);
            }
        };
        let mut signature = [0u8; 64];
        signature.copy_from_slice(&bytes[..64]);
        Ok(Credential {
            signature,
            recovery_id,
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut bytes = [0u8; Self::LEN];
        bytes[..64].copy_from_slice(&self.signature);
        bytes[64] = self.recovery_id + 27;
        bytes
    }

    /// Recovers the recipient that signed the claim message for `claimer`.
    /// A signature over any other message recovers some unrelated address,
    /// which then fails the proof check.
    pub fn recover_recipient(&self, claimer: &Pubkey) -> Result<EthAddress> {
        let digest = claim_message_digest(claimer);
        let public_key = secp256k1_recover(&digest, self.recovery_id, &self.signature)
            .map_err(|e| {
                msg!("Credential recovery failed: {:?}", e);
                MerkleClaimError::InvalidProof
            })?;
        Ok(EthAddress::from_public_key(&public_key.to_bytes()))
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

/// `"merkle-claim:" ‖ claimer`, the bytes a recipient signs.
pub fn claim_message(claimer: &Pubkey) -> Vec<u8> {
    [CLAIM_MESSAGE_DOMAIN, claimer.as_ref()].concat()
}

/// EIP-191 personal message hash of [`claim_message`].
pub fn claim_message_digest(claimer: &Pubkey) -> [u8; 32] {
    let message = claim_message(claimer);
    let length = message.len().to_string();
    keccak::hashv(&[PERSONAL_MESSAGE_PREFIX, length.as_bytes(), message.as_slice()]).0
}
