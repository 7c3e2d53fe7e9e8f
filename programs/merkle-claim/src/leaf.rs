use std::fmt;

use anchor_lang::solana_program::keccak::hash;

/// 160-bit recipient identity: the last 20 bytes of the keccak256 hash of an
/// uncompressed secp256k1 public key.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct EthAddress(pub [u8; 20]);

impl EthAddress {
    pub fn from_public_key(public_key: &[u8; 64]) -> EthAddress {
        let digest = hash(public_key).0;
        let mut address = [0u8; 20];
        address.copy_from_slice(&digest[12..]);
        EthAddress(address)
    }

    pub fn to_bytes(&self) -> [u8; 20] {
        self.0
    }
}

impl fmt::Debug for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// One recipient record as committed by the off-chain tree builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationLeaf {
    pub recipient: EthAddress,
    pub amount: u64,
    pub allocation_id: u64,
    pub begin_time: u64,
    pub end_time: u64,
}

impl AllocationLeaf {
    pub const ENCODED_LEN: usize = 5 * 32;

    /// ABI layout of `(bytes20, uint256, uint256, uint256, uint256)`.
    pub fn encode(&self) -> [u8; Self::ENCODED_LEN] {
        let mut encoded = [0u8; Self::ENCODED_LEN];
        encoded[..20].copy_from_slice(&self.recipient.0);
        encoded[32..64].copy_from_slice(&uint256_word(self.amount));
        encoded[64..96].copy_from_slice(&uint256_word(self.allocation_id));
        encoded[96..128].copy_from_slice(&uint256_word(self.begin_time));
        encoded[128..160].copy_from_slice(&uint256_word(self.end_time));
        encoded
    }

    /// Leaves are hashed twice so they can never be mistaken for a 64-byte
    /// inner node.
    pub fn to_merkle_hash(&self) -> [u8; 32] {
        let inner = hash(&self.encode()).0;
        hash(&inner).0
    }
}

fn uint256_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}
