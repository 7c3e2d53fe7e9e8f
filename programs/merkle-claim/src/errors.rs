use anchor_lang::prelude::*;

#[error_code]
pub enum MerkleClaimError {
    // 6000
    #[msg("InvalidProof")]
    InvalidProof,
    // 6001
    #[msg("NotReadyYet")]
    NotReadyYet,
    // 6002
    #[msg("Expired")]
    Expired,
    // 6003
    #[msg("AlreadyClaimed")]
    AlreadyClaimed,
    // 6004
    #[msg("PublicKeyMismatch")]
    PublicKeyMismatch,
    // 6005
    #[msg("UninitializedAccount")]
    UninitializedAccount,
    // 6006
    #[msg("Wrong account owner")]
    WrongAccountOwner,
    // 6007
    #[msg("Allocation id is outside the bitmap word")]
    BitmapWordMismatch,
    // 6008
    #[msg("Merkle root is zeroed")]
    MerkleRootIsZeroed,
}
