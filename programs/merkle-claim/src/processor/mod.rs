pub mod check_valid_claim;
pub mod claim_tokens;
pub mod initialize_airdrop_state;
pub mod views;

pub use check_valid_claim::*;
pub use claim_tokens::*;
pub use initialize_airdrop_state::*;
pub use views::*;
