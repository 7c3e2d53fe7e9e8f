use anchor_lang::prelude::Pubkey;
use merkle_claim::MerkleClaimError;

use crate::api::airdrop_harness::assert_claim_error;
use crate::api::airdrop_harness::AirdropHarness;
use crate::api::credentials::credential_from_text;
use crate::api::credentials::credential_to_text;
use crate::api::three_recipients::ThreeRecipients;
use crate::api::three_recipients::EXPECTED_ROOT;
use crate::api::three_recipients::FIRST_UNLOCK;
use crate::api::three_recipients::SECOND_UNLOCK;

#[test]
pub fn run() {
    let scenario = ThreeRecipients::new();
    assert_eq!(hex::encode(scenario.root()), EXPECTED_ROOT);

    let mut harness = AirdropHarness::new(scenario.root(), 1_000);
    let holder = harness.ledger.holder();

    let claimer = Pubkey::new_unique();
    let other_claimer = Pubkey::new_unique();

    // Nothing claimed yet
    for allocation_id in 0..3 {
        assert!(!harness.is_claimed(allocation_id));
    }

    // First recipient claims inside its window
    harness.now = FIRST_UNLOCK + 10;
    let params = scenario.params_for(0, &claimer);
    harness.check_valid_claim(&claimer, &params).unwrap();
    let leaf = harness.claim_tokens(&claimer, &params).unwrap();
    assert_eq!(leaf.recipient, scenario.keys[0].address());
    assert_eq!(leaf.amount, 30);
    assert_eq!(harness.balance_of(&claimer), 30);
    assert_eq!(harness.balance_of(&holder), 970);
    assert!(harness.is_claimed(0));
    assert!(!harness.is_claimed(1));
    assert!(!harness.is_claimed(2));

    // Validation alone does not look at the claimed record, but the same
    // submission cannot be replayed
    harness.check_valid_claim(&claimer, &params).unwrap();
    assert_claim_error(
        harness.claim_tokens(&claimer, &params),
        MerkleClaimError::AlreadyClaimed,
    );
    assert_eq!(harness.balance_of(&claimer), 30);

    // A fresh credential from the same recipient does not reopen the
    // allocation either
    let params = scenario.params_for(0, &other_claimer);
    assert_claim_error(
        harness.claim_tokens(&other_claimer, &params),
        MerkleClaimError::AlreadyClaimed,
    );
    assert_eq!(harness.balance_of(&other_claimer), 0);
    assert_eq!(harness.balance_of(&claimer), 30);

    // The second recipient's window has not opened yet
    let params = scenario.params_for(1, &other_claimer);
    assert_claim_error(
        harness.claim_tokens(&other_claimer, &params),
        MerkleClaimError::NotReadyYet,
    );
    assert!(!harness.is_claimed(1));

    // Once it does, the claim goes through independently, here with a
    // credential that travelled in its text form
    harness.now = SECOND_UNLOCK;
    let text = credential_to_text(&params.credential);
    assert!(text.starts_with("ethsig:"));
    assert!(credential_from_text(text.trim_start_matches("ethsig:")).is_err());
    assert!(credential_from_text(&text.replace("ethsig:", "btcsig:")).is_err());
    let mut params = params;
    params.credential = credential_from_text(&text).unwrap();
    harness.claim_tokens(&other_claimer, &params).unwrap();
    assert_eq!(harness.balance_of(&other_claimer), 40);
    assert!(harness.is_claimed(1));

    // The third allocation never expires
    harness.now = u64::MAX - 1;
    let third_claimer = Pubkey::new_unique();
    let params = scenario.params_for(2, &third_claimer);
    assert!(params.window().is_unbounded());
    harness.claim_tokens(&third_claimer, &params).unwrap();
    assert_eq!(harness.balance_of(&third_claimer), 50);

    assert_eq!(harness.claimed_count(), 3);
    assert_eq!(harness.claim_bitmaps_count(), 1);
    assert_eq!(harness.balance_of(&holder), 880);
    assert_eq!(harness.ledger.transfers().len(), 3);
}
