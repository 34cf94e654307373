//! # Oracle Flows
//!
//! Stake → vote → seal → claim across all four components, wired the way
//! the runtime wires them.
//!
//! ## Flows Tested:
//!
//! 1. **Happy path**: staked observers seal a root, recipients claim once
//! 2. **Quorum**: third identical vote seals, fourth is rejected
//! 3. **Claim window**: closes exactly `epochDuration` blocks after sealing
//! 4. **Sequencing**: epochs seal in order, only the latest is claimable
//! 5. **Eligibility**: stakes stop counting near expiry
//! 6. **Batch claims**: failures are skipped, the cap is enforced

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;

    use eo_01_parameter_store::ParameterAdminApi;
    use eo_02_observer_staking::{ObserverStakingApi, StakingError};
    use eo_03_epoch_oracle::{EpochOracleApi, OracleError, SubmissionOutcome};
    use eo_04_reward_distributor::{ClaimOutcome, DistributorError, RewardDistributorApi};
    use shared_types::{TokenLedger, U256};

    use crate::integration::harness::*;

    // =============================================================================
    // HAPPY PATH
    // =============================================================================

    #[test]
    fn test_stake_vote_seal_claim_end_to_end() {
        let h = Harness::new();
        let tree = allocation_tree(5);
        let root = tree.root();

        h.seal_epoch(1, root, 0);

        assert!(h.container.oracle.is_epoch_sealed(1));
        assert_eq!(h.container.oracle.merkle_root(1), Some(root));
        assert_eq!(h.container.oracle.last_epoch(), 1);

        let distributor = h.container.distributor.account();
        let funded = h.container.ledger.balance_of(&distributor);

        for allocation in tree.allocations() {
            let request = tree.claim_request(1, allocation.index).unwrap();
            h.claim(&request).unwrap();
            assert_eq!(
                h.container.ledger.balance_of(&allocation.account),
                allocation.amount
            );
            assert!(h.container.distributor.is_claimed(1, allocation.index));
        }

        assert_eq!(
            h.container.ledger.balance_of(&distributor),
            funded - tree.total_amount()
        );
    }

    #[test]
    fn test_second_claim_rejected() {
        let h = Harness::new();
        let tree = allocation_tree(3);
        h.seal_epoch(1, tree.root(), 0);

        let request = tree.claim_request(1, 2).unwrap();
        h.claim(&request).unwrap();

        assert!(matches!(
            h.claim(&request),
            Err(DistributorError::AlreadyClaimed { epoch: 1, index: 2 })
        ));
        assert_eq!(
            h.container.ledger.balance_of(&request.account),
            request.amount
        );
    }

    #[test]
    fn test_claim_on_behalf_pays_allocation_account() {
        let h = Harness::new();
        let tree = allocation_tree(2);
        h.seal_epoch(1, tree.root(), 0);

        let request = tree.claim_request(1, 0).unwrap();
        let relayer = [0xEE; 20];
        h.container
            .distributor
            .claim(&h.ctx(relayer), &request)
            .unwrap();

        assert_eq!(h.container.ledger.balance_of(&relayer), U256::zero());
        assert_eq!(
            h.container.ledger.balance_of(&request.account),
            request.amount
        );
    }

    #[test]
    fn test_tampered_claims_rejected() {
        let h = Harness::new();
        let tree = allocation_tree(4);
        h.seal_epoch(1, tree.root(), 0);

        let mut inflated = tree.claim_request(1, 1).unwrap();
        inflated.amount = inflated.amount + U256::one();
        assert!(matches!(
            h.claim(&inflated),
            Err(DistributorError::MerkleProofVerifyFailed { epoch: 1, index: 1 })
        ));

        let mut redirected = tree.claim_request(1, 1).unwrap();
        redirected.account = [0xEE; 20];
        assert!(matches!(
            h.claim(&redirected),
            Err(DistributorError::MerkleProofVerifyFailed { .. })
        ));

        let mut shifted = tree.claim_request(1, 1).unwrap();
        shifted.index = 3;
        assert!(h.claim(&shifted).is_err());

        // None of the failures consumed the slot
        assert!(!h.container.distributor.is_claimed(1, 1));
        h.claim(&tree.claim_request(1, 1).unwrap()).unwrap();
    }

    // =============================================================================
    // QUORUM
    // =============================================================================

    #[test]
    fn test_third_identical_vote_seals_fourth_rejected() {
        let h = Harness::new();
        let root = allocation_tree(3).root();
        h.advance_to(FIRST_END_BLOCK);
        for i in 0..4 {
            h.fund_and_stake(observer(i)).unwrap();
        }

        assert_eq!(
            h.vote(observer(0), 1, root).unwrap(),
            SubmissionOutcome::Recorded {
                votes: 1,
                threshold: QUORUM
            }
        );
        assert_eq!(
            h.vote(observer(1), 1, root).unwrap(),
            SubmissionOutcome::Recorded {
                votes: 2,
                threshold: QUORUM
            }
        );
        assert_eq!(
            h.vote(observer(2), 1, root).unwrap(),
            SubmissionOutcome::Sealed { root }
        );

        let fourth = h.vote(observer(3), 1, [0x42; 32]).unwrap_err();
        assert!(matches!(fourth, OracleError::EpochAlreadySealed { epoch: 1 }));
        assert_eq!(fourth.code(), "EPOCH_ALREADY_SEALED");
        assert_eq!(h.container.oracle.vote_count(1), 3);
    }

    #[test]
    fn test_quorum_vote_before_end_block_not_counted() {
        let h = Harness::new();
        let root = [0x11; 32];
        h.advance_to(FIRST_END_BLOCK - 10);
        for i in 0..3 {
            h.fund_and_stake(observer(i)).unwrap();
        }

        h.vote(observer(0), 1, root).unwrap();
        h.vote(observer(1), 1, root).unwrap();
        assert!(matches!(
            h.vote(observer(2), 1, root),
            Err(OracleError::EpochNotReadyForSealing {
                epoch: 1,
                required_end_block: FIRST_END_BLOCK,
                ..
            })
        ));
        assert_eq!(h.container.oracle.vote_count(1), 2);
        assert!(!h.container.oracle.has_voted(1, &observer(2)));

        h.advance_to(FIRST_END_BLOCK);
        assert_eq!(
            h.vote(observer(2), 1, root).unwrap(),
            SubmissionOutcome::Sealed { root }
        );
    }

    #[test]
    fn test_conflicting_root_and_double_vote_rejected() {
        let h = Harness::new();
        h.advance_to(FIRST_END_BLOCK);
        for i in 0..3 {
            h.fund_and_stake(observer(i)).unwrap();
        }

        h.vote(observer(0), 1, [0x11; 32]).unwrap();
        assert!(matches!(
            h.vote(observer(0), 1, [0x11; 32]),
            Err(OracleError::ObserverVotedAlready { epoch: 1, .. })
        ));
        assert!(matches!(
            h.vote(observer(1), 1, [0x22; 32]),
            Err(OracleError::EpochRootMismatch { epoch: 1, .. })
        ));
        assert_eq!(h.container.oracle.vote_count(1), 1);
    }

    #[test]
    fn test_unstaked_caller_cannot_vote() {
        let h = Harness::new();
        h.advance_to(FIRST_END_BLOCK);

        let err = h.vote([0xEE; 20], 1, [0x11; 32]).unwrap_err();
        assert_eq!(err.code(), "OBSERVER_NOT_ELIGIBLE");
        assert_eq!(h.container.oracle.vote_count(1), 0);
    }

    #[test]
    fn test_threshold_change_applies_to_open_epoch() {
        let h = Harness::new();
        let root = [0x11; 32];
        h.advance_to(FIRST_END_BLOCK);
        for i in 0..2 {
            h.fund_and_stake(observer(i)).unwrap();
        }
        h.vote(observer(0), 1, root).unwrap();

        h.container
            .parameters
            .set_epoch_seal_threshold(&h.ctx(ADMIN), 2)
            .unwrap();

        assert_eq!(
            h.vote(observer(1), 1, root).unwrap(),
            SubmissionOutcome::Sealed { root }
        );
    }

    // =============================================================================
    // CLAIM WINDOW
    // =============================================================================

    #[test]
    fn test_claim_window_closes_after_epoch_duration() {
        let h = Harness::new();
        let tree = allocation_tree(2);
        h.seal_epoch(1, tree.root(), 0);
        let sealed_at = h.block();

        h.advance_to(sealed_at + EPOCH_DURATION - 1);
        h.claim(&tree.claim_request(1, 0).unwrap()).unwrap();

        h.advance_to(sealed_at + EPOCH_DURATION);
        let err = h.claim(&tree.claim_request(1, 1).unwrap()).unwrap_err();
        assert!(matches!(err, DistributorError::EpochNotActive { epoch: 1 }));
        assert_eq!(err.code(), "EPOCH_NOT_ACTIVE");
        assert!(!h.container.distributor.is_claimed(1, 1));
    }

    #[test]
    fn test_claim_before_seal_rejected() {
        let h = Harness::new();
        let tree = allocation_tree(2);

        assert!(matches!(
            h.claim(&tree.claim_request(1, 0).unwrap()),
            Err(DistributorError::EpochNotActive { epoch: 1 })
        ));
        assert!(matches!(
            h.claim(&tree.claim_request(0, 0).unwrap()),
            Err(DistributorError::EpochNotActive { epoch: 0 })
        ));
    }

    // =============================================================================
    // SEQUENCING
    // =============================================================================

    #[test]
    fn test_epochs_seal_in_sequence() {
        let h = Harness::new();
        let first = allocation_tree(2);
        let second = allocation_tree(3);

        h.advance_to(FIRST_END_BLOCK);
        h.fund_and_stake(observer(0)).unwrap();
        assert!(matches!(
            h.vote(observer(0), 2, second.root()),
            Err(OracleError::EpochInvalid {
                epoch: 2,
                expected: 1
            })
        ));
        assert!(matches!(
            h.vote(observer(0), 0, first.root()),
            Err(OracleError::EpochInvalid { epoch: 0, .. })
        ));

        h.vote(observer(0), 1, first.root()).unwrap();
        for i in 1..3 {
            h.fund_and_stake(observer(i)).unwrap();
            h.vote(observer(i), 1, first.root()).unwrap();
        }
        assert!(h.container.oracle.is_epoch_sealed(1));
        assert_eq!(
            h.container.oracle.next_required_end_block(),
            FIRST_END_BLOCK + EPOCH_DURATION
        );

        // Fresh observers seal epoch 2 at its own end block
        h.seal_epoch(2, second.root(), 10);
        assert_eq!(h.container.oracle.last_epoch(), 2);
        assert_eq!(h.container.oracle.merkle_root(1), Some(first.root()));

        // Only the latest sealed epoch is claimable
        assert!(matches!(
            h.claim(&first.claim_request(1, 0).unwrap()),
            Err(DistributorError::EpochNotActive { epoch: 1 })
        ));
        h.claim(&second.claim_request(2, 0).unwrap()).unwrap();
    }

    #[test]
    fn test_extended_stake_stays_eligible_for_next_epoch() {
        let h = Harness::new();
        let observers = h.seal_epoch(1, [0x11; 32], 0);

        for o in &observers {
            h.container
                .staking
                .extend(&h.ctx(*o), U256::zero(), EPOCH_DURATION)
                .unwrap();
        }

        h.advance_to(FIRST_END_BLOCK + EPOCH_DURATION);
        let mut outcome = None;
        for o in &observers {
            outcome = Some(h.vote(*o, 2, [0x22; 32]).unwrap());
        }
        assert_eq!(outcome, Some(SubmissionOutcome::Sealed { root: [0x22; 32] }));
    }

    // =============================================================================
    // ELIGIBILITY
    // =============================================================================

    #[test]
    fn test_stake_loses_eligibility_before_expiry() {
        let h = Harness::new();
        h.advance_to(FIRST_END_BLOCK - 40);
        let stake = h.fund_and_stake(observer(0)).unwrap();
        assert_eq!(stake.expire_block, FIRST_END_BLOCK - 40 + 1 + STAKE_DURATION);

        let cutoff = stake.expire_block - STAKE_THRESHOLD;
        h.advance_to(cutoff - 1);
        assert!(h
            .container
            .staking
            .is_observer_eligible(&observer(0), h.block()));

        h.advance_to(cutoff);
        assert!(matches!(
            h.vote(observer(0), 1, [0x11; 32]),
            Err(OracleError::ObserverNotEligible { .. })
        ));
    }

    #[test]
    fn test_unstake_after_expiry_returns_tokens() {
        let h = Harness::new();
        let stake = h.fund_and_stake(observer(0)).unwrap();

        let err = h
            .container
            .staking
            .unstake(&h.ctx(observer(0)))
            .unwrap_err();
        assert!(matches!(err, StakingError::StakeNotExpired { .. }));

        h.advance_to(stake.expire_block);
        let returned = h.container.staking.unstake(&h.ctx(observer(0))).unwrap();
        assert_eq!(returned, stake_amount());
        assert_eq!(h.container.ledger.balance_of(&observer(0)), stake_amount());
        assert_eq!(h.container.staking.total_staked(), U256::zero());
        assert!(h.container.staking.stake_of(&observer(0)).is_empty());
    }

    #[test]
    fn test_raised_stake_amount_disqualifies_old_stakes() {
        let h = Harness::new();
        h.advance_to(FIRST_END_BLOCK);
        h.fund_and_stake(observer(0)).unwrap();

        h.container
            .parameters
            .set_stake_amount(&h.ctx(ADMIN), stake_amount() * 2u64)
            .unwrap();

        assert!(matches!(
            h.vote(observer(0), 1, [0x11; 32]),
            Err(OracleError::ObserverNotEligible { .. })
        ));
    }

    // =============================================================================
    // BATCH CLAIMS
    // =============================================================================

    #[test]
    fn test_batch_claim_skips_failures() {
        let h = Harness::new();
        let tree = allocation_tree(6);
        h.seal_epoch(1, tree.root(), 0);

        h.claim(&tree.claim_request(1, 0).unwrap()).unwrap();

        let mut forged = tree.claim_request(1, 1).unwrap();
        forged.amount = U256::from(999_999u64);

        let mut requests = vec![tree.claim_request(1, 0).unwrap(), forged];
        requests.extend((2..6).map(|i| tree.claim_request(1, i).unwrap()));

        let report = h
            .container
            .distributor
            .batch_claim(&h.ctx([0xEE; 20]), &requests)
            .unwrap();

        assert_eq!(report.requested, 6);
        assert_eq!(report.succeeded, 4);
        assert!(matches!(
            report.outcomes[0],
            ClaimOutcome::Skipped(DistributorError::AlreadyClaimed { .. })
        ));
        assert!(matches!(
            report.outcomes[1],
            ClaimOutcome::Skipped(DistributorError::MerkleProofVerifyFailed { .. })
        ));
        assert!(report.outcomes[2..].iter().all(ClaimOutcome::is_claimed));
        assert!(!h.container.distributor.is_claimed(1, 1));
    }

    #[test]
    fn test_batch_claim_cap_enforced() {
        let h = Harness::new();
        let tree = allocation_tree(16);
        h.seal_epoch(1, tree.root(), 0);

        let requests: Vec<_> = (0..16)
            .map(|i| tree.claim_request(1, i).unwrap())
            .collect();
        let err = h
            .container
            .distributor
            .batch_claim(&h.ctx([0xEE; 20]), &requests)
            .unwrap_err();
        assert_eq!(err.code(), "MAX_BATCH_CLAIM_EXCEED");
        assert!((0..16).all(|i| !h.container.distributor.is_claimed(1, i)));

        let report = h
            .container
            .distributor
            .batch_claim(&h.ctx([0xEE; 20]), &requests[..15])
            .unwrap();
        assert_eq!(report.succeeded, 15);
    }

    #[test]
    fn test_claim_order_does_not_matter() {
        let h = Harness::new();
        let tree = allocation_tree(12);
        h.seal_epoch(1, tree.root(), 0);

        let mut indices: Vec<u64> = (0..12).collect();
        indices.shuffle(&mut rand::thread_rng());
        for index in indices {
            h.claim(&tree.claim_request(1, index).unwrap()).unwrap();
        }

        let distributor = h.container.distributor.account();
        assert_eq!(
            h.container.ledger.balance_of(&distributor),
            U256::from(DISTRIBUTOR_FUNDING) - tree.total_amount()
        );
    }

    #[test]
    fn test_underfunded_distributor_leaves_claim_open() {
        let mut config = config();
        config.distributor_funding = U256::from(100u64);
        let h = Harness::with_config(config);
        let tree = allocation_tree(3);
        h.seal_epoch(1, tree.root(), 0);

        // Index 2 is worth 300, more than the distributor holds
        let request = tree.claim_request(1, 2).unwrap();
        assert!(matches!(
            h.claim(&request),
            Err(DistributorError::TransferFailed(_))
        ));
        assert!(!h.container.distributor.is_claimed(1, 2));

        h.container
            .ledger
            .mint(&h.container.distributor.account(), U256::from(1_000u64))
            .unwrap();
        h.claim(&request).unwrap();
    }
}
