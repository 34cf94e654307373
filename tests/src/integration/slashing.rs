//! # Slashing
//!
//! Governance forfeits observer stakes: the slashed part is burned, the rest
//! returns to the observer, and the oracle stops counting the observer.

#[cfg(test)]
mod tests {
    use eo_02_observer_staking::{ObserverStakingApi, StakingError};
    use eo_03_epoch_oracle::{EpochOracleApi, OracleError};
    use shared_types::{TokenLedger, U256};

    use crate::integration::harness::*;

    #[test]
    fn test_partial_slash_burns_and_refunds() {
        let h = Harness::new();
        h.fund_and_stake(observer(0)).unwrap();
        let supply = h.container.ledger.total_supply();

        h.container
            .staking
            .slash(&h.ctx(GOVERNANCE), observer(0), U256::from(30u64))
            .unwrap();

        assert_eq!(
            h.container.ledger.total_supply(),
            supply - U256::from(30u64)
        );
        assert_eq!(
            h.container.ledger.balance_of(&observer(0)),
            U256::from(70u64)
        );
        assert_eq!(
            h.container
                .ledger
                .balance_of(&h.container.staking.account()),
            U256::zero()
        );
        assert!(h.container.staking.stake_of(&observer(0)).is_empty());
        assert_eq!(h.container.staking.total_staked(), U256::zero());
    }

    #[test]
    fn test_slashed_observer_cannot_vote() {
        let h = Harness::new();
        h.advance_to(FIRST_END_BLOCK);
        h.fund_and_stake(observer(0)).unwrap();
        h.vote(observer(0), 1, [0x11; 32]).unwrap();

        h.container
            .staking
            .slash(&h.ctx(GOVERNANCE), observer(0), stake_amount())
            .unwrap();

        assert!(!h
            .container
            .staking
            .is_observer_eligible(&observer(0), h.block()));
        // The vote already cast still counts
        assert_eq!(h.container.oracle.vote_count(1), 1);

        assert!(matches!(
            h.vote(observer(0), 1, [0x11; 32]),
            Err(OracleError::ObserverNotEligible { .. })
        ));
    }

    #[test]
    fn test_only_governance_slashes() {
        let h = Harness::new();
        h.fund_and_stake(observer(0)).unwrap();

        for caller in [ADMIN, observer(0)] {
            let err = h
                .container
                .staking
                .slash(&h.ctx(caller), observer(0), U256::one())
                .unwrap_err();
            assert!(matches!(err, StakingError::ExecutionNotAuthorized { .. }));
            assert_eq!(err.code(), "ObserverStaking__ExecutionNotAuthorized");
        }
        assert_eq!(h.container.staking.total_staked(), stake_amount());
    }

    #[test]
    fn test_slash_above_stake_rejected() {
        let h = Harness::new();
        h.fund_and_stake(observer(0)).unwrap();
        let supply = h.container.ledger.total_supply();

        let err = h
            .container
            .staking
            .slash(&h.ctx(GOVERNANCE), observer(0), stake_amount() + 1u64)
            .unwrap_err();
        assert!(matches!(err, StakingError::InvalidSlashAmount { .. }));
        assert_eq!(h.container.ledger.total_supply(), supply);
        assert_eq!(h.container.staking.stake_of(&observer(0)).amount, stake_amount());
    }

    #[test]
    fn test_slash_then_restake() {
        let h = Harness::new();
        h.fund_and_stake(observer(0)).unwrap();
        h.container
            .staking
            .slash(&h.ctx(GOVERNANCE), observer(0), U256::zero())
            .unwrap();

        // Full refund, record cleared, staking again is allowed
        assert_eq!(h.container.ledger.balance_of(&observer(0)), stake_amount());
        h.container
            .ledger
            .approve(&observer(0), &h.container.staking.account(), stake_amount());
        h.container.staking.stake(&h.ctx(observer(0))).unwrap();
        assert_eq!(h.container.staking.total_staked(), stake_amount());
    }
}
