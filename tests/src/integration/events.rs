//! # Event Ordering
//!
//! Events reach bus subscribers in commit order, after the call that
//! emitted them has applied all of its state changes.

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tokio::time::timeout;

    use eo_01_parameter_store::ParameterAdminApi;
    use eo_04_reward_distributor::RewardDistributorApi;
    use shared_bus::{EventFilter, EventTopic, OracleEvent, Subscription};

    use crate::integration::harness::*;

    async fn next(sub: &mut Subscription) -> OracleEvent {
        timeout(Duration::from_millis(100), sub.recv())
            .await
            .expect("timeout waiting for event")
            .expect("bus should be open")
    }

    #[tokio::test]
    async fn test_epoch_lifecycle_events_in_order() {
        let h = Harness::new();
        let mut staking = h
            .container
            .event_bus
            .subscribe(EventFilter::topics(vec![EventTopic::Staking]));
        let mut oracle = h
            .container
            .event_bus
            .subscribe(EventFilter::topics(vec![EventTopic::Oracle]));
        let mut distribution = h
            .container
            .event_bus
            .subscribe(EventFilter::topics(vec![EventTopic::Distribution]));

        let tree = allocation_tree(3);
        let observers = h.seal_epoch(1, tree.root(), 0);

        for expected in &observers {
            match next(&mut staking).await {
                OracleEvent::ObserverStaked {
                    observer,
                    amount,
                    expire_block,
                } => {
                    assert_eq!(observer, *expected);
                    assert_eq!(amount, stake_amount());
                    assert_eq!(expire_block, FIRST_END_BLOCK + 1 + STAKE_DURATION);
                }
                other => panic!("Expected ObserverStaked, got {:?}", other),
            }
        }

        assert_eq!(
            next(&mut oracle).await,
            OracleEvent::SealEpoch {
                epoch: 1,
                root: tree.root()
            }
        );

        let requests: Vec<_> = (0..3).map(|i| tree.claim_request(1, i).unwrap()).collect();
        h.container
            .distributor
            .batch_claim(&h.ctx([0xEE; 20]), &requests)
            .unwrap();

        for request in &requests {
            assert_eq!(
                next(&mut distribution).await,
                OracleEvent::Claim {
                    epoch: 1,
                    index: request.index,
                    account: request.account,
                    amount: request.amount,
                }
            );
        }
        assert_eq!(
            next(&mut distribution).await,
            OracleEvent::BatchClaim {
                requested: 3,
                succeeded: 3
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_calls_emit_nothing() {
        let h = Harness::new();
        let mut all = h.container.event_bus.subscribe(EventFilter::all());

        assert!(h.vote(observer(0), 1, [0x11; 32]).is_err());
        assert!(h
            .container
            .parameters
            .set_epoch_duration(&h.ctx(observer(0)), 10)
            .is_err());
        assert!(all.try_recv().unwrap().is_none());

        h.container
            .parameters
            .set_epoch_duration(&h.ctx(ADMIN), 10)
            .unwrap();
        assert_eq!(
            next(&mut all).await,
            OracleEvent::NewEpochDuration {
                old: EPOCH_DURATION,
                new: 10
            }
        );
    }
}
