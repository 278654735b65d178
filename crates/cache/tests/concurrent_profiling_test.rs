//! Concurrent use of a single profiled pool

use futures::future::join_all;
use poolprof_cache::{
    CacheItem, CachePool, MemoryPool, ProfileSummary, Profiled, ProfiledPool,
    ProfiledPoolBuilder, SummaryReport,
};
use std::sync::Arc;

const TASKS: usize = 16;
const ROUNDS: usize = 50;

fn shared_pool() -> Arc<ProfiledPool<MemoryPool<u64>>> {
    Arc::new(
        ProfiledPoolBuilder::new(MemoryPool::new())
            .with_name("concurrent")
            .build(),
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn no_events_are_lost_under_contention() {
    let pool = shared_pool();

    let handles = (0..TASKS).map(|task| {
        let pool = Arc::clone(&pool);
        tokio::spawn(async move {
            for round in 0..ROUNDS {
                let key = format!("task-{task}-{round}");
                pool.get_item(&key).await.expect("get_item");
                pool.save(CacheItem::new(key.as_str()).set(round as u64))
                    .await
                    .expect("save");
                pool.get_item(&key).await.expect("get_item");
                pool.delete_item(&key).await.expect("delete_item");
            }
        })
    });

    for joined in join_all(handles).await {
        joined.expect("task panicked");
    }

    let total = (TASKS * ROUNDS) as u64;
    assert_eq!(
        pool.summary(),
        ProfileSummary {
            accessed: 2 * total,
            missed: total,
            deleted: total,
            cleaned: 0,
            saved: total,
        }
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn take_summary_hands_out_each_event_once() {
    let pool = shared_pool();

    let writers = (0..TASKS).map(|task| {
        let pool = Arc::clone(&pool);
        tokio::spawn(async move {
            for round in 0..ROUNDS {
                pool.get_item(&format!("missing-{task}-{round}"))
                    .await
                    .expect("get_item");
            }
        })
    });
    let drainer = {
        let pool = Arc::clone(&pool);
        tokio::spawn(async move {
            let mut drained = ProfileSummary::zero();
            for _ in 0..ROUNDS {
                drained += pool.take_summary();
                tokio::task::yield_now().await;
            }
            drained
        })
    };

    for joined in join_all(writers).await {
        joined.expect("writer panicked");
    }
    let drained = drainer.await.expect("drainer panicked") + pool.take_summary();

    let total = (TASKS * ROUNDS) as u64;
    assert_eq!(drained.accessed, total);
    assert_eq!(drained.missed, total);
    assert!(pool.summary().is_zero());
}

#[tokio::test]
async fn report_collects_pools_with_different_value_types() {
    let sessions = shared_pool();
    let pages: ProfiledPool<MemoryPool<String>> = ProfiledPoolBuilder::new(MemoryPool::new())
        .with_name("pages")
        .build();

    sessions.get_item("a").await.expect("get_item");
    pages
        .save(CacheItem::new("index").set("<html/>".to_string()))
        .await
        .expect("save");

    let report = SummaryReport::collect([
        &*sessions as &dyn Profiled,
        &pages as &dyn Profiled,
    ]);

    assert_eq!(report.pools.len(), 2);
    assert_eq!(report.pools[0].name, "concurrent");
    assert_eq!(report.pools[1].name, "pages");
    assert_eq!(report.total.accessed, 1);
    assert_eq!(report.total.missed, 1);
    assert_eq!(report.total.saved, 1);
}
