//! Seeded random workload over profiled in-memory pools

use clap::Args;
use eyre::{ensure, WrapErr};
use poolprof_cache::{
    CacheItem, CachePool, MemoryPool, ProfiledPool, ProfiledPoolBuilder, ProfilerConfig,
    SummaryReport,
};
use poolprof_core::POOLPROF_MEMORY_CAPACITY_VAR;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type SimulatedPool = ProfiledPool<MemoryPool<String>>;

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Number of pools to spread the workload over
    #[arg(long, default_value = "1")]
    pub pools: usize,

    /// Total number of cache calls to make
    #[arg(long, default_value = "1000")]
    pub operations: usize,

    /// Size of the key space
    #[arg(long, default_value = "64")]
    pub keys: usize,

    /// Random seed, the same seed always produces the same report
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Maximum items per pool (defaults to POOLPROF_MEMORY_CAPACITY, else unbounded)
    #[arg(long)]
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Action {
    Get,
    GetMany,
    Has,
    Save,
    SaveDeferred,
    Commit,
    Delete,
    DeleteMany,
    Clear,
}

impl Action {
    /// Pick an action with a read-heavy weighting out of 1000
    fn pick(rng: &mut StdRng) -> Self {
        match rng.gen_range(0..1000) {
            0..=449 => Action::Get,
            450..=499 => Action::GetMany,
            500..=549 => Action::Has,
            550..=799 => Action::Save,
            800..=849 => Action::SaveDeferred,
            850..=879 => Action::Commit,
            880..=959 => Action::Delete,
            960..=994 => Action::DeleteMany,
            _ => Action::Clear,
        }
    }
}

pub async fn execute(args: SimulateArgs) -> eyre::Result<SummaryReport> {
    ensure!(args.pools > 0, "--pools must be at least 1");
    ensure!(args.keys > 0, "--keys must be at least 1");

    let capacity = match args.capacity {
        Some(capacity) => Some(capacity),
        None => capacity_from_env()?,
    };
    let pools = build_pools(args.pools, capacity)?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    tracing::info!(
        pools = args.pools,
        operations = args.operations,
        keys = args.keys,
        seed = args.seed,
        capacity = ?capacity,
        "Starting simulation"
    );

    for _ in 0..args.operations {
        let pool = &pools[rng.gen_range(0..pools.len())];
        let action = Action::pick(&mut rng);
        run(pool, action, &mut rng, args.keys).await?;
    }

    Ok(SummaryReport::collect(&pools))
}

fn capacity_from_env() -> eyre::Result<Option<usize>> {
    match std::env::var(POOLPROF_MEMORY_CAPACITY_VAR) {
        Ok(value) => {
            let capacity = value.trim().parse::<usize>().wrap_err_with(|| {
                format!("{POOLPROF_MEMORY_CAPACITY_VAR} must be a whole number, got '{value}'")
            })?;
            Ok(Some(capacity))
        }
        Err(_) => Ok(None),
    }
}

fn build_pools(count: usize, capacity: Option<usize>) -> eyre::Result<Vec<SimulatedPool>> {
    let base = ProfilerConfig::load()?;
    let pools = (0..count)
        .map(|index| {
            let store = match capacity {
                Some(capacity) => MemoryPool::with_capacity(capacity),
                None => MemoryPool::new(),
            };
            let name = if count == 1 {
                base.name.clone()
            } else {
                format!("{}-{index}", base.name)
            };
            ProfiledPoolBuilder::new(store)
                .with_config(base.clone())
                .with_name(name)
                .build()
        })
        .collect();
    Ok(pools)
}

fn random_key(rng: &mut StdRng, keys: usize) -> String {
    format!("key-{}", rng.gen_range(0..keys))
}

fn random_keys(rng: &mut StdRng, keys: usize) -> Vec<String> {
    let count = rng.gen_range(1..=4);
    (0..count).map(|_| random_key(rng, keys)).collect()
}

async fn run(
    pool: &SimulatedPool,
    action: Action,
    rng: &mut StdRng,
    keys: usize,
) -> eyre::Result<()> {
    match action {
        Action::Get => {
            pool.get_item(&random_key(rng, keys)).await?;
        }
        Action::GetMany => {
            pool.get_items(&random_keys(rng, keys)).await?;
        }
        Action::Has => {
            pool.has_item(&random_key(rng, keys)).await?;
        }
        Action::Save => {
            let key = random_key(rng, keys);
            let value = format!("value-{}", rng.gen::<u32>());
            pool.save(CacheItem::new(key).set(value)).await?;
        }
        Action::SaveDeferred => {
            let key = random_key(rng, keys);
            let value = format!("value-{}", rng.gen::<u32>());
            pool.save_deferred(CacheItem::new(key).set(value)).await?;
        }
        Action::Commit => {
            pool.commit().await?;
        }
        Action::Delete => {
            pool.delete_item(&random_key(rng, keys)).await?;
        }
        Action::DeleteMany => {
            pool.delete_items(&random_keys(rng, keys)).await?;
        }
        Action::Clear => {
            pool.clear().await?;
        }
    }
    Ok(())
}
