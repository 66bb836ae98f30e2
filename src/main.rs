//! Instrumented Cache - demo entry point
//!
//! Connects to Redis, stores a few values and replays the recorded calls.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use instrumented_cache::{replay, Cache, Config, RedisStore, STORE_IDENTITY};

/// Main entry point for the demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to Redis and initialize the cache (flushes the database)
/// 4. Store and read back sample values
/// 5. Replay the recorded `Cache.store` calls
fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "instrumented_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: redis_url={}, connect_timeout={}s",
        config.redis_url, config.connect_timeout
    );

    let store = RedisStore::connect(&config)
        .with_context(|| format!("failed to connect to {}", config.redis_url))?;
    let mut cache = Cache::initialize(store)?;

    let text = cache.store("foo")?;
    let bytes = cache.store(b"bar".to_vec())?;
    let number = cache.store(42)?;
    let float = cache.store(3.25)?;

    info!("text  {} -> {:?}", text, cache.get_string(&text)?);
    info!("bytes {} -> {:?}", bytes, cache.get(&bytes)?);
    info!("int   {} -> {}", number, cache.get_int(&number)?);
    info!("float {} -> {}", float, cache.get_string(&float)?);

    replay(cache.backend_mut(), STORE_IDENTITY)?;
    Ok(())
}
