use crate::errors::AppResult;
use redis::{aio::ConnectionManager, AsyncCommands};
use std::env;

/// Key the visit counter lives under in the store.
pub const VISIT_KEY: &str = "visit_count";

/// The one store operation this service uses: add one to the integer at
/// `key` and return the post-increment value. Atomicity is the store's,
/// a missing key counts from zero.
#[async_trait::async_trait]
pub trait VisitCounter {
    async fn increment(&mut self, key: &str) -> anyhow::Result<i64>;
}

#[async_trait::async_trait]
impl VisitCounter for ConnectionManager {
    async fn increment(&mut self, key: &str) -> anyhow::Result<i64> {
        Ok(self.incr(key, 1).await?)
    }
}

/// Connect to the store. Called once at startup; the returned handle is
/// cheap to clone, multiplexes requests and reconnects on its own, so it
/// is injected as-is into the router.
pub async fn store() -> AppResult<ConnectionManager> {
    // App may not be constructed yet, so trigger dotenv here too
    dotenvy::dotenv().ok();
    crate::app::logger();
    let client = redis::Client::open(store_url())?;
    Ok(client.get_connection_manager().await?)
}

fn store_url() -> String {
    let host = env::var("REDIS_HOST").unwrap_or("redis".into());
    let port = env::var("REDIS_PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(6379);
    format!("redis://{host}:{port}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn default_url_points_at_the_compose_host() {
        env::remove_var("REDIS_HOST");
        env::remove_var("REDIS_PORT");
        assert_eq!("redis://redis:6379", store_url());
    }

    #[test]
    #[serial]
    fn env_overrides_replace_the_defaults() {
        env::set_var("REDIS_HOST", "localhost");
        env::set_var("REDIS_PORT", "7000");
        assert_eq!("redis://localhost:7000", store_url());
        env::remove_var("REDIS_HOST");
        env::remove_var("REDIS_PORT");
    }

    #[test]
    #[serial]
    fn garbage_port_falls_back_to_default() {
        env::set_var("REDIS_HOST", "localhost");
        env::set_var("REDIS_PORT", "not-a-port");
        assert_eq!("redis://localhost:6379", store_url());
        env::remove_var("REDIS_HOST");
        env::remove_var("REDIS_PORT");
    }
}
