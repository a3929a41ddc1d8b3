//! Cache service trait and error types.

use async_trait::async_trait;

use crate::domain::entities::VehicleRecord;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for memoizing decoded vehicle records.
///
/// Keys are opaque to the cache; the caller folds everything that affects the
/// decoded output (VIN and reference year) into the key. Implementations must
/// be thread-safe and fail open: a broken backend degrades to re-decoding.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a memoized record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    ///
    /// # Errors
    ///
    /// Should not return errors in production implementations. Errors are logged
    /// and treated as cache misses.
    async fn get_record(&self, key: &str) -> CacheResult<Option<VehicleRecord>>;

    /// Stores a record with optional TTL.
    ///
    /// # Arguments
    ///
    /// - `key` - Cache key built by the caller
    /// - `record` - Decoded record to memoize
    /// - `ttl_seconds` - Optional TTL in seconds (implementation-specific default if None)
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations should log errors
    /// and return `Ok(())` to avoid disrupting the request flow.
    async fn set_record(
        &self,
        key: &str,
        record: &VehicleRecord,
        ttl_seconds: Option<usize>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
