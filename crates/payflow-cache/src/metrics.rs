//! Cache metrics.
//!
//! Recorded through the `metrics` facade; the embedding service installs
//! the exporter. Without a recorder every call is a no-op.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Duration;

/// Metric names for the cache layer.
pub mod names {
    /// Reads that returned a decoded value.
    pub const CACHE_HITS_TOTAL: &str = "payflow_cache_hits_total";
    /// Reads that found nothing under the key.
    pub const CACHE_MISSES_TOTAL: &str = "payflow_cache_misses_total";
    /// Backend, codec, timeout or guard failures.
    pub const CACHE_ERRORS_TOTAL: &str = "payflow_cache_errors_total";
    /// Successful writes.
    pub const CACHE_WRITES_TOTAL: &str = "payflow_cache_writes_total";
    /// Successful deletes of an existing key.
    pub const CACHE_DELETES_TOTAL: &str = "payflow_cache_deletes_total";
    /// Backend round-trip duration in seconds.
    pub const CACHE_OPERATION_DURATION: &str = "payflow_cache_operation_duration_seconds";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(names::CACHE_HITS_TOTAL, "Total number of cache hits");
    describe_counter!(names::CACHE_MISSES_TOTAL, "Total number of cache misses");
    describe_counter!(
        names::CACHE_ERRORS_TOTAL,
        "Total number of cache operations that failed open"
    );
    describe_counter!(names::CACHE_WRITES_TOTAL, "Total number of cache writes");
    describe_counter!(
        names::CACHE_DELETES_TOTAL,
        "Total number of cache entries deleted"
    );
    describe_histogram!(
        names::CACHE_OPERATION_DURATION,
        "Cache backend operation duration in seconds"
    );
}

/// Cache metrics recorder.
#[derive(Clone)]
pub struct CacheMetrics;

impl CacheMetrics {
    /// Record a cache hit.
    pub fn hit() {
        counter!(names::CACHE_HITS_TOTAL).increment(1);
    }

    /// Record a cache miss.
    pub fn miss() {
        counter!(names::CACHE_MISSES_TOTAL).increment(1);
    }

    /// Record a failure swallowed by the store.
    pub fn error(operation: &'static str) {
        counter!(names::CACHE_ERRORS_TOTAL, "operation" => operation).increment(1);
    }

    /// Record a write.
    pub fn write() {
        counter!(names::CACHE_WRITES_TOTAL).increment(1);
    }

    /// Record a delete that removed an entry.
    pub fn delete() {
        counter!(names::CACHE_DELETES_TOTAL).increment(1);
    }

    /// Record how long a backend round-trip took.
    pub fn operation_duration(operation: &'static str, duration: Duration) {
        histogram!(names::CACHE_OPERATION_DURATION, "operation" => operation)
            .record(duration.as_secs_f64());
    }
}
