//! # Payflow Cache
//!
//! Read-through cache layer shared by the Payflow services.
//!
//! A query path asks its entity facade first and, on a miss, loads from the
//! database and writes the result back. A command path deletes the
//! singleton keys it made stale. The cache is advisory: no operation here
//! fails a request, a broken backend only turns every read into a miss.
//!
//! ```no_run
//! use payflow_cache::CacheRegistry;
//! use payflow_config::ConfigLoader;
//! use payflow_core::{FindAllRequest, PayflowResult};
//!
//! # async fn run() -> PayflowResult<()> {
//! let config = ConfigLoader::from_default_location()?.get().await;
//! let caches = CacheRegistry::connect(&config).await?;
//!
//! let req = FindAllRequest::first();
//! if caches.merchant.get_cached_merchants(&req).await.is_none() {
//!     // load from the repository, then populate
//!     caches.merchant.set_cached_merchants(&req, None, None).await;
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod codec;
pub mod entities;
pub mod error;
pub mod facade;
pub mod keys;
pub mod metrics;
pub mod registry;
pub mod store;

pub use backend::{CacheBackend, MemoryCacheBackend, RedisCacheBackend};
pub use entities::*;
pub use error::*;
pub use facade::*;
pub use keys::*;
pub use self::metrics::{register_metrics, CacheMetrics};
pub use registry::*;
pub use store::*;
