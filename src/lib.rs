//! Opt-in latency logging for data-access operations.
//!
//! ```ignore
//! let config = AppConfig::new()?.validate()?;
//! let users: Collection<User> = Collection::new(QueryLogger::from_config(&config.database));
//! users.insert_one(alice)?;
//! // INFO Query -->  User.insert_one() --> 0.012 ms
//! ```

mod config;
mod errors;
mod query_log;
mod storage;

pub use crate::config::*;
pub use errors::*;
pub use query_log::*;
pub use storage::*;
