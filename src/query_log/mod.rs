//! Opt-in timing of data-access operations.
//!
//! A [`QueryLogger`] wraps an operation and, when enabled, measures how long
//! it takes on a monotonic clock and emits one INFO line per call:
//!
//! ```text
//! Query -->  User.insert_one() --> 1.6 ms
//! ```
//!
//! When disabled the operation is called directly. The logger never alters
//! the wrapped result and never catches a failure: errors come back to the
//! caller as-is and a panic unwinds through without a log line.

mod format;
mod label;
pub use format::*;
pub use label::*;


use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::info;

use crate::DatabaseConfig;

/// Times and logs wrapped operations when enabled.
///
/// The activation flag is fixed at construction. Two loggers with different
/// settings can live side by side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryLogger {
    enabled: bool,
}

impl QueryLogger {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn disabled() -> Self {
        Self::new(false)
    }

    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self::new(config.log_queries)
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Runs `op`, logging its duration when enabled.
    #[inline]
    pub fn run<T, F>(
        &self,
        label: QueryLabel,
        op: F,
    ) -> T
    where
        F: FnOnce() -> T,
    {
        self.run_labeled(&label, op)
    }

    /// Like [`run`](Self::run) for fallible operations.
    ///
    /// An `Err` is still timed, and its line carries a `(failed)` suffix.
    #[inline]
    pub fn try_run<T, E, F>(
        &self,
        label: QueryLabel,
        op: F,
    ) -> std::result::Result<T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        if !self.enabled {
            return op();
        }

        let start = Instant::now();
        let result = op();
        emit_outcome(&label, start.elapsed(), result.is_ok());
        result
    }

    /// Awaits `fut`, logging its duration when enabled.
    ///
    /// The window runs from the first poll to completion, so time spent
    /// suspended inside `fut` is included. A future dropped before
    /// completion logs nothing.
    pub async fn run_async<T, Fut>(
        &self,
        label: QueryLabel,
        fut: Fut,
    ) -> T
    where
        Fut: Future<Output = T>,
    {
        if !self.enabled {
            return fut.await;
        }

        let start = Instant::now();
        let result = fut.await;
        emit(&label, start.elapsed());
        result
    }

    /// Async counterpart of [`try_run`](Self::try_run).
    pub async fn try_run_async<T, E, Fut>(
        &self,
        label: QueryLabel,
        fut: Fut,
    ) -> std::result::Result<T, E>
    where
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        if !self.enabled {
            return fut.await;
        }

        let start = Instant::now();
        let result = fut.await;
        emit_outcome(&label, start.elapsed(), result.is_ok());
        result
    }

    /// Returns `op` instrumented with this logger's setting.
    ///
    /// Multiple arguments are passed as a tuple.
    ///
    /// ```ignore
    /// let find_by_email = logger.wrap(QueryLabel::for_model::<User>("find_by_email"), |email: &str| {
    ///     db.query_user_by_email(email)
    /// });
    /// let alice = find_by_email("alice@example.com")?;
    /// ```
    pub fn wrap<A, R, F>(
        &self,
        label: QueryLabel,
        op: F,
    ) -> impl Fn(A) -> R
    where
        F: Fn(A) -> R,
    {
        let logger = *self;
        move |args| logger.run_labeled(&label, || op(args))
    }

    #[inline]
    fn run_labeled<T, F>(
        &self,
        label: &QueryLabel,
        op: F,
    ) -> T
    where
        F: FnOnce() -> T,
    {
        if !self.enabled {
            return op();
        }

        let start = Instant::now();
        let result = op();
        emit(label, start.elapsed());
        result
    }
}

fn emit(
    label: &QueryLabel,
    elapsed: Duration,
) {
    info!("{}", format_query_line(label, elapsed));
}

fn emit_outcome(
    label: &QueryLabel,
    elapsed: Duration,
    succeeded: bool,
) {
    if succeeded {
        emit(label, elapsed);
    } else {
        info!("{}", format_failed_query_line(label, elapsed));
    }
}
