//! In-memory document collections whose data-access operations are timed by
//! a [`QueryLogger`](crate::QueryLogger).

mod collection;
pub use collection::*;


/// A document type stored in a [`Collection`].
pub trait Model: Clone + Send + Sync + 'static {
    /// Declared model name, used as the owner label of type-level operations.
    const NAME: &'static str;

    /// Primary key
    fn id(&self) -> u64;
}
