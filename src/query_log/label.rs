use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

use crate::Model;

/// Owner and operation names printed for one wrapped call.
///
/// Built explicitly at the wrapping site: a type-level receiver contributes
/// its declared [`Model::NAME`], an instance receiver contributes its runtime
/// type name. Type names are resolved only when a line is formatted, so
/// building a label for a disabled logger does no string work.
#[derive(Clone)]
pub struct QueryLabel {
    owner: Owner,
    operation: &'static str,
}

#[derive(Clone)]
enum Owner {
    Name(Cow<'static, str>),
    Deferred(fn() -> Cow<'static, str>),
}

impl QueryLabel {
    pub fn new(
        owner: impl Into<Cow<'static, str>>,
        operation: &'static str,
    ) -> Self {
        Self {
            owner: Owner::Name(owner.into()),
            operation,
        }
    }

    /// Owner name produced by `resolve` when the line is formatted.
    pub fn with_owner_fn(
        resolve: fn() -> Cow<'static, str>,
        operation: &'static str,
    ) -> Self {
        Self {
            owner: Owner::Deferred(resolve),
            operation,
        }
    }

    /// Label for an operation invoked on the model type itself.
    pub fn for_model<M: Model>(operation: &'static str) -> Self {
        Self::new(M::NAME, operation)
    }

    /// Label for an operation invoked on an instance of `T`.
    pub fn for_instance<T: ?Sized>(
        _instance: &T,
        operation: &'static str,
    ) -> Self {
        Self::with_owner_fn(short_type_name::<T>, operation)
    }

    pub fn owner(&self) -> Cow<'static, str> {
        match &self.owner {
            Owner::Name(name) => name.clone(),
            Owner::Deferred(resolve) => resolve(),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Debug for QueryLabel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("QueryLabel")
            .field("owner", &self.owner())
            .field("operation", &self.operation)
            .finish()
    }
}

impl fmt::Display for QueryLabel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.owner {
            Owner::Name(name) => write!(f, "{}.{}()", name, self.operation),
            Owner::Deferred(resolve) => write!(f, "{}.{}()", resolve(), self.operation),
        }
    }
}

/// `std::any::type_name` with the module path of the outer type removed.
///
/// `my_app::models::User` becomes `User`, `alloc::vec::Vec<u8>` becomes `Vec<u8>`.
pub fn short_type_name<T: ?Sized>() -> Cow<'static, str> {
    let full = type_name::<T>();
    let (path, generics) = match full.find('<') {
        Some(pos) => full.split_at(pos),
        None => (full, ""),
    };
    let base = path.rsplit("::").next().unwrap_or(path);

    if generics.is_empty() {
        Cow::Borrowed(base)
    } else {
        Cow::Owned(format!("{base}{generics}"))
    }
}
