//! Type-erased query arguments.
//!
//! Each query type parses its own argument payload (an identifier, a
//! date range, a count) into a concrete struct; instances carry it as a
//! `Box<dyn QueryArgs>` so the instance list stays homogeneous.
//! Execution downcasts back through [`QueryArgs::as_any`].

use std::any::Any;
use std::fmt;

/// A parsed, owned argument payload attached to one query instance.
///
/// Implemented automatically for any `Clone + Debug + Send + 'static`
/// type; query types never implement it by hand.
pub trait QueryArgs: Any + fmt::Debug + Send {
    /// Clone into a fresh box.
    fn boxed_clone(&self) -> Box<dyn QueryArgs>;

    /// Upcast for downcasting to the concrete payload type.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug + Send + Clone> QueryArgs for T {
    fn boxed_clone(&self) -> Box<dyn QueryArgs> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Clone for Box<dyn QueryArgs> {
    fn clone(&self) -> Self {
        self.as_ref().boxed_clone()
    }
}
