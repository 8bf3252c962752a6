//! Shape-constrained views of JSON value trees.
//!
//! Given a declared [`Shape`] and a root value, a [`View`] lets callers walk
//! declared fields and array elements, read what is stored there, and assign
//! through them. Addressing a field the shape does not declare is an error.

pub mod error;
pub mod view;

pub use error::ViewError;
pub use varpath_types::Shape;
pub use view::{ArrayView, View};
