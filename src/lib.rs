//! Ordered mutation instructions over named JSON value trees.
//!
//! An "update variable" action carries a list of `{ path, operator, value }`
//! instructions. [`processor`] folds such a list into a value tree using the
//! path engine from [`varpath_path`]; [`action`] does so for a variable held
//! in a [`VariableStore`] and replaces the stored tree with the result.

pub mod action;
pub mod cli;
pub mod error;
pub mod processor;
pub mod store;

pub use action::{UpdateVariableSettings, update_variable};
pub use error::Error;
pub use processor::{apply_instructions, apply_to};
pub use store::VariableStore;

pub use varpath_lens::{ArrayView, Shape, View, ViewError};
pub use varpath_path::{
    Path, PathSegment, PathSyntaxError, delete_path, get_value, parse_path, push_placeholder, set_value, take_value,
    validate,
};
pub use varpath_types::{Instruction, Operator, VariableId};
