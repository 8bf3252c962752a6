pub mod ids;
pub mod instruction;
pub mod shape;

pub use ids::VariableId;
pub use instruction::{Instruction, Operator};
pub use shape::Shape;
