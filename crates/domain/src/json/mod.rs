//! JSON document handling — path resolution and type-preserving mutation.

pub mod mutate;
pub mod path;

pub use mutate::{MutationOutcome, mutate_document, set_property};
pub use path::JsonPath;
