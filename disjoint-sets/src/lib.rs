pub mod error;
pub mod groups;
pub mod unionfind;

pub use error::DisjointSetsError;
pub use groups::Groups;
pub use unionfind::{DisjointSets, Merge};
