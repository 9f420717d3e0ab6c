use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisjointSetsError {
    #[error("element id {id} is out of range for a universe of {len} elements")]
    OutOfRange { id: usize, len: usize },

    #[error("element {id} is not the root of its group")]
    NotARoot { id: usize },
}
