//! Sparse symmetric similarity matrix over a word vocabulary.

mod builder;
mod sparse;

pub use builder::MatrixBuilder;
pub use sparse::SimilarityMatrix;
