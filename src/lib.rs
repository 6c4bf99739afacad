//! # Lexsim - Lexical Similarity Analysis
//!
//! Lexsim computes pairwise lexical similarity over a static word list
//! and derives, for every distinct similarity threshold observed, a
//! partition of the vocabulary into groups of words sharing an identical
//! closed neighborhood at that threshold, with a representative (medoid)
//! set per group.
//!
//! ## Overview
//!
//! Words are compared with a normalized Damerau–Levenshtein distance.
//! All unordered pairs below a configurable cutoff (default 0.4) are
//! retained in a sparse symmetric matrix with guaranteed self-distance 0.
//! Each distinct stored distance then serves as a clustering threshold:
//! words with identical within-threshold neighborhoods form a cluster,
//! and the members minimizing average intra-cluster distance are its
//! medoids, ties kept.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lexsim::{analyze_sweep, Config, DamerauLevenshtein, MatrixBuilder};
//!
//! let words = lexsim::wordlist::load_words("words.txt".as_ref())?;
//!
//! let config = Config::default();
//! let matrix = MatrixBuilder::new(config.cutoff).build(words, &DamerauLevenshtein);
//!
//! let records = analyze_sweep(&matrix)?;
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`distance`] - Normalized string distance metrics
//! - [`matrix`] - Pairwise matrix construction and sparse lookup
//! - [`cluster`] - Threshold-indexed clustering and medoid analysis
//! - [`wordlist`] - Word-list loading
//! - [`report`] - Flat-text report rendering

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cluster;
pub mod config;
pub mod distance;
pub mod error;
pub mod matrix;
pub mod report;
pub mod wordlist;

// Re-export commonly used types
pub use cluster::{
    analyze_sweep, ClusterAnalysis, ClusterGroup, ClusterRecord, MedoidAnalyzer,
    ThresholdClusterer, ThresholdClusters,
};
pub use config::{Config, DEFAULT_CUTOFF};
pub use distance::{DamerauLevenshtein, DistanceMetric};
pub use error::{LexsimError, Result};
pub use matrix::{MatrixBuilder, SimilarityMatrix};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
