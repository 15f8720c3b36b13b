//! Toponym Engine — fictional place-name generation from real-world corpora.
//!
//! Splits each corpus name into syllables, builds a first-order Markov chain
//! over the observed syllable sequences, and samples new names off that chain
//! under a word-count constraint, rejecting anything that collides with the
//! source corpus.

pub mod core;
pub mod corpus;
