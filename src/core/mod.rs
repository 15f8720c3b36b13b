pub mod chain;
pub mod engine;
pub mod sampler;
pub mod syllable;
