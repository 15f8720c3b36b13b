/// The end-to-end generation facade: corpus in, fictional names out.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::chain::SyllableChain;
use crate::core::sampler::{NameSampler, SampleError, SamplerConfig};
use crate::core::syllable::Syllabifier;
use crate::corpus::{Corpus, CorpusError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),
    #[error("sampling error: {0}")]
    Sample(#[from] SampleError),
    #[error("no corpus provided, or corpus empty after normalization")]
    EmptyCorpus,
}

/// The top-level generator. Built via [`ToponymEngine::builder()`].
///
/// The chain and corpus are constructed once at build time and immutable
/// thereafter; only the RNG state advances between calls.
pub struct ToponymEngine {
    corpus: Corpus,
    chain: SyllableChain,
    sampler: NameSampler,
    rng: StdRng,
}

/// Builder for constructing a [`ToponymEngine`].
pub struct ToponymEngineBuilder {
    corpus: Option<Corpus>,
    config: SamplerConfig,
    seed: u64,
}

impl ToponymEngine {
    pub fn builder() -> ToponymEngineBuilder {
        ToponymEngineBuilder {
            corpus: None,
            config: SamplerConfig::default(),
            seed: 0,
        }
    }

    /// Generate one name.
    pub fn generate(&mut self) -> Result<String, EngineError> {
        Ok(self.sampler.generate(&self.chain, &mut self.rng)?)
    }

    /// Generate `count` distinct names, none colliding case-insensitively
    /// with the corpus. Ordering of the returned set is unspecified.
    pub fn generate_unique(&mut self, count: usize) -> Result<FxHashSet<String>, EngineError> {
        Ok(self
            .sampler
            .generate_unique(&self.chain, &self.corpus, count, &mut self.rng)?)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn chain(&self) -> &SyllableChain {
        &self.chain
    }
}

impl ToponymEngineBuilder {
    pub fn corpus(mut self, corpus: Corpus) -> Self {
        self.corpus = Some(corpus);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(mut self, config: SamplerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_words(mut self, max_words: usize) -> Self {
        self.config.max_words = max_words;
        self
    }

    /// Syllabify the corpus and build the chain.
    pub fn build(self) -> Result<ToponymEngine, EngineError> {
        let corpus = self.corpus.ok_or(EngineError::EmptyCorpus)?;
        if corpus.is_empty() {
            return Err(EngineError::EmptyCorpus);
        }

        let syllabifier = Syllabifier::new();
        let chain = SyllableChain::build(corpus.names(), &syllabifier);

        Ok(ToponymEngine {
            corpus,
            chain,
            sampler: NameSampler::new(self.config),
            rng: StdRng::seed_from_u64(self.seed),
        })
    }
}
