/// Name sampling — rejection-constrained random walks over the chain.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::chain::{SyllableChain, NAME_END};
use crate::corpus::Corpus;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("chain is empty (no start syllables)")]
    EmptyChain,
    #[error("syllable '{0}' has no recorded successors")]
    DeadEnd(String),
    #[error("no name within {max_words} word(s) after {attempts} walk attempts")]
    WalkExhausted { max_words: usize, attempts: u32 },
    #[error("collected {collected} of {requested} unique names after {attempts} attempts")]
    UniqueExhausted {
        requested: usize,
        collected: usize,
        attempts: u32,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Limits and knobs for name generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Maximum number of space-separated words in an accepted name.
    pub max_words: usize,
    /// Walk attempts before giving up on the word-count constraint.
    pub max_walk_attempts: u32,
    /// Sampler calls before giving up on a unique-set request.
    pub max_unique_attempts: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_words: 2,
            max_walk_attempts: 1_000,
            max_unique_attempts: 100_000,
        }
    }
}

impl SamplerConfig {
    /// Load a sampler config from a RON file. Missing fields fall back to
    /// their defaults.
    pub fn load_from_ron(path: &Path) -> Result<SamplerConfig, SampleError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }
}

/// Safety limit on the length of a single walk. A walk reaches the end
/// sentinel with probability 1, but a pathological corpus can make
/// individual walks arbitrarily long.
const MAX_WALK_SYLLABLES: usize = 64;

/// Samples names off a [`SyllableChain`].
#[derive(Debug, Clone, Default)]
pub struct NameSampler {
    config: SamplerConfig,
}

impl NameSampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Generate one name.
    ///
    /// Picks a start syllable (frequency-proportional, since the start list
    /// keeps duplicates), walks the chain choosing uniformly among recorded
    /// successors until the end sentinel, and rejects walks whose result
    /// exceeds the word limit. Accepted names are capitalized per word.
    pub fn generate(
        &self,
        chain: &SyllableChain,
        rng: &mut StdRng,
    ) -> Result<String, SampleError> {
        if chain.is_empty() {
            return Err(SampleError::EmptyChain);
        }

        for _ in 0..self.config.max_walk_attempts {
            if let Some(name) = self.walk(chain, rng)? {
                return Ok(capitalize_words(&name));
            }
        }

        Err(SampleError::WalkExhausted {
            max_words: self.config.max_words,
            attempts: self.config.max_walk_attempts,
        })
    }

    /// One walk attempt; `None` means the word-count constraint rejected it.
    fn walk(
        &self,
        chain: &SyllableChain,
        rng: &mut StdRng,
    ) -> Result<Option<String>, SampleError> {
        let mut current = chain
            .starts
            .choose(rng)
            .ok_or(SampleError::EmptyChain)?
            .clone();
        let mut name = current.clone();

        for _ in 0..MAX_WALK_SYLLABLES {
            let successors = chain
                .successors(&current)
                .ok_or_else(|| SampleError::DeadEnd(current.clone()))?;
            let next = successors
                .choose(rng)
                .ok_or_else(|| SampleError::DeadEnd(current.clone()))?;

            if next.as_str() == NAME_END {
                let trimmed = name.trim();
                if trimmed.split(' ').count() <= self.config.max_words {
                    return Ok(Some(trimmed.to_string()));
                }
                return Ok(None);
            }

            name.push_str(next);
            current = next.clone();
        }

        // Overlong walk; treat like a word-count rejection.
        Ok(None)
    }

    /// Collect `count` distinct names, none of which collides
    /// case-insensitively with the corpus.
    ///
    /// Collision checking is only against the source corpus; the returned
    /// set deduplicates generated names against each other by construction.
    pub fn generate_unique(
        &self,
        chain: &SyllableChain,
        corpus: &Corpus,
        count: usize,
        rng: &mut StdRng,
    ) -> Result<FxHashSet<String>, SampleError> {
        let mut accepted: FxHashSet<String> = FxHashSet::default();
        if count == 0 {
            return Ok(accepted);
        }

        let mut attempts = 0u32;
        while accepted.len() < count {
            if attempts >= self.config.max_unique_attempts {
                return Err(SampleError::UniqueExhausted {
                    requested: count,
                    collected: accepted.len(),
                    attempts,
                });
            }
            attempts += 1;

            let candidate = self.generate(chain, rng)?;
            if !corpus.contains(&candidate) {
                accepted.insert(candidate);
            }
        }

        Ok(accepted)
    }
}

/// Capitalize the first letter of every word.
fn capitalize_words(name: &str) -> String {
    name.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::syllable::Syllabifier;
    use rand::SeedableRng;

    fn chain_of(names: &[&str]) -> (SyllableChain, Corpus) {
        let corpus = Corpus::from_raw(names.iter().copied());
        let syllabifier = Syllabifier::new();
        let chain = SyllableChain::build(corpus.names(), &syllabifier);
        (chain, corpus)
    }

    #[test]
    fn capitalizes_every_word() {
        assert_eq!(capitalize_words("spring valley"), "Spring Valley");
        assert_eq!(capitalize_words("york"), "York");
    }

    #[test]
    fn empty_chain_is_an_error() {
        let (chain, _) = chain_of(&[]);
        let sampler = NameSampler::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            sampler.generate(&chain, &mut rng),
            Err(SampleError::EmptyChain)
        ));
    }

    #[test]
    fn single_entry_corpus_always_regenerates_it() {
        let (chain, _) = chain_of(&["york"]);
        let sampler = NameSampler::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(sampler.generate(&chain, &mut rng).unwrap(), "York");
        }
    }

    #[test]
    fn generate_respects_max_words() {
        let (chain, _) = chain_of(&[
            "springfield",
            "spring valley",
            "new york",
            "york",
            "new amsterdam",
            "whistle creek",
        ]);
        let sampler = NameSampler::new(SamplerConfig {
            max_words: 2,
            ..SamplerConfig::default()
        });
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let name = sampler.generate(&chain, &mut rng).unwrap();
            assert!(
                name.split(' ').count() <= 2,
                "'{}' exceeds the word limit",
                name
            );
        }
    }

    #[test]
    fn generate_is_deterministic_under_a_seed() {
        let (chain, _) = chain_of(&["springfield", "spring valley", "whistle creek"]);
        let sampler = NameSampler::default();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                sampler.generate(&chain, &mut rng1).unwrap(),
                sampler.generate(&chain, &mut rng2).unwrap()
            );
        }
    }

    #[test]
    fn walk_exhaustion_surfaces_as_an_error() {
        // Every possible walk is two words long
        let (chain, _) = chain_of(&["north bay", "west bay"]);
        let sampler = NameSampler::new(SamplerConfig {
            max_words: 1,
            max_walk_attempts: 50,
            ..SamplerConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            sampler.generate(&chain, &mut rng),
            Err(SampleError::WalkExhausted { attempts: 50, .. })
        ));
    }

    #[test]
    fn unique_set_excludes_corpus_names() {
        // Shared mid-name syllables ("di", "ri", "ver") make the chain
        // branch, so novel recombinations exist alongside the corpus walks.
        let (chain, corpus) = chain_of(&[
            "madison",
            "dixon",
            "harrison",
            "riverton",
            "riverdale",
        ]);
        let sampler = NameSampler::default();
        let mut rng = StdRng::seed_from_u64(42);
        let names = sampler.generate_unique(&chain, &corpus, 5, &mut rng).unwrap();
        assert_eq!(names.len(), 5);
        for name in &names {
            assert!(!corpus.contains(name), "'{}' collides with the corpus", name);
        }
    }

    #[test]
    fn unique_request_of_zero_is_empty() {
        let (chain, corpus) = chain_of(&["york"]);
        let sampler = NameSampler::default();
        let mut rng = StdRng::seed_from_u64(42);
        let names = sampler.generate_unique(&chain, &corpus, 0, &mut rng).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn unsatisfiable_unique_request_is_an_error() {
        // The only generatable name is "York", which collides
        let (chain, corpus) = chain_of(&["york"]);
        let sampler = NameSampler::new(SamplerConfig {
            max_unique_attempts: 100,
            ..SamplerConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            sampler.generate_unique(&chain, &corpus, 1, &mut rng),
            Err(SampleError::UniqueExhausted {
                requested: 1,
                collected: 0,
                attempts: 100,
            })
        ));
    }

    #[test]
    fn config_ron_round_trip() {
        let config = SamplerConfig {
            max_words: 3,
            max_walk_attempts: 10,
            max_unique_attempts: 20,
        };
        let serialized = ron::to_string(&config).unwrap();
        let deserialized: SamplerConfig = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized.max_words, 3);
        assert_eq!(deserialized.max_walk_attempts, 10);
        assert_eq!(deserialized.max_unique_attempts, 20);
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: SamplerConfig = ron::from_str("(max_words: 4)").unwrap();
        assert_eq!(config.max_words, 4);
        assert_eq!(
            config.max_walk_attempts,
            SamplerConfig::default().max_walk_attempts
        );
    }
}
