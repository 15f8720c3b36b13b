/// Syllable Markov chain — construction from a syllabified name corpus.

use rustc_hash::FxHashMap;

use crate::core::syllable::Syllabifier;

/// Token marking the end of a name. Syllable tokens are lowercase letters
/// plus an optional trailing space, so this can never collide with one.
pub const NAME_END: &str = "</N>";

/// First-order transition structure over syllables.
///
/// Successor lists are deduplicated: a transition observed once and a
/// transition observed a thousand times are equally likely to be chosen
/// during sampling. That is deliberate — weighting the chain changes the
/// output statistics.
#[derive(Debug, Clone, Default)]
pub struct SyllableChain {
    /// First syllable of every corpus name. Duplicates are kept, so start
    /// sampling is frequency-proportional.
    pub starts: Vec<String>,
    /// Syllable → syllables (or [`NAME_END`]) observed to follow it at
    /// least once anywhere in the corpus, in first-seen order.
    pub transitions: FxHashMap<String, Vec<String>>,
}

impl SyllableChain {
    /// Build the chain from a corpus of normalized names.
    ///
    /// Each name is syllabified and terminated with [`NAME_END`]; its first
    /// syllable becomes a start candidate and every adjacent pair becomes a
    /// transition. An empty corpus yields an empty chain.
    pub fn build(names: &[String], syllabifier: &Syllabifier) -> SyllableChain {
        let mut chain = SyllableChain::default();

        for name in names {
            let mut syllables = syllabifier.split(name);
            syllables.push(NAME_END.to_string());

            chain.starts.push(syllables[0].clone());

            // The sentinel only ever appears terminally, so every window
            // head is a real syllable.
            for window in syllables.windows(2) {
                let successors = chain.transitions.entry(window[0].clone()).or_default();
                if !successors.contains(&window[1]) {
                    successors.push(window[1].clone());
                }
            }
        }

        chain
    }

    /// Successors recorded for a syllable, if it ever occurred as a
    /// transition source.
    pub fn successors(&self, syllable: &str) -> Option<&[String]> {
        self.transitions.get(syllable).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Number of start candidates (one per corpus name).
    pub fn start_count(&self) -> usize {
        self.starts.len()
    }

    /// Total number of recorded (from, to) pairs.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }
}
