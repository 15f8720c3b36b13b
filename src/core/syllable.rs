/// Rule-based English syllabification — the phonetic front end of the chain.
///
/// Words are divided at break points only; no characters are added, removed,
/// or reordered, so joining the tokens back together reproduces the input.

use rustc_hash::FxHashSet;

/// Consonant clusters that may legally open an English syllable. Break
/// points are placed so that the syllable after the break starts with the
/// longest of these that fits the cluster.
const LEGAL_ONSETS: &[&str] = &[
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "q", "r",
    "s", "t", "v", "w", "x", "y", "z",
    "bl", "br", "ch", "cl", "cr", "dr", "dw", "fl", "fr", "gl", "gr", "kn",
    "ph", "pl", "pr", "qu", "sc", "sh", "sk", "sl", "sm", "sn", "sp", "st",
    "sw", "th", "tr", "tw", "wh", "wr",
    "chr", "phr", "sch", "scr", "shr", "spl", "spr", "squ", "str", "thr",
];

/// Immutable syllabification rules, built once and shared read-only for the
/// life of the process.
#[derive(Debug)]
pub struct Syllabifier {
    onsets: FxHashSet<&'static str>,
}

impl Default for Syllabifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Syllabifier {
    pub fn new() -> Self {
        Self {
            onsets: LEGAL_ONSETS.iter().copied().collect(),
        }
    }

    /// Split a name into syllable tokens.
    ///
    /// The input is lowercased and split into space-separated words; each
    /// word is divided at phonetic break points, and the word's final
    /// syllable keeps a trailing space as the word-boundary marker.
    ///
    /// Deterministic, and total over lowercase alphabetic input with single
    /// spaces (the shape [`crate::corpus::normalize_name`] produces).
    pub fn split(&self, name: &str) -> Vec<String> {
        let lowered = name.to_lowercase();
        let mut tokens = Vec::new();
        for word in lowered.split(' ') {
            let mut prev = 0;
            for pos in self.break_points(word) {
                tokens.push(word[prev..pos].to_string());
                prev = pos;
            }
            tokens.push(format!("{} ", &word[prev..]));
        }
        tokens
    }

    /// Byte positions at which `word` is divided into syllables, ascending.
    fn break_points(&self, word: &str) -> Vec<usize> {
        if !word.is_ascii() {
            // Outside the input contract; keep the word whole.
            return Vec::new();
        }
        let bytes = word.as_bytes();
        let len = bytes.len();

        // Classify vowels; 'y' acts as a vowel after a consonant.
        let mut is_vowel = vec![false; len];
        for i in 0..len {
            is_vowel[i] = match bytes[i] {
                b'a' | b'e' | b'i' | b'o' | b'u' => true,
                b'y' => i > 0 && !is_vowel[i - 1],
                _ => false,
            };
        }

        // Maximal vowel runs are the syllable nuclei (half-open ranges).
        let mut nuclei: Vec<(usize, usize)> = Vec::new();
        let mut i = 0;
        while i < len {
            if is_vowel[i] {
                let start = i;
                while i < len && is_vowel[i] {
                    i += 1;
                }
                nuclei.push((start, i));
            } else {
                i += 1;
            }
        }

        // A final lone "e" is silent and merges leftward, except in
        // consonant+"le" endings ("ta-ble", "whis-tle").
        let mut cle_ending = false;
        if nuclei.len() > 1 {
            let (start, end) = nuclei[nuclei.len() - 1];
            if end == len && end - start == 1 && bytes[start] == b'e' {
                cle_ending = word.ends_with("le") && start >= 2 && !is_vowel[start - 2];
                if !cle_ending {
                    nuclei.pop();
                }
            }
        }

        let mut breaks = Vec::new();
        for (pair_index, pair) in nuclei.windows(2).enumerate() {
            let cluster_start = pair[0].1;
            let cluster_end = pair[1].0;
            if cluster_start >= cluster_end {
                continue;
            }
            let is_last_pair = pair_index == nuclei.len() - 2;
            let pos = if cle_ending && is_last_pair && cluster_end - cluster_start >= 2 {
                // Keep consonant+"le" together as the final syllable.
                cluster_end - 2
            } else {
                cluster_end - self.longest_onset(&word[cluster_start..cluster_end])
            };
            breaks.push(pos);
        }
        breaks
    }

    /// Length of the longest legal-onset suffix of `cluster` (at most 3).
    fn longest_onset(&self, cluster: &str) -> usize {
        let max = cluster.len().min(3);
        for take in (1..=max).rev() {
            if self.onsets.contains(&cluster[cluster.len() - take..]) {
                return take;
            }
        }
        0
    }
}
