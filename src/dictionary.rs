// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, scoring, word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Word storage indexed by length. Immutable once loaded except for
/// `add`; filtering builds a fresh derived dictionary.
#[derive(Default)]
pub struct Dictionary {
    words_by_len: FxHashMap<u8, FxHashSet<word::Word>>,
}

// normalizes accented Latin letters to unaccented uppercase before the
// alphabet sees them
fn fold_diacritic(code: char) -> char {
    match code {
        'à' | 'â' | 'À' | 'Â' => 'A',
        'ç' | 'Ç' => 'C',
        'ë' | 'é' | 'è' | 'ê' | 'Ë' | 'É' | 'È' | 'Ê' => 'E',
        'ï' | 'î' | 'Ï' | 'Î' => 'I',
        'ñ' | 'Ñ' => 'N',
        'ó' | 'ô' | 'Ó' | 'Ô' => 'O',
        'û' | 'Û' => 'U',
        'a'..='z' => code.to_ascii_uppercase(),
        _ => code,
    }
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    pub fn add(&mut self, word: word::Word) {
        self.words_by_len
            .entry(word.len() as u8)
            .or_default()
            .insert(word);
    }

    #[inline(always)]
    pub fn words_of_len(&self, len: u8) -> Option<&FxHashSet<word::Word>> {
        self.words_by_len.get(&len)
    }

    pub fn word_count(&self) -> usize {
        self.words_by_len.values().map(|set| set.len()).sum()
    }

    /// A fresh dictionary holding only words buildable from the rack:
    /// length at most letters + jokers, and passing the joker-budget
    /// frequency check.
    pub fn filter_by_rack(&self, rack_freq: &[u8], joker_count: u8) -> Dictionary {
        let max_len = rack_freq[rack_freq.len() - 1] + joker_count;
        let mut result = Dictionary::new();
        for (&len, set) in &self.words_by_len {
            if len <= max_len {
                for word in set {
                    if word.can_be_made_out_of(rack_freq, joker_count) {
                        result.add(word.clone());
                    }
                }
            }
        }
        result
    }

    /// For every stored word of `pattern`'s length matching its fixed
    /// positions, records in `out_credit` (indexed by letter value) the
    /// credit the cross-word would contribute with that letter at the
    /// single open slot. Slots no word touches are left as passed in.
    /// The pattern must contain exactly one `EMPTY` slot.
    pub fn mark_allowed(
        &self,
        pattern: &[i8],
        out_credit: &mut [i16],
        bonus: i16,
        scoring: &scoring::Scoring,
    ) {
        let mut open_idx = None;
        for (idx, &slot) in pattern.iter().enumerate() {
            if slot == alphabet::EMPTY {
                if open_idx.is_some() {
                    panic!("pattern contains multiple open slots: {pattern:?}");
                }
                open_idx = Some(idx);
            }
        }
        let open_idx = match open_idx {
            Some(idx) => idx,
            None => panic!("pattern contains no open slot: {pattern:?}"),
        };
        if let Some(set) = self.words_by_len.get(&(pattern.len() as u8)) {
            for word in set {
                if word.matches(pattern) {
                    let value = word.value_at(open_idx);
                    out_credit[value as usize] = scoring.score_for_cross_word(word, value, bonus);
                }
            }
        }
    }

    /// Loads one word per line, folding diacritics first. A line with a
    /// character the alphabet does not know fails the whole load.
    pub fn load_from<R: std::io::BufRead>(
        reader: R,
        alphabet: &alphabet::Alphabet,
        scoring: &scoring::Scoring,
    ) -> error::Returns<Dictionary> {
        let mut result = Dictionary::new();
        let mut folded = String::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            folded.clear();
            folded.extend(line.chars().map(fold_diacritic));
            result.add(word::Word::from_codes(&folded, alphabet, scoring)?);
        }
        Ok(result)
    }
}

impl std::fmt::Display for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dictionary(")?;
        let mut lens = self.words_by_len.keys().copied().collect::<Vec<_>>();
        lens.sort_unstable();
        for len in lens {
            write!(f, "{}:{} ", len, self.words_by_len[&len].len())?;
        }
        write!(f, "#:{})", self.word_count())
    }
}
