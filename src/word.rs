// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, scoring};

/// An immutable dictionary entry: the value sequence, its letter
/// frequency vector, and the base credit fixed at creation time.
/// Identity is by value sequence only.
#[derive(Clone, Debug)]
pub struct Word {
    values: Box<[i8]>,
    freq: Box<[u8]>,
    base_credit: i16,
}

impl PartialEq for Word {
    fn eq(&self, other: &Word) -> bool {
        self.values == other.values
    }
}

impl Eq for Word {}

impl std::hash::Hash for Word {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl Word {
    pub fn new(values: Box<[i8]>, alphabet_size: i8, scoring: &scoring::Scoring) -> Word {
        let mut freq = vec![0u8; alphabet_size as usize + 1].into_boxed_slice();
        let mut base_credit = 0i16;
        for &value in &values {
            freq[value as usize] += 1;
            base_credit += scoring.credit_for(value);
        }
        freq[alphabet_size as usize] = values.len() as u8;
        Word {
            values,
            freq,
            base_credit,
        }
    }

    pub fn from_codes(
        codes: &str,
        alphabet: &alphabet::Alphabet,
        scoring: &scoring::Scoring,
    ) -> error::Returns<Word> {
        let mut values = Vec::with_capacity(codes.len());
        for code in codes.chars() {
            values.push(alphabet.value_for_code(code)?);
        }
        Ok(Word::new(values.into_boxed_slice(), alphabet.len(), scoring))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline(always)]
    pub fn value_at(&self, idx: usize) -> i8 {
        self.values[idx]
    }

    #[inline(always)]
    pub fn values(&self) -> &[i8] {
        &self.values
    }

    #[inline(always)]
    pub fn freq(&self) -> &[u8] {
        &self.freq
    }

    #[inline(always)]
    pub fn base_credit(&self) -> i16 {
        self.base_credit
    }

    /// Whether this word can be built from `rack_freq` letters plus at
    /// most `joker_count` wildcards. Greedy and exact: joker substitution
    /// is fungible per letter slot, so deficits are additive and
    /// order-independent. Only the per-letter slots count; the trailing
    /// total is informational and charging it would bill jokers twice.
    pub fn can_be_made_out_of(&self, rack_freq: &[u8], joker_count: u8) -> bool {
        let mut budget = joker_count as i16;
        let letters = self.freq.len() - 1;
        for (&need, &have) in self.freq[..letters].iter().zip(rack_freq.iter()) {
            if need > have {
                budget -= (need - have) as i16;
                if budget < 0 {
                    return false;
                }
            }
        }
        true
    }

    /// Positional match against a same-length pattern; `EMPTY` slots in
    /// the pattern match anything.
    pub fn matches(&self, pattern: &[i8]) -> bool {
        debug_assert_eq!(self.values.len(), pattern.len());
        self.values
            .iter()
            .zip(pattern.iter())
            .all(|(&value, &slot)| slot == alphabet::EMPTY || value == slot)
    }
}
