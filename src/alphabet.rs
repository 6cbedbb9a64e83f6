// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;
use rustc_hash::FxHashMap;

/// An unoccupied board slot.
pub const EMPTY: i8 = -1;
/// A wildcard tile. On an otherwise-empty board it doubles as the
/// mandatory first-move marker.
pub const JOKER: i8 = -2;

/// Bidirectional mapping between external character codes and dense
/// internal letter values `0..len`.
pub struct Alphabet {
    codes: Vec<char>,
    values: FxHashMap<char, i8>,
    joker_code: char,
    empty_code: char,
}

impl Alphabet {
    pub fn new(joker_code: char, empty_code: char) -> Alphabet {
        Alphabet {
            codes: Vec::new(),
            values: FxHashMap::default(),
            joker_code,
            empty_code,
        }
    }

    /// Registers the next letter value for `code`.
    pub fn add_code_point(&mut self, code: char) -> error::Returns<()> {
        if code == self.joker_code || code == self.empty_code || self.values.contains_key(&code) {
            return Err(error::Error::DuplicateCode(code));
        }
        self.values.insert(code, self.codes.len() as i8);
        self.codes.push(code);
        Ok(())
    }

    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.codes.len() as i8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline(always)]
    pub fn joker_code(&self) -> char {
        self.joker_code
    }

    #[inline(always)]
    pub fn empty_code(&self) -> char {
        self.empty_code
    }

    pub fn value_for_code(&self, code: char) -> error::Returns<i8> {
        match self.values.get(&code) {
            Some(&value) => Ok(value),
            None => Err(error::Error::UnknownToken(code)),
        }
    }

    /// Like `value_for_code` but also accepts the two sentinel tokens.
    pub fn value_for_token(&self, code: char) -> error::Returns<i8> {
        if code == self.joker_code {
            Ok(JOKER)
        } else if code == self.empty_code {
            Ok(EMPTY)
        } else {
            self.value_for_code(code)
        }
    }

    #[inline(always)]
    pub fn code_for_value(&self, value: i8) -> char {
        self.codes[value as usize]
    }

    pub fn token_for_value(&self, value: i8) -> char {
        match value {
            JOKER => self.joker_code,
            EMPTY => self.empty_code,
            _ => self.code_for_value(value),
        }
    }

    /// A zeroed frequency vector. Index `v` counts letter value `v`; the
    /// last index holds the total count of non-joker letters.
    pub fn new_frequency(&self) -> Box<[u8]> {
        vec![0u8; self.codes.len() + 1].into_boxed_slice()
    }

    /// Scans a token string into a frequency vector plus a joker count.
    /// Fails on any unrecognized code.
    pub fn frequency_of(&self, tokens: &str) -> error::Returns<(Box<[u8]>, u8)> {
        let mut freq = self.new_frequency();
        let mut jokers = 0u8;
        let mut total = 0u8;
        for code in tokens.chars() {
            if code == self.joker_code {
                jokers += 1;
            } else {
                freq[self.value_for_code(code)? as usize] += 1;
                total += 1;
            }
        }
        freq[self.codes.len()] = total;
        Ok((freq, jokers))
    }

    /// Canonical display form of a frequency vector, e.g. "AACT".
    /// Also serves as the memo key for filtered dictionaries.
    pub fn frequency_to_string(&self, freq: &[u8]) -> String {
        let mut s = String::with_capacity(freq[self.codes.len()] as usize);
        for (value, &count) in (0..).zip(freq.iter().take(self.codes.len())) {
            for _ in 0..count {
                s.push(self.code_for_value(value));
            }
        }
        s
    }

    pub fn sequence_to_string(&self, values: &[i8]) -> String {
        values.iter().map(|&v| self.code_for_value(v)).collect()
    }
}
