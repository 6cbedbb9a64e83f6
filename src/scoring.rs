// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, word};
use rustc_hash::FxHashMap;

pub const DEFAULT_CREDIT: i16 = 1;
pub const DEFAULT_BONUS: i16 = 0;

/// Per-letter credits and per-cell bonuses, sparse with defaults.
/// A negative cell bonus `-k` adds `k * letter credit` for the letter
/// placed there; a positive bonus `m` multiplies the whole word score.
pub struct Scoring {
    credits: FxHashMap<i8, i16>,
    bonuses: FxHashMap<(i8, i8), i16>,
    full_rack_bonus: i16,
}

impl Default for Scoring {
    fn default() -> Scoring {
        Scoring::new()
    }
}

impl Scoring {
    pub fn new() -> Scoring {
        Scoring {
            credits: FxHashMap::default(),
            bonuses: FxHashMap::default(),
            full_rack_bonus: 0,
        }
    }

    pub fn add_credit(&mut self, value: i8, credit: i16) {
        self.credits.insert(value, credit);
    }

    pub fn add_bonus(&mut self, x: i8, y: i8, bonus: i16) {
        self.bonuses.insert((x, y), bonus);
    }

    pub fn set_full_rack_bonus(&mut self, bonus: i16) {
        self.full_rack_bonus = bonus;
    }

    #[inline(always)]
    pub fn full_rack_bonus(&self) -> i16 {
        self.full_rack_bonus
    }

    #[inline(always)]
    pub fn credit_for(&self, value: i8) -> i16 {
        *self.credits.get(&value).unwrap_or(&DEFAULT_CREDIT)
    }

    #[inline(always)]
    pub fn bonus_for(&self, x: i8, y: i8) -> i16 {
        *self.bonuses.get(&(x, y)).unwrap_or(&DEFAULT_BONUS)
    }

    /// Scores a full placement. `cells` holds, per covered position in
    /// order, the cell's letter before this placement and its bonus.
    /// Bonuses only count at cells that were empty; all additive letter
    /// bonuses apply before any word multiplier, and multipliers compound.
    pub fn score_full_placement(
        &self,
        word: &word::Word,
        used_full_rack: bool,
        cells: &[(i8, i16)],
    ) -> i16 {
        let mut credit = word.base_credit();
        if used_full_rack {
            credit += self.full_rack_bonus;
        }
        for (idx, &(letter, bonus)) in cells.iter().enumerate() {
            if letter == alphabet::EMPTY && bonus < 0 {
                credit += -bonus * self.credit_for(word.value_at(idx));
            }
        }
        for &(letter, bonus) in cells {
            if letter == alphabet::EMPTY && bonus > 0 {
                credit *= bonus;
            }
        }
        credit
    }

    /// The same rule specialized to a single open cell, used to pre-score
    /// candidate cross-words during cache construction.
    pub fn score_for_cross_word(&self, word: &word::Word, value: i8, bonus: i16) -> i16 {
        let mut credit = word.base_credit();
        if bonus < 0 {
            credit += -bonus * self.credit_for(value);
        } else if bonus > 0 {
            credit *= bonus;
        }
        credit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_scoring() -> Scoring {
        let mut scoring = Scoring::new();
        scoring.add_credit(0, 3); // C
        scoring
    }

    fn cat() -> word::Word {
        // C A T over values 0 1 2, base credit 3+1+1
        word::Word::new([0, 1, 2].into(), 3, &cat_scoring())
    }

    #[test]
    fn plain_word_scores_base_credit() {
        let scoring = cat_scoring();
        let cells = [(alphabet::EMPTY, 0); 3];
        assert_eq!(scoring.score_full_placement(&cat(), false, &cells), 5);
    }

    #[test]
    fn negative_bonus_adds_letter_credit() {
        let scoring = cat_scoring();
        let cells = [(alphabet::EMPTY, -2), (alphabet::EMPTY, 0), (alphabet::EMPTY, 0)];
        // b + 2c with c = 3
        assert_eq!(scoring.score_full_placement(&cat(), false, &cells), 11);
    }

    #[test]
    fn word_multiplier_applies_after_letter_bonuses() {
        let scoring = cat_scoring();
        let cells = [(alphabet::EMPTY, -2), (alphabet::EMPTY, 0), (alphabet::EMPTY, 3)];
        assert_eq!(scoring.score_full_placement(&cat(), false, &cells), 33);
    }

    #[test]
    fn word_multipliers_compound() {
        let scoring = cat_scoring();
        let cells = [(alphabet::EMPTY, 2), (alphabet::EMPTY, 0), (alphabet::EMPTY, 3)];
        assert_eq!(scoring.score_full_placement(&cat(), false, &cells), 30);
    }

    #[test]
    fn bonuses_only_count_on_previously_empty_cells() {
        let scoring = cat_scoring();
        let cells = [(0, -2), (1, 3), (alphabet::EMPTY, 0)];
        assert_eq!(scoring.score_full_placement(&cat(), false, &cells), 5);
    }

    #[test]
    fn full_rack_bonus_applies_before_multiplier() {
        let mut scoring = cat_scoring();
        scoring.set_full_rack_bonus(50);
        let cells = [(alphabet::EMPTY, 0), (alphabet::EMPTY, 0), (alphabet::EMPTY, 2)];
        assert_eq!(scoring.score_full_placement(&cat(), true, &cells), 110);
        assert_eq!(scoring.score_full_placement(&cat(), false, &cells), 10);
    }

    #[test]
    fn cross_word_scoring_matches_single_cell_rule() {
        let scoring = cat_scoring();
        let w = cat();
        assert_eq!(scoring.score_for_cross_word(&w, 0, 0), 5);
        assert_eq!(scoring.score_for_cross_word(&w, 0, -2), 11);
        assert_eq!(scoring.score_for_cross_word(&w, 0, 3), 15);
    }
}
