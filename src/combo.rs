// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, word};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[inline(always)]
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// One fully-specified, scored candidate placement.
#[derive(Clone)]
pub struct Combo {
    word: word::Word,
    x: i8,
    y: i8,
    orientation: Orientation,
    credit: i16,
}

impl Combo {
    pub fn new(word: word::Word, x: i8, y: i8, orientation: Orientation, credit: i16) -> Combo {
        Combo {
            word,
            x,
            y,
            orientation,
            credit,
        }
    }

    #[inline(always)]
    pub fn word(&self) -> &word::Word {
        &self.word
    }

    #[inline(always)]
    pub fn x(&self) -> i8 {
        self.x
    }

    #[inline(always)]
    pub fn y(&self) -> i8 {
        self.y
    }

    #[inline(always)]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline(always)]
    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    #[inline(always)]
    pub fn credit(&self) -> i16 {
        self.credit
    }

    /// Swaps the coordinate axes and flips the orientation. Maps a combo
    /// found on the transposed grid back into native coordinates.
    pub fn mirror(&self) -> Combo {
        Combo {
            word: self.word.clone(),
            x: self.y,
            y: self.x,
            orientation: self.orientation.flipped(),
            credit: self.credit,
        }
    }

    /// Expands the word across its span as `(x, y, external code)`
    /// triples, for the caller to apply to its own board.
    pub fn assignments(&self, alphabet: &alphabet::Alphabet) -> Vec<(i8, i8, char)> {
        let (dx, dy) = match self.orientation {
            Orientation::Horizontal => (1i8, 0i8),
            Orientation::Vertical => (0, 1),
        };
        (0..)
            .zip(self.word.values().iter())
            .map(|(idx, &value)| {
                (
                    self.x + idx * dx,
                    self.y + idx * dy,
                    alphabet.code_for_value(value),
                )
            })
            .collect()
    }

    /// Coordinate label: row number then column letter for across plays
    /// ("8f"), column letter then row number for down plays ("f8").
    pub fn placement_label(&self) -> String {
        let col = ((self.x as u8) + 0x61) as char;
        match self.orientation {
            Orientation::Horizontal => format!("{}{}", self.y + 1, col),
            Orientation::Vertical => format!("{}{}", col, self.y + 1),
        }
    }

    pub fn describe(&self, alphabet: &alphabet::Alphabet) -> String {
        format!(
            "{} {} {}",
            self.placement_label(),
            alphabet.sequence_to_string(self.word.values()),
            self.credit
        )
    }
}

/// A ranked collection bounded to `max_size` entries, ordered by
/// descending credit only. Equal-credit combos stay distinct.
pub struct ResultSet {
    combos: Vec<Combo>,
    max_size: usize,
}

impl ResultSet {
    pub fn new(max_size: usize) -> ResultSet {
        ResultSet {
            combos: Vec::with_capacity(max_size),
            max_size,
        }
    }

    /// Inserts in rank order. At capacity, the new combo must strictly
    /// beat the current worst, which gets evicted.
    pub fn add(&mut self, combo: Combo) -> bool {
        if self.combos.len() == self.max_size {
            match self.combos.last() {
                Some(worst) if worst.credit() < combo.credit() => {
                    self.combos.pop();
                }
                _ => return false,
            }
        }
        let pos = self
            .combos
            .iter()
            .position(|kept| kept.credit() < combo.credit())
            .unwrap_or(self.combos.len());
        self.combos.insert(pos, combo);
        true
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.combos.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Combo> {
        self.combos.iter()
    }

    pub fn into_vec(self) -> Vec<Combo> {
        self.combos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;

    fn combo(credit: i16) -> Combo {
        let word = word::Word::new([0, 1].into(), 2, &scoring::Scoring::new());
        Combo::new(word, 3, 5, Orientation::Horizontal, credit)
    }

    #[test]
    fn mirror_is_an_involution() {
        let c = combo(7);
        let m = c.mirror();
        assert_eq!(m.x(), 5);
        assert_eq!(m.y(), 3);
        assert_eq!(m.orientation(), Orientation::Vertical);
        let back = m.mirror();
        assert_eq!(back.x(), c.x());
        assert_eq!(back.y(), c.y());
        assert_eq!(back.orientation(), c.orientation());
        assert_eq!(back.credit(), c.credit());
    }

    #[test]
    fn assignments_follow_the_orientation() {
        let mut alphabet = alphabet::Alphabet::new('_', ' ');
        alphabet.add_code_point('A').unwrap();
        alphabet.add_code_point('B').unwrap();
        let c = combo(0);
        assert_eq!(c.assignments(&alphabet), vec![(3, 5, 'A'), (4, 5, 'B')]);
        assert_eq!(
            c.mirror().assignments(&alphabet),
            vec![(5, 3, 'A'), (5, 4, 'B')]
        );
    }

    #[test]
    fn placement_labels() {
        let c = combo(0);
        assert_eq!(c.placement_label(), "6d");
        assert_eq!(c.mirror().placement_label(), "f4");
    }

    #[test]
    fn result_set_keeps_descending_order() {
        let mut set = ResultSet::new(10);
        for credit in [3, 9, 1, 9, 5] {
            assert!(set.add(combo(credit)));
        }
        let credits = set.iter().map(|c| c.credit()).collect::<Vec<_>>();
        assert_eq!(credits, vec![9, 9, 5, 3, 1]);
    }

    #[test]
    fn result_set_never_exceeds_capacity() {
        let mut set = ResultSet::new(3);
        for credit in 0..10 {
            set.add(combo(credit));
            assert!(set.len() <= 3);
        }
        let credits = set.iter().map(|c| c.credit()).collect::<Vec<_>>();
        assert_eq!(credits, vec![9, 8, 7]);
    }

    #[test]
    fn equal_credit_does_not_evict_at_capacity() {
        let mut set = ResultSet::new(2);
        assert!(set.add(combo(5)));
        assert!(set.add(combo(5)));
        assert!(!set.add(combo(5)));
        assert!(set.add(combo(6)));
        let credits = set.iter().map(|c| c.credit()).collect::<Vec<_>>();
        assert_eq!(credits, vec![6, 5]);
    }
}
