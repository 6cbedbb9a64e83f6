// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, error, scoring};

pub const DEFAULT_WIDTH: i8 = 15;
pub const DEFAULT_HEIGHT: i8 = 15;
pub const DEFAULT_JOKER_CODE: char = '_';
pub const DEFAULT_EMPTY_CODE: char = ' ';
pub const DEFAULT_FULL_RACK_BONUS: i16 = 50;

// credits indexed by letter value, in registration order
const ENGLISH_CREDITS: [i16; 26] = [
    1, 4, 4, 2, 1, 4, 3, 3, 1, 10, 5, 2, 4, 2, 1, 4, 10, 1, 1, 1, 2, 5, 4, 8, 3, 10,
];
const GERMAN_CREDITS: [i16; 29] = [
    1, 3, 4, 1, 1, 4, 2, 2, 1, 6, 4, 2, 3, 1, 2, 4, 10, 1, 1, 1, 1, 6, 3, 8, 10, 3, 6, 8, 6,
];
const DUTCH_CREDITS: [i16; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

// premium matrices indexed [x][y]. letter premiums use the additive
// scale: -1 doubles the letter (one extra credit), -2 triples it
#[rustfmt::skip]
const ENGLISH_BONUS_MATRIX: [[i16; 15]; 15] = [
    [ 0, 0, 0, 3, 0, 0,-2, 0,-2, 0, 0, 3, 0, 0, 0],
    [ 0, 0,-1, 0, 0, 2, 0, 0, 0, 2, 0, 0,-1, 0, 0],
    [ 0,-1, 0, 0,-1, 0, 0, 0, 0, 0,-1, 0, 0,-1, 0],
    [ 3, 0, 0,-2, 0, 0, 0, 2, 0, 0, 0,-2, 0, 0, 3],
    [ 0, 0,-1, 0, 0, 0,-1, 0,-1, 0, 0, 0,-1, 0, 0],
    [ 0, 2, 0, 0, 0,-2, 0, 0, 0,-2, 0, 0, 0, 2, 0],
    [-2, 0, 0, 0,-1, 0, 0, 0, 0, 0,-1, 0, 0, 0,-2],
    [ 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0],
    [-2, 0, 0, 0,-1, 0, 0, 0, 0, 0,-1, 0, 0, 0,-2],
    [ 0, 2, 0, 0, 0,-2, 0, 0, 0,-2, 0, 0, 0, 2, 0],
    [ 0, 0,-1, 0, 0, 0,-1, 0,-1, 0, 0, 0,-1, 0, 0],
    [ 3, 0, 0,-2, 0, 0, 0, 2, 0, 0, 0,-2, 0, 0, 3],
    [ 0,-1, 0, 0,-1, 0, 0, 0, 0, 0,-1, 0, 0,-1, 0],
    [ 0, 0,-1, 0, 0, 2, 0, 0, 0, 2, 0, 0,-1, 0, 0],
    [ 0, 0, 0, 3, 0, 0,-2, 0,-2, 0, 0, 3, 0, 0, 0],
];

// the German and Dutch sets lay out their premiums identically
#[rustfmt::skip]
const STANDARD_BONUS_MATRIX: [[i16; 15]; 15] = [
    [ 3, 0, 0,-1, 0, 0, 0, 3, 0, 0, 0,-1, 0, 0, 3],
    [ 0, 2, 0, 0, 0,-2, 0, 0, 0,-2, 0, 0, 0, 2, 0],
    [ 0, 0, 2, 0, 0, 0,-1, 0,-1, 0, 0, 0, 2, 0, 0],
    [-1, 0, 0, 2, 0, 0, 0,-1, 0, 0, 0, 2, 0, 0,-1],
    [ 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0],
    [ 0,-2, 0, 0, 0,-2, 0, 0, 0,-2, 0, 0, 0,-2, 0],
    [ 0, 0,-1, 0, 0, 0,-1, 0,-1, 0, 0, 0,-1, 0, 0],
    [ 3, 0, 0,-1, 0, 0, 0, 2, 0, 0, 0,-1, 0, 0, 3],
    [ 0, 0,-1, 0, 0, 0,-1, 0,-1, 0, 0, 0,-1, 0, 0],
    [ 0,-2, 0, 0, 0,-2, 0, 0, 0,-2, 0, 0, 0,-2, 0],
    [ 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0],
    [-1, 0, 0, 2, 0, 0, 0,-1, 0, 0, 0, 2, 0, 0,-1],
    [ 0, 0, 2, 0, 0, 0,-1, 0,-1, 0, 0, 0, 2, 0, 0],
    [ 0, 2, 0, 0, 0,-2, 0, 0, 0,-2, 0, 0, 0, 2, 0],
    [ 3, 0, 0,-1, 0, 0, 0, 3, 0, 0, 0,-1, 0, 0, 3],
];

pub fn make_latin_alphabet() -> error::Returns<alphabet::Alphabet> {
    let mut alphabet = alphabet::Alphabet::new(DEFAULT_JOKER_CODE, DEFAULT_EMPTY_CODE);
    for code in 'A'..='Z' {
        alphabet.add_code_point(code)?;
    }
    Ok(alphabet)
}

pub fn make_german_alphabet() -> error::Returns<alphabet::Alphabet> {
    let mut alphabet = make_latin_alphabet()?;
    for code in ['Ä', 'Ö', 'Ü'] {
        alphabet.add_code_point(code)?;
    }
    Ok(alphabet)
}

fn make_scoring(credits: &[i16], bonus_matrix: &[[i16; 15]; 15]) -> scoring::Scoring {
    let mut result = scoring::Scoring::new();
    for (value, &credit) in (0..).zip(credits.iter()) {
        if credit != scoring::DEFAULT_CREDIT {
            result.add_credit(value, credit);
        }
    }
    for (x, row) in (0..).zip(bonus_matrix.iter()) {
        for (y, &bonus) in (0..).zip(row.iter()) {
            if bonus != scoring::DEFAULT_BONUS {
                result.add_bonus(x, y, bonus);
            }
        }
    }
    result.set_full_rack_bonus(DEFAULT_FULL_RACK_BONUS);
    result
}

pub fn make_english_config() -> error::Returns<(alphabet::Alphabet, scoring::Scoring)> {
    Ok((
        make_latin_alphabet()?,
        make_scoring(&ENGLISH_CREDITS, &ENGLISH_BONUS_MATRIX),
    ))
}

pub fn make_german_config() -> error::Returns<(alphabet::Alphabet, scoring::Scoring)> {
    Ok((
        make_german_alphabet()?,
        make_scoring(&GERMAN_CREDITS, &STANDARD_BONUS_MATRIX),
    ))
}

pub fn make_dutch_config() -> error::Returns<(alphabet::Alphabet, scoring::Scoring)> {
    Ok((
        make_latin_alphabet()?,
        make_scoring(&DUTCH_CREDITS, &STANDARD_BONUS_MATRIX),
    ))
}

pub fn language_config(name: &str) -> error::Returns<(alphabet::Alphabet, scoring::Scoring)> {
    match name {
        "english" | "en" => make_english_config(),
        "german" | "de" => make_german_config(),
        "dutch" | "nl" => make_dutch_config(),
        _ => Err(error::Error::UnknownLanguage(name.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_alphabet_has_26_letters() {
        let alphabet = make_latin_alphabet().unwrap();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.value_for_code('A').unwrap(), 0);
        assert_eq!(alphabet.value_for_code('Z').unwrap(), 25);
    }

    #[test]
    fn german_alphabet_appends_umlauts() {
        let alphabet = make_german_alphabet().unwrap();
        assert_eq!(alphabet.len(), 29);
        assert_eq!(alphabet.value_for_code('Ä').unwrap(), 26);
        assert_eq!(alphabet.value_for_code('Ü').unwrap(), 28);
    }

    #[test]
    fn credit_tables_match_alphabets() {
        for (config, letters) in [
            (make_english_config().unwrap(), 26),
            (make_german_config().unwrap(), 29),
            (make_dutch_config().unwrap(), 26),
        ] {
            let (alphabet, scoring) = config;
            assert_eq!(alphabet.len(), letters);
            assert_eq!(scoring.full_rack_bonus(), DEFAULT_FULL_RACK_BONUS);
        }
        let (alphabet, scoring) = make_english_config().unwrap();
        assert_eq!(scoring.credit_for(alphabet.value_for_code('Q').unwrap()), 10);
        assert_eq!(scoring.credit_for(alphabet.value_for_code('E').unwrap()), 1);
    }

    #[test]
    fn premium_layouts_are_symmetric() {
        for matrix in [&ENGLISH_BONUS_MATRIX, &STANDARD_BONUS_MATRIX] {
            for x in 0..15 {
                for y in 0..15 {
                    assert_eq!(matrix[x][y], matrix[y][x]);
                    assert_eq!(matrix[x][y], matrix[14 - x][14 - y]);
                }
            }
        }
    }

    #[test]
    fn letter_premiums_use_the_additive_scale() {
        let (alphabet, scoring) = make_english_config().unwrap();
        assert_eq!(scoring.bonus_for(2, 1), -1); // double letter
        assert_eq!(scoring.bonus_for(6, 0), -2); // triple letter
        assert_eq!(scoring.bonus_for(3, 0), 3);
        // QA (base 11) with the Q on a premium: doubled 21, tripled 31
        let q = alphabet.value_for_code('Q').unwrap();
        let w = crate::word::Word::from_codes("QA", &alphabet, &scoring).unwrap();
        assert_eq!(scoring.score_for_cross_word(&w, q, scoring.bonus_for(2, 1)), 21);
        assert_eq!(scoring.score_for_cross_word(&w, q, scoring.bonus_for(6, 0)), 31);
    }

    #[test]
    fn language_dispatch() {
        assert!(language_config("english").is_ok());
        assert!(language_config("de").is_ok());
        assert!(language_config("nl").is_ok());
        assert!(language_config("french").is_err());
    }
}
