// Copyright (C) 2020-2026 Andy Kurnia.

use kibitz::{board, combo, dictionary, lang, scoring, word};

fn board_with(
    words: &[&str],
    credits: &[(char, i16)],
    bonuses: &[(i8, i8, i16)],
    full_rack_bonus: i16,
) -> board::Board {
    let alphabet = lang::make_latin_alphabet().unwrap();
    let mut scoring = scoring::Scoring::new();
    for &(code, credit) in credits {
        scoring.add_credit(alphabet.value_for_code(code).unwrap(), credit);
    }
    for &(x, y, bonus) in bonuses {
        scoring.add_bonus(x, y, bonus);
    }
    scoring.set_full_rack_bonus(full_rack_bonus);
    let mut dict = dictionary::Dictionary::new();
    for codes in words {
        dict.add(word::Word::from_codes(codes, &alphabet, &scoring).unwrap());
    }
    board::Board::new(
        lang::DEFAULT_WIDTH,
        lang::DEFAULT_HEIGHT,
        dict,
        alphabet,
        scoring,
    )
}

fn placements(combos: &[combo::Combo]) -> Vec<(i8, i8, bool, i16)> {
    combos
        .iter()
        .map(|c| (c.x(), c.y(), c.is_horizontal(), c.credit()))
        .collect()
}

#[test]
fn first_move_must_cover_the_center_marker() {
    // C=3, A=1, T=1, so CAT is worth 5; a word doubler sits at (9,7)
    let mut board = board_with(&["CAT"], &[('C', 3)], &[(9, 7, 2)], 0);
    board.set_letter_code(7, 7, '_').unwrap();
    let (combos, _) = board.solve("CAT").unwrap();
    let mut got = placements(&combos);
    got.sort_unstable();
    let mut expected = vec![
        // horizontal spans through the center, column 7 carries the marker
        (5, 7, true, 5),
        (6, 7, true, 5),
        (7, 7, true, 10), // reaches the doubler at (9,7)
        // vertical spans through the center
        (7, 5, false, 5),
        (7, 6, false, 5),
        (7, 7, false, 5),
    ];
    expected.sort_unstable();
    assert_eq!(got, expected);
    // the doubled placement ranks first
    assert_eq!(combos[0].credit(), 10);
    assert!(combos[1..].iter().all(|c| c.credit() == 5));
}

#[test]
fn center_marker_does_not_count_toward_the_full_rack_bonus() {
    let mut board = board_with(&["CAT"], &[], &[], 50);
    board.set_letter_code(7, 7, '_').unwrap();
    let (combos, _) = board.solve("CAT").unwrap();
    // only two tiles come from the rack, the marker cell is not empty
    assert!(!combos.is_empty());
    assert!(combos.iter().all(|c| c.credit() == 3));
}

#[test]
fn using_the_whole_rack_earns_the_bonus() {
    // board holds A at (8,7); rack CT completes CAT around it
    let mut board = board_with(&["CAT"], &[('C', 3)], &[], 50);
    board.set_letter_code(8, 7, 'A').unwrap();
    let (combos, _) = board.solve("CT").unwrap();
    let mut got = placements(&combos);
    got.sort_unstable();
    // one horizontal through the fixed A, one vertical crossing it
    assert_eq!(got, vec![(7, 7, true, 55), (8, 6, false, 55)]);
}

#[test]
fn cross_words_gate_legality_but_leave_the_score_alone() {
    // A at (7,7) and A at (8,6); dictionary is just AB. placing B at
    // (8,7) must form AB both ways; the combo scores its main word
    let mut board = board_with(&["AB"], &[], &[], 0);
    board.set_letter_code(7, 7, 'A').unwrap();
    board.set_letter_code(8, 6, 'A').unwrap();
    let (combos, _) = board.solve("B").unwrap();
    let mut got = placements(&combos);
    got.sort_unstable();
    let mut expected = vec![
        (7, 7, true, 2),  // B at (8,7), also forms AB downward
        (8, 6, false, 2), // B at (8,7), also forms AB across
        (8, 6, true, 2),  // B at (9,6)
        (7, 7, false, 2), // B at (7,8)
    ];
    expected.sort_unstable();
    assert_eq!(got, expected);
}

#[test]
fn words_may_not_abut_an_existing_run_without_absorbing_it() {
    // BAT would have to absorb the AT run; BA alone may not stop short
    let mut board = board_with(&["BAT", "BA"], &[], &[], 0);
    board.set_letter_code(7, 7, 'A').unwrap();
    board.set_letter_code(8, 7, 'T').unwrap();
    let (combos, _) = board.solve("B").unwrap();
    let mut got = placements(&combos);
    got.sort_unstable();
    // BAT across at (6,7), BA down ending on the fixed A
    assert_eq!(got, vec![(6, 7, true, 3), (7, 6, false, 2)]);
}

#[test]
fn joker_completes_a_word_on_the_first_move() {
    // CAT plus a joker standing in for the S
    let mut board = board_with(&["CATS"], &[], &[], 0);
    board.set_letter_code(7, 7, '_').unwrap();
    let (combos, _) = board.solve("CAT_").unwrap();
    assert!(!combos.is_empty());
    assert!(combos.iter().all(|c| c.word().len() == 4));
}

#[test]
fn result_count_is_bounded() {
    let mut board = board_with(&["AB", "BA"], &[], &[], 0);
    board.set_letter_code(7, 7, '_').unwrap();
    board.set_max_results(1);
    let (combos, _) = board.solve("AB_").unwrap();
    assert_eq!(combos.len(), 1);
}

#[test]
fn solve_does_not_mutate_the_board() {
    let mut board = board_with(&["CAT"], &[], &[], 0);
    board.set_letter_code(7, 7, '_').unwrap();
    let before = board.to_text();
    let _ = board.solve("CAT").unwrap();
    let _ = board.solve("CAT").unwrap();
    assert_eq!(board.to_text(), before);
}

#[test]
fn board_text_survives_a_round_trip_through_solve() {
    let mut board = board_with(&["CAT"], &[], &[], 0);
    board.set_letter_code(7, 7, 'A').unwrap();
    let text = board.to_text();
    let mut other = board_with(&["CAT"], &[], &[], 0);
    other.set_from_text(&text).unwrap();
    assert_eq!(
        placements(&other.solve("CT").unwrap().0),
        placements(&board.solve("CT").unwrap().0)
    );
}

#[test]
fn unknown_rack_token_is_an_error() {
    let board = board_with(&["CAT"], &[], &[], 0);
    assert!(board.solve("CA9").is_err());
}
