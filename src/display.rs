// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, combo};
use std::fmt::Write;

#[inline(always)]
fn empty_label(bonus: i16) -> char {
    match bonus {
        3 => '=',
        2 => '-',
        -2 => '"',
        -1 => '\'',
        _ => ' ',
    }
}

#[inline(always)]
fn cell_label(board: &board::Board, x: i8, y: i8) -> char {
    let code = board.letter_code(x, y);
    if code == board.alphabet().empty_code() {
        empty_label(board.bonus_at(x, y))
    } else if code == board.alphabet().joker_code() {
        '*'
    } else {
        code
    }
}

/// Renders the board with coordinate rails on all four sides. Empty
/// cells show their bonus symbol, the first-move marker shows as `*`.
pub fn render(board: &board::Board) -> String {
    let mut out = String::new();
    let column_rail = |out: &mut String| {
        out.push_str("  ");
        for x in 0..board.width() {
            out.push(' ');
            out.push(((x as u8) + 0x61) as char);
        }
        out.push('\n');
    };
    let border = |out: &mut String| {
        out.push_str("  +");
        for _ in 1..board.width() {
            out.push_str("--");
        }
        out.push_str("-+\n");
    };
    column_rail(&mut out);
    border(&mut out);
    for y in 0..board.height() {
        let _ = write!(out, "{:2}|", y + 1);
        for x in 0..board.width() {
            if x > 0 {
                out.push(' ');
            }
            out.push(cell_label(board, x, y));
        }
        let _ = writeln!(out, "|{}", y + 1);
    }
    border(&mut out);
    column_rail(&mut out);
    out
}

/// Ranked combos as one line each, best first.
pub fn render_combos(combos: &[combo::Combo], alphabet: &alphabet::Alphabet) -> String {
    let mut out = String::new();
    for (rank, combo) in (1..).zip(combos.iter()) {
        let _ = writeln!(out, "{:3}: {}", rank, combo.describe(alphabet));
    }
    out
}
