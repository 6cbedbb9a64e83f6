// Copyright (C) 2020-2026 Andy Kurnia.

use kibitz::{board, dictionary, error, lang};

// language: english/german/dutch (or en/de/nl).
// dictionary: path to a word list, one word per line.
// rack: tokens, _ for a joker.
// board: optional rows of tokens; omitted means an empty board with the
//   first-move marker on the center cell.
// count: maximum number of placements returned.
#[derive(serde::Deserialize)]
struct Question {
    language: String,
    dictionary: String,
    rack: String,
    board: Option<Vec<String>>,
    count: usize,
}

fn main() -> error::Returns<()> {
    let question: Question =
        serde_json::from_reader(std::io::stdin().lock()).map_err(std::io::Error::other)?;
    let (alphabet, scoring) = lang::language_config(&question.language)?;
    let file = std::fs::File::open(&question.dictionary)?;
    let dictionary =
        dictionary::Dictionary::load_from(std::io::BufReader::new(file), &alphabet, &scoring)?;
    let mut board = board::Board::new(
        lang::DEFAULT_WIDTH,
        lang::DEFAULT_HEIGHT,
        dictionary,
        alphabet,
        scoring,
    );
    board.set_max_results(question.count);
    match &question.board {
        Some(rows) => {
            let mut text = rows.join("\n");
            text.push('\n');
            board.set_from_text(&text)?;
        }
        None => {
            let joker = board.alphabet().joker_code();
            board.set_letter_code(board.width() / 2, board.height() / 2, joker)?;
        }
    }
    let (combos, _) = board.solve(&question.rack)?;
    let mut result = Vec::new();
    for combo in &combos {
        // across plays: down=false; coordinates are 0-based
        result.push(serde_json::json!({
            "word": board.alphabet().sequence_to_string(combo.word().values()),
            "x": combo.x(),
            "y": combo.y(),
            "down": !combo.is_horizontal(),
            "label": combo.placement_label(),
            "credit": combo.credit(),
        }));
    }
    let ret = serde_json::to_value(result).map_err(std::io::Error::other)?;
    println!("{ret}");
    Ok(())
}
