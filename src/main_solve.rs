// Copyright (C) 2020-2026 Andy Kurnia.

use kibitz::{board, dictionary, display, error, lang};

fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 3 {
        println!(
            "args:
  english en.dic CAROTTE
    solve a rack on an empty board (first move through the center)
  english en.dic CAROTTE board.txt
    solve a rack on a saved board
  (english can also be german or dutch, or en/de/nl)"
        );
        return Ok(());
    }
    let t0 = std::time::Instant::now();
    let (alphabet, scoring) = lang::language_config(&args[1])?;
    let file = std::fs::File::open(&args[2])?;
    let dictionary =
        dictionary::Dictionary::load_from(std::io::BufReader::new(file), &alphabet, &scoring)?;
    let mut board = board::Board::new(
        lang::DEFAULT_WIDTH,
        lang::DEFAULT_HEIGHT,
        dictionary,
        alphabet,
        scoring,
    );
    if args.len() > 4 {
        board.set_from_text(&std::fs::read_to_string(&args[4])?)?;
    } else {
        let joker = board.alphabet().joker_code();
        board.set_letter_code(lang::DEFAULT_WIDTH / 2, lang::DEFAULT_HEIGHT / 2, joker)?;
    }
    let (combos, report) = board.solve(&args[3])?;
    print!("{}", display::render(&board));
    print!("{}", display::render_combos(&combos, board.alphabet()));
    print!("{report}");
    println!("time taken: {:?}", t0.elapsed());
    Ok(())
}
