// Copyright (C) 2020-2026 Andy Kurnia.

use kibitz::{board, combo, dictionary, display, error, lang};

// a fresh game board with the first-move marker on the center cell
fn make_board(language: &str, dict_path: &str) -> error::Returns<board::Board> {
    let (alphabet, scoring) = lang::language_config(language)?;
    let file = std::fs::File::open(dict_path)?;
    let dictionary =
        dictionary::Dictionary::load_from(std::io::BufReader::new(file), &alphabet, &scoring)?;
    let mut board = board::Board::new(
        lang::DEFAULT_WIDTH,
        lang::DEFAULT_HEIGHT,
        dictionary,
        alphabet,
        scoring,
    );
    mark_center(&mut board)?;
    Ok(board)
}

fn mark_center(board: &mut board::Board) -> error::Returns<()> {
    let joker = board.alphabet().joker_code();
    board.set_letter_code(board.width() / 2, board.height() / 2, joker)
}

fn parse_coord(s: &str, limit: i8) -> Option<i8> {
    match s.parse::<i8>() {
        Ok(v) if v >= 0 && v < limit => Some(v),
        _ => None,
    }
}

fn main() -> error::Returns<()> {
    let mut rl = rustyline::DefaultEditor::new().map_err(std::io::Error::other)?;
    let mut board: Option<board::Board> = None;
    let mut last_combos = Vec::<combo::Combo>::new();
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{filename}:{line_num}> {line}");
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if strings.is_empty() {
                        continue;
                    }
                    match strings[0].as_str() {
                        "help" => {
                            println!(
                                "english <dict-file>   start an english game (also german, dutch)
load <board-file>     replace the board from a saved file
save <board-file>     save the board
show                  print the board
set <x> <y> <token>   put a token on a cell (0-based coordinates)
solve <rack>          rank legal placements for the rack (_ is a joker)
apply <rank>          put a solved placement on the board
clear                 empty the board, keeping the center marker
source <file>         run commands from a file
exit                  exit"
                            );
                        }
                        "exit" => {
                            break;
                        }
                        "source" => {
                            if strings.len() > 1 {
                                match std::fs::read_to_string(&strings[1]) {
                                    Ok(whole_file) => {
                                        let v = cmd_stack.len();
                                        for (line_num, line) in whole_file.lines().enumerate() {
                                            cmd_stack.push((
                                                line.to_string(),
                                                Some((strings[1].clone(), line_num + 1)),
                                            ));
                                        }
                                        cmd_stack[v..].reverse();
                                    }
                                    Err(err) => {
                                        println!("cannot open file: {err:?}");
                                    }
                                }
                            } else {
                                println!("need another arg");
                            }
                        }
                        "english" | "german" | "dutch" | "en" | "de" | "nl" => {
                            if strings.len() > 1 {
                                match make_board(&strings[0], &strings[1]) {
                                    Ok(new_board) => {
                                        println!("using: {}", new_board.dictionary());
                                        board = Some(new_board);
                                        last_combos.clear();
                                    }
                                    Err(err) => {
                                        println!("cannot make board: {err}");
                                    }
                                }
                            } else {
                                println!("need another arg");
                            }
                        }
                        cmd => match board.as_mut() {
                            None => {
                                println!("no board yet, try english <dict-file> first");
                            }
                            Some(board) => match cmd {
                                "show" => {
                                    print!("{}", display::render(board));
                                }
                                "clear" => {
                                    board.clear();
                                    if let Err(err) = mark_center(board) {
                                        println!("cannot mark center: {err}");
                                    }
                                    last_combos.clear();
                                }
                                "set" => {
                                    let mut done = false;
                                    if strings.len() == 4 {
                                        if let (Some(x), Some(y)) = (
                                            parse_coord(&strings[1], board.width()),
                                            parse_coord(&strings[2], board.height()),
                                        ) {
                                            let mut codes = strings[3].chars();
                                            if let (Some(code), None) =
                                                (codes.next(), codes.next())
                                            {
                                                if let Err(err) =
                                                    board.set_letter_code(x, y, code)
                                                {
                                                    println!("cannot set: {err}");
                                                }
                                                done = true;
                                            }
                                        }
                                    }
                                    if !done {
                                        println!("usage: set <x> <y> <token>");
                                    }
                                }
                                "load" => {
                                    if strings.len() > 1 {
                                        match std::fs::read_to_string(&strings[1])
                                            .map_err(error::Error::from)
                                            .and_then(|text| board.set_from_text(&text))
                                        {
                                            Ok(()) => {
                                                last_combos.clear();
                                                print!("{}", display::render(board));
                                            }
                                            Err(err) => {
                                                println!("cannot load board: {err}");
                                            }
                                        }
                                    } else {
                                        println!("need another arg");
                                    }
                                }
                                "save" => {
                                    if strings.len() > 1 {
                                        if let Err(err) =
                                            std::fs::write(&strings[1], board.to_text())
                                        {
                                            println!("cannot save board: {err}");
                                        }
                                    } else {
                                        println!("need another arg");
                                    }
                                }
                                "solve" => {
                                    if strings.len() > 1 {
                                        match board.solve(&strings[1]) {
                                            Ok((combos, report)) => {
                                                print!(
                                                    "{}",
                                                    display::render_combos(
                                                        &combos,
                                                        board.alphabet()
                                                    )
                                                );
                                                print!("{report}");
                                                last_combos = combos;
                                            }
                                            Err(err) => {
                                                println!("cannot solve: {err}");
                                            }
                                        }
                                    } else {
                                        println!("need another arg");
                                    }
                                }
                                "apply" => {
                                    match strings.get(1).and_then(|s| s.parse::<usize>().ok()) {
                                        Some(rank) if rank >= 1 && rank <= last_combos.len() => {
                                            let combo = &last_combos[rank - 1];
                                            println!(
                                                "applying: {}",
                                                combo.describe(board.alphabet())
                                            );
                                            for (x, y, code) in
                                                combo.assignments(board.alphabet())
                                            {
                                                if let Err(err) =
                                                    board.set_letter_code(x, y, code)
                                                {
                                                    println!("cannot apply: {err}");
                                                }
                                            }
                                            last_combos.clear();
                                            print!("{}", display::render(board));
                                        }
                                        _ => {
                                            println!("no such rank, solve first");
                                        }
                                    }
                                }
                                _ => {
                                    println!("invalid input, help for help");
                                }
                            },
                        },
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {err:?}");
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {err:?}");
                    break;
                }
            }
        }
    }

    Ok(())
}
