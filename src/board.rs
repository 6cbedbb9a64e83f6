// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, combo, dictionary, error, scoring};
use rustc_hash::FxHashMap;
use std::fmt::Write;

pub const DEFAULT_MAX_RESULTS: usize = 100;
const MAX_CACHE_KEYS_IN_REPORT: usize = 30;

/// The board: a single native grid plus a transposable view. Persistent
/// state is the letter grid and the bonus grid; everything the search
/// needs per call lives in a scratch arena allocated inside `solve`.
pub struct Board {
    width: i8,
    height: i8,
    letters: Box<[i8]>, // y * width + x
    bonuses: Box<[i16]>,
    dictionary: dictionary::Dictionary,
    alphabet: alphabet::Alphabet,
    scoring: scoring::Scoring,
    max_results: usize,
}

/// Maps scan coordinates `(u, v)` onto the native grid. The search walks
/// words along the `u` axis and cross-words along the `v` axis; the
/// transposed view runs the same scan for the other orientation.
#[derive(Clone, Copy)]
struct View<'a> {
    board: &'a Board,
    transposed: bool,
}

impl View<'_> {
    #[inline(always)]
    fn main_len(&self) -> i8 {
        if self.transposed {
            self.board.height
        } else {
            self.board.width
        }
    }

    #[inline(always)]
    fn cross_len(&self) -> i8 {
        if self.transposed {
            self.board.width
        } else {
            self.board.height
        }
    }

    #[inline(always)]
    fn native(&self, u: i8, v: i8) -> usize {
        let (x, y) = if self.transposed { (v, u) } else { (u, v) };
        (y as usize) * (self.board.width as usize) + (x as usize)
    }

    // off-board reads are empty, like a border of blank cells
    #[inline(always)]
    fn letter(&self, u: i8, v: i8) -> i8 {
        if u < 0 || v < 0 || u >= self.main_len() || v >= self.cross_len() {
            alphabet::EMPTY
        } else {
            self.board.letters[self.native(u, v)]
        }
    }

    #[inline(always)]
    fn bonus(&self, u: i8, v: i8) -> i16 {
        self.board.bonuses[self.native(u, v)]
    }

    #[inline(always)]
    fn index(&self, u: i8, v: i8) -> usize {
        (u as usize) * (self.cross_len() as usize) + (v as usize)
    }
}

/// Per-cell scratch state, rebuilt from nothing on every solve call.
struct Scratch {
    legality: Box<[i16]>, // per letter value: -1 illegal, >= 0 extra cross credit
    no_begin: bool,
    no_end: bool,
    connected: bool,
    min_run: i8,
    max_run: i8,
    fixed_run_freq: Option<Box<[u8]>>,
}

impl Board {
    pub fn new(
        width: i8,
        height: i8,
        dictionary: dictionary::Dictionary,
        alphabet: alphabet::Alphabet,
        scoring: scoring::Scoring,
    ) -> Board {
        let size = (width as usize) * (height as usize);
        let mut bonuses = Vec::with_capacity(size);
        for y in 0..height {
            for x in 0..width {
                bonuses.push(scoring.bonus_for(x, y));
            }
        }
        Board {
            width,
            height,
            letters: vec![alphabet::EMPTY; size].into_boxed_slice(),
            bonuses: bonuses.into_boxed_slice(),
            dictionary,
            alphabet,
            scoring,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    #[inline(always)]
    pub fn width(&self) -> i8 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> i8 {
        self.height
    }

    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet {
        &self.alphabet
    }

    #[inline(always)]
    pub fn scoring(&self) -> &scoring::Scoring {
        &self.scoring
    }

    #[inline(always)]
    pub fn dictionary(&self) -> &dictionary::Dictionary {
        &self.dictionary
    }

    pub fn set_max_results(&mut self, max_results: usize) {
        self.max_results = max_results;
    }

    #[inline(always)]
    fn at(&self, x: i8, y: i8) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn letter_code(&self, x: i8, y: i8) -> char {
        self.alphabet.token_for_value(self.letters[self.at(x, y)])
    }

    pub fn set_letter_code(&mut self, x: i8, y: i8, code: char) -> error::Returns<()> {
        let value = self.alphabet.value_for_token(code)?;
        self.letters[self.at(x, y)] = value;
        Ok(())
    }

    #[inline(always)]
    pub fn bonus_at(&self, x: i8, y: i8) -> i16 {
        self.bonuses[self.at(x, y)]
    }

    pub fn clear(&mut self) {
        self.letters.fill(alphabet::EMPTY);
    }

    /// Persisted form: `height` lines of exactly `width` characters.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.width as usize + 1) * (self.height as usize));
        for y in 0..self.height {
            for x in 0..self.width {
                text.push(self.letter_code(x, y));
            }
            text.push('\n');
        }
        text
    }

    /// Replaces the board content from persisted text. Any dimension
    /// mismatch or unknown character leaves the current board unchanged.
    pub fn set_from_text(&mut self, text: &str) -> error::Returns<()> {
        let mut staged = Vec::with_capacity(self.letters.len());
        let mut num_rows = 0i16;
        for line in text.lines() {
            num_rows += 1;
            let mut num_cols = 0i16;
            for code in line.chars() {
                num_cols += 1;
                staged.push(self.alphabet.value_for_token(code)?);
            }
            if num_cols != self.width as i16 {
                return Err(error::Error::BadBoardText(format!(
                    "row {} (0-based): need {} cols, found {}",
                    num_rows - 1,
                    self.width,
                    num_cols
                )));
            }
        }
        if num_rows != self.height as i16 {
            return Err(error::Error::BadBoardText(format!(
                "need {} rows, found {}",
                self.height, num_rows
            )));
        }
        self.letters.copy_from_slice(&staged);
        Ok(())
    }

    /// Computes all legal placements for the rack, ranked by credit, plus
    /// a diagnostic report. The transposed orientation runs first and its
    /// combos are mirrored into native coordinates.
    pub fn solve(&self, tokens: &str) -> error::Returns<(Vec<combo::Combo>, String)> {
        let mut report = String::new();
        let _ = writeln!(
            report,
            "----------------------------------------------------------------"
        );
        let _ = writeln!(report, "solving: {tokens}");
        let (rack_freq, joker_count) = self.alphabet.frequency_of(tokens)?;
        let letter_count = rack_freq[rack_freq.len() - 1];
        let token_count = letter_count + joker_count;
        let default_key = self.alphabet.frequency_to_string(&rack_freq);
        let _ = writeln!(
            report,
            "frequency: {default_key}  jokers: {joker_count}  total: {token_count}"
        );
        let _ = writeln!(report, "using: {}", self.dictionary);

        let mut cache = FxHashMap::<String, dictionary::Dictionary>::default();
        cache.insert(
            default_key.clone(),
            self.dictionary.filter_by_rack(&rack_freq, joker_count),
        );

        let mut result = combo::ResultSet::new(self.max_results);
        let mut transposed_result = combo::ResultSet::new(self.max_results);
        self.solve_one_orientation(
            View {
                board: self,
                transposed: true,
            },
            &rack_freq,
            joker_count,
            &default_key,
            &mut cache,
            &mut transposed_result,
        );
        for combo in transposed_result.into_vec() {
            result.add(combo.mirror());
        }
        self.solve_one_orientation(
            View {
                board: self,
                transposed: false,
            },
            &rack_freq,
            joker_count,
            &default_key,
            &mut cache,
            &mut result,
        );

        let _ = writeln!(report, "dictionary-cache size: {}", cache.len());
        if cache.len() < MAX_CACHE_KEYS_IN_REPORT {
            let mut keys = cache.keys().collect::<Vec<_>>();
            keys.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
            for key in keys {
                let _ = writeln!(report, "  {} = {}", key, cache[key]);
            }
        }
        Ok((result.into_vec(), report))
    }

    fn solve_one_orientation(
        &self,
        view: View<'_>,
        rack_freq: &[u8],
        joker_count: u8,
        default_key: &str,
        cache: &mut FxHashMap<String, dictionary::Dictionary>,
        out: &mut combo::ResultSet,
    ) {
        let size = (view.main_len() as usize) * (view.cross_len() as usize);
        let mut scratch = Vec::with_capacity(size);
        for _ in 0..size {
            scratch.push(Scratch {
                legality: vec![-1i16; self.alphabet.len() as usize].into_boxed_slice(),
                no_begin: false,
                no_end: false,
                connected: false,
                min_run: 0,
                max_run: 0,
                fixed_run_freq: None,
            });
        }
        self.refresh_legality(view, &mut scratch);
        self.refresh_flags(view, &mut scratch);
        let token_count = rack_freq[rack_freq.len() - 1] + joker_count;
        refresh_run_bounds(view, token_count, &mut scratch);
        self.collect_combos(
            view,
            &scratch,
            rack_freq,
            joker_count,
            default_key,
            cache,
            out,
        );
    }

    // Phase A: per-letter legality with cross-word credit, from the
    // single-wildcard cross pattern at each open cell.
    fn refresh_legality(&self, view: View<'_>, scratch: &mut [Scratch]) {
        for u in 0..view.main_len() {
            for v in 0..view.cross_len() {
                let cell = &mut scratch[view.index(u, v)];
                let letter = view.letter(u, v);
                if letter == alphabet::EMPTY {
                    let pattern = cross_pattern(view, u, v);
                    if pattern.len() == 1 {
                        // no perpendicular neighbors, anything goes
                        cell.legality.fill(0);
                    } else {
                        cell.legality.fill(-1);
                        self.dictionary.mark_allowed(
                            &pattern,
                            &mut cell.legality,
                            view.bonus(u, v),
                            &self.scoring,
                        );
                    }
                } else if letter == alphabet::JOKER {
                    // the first-move marker on an otherwise-empty board
                    cell.legality.fill(0);
                } else {
                    cell.legality.fill(-1);
                    cell.legality[letter as usize] = 0;
                }
            }
        }
    }

    // Phase B: structural flags and fixed-run frequencies.
    fn refresh_flags(&self, view: View<'_>, scratch: &mut [Scratch]) {
        for u in 0..view.main_len() {
            for v in 0..view.cross_len() {
                let here = view.letter(u, v);
                let before = view.letter(u - 1, v);
                let cell = &mut scratch[view.index(u, v)];
                cell.no_begin = before != alphabet::EMPTY;
                cell.no_end = view.letter(u + 1, v) != alphabet::EMPTY;
                cell.connected = here != alphabet::EMPTY
                    || view.letter(u, v - 1) != alphabet::EMPTY
                    || view.letter(u, v + 1) != alphabet::EMPTY;
                cell.fixed_run_freq = if before == alphabet::EMPTY
                    && here != alphabet::EMPTY
                    && here != alphabet::JOKER
                {
                    Some(run_frequency(view, u, v, &self.alphabet))
                } else {
                    None
                };
            }
        }
    }

    // Phase D: walk candidate spans from each start cell, keeping the
    // running required frequency, and offer every accepted word.
    #[allow(clippy::too_many_arguments)]
    fn collect_combos(
        &self,
        view: View<'_>,
        scratch: &[Scratch],
        rack_freq: &[u8],
        joker_count: u8,
        default_key: &str,
        cache: &mut FxHashMap<String, dictionary::Dictionary>,
        out: &mut combo::ResultSet,
    ) {
        let token_count = rack_freq[rack_freq.len() - 1] + joker_count;
        for u in 0..view.main_len() {
            for v in 0..view.cross_len() {
                let start = &scratch[view.index(u, v)];
                if start.no_begin || start.min_run == 0 || start.max_run <= 1 {
                    continue;
                }
                let mut freq_sum: Option<Box<[u8]>> = None;
                let mut l = 0i8;
                while l < start.max_run {
                    if view.letter(u + l, v) != alphabet::EMPTY {
                        // a fixed run's shape is not chosen, absorb it in
                        // one step. the first-move marker has no run and
                        // constrains nothing.
                        if let Some(run_freq) = scratch[view.index(u + l, v)].fixed_run_freq.as_ref()
                        {
                            let sum = freq_sum
                                .get_or_insert_with(|| rack_freq.to_vec().into_boxed_slice());
                            for (have, add) in sum.iter_mut().zip(run_freq.iter()) {
                                *have += add;
                            }
                            l += run_freq[run_freq.len() - 1] as i8 - 1;
                        }
                    }
                    let end = &scratch[view.index(u + l, v)];
                    if l + 1 >= start.min_run && !end.no_end {
                        let candidate_dict = match &freq_sum {
                            None => cache.get(default_key),
                            Some(sum) => {
                                let key = self.alphabet.frequency_to_string(sum);
                                Some(&*cache.entry(key).or_insert_with(|| {
                                    self.dictionary.filter_by_rack(sum, joker_count)
                                }))
                            }
                        };
                        if let Some(set) =
                            candidate_dict.and_then(|dict| dict.words_of_len((l + 1) as u8))
                        {
                            'words: for word in set {
                                let mut empties = 0u8;
                                for (idx, &value) in (0i8..).zip(word.values().iter()) {
                                    let covered = &scratch[view.index(u + idx, v)];
                                    if covered.legality[value as usize] < 0 {
                                        continue 'words;
                                    }
                                    if view.letter(u + idx, v) == alphabet::EMPTY {
                                        empties += 1;
                                    }
                                }
                                let cells = (0i8..l + 1)
                                    .map(|idx| (view.letter(u + idx, v), view.bonus(u + idx, v)))
                                    .collect::<Vec<_>>();
                                let credit = self.scoring.score_full_placement(
                                    word,
                                    empties == token_count,
                                    &cells,
                                );
                                out.add(combo::Combo::new(
                                    word.clone(),
                                    u,
                                    v,
                                    combo::Orientation::Horizontal,
                                    credit,
                                ));
                            }
                        }
                    }
                    l += 1;
                }
            }
        }
    }
}

// The contiguous already-placed run crossing `(u, v)` on the other axis,
// with a single open slot at this cell's position.
fn cross_pattern(view: View<'_>, u: i8, v: i8) -> Vec<i8> {
    let mut pattern = Vec::new();
    let mut i = v - 1;
    while view.letter(u, i) != alphabet::EMPTY {
        pattern.push(view.letter(u, i));
        i -= 1;
    }
    pattern.reverse();
    pattern.push(alphabet::EMPTY);
    let mut i = v + 1;
    while view.letter(u, i) != alphabet::EMPTY {
        pattern.push(view.letter(u, i));
        i += 1;
    }
    pattern
}

// Frequency of the fixed letter run starting at `(u, v)`; the trailing
// slot holds the run length for the skip-ahead in phase D.
fn run_frequency(view: View<'_>, u: i8, v: i8, alphabet: &alphabet::Alphabet) -> Box<[u8]> {
    let mut freq = alphabet.new_frequency();
    let mut i = u;
    while view.letter(i, v) != alphabet::EMPTY {
        let value = view.letter(i, v);
        if value >= 0 {
            freq[value as usize] += 1;
        }
        i += 1;
    }
    freq[alphabet.len() as usize] = (i - u) as u8;
    freq
}

// Phase C: shortest and longest feasible span from each start cell. A
// span is feasible when it fits the empty-slot budget, touches the
// existing tiles somewhere, and its end cell has a free successor.
fn refresh_run_bounds(view: View<'_>, token_count: u8, scratch: &mut [Scratch]) {
    for u in 0..view.main_len() {
        for v in 0..view.cross_len() {
            let no_begin = scratch[view.index(u, v)].no_begin;
            let mut min_run = 0i8;
            let mut max_run = 0i8;
            if !no_begin {
                let mut empties = 0u8;
                let mut connected = false;
                for i in 0..view.main_len() - u {
                    let cell = &scratch[view.index(u + i, v)];
                    if view.letter(u + i, v) == alphabet::EMPTY {
                        empties += 1;
                        if empties > token_count {
                            break;
                        }
                    }
                    connected = connected || cell.connected;
                    if connected && !cell.no_end && empties > 0 {
                        max_run = i + 1;
                        if min_run == 0 {
                            min_run = i + 1;
                        }
                    }
                }
            }
            let cell = &mut scratch[view.index(u, v)];
            cell.min_run = min_run;
            cell.max_run = max_run;
        }
    }
}
