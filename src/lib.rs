// Copyright (C) 2020-2026 Andy Kurnia.

pub mod alphabet;
pub mod board;
pub mod combo;
pub mod dictionary;
pub mod display;
pub mod error;
pub mod lang;
pub mod scoring;
pub mod word;
