// Copyright (C) 2020-2026 Andy Kurnia.

pub enum Error {
    DuplicateCode(char),
    UnknownToken(char),
    BadBoardText(String),
    UnknownLanguage(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DuplicateCode(code) => write!(f, "code already in alphabet: {code:?}"),
            Error::UnknownToken(code) => write!(f, "token not in alphabet: {code:?}"),
            Error::BadBoardText(s) => write!(f, "unable to load board: {s}"),
            Error::UnknownLanguage(s) => write!(f, "no such language: {s}"),
            Error::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

pub type Returns<T> = Result<T, Error>;
