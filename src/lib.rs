//! Bounded-cardinality node selection.
//!
//! A selector is run against a subject node through an [`Evaluator`], and the
//! number of matches is checked against a [`Bound`] compiled from an optional
//! quantifier expression such as `{1,}`, `{0,}[2]` or `[0]`.

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc)]

pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod quantifier;
pub mod select;

pub use self::{
    evaluator::Evaluator,
    lexer::{Lexer, Token},
    parser::parse_quantifier,
    quantifier::{Bound, Index, Limit, Quantifier, compile},
    select::{Selection, select},
};

use std::convert::Infallible;

/// The error type of this crate.
///
/// `E` is the error of the [`Evaluator`] used by [`select()`]; everything that
/// does not touch an evaluator uses the uninhabited default.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error<E = Infallible> {
    /// The subject handed to [`select()`] is not an element.
    #[error("unexpected value; value must be an element")]
    UnsupportedSubject,

    /// The selector matched a number of nodes outside the accepted range.
    #[error("selector matched {count} node(s); expected between {min} and {max}")]
    UnexpectedResultCount { count: usize, min: usize, max: Limit },

    /// A byte that cannot start any quantifier token.
    #[error("unexpected '{}' in quantifier expression at {pos}", lit.escape_ascii())]
    UnexpectedByte { pos: usize, lit: u8 },

    /// An integer literal does not fit in `usize`.
    #[error("number too large in quantifier expression at {pos}")]
    NumberOverflow { pos: usize },

    /// A token of an unexpected type was encountered.
    #[error("expected {expected}, got {actual} at {pos}")]
    UnexpectedToken {
        pos: usize,
        expected: &'static str,
        actual: Token,
    },

    #[error("unexpected end of quantifier expression at {pos}")]
    UnexpectedEnd { pos: usize },

    /// The evaluator failed to run the selector.
    #[error("{0}")]
    Evaluator(E),
}

impl Error {
    /// Converts an error raised without an evaluator into the error type of
    /// any evaluator.
    #[must_use]
    pub fn widen<E>(self) -> Error<E> {
        match self {
            Error::UnsupportedSubject => Error::UnsupportedSubject,
            Error::UnexpectedResultCount { count, min, max } => {
                Error::UnexpectedResultCount { count, min, max }
            }
            Error::UnexpectedByte { pos, lit } => Error::UnexpectedByte { pos, lit },
            Error::NumberOverflow { pos } => Error::NumberOverflow { pos },
            Error::UnexpectedToken {
                pos,
                expected,
                actual,
            } => Error::UnexpectedToken {
                pos,
                expected,
                actual,
            },
            Error::UnexpectedEnd { pos } => Error::UnexpectedEnd { pos },
            Error::Evaluator(never) => match never {},
        }
    }
}

pub type Result<T, E = Infallible> = std::result::Result<T, Error<E>>;
