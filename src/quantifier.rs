pub mod bound;

pub use self::bound::{Bound, Index, Limit};

use super::{Result, parser::parse_quantifier};

/// The raw fields of a parsed quantifier expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quantifier {
    pub index: Option<usize>,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl std::str::FromStr for Quantifier {
    type Err = super::Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_quantifier(s)
    }
}

impl From<Quantifier> for Bound {
    fn from(quantifier: Quantifier) -> Self {
        // A maximum of one always means "the first match, if any", whatever
        // index or minimum was written alongside it.
        if quantifier.max == Some(1) {
            return Bound::OPTIONAL_ONE;
        }

        Bound {
            index: quantifier.index.map_or(Index::All, Index::At),
            min: quantifier.min.unwrap_or(0),
            max: quantifier.max.into(),
        }
    }
}

/// Compiles an optional quantifier expression into a [`Bound`].
///
/// A missing or empty expression yields [`Bound::EXACTLY_ONE`].
///
/// # Errors
///
/// Parse failures of the expression are returned unchanged.
pub fn compile(expression: Option<&str>) -> Result<Bound> {
    match expression {
        None | Some("") => Ok(Bound::default()),
        Some(expression) => Ok(parse_quantifier(expression)?.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantifier(index: Option<usize>, min: Option<usize>, max: Option<usize>) -> Quantifier {
        Quantifier { index, min, max }
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        assert_eq!(
            Bound::from(Quantifier::default()),
            Bound {
                index: Index::All,
                min: 0,
                max: Limit::Unbounded
            }
        );
        assert_eq!(
            Bound::from(quantifier(Some(2), None, None)),
            Bound {
                index: Index::At(2),
                min: 0,
                max: Limit::Unbounded
            }
        );
    }

    #[test]
    fn test_max_one_collapses() {
        assert_eq!(Bound::from(quantifier(None, Some(1), Some(1))), Bound::OPTIONAL_ONE);
        assert_eq!(Bound::from(quantifier(Some(3), Some(1), Some(1))), Bound::OPTIONAL_ONE);
        assert_eq!(Bound::from(quantifier(None, None, Some(1))), Bound::OPTIONAL_ONE);
    }

    #[test]
    fn test_max_zero_does_not_collapse() {
        assert_eq!(
            Bound::from(quantifier(None, Some(0), Some(0))),
            Bound {
                index: Index::All,
                min: 0,
                max: Limit::At(0)
            }
        );
    }

    #[test]
    fn test_permits() {
        let bound = Bound {
            index: Index::All,
            min: 2,
            max: Limit::At(4),
        };
        assert!(!bound.permits(1));
        assert!(bound.permits(2));
        assert!(bound.permits(4));
        assert!(!bound.permits(5));

        assert!(Bound::from(Quantifier::default()).permits(usize::MAX));
    }
}
