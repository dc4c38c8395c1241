mod selection;

pub use self::selection::Selection;

use super::{
    Error, Evaluator, Result,
    quantifier::{Index, compile},
};
use tracing::debug;

/// Selects descendants of `subject` matching `selector`, checking the number
/// of matches against `quantifier`.
///
/// Without a quantifier expression exactly one match is required and that
/// node is returned.
///
/// # Errors
///
/// - [`Error::UnsupportedSubject`] if `subject` is not an element. The
///   evaluator is not queried.
/// - [`Error::UnexpectedResultCount`] if the match count falls outside the
///   bound compiled from `quantifier`.
/// - [`Error::Evaluator`] with the evaluator's own error if the query fails.
/// - Any parse error of `quantifier`, unchanged.
pub fn select<E: Evaluator + ?Sized>(
    subject: &E::Node,
    selector: &str,
    quantifier: Option<&str>,
    evaluator: &E,
) -> Result<Selection<E::Node>, E::Error> {
    debug!(target: "select", "selecting \"{selector}\"");

    if !evaluator.is_element(subject) {
        return Err(Error::UnsupportedSubject);
    }

    let matches = evaluator
        .query_selector_all(subject, selector)
        .map_err(Error::Evaluator)?;

    let bound = compile(quantifier).map_err(|err| err.widen())?;

    let count = matches.len();
    debug!(target: "select", "selector \"{selector}\" matched {count} node(s)");

    if !bound.permits(count) {
        debug!(
            target: "select",
            "expected to match between {} and {} node(s)", bound.min, bound.max
        );

        return Err(Error::UnexpectedResultCount {
            count,
            min: bound.min,
            max: bound.max,
        });
    }

    Ok(match bound.index {
        Index::All => Selection::Nodes(matches),
        Index::At(index) => matches
            .into_iter()
            .nth(index)
            .map_or(Selection::Absent, Selection::Node),
    })
}
