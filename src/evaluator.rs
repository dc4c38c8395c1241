//! The tree access needed by [`select`](crate::select()).

/// Queries a tree of nodes.
///
/// The selector language and node representation belong to the implementor;
/// [`select`](crate::select()) only calls these two methods.
pub trait Evaluator {
    type Node;

    /// The error returned when a selector cannot be run.
    type Error: std::error::Error;

    /// Returns `true` if `node` is an element that can be queried.
    fn is_element(&self, node: &Self::Node) -> bool;

    /// Returns the descendants of `node` matching `selector`, in document order.
    fn query_selector_all(
        &self,
        node: &Self::Node,
        selector: &str,
    ) -> Result<Vec<Self::Node>, Self::Error>;
}
