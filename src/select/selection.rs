/// The result of a successful [`select`](crate::select()).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<N> {
    /// The node at the requested position.
    Node(N),
    /// Every match, in the order the evaluator returned them.
    Nodes(Vec<N>),
    /// No node at the requested position, and none was required.
    Absent,
}

impl<N> Selection<N> {
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Selection::Absent)
    }

    /// Returns the single selected node, if any.
    #[must_use]
    pub fn into_node(self) -> Option<N> {
        match self {
            Selection::Node(node) => Some(node),
            Selection::Nodes(_) | Selection::Absent => None,
        }
    }

    /// Returns the selected sequence, if the whole sequence was requested.
    #[must_use]
    pub fn into_nodes(self) -> Option<Vec<N>> {
        match self {
            Selection::Nodes(nodes) => Some(nodes),
            Selection::Node(_) | Selection::Absent => None,
        }
    }
}
