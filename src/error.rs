/// Errors reported by the bounded stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// Construction was asked for a capacity that cannot hold any element.
    #[error("invalid stack capacity {requested}: must be larger than 0")]
    InvalidCapacity { requested: usize },
    /// A push hit a stack already holding `capacity` elements.
    #[error("cannot push onto a full stack of capacity {capacity}")]
    Overflow { capacity: usize },
    /// A pop or peek hit an empty stack.
    #[error("cannot pop or peek an empty stack")]
    Underflow,
}
