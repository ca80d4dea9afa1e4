//! Traversal context passed down a walk
//!
//! ```text
//! A          // level 0, last: false
//! ├── C      // level 1, last: false
//! │   ├── D  // level 2, last: false
//! │   └── E  // level 2, last: true
//! └── B      // level 1, last: true
//! ```

/// Position information a walk hands to every callback.
///
/// Implementors may carry additional fields. The engine only ever changes
/// the position through [`Context::with_position`], everything else is
/// copied from parent to child unchanged.
pub trait Context: Clone {
    /// Depth of the node, the root is level 0.
    fn level(&self) -> usize;

    /// True iff the node is the final element of its parent's sequence.
    fn is_last(&self) -> bool;

    /// Copy of `self` with the position replaced.
    fn with_position(&self, level: usize, last: bool) -> Self;
}

/// Plain `{level, last}` context used by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TraversalContext {
    pub level: usize,
    pub last: bool,
}

impl TraversalContext {
    pub fn new(level: usize, last: bool) -> Self {
        Self { level, last }
    }

    /// Context of the node a walk starts from.
    pub fn root() -> Self {
        Self::default()
    }
}

impl Context for TraversalContext {
    fn level(&self) -> usize {
        self.level
    }

    fn is_last(&self) -> bool {
        self.last
    }

    fn with_position(&self, level: usize, last: bool) -> Self {
        Self { level, last }
    }
}

/// Context carrying a caller supplied payload through the whole walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotated<E> {
    pub position: TraversalContext,
    pub extra: E,
}

impl<E> Annotated<E> {
    pub fn root(extra: E) -> Self {
        Self {
            position: TraversalContext::root(),
            extra,
        }
    }
}

impl<E: Clone> Context for Annotated<E> {
    fn level(&self) -> usize {
        self.position.level
    }

    fn is_last(&self) -> bool {
        self.position.last
    }

    fn with_position(&self, level: usize, last: bool) -> Self {
        Self {
            position: TraversalContext::new(level, last),
            extra: self.extra.clone(),
        }
    }
}

/// Context of the `index`-th of `total` children of the node at `parent`.
pub fn child_context<C: Context>(parent: &C, index: usize, total: usize) -> C {
    parent.with_position(parent.level() + 1, index + 1 == total)
}
