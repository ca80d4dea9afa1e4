//! Tree indentation from traversal contexts
//!
//! Whether a column shows a continuation bar depends on whether the ancestor
//! at that depth still has siblings to come, which a node's own context does
//! not say. The renderer therefore keeps the set of open branch levels and
//! must see every rendered node, in pre-order, through
//! [`TreeRenderer::update_active_branch_levels`].
//!
//! ```text
//! HQ
//! ├── Department A
//! │   ├── Employee 1
//! │   └── Employee 2
//! └── Department B
//! ```
//!
//! The root is printed by the caller without a prefix, so its column is not
//! drawn: children of the root start directly with a branch glyph.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::application::style::Paint;
use crate::domain::Context;

/// Glyph table for tree drawing. All entries share one display width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeGlyphs {
    pub end: String,
    pub middle: String,
    pub line: String,
    pub indent_space: String,
}

impl TreeGlyphs {
    pub fn unicode() -> Self {
        Self {
            end: "└── ".into(),
            middle: "├── ".into(),
            line: "│   ".into(),
            indent_space: "    ".into(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            end: "`-- ".into(),
            middle: "|-- ".into(),
            line: "|   ".into(),
            indent_space: "    ".into(),
        }
    }
}

impl Default for TreeGlyphs {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Glyphs plus the style applied to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    pub style: Paint,
    pub glyphs: TreeGlyphs,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            style: Paint::Dim,
            glyphs: TreeGlyphs::unicode(),
        }
    }
}

impl TreeConfig {
    pub fn plain() -> Self {
        Self {
            style: Paint::Plain,
            glyphs: TreeGlyphs::unicode(),
        }
    }
}

/// Stateful indentation renderer, scoped to one walk.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    config: TreeConfig,
    active_levels: BTreeSet<usize>,
}

impl TreeRenderer {
    pub fn new(config: TreeConfig) -> Self {
        Self {
            config,
            active_levels: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Prefix for a node: one column per ancestor below the root, then the
    /// branch glyph for the node itself.
    pub fn render_indent<C: Context>(&self, context: &C) -> String {
        let glyphs = &self.config.glyphs;
        let columns = (1..context.level())
            .map(|level| {
                if self.active_levels.contains(&level) {
                    self.config.style.apply(&glyphs.line)
                } else {
                    glyphs.indent_space.clone()
                }
            })
            .join("");
        let branch = if context.is_last() {
            &glyphs.end
        } else {
            &glyphs.middle
        };
        columns + &self.config.style.apply(branch)
    }

    /// Record the node just rendered. A non-last node opens its level so its
    /// descendants draw a bar there, a last node closes it.
    pub fn update_active_branch_levels<C: Context>(&mut self, context: &C) {
        if context.is_last() {
            self.active_levels.remove(&context.level());
        } else {
            self.active_levels.insert(context.level());
        }
    }

    pub fn is_active(&self, level: usize) -> bool {
        self.active_levels.contains(&level)
    }

    /// Forget all open branches.
    pub fn reset(&mut self) {
        self.active_levels.clear();
    }
}
