//! orgtree: visitor-driven traversal and reporting over organisation trees
//!
//! Layers:
//! - `domain`: units, traversal context, visitor contract and the four walks
//! - `application`: tree and organisation renderers, concrete visitors, report service
//! - `infrastructure`: filesystem, document loader, service container
//! - `cli`: argument parsing, command dispatch, exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
