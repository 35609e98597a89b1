//! Waypoint &ndash; compiles nested route definitions into flat, named route tables.
//!
//! Routes are described as a tree of path fragments. A fragment is a small template made of
//! literal text and `<name:type>` parameters; each fragment routes either to a target or to a
//! further tree. Compiling the tree produces a `RouteTable` of anchored regex patterns, in
//! depth-first order, each paired with its target and a derived name.
//!
//! ```rust
//! use waypoint::tree::{build_tree, DrawRoutes, RouteTree};
//!
//! let tree: RouteTree<()> = build_tree(|route| {
//!     route.to("", "views.home");
//!     route.scope("articles", |route| {
//!         route.to("<year:int>", "views.year_archive");
//!         route.to("<year:int>/<slug>", "views.article");
//!     });
//! });
//!
//! let table = waypoint::compile(Some("news"), &tree).unwrap();
//!
//! assert_eq!(table[0].pattern(), "^$");
//! assert_eq!(table[1].pattern(), r"^articles/(?P<year>\d+)/$");
//! assert_eq!(table[2].target().as_reference(), Some("news.views.article"));
//! assert_eq!(table[2].name(), Some("article"));
//! ```
//!
//! Compilation is pure and synchronous. It never consults anything but the tree and the
//! `MatcherRegistry`, and the resulting table can be shared freely between threads.
#![warn(missing_docs, deprecated)]
#![doc(test(no_crate_inject, attr(deny(warnings))))]

pub mod compiler;
pub mod config;
pub mod error;
pub mod matcher;
pub mod table;
pub mod template;
pub mod tree;

pub use crate::compiler::Compiler;
pub use crate::error::{Error, MalformedReason, Result};
pub use crate::table::{CompiledRoute, RouteTable};
pub use crate::tree::{RouteTree, Target};

/// Compiles `tree` with the built-in matchers, prepending `prefix` to every handler reference.
///
/// This is shorthand for `Compiler::new().with_prefix(prefix).compile(tree)`; use a `Compiler`
/// directly to register matchers or set a route name prefix.
pub fn compile<H>(prefix: Option<&str>, tree: &RouteTree<H>) -> Result<RouteTable<H>>
where
    H: Clone,
{
    let compiler = match prefix {
        Some(prefix) => Compiler::new().with_prefix(prefix),
        None => Compiler::new(),
    };

    compiler.compile(tree)
}
