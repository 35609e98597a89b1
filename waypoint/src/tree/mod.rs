//! Defines `RouteTree`, the nested route definitions a `Compiler` consumes.
//!
//! A tree maps path fragments to `RouteNode` values, each either a `Leaf` holding a `Target` or a
//! `Branch` holding another tree. Entries keep their insertion order, which becomes the order of
//! the compiled `RouteTable` and therefore its match precedence.

mod builder;
mod document;

use linked_hash_map::{Iter, LinkedHashMap};

pub use self::builder::{build_tree, DrawRoutes, ScopeBuilder, TreeBuilder};
pub use self::document::RouteDocument;

/// What a route dispatches to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target<H> {
    /// A dotted path naming a handler, such as `app.views.show`, resolved by the consumer of the
    /// compiled table.
    Reference(String),

    /// A handler value supplied directly.
    Handler(DirectHandler<H>),
}

impl<H> Target<H> {
    /// Creates a `Target::Reference` from a dotted path.
    pub fn reference<S>(dotted_path: S) -> Self
    where
        S: Into<String>,
    {
        Target::Reference(dotted_path.into())
    }

    /// Creates a `Target::Handler` with an identifier, used to name the compiled route.
    pub fn handler<S>(identifier: S, handler: H) -> Self
    where
        S: Into<String>,
    {
        Target::Handler(DirectHandler::new(Some(identifier.into()), handler))
    }

    /// Creates a `Target::Handler` without an identifier. Routes to it are compiled without a
    /// name.
    pub fn anonymous(handler: H) -> Self {
        Target::Handler(DirectHandler::new(None, handler))
    }

    /// The dotted path of a `Reference` target.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Target::Reference(path) => Some(path),
            Target::Handler(_) => None,
        }
    }

    /// The handler value of a `Handler` target.
    pub fn as_handler(&self) -> Option<&H> {
        match self {
            Target::Reference(_) => None,
            Target::Handler(direct) => Some(direct.handler()),
        }
    }
}

impl<H> From<&str> for Target<H> {
    fn from(dotted_path: &str) -> Self {
        Target::reference(dotted_path)
    }
}

impl<H> From<String> for Target<H> {
    fn from(dotted_path: String) -> Self {
        Target::Reference(dotted_path)
    }
}

/// A handler value together with the identifier it is known by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectHandler<H> {
    identifier: Option<String>,
    handler: H,
}

impl<H> DirectHandler<H> {
    /// Creates a `DirectHandler`. An empty identifier is treated as absent.
    pub fn new(identifier: Option<String>, handler: H) -> Self {
        DirectHandler {
            identifier: identifier.filter(|id| !id.is_empty()),
            handler,
        }
    }

    /// The identifier the handler is known by.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// The handler value.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Consumes the `DirectHandler`, returning the handler value.
    pub fn into_handler(self) -> H {
        self.handler
    }
}

/// Builds a `Target::Handler` from a function path, using the final path component as the
/// handler's identifier.
///
/// ```rust
/// # use waypoint::handler;
/// # use waypoint::tree::Target;
/// mod views {
///     pub fn show() -> &'static str { "show" }
/// }
///
/// let target: Target<fn() -> &'static str> = handler!(views::show);
/// match target {
///     Target::Handler(direct) => assert_eq!(direct.identifier(), Some("show")),
///     Target::Reference(_) => unreachable!(),
/// }
/// ```
///
/// Where the handler type cannot be inferred from context, name it with `as`:
///
/// ```rust
/// # use waypoint::handler;
/// # use waypoint::tree::{build_tree, DrawRoutes, RouteTree};
/// fn health() {}
///
/// let tree: RouteTree<fn()> = build_tree(|route| {
///     route.to("health", handler!(health as fn()));
/// });
/// # assert_eq!(tree.len(), 1);
/// ```
#[macro_export]
macro_rules! handler {
    (@identifier $handler:path) => {
        stringify!($handler)
            .rsplit("::")
            .next()
            .unwrap_or_default()
            .trim()
    };
    ($handler:path as $ty:ty) => {
        $crate::tree::Target::handler($crate::handler!(@identifier $handler), $handler as $ty)
    };
    ($handler:path) => {
        $crate::tree::Target::handler($crate::handler!(@identifier $handler), $handler)
    };
}

/// A value in a `RouteTree`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteNode<H> {
    /// Routes the fragment to a target.
    Leaf(Target<H>),

    /// Nests further fragments below this one.
    Branch(RouteTree<H>),
}

/// An insertion-ordered mapping of path fragments to `RouteNode` values.
///
/// The empty fragment `""` is the root sentinel: it matches the base of whatever tree it appears
/// in without adding a path segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTree<H> {
    entries: LinkedHashMap<String, RouteNode<H>>,
}

impl<H> RouteTree<H> {
    /// Creates an empty `RouteTree`.
    pub fn new() -> Self {
        RouteTree {
            entries: LinkedHashMap::new(),
        }
    }

    /// Adds a leaf routing `fragment` to `target`.
    ///
    /// An existing entry for `fragment` is replaced in place, keeping its position.
    pub fn route<F, T>(&mut self, fragment: F, target: T) -> &mut Self
    where
        F: Into<String>,
        T: Into<Target<H>>,
    {
        self.insert(fragment.into(), RouteNode::Leaf(target.into()));
        self
    }

    /// Adds a nested tree below `fragment`.
    ///
    /// An existing entry for `fragment` is replaced in place, keeping its position.
    pub fn nest<F>(&mut self, fragment: F, tree: RouteTree<H>) -> &mut Self
    where
        F: Into<String>,
    {
        self.insert(fragment.into(), RouteNode::Branch(tree));
        self
    }

    /// Adds `node` below `fragment`, replacing an existing entry in place.
    pub fn insert(&mut self, fragment: String, node: RouteNode<H>) {
        match self.entries.get_mut(&fragment) {
            Some(existing) => *existing = node,
            None => {
                self.entries.insert(fragment, node);
            }
        }
    }

    /// Borrows the node stored for `fragment`.
    pub fn get(&self, fragment: &str) -> Option<&RouteNode<H>> {
        self.entries.get(fragment)
    }

    /// Borrows the node stored for `fragment` as mutable.
    pub fn get_mut(&mut self, fragment: &str) -> Option<&mut RouteNode<H>> {
        self.entries.get_mut(fragment)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, RouteNode<H>> {
        self.entries.iter()
    }

    /// The number of direct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H> Default for RouteTree<H> {
    fn default() -> Self {
        RouteTree::new()
    }
}

impl<'a, H> IntoIterator for &'a RouteTree<H> {
    type Item = (&'a String, &'a RouteNode<H>);
    type IntoIter = Iter<'a, String, RouteNode<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show() {}

    #[test]
    fn tree_keeps_insertion_order_tests() {
        let mut tree: RouteTree<()> = RouteTree::new();
        tree.route("zeta", "views.zeta")
            .route("alpha", "views.alpha")
            .route("", "views.index");

        let fragments: Vec<&str> = tree.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fragments, vec!["zeta", "alpha", ""]);
    }

    #[test]
    fn replacing_entry_keeps_position_tests() {
        let mut tree: RouteTree<()> = RouteTree::new();
        tree.route("a", "views.a")
            .route("b", "views.b")
            .route("a", "views.other");

        let fragments: Vec<&str> = tree.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fragments, vec!["a", "b"]);
        assert_eq!(
            tree.get("a"),
            Some(&RouteNode::Leaf(Target::reference("views.other")))
        );
    }

    #[test]
    fn target_constructors_tests() {
        let target: Target<()> = "app.views.show".into();
        assert_eq!(target.as_reference(), Some("app.views.show"));
        assert!(target.as_handler().is_none());

        let target = Target::handler("", 7);
        match target {
            Target::Handler(ref direct) => assert_eq!(direct.identifier(), None),
            Target::Reference(_) => panic!("expected a handler target"),
        }
        assert_eq!(target.as_handler(), Some(&7));
    }

    #[test]
    fn handler_macro_tests() {
        let target: Target<fn()> = handler!(show);
        match target {
            Target::Handler(direct) => assert_eq!(direct.identifier(), Some("show")),
            Target::Reference(_) => panic!("expected a handler target"),
        }

        let target = handler!(self::show as fn());
        match target {
            Target::Handler(direct) => assert_eq!(direct.identifier(), Some("show")),
            Target::Reference(_) => panic!("expected a handler target"),
        }
    }
}
