//! Defines a closure-based builder API for constructing a `RouteTree`.

use std::mem;

use log::trace;

use crate::tree::{RouteNode, RouteTree, Target};

/// Builds a `RouteTree` using the provided closure. Routes are defined using the `TreeBuilder`
/// value passed to the closure, and the tree is returned once the closure completes.
///
/// ```rust
/// # use waypoint::handler;
/// # use waypoint::tree::{build_tree, DrawRoutes, RouteTree};
/// fn health() {}
///
/// let tree: RouteTree<fn()> = build_tree(|route| {
///     route.to("", "pages.views.home");
///     route.to("health", handler!(health as fn()));
///
///     route.scope("blog", |route| {
///         route.to("", "blog.views.index");
///         route.to("<slug>", "blog.views.post");
///     });
/// });
///
/// assert_eq!(tree.len(), 3);
/// ```
pub fn build_tree<H, F>(f: F) -> RouteTree<H>
where
    F: FnOnce(&mut TreeBuilder<H>),
{
    let mut tree = RouteTree::new();

    {
        let mut builder = TreeBuilder { tree: &mut tree };
        f(&mut builder);
    }

    tree
}

/// The top-level builder which is created by `build_tree` and passed to the provided closure.
/// See the `build_tree` function and the `DrawRoutes` trait for usage.
pub struct TreeBuilder<'a, H> {
    tree: &'a mut RouteTree<H>,
}

/// A scoped builder, which is created by `DrawRoutes::scope` and passed to the provided closure.
/// The `DrawRoutes` trait has documentation for using this type.
pub struct ScopeBuilder<'a, H> {
    tree: &'a mut RouteTree<H>,
}

/// Defines functions used by a builder to add routes below its position in the tree. This trait
/// is implemented by the top-level `TreeBuilder`, and also the `ScopeBuilder` created by
/// `DrawRoutes::scope`.
pub trait DrawRoutes<H> {
    /// Routes `fragment` to `target`, which is either a dotted handler reference or a
    /// `Target` built with `handler!`.
    ///
    /// ```rust
    /// # use waypoint::tree::{build_tree, DrawRoutes, RouteTree};
    /// let tree: RouteTree<()> = build_tree(|route| {
    ///     route.to("posts/<id:int>", "blog.views.post");
    /// });
    /// assert!(tree.get("posts/<id:int>").is_some());
    /// ```
    fn to<T>(&mut self, fragment: &str, target: T)
    where
        T: Into<Target<H>>,
    {
        trace!("[routing {}]", fragment);
        self.component_refs().route(fragment, target);
    }

    /// Begins defining routes nested below `fragment`.
    ///
    /// Scoping the same fragment twice extends the same branch. Scoping a fragment that already
    /// routes to a target keeps that target as the branch's root (`""`) entry.
    ///
    /// ```rust
    /// # use waypoint::tree::{build_tree, DrawRoutes, RouteNode, RouteTree};
    /// let tree: RouteTree<()> = build_tree(|route| {
    ///     route.scope("api", |route| {
    ///         route.to("users", "api.views.users");
    ///     });
    ///     route.scope("api", |route| {
    ///         route.to("teams", "api.views.teams");
    ///     });
    /// });
    ///
    /// match tree.get("api") {
    ///     Some(RouteNode::Branch(api)) => assert_eq!(api.len(), 2),
    ///     _ => panic!(),
    /// }
    /// ```
    fn scope<F>(&mut self, fragment: &str, f: F)
    where
        F: FnOnce(&mut ScopeBuilder<H>),
    {
        let tree = descend(self.component_refs(), fragment);
        let mut scope_builder = ScopeBuilder { tree };

        f(&mut scope_builder)
    }

    /// Return the tree this builder adds to. For internal use only.
    #[doc(hidden)]
    fn component_refs(&mut self) -> &mut RouteTree<H>;
}

fn descend<'t, H>(tree: &'t mut RouteTree<H>, fragment: &str) -> &'t mut RouteTree<H> {
    trace!("[descending into {}]", fragment);

    let node = tree
        .entries
        .entry(fragment.to_owned())
        .or_insert_with(|| RouteNode::Branch(RouteTree::new()));

    if let RouteNode::Leaf(_) = node {
        if let RouteNode::Leaf(target) = mem::replace(node, RouteNode::Branch(RouteTree::new())) {
            trace!("[moving target of {} to the scope root]", fragment);
            let mut branch = RouteTree::new();
            branch.insert(String::new(), RouteNode::Leaf(target));
            *node = RouteNode::Branch(branch);
        }
    }

    match node {
        RouteNode::Branch(subtree) => subtree,
        RouteNode::Leaf(_) => unreachable!("scope node was converted to a branch"),
    }
}

impl<'a, H> DrawRoutes<H> for TreeBuilder<'a, H> {
    fn component_refs(&mut self) -> &mut RouteTree<H> {
        &mut self.tree
    }
}

impl<'a, H> DrawRoutes<H> for ScopeBuilder<'a, H> {
    fn component_refs(&mut self) -> &mut RouteTree<H> {
        &mut self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch<H>(tree: &RouteTree<H>, fragment: &str) -> RouteTree<H>
    where
        H: Clone,
    {
        match tree.get(fragment) {
            Some(RouteNode::Branch(subtree)) => subtree.clone(),
            _ => panic!("expected a branch at {}", fragment),
        }
    }

    #[test]
    fn build_tree_nesting_tests() {
        let tree: RouteTree<()> = build_tree(|route| {
            route.to("", "views.index");
            route.scope("blog", |route| {
                route.to("", "blog.index");
                route.scope("<year:int>", |route| {
                    route.to("<slug>", "blog.post");
                });
            });
        });

        let fragments: Vec<&str> = tree.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fragments, vec!["", "blog"]);

        let blog = branch(&tree, "blog");
        assert_eq!(blog.len(), 2);
        assert_eq!(
            branch(&blog, "<year:int>").get("<slug>"),
            Some(&RouteNode::Leaf(Target::reference("blog.post")))
        );
    }

    #[test]
    fn repeated_scope_extends_branch_tests() {
        let tree: RouteTree<()> = build_tree(|route| {
            route.scope("api", |route| route.to("users", "api.users"));
            route.to("about", "pages.about");
            route.scope("api", |route| route.to("teams", "api.teams"));
        });

        let fragments: Vec<&str> = tree.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fragments, vec!["api", "about"]);

        let api = branch(&tree, "api");
        let fragments: Vec<&str> = api.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fragments, vec!["users", "teams"]);
    }

    #[test]
    fn scope_over_leaf_keeps_target_tests() {
        let tree: RouteTree<()> = build_tree(|route| {
            route.to("blog", "blog.index");
            route.scope("blog", |route| route.to("<slug>", "blog.post"));
        });

        let blog = branch(&tree, "blog");
        let fragments: Vec<&str> = blog.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(fragments, vec!["", "<slug>"]);
        assert_eq!(
            blog.get(""),
            Some(&RouteNode::Leaf(Target::reference("blog.index")))
        );
    }
}
