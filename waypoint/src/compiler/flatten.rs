//! Flattens a nested `RouteTree` into anchored `(pattern, target)` pairs.

use log::trace;

use crate::error::Result;
use crate::matcher::MatcherRegistry;
use crate::template::{parse_segment, SegmentTokens, Token};
use crate::tree::{RouteNode, RouteTree, Target};

/// A route pattern paired with its target, as produced by `flatten`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatRoute<H> {
    /// The anchored regex pattern.
    pub pattern: String,

    /// The target the pattern routes to.
    pub target: Target<H>,
}

/// Walks `tree` depth first, in entry order, producing one anchored pattern per leaf.
///
/// Each fragment is parsed and lowered to a regex: literal text is escaped, named parameters
/// become `(?P<name>fragment)` and type-only parameters become `(fragment)`. Nested patterns are
/// joined with a single `/`, the root sentinel `""` adds nothing, and every final pattern is
/// anchored as `^pattern/$`, or `^$` when empty.
///
/// ```rust
/// # use waypoint::compiler::flatten;
/// # use waypoint::matcher::MatcherRegistry;
/// # use waypoint::tree::RouteTree;
/// let mut posts: RouteTree<()> = RouteTree::new();
/// posts.route("", "blog.views.index").route("<id:int>", "blog.views.post");
///
/// let mut tree = RouteTree::new();
/// tree.nest("posts", posts);
///
/// let routes = flatten(&tree, &MatcherRegistry::new()).unwrap();
/// assert_eq!(routes[0].pattern, "^posts/$");
/// assert_eq!(routes[1].pattern, r"^posts/(?P<id>\d+)/$");
/// ```
pub fn flatten<H>(tree: &RouteTree<H>, registry: &MatcherRegistry) -> Result<Vec<FlatRoute<H>>>
where
    H: Clone,
{
    let routes = flatten_tree(tree, registry)?
        .into_iter()
        .map(|(pattern, target)| FlatRoute {
            pattern: anchor(&pattern),
            target,
        })
        .collect();

    Ok(routes)
}

/// Lowers parsed tokens into an unanchored regex pattern.
pub fn lower(tokens: &SegmentTokens, registry: &MatcherRegistry) -> String {
    let mut pattern = String::new();

    for token in tokens {
        match token {
            Token::Literal(text) => pattern.push_str(&regex::escape(text)),
            Token::Parameter(parameter) => {
                let fragment = registry.resolve(parameter.effective_type());
                match parameter.name() {
                    Some(name) => {
                        pattern.push_str("(?P<");
                        pattern.push_str(name);
                        pattern.push('>');
                        pattern.push_str(fragment);
                        pattern.push(')');
                    }
                    None => {
                        pattern.push('(');
                        pattern.push_str(fragment);
                        pattern.push(')');
                    }
                }
            }
        }
    }

    pattern
}

/// Anchors a joined pattern, requiring a trailing slash unless the pattern is empty.
pub fn anchor(pattern: &str) -> String {
    if pattern.is_empty() {
        "^$".to_owned()
    } else {
        format!("^{}/$", pattern)
    }
}

fn flatten_tree<H>(tree: &RouteTree<H>, registry: &MatcherRegistry) -> Result<Vec<(String, Target<H>)>>
where
    H: Clone,
{
    let mut routes = Vec::new();

    for (fragment, node) in tree {
        let segment = lower(&parse_segment(fragment)?, registry);
        trace!("[lowered {:?} to {:?}]", fragment, segment);

        match node {
            RouteNode::Leaf(target) => routes.push((segment, target.clone())),
            RouteNode::Branch(subtree) => {
                for (sub_pattern, target) in flatten_tree(subtree, registry)? {
                    let pattern = if sub_pattern.is_empty() {
                        segment.clone()
                    } else {
                        format!("{}/{}", segment, sub_pattern)
                    };
                    routes.push((pattern, target));
                }
            }
        }
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, MalformedReason};

    fn patterns(tree: &RouteTree<()>) -> Vec<String> {
        flatten(tree, &MatcherRegistry::new())
            .unwrap()
            .into_iter()
            .map(|r| r.pattern)
            .collect()
    }

    #[test]
    fn lower_parameter_tests() {
        let registry = MatcherRegistry::new();
        let lowered = |t: &str| lower(&parse_segment(t).unwrap(), &registry);

        assert_eq!(lowered("<id:int>"), r"(?P<id>\d+)");
        assert_eq!(lowered("<:int>"), r"(\d+)");
        assert_eq!(lowered("<slug>"), r"(?P<slug>[\w-]+)");
        assert_eq!(lowered("<id:unknown_type>"), r"(?P<id>[\w-]+)");
        assert_eq!(lowered("<id:>"), r"(?P<id>[\w-]+)");
    }

    #[test]
    fn lower_escapes_literals_tests() {
        let registry = MatcherRegistry::new();
        let tokens = parse_segment("feed.<format>+v1").unwrap();
        assert_eq!(
            lower(&tokens, &registry),
            r"feed\.(?P<format>[\w-]+)\+v1"
        );
    }

    #[test]
    fn nested_patterns_join_with_single_slash_tests() {
        let mut b: RouteTree<()> = RouteTree::new();
        b.route("b", "views.b");
        let mut tree = RouteTree::new();
        tree.nest("a", b);

        assert_eq!(patterns(&tree), vec!["^a/b/$"]);
    }

    #[test]
    fn root_sentinel_tests() {
        let mut tree: RouteTree<()> = RouteTree::new();
        tree.route("", "views.index");
        assert_eq!(patterns(&tree), vec!["^$"]);

        let mut blog: RouteTree<()> = RouteTree::new();
        blog.route("", "blog.index").route("<slug>", "blog.post");
        let mut tree = RouteTree::new();
        tree.nest("blog", blog);
        assert_eq!(
            patterns(&tree),
            vec!["^blog/$", r"^blog/(?P<slug>[\w-]+)/$"]
        );
    }

    #[test]
    fn root_sentinel_branch_keeps_separator_tests() {
        let mut inner: RouteTree<()> = RouteTree::new();
        inner.route("", "views.index").route("about", "views.about");
        let mut tree = RouteTree::new();
        tree.nest("", inner);

        assert_eq!(patterns(&tree), vec!["^$", "^/about/$"]);
    }

    #[test]
    fn depth_first_order_tests() {
        let mut inner: RouteTree<()> = RouteTree::new();
        inner.route("x", "views.x").route("y", "views.y");
        let mut tree = RouteTree::new();
        tree.route("first", "views.first")
            .nest("inner", inner)
            .route("last", "views.last");

        let flat = flatten(&tree, &MatcherRegistry::new()).unwrap();
        let targets: Vec<&str> = flat
            .iter()
            .filter_map(|r| r.target.as_reference())
            .collect();
        assert_eq!(
            targets,
            vec!["views.first", "views.x", "views.y", "views.last"]
        );
    }

    #[test]
    fn malformed_fragment_aborts_tests() {
        let mut inner: RouteTree<()> = RouteTree::new();
        inner.route("ok", "views.ok").route("<a b>", "views.bad");
        let mut tree = RouteTree::new();
        tree.nest("outer", inner);

        match flatten(&tree, &MatcherRegistry::new()) {
            Err(e @ Error::MalformedTemplate { .. }) => {
                assert_eq!(e.malformed_reason(), Some(MalformedReason::SpaceInName))
            }
            _ => panic!("expected a malformed template error"),
        }
    }
}
