//! Defines `Resolver`, which matches request paths against a compiled `RouteTable`.

use log::{debug, trace};

use crate::error::Result;
use crate::table::regex::RouteRegex;
use crate::table::{CompiledRoute, RouteTable};
use crate::tree::Target;

/// A `RouteTable` whose patterns have been compiled to regexes.
///
/// Resolving a path only reports which route matched and what it captured; invoking the target
/// is left to the caller.
///
/// ```rust
/// # use waypoint::compiler::Compiler;
/// # use waypoint::tree::{build_tree, DrawRoutes, RouteTree};
/// let tree: RouteTree<()> = build_tree(|route| {
///     route.scope("blog", |route| {
///         route.to("<year:int>/<slug>", "blog.views.post");
///     });
/// });
///
/// let resolver = Compiler::new().compile(&tree).unwrap().into_resolver().unwrap();
/// let resolved = resolver.resolve("/blog/2024/hello-world/").unwrap();
///
/// assert_eq!(resolved.route().name(), Some("post"));
/// assert_eq!(resolved.kwarg("year"), Some("2024"));
/// assert_eq!(resolved.kwarg("slug"), Some("hello-world"));
/// ```
#[derive(Clone, Debug)]
pub struct Resolver<H> {
    routes: Vec<(RouteRegex, CompiledRoute<H>)>,
}

impl<H> Resolver<H> {
    pub(crate) fn new(table: RouteTable<H>) -> Result<Self> {
        let mut routes = Vec::with_capacity(table.len());

        for route in table {
            let regex = RouteRegex::new(route.pattern())?;
            routes.push((regex, route));
        }

        debug!(" compiled {} route patterns", routes.len());
        Ok(Resolver { routes })
    }

    /// Finds the first route, in table order, whose pattern matches `path`.
    ///
    /// A single leading `/` is stripped from `path` before matching, since compiled patterns are
    /// relative to the root.
    pub fn resolve<'r>(&'r self, path: &str) -> Option<ResolvedRoute<'r, H>> {
        let path = path.strip_prefix('/').unwrap_or(path);
        trace!(" resolving path {:?}", path);

        for (regex, route) in &self.routes {
            if let Some((kwargs, args)) = regex.captures(path) {
                trace!(" matched {}", regex.as_str());
                return Some(ResolvedRoute {
                    route,
                    kwargs,
                    args,
                });
            }
        }

        trace!(" no route matched {:?}", path);
        None
    }

    /// The number of routes held.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no routes are held.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// The outcome of a successful `Resolver::resolve`.
#[derive(Debug)]
pub struct ResolvedRoute<'r, H> {
    route: &'r CompiledRoute<H>,
    kwargs: Vec<(String, String)>,
    args: Vec<String>,
}

impl<'r, H> ResolvedRoute<'r, H> {
    /// The route that matched.
    pub fn route(&self) -> &'r CompiledRoute<H> {
        self.route
    }

    /// The target of the route that matched.
    pub fn target(&self) -> &'r Target<H> {
        self.route.target()
    }

    /// Values captured by named parameters, in pattern order.
    pub fn kwargs(&self) -> &[(String, String)] {
        &self.kwargs
    }

    /// The value captured by the parameter called `name`.
    pub fn kwarg(&self, name: &str) -> Option<&str> {
        self.kwargs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Values captured by unnamed, type-only parameters, in pattern order.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
