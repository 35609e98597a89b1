//! Defines `Compiler`, which turns a `RouteTree` into a `RouteTable`.
//!
//! A compile pass runs in two stages. `flatten` walks the tree, parsing and lowering each fragment
//! with the `MatcherRegistry`, and `assemble` applies the view prefix and derives route names.
//! Both stages are pure; the registry is only borrowed.

mod assemble;
mod flatten;

use log::debug;

use crate::config::CompilerConfig;
use crate::error::Result;
use crate::matcher::MatcherRegistry;
use crate::table::RouteTable;
use crate::tree::RouteTree;

pub use self::assemble::assemble;
pub use self::flatten::{anchor, flatten, lower, FlatRoute};

/// Compiles route trees using a `MatcherRegistry` and optional prefixes.
///
/// # Examples
///
/// ```rust
/// # use waypoint::compiler::Compiler;
/// # use waypoint::tree::{build_tree, DrawRoutes, RouteTree};
/// let tree: RouteTree<()> = build_tree(|route| {
///     route.to("", "views.index");
///     route.scope("posts", |route| {
///         route.to("<id:int>", "views.show");
///     });
/// });
///
/// let mut compiler = Compiler::new().with_name_prefix("blog");
/// compiler.register("year", r"\d{4}");
///
/// let table = compiler.compile(&tree).unwrap();
/// assert_eq!(table[0].pattern(), "^$");
/// assert_eq!(table[0].name(), Some("blog_index"));
/// assert_eq!(table[1].pattern(), r"^posts/(?P<id>\d+)/$");
/// assert_eq!(table[1].name(), Some("blog_show"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compiler {
    registry: MatcherRegistry,
    prefix: Option<String>,
    name_prefix: Option<String>,
}

impl Compiler {
    /// Creates a `Compiler` with the built-in matchers and no prefixes.
    pub fn new() -> Self {
        Compiler::default()
    }

    /// Creates a `Compiler` from deserialized settings.
    ///
    /// Extra matchers are registered before the default matcher is selected, so the default may
    /// name one of them.
    pub fn from_config(config: CompilerConfig) -> Result<Self> {
        let mut registry = MatcherRegistry::new();

        for (type_name, fragment) in config.matchers {
            registry.register(type_name, fragment);
        }

        if let Some(ref default_matcher) = config.default_matcher {
            registry.set_default_matcher(default_matcher)?;
        }

        Ok(Compiler {
            registry,
            prefix: config.prefix,
            name_prefix: config.name_prefix,
        })
    }

    /// Sets the view prefix prepended to every handler reference.
    pub fn with_prefix<S>(self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        Compiler {
            prefix: Some(prefix.into()),
            ..self
        }
    }

    /// Sets the prefix prepended to every derived route name.
    pub fn with_name_prefix<S>(self, name_prefix: S) -> Self
    where
        S: Into<String>,
    {
        Compiler {
            name_prefix: Some(name_prefix.into()),
            ..self
        }
    }

    /// Registers a matcher type. See `MatcherRegistry::register`.
    pub fn register<N, F>(&mut self, type_name: N, fragment: F) -> &mut Self
    where
        N: Into<String>,
        F: Into<String>,
    {
        self.registry.register(type_name, fragment);
        self
    }

    /// Selects the default matcher type. See `MatcherRegistry::set_default_matcher`.
    pub fn set_default_matcher(&mut self, type_name: &str) -> Result<&mut Self> {
        self.registry.set_default_matcher(type_name)?;
        Ok(self)
    }

    /// Borrows the matcher registry.
    pub fn registry(&self) -> &MatcherRegistry {
        &self.registry
    }

    /// Borrows the matcher registry as mutable, for configuration before compiling.
    pub fn registry_mut(&mut self) -> &mut MatcherRegistry {
        &mut self.registry
    }

    /// The view prefix, if set.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// The route name prefix, if set.
    pub fn name_prefix(&self) -> Option<&str> {
        self.name_prefix.as_deref()
    }

    /// Compiles `tree` into a `RouteTable`.
    ///
    /// Fails on the first malformed fragment met in depth-first order; no partial table is
    /// returned. Compiling the same tree twice yields equal tables.
    pub fn compile<H>(&self, tree: &RouteTree<H>) -> Result<RouteTable<H>>
    where
        H: Clone,
    {
        debug!(" compiling route tree with {} top-level entries", tree.len());

        let routes = flatten(tree, &self.registry)?;
        let table = assemble(routes, self.prefix(), self.name_prefix());

        debug!(" compiled {} routes", table.len());
        Ok(table)
    }
}
