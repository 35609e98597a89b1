//! Applies view prefixing and name derivation to flattened routes.

use log::trace;

use crate::compiler::flatten::FlatRoute;
use crate::table::{CompiledRoute, RouteTable};
use crate::tree::Target;

/// Builds the final `RouteTable` from flattened routes, keeping their order.
///
/// With a non-empty `prefix`, every `Target::Reference` is rewritten to `prefix.reference`;
/// `Target::Handler` targets pass through unchanged. Route names are the final dotted component
/// of a reference, or the identifier of a handler; a handler without an identifier produces an
/// unnamed route. A non-empty `name_prefix` rewrites every derived name to `name_prefix_name`.
///
/// ```rust
/// # use waypoint::compiler::{assemble, FlatRoute};
/// # use waypoint::tree::Target;
/// let flat: Vec<FlatRoute<()>> = vec![FlatRoute {
///     pattern: "^$".to_owned(),
///     target: Target::reference("views.show"),
/// }];
///
/// let table = assemble(flat, Some("app"), Some("blog"));
/// assert_eq!(table[0].target().as_reference(), Some("app.views.show"));
/// assert_eq!(table[0].name(), Some("blog_show"));
/// ```
pub fn assemble<H>(
    routes: Vec<FlatRoute<H>>,
    prefix: Option<&str>,
    name_prefix: Option<&str>,
) -> RouteTable<H> {
    let prefix = prefix.filter(|p| !p.is_empty());
    let name_prefix = name_prefix.filter(|p| !p.is_empty());

    let routes = routes
        .into_iter()
        .map(|FlatRoute { pattern, target }| {
            let target = apply_prefix(target, prefix);
            let name = derive_name(&target).map(|name| match name_prefix {
                Some(name_prefix) => format!("{}_{}", name_prefix, name),
                None => name.to_owned(),
            });

            trace!("[assembled {} => {:?}]", pattern, name);
            CompiledRoute::new(pattern, target, name)
        })
        .collect();

    RouteTable::new(routes)
}

fn apply_prefix<H>(target: Target<H>, prefix: Option<&str>) -> Target<H> {
    match (target, prefix) {
        (Target::Reference(path), Some(prefix)) => Target::Reference(format!("{}.{}", prefix, path)),
        (target, _) => target,
    }
}

fn derive_name<H>(target: &Target<H>) -> Option<&str> {
    match target {
        Target::Reference(path) => path.rsplit('.').next(),
        Target::Handler(direct) => direct.identifier(),
    }
}
