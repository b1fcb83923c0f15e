//! Breadcrumb helpers for gallery route paths

/// Components of a `/`-separated route path
///
/// An empty path (the gallery root) has no breadcrumbs.
#[must_use]
pub fn breadcrumbs(route_path: &str) -> Vec<&str> {
    route_path
        .split('/')
        .filter(|component| !component.is_empty())
        .collect()
}

/// Route path reached by clicking `crumb`
///
/// Keeps every component up to and including the first occurrence of
/// `crumb`. Returns `None` if `crumb` is not part of the path.
#[must_use]
pub fn breadcrumb_target(route_path: &str, crumb: &str) -> Option<String> {
    let crumbs = breadcrumbs(route_path);
    let clicked = crumbs.iter().position(|c| *c == crumb)?;
    Some(crumbs[..=clicked].join("/"))
}

/// Route path of `sub_path` below `route_path`
#[must_use]
pub fn child_path(route_path: &str, sub_path: &str) -> String {
    let parent = route_path.trim_matches('/');
    if parent.is_empty() {
        sub_path.to_string()
    } else {
        format!("{parent}/{sub_path}")
    }
}
