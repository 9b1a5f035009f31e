//! Route resolution and breadcrumb derivation.
//!
//! Resolution is a pre-order depth-first search over the navigation tree.
//! A path that matches a node yields the node's full ancestor chain; a path
//! that matches nothing degrades to labels guessed from its URL segments.

use crate::models::{RouteNode, normalize_path};

/// Label used for the root breadcrumb.
pub const ROOT_LABEL: &str = "Dashboard";

/// One entry in the breadcrumb header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
    /// `false` for the current page and for ancestors without a page.
    pub is_link: bool,
}

/// Find the node at `path` and its ancestors (outermost first).
///
/// Returns `None` when no node carries `path`.
pub fn find_trail<'a>(routes: &'a [RouteNode], path: &str) -> Option<Vec<&'a RouteNode>> {
    let target = normalize_path(path);
    let mut trail = Vec::new();
    search(routes, &target, &mut trail).then_some(trail)
}

fn search<'a>(nodes: &'a [RouteNode], target: &str, trail: &mut Vec<&'a RouteNode>) -> bool {
    for node in nodes {
        trail.push(node);
        if normalize_path(node.path) == target || search(&node.children, target, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

/// Resolve a path to its navigable node, if any.
///
/// Grouping nodes without a page do not resolve.
pub fn resolve<'a>(routes: &'a [RouteNode], path: &str) -> Option<&'a RouteNode> {
    find_trail(routes, path)?
        .pop()
        .filter(|node| node.is_navigable())
}

/// Derive the breadcrumb trail for `path`.
///
/// The root path always yields a single "Dashboard" entry. The last entry
/// is never a link.
pub fn derive_breadcrumbs(routes: &[RouteNode], path: &str) -> Vec<Breadcrumb> {
    let path = normalize_path(path);
    if path == "/" {
        return vec![Breadcrumb {
            label: ROOT_LABEL.to_string(),
            path,
            is_link: false,
        }];
    }

    let mut crumbs = match find_trail(routes, &path) {
        Some(trail) => trail
            .into_iter()
            .map(|node| Breadcrumb {
                label: node.label.to_string(),
                path: node.path.to_string(),
                is_link: node.is_navigable(),
            })
            .collect(),
        None => segment_crumbs(&path),
    };

    if let Some(last) = crumbs.last_mut() {
        last.is_link = false;
    }
    crumbs
}

/// Fallback crumbs built from the URL segments themselves.
fn segment_crumbs(path: &str) -> Vec<Breadcrumb> {
    let mut accumulated = String::new();
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            accumulated.push('/');
            accumulated.push_str(segment);
            Breadcrumb {
                label: humanize_segment(segment),
                path: accumulated.clone(),
                is_link: false,
            }
        })
        .collect()
}

/// `user-groups` -> `User groups`.
pub fn humanize_segment(segment: &str) -> String {
    let spaced = segment.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Page;

    fn routes() -> Vec<RouteNode> {
        vec![
            RouteNode::page("/", "Dashboard", Page::Dashboard),
            RouteNode::group(
                "/management",
                "Management",
                vec![
                    RouteNode::page("/management/users", "User List", Page::Users),
                    RouteNode::page("/management/groups", "User Groups", Page::NotFound),
                ],
            ),
            RouteNode {
                page: Some(Page::Settings),
                ..RouteNode::group(
                    "/system",
                    "System",
                    vec![RouteNode::page("/system/security", "Security", Page::NotFound)],
                )
            },
        ]
    }

    fn labels(crumbs: &[Breadcrumb]) -> Vec<(&str, bool)> {
        crumbs
            .iter()
            .map(|c| (c.label.as_str(), c.is_link))
            .collect()
    }

    #[test]
    fn test_root_short_circuits() {
        let crumbs = derive_breadcrumbs(&routes(), "/");
        assert_eq!(
            crumbs,
            vec![Breadcrumb {
                label: "Dashboard".to_string(),
                path: "/".to_string(),
                is_link: false,
            }]
        );
        assert_eq!(derive_breadcrumbs(&[], ""), crumbs);
    }

    #[test]
    fn test_nested_match() {
        let crumbs = derive_breadcrumbs(&routes(), "/management/users");
        assert_eq!(
            labels(&crumbs),
            vec![("Management", false), ("User List", false)]
        );
        assert_eq!(crumbs[0].path, "/management");
        assert_eq!(crumbs[1].path, "/management/users");
    }

    #[test]
    fn test_ancestor_with_page_is_link() {
        let crumbs = derive_breadcrumbs(&routes(), "/system/security/");
        assert_eq!(labels(&crumbs), vec![("System", true), ("Security", false)]);
    }

    #[test]
    fn test_unmatched_segments_are_humanized() {
        let crumbs = derive_breadcrumbs(&routes(), "/reports/monthly-revenue");
        assert_eq!(
            labels(&crumbs),
            vec![("Reports", false), ("Monthly revenue", false)]
        );
        assert_eq!(crumbs[1].path, "/reports/monthly-revenue");
    }

    #[test]
    fn test_resolve() {
        let routes = routes();
        assert_eq!(
            resolve(&routes, "/management/users").map(|n| n.label),
            Some("User List")
        );
        assert_eq!(
            resolve(&routes, "/").map(|n| n.page),
            Some(Some(Page::Dashboard))
        );
        // Grouping node without a page does not resolve.
        assert!(resolve(&routes, "/management").is_none());
        assert!(resolve(&routes, "/nope").is_none());
        assert!(resolve(&routes, "/management/users/extra").is_none());
    }

    #[test]
    fn test_humanize_segment() {
        assert_eq!(humanize_segment("user-groups"), "User groups");
        assert_eq!(humanize_segment("x"), "X");
        assert_eq!(humanize_segment(""), "");
    }
}
