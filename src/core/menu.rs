//! Sidebar menu state.

use crate::models::{RouteNode, normalize_path};

/// `true` when one of `node`'s direct children is the current page.
pub fn is_active_group(node: &RouteNode, path: &str) -> bool {
    let path = normalize_path(path);
    node.children.iter().any(|child| child.path == path)
}

/// Whether the node itself is the current page.
pub fn is_active(node: &RouteNode, path: &str) -> bool {
    node.path == normalize_path(path)
}

/// Expanded submenu groups in the full-width sidebar.
///
/// While the sidebar is collapsed nothing renders expanded and toggling is
/// ignored; submenus are revealed by hover instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    expanded: Vec<&'static str>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, label: &str, collapsed: bool) -> bool {
        !collapsed && self.expanded.iter().any(|l| *l == label)
    }

    pub fn toggle(&mut self, label: &'static str, collapsed: bool) {
        if collapsed {
            return;
        }
        if let Some(pos) = self.expanded.iter().position(|l| *l == label) {
            self.expanded.remove(pos);
        } else {
            self.expanded.push(label);
        }
    }

    /// Expand every group that contains the current page.
    ///
    /// Returns `true` if anything changed.
    pub fn reveal_active(&mut self, routes: &[RouteNode], path: &str, collapsed: bool) -> bool {
        if collapsed {
            return false;
        }
        let mut changed = false;
        for node in routes.iter().filter(|n| n.is_group()) {
            if is_active_group(node, path) && !self.expanded.contains(&node.label) {
                self.expanded.push(node.label);
                changed = true;
            }
        }
        changed
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
                vec![RouteNode::page("/management/users", "User List", Page::Users)],
            ),
            RouteNode::group(
                "/system",
                "System",
                vec![RouteNode::page("/system/settings", "Settings", Page::Settings)],
            ),
        ]
    }

    #[test]
    fn test_toggle() {
        let mut menu = MenuState::new();
        menu.toggle("Management", false);
        assert!(menu.is_expanded("Management", false));
        menu.toggle("Management", false);
        assert!(!menu.is_expanded("Management", false));
    }

    #[test]
    fn test_collapsed_ignores_toggle() {
        let mut menu = MenuState::new();
        menu.toggle("Management", true);
        assert!(!menu.is_expanded("Management", false));

        menu.toggle("Management", false);
        assert!(!menu.is_expanded("Management", true));
    }

    #[test]
    fn test_reveal_active() {
        let routes = routes();
        let mut menu = MenuState::new();
        assert!(!menu.reveal_active(&routes, "/management/users", true));
        assert!(menu.reveal_active(&routes, "/management/users", false));
        assert!(menu.is_expanded("Management", false));
        assert!(!menu.is_expanded("System", false));
        // Already expanded: no change.
        assert!(!menu.reveal_active(&routes, "/management/users", false));
    }

    #[test]
    fn test_active_helpers() {
        let routes = routes();
        assert!(is_active_group(&routes[1], "/management/users/"));
        assert!(!is_active_group(&routes[1], "/system/settings"));
        assert!(is_active(&routes[0], ""));
    }
}
