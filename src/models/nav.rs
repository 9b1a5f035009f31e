//! Static navigation tree.
//!
//! The sidebar, the router, the breadcrumb header and the command search all
//! read the same [`RouteNode`] tree (see [`crate::config::nav_routes`]).

/// Symbolic icon identifier.
///
/// Kept free of any icon crate so that navigation logic stays testable
/// natively; `components::icons` maps each id to a concrete glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconId {
    Dashboard,
    Users,
    Building,
    Settings,
    Circle,
    #[default]
    Box,
}

/// Renderable page attached to a navigable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Users,
    Orgs,
    Settings,
    NotFound,
}

/// A node in the navigation tree.
///
/// A node with `children` is a grouping node; a node with a `page` is
/// navigable. Paths are absolute and unique across the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Option<IconId>,
    pub page: Option<Page>,
    pub description: Option<&'static str>,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// Navigable leaf rendering `page`.
    pub fn page(path: &'static str, label: &'static str, page: Page) -> Self {
        Self {
            path,
            label,
            icon: None,
            page: Some(page),
            description: None,
            children: Vec::new(),
        }
    }

    /// Grouping node with no page of its own.
    pub fn group(path: &'static str, label: &'static str, children: Vec<RouteNode>) -> Self {
        Self {
            path,
            label,
            icon: None,
            page: None,
            description: None,
            children,
        }
    }

    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_navigable(&self) -> bool {
        self.page.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let leaf = RouteNode::page("/a", "A", Page::Dashboard)
            .with_icon(IconId::Dashboard)
            .with_description("first");
        assert!(leaf.is_navigable());
        assert!(!leaf.is_group());
        assert_eq!(leaf.icon, Some(IconId::Dashboard));
        assert_eq!(leaf.description, Some("first"));

        let group = RouteNode::group("/g", "G", vec![leaf]);
        assert!(group.is_group());
        assert!(!group.is_navigable());
        assert_eq!(group.icon, None);
    }

    #[test]
    fn test_default_icon() {
        assert_eq!(IconId::default(), IconId::Box);
    }
}
