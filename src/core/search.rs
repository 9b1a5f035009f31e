//! Command search over the navigation tree.
//!
//! [`flatten`] turns the route tree into a flat list of navigable entries
//! and [`SearchPanel`] holds the palette state: visibility, query text and
//! the keyboard selection cursor.

use crate::models::{IconId, RouteNode};

/// A navigable entry in the command search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchItem {
    /// The entry's own label.
    pub key: &'static str,
    /// Labels from the outermost ancestor down to this entry.
    pub breadcrumbs: Vec<&'static str>,
    pub description: Option<&'static str>,
    pub icon: IconId,
    pub path: &'static str,
}

/// Flatten the tree (pre-order) into search entries.
///
/// Only nodes with a page become entries. A node without its own icon
/// inherits the nearest ancestor's icon, falling back to [`IconId::Box`].
pub fn flatten(routes: &[RouteNode]) -> Vec<SearchItem> {
    let mut items = Vec::new();
    flatten_into(routes, &[], None, &mut items);
    items
}

fn flatten_into(
    nodes: &[RouteNode],
    parent_labels: &[&'static str],
    inherited_icon: Option<IconId>,
    out: &mut Vec<SearchItem>,
) {
    for node in nodes {
        let mut breadcrumbs = parent_labels.to_vec();
        breadcrumbs.push(node.label);
        let icon = node.icon.or(inherited_icon);

        if node.is_navigable() {
            out.push(SearchItem {
                key: node.label,
                breadcrumbs: breadcrumbs.clone(),
                description: node.description,
                icon: icon.unwrap_or_default(),
                path: node.path,
            });
        }
        flatten_into(&node.children, &breadcrumbs, icon, out);
    }
}

/// Which fields a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// The entry's own label only.
    LabelOnly,
    /// The label and every label in its breadcrumb trail.
    LabelAndTrail,
    /// Label, trail and description.
    #[default]
    All,
}

impl MatchPolicy {
    /// Case-insensitive substring match. An empty query matches everything.
    pub fn matches(&self, item: &SearchItem, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(&needle);

        match self {
            Self::LabelOnly => hit(item.key),
            Self::LabelAndTrail => hit(item.key) || item.breadcrumbs.iter().any(|b| hit(b)),
            Self::All => {
                hit(item.key)
                    || item.breadcrumbs.iter().any(|b| hit(b))
                    || item.description.is_some_and(hit)
            }
        }
    }
}

/// Filter entries, keeping flatten order.
pub fn filter<'a>(
    items: &'a [SearchItem],
    query: &str,
    policy: MatchPolicy,
) -> Vec<&'a SearchItem> {
    items
        .iter()
        .filter(|item| policy.matches(item, query))
        .collect()
}

/// Keys the search panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Up,
    Down,
    Enter,
    Escape,
}

impl SearchKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "Enter" => Some(Self::Enter),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Result of a key press inside the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Key handled (or ignored) without leaving the panel.
    Stay,
    /// Selected entry activated; the panel closed and the caller navigates.
    Navigate(&'static str),
    /// Panel closed without navigating.
    Closed,
}

/// Global shortcut toggling the panel: Ctrl+K or Cmd+K.
pub fn is_toggle_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key.eq_ignore_ascii_case("k")
}

/// Command palette state.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPanel {
    items: Vec<SearchItem>,
    policy: MatchPolicy,
    open: bool,
    query: String,
    cursor: usize,
}

impl SearchPanel {
    pub fn new(items: Vec<SearchItem>, policy: MatchPolicy) -> Self {
        Self {
            items,
            policy,
            open: false,
            query: String::new(),
            cursor: 0,
        }
    }

    /// Build the panel from a route tree with the default policy.
    pub fn from_routes(routes: &[RouteNode]) -> Self {
        Self::new(flatten(routes), MatchPolicy::default())
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn open(&mut self) {
        self.open = true;
        self.cursor = 0;
    }

    /// Close the panel, clearing the query and the cursor.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.cursor = 0;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Replace the query; the cursor returns to the first result.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.cursor = 0;
    }

    /// Entries matching the current query.
    pub fn results(&self) -> Vec<&SearchItem> {
        filter(&self.items, &self.query, self.policy)
    }

    pub fn selected(&self) -> Option<&SearchItem> {
        self.results().get(self.cursor).copied()
    }

    /// Move the cursor down, wrapping to the first entry.
    pub fn move_down(&mut self) {
        let len = self.results().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Move the cursor up, wrapping to the last entry.
    pub fn move_up(&mut self) {
        let len = self.results().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    /// Point the cursor at `index` (pointer hover). Out-of-range is ignored.
    pub fn hover(&mut self, index: usize) {
        if index < self.results().len() {
            self.cursor = index;
        }
    }

    /// Activate the entry at `index` (pointer click).
    pub fn activate(&mut self, index: usize) -> SearchOutcome {
        let target = self.results().get(index).map(|item| item.path);
        self.close();
        match target {
            Some(path) => SearchOutcome::Navigate(path),
            None => SearchOutcome::Closed,
        }
    }

    pub fn handle_key(&mut self, key: SearchKey) -> SearchOutcome {
        match key {
            SearchKey::Escape => {
                self.close();
                SearchOutcome::Closed
            }
            _ if self.results().is_empty() => SearchOutcome::Stay,
            SearchKey::Down => {
                self.move_down();
                SearchOutcome::Stay
            }
            SearchKey::Up => {
                self.move_up();
                SearchOutcome::Stay
            }
            SearchKey::Enter => self.activate(self.cursor),
        }
    }
}
