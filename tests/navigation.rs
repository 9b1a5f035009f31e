//! Navigation behaviour over the shipped route table.

use acme_admin::config::nav_routes;
use acme_admin::core::breadcrumb::resolve;
use acme_admin::core::menu::MenuState;
use acme_admin::core::{
    GuardDecision, SearchKey, SearchOutcome, SearchPanel, derive_breadcrumbs, guard,
};
use acme_admin::models::{AppRoute, IconId, Page};

fn labels(path: &str) -> Vec<String> {
    derive_breadcrumbs(nav_routes(), path)
        .into_iter()
        .map(|c| c.label)
        .collect()
}

#[test]
fn test_every_page_resolves() {
    let cases = [
        ("/", Page::Dashboard),
        ("/management/users", Page::Users),
        ("/management/orgs", Page::Orgs),
        ("/system/settings", Page::Settings),
        ("/management/groups", Page::NotFound),
        ("/system/security", Page::NotFound),
    ];
    for (path, page) in cases {
        let node = resolve(nav_routes(), path).unwrap_or_else(|| panic!("{} should resolve", path));
        assert_eq!(node.page, Some(page), "{}", path);
    }
}

#[test]
fn test_groups_and_unknown_paths_do_not_resolve() {
    assert!(resolve(nav_routes(), "/management").is_none());
    assert!(resolve(nav_routes(), "/nope").is_none());
    assert!(resolve(nav_routes(), "/management/users/42").is_none());
}

#[test]
fn test_breadcrumbs_follow_the_tree() {
    assert_eq!(labels("/"), vec!["Dashboard"]);
    assert_eq!(
        labels("/management/users/"),
        vec!["Management", "User List"]
    );
    assert_eq!(labels("/system/security"), vec!["System", "Security"]);

    let crumbs = derive_breadcrumbs(nav_routes(), "/management/orgs");
    assert!(!crumbs[0].is_link);
    assert!(!crumbs[1].is_link);
}

#[test]
fn test_unknown_path_breadcrumbs_fall_back_to_segments() {
    assert_eq!(
        labels("/reports/monthly-sales"),
        vec!["Reports", "Monthly sales"]
    );
}

#[test]
fn test_search_walks_to_settings() {
    let mut panel = SearchPanel::from_routes(nav_routes());
    panel.open();
    panel.set_query("settings");

    let results = panel.results();
    assert!(!results.is_empty());
    assert_eq!(results[0].path, "/system/settings");
    assert_eq!(results[0].breadcrumbs, vec!["System", "General Settings"]);
    assert_eq!(results[0].icon, IconId::Circle);

    assert_eq!(
        panel.handle_key(SearchKey::Enter),
        SearchOutcome::Navigate("/system/settings")
    );
    assert!(!panel.is_open());
    assert_eq!(panel.query(), "");
}

#[test]
fn test_search_icon_prefers_own_icon() {
    let panel = SearchPanel::from_routes(nav_routes());
    let icon_of = |path: &str| {
        panel
            .results()
            .into_iter()
            .find(|i| i.path == path)
            .map(|i| i.icon)
    };
    assert_eq!(icon_of("/management/orgs"), Some(IconId::Building));
    assert_eq!(icon_of("/system/security"), Some(IconId::Circle));
    assert_eq!(icon_of("/"), Some(IconId::Dashboard));
}

#[test]
fn test_search_no_results_stays_open() {
    let mut panel = SearchPanel::from_routes(nav_routes());
    panel.open();
    panel.set_query("zzz-no-such-page");
    assert!(panel.results().is_empty());
    assert_eq!(panel.handle_key(SearchKey::Down), SearchOutcome::Stay);
    assert_eq!(panel.handle_key(SearchKey::Enter), SearchOutcome::Stay);
    assert!(panel.is_open());
}

#[test]
fn test_active_group_is_revealed() {
    let mut menu = MenuState::new();
    assert!(menu.reveal_active(nav_routes(), "/system/settings", false));
    assert!(menu.is_expanded("System", false));
    assert!(!menu.is_expanded("Management", false));
    assert!(!menu.is_expanded("System", true));
}

#[test]
fn test_guard_round_trip() {
    let users = AppRoute::from_hash("#/management/users");
    assert_eq!(
        guard(&users, false),
        GuardDecision::Redirect(AppRoute::Login)
    );
    assert_eq!(guard(&users, true), GuardDecision::Render);

    let login = AppRoute::from_hash("#/login");
    assert_eq!(
        guard(&login, true),
        GuardDecision::Redirect(AppRoute::root())
    );
}
