//! End-to-end flows through `AppState` with inline loaders
//!
//! Each navigation stays pending until `tick()`, which makes the in-flight
//! window observable.

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use xfcontacts::egui_app::contacts::SearchPhase;
use xfcontacts::egui_app::data::{ContactSource, MemoryContactStore};
use xfcontacts::egui_app::router::{DetailData, Dispatch, HistoryAction};
use xfcontacts::egui_app::{AppState, Config, SidebarAction};
use xfcontacts::shared::{AppConfig, Contact, Location};

fn contacts() -> Vec<Contact> {
    vec![
        Contact::new("7", "Alice", "Liddell"),
        Contact::new("8", "Albert", "Camus").with_favorite(true),
        Contact::new("9", "Bob", "Builder"),
    ]
}

fn app_at(href: &str) -> AppState {
    let config = Config::with_builder(AppConfig::builder().initial_url(href)).unwrap();
    let store = MemoryContactStore::from_contacts(contacts());
    AppState::with_source(config, store.shared(), Dispatch::Inline).unwrap()
}

fn type_text(app: &mut AppState, text: &str) {
    app.apply(SidebarAction::SearchEdited(text.to_string())).unwrap();
}

fn hrefs(app: &AppState) -> Vec<String> {
    app.router.history().entries().iter().map(|l| l.href()).collect()
}

#[test]
fn first_search_pushes_then_refinements_replace() {
    let mut app = app_at("/");

    type_text(&mut app, "a");
    let commit = app.tick().unwrap();
    assert_eq!(commit.action, HistoryAction::Push);

    type_text(&mut app, "al");
    assert_eq!(app.tick().unwrap().action, HistoryAction::Replace);

    type_text(&mut app, "ali");
    assert_eq!(app.tick().unwrap().action, HistoryAction::Replace);

    assert_eq!(hrefs(&app), vec!["/", "/?q=ali"]);
    assert_eq!(app.search.text(), "ali");
}

#[test]
fn emptying_the_field_is_not_a_first_search() {
    let mut app = app_at("/?q=a");
    type_text(&mut app, "");
    assert_eq!(app.tick().unwrap().action, HistoryAction::Replace);
    assert_eq!(app.router.location().href(), "/?q=");

    // q is Some("") now, so the next search still replaces
    type_text(&mut app, "b");
    assert_eq!(app.tick().unwrap().action, HistoryAction::Replace);
    assert_eq!(app.router.history().len(), 1);
}

#[test]
fn clear_removes_q_replaces_and_refocuses() {
    let mut app = app_at("/");
    type_text(&mut app, "al");
    app.tick();

    app.apply(SidebarAction::ClearSearch).unwrap();
    assert_eq!(app.search.text(), "");
    assert!(!app.search.take_focus_request());

    let commit = app.tick().unwrap();
    assert_eq!(commit.action, HistoryAction::Replace);
    assert_eq!(app.router.location().href(), "/");
    assert_eq!(app.router.location().q(), None);
    assert_eq!(app.search.text(), "");
    assert!(app.search.take_focus_request());
    assert_eq!(hrefs(&app), vec!["/", "/"]);
}

#[test]
fn search_after_clear_pushes_again() {
    let mut app = app_at("/?q=al");
    app.apply(SidebarAction::ClearSearch).unwrap();
    app.tick();

    type_text(&mut app, "b");
    assert_eq!(app.tick().unwrap().action, HistoryAction::Push);
}

#[test]
fn back_restores_previous_query_without_submitting() {
    let mut app = app_at("/");
    type_text(&mut app, "al");
    app.tick();
    let first = app.search.text().to_string();

    app.apply(SidebarAction::Open(Location::parse("/contacts/7?q=al").unwrap()))
        .unwrap();
    app.tick();
    type_text(&mut app, "bob");
    app.tick();
    assert_eq!(app.search.text(), "bob");
    let entries_before = app.router.history().len();

    app.apply(SidebarAction::Back).unwrap();
    let commit = app.tick().unwrap();
    assert_eq!(commit.action, HistoryAction::Pop(-1));
    assert_eq!(app.search.text(), first);
    assert_eq!(app.router.history().len(), entries_before);
    assert!(app.router.navigation().is_idle());
    assert_eq!(app.search_phase(), SearchPhase::Idle);
}

#[test]
fn back_to_unsearched_entry_empties_the_field() {
    let mut app = app_at("/");
    type_text(&mut app, "al");
    app.tick();

    app.apply(SidebarAction::Back).unwrap();
    app.tick();
    assert_eq!(app.router.location().href(), "/");
    assert_eq!(app.search.text(), "");
    assert_eq!(app.search.committed(), None);
}

#[test]
fn quick_double_back_moves_two_entries() {
    let mut app = app_at("/");
    app.apply(SidebarAction::Open(Location::parse("/about").unwrap()))
        .unwrap();
    app.tick();
    app.apply(SidebarAction::Open(Location::parse("/contacts/x").unwrap()))
        .unwrap();
    app.tick();

    app.apply(SidebarAction::Back).unwrap();
    app.apply(SidebarAction::Back).unwrap();
    assert!(!app.router.can_go_back());

    let commit = app.tick().unwrap();
    assert_eq!(commit.action, HistoryAction::Pop(-2));
    assert_eq!(app.router.location().href(), "/");
    assert_eq!(app.router.history().index(), 0);
    assert!(app.router.can_go_forward());
}

#[test]
fn back_then_forward_before_commit_stays_put() {
    let mut app = app_at("/");
    type_text(&mut app, "al");
    app.tick();

    app.apply(SidebarAction::Back).unwrap();
    app.apply(SidebarAction::Forward).unwrap();
    let commit = app.tick().unwrap();
    assert_eq!(commit.action, HistoryAction::Pop(0));
    assert_eq!(app.router.location().href(), "/?q=al");
    assert_eq!(app.search.text(), "al");
}

#[test]
fn failed_navigation_puts_committed_query_back() {
    let mut app = app_at("/");
    type_text(&mut app, "al");
    app.tick();

    type_text(&mut app, "alx");
    app.apply(SidebarAction::SetFavorite {
        id: "nope".to_string(),
        favorite: true,
    })
    .unwrap();

    assert!(app.tick().is_none());
    assert!(app.router.navigation().is_idle());
    assert_eq!(app.router.location().q().as_deref(), Some("al"));
    assert_eq!(app.search.text(), "al");
    assert_eq!(app.search.committed(), Some("al"));
    assert_eq!(app.search_phase(), SearchPhase::Idle);
}

#[test]
fn failed_clear_drops_focus_request() {
    let mut app = app_at("/?q=al");
    app.apply(SidebarAction::ClearSearch).unwrap();
    app.apply(SidebarAction::SetFavorite {
        id: "nope".to_string(),
        favorite: true,
    })
    .unwrap();

    assert!(app.tick().is_none());
    assert_eq!(app.search.text(), "al");
    assert!(!app.search.take_focus_request());
}

#[test]
fn forward_restores_search() {
    let mut app = app_at("/");
    type_text(&mut app, "al");
    app.tick();
    app.apply(SidebarAction::Back).unwrap();
    app.tick();

    app.apply(SidebarAction::Forward).unwrap();
    app.tick();
    assert_eq!(app.search.text(), "al");
}

#[test]
fn spinner_only_while_same_path_search_is_pending() {
    let mut app = app_at("/");
    type_text(&mut app, "al");
    let indicators = app.indicators();
    assert!(indicators.searching);
    assert!(!indicators.navigating_elsewhere);

    app.tick();
    assert!(!app.indicators().searching);
}

#[test]
fn detail_pane_dims_only_while_navigating_to_contact() {
    let mut app = app_at("/?q=al");
    app.apply(SidebarAction::Open(Location::parse("/contacts/7?q=al").unwrap()))
        .unwrap();
    let indicators = app.indicators();
    assert!(indicators.navigating_elsewhere);
    assert!(!indicators.searching);
    assert_eq!(app.search_phase(), SearchPhase::NavigatingElsewhere);

    app.tick();
    assert!(!app.indicators().navigating_elsewhere);
    assert_matches!(app.router.loader_data().detail, DetailData::Contact(ref c) if c.id == "7");
}

#[test]
fn contact_links_keep_the_search() {
    let app = app_at("/contacts?q=al");
    let data = &app.router.loader_data().sidebar;
    let seven = data.contacts.iter().find(|c| c.id == "7").unwrap();
    let link =
        xfcontacts::egui_app::contacts::indicators::contact_link(seven, data.q.as_deref()).unwrap();
    assert_eq!(link.href(), "/contacts/7?q=al");
}

#[test]
fn no_contacts_when_nothing_matches() {
    let mut app = app_at("/");
    type_text(&mut app, "zzz");
    app.tick();
    assert!(app.router.loader_data().sidebar.contacts.is_empty());
}

#[test]
fn typing_supersedes_pending_contact_navigation() {
    let mut app = app_at("/");
    app.apply(SidebarAction::Open(Location::parse("/contacts/9").unwrap()))
        .unwrap();
    type_text(&mut app, "bo");

    let commit = app.tick().unwrap();
    assert_eq!(commit.location.href(), "/?q=bo");
    assert_eq!(hrefs(&app), vec!["/", "/?q=bo"]);
    assert!(app.tick().is_none());
}

#[test]
fn new_contact_opens_its_detail() {
    let mut app = app_at("/?q=al");
    app.apply(SidebarAction::NewContact).unwrap();
    assert!(!app.indicators().navigating_elsewhere);

    let commit = app.tick().unwrap();
    assert_eq!(commit.action, HistoryAction::Push);
    assert_eq!(commit.q, None);
    assert_eq!(app.search.text(), "");
    assert_matches!(app.router.loader_data().detail, DetailData::Contact(ref c) if c.display_name().is_none());
}

#[test]
fn favorite_toggle_keeps_search_text() {
    let mut app = app_at("/contacts/7?q=al");
    app.apply(SidebarAction::SetFavorite {
        id: "7".to_string(),
        favorite: true,
    })
    .unwrap();
    app.tick();
    assert_eq!(app.search.text(), "al");
    assert_matches!(app.router.loader_data().detail, DetailData::Contact(ref c) if c.favorite);
}

#[test]
fn retry_after_failure_clears_error() {
    let mut app = app_at("/contacts/7");
    app.apply(SidebarAction::SetFavorite {
        id: "missing".to_string(),
        favorite: true,
    })
    .unwrap();
    app.tick();
    assert!(app.router.error().is_some());

    app.apply(SidebarAction::Retry).unwrap();
    app.tick();
    assert!(app.router.error().is_none());
    assert_eq!(app.router.location().href(), "/contacts/7");
}

#[test]
fn store_returns_everything_for_no_query() {
    let store = MemoryContactStore::from_contacts(contacts());
    assert_eq!(store.get_contacts(None).unwrap().len(), 3);
}
