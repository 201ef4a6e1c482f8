//! End-to-end flows through the controller with mock terminal streams and
//! an in-memory PokeAPI.

mod common;

use common::{api_with, controller_with, drain_input, sprite, starters};
use crossterm::event::{KeyCode, KeyModifiers};
use pokeline::config::AppConfig;
use pokeline::{EventBus, LoadState, ModelEvent, Screen, SimpleEventBus};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn login_then_browse_should_render_every_sprite() {
    let api = starters();
    let (mut controller, events, screen) = controller_with(&AppConfig::default(), api.clone());

    events.push_text("ash");
    events.push_key(KeyCode::Enter);
    drain_input(&mut controller);
    controller.settle().await.unwrap();

    assert_eq!(controller.view_model().screen(), Screen::Listing);
    assert_eq!(api.collection_calls(), vec![20]);
    assert_eq!(api.detail_calls().len(), 4);
    assert!(screen.screen_contains("signed in as ash"));
    assert!(screen.screen_contains(&sprite("pikachu")));
    assert!(screen.screen_contains("4/4 shown | page size 20"));
}

#[tokio::test]
async fn blank_login_should_keep_the_gate_closed() {
    let api = starters();
    let (mut controller, events, screen) = controller_with(&AppConfig::default(), api.clone());

    events.push_text("  ");
    events.push_key(KeyCode::Enter);
    drain_input(&mut controller);

    assert_eq!(controller.view_model().screen(), Screen::Login);
    assert!(api.collection_calls().is_empty());
    assert!(screen.screen_contains("Enter a name to continue"));
}

#[tokio::test]
async fn typing_should_filter_the_list() {
    let (mut controller, events, screen) = controller_with(&AppConfig::default(), starters());
    controller.sign_in("ash");
    controller.settle().await.unwrap();

    events.push_text("CHAR");
    drain_input(&mut controller);

    assert_eq!(controller.view_model().listing().filter(), "char");
    assert!(screen.screen_contains("charmander"));
    assert!(!screen.screen_contains("bulbasaur"));
    assert!(screen.screen_contains("1/4 shown"));

    events.push_key(KeyCode::Esc);
    drain_input(&mut controller);

    assert!(screen.screen_contains("bulbasaur"));
    assert!(screen.screen_contains("4/4 shown"));
}

#[tokio::test]
async fn enter_should_toggle_favorite_of_selected_row() {
    let (mut controller, events, screen) = controller_with(&AppConfig::default(), starters());
    controller.sign_in("ash");
    controller.settle().await.unwrap();

    events.push_key(KeyCode::Down);
    events.push_key(KeyCode::Enter);
    drain_input(&mut controller);

    assert!(controller.view_model().listing().is_favorite("charmander"));
    assert!(screen.screen_contains("Added charmander to favorites"));
    assert!(screen.screen_contains("[Unfavorite]"));

    events.push_key(KeyCode::Enter);
    drain_input(&mut controller);

    assert!(controller.view_model().listing().favorites().is_empty());
    assert!(!screen.screen_contains("[Unfavorite]"));
}

#[tokio::test]
async fn tab_should_narrow_to_favorites() {
    let (mut controller, events, screen) = controller_with(&AppConfig::default(), starters());
    controller.sign_in("ash");
    controller.settle().await.unwrap();

    events.push_key(KeyCode::Down);
    events.push_key(KeyCode::Down);
    events.push_key(KeyCode::Enter);
    events.push_key(KeyCode::Tab);
    drain_input(&mut controller);

    let visible: Vec<String> = controller
        .view_model()
        .listing()
        .visible_items()
        .iter()
        .map(|item| item.name().to_string())
        .collect();
    assert_eq!(visible, vec!["squirtle".to_string()]);
    assert!(screen.screen_contains("favorites only: on (1)"));

    // Removing the last favorite turns the view back off
    events.push_key(KeyCode::Enter);
    drain_input(&mut controller);

    assert!(!controller.view_model().listing().favorites_only());
    assert!(screen.screen_contains("bulbasaur"));
}

#[tokio::test]
async fn tab_without_favorites_should_say_so_in_status_bar() {
    let (mut controller, events, screen) = controller_with(&AppConfig::default(), starters());
    controller.sign_in("ash");
    controller.settle().await.unwrap();
    assert!(!screen.screen_contains("No favorites yet"));

    events.push_key(KeyCode::Tab);
    drain_input(&mut controller);

    assert!(!controller.view_model().listing().favorites_only());
    let status = screen.screen_lines().last().cloned().unwrap_or_default();
    assert!(status.contains("No favorites yet"), "status bar was {status:?}");
}

#[tokio::test]
async fn ctrl_n_should_refetch_with_larger_page() {
    let names: Vec<String> = (0..130).map(|i| format!("mon{i:03}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let api = api_with(&refs);
    let (mut controller, events, screen) = controller_with(&AppConfig::default(), api.clone());
    controller.sign_in("ash");
    controller.settle().await.unwrap();
    let first_ids: Vec<_> = controller
        .view_model()
        .listing()
        .items()
        .iter()
        .map(|item| item.id())
        .collect();

    events.push_key_with(KeyCode::Char('n'), KeyModifiers::CONTROL);
    drain_input(&mut controller);

    assert!(screen.screen_contains("Loading 120 entries..."));
    controller.settle().await.unwrap();

    let listing = controller.view_model().listing();
    assert_eq!(api.collection_calls(), vec![20, 120]);
    assert_eq!(listing.page_size(), 120);
    assert_eq!(listing.references().len(), 120);
    assert!(listing
        .items()
        .iter()
        .all(|item| !first_ids.contains(&item.id())));
    assert_eq!(api.detail_calls().len(), 140);
}

#[tokio::test]
async fn failed_detail_should_only_affect_its_row() {
    let api = starters();
    api.set_collection(vec![
        common::pokemon("bulbasaur"),
        pokeline::Reference::new("missingno", "https://pokeapi.test/api/v2/pokemon/0/"),
    ]);
    let (mut controller, _, screen) = controller_with(&AppConfig::default(), api);
    controller.sign_in("ash");
    controller.settle().await.unwrap();

    let lines = screen.screen_lines();
    let bulbasaur = lines.iter().find(|l| l.contains("bulbasaur")).unwrap();
    let missingno = lines.iter().find(|l| l.contains("missingno")).unwrap();
    assert!(bulbasaur.contains(&sprite("bulbasaur")));
    assert!(missingno.contains("sprite unavailable"));
}

#[tokio::test]
async fn failed_collection_should_be_retryable_with_ctrl_r() {
    let api = starters();
    api.fail_collection(503);
    let (mut controller, events, screen) = controller_with(&AppConfig::default(), api.clone());
    controller.sign_in("ash");
    controller.settle().await.unwrap();

    assert!(matches!(
        controller.view_model().listing().load_state(),
        LoadState::Failed { .. }
    ));
    assert!(screen.screen_contains("Could not load the list"));
    assert!(screen.screen_contains("Ctrl+R to retry"));

    api.succeed_collection();
    events.push_key_with(KeyCode::Char('r'), KeyModifiers::CONTROL);
    drain_input(&mut controller);
    controller.settle().await.unwrap();

    assert_eq!(api.collection_calls(), vec![20, 20]);
    assert_eq!(
        *controller.view_model().listing().load_state(),
        LoadState::Loaded
    );
    assert!(screen.screen_contains("bulbasaur"));
}

#[tokio::test]
async fn logout_should_keep_listing_in_memory() {
    let api = starters();
    let (mut controller, events, screen) = controller_with(&AppConfig::default(), api.clone());
    controller.sign_in("ash");
    controller.settle().await.unwrap();
    controller.view_model_mut().toggle_favorite("pikachu");

    events.push_key_with(KeyCode::Char('l'), KeyModifiers::CONTROL);
    drain_input(&mut controller);

    assert_eq!(controller.view_model().screen(), Screen::Login);
    assert!(screen.screen_contains("Name:"));

    events.push_text("brock");
    events.push_key(KeyCode::Enter);
    drain_input(&mut controller);
    controller.settle().await.unwrap();

    assert_eq!(api.collection_calls(), vec![20]);
    assert!(controller.view_model().listing().is_favorite("pikachu"));
    assert!(screen.screen_contains("signed in as brock"));
}

#[tokio::test]
async fn configured_page_size_should_drive_first_fetch() {
    let api = starters();
    let config = AppConfig {
        page_size: 2,
        page_increment: 1,
        ..AppConfig::default()
    };
    let (mut controller, _, _) = controller_with(&config, api.clone());

    controller.sign_in("ash");
    controller.settle().await.unwrap();

    assert_eq!(api.collection_calls(), vec![2]);
    assert_eq!(controller.view_model().listing().references().len(), 2);
}

#[tokio::test]
async fn event_bus_should_see_transitions_in_order() {
    let (mut controller, _, _) = controller_with(&AppConfig::default(), starters());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut bus = SimpleEventBus::new();
    bus.subscribe_to_model_events(Box::new(move |event| {
        sink.lock().unwrap().push(event.clone());
    }));
    controller.view_model_mut().set_event_bus(Box::new(bus));

    controller.sign_in("ash");
    controller.settle().await.unwrap();

    let seen = seen.lock().unwrap();
    assert!(matches!(seen[0], ModelEvent::LoggedIn { ref user } if user == "ash"));
    assert!(matches!(seen[1], ModelEvent::CollectionRequested { .. }));
    assert!(matches!(seen[2], ModelEvent::CollectionLoaded { count: 4, .. }));
    let resolved = seen
        .iter()
        .filter(|event| matches!(event, ModelEvent::DetailResolved { .. }))
        .count();
    assert_eq!(resolved, 4);
}
