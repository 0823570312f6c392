use std::sync::Once;

use buddy_core::{
    update, AppState, CharacterId, Effect, Msg, UpdateSnapshot, ABOUT_URL, APP_NAME, ARCHIVE_URL,
    COMIC_URL,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(buddy_logging::initialize_for_tests);
}

fn snapshot() -> UpdateSnapshot {
    UpdateSnapshot {
        date: "2026-08-01T12:00:00+00:00".to_string(),
        page_title: Some("A Fresh Start".to_string()),
        page_url: Some("https://www.moonlark-comic.com/story/612".to_string()),
        page_count: Some(14),
    }
}

#[test]
fn toggle_spawns_then_despawns() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::CharacterToggled(CharacterId::Piper));
    assert_eq!(effects, vec![Effect::SpawnBuddy(CharacterId::Piper)]);
    assert!(state.is_active(CharacterId::Piper));

    let (state, effects) = update(state, Msg::CharacterToggled(CharacterId::Piper));
    assert_eq!(effects, vec![Effect::DespawnBuddy(CharacterId::Piper)]);
    assert!(!state.is_active(CharacterId::Piper));
}

#[test]
fn toggles_are_independent_per_character() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::CharacterToggled(CharacterId::Juniper));
    let (state, _) = update(state, Msg::CharacterToggled(CharacterId::Wren));
    let (state, _) = update(state, Msg::CharacterToggled(CharacterId::Juniper));

    assert!(!state.is_active(CharacterId::Juniper));
    assert!(state.is_active(CharacterId::Wren));
    assert_eq!(state.active().collect::<Vec<_>>(), vec![CharacterId::Wren]);
}

#[test]
fn first_close_hides_and_notifies_once() {
    init_logging();
    let state = AppState::new();
    assert!(state.window_visible());

    let (state, effects) = update(state, Msg::CloseRequested);
    assert!(!state.window_visible());
    assert_eq!(effects.len(), 2);
    assert_eq!(effects[0], Effect::HideWindow);
    match &effects[1] {
        Effect::ShowNotification {
            title,
            opens_update,
            ..
        } => {
            assert_eq!(title, APP_NAME);
            assert!(!opens_update);
        }
        other => panic!("expected a notification, got {other:?}"),
    }

    // Later closes hide silently.
    let (state, _) = update(state, Msg::OpenSelected);
    let (_state, effects) = update(state, Msg::CloseRequested);
    assert_eq!(effects, vec![Effect::HideWindow]);
}

#[test]
fn open_from_tray_shows_the_window() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::CloseRequested);
    assert!(!state.view().window_visible);

    let (state, effects) = update(state, Msg::OpenSelected);
    assert_eq!(effects, vec![Effect::ShowWindow]);
    assert!(state.view().window_visible);
}

#[test]
fn tray_links_open_the_fixed_urls() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::OpenComicSelected);
    assert_eq!(effects, vec![Effect::OpenUrl(COMIC_URL.to_string())]);
    let (state, effects) = update(state, Msg::OpenArchiveSelected);
    assert_eq!(effects, vec![Effect::OpenUrl(ARCHIVE_URL.to_string())]);
    let (_state, effects) = update(state, Msg::OpenAboutSelected);
    assert_eq!(effects, vec![Effect::OpenUrl(ABOUT_URL.to_string())]);
}

#[test]
fn exit_stops_the_poller_before_quitting() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::ExitSelected);
    assert_eq!(effects, vec![Effect::StopPoller, Effect::Quit]);
}

#[test]
fn update_found_notifies_and_celebrates() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::UpdateFound(snapshot()));
    assert_eq!(
        effects,
        vec![
            Effect::ShowNotification {
                title: "Moonlark updated!".to_string(),
                body: "A Fresh Start\n(14 pages long.)".to_string(),
                opens_update: true,
            },
            Effect::CelebrateAll,
        ]
    );
    assert_eq!(state.last_update(), Some(&snapshot()));
}

#[test]
fn notification_click_opens_the_update_once() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::UpdateFound(snapshot()));

    let (state, effects) = update(state, Msg::NotificationClicked);
    assert_eq!(
        effects,
        vec![Effect::OpenUrl(
            "https://www.moonlark-comic.com/story/612".to_string()
        )]
    );

    // A second click on a stale notification does nothing.
    let (_state, effects) = update(state, Msg::NotificationClicked);
    assert!(effects.is_empty());
}

#[test]
fn notification_click_without_an_update_is_ignored() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::NotificationClicked);
    assert!(effects.is_empty());
}

#[test]
fn update_without_page_info_still_celebrates() {
    init_logging();
    let bare = UpdateSnapshot {
        date: "2026-08-01T12:00:00+00:00".to_string(),
        page_title: None,
        page_url: None,
        page_count: None,
    };
    let (state, effects) = update(AppState::new(), Msg::UpdateFound(bare));
    match &effects[0] {
        Effect::ShowNotification { body, .. } => assert!(body.is_empty()),
        other => panic!("expected a notification, got {other:?}"),
    }
    assert_eq!(effects[1], Effect::CelebrateAll);

    // Without a link there is nothing for a click to open.
    let (_state, effects) = update(state, Msg::NotificationClicked);
    assert!(effects.is_empty());
}
