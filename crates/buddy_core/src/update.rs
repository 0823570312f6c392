use crate::state::UpdateSnapshot;
use crate::{links, AppState, Effect, Msg};

/// Application display name used for windows and notifications.
pub const APP_NAME: &str = "Deskmates";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CharacterToggled(id) => {
            if state.toggle(id) {
                vec![Effect::SpawnBuddy(id)]
            } else {
                vec![Effect::DespawnBuddy(id)]
            }
        }
        Msg::CloseRequested => {
            let first_minimize = state.hide_window();
            let mut effects = vec![Effect::HideWindow];
            if first_minimize {
                effects.push(Effect::ShowNotification {
                    title: APP_NAME.to_string(),
                    body: "Still running in the background. \
                           Exit from the system tray to quit."
                        .to_string(),
                    opens_update: false,
                });
            }
            effects
        }
        Msg::OpenSelected => {
            state.show_window();
            vec![Effect::ShowWindow]
        }
        Msg::OpenComicSelected => vec![Effect::OpenUrl(links::COMIC_URL.to_string())],
        Msg::OpenArchiveSelected => vec![Effect::OpenUrl(links::ARCHIVE_URL.to_string())],
        Msg::OpenAboutSelected => vec![Effect::OpenUrl(links::ABOUT_URL.to_string())],
        Msg::ExitSelected => vec![Effect::StopPoller, Effect::Quit],
        Msg::UpdateFound(snapshot) => {
            let body = notification_body(&snapshot);
            state.record_update(snapshot);
            vec![
                Effect::ShowNotification {
                    title: "Moonlark updated!".to_string(),
                    body,
                    opens_update: true,
                },
                Effect::CelebrateAll,
            ]
        }
        Msg::NotificationClicked => match state.take_armed_update_url() {
            Some(url) => vec![Effect::OpenUrl(url)],
            None => Vec::new(),
        },
    };

    (state, effects)
}

/// Toast body: the new update's first-page title with the page count
/// underneath.
fn notification_body(update: &UpdateSnapshot) -> String {
    let mut body = update.page_title.clone().unwrap_or_default();
    if let Some(count) = update.page_count {
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(&format!("({count} pages long.)"));
    }
    body
}
