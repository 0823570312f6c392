//! Side-effect execution for the pure selection logic: browser launches
//! and desktop notifications, both off the UI thread.

use std::sync::mpsc::Sender;
use std::thread;

use buddy_core::Msg;

pub struct EffectRunner {
    msg_tx: Sender<Msg>,
    egui_ctx: egui::Context,
}

impl EffectRunner {
    pub fn new(msg_tx: Sender<Msg>, egui_ctx: egui::Context) -> Self {
        Self { msg_tx, egui_ctx }
    }

    /// Open a URL in the default browser on a short-lived thread.
    pub fn open_url(&self, url: String) {
        thread::spawn(move || {
            if let Err(err) = open::that(&url) {
                log::warn!("failed to open {url}: {err}");
            }
        });
    }

    /// Show a desktop notification. When `opens_update` is set and the
    /// platform supports notification actions, a click comes back as
    /// [`Msg::NotificationClicked`].
    pub fn show_notification(&self, title: String, body: String, opens_update: bool) {
        let msg_tx = self.msg_tx.clone();
        let egui_ctx = self.egui_ctx.clone();
        thread::spawn(move || {
            let mut notification = notify_rust::Notification::new();
            notification
                .summary(&title)
                .body(&body)
                .appname(buddy_core::APP_NAME);

            #[cfg(all(unix, not(target_os = "macos")))]
            {
                if opens_update {
                    notification.action("default", "Read it");
                }
                match notification.show() {
                    Ok(handle) if opens_update => {
                        handle.wait_for_action(|action| {
                            if action == "default" {
                                let _ = msg_tx.send(Msg::NotificationClicked);
                                egui_ctx.request_repaint();
                            }
                        });
                    }
                    Ok(_) => {}
                    Err(err) => log::warn!("notification failed: {err}"),
                }
            }

            #[cfg(not(all(unix, not(target_os = "macos"))))]
            {
                let _ = (opens_update, msg_tx, egui_ctx);
                if let Err(err) = notification.show() {
                    log::warn!("notification failed: {err}");
                }
            }
        });
    }
}
