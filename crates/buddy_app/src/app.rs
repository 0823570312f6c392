//! The selection window and its message pump.
//!
//! All buddy machines and the selection state live on the UI thread. The
//! tray, the poll worker forwarder, and the notification threads only ever
//! hand messages over the channel drained here.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use buddy_core::{
    update, AppState, BuddyMachine, CharacterId, Effect, Msg, ScreenBounds, UpdateSnapshot,
    FEED_URL, TICK,
};
use buddy_feed::{
    FeedEvent, FetchSettings, HttpFeedSource, PollConfig, PollWorker, UpdateRecord,
    RECORD_FILENAME,
};
use egui::{Context, ViewportCommand};

use crate::assets::SpriteAssets;
use crate::buddies;
use crate::constants::{DATA_DIR_NAME, MAX_TICK_CATCHUP};
use crate::effects::EffectRunner;
use crate::tray::Tray;

pub struct DeskmatesApp {
    state: AppState,
    machines: HashMap<CharacterId, BuddyMachine>,
    bounds: ScreenBounds,
    bounds_resolved: bool,
    assets: SpriteAssets,
    msg_rx: Receiver<Msg>,
    runner: EffectRunner,
    poller: Option<PollWorker>,
    _tray: Option<Tray>,
    last_tick: Instant,
    tick_debt: Duration,
    quitting: bool,
}

impl DeskmatesApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let egui_ctx = cc.egui_ctx.clone();
        let (msg_tx, msg_rx) = mpsc::channel();

        let assets_root = SpriteAssets::locate();
        let tray = match Tray::spawn(&assets_root, msg_tx.clone(), egui_ctx.clone()) {
            Ok(tray) => Some(tray),
            Err(err) => {
                log::warn!("tray icon unavailable: {err}");
                None
            }
        };

        let poller = Some(spawn_poller(msg_tx.clone(), egui_ctx.clone()));
        let runner = EffectRunner::new(msg_tx, egui_ctx);

        Self {
            state: AppState::new(),
            machines: HashMap::new(),
            bounds: ScreenBounds::FALLBACK,
            bounds_resolved: false,
            assets: SpriteAssets::new(assets_root),
            msg_rx,
            runner,
            poller,
            _tray: tray,
            last_tick: Instant::now(),
            tick_debt: Duration::ZERO,
            quitting: false,
        }
    }

    fn drain_messages(&mut self, ctx: &Context) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg, ctx);
        }
    }

    fn dispatch(&mut self, msg: Msg, ctx: &Context) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.apply_effect(effect, ctx);
        }
    }

    fn apply_effect(&mut self, effect: Effect, ctx: &Context) {
        match effect {
            Effect::SpawnBuddy(id) => {
                let bounds = self.bounds;
                let machine = self
                    .machines
                    .entry(id)
                    .or_insert_with(|| BuddyMachine::new(id, bounds));
                machine.spawn();
            }
            Effect::DespawnBuddy(id) => {
                if let Some(machine) = self.machines.get_mut(&id) {
                    machine.halt();
                }
            }
            Effect::ShowWindow => {
                ctx.send_viewport_cmd(ViewportCommand::Visible(true));
                ctx.send_viewport_cmd(ViewportCommand::Focus);
            }
            Effect::HideWindow => {
                ctx.send_viewport_cmd(ViewportCommand::Visible(false));
            }
            Effect::ShowNotification {
                title,
                body,
                opens_update,
            } => {
                self.runner.show_notification(title, body, opens_update);
            }
            Effect::CelebrateAll => {
                for id in self.state.active().collect::<Vec<_>>() {
                    if let Some(machine) = self.machines.get_mut(&id) {
                        machine.celebrate();
                    }
                }
            }
            Effect::OpenUrl(url) => self.runner.open_url(url),
            Effect::StopPoller => {
                if let Some(mut poller) = self.poller.take() {
                    poller.stop();
                }
            }
            Effect::Quit => {
                self.quitting = true;
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
        }
    }

    /// Replay wall-clock time into fixed machine ticks.
    fn advance_machines(&mut self) {
        let now = Instant::now();
        self.tick_debt += now.duration_since(self.last_tick);
        self.last_tick = now;

        let mut steps = 0;
        while self.tick_debt >= TICK && steps < MAX_TICK_CATCHUP {
            self.tick_debt -= TICK;
            steps += 1;
            for id in self.state.active().collect::<Vec<_>>() {
                if let Some(machine) = self.machines.get_mut(&id) {
                    machine.tick();
                }
            }
        }
        if steps == MAX_TICK_CATCHUP {
            self.tick_debt = Duration::ZERO;
        }
    }

    /// The work area is only known once the first frame runs.
    fn resolve_bounds(&mut self, ctx: &Context) {
        if self.bounds_resolved {
            return;
        }
        self.bounds_resolved = true;

        let monitor = ctx.input(|i| i.viewport().monitor_size);
        match monitor.and_then(|size| {
            ScreenBounds::from_displays([(size.x as i32, size.y as i32)])
        }) {
            Some(bounds) => self.bounds = bounds,
            None => {
                log::warn!(
                    "could not determine the work area, using {:?}",
                    ScreenBounds::FALLBACK
                );
                self.bounds = ScreenBounds::FALLBACK;
            }
        }
    }

    fn show_selection_window(&mut self, ctx: &Context) {
        let view = self.state.view();
        let mut toggled = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Pick your desk buddies");
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for button in &view.buttons {
                    let clicked = match self.assets.icon(ui.ctx(), button.id) {
                        Some(texture) => ui
                            .add(egui::ImageButton::new(texture).selected(button.checked))
                            .clicked(),
                        None => ui.selectable_label(button.checked, button.name).clicked(),
                    };
                    if clicked {
                        toggled.push(button.id);
                    }
                }
            });
        });

        for id in toggled {
            self.dispatch(Msg::CharacterToggled(id), ctx);
        }
    }

    fn show_buddies(&mut self, ctx: &Context) {
        for id in self.state.active().collect::<Vec<_>>() {
            if let Some(machine) = self.machines.get_mut(&id) {
                buddies::show(ctx, machine, &mut self.assets);
            }
        }
    }
}

impl eframe::App for DeskmatesApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Transparent clear so buddy viewports composite over the desktop.
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.drain_messages(ctx);
        self.advance_machines();

        if ctx.input(|i| i.viewport().close_requested()) && !self.quitting {
            // The close button hides to the tray; only the tray's Exit
            // action really quits.
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            self.dispatch(Msg::CloseRequested, ctx);
        }

        self.resolve_bounds(ctx);
        self.show_selection_window(ctx);
        self.show_buddies(ctx);

        // Machines are clocked off repaints; keep them coming while any
        // buddy is on screen.
        if self.state.active().next().is_some() {
            ctx.request_repaint_after(TICK);
        }
    }
}

fn spawn_poller(msg_tx: Sender<Msg>, egui_ctx: Context) -> PollWorker {
    let record_path = dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(RECORD_FILENAME);
    let config = PollConfig::new(FEED_URL, record_path);

    let (event_tx, event_rx) = mpsc::channel();
    let worker = PollWorker::spawn(
        config,
        Arc::new(HttpFeedSource::new(FetchSettings::default())),
        event_tx,
    );

    // Translate worker events into selection messages on a forwarder
    // thread so the worker never blocks on the UI.
    thread::spawn(move || {
        while let Ok(FeedEvent::UpdateFound(record)) = event_rx.recv() {
            if msg_tx
                .send(Msg::UpdateFound(snapshot_from_record(record)))
                .is_err()
            {
                break;
            }
            egui_ctx.request_repaint();
        }
    });

    worker
}

/// Reduce the persisted record to what the selection logic needs.
fn snapshot_from_record(record: UpdateRecord) -> UpdateSnapshot {
    UpdateSnapshot {
        date: record.last_update_date,
        page_title: record.last_update_first_page_title,
        page_url: record.last_update_first_page_url,
        page_count: record.last_update_page_count,
    }
}
