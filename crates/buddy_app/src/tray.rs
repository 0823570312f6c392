//! System tray icon and context menu.

use std::path::Path;
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::Result;
use buddy_core::Msg;
use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem};
use tray_icon::{Icon, MouseButton, TrayIcon, TrayIconBuilder, TrayIconEvent};

/// Keeps the tray icon alive and forwards its events as messages.
pub struct Tray {
    _icon: TrayIcon,
}

struct MenuIds {
    open: MenuId,
    comic: MenuId,
    archive: MenuId,
    about: MenuId,
    exit: MenuId,
}

impl Tray {
    pub fn spawn(assets_root: &Path, msg_tx: Sender<Msg>, egui_ctx: egui::Context) -> Result<Self> {
        let open_item = MenuItem::new("Open", true, None);
        let comic_item = MenuItem::new("Open Moonlark", true, None);
        let archive_item = MenuItem::new("Open Moonlark Archive", true, None);
        let about_item = MenuItem::new("About", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let menu = Menu::new();
        menu.append(&open_item)?;
        menu.append(&comic_item)?;
        menu.append(&archive_item)?;
        menu.append(&about_item)?;
        menu.append(&exit_item)?;

        let icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(buddy_core::APP_NAME)
            .with_icon(load_icon(assets_root))
            .build()?;

        let ids = MenuIds {
            open: open_item.id().clone(),
            comic: comic_item.id().clone(),
            archive: archive_item.id().clone(),
            about: about_item.id().clone(),
            exit: exit_item.id().clone(),
        };
        spawn_menu_forwarder(ids, msg_tx.clone(), egui_ctx.clone());
        spawn_click_forwarder(msg_tx, egui_ctx);

        Ok(Self { _icon: icon })
    }
}

fn spawn_menu_forwarder(ids: MenuIds, msg_tx: Sender<Msg>, egui_ctx: egui::Context) {
    let receiver = MenuEvent::receiver();
    thread::spawn(move || {
        while let Ok(event) = receiver.recv() {
            let msg = if event.id == ids.open {
                Msg::OpenSelected
            } else if event.id == ids.comic {
                Msg::OpenComicSelected
            } else if event.id == ids.archive {
                Msg::OpenArchiveSelected
            } else if event.id == ids.about {
                Msg::OpenAboutSelected
            } else if event.id == ids.exit {
                Msg::ExitSelected
            } else {
                continue;
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
            egui_ctx.request_repaint();
        }
    });
}

fn spawn_click_forwarder(msg_tx: Sender<Msg>, egui_ctx: egui::Context) {
    let receiver = TrayIconEvent::receiver();
    thread::spawn(move || {
        while let Ok(event) = receiver.recv() {
            // A plain left click re-opens the selection window.
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                ..
            } = event
            {
                if msg_tx.send(Msg::OpenSelected).is_err() {
                    break;
                }
                egui_ctx.request_repaint();
            }
        }
    });
}

fn load_icon(assets_root: &Path) -> Icon {
    let path = assets_root.join("icons/logo.png");
    match image::open(&path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            if let Ok(icon) = Icon::from_rgba(rgba.into_raw(), width, height) {
                return icon;
            }
            log::warn!("tray icon at {path:?} has unusable dimensions");
        }
        Err(err) => log::warn!("tray icon art missing at {path:?}: {err}"),
    }

    // Flat fallback square so the tray entry still exists without art.
    let (width, height) = (32u32, 32u32);
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..width * height {
        rgba.extend_from_slice(&[0x3a, 0x5f, 0xb0, 0xff]);
    }
    Icon::from_rgba(rgba, width, height).expect("fallback icon dimensions are valid")
}
