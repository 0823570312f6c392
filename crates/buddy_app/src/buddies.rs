//! Buddy windows: one frameless, transparent, always-on-top viewport per
//! active character. Each window mirrors its machine's position and feeds
//! pointer input back into it.

use buddy_core::BuddyMachine;
use egui::{Context, Pos2, Sense, ViewportBuilder, ViewportCommand, ViewportId};

use crate::assets::SpriteAssets;
use crate::constants::BUDDY_WINDOW_SIZE;

/// Draw one buddy viewport and wire its pointer events into the machine.
pub fn show(ctx: &Context, machine: &mut BuddyMachine, assets: &mut SpriteAssets) {
    let character = machine.character();
    let viewport_id = ViewportId::from_hash_of(("buddy", character));
    let pos = machine.pos();

    let builder = ViewportBuilder::default()
        .with_title(character.descriptor().name)
        .with_inner_size(BUDDY_WINDOW_SIZE)
        .with_position([pos.x as f32, pos.y as f32])
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_taskbar(false)
        .with_resizable(false);

    ctx.show_viewport_immediate(viewport_id, builder, |ctx, _class| {
        // Keep the OS window glued to the machine's position.
        ctx.send_viewport_cmd(ViewportCommand::OuterPosition(Pos2::new(
            pos.x as f32,
            pos.y as f32,
        )));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                {
                    let sprite = assets.sprite(ui.ctx(), character, machine.sprite());
                    let texture = sprite.frame(machine.frame());
                    egui::Image::new(texture).paint_at(ui, rect);
                }

                let response = ui.allocate_rect(rect, Sense::click_and_drag());
                if response.drag_started() {
                    machine.begin_drag();
                }
                if response.dragged() {
                    let delta = response.drag_delta();
                    machine.drag_by(delta.x as i32, delta.y as i32);
                }
                if response.drag_stopped() {
                    machine.end_drag();
                }
            });
    });
}
