//! Buddy core: pure state machines for the selection window and the
//! on-screen buddies.
mod bounds;
mod character;
mod effect;
mod links;
mod machine;
mod msg;
mod state;
mod update;
mod view_model;

pub use bounds::{
    bounce, Point, ScreenBounds, BOUNCE_BOTTOM_INSET, BOUNCE_LEFT, BOUNCE_RIGHT_INSET, BOUNCE_TOP,
    DRAG_BOTTOM_INSET, DRAG_LEFT, DRAG_RIGHT_INSET, DRAG_TOP,
};
pub use character::{Animation, Character, CharacterId, SpriteSet, CHARACTERS};
pub use effect::Effect;
pub use links::{ABOUT_URL, ARCHIVE_URL, COMIC_URL, FEED_URL};
pub use machine::{
    choose_end_state, choose_walk_direction, Activity, BuddyMachine, Pick, SpriteKind, TICK,
    WALK_STEP,
};
pub use msg::Msg;
pub use state::{AppState, UpdateSnapshot};
pub use update::{update, APP_NAME};
pub use view_model::{AppViewModel, CharacterButtonView};
