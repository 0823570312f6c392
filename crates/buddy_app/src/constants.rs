//! Embedded tunables for the platform layer.

/// Selection window dimensions.
pub const SELECTION_WINDOW_SIZE: [f32; 2] = [850.0, 400.0];

/// Buddy window dimensions, sized for the sprite art.
pub const BUDDY_WINDOW_SIZE: [f32; 2] = [300.0, 350.0];

/// Cap on machine ticks replayed after a stall, so a long freeze does not
/// come back as a movement burst.
pub const MAX_TICK_CATCHUP: u32 = 5;

/// Directory under the platform data dir holding the persisted record.
pub const DATA_DIR_NAME: &str = "deskmates";
