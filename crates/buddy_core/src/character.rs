//! Static descriptors for the four Moonlark desk buddies.
//!
//! One generic machine consumes these records; adding a character is a new
//! table entry plus its sprite art under `assets/characters/`.

use self::CharacterId::{Juniper, Milo, Piper, Wren};

/// Identifies one of the built-in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterId {
    Juniper,
    Milo,
    Piper,
    Wren,
}

impl CharacterId {
    /// All characters, in selection-grid order.
    pub const ALL: [CharacterId; 4] = [Juniper, Milo, Piper, Wren];

    /// The static descriptor for this character.
    pub fn descriptor(self) -> &'static Character {
        &CHARACTERS[self as usize]
    }
}

/// A looping animation: sprite file plus its frame count. The machine's
/// tick clock advances the frames; a loop completes when the index wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub path: &'static str,
    pub frames: u32,
}

/// Every sprite one buddy needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSet {
    pub idle_left: &'static str,
    pub idle_right: &'static str,
    pub walk_left: Animation,
    pub walk_right: Animation,
    pub dance: Animation,
    pub drag: Animation,
    pub stupid: Animation,
}

/// One buddy's identity: display name, selection icon, sprite set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: &'static str,
    pub icon: &'static str,
    pub sprites: SpriteSet,
}

/// Descriptor table, indexed by [`CharacterId`] discriminant.
pub const CHARACTERS: [Character; 4] = [
    Character {
        id: Juniper,
        name: "Juniper",
        icon: "characters/juniper/juniper-icon.png",
        sprites: SpriteSet {
            idle_left: "characters/juniper/juniper-front-left.png",
            idle_right: "characters/juniper/juniper-front-right.png",
            walk_left: Animation {
                path: "characters/juniper/juniper-walk-left.gif",
                frames: 4,
            },
            walk_right: Animation {
                path: "characters/juniper/juniper-walk-right.gif",
                frames: 4,
            },
            dance: Animation {
                path: "characters/juniper/juniper-dance.gif",
                frames: 8,
            },
            drag: Animation {
                path: "characters/juniper/juniper-dangle.gif",
                frames: 6,
            },
            stupid: Animation {
                path: "characters/juniper/juniper-trip.gif",
                frames: 10,
            },
        },
    },
    Character {
        id: Milo,
        name: "Milo",
        icon: "characters/milo/milo-icon.png",
        sprites: SpriteSet {
            idle_left: "characters/milo/milo-front-left.png",
            idle_right: "characters/milo/milo-front-right.png",
            walk_left: Animation {
                path: "characters/milo/milo-walk-left.gif",
                frames: 4,
            },
            walk_right: Animation {
                path: "characters/milo/milo-walk-right.gif",
                frames: 4,
            },
            dance: Animation {
                path: "characters/milo/milo-bounce.gif",
                frames: 6,
            },
            drag: Animation {
                path: "characters/milo/milo-dangle.gif",
                frames: 6,
            },
            stupid: Animation {
                path: "characters/milo/milo-nap.gif",
                frames: 12,
            },
        },
    },
    Character {
        id: Piper,
        name: "Piper",
        icon: "characters/piper/piper-icon.png",
        sprites: SpriteSet {
            idle_left: "characters/piper/piper-front-left.png",
            idle_right: "characters/piper/piper-front-right.png",
            walk_left: Animation {
                path: "characters/piper/piper-walk-left.gif",
                frames: 4,
            },
            walk_right: Animation {
                path: "characters/piper/piper-walk-right.gif",
                frames: 4,
            },
            dance: Animation {
                path: "characters/piper/piper-spin.gif",
                frames: 8,
            },
            drag: Animation {
                path: "characters/piper/piper-dangle.gif",
                frames: 6,
            },
            stupid: Animation {
                path: "characters/piper/piper-facepalm.gif",
                frames: 9,
            },
        },
    },
    Character {
        id: Wren,
        name: "Wren",
        icon: "characters/wren/wren-icon.png",
        sprites: SpriteSet {
            idle_left: "characters/wren/wren-front-left.png",
            idle_right: "characters/wren/wren-front-right.png",
            walk_left: Animation {
                path: "characters/wren/wren-walk-left.gif",
                frames: 4,
            },
            walk_right: Animation {
                path: "characters/wren/wren-walk-right.gif",
                frames: 4,
            },
            dance: Animation {
                path: "characters/wren/wren-hop.gif",
                frames: 7,
            },
            drag: Animation {
                path: "characters/wren/wren-dangle.gif",
                frames: 6,
            },
            stupid: Animation {
                path: "characters/wren/wren-tangle.gif",
                frames: 11,
            },
        },
    },
];
