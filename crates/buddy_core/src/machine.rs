//! The per-buddy animation state machine.
//!
//! Advanced by [`BuddyMachine::tick`] at the fixed [`TICK`] cadence; every
//! duration below is a tick count. Animations are frame sequences driven by
//! the same clock, so loop detection stays deterministic under test.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bounds::{bounce, Point, ScreenBounds};
use crate::character::{CharacterId, SpriteSet};

/// Cadence of the machine clock.
pub const TICK: Duration = Duration::from_millis(20);

/// Pixels moved per tick on each axis while walking.
pub const WALK_STEP: i32 = 4;

/// Ticks between a walk being picked and movement starting (500 ms).
const WALK_START_DELAY: u32 = 25;
/// Ticks a walk keeps moving before settling (2000 ms).
const WALK_DURATION: u32 = 100;
/// Idle dwell before a dance or stupid action starts is one or two of
/// these units (1 s each).
const ACTION_DELAY_UNIT: u32 = 50;
/// Ticks each animation frame stays on screen (100 ms).
const TICKS_PER_FRAME: u32 = 5;

/// Where a freshly spawned buddy lands: centered for a 1080p layout.
const SPAWN_POS: Point = Point { x: 810, y: 412 };

/// One randomized end-state choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Walk,
    Dance,
    Stupid,
}

/// Externally observable buddy activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Walk,
    Dance,
    Stupid,
    Drag,
    Stop,
}

/// Which sprite the platform should draw for the current machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    IdleLeft,
    IdleRight,
    WalkLeft,
    WalkRight,
    Dance,
    Drag,
    Stupid,
}

/// Advances animation frames on the machine tick; reports wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameClock {
    frame: u32,
    frames: u32,
    ticks: u32,
}

impl FrameClock {
    fn new(frames: u32) -> Self {
        Self {
            frame: 0,
            frames: frames.max(1),
            ticks: 0,
        }
    }

    /// One tick forward; true when the sequence wrapped past its last frame.
    fn advance(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks < TICKS_PER_FRAME {
            return false;
        }
        self.ticks = 0;
        self.frame += 1;
        if self.frame >= self.frames {
            self.frame = 0;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    /// Counting down the idle dwell before a picked action starts.
    Pending { next: Pick, ticks_left: u32 },
    Walking { ticks_left: u32, anim: FrameClock },
    Dancing {
        anim: FrameClock,
        loops_done: u8,
        loops_target: u8,
    },
    Goofing {
        anim: FrameClock,
        loops_done: u8,
        loops_target: u8,
    },
    Dragging { anim: FrameClock },
    Stopped,
}

/// One on-screen character's independent state machine.
#[derive(Debug, Clone)]
pub struct BuddyMachine {
    character: CharacterId,
    bounds: ScreenBounds,
    rng: StdRng,
    pos: Point,
    dir: (i32, i32),
    mode: Mode,
    last_pick: Option<Pick>,
}

impl BuddyMachine {
    pub fn new(character: CharacterId, bounds: ScreenBounds) -> Self {
        Self::with_rng(character, bounds, StdRng::from_entropy())
    }

    /// Machine with a caller-provided rng, for reproducible tests.
    pub fn with_rng(character: CharacterId, bounds: ScreenBounds, rng: StdRng) -> Self {
        Self {
            character,
            bounds,
            rng,
            pos: SPAWN_POS,
            dir: (-WALK_STEP, WALK_STEP),
            mode: Mode::Idle,
            last_pick: None,
        }
    }

    pub fn character(&self) -> CharacterId {
        self.character
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn activity(&self) -> Activity {
        match self.mode {
            Mode::Idle => Activity::Idle,
            Mode::Pending { next, .. } => match next {
                Pick::Walk => Activity::Walk,
                Pick::Dance => Activity::Dance,
                Pick::Stupid => Activity::Stupid,
            },
            Mode::Walking { .. } => Activity::Walk,
            Mode::Dancing { .. } => Activity::Dance,
            Mode::Goofing { .. } => Activity::Stupid,
            Mode::Dragging { .. } => Activity::Drag,
            Mode::Stopped => Activity::Stop,
        }
    }

    /// Sprite to draw right now. Idle, pending, and stopped buddies show
    /// the still facing the last horizontal walk direction.
    pub fn sprite(&self) -> SpriteKind {
        match self.mode {
            Mode::Idle | Mode::Pending { .. } | Mode::Stopped => {
                if self.dir.0 > 0 {
                    SpriteKind::IdleRight
                } else {
                    SpriteKind::IdleLeft
                }
            }
            Mode::Walking { .. } => {
                if self.dir.0 > 0 {
                    SpriteKind::WalkRight
                } else {
                    SpriteKind::WalkLeft
                }
            }
            Mode::Dancing { .. } => SpriteKind::Dance,
            Mode::Goofing { .. } => SpriteKind::Stupid,
            Mode::Dragging { .. } => SpriteKind::Drag,
        }
    }

    /// Current animation frame index for the sprite from [`Self::sprite`].
    pub fn frame(&self) -> u32 {
        match self.mode {
            Mode::Walking { anim, .. }
            | Mode::Dancing { anim, .. }
            | Mode::Goofing { anim, .. }
            | Mode::Dragging { anim } => anim.frame,
            _ => 0,
        }
    }

    /// Bring a new or previously stopped buddy on screen and pick its
    /// first action.
    pub fn spawn(&mut self) {
        self.pos = SPAWN_POS;
        self.dir = (-WALK_STEP, WALK_STEP);
        self.end_state();
    }

    /// Halt for despawn. The machine is retained so a re-spawn is cheap.
    pub fn halt(&mut self) {
        self.mode = Mode::Stopped;
    }

    /// Interrupt whatever is running and dance. Unlike the end-state
    /// chooser this never re-picks, even straight after another dance.
    pub fn celebrate(&mut self) {
        self.start_dance();
    }

    /// Pointer went down over the sprite: suspend everything and show the
    /// drag animation.
    pub fn begin_drag(&mut self) {
        let frames = self.sprites().drag.frames;
        self.mode = Mode::Dragging {
            anim: FrameClock::new(frames),
        };
    }

    /// Pointer moved while dragging; the new position is clamped to the
    /// drag margins. Ignored outside of a drag.
    pub fn drag_by(&mut self, dx: i32, dy: i32) {
        if !matches!(self.mode, Mode::Dragging { .. }) {
            return;
        }
        let target = Point {
            x: self.pos.x + dx,
            y: self.pos.y + dy,
        };
        self.pos = self.bounds.clamp_drag(target);
    }

    /// Pointer released: back to the idle still, then a fresh pick.
    pub fn end_drag(&mut self) {
        if !matches!(self.mode, Mode::Dragging { .. }) {
            return;
        }
        self.end_state();
    }

    /// Advance the machine by one fixed tick.
    pub fn tick(&mut self) {
        match self.mode {
            Mode::Idle | Mode::Stopped => {}
            Mode::Pending { next, ticks_left } => {
                let ticks_left = ticks_left - 1;
                if ticks_left == 0 {
                    match next {
                        Pick::Walk => self.start_walk(),
                        Pick::Dance => self.start_dance(),
                        Pick::Stupid => self.start_goof(),
                    }
                } else {
                    self.mode = Mode::Pending { next, ticks_left };
                }
            }
            Mode::Walking {
                ticks_left,
                mut anim,
            } => {
                anim.advance();
                let stepped = Point {
                    x: self.pos.x + self.dir.0,
                    y: self.pos.y + self.dir.1,
                };
                let (pos, dir) = bounce(self.bounds, stepped, self.dir);
                if dir.0 != self.dir.0 {
                    // Horizontal bounce flips the facing; restart the walk
                    // animation in the new direction.
                    let frames = if dir.0 > 0 {
                        self.sprites().walk_right.frames
                    } else {
                        self.sprites().walk_left.frames
                    };
                    anim = FrameClock::new(frames);
                }
                self.pos = pos;
                self.dir = dir;
                let ticks_left = ticks_left - 1;
                if ticks_left == 0 {
                    self.end_state();
                } else {
                    self.mode = Mode::Walking { ticks_left, anim };
                }
            }
            Mode::Dancing {
                mut anim,
                mut loops_done,
                loops_target,
            } => {
                if anim.advance() {
                    loops_done += 1;
                }
                if loops_done >= loops_target {
                    self.end_state();
                } else {
                    self.mode = Mode::Dancing {
                        anim,
                        loops_done,
                        loops_target,
                    };
                }
            }
            Mode::Goofing {
                mut anim,
                mut loops_done,
                loops_target,
            } => {
                if anim.advance() {
                    loops_done += 1;
                }
                if loops_done >= loops_target {
                    self.end_state();
                } else {
                    self.mode = Mode::Goofing {
                        anim,
                        loops_done,
                        loops_target,
                    };
                }
            }
            Mode::Dragging { mut anim } => {
                anim.advance();
                self.mode = Mode::Dragging { anim };
            }
        }
    }

    /// Settle to the idle still and choose the next action. Walk starts
    /// moving after its fixed delay; dance and stupid dwell one or two
    /// seconds first.
    fn end_state(&mut self) {
        let pick = choose_end_state(&mut self.rng, self.last_pick);
        let ticks_left = match pick {
            Pick::Walk => WALK_START_DELAY,
            Pick::Dance | Pick::Stupid => self.rng.gen_range(1..=2u32) * ACTION_DELAY_UNIT,
        };
        self.last_pick = Some(pick);
        self.mode = Mode::Pending {
            next: pick,
            ticks_left,
        };
    }

    fn start_walk(&mut self) {
        self.dir = choose_walk_direction(&mut self.rng);
        let frames = if self.dir.0 > 0 {
            self.sprites().walk_right.frames
        } else {
            self.sprites().walk_left.frames
        };
        self.mode = Mode::Walking {
            ticks_left: WALK_DURATION,
            anim: FrameClock::new(frames),
        };
    }

    fn start_dance(&mut self) {
        let frames = self.sprites().dance.frames;
        let loops_target: u8 = self.rng.gen_range(2..=3);
        self.last_pick = Some(Pick::Dance);
        self.mode = Mode::Dancing {
            anim: FrameClock::new(frames),
            loops_done: 0,
            loops_target,
        };
    }

    fn start_goof(&mut self) {
        let frames = self.sprites().stupid.frames;
        let loops_target: u8 = self.rng.gen_range(3..=5);
        self.mode = Mode::Goofing {
            anim: FrameClock::new(frames),
            loops_done: 0,
            loops_target,
        };
    }

    fn sprites(&self) -> &'static SpriteSet {
        &self.character.descriptor().sprites
    }
}

/// Uniform pick over walk, dance, and stupid, re-picking when dance or
/// stupid would immediately repeat. Walk has no such restriction.
pub fn choose_end_state(rng: &mut impl Rng, previous: Option<Pick>) -> Pick {
    loop {
        let pick = match rng.gen_range(0..3) {
            0 => Pick::Walk,
            1 => Pick::Dance,
            _ => Pick::Stupid,
        };
        let repeat = matches!(pick, Pick::Dance | Pick::Stupid) && previous == Some(pick);
        if !repeat {
            return pick;
        }
    }
}

/// Uniform walk direction: each axis independently +/-[`WALK_STEP`].
pub fn choose_walk_direction(rng: &mut impl Rng) -> (i32, i32) {
    let dx = if rng.gen_bool(0.5) { WALK_STEP } else { -WALK_STEP };
    let dy = if rng.gen_bool(0.5) { WALK_STEP } else { -WALK_STEP };
    (dx, dy)
}
