//! Sprite and icon loading.
//!
//! Sprite art ships separately (see assets/README.md); anything missing is
//! replaced by a flat placeholder frame so the app stays usable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use buddy_core::{CharacterId, SpriteKind};
use egui::{ColorImage, Context, TextureHandle, TextureOptions};

/// Frames for one sprite, ready to draw.
pub struct Sprite {
    frames: Vec<TextureHandle>,
}

impl Sprite {
    pub fn frame(&self, index: u32) -> &TextureHandle {
        &self.frames[index as usize % self.frames.len()]
    }
}

/// Lazy cache of loaded sprites and selection icons.
pub struct SpriteAssets {
    root: PathBuf,
    sprites: HashMap<(CharacterId, SpriteKind), Sprite>,
    icons: HashMap<CharacterId, Option<TextureHandle>>,
}

impl SpriteAssets {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            sprites: HashMap::new(),
            icons: HashMap::new(),
        }
    }

    /// Resolve the assets directory next to the executable, falling back
    /// to the working directory.
    pub fn locate() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .filter(|dir| dir.is_dir())
            .unwrap_or_else(|| PathBuf::from("assets"))
    }

    /// The sprite for a character in a given pose, loading it on first use.
    pub fn sprite(&mut self, ctx: &Context, character: CharacterId, kind: SpriteKind) -> &Sprite {
        let root = self.root.clone();
        self.sprites
            .entry((character, kind))
            .or_insert_with(|| load_sprite(ctx, &root, character, kind))
    }

    /// Selection-grid icon for a character, when its art is present.
    pub fn icon(&mut self, ctx: &Context, character: CharacterId) -> Option<&TextureHandle> {
        let root = self.root.clone();
        self.icons
            .entry(character)
            .or_insert_with(|| {
                let path = root.join(character.descriptor().icon);
                match load_still(&path) {
                    Ok(image) => Some(ctx.load_texture(
                        format!("icon-{}", character.descriptor().name),
                        image,
                        TextureOptions::LINEAR,
                    )),
                    Err(err) => {
                        log::warn!("selection icon missing at {path:?}: {err}");
                        None
                    }
                }
            })
            .as_ref()
    }
}

fn load_sprite(ctx: &Context, root: &Path, character: CharacterId, kind: SpriteKind) -> Sprite {
    let sprites = &character.descriptor().sprites;
    let path = match kind {
        SpriteKind::IdleLeft => sprites.idle_left,
        SpriteKind::IdleRight => sprites.idle_right,
        SpriteKind::WalkLeft => sprites.walk_left.path,
        SpriteKind::WalkRight => sprites.walk_right.path,
        SpriteKind::Dance => sprites.dance.path,
        SpriteKind::Drag => sprites.drag.path,
        SpriteKind::Stupid => sprites.stupid.path,
    };
    let full = root.join(path);
    let name = format!("{}-{kind:?}", character.descriptor().name);

    let loaded = if full.extension().is_some_and(|ext| ext == "gif") {
        load_gif_frames(&full)
    } else {
        load_still(&full).map(|image| vec![image])
    };

    match loaded {
        Ok(images) if !images.is_empty() => Sprite {
            frames: images
                .into_iter()
                .enumerate()
                .map(|(index, image)| {
                    ctx.load_texture(format!("{name}-{index}"), image, TextureOptions::NEAREST)
                })
                .collect(),
        },
        Ok(_) => {
            log::warn!("sprite at {full:?} has no frames");
            placeholder(ctx, &name)
        }
        Err(err) => {
            log::warn!("sprite art missing at {full:?}: {err}");
            placeholder(ctx, &name)
        }
    }
}

fn load_gif_frames(path: &Path) -> Result<Vec<ColorImage>, image::ImageError> {
    use image::codecs::gif::GifDecoder;
    use image::AnimationDecoder;

    let file = std::fs::File::open(path)?;
    let decoder = GifDecoder::new(std::io::BufReader::new(file))?;
    let frames = decoder.into_frames().collect_frames()?;
    Ok(frames
        .into_iter()
        .map(|frame| color_image(frame.buffer()))
        .collect())
}

fn load_still(path: &Path) -> Result<ColorImage, image::ImageError> {
    let image = image::open(path)?.to_rgba8();
    Ok(color_image(&image))
}

fn color_image(buffer: &image::RgbaImage) -> ColorImage {
    let size = [buffer.width() as usize, buffer.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, buffer.as_raw())
}

fn placeholder(ctx: &Context, name: &str) -> Sprite {
    let size = [96usize, 128];
    let mut rgba = Vec::with_capacity(size[0] * size[1] * 4);
    for _ in 0..size[0] * size[1] {
        rgba.extend_from_slice(&[0xc6, 0xc6, 0xc6, 0xff]);
    }
    let image = ColorImage::from_rgba_unmultiplied(size, &rgba);
    Sprite {
        frames: vec![ctx.load_texture(format!("{name}-placeholder"), image, TextureOptions::NEAREST)],
    }
}
