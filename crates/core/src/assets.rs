//! Frame assets on disk.
//!
//! Assets are plain text files named `{name}_frame_{n}.txt`, numbered from 1.
//! Any missing, unreadable or blank file is fatal: there is no partial load.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::types::{DEBRIS_ASSET, DEBRIS_FRAMES, GAME_OVER_ASSET, ROCKET_ASSET, ROCKET_FRAMES};

/// Path of frame `n` of asset `name`.
pub fn frame_path(dir: &Path, name: &str, n: usize) -> PathBuf {
    dir.join(format!("{name}_frame_{n}.txt"))
}

/// Load one frame file.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let text = fs::read_to_string(path).map_err(|source| Error::AssetRead {
        path: path.to_path_buf(),
        source,
    })?;
    let frame = Frame::from_text(&text);
    if frame.is_blank() {
        return Err(Error::EmptyAsset {
            path: path.to_path_buf(),
        });
    }
    Ok(frame)
}

/// Load frames `1..=count` of asset `name`, in order.
pub fn load_frame_set(dir: &Path, name: &str, count: usize) -> Result<Vec<Frame>> {
    if count == 0 {
        return Err(Error::EmptyFrameSet {
            name: name.to_string(),
        });
    }
    (1..=count)
        .map(|n| load_frame(&frame_path(dir, name, n)))
        .collect()
}

/// Every sprite the game needs, loaded once and shared by all behaviors.
#[derive(Debug, Clone)]
pub struct Sprites {
    pub rocket: Rc<[Frame]>,
    pub debris: Vec<Rc<Frame>>,
    pub game_over: Rc<Frame>,
}

impl Sprites {
    pub fn load(dir: &Path) -> Result<Self> {
        let rocket = load_frame_set(dir, ROCKET_ASSET, ROCKET_FRAMES)?;
        let debris = load_frame_set(dir, DEBRIS_ASSET, DEBRIS_FRAMES)?;
        let game_over = load_frame(&frame_path(dir, GAME_OVER_ASSET, 1))?;

        log::info!(
            "loaded sprites from {}: {} rocket, {} debris",
            dir.display(),
            rocket.len(),
            debris.len()
        );

        Ok(Self {
            rocket: rocket.into(),
            debris: debris.into_iter().map(Rc::new).collect(),
            game_over: Rc::new(game_over),
        })
    }
}
