//! The sprite files shipped under `assets/` load and fit the playfield.

use std::path::{Path, PathBuf};

use tui_starfield::core::types::{MIN_COLS, MIN_ROWS};
use tui_starfield::core::{frame_path, Error, Sprites};

fn assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

#[test]
fn shipped_assets_load() {
    let sprites = Sprites::load(&assets_dir()).unwrap();
    assert_eq!(sprites.rocket.len(), 2);
    assert_eq!(sprites.debris.len(), 6);
    assert!(!sprites.game_over.is_blank());
    assert!(sprites.debris.iter().all(|frame| !frame.is_blank()));
}

#[test]
fn rocket_frames_share_a_footprint() {
    let sprites = Sprites::load(&assets_dir()).unwrap();
    assert_eq!(sprites.rocket[0].size(), sprites.rocket[1].size());
}

#[test]
fn sprites_fit_the_smallest_playfield() {
    let sprites = Sprites::load(&assets_dir()).unwrap();
    let (height, width) = sprites.game_over.size();
    assert!(height + 4 <= usize::from(MIN_ROWS));
    assert!(width + 2 <= usize::from(MIN_COLS));

    let (height, width) = sprites.rocket[0].size();
    assert!(height + 4 <= usize::from(MIN_ROWS));
    assert!(width + 2 <= usize::from(MIN_COLS));
}

#[test]
fn asset_names_follow_the_frame_pattern() {
    let path = frame_path(Path::new("assets"), "debris", 3);
    assert_eq!(path, Path::new("assets").join("debris_frame_3.txt"));
}

#[test]
fn missing_directory_is_an_asset_error() {
    let err = Sprites::load(Path::new("/nonexistent/starfield")).unwrap_err();
    assert!(matches!(err, Error::AssetRead { .. }));
}
