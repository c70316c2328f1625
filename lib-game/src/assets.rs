use anyhow::Context;
use macroquad::prelude::*;
use std::path::{Path, PathBuf};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
pub enum TextureId {
    Background,
    Bird,
    TopPipe,
    BottomPipe,
    PlayButton,
    Logo,
    GameOver,
}

impl TextureId {
    pub fn filename(self) -> &'static str {
        match self {
            TextureId::Background => "flappybirdbg.png",
            TextureId::Bird => "flappybird.png",
            TextureId::TopPipe => "toppipe.png",
            TextureId::BottomPipe => "bottompipe.png",
            TextureId::PlayButton => "flappyBirdPlayButton.png",
            TextureId::Logo => "flappyBirdLogo.png",
            TextureId::GameOver => "flappy-gameover.png",
        }
    }
}

pub const DEFAULT_ASSET_DIR: &str = "assets";

/// Maps asset ids to paths under one asset directory.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl AsRef<Path>) -> Self {
        AssetResolver {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get_path(&self, id: TextureId) -> PathBuf {
        self.root.join(id.filename())
    }

    pub async fn load_texture(&self, id: TextureId) -> anyhow::Result<Texture2D> {
        let path = self.get_path(id);
        let tex = load_texture(&path.to_string_lossy())
            .await
            .with_context(|| format!("Loading {path:?}"))?;

        Ok(tex)
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        AssetResolver::new(DEFAULT_ASSET_DIR)
    }
}
