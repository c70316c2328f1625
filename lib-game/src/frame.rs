//! What to draw this frame, independent of how it gets drawn.
//! The draw list is built from the session and the set of loaded
//! textures. Sprites whose texture is not loaded are left out.

use macroquad::prelude::*;

use crate::{CANVAS_HEIGHT, CANVAS_WIDTH, GameMode, GameSession, TextureId};

const PLAY_BUTTON_WIDTH: f32 = 115.0;
const PLAY_BUTTON_HEIGHT: f32 = 64.0;
const LOGO_WIDTH: f32 = 300.0;
const GAMEOVER_WIDTH: f32 = 400.0;
const GAMEOVER_HEIGHT: f32 = 80.0;
const GAMEOVER_SCORE_OFFSET: f32 = 50.0;
const SCORE_FONT_SIZE: u16 = 45;
const SCORE_POS: Vec2 = vec2(5.0, 45.0);
const TEXT_COLOR: Color = WHITE;

/// Tells which textures are ready and how big they are.
pub trait TextureSizes {
    fn texture_size(&self, id: TextureId) -> Option<Vec2>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Draw the whole texture scaled into `rect`.
    Sprite { texture: TextureId, rect: Rect },
    /// `pos` is the anchor on the baseline, see `align`.
    Text {
        text: String,
        pos: Vec2,
        align: TextAlign,
        font_size: u16,
        color: Color,
    },
}

#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cmds: Vec<DrawCmd>,
}

impl Frame {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    pub fn build(session: &GameSession, textures: &impl TextureSizes) -> Self {
        let mut frame = Frame::new();
        frame.rebuild(session, textures);

        frame
    }

    /// Replaces the contents of the frame, reusing its buffer.
    pub fn rebuild(&mut self, session: &GameSession, textures: &impl TextureSizes) {
        self.cmds.clear();

        match session.mode() {
            GameMode::Menu => self.put_menu(textures),
            GameMode::Playing => self.put_gameplay(session, textures),
            GameMode::GameOver => self.put_game_over(session, textures),
        }
    }

    pub fn sprites(&self) -> impl Iterator<Item = (TextureId, Rect)> + '_ {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Sprite { texture, rect } => Some((*texture, *rect)),
            DrawCmd::Text { .. } => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            DrawCmd::Sprite { .. } => None,
        })
    }

    fn put_menu(&mut self, textures: &impl TextureSizes) {
        self.put_sprite(
            textures,
            TextureId::Background,
            Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT),
        );
        // NOTE: centered as if the button were 115.5 wide
        self.put_sprite(
            textures,
            TextureId::PlayButton,
            Rect::new(
                CANVAS_WIDTH / 2.0 - 115.5 / 2.0,
                CANVAS_HEIGHT / 2.0 - PLAY_BUTTON_HEIGHT / 2.0,
                PLAY_BUTTON_WIDTH,
                PLAY_BUTTON_HEIGHT,
            ),
        );

        let Some(logo_size) = textures.texture_size(TextureId::Logo) else {
            return;
        };
        let logo_height = (logo_size.y / logo_size.x) * LOGO_WIDTH;
        self.put_sprite(
            textures,
            TextureId::Logo,
            Rect::new(
                CANVAS_WIDTH / 2.0 - LOGO_WIDTH / 2.0,
                CANVAS_HEIGHT / 4.0,
                LOGO_WIDTH,
                logo_height,
            ),
        );
    }

    fn put_gameplay(&mut self, session: &GameSession, textures: &impl TextureSizes) {
        let bird = session.bird();
        self.put_sprite(
            textures,
            TextureId::Bird,
            Rect::new(bird.pos.x, bird.pos.y, bird.size().x, bird.size().y),
        );

        for pipe in session.pipes().iter() {
            self.put_sprite(
                textures,
                pipe.texture,
                Rect::new(pipe.pos.x, pipe.pos.y, pipe.size.x, pipe.size.y),
            );
        }

        self.put_text(
            score_text(session.score()),
            SCORE_POS,
            TextAlign::Left,
        );
    }

    fn put_game_over(&mut self, session: &GameSession, textures: &impl TextureSizes) {
        let banner = Rect::new(
            (CANVAS_WIDTH - GAMEOVER_WIDTH) / 2.0,
            CANVAS_HEIGHT / 3.0,
            GAMEOVER_WIDTH,
            GAMEOVER_HEIGHT,
        );
        if textures.texture_size(TextureId::GameOver).is_none() {
            return;
        }

        self.put_sprite(textures, TextureId::GameOver, banner);
        self.put_text(
            final_score_text(session.score()),
            vec2(
                CANVAS_WIDTH / 2.0,
                banner.bottom() + GAMEOVER_SCORE_OFFSET,
            ),
            TextAlign::Center,
        );
    }

    fn put_sprite(&mut self, textures: &impl TextureSizes, texture: TextureId, rect: Rect) {
        if textures.texture_size(texture).is_none() {
            return;
        }

        self.cmds.push(DrawCmd::Sprite { texture, rect });
    }

    fn put_text(&mut self, text: String, pos: Vec2, align: TextAlign) {
        self.cmds.push(DrawCmd::Text {
            text,
            pos,
            align,
            font_size: SCORE_FONT_SIZE,
            color: TEXT_COLOR,
        });
    }
}

/// The running score keeps its half points.
fn score_text(score: f32) -> String {
    format!("{score}")
}

fn final_score_text(score: f32) -> String {
    format!("Your score: {}", score.floor())
}
