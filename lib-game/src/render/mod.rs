use hashbrown::HashMap;
use macroquad::prelude::*;

use crate::{CANVAS_HEIGHT, CANVAS_WIDTH, DrawCmd, Frame, TextAlign, TextureId, TextureSizes};

const CLEAR_COLOR: Color = Color {
    r: 0.44,
    g: 0.77,
    b: 0.81,
    a: 1.0,
};

/// Render executes a [Frame] on the screen. The frame is drawn in
/// canvas units, the camera stretches the canvas over the window.
///
/// It also provides a simple texture storage for the frame builder
/// to check against.
pub struct Render {
    camera: Camera2D,
    textures: HashMap<TextureId, Texture2D>,
}

impl Render {
    pub fn new() -> Self {
        Self {
            camera: Self::canvas_camera(),
            textures: HashMap::new(),
        }
    }

    pub fn add_texture(&mut self, id: TextureId, texture: &Texture2D) {
        self.textures.insert(id, texture.clone());
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn render(&self, frame: &Frame) {
        clear_background(CLEAR_COLOR);
        set_camera(&self.camera);

        for cmd in &frame.cmds {
            match cmd {
                DrawCmd::Sprite { texture, rect } => self.draw_sprite(*texture, *rect),
                DrawCmd::Text {
                    text,
                    pos,
                    align,
                    font_size,
                    color,
                } => Self::draw_text(text, *pos, *align, *font_size, *color),
            }
        }
    }

    fn draw_sprite(&self, id: TextureId, rect: Rect) {
        let Some(texture) = self.textures.get(&id) else {
            return;
        };

        draw_texture_ex(
            texture,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(rect.size()),
                ..Default::default()
            },
        );
    }

    fn draw_text(text: &str, pos: Vec2, align: TextAlign, font_size: u16, color: Color) {
        let (font_size, font_scale, font_scale_aspect) = camera_font_scale(font_size as f32);
        let x = match align {
            TextAlign::Left => pos.x,
            TextAlign::Center => {
                let dims = measure_text(text, None, font_size, font_scale);
                pos.x - dims.width / 2.0
            }
        };

        draw_text_ex(
            text,
            x,
            pos.y,
            TextParams {
                font: None,
                font_size,
                font_scale,
                font_scale_aspect,
                rotation: 0.0,
                color,
            },
        );
    }

    fn canvas_camera() -> Camera2D {
        let mut cam = Camera2D::from_display_rect(Rect {
            x: 0.0,
            y: 0.0,
            w: CANVAS_WIDTH,
            h: CANVAS_HEIGHT,
        });
        cam.zoom.y *= -1.0;

        cam
    }
}

impl TextureSizes for Render {
    fn texture_size(&self, id: TextureId) -> Option<Vec2> {
        self.textures.get(&id).map(|tex| tex.size())
    }
}

impl Default for Render {
    fn default() -> Self {
        Render::new()
    }
}
