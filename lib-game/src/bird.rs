use lib_col::Aabb;
use macroquad::prelude::*;

use crate::CANVAS_HEIGHT;

pub const BIRD_X: f32 = 50.0;
pub const BIRD_START_Y: f32 = CANVAS_HEIGHT / 2.0;
pub const BIRD_WIDTH: f32 = 40.0;
pub const BIRD_HEIGHT: f32 = 30.0;
pub const GRAVITY: f32 = 0.5;
pub const JUMP_VELOCITY: f32 = -6.0;

/// The player-controlled entity. It only ever moves vertically,
/// pipes come to it instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub pos: Vec2,
    pub velocity: f32,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            pos: vec2(BIRD_X, BIRD_START_Y),
            velocity: 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Overwrites the current velocity.
    pub fn jump(&mut self) {
        self.velocity = JUMP_VELOCITY;
    }

    /// One tick of gravity. The bird can't rise above the top edge.
    pub fn step(&mut self) {
        self.velocity += GRAVITY;
        self.pos.y = (self.pos.y + self.velocity).max(0.0);
    }

    pub fn fell_below(&self, floor: f32) -> bool {
        self.pos.y > floor
    }

    pub fn size(&self) -> Vec2 {
        vec2(BIRD_WIDTH, BIRD_HEIGHT)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size())
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_tick() {
        let mut bird = Bird::new();
        assert_eq!(bird.pos.y, 320.0);

        bird.step();

        assert_eq!(bird.velocity, 0.5);
        assert_eq!(bird.pos.y, 320.5);
    }

    #[test]
    fn jump_overwrites_velocity() {
        let mut bird = Bird::new();
        bird.velocity = 3.0;

        bird.jump();

        assert_eq!(bird.velocity, -6.0);
    }

    #[test]
    fn ceiling_clamp() {
        let mut bird = Bird::new();
        for _ in 0..200 {
            bird.jump();
            bird.step();
            assert!(bird.pos.y >= 0.0);
        }
        assert_eq!(bird.pos.y, 0.0);
        assert_eq!(bird.pos.x, BIRD_X);
    }

    #[test]
    fn falls_below_floor() {
        let mut bird = Bird::new();
        let mut frames = 0;
        while !bird.fell_below(CANVAS_HEIGHT) {
            bird.step();
            frames += 1;
        }

        // 320 + 0.5 * n * (n + 1) / 2 > 640
        assert_eq!(frames, 36);
    }

    #[test]
    fn reset_restores_start() {
        let mut bird = Bird::new();
        bird.jump();
        bird.step();
        bird.reset();

        assert_eq!(bird, Bird::new());
        assert_eq!(bird.bounds(), Aabb::from_pos_size(vec2(50.0, 320.0), vec2(40.0, 30.0)));
    }
}
