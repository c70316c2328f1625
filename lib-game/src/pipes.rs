use std::collections::VecDeque;

use lib_col::Aabb;
use macroquad::prelude::*;

use crate::{CANVAS_HEIGHT, CANVAS_WIDTH, TextureId};

pub const PIPE_SPEED: f32 = -2.0;
pub const PIPE_WIDTH: f32 = 50.0;
pub const PIPE_GAP: f32 = 200.0;
/// Keeps the gap from hugging the floor.
pub const PIPE_MARGIN: f32 = 50.0;
pub const PIPE_SCORE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub pos: Vec2,
    pub size: Vec2,
    pub texture: TextureId,
    pub scored: bool,
}

impl Pipe {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A top and a bottom pipe sharing one gap. Both members always have
/// the same `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePair {
    pub top: Pipe,
    pub bottom: Pipe,
}

impl PipePair {
    pub fn new(top_height: f32) -> Self {
        let bottom_y = top_height + PIPE_GAP;

        Self {
            top: Pipe {
                pos: vec2(CANVAS_WIDTH, 0.0),
                size: vec2(PIPE_WIDTH, top_height),
                texture: TextureId::TopPipe,
                scored: false,
            },
            bottom: Pipe {
                pos: vec2(CANVAS_WIDTH, bottom_y),
                size: vec2(PIPE_WIDTH, CANVAS_HEIGHT - bottom_y),
                texture: TextureId::BottomPipe,
                scored: false,
            },
        }
    }

    pub fn x(&self) -> f32 {
        self.top.pos.x
    }

    pub fn members(&self) -> [&Pipe; 2] {
        [&self.top, &self.bottom]
    }

    fn members_mut(&mut self) -> [&mut Pipe; 2] {
        [&mut self.top, &mut self.bottom]
    }
}

/// The live pipes in spawn order. New pairs always spawn at the right
/// edge and everything moves at the same speed, so the queue stays
/// sorted by `x` and only its front can go off-screen.
#[derive(Debug, Clone, Default)]
pub struct PipeStream {
    pairs: VecDeque<PipePair>,
}

impl PipeStream {
    pub fn new() -> Self {
        Self {
            pairs: VecDeque::new(),
        }
    }

    /// The largest top-pipe height (exclusive).
    pub fn max_top_height() -> f32 {
        CANVAS_HEIGHT - PIPE_GAP - PIPE_MARGIN
    }

    pub fn spawn_random(&mut self) -> &PipePair {
        let top_height = macroquad::rand::gen_range(0, Self::max_top_height() as u32);
        self.spawn_pair(top_height as f32)
    }

    pub fn spawn_pair(&mut self, top_height: f32) -> &PipePair {
        self.pairs.push_back(PipePair::new(top_height));
        &self.pairs[self.pairs.len() - 1]
    }

    pub fn advance(&mut self) {
        for pair in self.pairs.iter_mut() {
            for pipe in pair.members_mut() {
                pipe.pos.x += PIPE_SPEED;
            }
        }
    }

    /// Marks every pipe the bird has fully passed and returns the points
    /// earned this call. A pipe is only ever counted once.
    pub fn award_score(&mut self, bird_right: f32) -> f32 {
        let mut earned = 0.0;
        for pair in self.pairs.iter_mut() {
            for pipe in pair.members_mut() {
                if !pipe.scored && bird_right > pipe.right() {
                    pipe.scored = true;
                    earned += PIPE_SCORE;
                }
            }
        }

        earned
    }

    /// Returns the first pipe in queue order that overlaps `bird`.
    pub fn first_collision(&self, bird: Aabb) -> Option<&Pipe> {
        self.iter().find(|pipe| bird.overlaps(pipe.bounds()))
    }

    pub fn collides(&self, bird: Aabb) -> bool {
        self.first_collision(bird).is_some()
    }

    /// Drops pairs that went fully past the left edge. A pair sitting
    /// exactly at `-PIPE_WIDTH` is still kept.
    pub fn prune(&mut self) -> usize {
        let mut removed = 0;
        while self
            .pairs
            .front()
            .is_some_and(|pair| pair.x() < -PIPE_WIDTH)
        {
            self.pairs.pop_front();
            removed += 1;
        }

        removed
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn pairs(&self) -> impl Iterator<Item = &PipePair> {
        self.pairs.iter()
    }

    /// Every pipe, top before bottom, in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pairs.iter().flat_map(|pair| pair.members())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
