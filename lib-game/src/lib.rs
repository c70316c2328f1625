mod assets;
mod bird;
mod dbg;
mod frame;
mod input;
mod pipes;
mod render;
mod session;
mod timers;

pub mod sys;

pub use assets::*;
pub use bird::*;
pub use dbg::*;
pub use frame::*;
pub use input::*;
pub use pipes::*;
pub use render::*;
pub use session::*;
pub use timers::*;

use log::{info, warn};
use macroquad::prelude::*;
use strum::VariantArray;

pub const CANVAS_WIDTH: f32 = 360.0;
pub const CANVAS_HEIGHT: f32 = 640.0;

const GAME_TICKRATE: f32 = 1.0 / 60.0;
/// More lag than this is dropped instead of caught up on.
const MAX_LAG_TICKS: f32 = 5.0;

/// How game ticks are paced.
///
/// All the physics constants are per tick and were tuned for a 60Hz
/// display. With [TickMode::PerFrame] a faster display makes the game
/// faster. [TickMode::Fixed] runs as many ticks as it takes to keep
/// the game at 60 ticks per second no matter the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickMode {
    #[default]
    PerFrame,
    Fixed,
}

#[derive(Clone, Debug, Default)]
pub struct AppConf {
    pub tick_mode: TickMode,
    pub debug_overlay: bool,
    pub assets: AssetResolver,
}

/// The app runs all the boilerplate code to make the game tick.
///
/// Every frame goes through the same steps:
/// 1. Input capture and the jump handler
/// 2. Due timers
/// 3. Game tick (only does something while playing)
/// 4. Frame export and rendering
pub struct App {
    ticker: Ticker,

    session: GameSession,
    frame: Frame,
    render: Render,
    debug: Option<DebugOverlay>,
}

impl App {
    pub async fn new(conf: &AppConf) -> Self {
        let mut app = Self {
            ticker: Ticker::new(conf.tick_mode),

            session: GameSession::new(),
            frame: Frame::new(),
            render: Render::new(),
            debug: conf.debug_overlay.then(DebugOverlay::new),
        };
        app.load_textures(&conf.assets).await;

        app
    }

    /// A texture that fails to load is never drawn.
    async fn load_textures(&mut self, resolver: &AssetResolver) {
        info!("Loading textures from {:?}", resolver.root());

        for id in TextureId::VARIANTS.iter().copied() {
            match resolver.load_texture(id).await {
                Ok(texture) => self.render.add_texture(id, &texture),
                Err(e) => warn!("Texture {:?} unavailable: {:#}", id, e),
            }
        }

        info!(
            "Loaded {}/{} textures",
            self.render.texture_count(),
            TextureId::VARIANTS.len()
        );
    }

    /// Just runs the game. This method will run forever as it provides
    /// the application loop.
    pub async fn run(mut self) {
        info!("lib-game version: {}", env!("CARGO_PKG_VERSION"));
        info!("Tick mode: {:?}", self.ticker.mode);

        loop {
            let input = InputModel::capture();
            let now = get_time();
            if input.jump_pressed {
                self.session.on_jump(now);
            }

            self.session.on_timers(now);
            for _ in 0..self.ticker.ticks(get_frame_time()) {
                self.session.update(now);
            }

            self.frame.rebuild(&self.session, &self.render);
            self.render.render(&self.frame);
            if let Some(debug) = &mut self.debug {
                debug.draw(&self.session);
            }

            next_frame().await
        }
    }
}

/// Decides how many game ticks a displayed frame gets.
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    mode: TickMode,
    accumulated_time: f32,
}

impl Ticker {
    pub fn new(mode: TickMode) -> Self {
        Self {
            mode,
            accumulated_time: 0.0,
        }
    }

    pub fn ticks(&mut self, real_dt: f32) -> u32 {
        if self.mode == TickMode::PerFrame {
            return 1;
        }

        self.accumulated_time += real_dt;
        if self.accumulated_time > MAX_LAG_TICKS * GAME_TICKRATE {
            warn!(
                "LAG by {:.2}ms",
                self.accumulated_time * 1000.0
            );
            self.accumulated_time = 0.0;
            return 0;
        }

        let mut ticks = 0;
        while self.accumulated_time >= GAME_TICKRATE {
            self.accumulated_time -= GAME_TICKRATE;
            ticks += 1;
        }

        ticks
    }
}
