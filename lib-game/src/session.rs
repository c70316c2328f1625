use log::{debug, info};

use crate::{Bird, CANVAS_HEIGHT, PipeStream, TimerEvent, TimerId, Timers};

/// How often a new pipe pair shows up, in seconds.
pub const PIPE_SPAWN_PERIOD: f64 = 1.5;
/// How long input stays ignored after a crash, in seconds.
pub const INPUT_COOLDOWN: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
    GameOver,
}

/// Everything that makes up one run of the game: the mode, the bird,
/// the pipes, the score and the timers feeding them.
///
/// The session never reads the clock itself. Every entry point that
/// may start a timer takes the current time in seconds.
#[derive(Debug)]
pub struct GameSession {
    mode: GameMode,
    bird: Bird,
    pipes: PipeStream,
    score: f32,
    input_blocked: bool,
    timers: Timers,
    pipe_timer: Option<TimerId>,
    fired: Vec<TimerEvent>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            mode: GameMode::Menu,
            bird: Bird::new(),
            pipes: PipeStream::new(),
            score: 0.0,
            input_blocked: false,
            timers: Timers::new(),
            pipe_timer: None,
            fired: Vec::new(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &PipeStream {
        &self.pipes
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn input_blocked(&self) -> bool {
        self.input_blocked
    }

    pub fn pipe_timer_active(&self) -> bool {
        self.pipe_timer
            .is_some_and(|id| self.timers.is_active(id))
    }

    /// The only input the game knows. What it does depends on the mode.
    pub fn on_jump(&mut self, now: f64) {
        if self.input_blocked {
            debug!("Jump ignored: input is blocked");
            return;
        }

        match self.mode {
            GameMode::Menu => self.begin_game(now),
            GameMode::Playing => self.bird.jump(),
            GameMode::GameOver => self.restart(),
        }
    }

    /// Runs the events of all timers that came due by `now`.
    pub fn on_timers(&mut self, now: f64) {
        let mut fired = std::mem::take(&mut self.fired);
        self.timers.poll(now, &mut fired);

        for event in fired.drain(..) {
            match event {
                TimerEvent::SpawnPipes => self.spawn_pipes(),
                TimerEvent::UnblockInput => {
                    debug!("Input unblocked");
                    self.input_blocked = false;
                }
            }
        }

        self.fired = fired;
    }

    /// One game tick. Does nothing outside of [GameMode::Playing].
    pub fn update(&mut self, now: f64) {
        if self.mode != GameMode::Playing {
            return;
        }

        self.bird.step();
        if self.bird.fell_below(CANVAS_HEIGHT) {
            info!("Bird fell below the floor");
            self.end_game(now);
        }

        self.pipes.advance();
        self.score += self.pipes.award_score(self.bird.bounds().right());

        if let Some(pipe) = self.pipes.first_collision(self.bird.bounds()).copied() {
            info!("Bird hit a pipe at x={}", pipe.pos.x);
            self.end_game(now);
        }

        self.pipes.prune();
    }

    pub fn spawn_pipes(&mut self) {
        let pair = self.pipes.spawn_random();
        debug!("Spawned pipes with the gap at y={}", pair.top.size.y);
    }

    /// Like [GameSession::spawn_pipes], but with a chosen top-pipe height.
    pub fn spawn_pipes_with_gap(&mut self, top_height: f32) {
        self.pipes.spawn_pair(top_height);
    }

    fn begin_game(&mut self, now: f64) {
        info!("Starting the game");
        self.reset_round();
        self.mode = GameMode::Playing;
        self.pipe_timer = Some(self.timers.set_interval(
            now,
            PIPE_SPAWN_PERIOD,
            TimerEvent::SpawnPipes,
        ));
    }

    fn restart(&mut self) {
        info!("Back to the menu");
        self.reset_round();
        self.mode = GameMode::Menu;
    }

    fn end_game(&mut self, now: f64) {
        if self.mode == GameMode::GameOver {
            return;
        }

        info!("Game over, score: {}", self.score);
        self.mode = GameMode::GameOver;
        self.stop_pipe_timer();

        // NOTE: a bare flag. An older unblock still pending from a
        // previous round would clear it early.
        self.input_blocked = true;
        self.timers
            .set_timeout(now, INPUT_COOLDOWN, TimerEvent::UnblockInput);
    }

    fn reset_round(&mut self) {
        self.bird.reset();
        self.pipes.clear();
        self.score = 0.0;
        self.stop_pipe_timer();
    }

    fn stop_pipe_timer(&mut self) {
        if let Some(id) = self.pipe_timer.take() {
            self.timers.cancel(id);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
