use std::fmt::{self, Write};
use std::sync::{LazyLock, Mutex};

use log::{Level, Log, Metadata, Record, SetLoggerError, set_logger};
use macroquad::prelude::*;

use crate::GameSession;

const DBG_FONT_SIZE: u16 = 16;
const DBG_MSG_LIFE: f32 = 3.0;
const DBG_MSG_CAP: usize = 30;

#[derive(Clone)]
struct DebugMsg {
    color: Color,
    line: String,
    spawn_time: f32,
}

struct DebugMsgStore {
    dbg_event_cur: usize,
    dbg_events: [DebugMsg; DBG_MSG_CAP],
}

impl DebugMsgStore {
    fn put_event(&mut self, msg: &fmt::Arguments, color: Color, time: f32) {
        let cell = &mut self.dbg_events[self.dbg_event_cur];

        cell.line.clear();
        let _ = write!(&mut cell.line, "{msg}");
        cell.spawn_time = time;
        cell.color = color;

        self.dbg_event_cur = (self.dbg_event_cur + 1) % DBG_MSG_CAP;
    }
}

static DEBUG_CELL: LazyLock<Mutex<DebugMsgStore>> = LazyLock::new(|| {
    Mutex::new(DebugMsgStore {
        dbg_event_cur: 0,
        dbg_events: std::array::from_fn(|_| DebugMsg {
            line: String::with_capacity(255),
            spawn_time: f32::NEG_INFINITY,
            color: WHITE,
        }),
    })
});

/// A logger keeping the last few messages around for [DebugOverlay].
/// Natively, the messages are also echoed to stderr.
#[derive(Clone, Copy, Debug)]
struct OnScreenLog;

static ON_SCREEN_LOG: OnScreenLog = OnScreenLog;

impl Log for OnScreenLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = match record.level() {
            Level::Error => RED,
            Level::Warn => YELLOW,
            Level::Info => GREEN,
            Level::Debug => WHITE,
            Level::Trace => GRAY,
        };

        #[cfg(not(target_family = "wasm"))]
        eprintln!("[{}] {}", record.level(), record.args());

        let Ok(mut cell) = DEBUG_CELL.lock() else {
            return;
        };
        cell.put_event(record.args(), color, get_time() as f32);
    }

    fn flush(&self) { /* NOOP */
    }
}

pub fn init_on_screen_log() -> Result<(), SetLoggerError> {
    set_logger(&ON_SCREEN_LOG)
}

/// Screen-space debug text: the session state and recent log lines.
pub struct DebugOverlay {
    text_cursor_x: f32,
    text_cursor_y: f32,
}

impl DebugOverlay {
    pub fn new() -> Self {
        Self {
            text_cursor_x: 0.0,
            text_cursor_y: DBG_FONT_SIZE as f32,
        }
    }

    pub fn draw(&mut self, session: &GameSession) {
        self.new_frame();

        self.put_debug_text(&format!("FPS: {}", get_fps()), WHITE);
        self.new_dbg_line();
        self.put_debug_text(&format!("Mode: {:?}", session.mode()), WHITE);
        self.new_dbg_line();
        self.put_debug_text(
            &format!(
                "Bird y: {:.1} v: {:.1}",
                session.bird().pos.y,
                session.bird().velocity
            ),
            WHITE,
        );
        self.new_dbg_line();
        self.put_debug_text(&format!("Pipe pairs: {}", session.pipes().len()), WHITE);
        self.new_dbg_line();
        if session.input_blocked() {
            self.put_debug_text("Input blocked", RED);
            self.new_dbg_line();
        }

        self.draw_events();
    }

    fn new_frame(&mut self) {
        self.text_cursor_x = 0.0;
        self.text_cursor_y = DBG_FONT_SIZE as f32;

        set_default_camera();
    }

    fn new_dbg_line(&mut self) {
        self.text_cursor_x = 0.0;
        self.text_cursor_y += DBG_FONT_SIZE as f32;
    }

    fn put_debug_text(&mut self, text: &str, color: Color) {
        draw_text(
            text,
            self.text_cursor_x,
            self.text_cursor_y,
            DBG_FONT_SIZE as f32,
            color,
        );

        self.text_cursor_x += measure_text(text, None, DBG_FONT_SIZE, 1.0).width;
    }

    fn draw_events(&mut self) {
        let Ok(dbg_cell) = DEBUG_CELL.lock() else {
            return;
        };

        let time = get_time() as f32;
        for msg in &dbg_cell.dbg_events {
            if msg.spawn_time + DBG_MSG_LIFE < time {
                continue;
            }

            self.put_debug_text(msg.line.as_str(), msg.color);
            self.new_dbg_line();
        }
    }
}

impl Default for DebugOverlay {
    fn default() -> Self {
        DebugOverlay::new()
    }
}
