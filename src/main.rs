use clap::Parser;
use lib_game::{App, CANVAS_HEIGHT, CANVAS_WIDTH, init_on_screen_log, sys};
use log::{STATIC_MAX_LEVEL, error, info, set_max_level};
use macroquad::prelude::*;

mod cli;

fn window_conf() -> Conf {
    Conf {
        window_title: "Flappy Bird".to_owned(),
        high_dpi: true,
        window_width: CANVAS_WIDTH as i32,
        window_height: CANVAS_HEIGHT as i32,
        window_resizable: false,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        sys::panic_screen(&format!("Driver panicked:\n{}", info));
        hook(info);
    }));

    if let Err(e) = run().await {
        error!("Driver exitted with error: {:?}", e);
        sys::panic_screen(&format!("Driver exitted with error:\n{:?}", e));
    }
}

async fn run() -> anyhow::Result<()> {
    init_on_screen_log()?;
    set_max_level(STATIC_MAX_LEVEL);

    let args = cli::Args::parse();
    set_default_filter_mode(FilterMode::Nearest);

    info!("Project version: {}", env!("CARGO_PKG_VERSION"));

    let app = App::new(&args.app_conf()).await;
    sys::done_loading();

    info!("Done loading");

    app.run().await;

    Ok(())
}
