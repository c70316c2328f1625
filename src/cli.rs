use std::path::PathBuf;

use clap::Parser;
use lib_game::{AppConf, AssetResolver, DEFAULT_ASSET_DIR, TickMode};

/// CLI tooling for the game.
#[derive(Parser, Debug)]
pub struct Args {
    /// Tick the game at a fixed 60Hz instead of once per displayed frame.
    #[arg(long)]
    pub fixed_tick: bool,
    /// Show the mode, the bird state and the recent log lines on screen.
    #[arg(long)]
    pub debug: bool,
    /// Directory to load the textures from.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ASSET_DIR)]
    pub assets: PathBuf,
}

impl Args {
    pub fn app_conf(&self) -> AppConf {
        AppConf {
            tick_mode: if self.fixed_tick {
                TickMode::Fixed
            } else {
                TickMode::PerFrame
            },
            debug_overlay: self.debug,
            assets: AssetResolver::new(&self.assets),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["quad-flappy"]);
        let conf = args.app_conf();

        assert_eq!(conf.tick_mode, TickMode::PerFrame);
        assert!(!conf.debug_overlay);
        assert_eq!(conf.assets.root(), std::path::Path::new("assets"));
    }

    #[test]
    fn all_flags() {
        let args = Args::parse_from(["quad-flappy", "--fixed-tick", "--debug", "--assets", "res"]);
        let conf = args.app_conf();

        assert_eq!(conf.tick_mode, TickMode::Fixed);
        assert!(conf.debug_overlay);
        assert_eq!(conf.assets.root(), std::path::Path::new("res"));
    }
}
