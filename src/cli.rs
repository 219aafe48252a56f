//! Command-line arguments.

use clap::Parser;

/// Car control dashboard with front and rear camera previews
#[derive(Parser, Debug)]
#[command(name = "car-control-dashboard")]
#[command(about = "Simulated car dashboard: speed ramps, turn signals, brake and two camera views", long_about = None)]
#[command(version)]
pub struct Args {
    /// Front camera source (can be repeated; `1` cycles through them)
    ///
    /// `pattern:<bars|gray>@WxH` or `raw:<path>@WxH`
    #[arg(long, value_name = "SOURCE", default_value = "pattern:bars@1280x720")]
    pub front: Vec<String>,

    /// Rear camera source (can be repeated; `2` cycles through them)
    #[arg(long, value_name = "SOURCE", default_value = "pattern:gray@640x480")]
    pub rear: Vec<String>,

    /// Window pixel scale
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=4))]
    pub scale: u32,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}
