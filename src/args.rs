use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "flick")]
#[command(
    version,
    about = "A minimal command-line screen capture tool",
    disable_version_flag = true
)]
pub struct Args {
    /// Print version information and exit
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// When selecting a window, grab its window manager border too
    #[arg(short, long)]
    pub border: bool,

    /// Wait SEC seconds before taking the shot
    #[arg(short, long, value_name = "SEC", allow_negative_numbers = true)]
    pub delay: Option<String>,

    /// Execute CMD on the saved image
    #[arg(short, long, value_name = "CMD", allow_hyphen_values = true)]
    pub exec: Option<String>,

    /// For multiple heads, grab a shot from each and join them
    #[arg(short, long)]
    pub multidisp: bool,

    /// Image quality, by convention 1-100
    #[arg(short, long, value_name = "NUM", allow_negative_numbers = true)]
    pub quality: Option<String>,

    /// Interactively select a window or rectangle; MODE is capture,
    /// hide or hole
    #[arg(
        short,
        long,
        value_name = "MODE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "capture"
    )]
    pub select: Option<String>,

    /// Capture the currently focused window
    #[arg(short = 'u', long, alias = "focussed")]
    pub focused: bool,

    /// Show a countdown before taking the shot
    #[arg(short, long)]
    pub count: bool,

    /// Generate a thumbnail, NUM percent of the original or WxH pixels
    #[arg(short, long, value_name = "NUM|WxH", allow_hyphen_values = true)]
    pub thumb: Option<String>,

    /// Prevent beeping
    #[arg(short = 'z', long)]
    pub silent: bool,

    /// Include the mouse pointer in the shot
    #[arg(short, long)]
    pub pointer: bool,

    /// Freeze the screen while the selection is made
    #[arg(short, long)]
    pub freeze: bool,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    pub overwrite: bool,

    /// Non-interactively capture the region at X,Y with size WxH
    #[arg(short, long, value_name = "X,Y,W,H", allow_hyphen_values = true)]
    pub autoselect: Option<String>,

    /// Capture from display NAME
    #[arg(short = 'D', long, value_name = "NAME")]
    pub display: Option<String>,

    /// Draw a text note on the shot
    #[arg(short, long, value_name = "TEXT", allow_hyphen_values = true)]
    pub note: Option<String>,

    /// Selection line settings as a comma-separated key=value list
    /// (keys: style, width, color, opacity, mode); may be repeated
    #[arg(short, long, value_name = "STYLE")]
    pub line: Vec<String>,

    /// Capture overlapping windows and join them
    #[arg(short = 'k', long)]
    pub stack: bool,

    /// Only capture windows whose class matches NAME
    #[arg(short = 'C', long, value_name = "NAME")]
    pub class: Option<String>,

    /// Execute CMD for every captured frame
    #[arg(short = 'S', long, value_name = "CMD", allow_hyphen_values = true)]
    pub script: Option<String>,

    /// Capture the window with the given id
    #[arg(short, long, value_name = "ID", allow_negative_numbers = true)]
    pub window: Option<String>,

    /// Output filename; any further names are ignored with a warning
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}
