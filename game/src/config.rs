use backend::renderer::Color;
use backend::system::WindowConfig;
use backend::system::Keycode;

pub const USAGE: &str = "Usage: tile-monitor [OPTIONS]

Options:
  -a, --asset <path>     Image drawn as the mouse cursor (default: crosshair16.png).
  -W, --width <px>       Window width in pixels (default: 1280).
  -H, --height <px>      Window height in pixels (default: 720).
  -t, --title <text>     Window title.
  -f, --max-fps <n>      Sleep between frames to stay near <n> frames per second.
  -h, --help             Show this help message and exit.

Controls:
  Move the mouse to move the crosshair. Press 'q' or close the window to quit.

Set RUST_LOG (e.g. RUST_LOG=debug) to change the log level.";

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub cursor_asset: String,
    pub cursor_size: u32,
    pub grid_columns: u32,
    pub grid_rows: u32,
    pub tile_pitch: u32,
    pub tile_size: u32,
    pub background: Color,
    pub tile_color: Color,
    pub max_fps: Option<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Cubeception 3 Status Monitor".to_string(),
            width: 1280,
            height: 720,
            cursor_asset: "crosshair16.png".to_string(),
            cursor_size: 16,
            grid_columns: 8,
            grid_rows: 8,
            tile_pitch: 50,
            tile_size: 49,
            background: Color::BLACK,
            tile_color: Color::GREEN,
            max_fps: None,
        }
    }
}

impl DisplayConfig {
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            title: self.title.clone(),
            w: self.width as usize,
            h: self.height as usize,
            show_cursor: false,
            quit_key: Keycode::Q,
            max_fps: self.max_fps,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Run(DisplayConfig),
    Help,
}

fn parse_px(opt: &str, value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(0) => Err(format!("{opt} must be greater than zero")),
        Ok(v) => Ok(v),
        Err(e) => Err(format!("invalid value '{value}' for {opt}: {e}")),
    }
}

/// Parses the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut config = DisplayConfig::default();
    let mut it = args.iter();

    while let Some(arg) = it.next() {
        let opt = arg.as_str();
        if opt == "-h" || opt == "--help" {
            return Ok(Command::Help);
        }
        let mut value = || {
            it.next()
                .map(String::as_str)
                .ok_or_else(|| format!("missing value for {opt}"))
        };
        match opt {
            "-a" | "--asset" => config.cursor_asset = value()?.to_string(),
            "-W" | "--width" => config.width = parse_px(opt, value()?)?,
            "-H" | "--height" => config.height = parse_px(opt, value()?)?,
            "-t" | "--title" => config.title = value()?.to_string(),
            "-f" | "--max-fps" => config.max_fps = Some(parse_px(opt, value()?)?),
            s => return Err(format!("unknown option {s}")),
        }
    }
    Ok(Command::Run(config))
}
