use crate::config::DisplayConfig;
use crate::cursor::Cursor;
use crate::grid::TileGrid;
use backend::glutils::{self, Texture};
use backend::renderer::QuadRenderer;
use backend::system::System;

/// Everything the monitor window owns. Field order matters: GPU objects are
/// dropped before the `System` that holds their GL context.
pub struct Display {
    renderer: QuadRenderer,
    crosshair: Option<Texture>,
    cursor: Cursor,
    grid: TileGrid,
    config: DisplayConfig,
    system: System,
}

impl Display {
    pub fn init(config: DisplayConfig) -> Result<Display, String> {
        let mut system = System::new(&config.window_config())?;
        glutils::print_opengl_info();

        let renderer = QuadRenderer::new(config.width, config.height)?;

        // blank the window before the first frame is ready
        let bg = config.background.to_vec4();
        system.clear_screen(bg.x, bg.y, bg.z);
        system.draw_to_screen();

        let grid = TileGrid::new(
            config.grid_columns,
            config.grid_rows,
            config.tile_pitch,
            config.tile_size,
        );
        log::debug!("{} tiles covering {:?}", grid.len(), grid.bounds());

        Ok(Display {
            renderer,
            crosshair: None,
            cursor: Cursor::new(config.cursor_size),
            grid,
            config,
            system,
        })
    }

    pub fn load(&mut self) -> Result<(), String> {
        let texture = glutils::load_texture(&self.config.cursor_asset)?;
        log::info!(
            "cursor texture {} loaded ({}x{})",
            self.config.cursor_asset,
            texture.width(),
            texture.height()
        );
        self.crosshair = Some(texture);
        Ok(())
    }

    /// Returns `false` when the user asked to quit.
    pub fn handle_events(&mut self) -> bool {
        if !self.system.process_io_events() {
            return false;
        }
        self.cursor.track(&self.system.events);
        true
    }

    pub fn render(&mut self) {
        let bg = self.config.background.to_vec4();
        self.system.clear_screen(bg.x, bg.y, bg.z);

        self.renderer
            .fill_rects(self.grid.tiles(), self.config.tile_color);

        if let Some(crosshair) = &self.crosshair {
            self.renderer.copy(crosshair, self.cursor.rect());
        }

        self.system.draw_to_screen();
    }

    pub fn stop(self) {
        let Display {
            renderer,
            crosshair,
            system,
            ..
        } = self;
        drop(crosshair);
        drop(renderer);
        drop(system);
        log::info!("display stopped");
    }
}
