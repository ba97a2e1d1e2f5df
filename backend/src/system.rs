use sdl2::event::Event;
pub use sdl2::keyboard::Keycode;
use sdl2::video::GLProfile;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    KeyDown(Keycode),
    // x, y, xrel, yrel
    MouseMotion(i32, i32, i32, i32),
}

impl IoEvents {
    fn from_sdl(event: Event) -> Option<IoEvents> {
        let ev = match event {
            Event::Quit { .. } => IoEvents::Quit,
            Event::KeyDown {
                keycode: Some(k), ..
            } => IoEvents::KeyDown(k),
            Event::MouseMotion {
                x, y, xrel, yrel, ..
            } => IoEvents::MouseMotion(x, y, xrel, yrel),
            _ => return None,
        };
        Some(ev)
    }

    /// Window close, or a key press of `quit_key`.
    pub fn is_quit(&self, quit_key: Keycode) -> bool {
        match self {
            IoEvents::Quit => true,
            IoEvents::KeyDown(k) => *k == quit_key,
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub w: usize,
    pub h: usize,
    pub show_cursor: bool,
    pub quit_key: Keycode,
    /// When set, `draw_to_screen` sleeps to stay near this frame rate.
    pub max_fps: Option<u32>,
}

pub struct System {
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_ctx: sdl2::video::GLContext,
    pub events: Vec<IoEvents>,
    event_pump: sdl2::EventPump,
    quit_key: Keycode,
    frame_delay: Option<Duration>,
}

impl System {
    pub fn new(config: &WindowConfig) -> Result<System, String> {
        let sdl_context = sdl2::init().map_err(|e| format!("SDL init failed: {e}"))?;
        let video_subsystem = sdl_context
            .video()
            .map_err(|e| format!("SDL video init failed: {e}"))?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = match video_subsystem
            .window(&config.title, config.w as u32, config.h as u32)
            .opengl()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(format!("Window creation failed: {e}")),
        };

        let gl_ctx = window
            .gl_create_context()
            .map_err(|e| format!("Renderer could not be created: {e}"))?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));

        sdl_context.mouse().show_cursor(config.show_cursor);

        let event_pump = sdl_context
            .event_pump()
            .map_err(|e| format!("SDL event pump unavailable: {e}"))?;

        log::info!(
            "created {}x{} window \"{}\"",
            config.w,
            config.h,
            config.title
        );

        Ok(System {
            sdl_context,
            window,
            video_subsystem,
            gl_ctx,
            events: Vec::new(),
            event_pump,
            quit_key: config.quit_key,
            frame_delay: config
                .max_fps
                .filter(|fps| *fps > 0)
                .map(|fps| Duration::new(0, 1_000_000_000u32 / fps)),
        })
    }

    /// Drains pending SDL events into `self.events`. Returns `false` once a
    /// quit request has been seen; events after it are left in the queue.
    pub fn process_io_events(&mut self) -> bool {
        self.events.clear();

        for event in self.event_pump.poll_iter() {
            let Some(ev) = IoEvents::from_sdl(event) else {
                continue;
            };
            if ev.is_quit(self.quit_key) {
                log::debug!("quit requested: {:?}", ev);
                return false;
            }
            self.events.push(ev);
        }
        true
    }

    pub fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
        if let Some(delay) = self.frame_delay {
            ::std::thread::sleep(delay);
        }
    }

    pub fn clear_screen(&mut self, r: f32, g: f32, b: f32) {
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;
    use sdl2::mouse::MouseState;

    fn key_down(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    fn mouse_motion(x: i32, y: i32, xrel: i32, yrel: i32) -> Event {
        Event::MouseMotion {
            timestamp: 0,
            window_id: 1,
            which: 0,
            mousestate: MouseState::from_sdl_state(0),
            x,
            y,
            xrel,
            yrel,
        }
    }

    #[test]
    fn window_close_translates_to_quit() {
        let ev = IoEvents::from_sdl(Event::Quit { timestamp: 0 });
        assert_eq!(ev, Some(IoEvents::Quit));
        assert!(ev.unwrap().is_quit(Keycode::Q));
    }

    #[test]
    fn q_key_quits_and_escape_does_not() {
        let q = IoEvents::from_sdl(key_down(Keycode::Q)).unwrap();
        assert_eq!(q, IoEvents::KeyDown(Keycode::Q));
        assert!(q.is_quit(Keycode::Q));

        let esc = IoEvents::from_sdl(key_down(Keycode::Escape)).unwrap();
        assert_eq!(esc, IoEvents::KeyDown(Keycode::Escape));
        assert!(!esc.is_quit(Keycode::Q));
    }

    #[test]
    fn mouse_motion_keeps_pointer_position() {
        let ev = IoEvents::from_sdl(mouse_motion(100, 40, 3, -2)).unwrap();
        assert_eq!(ev, IoEvents::MouseMotion(100, 40, 3, -2));
        assert!(!ev.is_quit(Keycode::Q));
    }

    #[test]
    fn unrelated_events_are_dropped() {
        let up = Event::KeyUp {
            timestamp: 0,
            window_id: 1,
            keycode: Some(Keycode::Q),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(IoEvents::from_sdl(up), None);
    }
}
