use backend::math::Rect;
use backend::system::IoEvents;

/// Where the crosshair texture is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor {
    size: u32,
    rect: Rect,
}

impl Cursor {
    /// Before the first mouse motion the crosshair sits in the top-left
    /// corner at 10x10.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            rect: Rect::new(0, 0, 10, 10),
        }
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.rect = Rect::centered_at(x, y, self.size, self.size);
    }

    /// Follows the last mouse motion among `events`.
    pub fn track(&mut self, events: &[IoEvents]) {
        for ev in events {
            if let IoEvents::MouseMotion(x, y, _, _) = *ev {
                self.move_to(x, y);
            }
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_the_corner() {
        assert_eq!(Cursor::new(16).rect(), Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn centres_on_the_pointer() {
        let mut c = Cursor::new(16);
        c.move_to(100, 40);
        assert_eq!(c.rect(), Rect::new(92, 32, 16, 16));
        c.move_to(2, 0);
        assert_eq!(c.rect(), Rect::new(-6, -8, 16, 16));
    }

    #[test]
    fn tracks_the_latest_motion() {
        let mut c = Cursor::new(16);
        c.track(&[
            IoEvents::MouseMotion(10, 10, 1, 1),
            IoEvents::KeyDown(backend::system::Keycode::A),
            IoEvents::MouseMotion(640, 360, 5, 0),
        ]);
        assert_eq!(c.rect(), Rect::new(632, 352, 16, 16));
    }

    #[test]
    fn ignores_frames_without_motion() {
        let mut c = Cursor::new(16);
        c.track(&[IoEvents::KeyDown(backend::system::Keycode::A)]);
        assert_eq!(c.rect(), Rect::new(0, 0, 10, 10));
    }
}
