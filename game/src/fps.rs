use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(1000);

/// Counts frames over roughly one-second windows.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    begin: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self { begin: now, frames: 0 }
    }

    pub fn frame(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }

    /// Returns the number of frames in the current window once more than a
    /// second has passed since it began, and starts a new window at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<u32> {
        if now.saturating_duration_since(self.begin) <= REPORT_INTERVAL {
            return None;
        }
        self.begin = now;
        Some(std::mem::take(&mut self.frames))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_after_a_full_second() {
        let t0 = Instant::now();
        let mut fps = FpsCounter::new(t0);
        for _ in 0..30 {
            fps.frame();
        }
        assert_eq!(fps.poll(t0 + Duration::from_millis(500)), None);
        assert_eq!(fps.poll(t0 + Duration::from_millis(1000)), None);
        assert_eq!(fps.poll(t0 + Duration::from_millis(1001)), Some(30));
    }

    #[test]
    fn window_restarts_after_a_report() {
        let t0 = Instant::now();
        let mut fps = FpsCounter::new(t0);
        fps.frame();
        let t1 = t0 + Duration::from_millis(1200);
        assert_eq!(fps.poll(t1), Some(1));

        fps.frame();
        fps.frame();
        assert_eq!(fps.poll(t1 + Duration::from_millis(900)), None);
        assert_eq!(fps.poll(t1 + Duration::from_millis(1500)), Some(2));
        assert_eq!(fps.poll(t1 + Duration::from_millis(3000)), Some(0));
    }

    #[test]
    fn clock_going_backwards_is_not_a_report() {
        let t0 = Instant::now() + Duration::from_secs(5);
        let mut fps = FpsCounter::new(t0);
        assert_eq!(fps.poll(t0 - Duration::from_secs(2)), None);
    }
}
