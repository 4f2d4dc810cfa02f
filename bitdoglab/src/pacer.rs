use crate::time;
use cortex_m::delay::Delay;
use log::debug;

/// Sleeps out the rest of each frame and reports the frame rate once a
/// second.
pub struct FramePacer {
    last_report_us: u32,
    frames: u32,
}

impl FramePacer {
    const REPORT_INTERVAL_US: u32 = 1_000_000;

    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            last_report_us: time::time_us(),
            frames: 0,
        }
    }

    /// Ends a frame: sleeps `interval_ms` and counts the frame.
    pub fn end_frame(&mut self, delay: &mut Delay, interval_ms: u32) {
        delay.delay_ms(interval_ms);
        self.frames += 1;
        let now = time::time_us();
        if now.wrapping_sub(self.last_report_us) >= Self::REPORT_INTERVAL_US {
            debug!("FPS: {}", self.frames);
            self.last_report_us = now;
            self.frames = 0;
        }
    }
}
