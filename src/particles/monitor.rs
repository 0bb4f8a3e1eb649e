use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRateStatus {
    Excellent,
    Good,
    Poor,
}

impl FrameRateStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FrameRateStatus::Excellent => "excellent",
            FrameRateStatus::Good => "good",
            FrameRateStatus::Poor => "poor",
        }
    }
}

/// Frames-per-second meter, refreshed once per elapsed second.
#[derive(Debug, Clone)]
pub struct FpsMonitor {
    window_start: Option<Instant>,
    frames: u32,
    fps: u32,
}

impl FpsMonitor {
    const WINDOW: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self {
            window_start: None,
            frames: 0,
            fps: 0,
        }
    }

    /// Counts a rendered frame. Returns the new reading when one is produced.
    pub fn record_frame(&mut self, now: Instant) -> Option<u32> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return None;
        };
        self.frames += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed < Self::WINDOW {
            return None;
        }
        self.fps = (f64::from(self.frames) / elapsed.as_secs_f64()).round() as u32;
        self.frames = 0;
        self.window_start = Some(now);
        Some(self.fps)
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn is_performance_good(&self) -> bool {
        self.fps >= 55
    }

    pub fn status(&self) -> FrameRateStatus {
        match self.fps {
            58.. => FrameRateStatus::Excellent,
            50..=57 => FrameRateStatus::Good,
            _ => FrameRateStatus::Poor,
        }
    }
}

impl Default for FpsMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_second() {
        let start = Instant::now();
        let mut monitor = FpsMonitor::new();
        let step = Duration::from_micros(16_667);

        let mut readings = Vec::new();
        for frame in 0..=60u32 {
            if let Some(fps) = monitor.record_frame(start + step * frame) {
                readings.push(fps);
            }
        }
        assert_eq!(readings, vec![60]);
        assert_eq!(monitor.status(), FrameRateStatus::Excellent);
        assert!(monitor.is_performance_good());
    }

    #[test]
    fn steady_stream_reads_the_same_every_window() {
        let start = Instant::now();
        let mut monitor = FpsMonitor::new();
        let step = Duration::from_micros(16_667);

        let readings: Vec<u32> = (0..=120u32)
            .filter_map(|frame| monitor.record_frame(start + step * frame))
            .collect();
        assert_eq!(readings, vec![60, 60]);
    }

    #[test]
    fn slow_frames_are_poor() {
        let start = Instant::now();
        let mut monitor = FpsMonitor::new();
        for frame in 0..=30u32 {
            monitor.record_frame(start + Duration::from_millis(34) * frame);
        }
        assert!(monitor.fps() < 50);
        assert_eq!(monitor.status(), FrameRateStatus::Poor);
    }
}
