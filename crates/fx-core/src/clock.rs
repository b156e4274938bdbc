use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started. Kept wide so long sessions keep
    /// sub-frame resolution.
    pub elapsed_sec: f64,
    /// Seconds since the previous tick.
    pub dt_sec: f32,
}

/// Wall-clock source for the render loop.
#[derive(Clone, Debug)]
pub struct FrameClock {
    origin: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            last: now,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        FrameTime {
            elapsed_sec: (now - self.origin).as_secs_f64(),
            dt_sec: dt.as_secs_f32(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::start()
    }
}
