use std::{
    sync::{LazyLock, RwLock},
    time::{Duration, Instant},
};

pub struct Time {
    pub startup: Instant,
    pub last_update: Option<Instant>,
    pub delta: Duration,
}

pub static TIME: LazyLock<RwLock<Time>> = LazyLock::new(|| {
    RwLock::new(Time {
        startup: Instant::now(),
        delta: Duration::default(),
        last_update: None,
    })
});

pub fn update_time() {
    let mut time = TIME.write().unwrap();
    let now = Instant::now();
    if let Some(last_update) = time.last_update {
        time.delta = now - last_update;
    }
    time.last_update = Some(now);
}

pub fn frame_delta() -> Duration {
    TIME.read().unwrap().delta
}

/// A periodic timer driven by frame deltas.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next fire.
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }

    /// Feeds `delta` into the timer and returns how many times it fired.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.elapsed += delta;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    /// Drops any partial progress, the next fire is a full period away.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
