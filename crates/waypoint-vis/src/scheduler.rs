//! Timer-driven tick scheduling.
//!
//! A single cooperative loop owns the right to tick a shared playback.
//! While the playback is running the loop sleeps one tick period and then
//! applies one step; otherwise it parks on a notifier until a transport
//! call wakes it. One loop per playback means at most one tick is ever in
//! flight, strictly in cursor order.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, RwLock};

use crate::playback::{Playback, PlaybackState};

/// Tick period at speed zero, in milliseconds.
pub const BASE_INTERVAL_MS: u64 = 1_000;
/// How much each speed unit shortens the period, in milliseconds.
pub const SPEED_SCALE_MS: u64 = 9;
/// Lower bound on the tick period: top speed is fast, not instantaneous.
pub const MIN_INTERVAL_MS: u64 = 10;

/// Milliseconds between ticks for a speed in `[1, 100]`: a decreasing
/// function of speed, `base - speed * scale`, clamped positive.
pub fn tick_interval(speed: u8) -> Duration {
    let ms = BASE_INTERVAL_MS.saturating_sub(u64::from(speed) * SPEED_SCALE_MS);
    Duration::from_millis(ms.max(MIN_INTERVAL_MS))
}

/// Single-loop driver for a shared playback.
pub struct PlaybackDriver {
    playback: Arc<RwLock<Playback>>,
    wake: Arc<Notify>,
}

impl PlaybackDriver {
    /// Create a driver over a shared playback.
    pub fn new(playback: Arc<RwLock<Playback>>) -> Self {
        Self {
            playback,
            wake: Arc::new(Notify::new()),
        }
    }

    /// Handle used to wake the loop after `play()` or a rebind.
    pub fn waker(&self) -> Arc<Notify> {
        self.wake.clone()
    }

    /// Run the tick loop forever. The period is re-read every iteration, so
    /// a speed change applies to the next scheduled tick, not retroactively.
    pub async fn run(self) {
        loop {
            let period = {
                let playback = self.playback.read().await;
                (playback.state() == PlaybackState::Running)
                    .then(|| tick_interval(playback.speed()))
            };

            match period {
                Some(period) => {
                    tokio::time::sleep(period).await;
                    let mut playback = self.playback.write().await;
                    playback.tick();
                    if playback.state() == PlaybackState::Finished {
                        tracing::debug!(steps = playback.total_steps(), "playback finished");
                    }
                }
                None => self.wake.notified().await,
            }
        }
    }
}
