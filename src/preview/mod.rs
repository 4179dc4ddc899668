//! Preview playback controller
//!
//! Enforces a clip's end boundary by polling the transport position on a
//! fixed tick. Ranged-playback primitives are unreliable for stopping at an
//! end time, so the boundary check is periodic. The watcher is an explicitly
//! owned, cancelable handle: every exit path (completion, stop, drop)
//! cancels the tick task and pauses the transport.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Default boundary-check interval
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Minimal playback surface the controller drives. The CLI binds this to a
/// monotonic clock; tests bind it to fake time.
pub trait MediaTransport: Send {
    /// Current playback position in seconds
    fn position(&self) -> f64;
    /// Jump to a position in seconds
    fn seek(&mut self, seconds: f64);
    /// Resume playback
    fn play(&mut self);
    /// Halt playback, keeping the current position
    fn pause(&mut self);
}

/// What to do when playback reaches the clip end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Pause at the boundary
    Once,
    /// Seek back to the clip start and resume
    Loop,
}

/// Owned handle over one clip's boundary watcher
pub struct PreviewController {
    transport: Arc<Mutex<dyn MediaTransport>>,
    task: Option<JoinHandle<()>>,
    finished: watch::Receiver<bool>,
}

impl PreviewController {
    /// Start playing `start..end` on the transport with the default tick
    pub fn start(
        transport: Arc<Mutex<dyn MediaTransport>>,
        start: f64,
        end: f64,
        mode: PlayMode,
    ) -> Self {
        Self::start_with_tick(transport, start, end, mode, DEFAULT_TICK)
    }

    /// Start playing with an explicit boundary-check interval
    pub fn start_with_tick(
        transport: Arc<Mutex<dyn MediaTransport>>,
        start: f64,
        end: f64,
        mode: PlayMode,
        tick: Duration,
    ) -> Self {
        {
            let mut t = lock(&transport);
            t.seek(start);
            t.play();
        }

        let (done_tx, done_rx) = watch::channel(false);
        let watched = transport.clone();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let mut t = lock(&watched);
                if t.position() >= end {
                    match mode {
                        PlayMode::Once => {
                            t.pause();
                            drop(t);
                            debug!(end, "preview reached clip end, pausing");
                            let _ = done_tx.send(true);
                            break;
                        }
                        PlayMode::Loop => {
                            debug!(start, "preview reached clip end, looping");
                            t.seek(start);
                            t.play();
                        }
                    }
                }
            }
        });

        Self {
            transport,
            task: Some(task),
            finished: done_rx,
        }
    }

    /// Current transport position in seconds
    pub fn position(&self) -> f64 {
        lock(&self.transport).position()
    }

    /// Resolves when a single-shot preview pauses at the end boundary.
    /// Loop previews never finish on their own.
    pub async fn finished(&mut self) {
        let _ = self.finished.wait_for(|done| *done).await;
    }

    /// Cancel the boundary watcher and pause playback
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        lock(&self.transport).pause();
    }
}

impl Drop for PreviewController {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock(transport: &Arc<Mutex<dyn MediaTransport>>) -> MutexGuard<'_, dyn MediaTransport + 'static> {
    transport.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Transport backed by a monotonic clock, used when no real player is
/// attached: position advances in real time while playing.
pub struct ClockTransport {
    base: f64,
    playing_since: Option<std::time::Instant>,
}

impl ClockTransport {
    pub fn new() -> Self {
        Self {
            base: 0.0,
            playing_since: None,
        }
    }
}

impl Default for ClockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaTransport for ClockTransport {
    fn position(&self) -> f64 {
        match self.playing_since {
            Some(since) => self.base + since.elapsed().as_secs_f64(),
            None => self.base,
        }
    }

    fn seek(&mut self, seconds: f64) {
        self.base = seconds;
        if let Some(since) = &mut self.playing_since {
            *since = std::time::Instant::now();
        }
    }

    fn play(&mut self) {
        if self.playing_since.is_none() {
            self.playing_since = Some(std::time::Instant::now());
        }
    }

    fn pause(&mut self) {
        self.base = self.position();
        self.playing_since = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    /// Transport on tokio's clock so paused-time tests are deterministic
    struct FakeTransport {
        base: f64,
        playing_since: Option<Instant>,
        play_calls: usize,
    }

    impl FakeTransport {
        fn new() -> Self {
            Self {
                base: 0.0,
                playing_since: None,
                play_calls: 0,
            }
        }

        fn is_playing(&self) -> bool {
            self.playing_since.is_some()
        }
    }

    impl MediaTransport for FakeTransport {
        fn position(&self) -> f64 {
            match self.playing_since {
                Some(since) => self.base + since.elapsed().as_secs_f64(),
                None => self.base,
            }
        }

        fn seek(&mut self, seconds: f64) {
            self.base = seconds;
            if let Some(since) = &mut self.playing_since {
                *since = Instant::now();
            }
        }

        fn play(&mut self) {
            self.play_calls += 1;
            if self.playing_since.is_none() {
                self.playing_since = Some(Instant::now());
            }
        }

        fn pause(&mut self) {
            self.base = self.position();
            self.playing_since = None;
        }
    }

    fn shared(t: FakeTransport) -> Arc<Mutex<FakeTransport>> {
        Arc::new(Mutex::new(t))
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_preview_pauses_at_end() {
        let transport = shared(FakeTransport::new());
        let handle: Arc<Mutex<dyn MediaTransport>> = transport.clone();

        let mut controller = PreviewController::start(handle, 1.0, 2.0, PlayMode::Once);
        controller.finished().await;

        let t = transport.lock().unwrap();
        assert!(!t.is_playing());
        assert!(t.position() >= 2.0);
        // within one tick of the boundary
        assert!(t.position() < 2.0 + 0.2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_preview_seeks_back_and_keeps_playing() {
        let transport = shared(FakeTransport::new());
        let handle: Arc<Mutex<dyn MediaTransport>> = transport.clone();

        let _controller = PreviewController::start(handle, 1.0, 2.0, PlayMode::Loop);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let t = transport.lock().unwrap();
            assert!(t.is_playing());
            // has wrapped at least once: position is back inside the range
            assert!(t.position() < 2.0 + 0.2);
            assert!(t.play_calls >= 2);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_watcher_and_pauses() {
        let transport = shared(FakeTransport::new());
        let handle: Arc<Mutex<dyn MediaTransport>> = transport.clone();

        let controller = PreviewController::start(handle, 0.0, 10.0, PlayMode::Once);
        tokio::time::sleep(Duration::from_millis(300)).await;
        drop(controller);

        let position = transport.lock().unwrap().position();
        assert!(!transport.lock().unwrap().is_playing());

        // no watcher left running: position stays frozen
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(transport.lock().unwrap().position(), position);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let transport = shared(FakeTransport::new());
        let handle: Arc<Mutex<dyn MediaTransport>> = transport.clone();

        let mut controller = PreviewController::start(handle, 0.0, 10.0, PlayMode::Loop);
        controller.stop();
        controller.stop();
        assert!(!transport.lock().unwrap().is_playing());
    }
}
