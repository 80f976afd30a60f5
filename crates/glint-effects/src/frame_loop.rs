//! Cancellable fixed-rate frame loop.

use std::time::{Duration, Instant};

use glint_core::{Animation, Surface};
use tokio_util::sync::CancellationToken;

/// Fixed-rate frame deadlines.
///
/// After a stall the next deadline is "now" rather than a backlog of missed
/// frames, so a slow frame never triggers a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_frame: Instant::now(),
        }
    }

    /// Advance by one frame and return when that frame is due.
    pub fn next_deadline(&mut self) -> Instant {
        self.next_frame += self.interval;
        let now = Instant::now();
        if self.next_frame < now {
            self.next_frame = now;
        }
        self.next_frame
    }

    /// Block until the next frame is due.
    pub fn wait(&mut self) {
        let deadline = self.next_deadline();
        std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
    }
}

/// Tick `animation` onto `surface` every `interval` until `cancel` fires.
///
/// The token is checked at the top of every iteration, so a token that is
/// already cancelled runs no ticks at all. Returns the number of ticks run.
pub fn run_until_cancelled<A, S>(
    animation: &mut A,
    surface: &mut S,
    cancel: &CancellationToken,
    interval: Duration,
) -> u64
where
    A: Animation + ?Sized,
    S: Surface,
{
    let mut ticks = 0;
    let mut pacer = FramePacer::new(interval);

    while !cancel.is_cancelled() {
        animation.tick(surface);
        ticks += 1;
        pacer.wait();
    }

    tracing::debug!(ticks, "frame loop cancelled");
    ticks
}

#[cfg(test)]
mod tests {
    use std::thread;

    use glint_core::{DrawList, Point, Rgba, Size};

    use super::*;

    /// Counts ticks and cancels itself after a fixed number.
    struct CountDown {
        remaining: u32,
        cancel: CancellationToken,
    }

    impl Animation for CountDown {
        fn tick(&mut self, surface: &mut dyn Surface) {
            surface.fill_circle(Point::default(), 1.0, Rgba::default());
            self.remaining -= 1;
            if self.remaining == 0 {
                self.cancel.cancel();
            }
        }

        fn resize(&mut self, _size: Size) {}
    }

    #[test]
    fn test_pacer_spaces_deadlines_by_interval() {
        let mut pacer = FramePacer::new(Duration::from_secs(60));
        let first = pacer.next_deadline();
        let second = pacer.next_deadline();
        assert_eq!(second - first, Duration::from_secs(60));
        assert!(first > Instant::now());
    }

    #[test]
    fn test_pacer_skips_missed_frames() {
        let mut pacer = FramePacer::new(Duration::from_millis(1));
        thread::sleep(Duration::from_millis(20));
        let before = Instant::now();
        // Without skipping, this deadline would be 19ms in the past.
        assert!(pacer.next_deadline() >= before);
    }

    #[test]
    fn test_cancelled_token_runs_nothing() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut anim = CountDown {
            remaining: 10,
            cancel: cancel.clone(),
        };
        let mut surface = DrawList::new(Size::new(1.0, 1.0));

        let ticks = run_until_cancelled(&mut anim, &mut surface, &cancel, Duration::ZERO);
        assert_eq!(ticks, 0);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_stops_right_after_cancel() {
        let cancel = CancellationToken::new();
        let mut anim = CountDown {
            remaining: 3,
            cancel: cancel.clone(),
        };
        let mut surface = DrawList::new(Size::new(1.0, 1.0));

        let ticks = run_until_cancelled(&mut anim, &mut surface, &cancel, Duration::ZERO);
        assert_eq!(ticks, 3);
        assert_eq!(surface.commands().len(), 3);
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let cancel = CancellationToken::new();
        let remote = cancel.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            remote.cancel();
        });

        let mut anim = CountDown {
            remaining: u32::MAX,
            cancel: cancel.clone(),
        };
        let mut surface = DrawList::new(Size::new(1.0, 1.0));
        let ticks =
            run_until_cancelled(&mut anim, &mut surface, &cancel, Duration::from_millis(1));

        handle.join().unwrap();
        assert!(ticks > 0);
        assert!(cancel.is_cancelled());
    }
}
