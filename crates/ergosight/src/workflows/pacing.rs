use std::time::Duration;

/// Source of artificial latency for simulated assistant replies and analysis runs.
///
/// Production callers sleep the current thread; tests substitute a pacer that
/// returns immediately so the core stays synchronous and deterministic.
pub trait Pacer {
    fn pause(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InstantPacer;

impl Pacer for InstantPacer {
    fn pause(&self, _duration: Duration) {}
}

impl<P: Pacer + ?Sized> Pacer for &P {
    fn pause(&self, duration: Duration) {
        (**self).pause(duration)
    }
}
