/*!
 * Step Pacing
 * Optional delay between unit steps for human-observable runs
 */

use std::time::Duration;

/// Delay strategy invoked before every unit step
///
/// Pacing never influences ordering or counters.
#[cfg_attr(test, mockall::automock)]
pub trait Pacer {
    fn pause(&mut self);
}

/// No delay (tests, batch runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}

/// Fixed sleep per unit step
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    fn pause(&mut self) {
        std::thread::sleep(self.0);
    }
}

/// Pacer for a configured delay
pub fn pacer_for(delay: Duration) -> Box<dyn Pacer> {
    if delay.is_zero() {
        Box::new(NoDelay)
    } else {
        Box::new(FixedDelay(delay))
    }
}
