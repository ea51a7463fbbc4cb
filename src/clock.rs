use chrono::{Datelike, Local};

/// Source of the calendar year printed in the footer.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Reads the local system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}
