// System clock adapter
use crate::application::clock::Clock;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
