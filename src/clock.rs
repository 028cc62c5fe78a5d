use chrono::{DateTime, Local};
use std::fmt::Debug;

/// Source of wall-clock time for transaction records & receipts
pub trait Clock: Debug {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant, keeps test output deterministic
#[cfg(test)]
#[derive(Debug)]
pub struct FixedClock(pub DateTime<Local>);

#[cfg(test)]
impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        use chrono::TimeZone;
        FixedClock(
            Local
                .with_ymd_and_hms(year, month, day, hour, min, sec)
                .single()
                .unwrap(),
        )
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
