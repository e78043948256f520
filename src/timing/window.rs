use serde::Serialize;
use std::fmt;

/// A contact window starting on the hour and closing at half past the next
/// hour. Windows starting at 23 close at 23:45.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactWindow {
    pub start_hour: u32,
    pub end_hour: u32,
    pub end_minute: u32,
}

impl ContactWindow {
    pub fn for_hour(hour: u32) -> Self {
        let start_hour = hour.min(23);
        let end_minute = if start_hour < 23 { 30 } else { 45 };
        Self {
            start_hour,
            end_hour: (start_hour + 1).min(23),
            end_minute,
        }
    }

    pub fn start(&self) -> String {
        format!("{:02}:00", self.start_hour)
    }

    pub fn end(&self) -> String {
        format!("{:02}:{:02}", self.end_hour, self.end_minute)
    }
}

impl fmt::Display for ContactWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}
