pub mod clock;
pub mod language;
pub mod period;
pub mod weekday;
