pub mod board;
pub mod day;
pub mod watch;
pub mod week;
