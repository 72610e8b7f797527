pub mod config;
pub mod day;
pub mod init;
pub mod now;
pub mod watch;
pub mod week;
