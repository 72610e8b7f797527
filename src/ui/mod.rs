pub mod locale;
pub mod messages;
pub mod render;
