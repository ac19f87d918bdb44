pub mod noop_system_message_poster;

pub use noop_system_message_poster::NoopSystemMessagePoster;
