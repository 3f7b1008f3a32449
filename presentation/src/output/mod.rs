//! Output formatting for talks, replies and the conversation log

pub mod console;
