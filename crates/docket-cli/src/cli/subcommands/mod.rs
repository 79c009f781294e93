mod case;
mod document;
mod event;

pub use case::CaseCommands;
pub use document::DocumentCommands;
pub use event::EventCommands;
