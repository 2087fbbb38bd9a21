//! The bridge core: a typed command schema rendered to script text and
//! driven over a lazily-initialized channel into the embedded engine.
//!
//! Nothing outside this module concatenates script text. Command groups
//! build [`Command`] values; [`script`] renders them with every interpolated
//! value routed through the [`codec`], and [`ScriptChannel`] executes them
//! against whatever [`ScriptHost`] the embedding application provides.

pub mod channel;
pub mod codec;
pub mod command;
pub mod script;

pub use channel::{EngineCommands, ScriptChannel, ScriptHost};
pub use command::Command;
