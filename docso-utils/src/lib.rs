/// Generic embed builders shared across commands.
pub mod embed;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Reaction-driven pagination sessions and their lifecycle.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
