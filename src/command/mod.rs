//! Administrative command surface and the sender abstraction the host implements.

pub mod alias;

/// Prefix of every message sent back to a command sender.
pub const MESSAGE_PREFIX: &str = "[CustomCommands]";

/// Whoever typed the input: an actor with an identity, or the console.
pub trait CommandSender: Send + Sync {
    /// Display name used in logs.
    fn name(&self) -> &str;

    /// Actor identity; `None` for console input, which only works on global aliases.
    fn identity(&self) -> Option<&str>;

    /// Deliver a user-facing message.
    fn send_message(&self, message: &str);
}
