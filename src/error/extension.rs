use thiserror::Error;

/// Failure while loading the extension set.
///
/// Any of these aborts startup before the gateway connects.
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// An extension's setup returned an error.
    #[error("Failed to load extension '{name}': {reason}")]
    Load {
        /// Name of the extension that failed
        name: String,
        /// Human readable cause
        reason: String,
    },

    /// Two extensions share a name.
    #[error("Extension '{0}' is already loaded")]
    Duplicate(String),

    /// A cog was registered twice, possibly by different extensions.
    #[error("Cog '{0}' is already registered")]
    DuplicateCog(String),
}
