use blob2c::{OutputMode, SymbolNameError, UnknownModeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("input file name is empty")]
    MissingInput,

    #[error("output file name is empty")]
    MissingOutput,

    #[error("variable name is empty")]
    MissingSymbolName,

    #[error("invalid var name {name}: {source}")]
    InvalidSymbolName {
        name: String,
        #[source]
        source: SymbolNameError,
    },

    #[error(transparent)]
    UnknownMode(#[from] UnknownModeError),

    /// The mode parsed but has no emitter behind it.
    #[error("mode {0} is not registered")]
    UnregisteredMode(OutputMode),

    #[error(transparent)]
    Embed(#[from] blob2c::Error),
}
