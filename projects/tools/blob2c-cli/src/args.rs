use crate::error::CliError;
use argh::FromArgs;
use blob2c::{EmissionTarget, OutputMode, SymbolName};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Convert a binary file into embeddable C/C++ source code
#[argh(help_triggers("-h", "--help"))]
pub struct EmbedArgs {
    /// input file path
    #[argh(option, short = 'i')]
    pub input: Option<PathBuf>,

    /// output file name stem, `.h` (and `.c`) are appended
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// base name of the generated symbols
    #[argh(option, short = 'n')]
    pub name: Option<String>,

    /// output mode: c_header, c_extern, c_funcs, c_struct_extern, c_struct_func [default: c_header]
    #[argh(option, short = 'm')]
    pub mode: Option<String>,

    /// print the version and exit
    #[argh(switch, short = 'v')]
    pub version: bool,

    /// print a summary of the written files
    #[argh(switch)]
    pub verbose: bool,
}

/// A fully validated request, ready to run.
#[derive(Debug)]
pub struct Invocation {
    pub input: PathBuf,
    pub target: EmissionTarget,
    pub symbol: SymbolName,
    pub mode: OutputMode,
    pub verbose: bool,
}

impl EmbedArgs {
    /// Checks the arguments in order: input, output, name, mode.
    /// Nothing is read or written here.
    pub fn validate(self) -> Result<Invocation, CliError> {
        let input = self
            .input
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(CliError::MissingInput)?;

        let output = self
            .output
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(CliError::MissingOutput)?;

        let name = self
            .name
            .filter(|name| !name.is_empty())
            .ok_or(CliError::MissingSymbolName)?;
        let symbol = SymbolName::new(&name)
            .map_err(|source| CliError::InvalidSymbolName { name, source })?;

        let mode = match self.mode {
            Some(name) => name.parse::<OutputMode>()?,
            None => OutputMode::default(),
        };
        if !mode.is_registered() {
            return Err(CliError::UnregisteredMode(mode));
        }

        Ok(Invocation {
            input,
            target: EmissionTarget::new(output),
            symbol,
            mode,
            verbose: self.verbose,
        })
    }
}
