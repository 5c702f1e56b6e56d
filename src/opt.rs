//! Options parser.

use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct Options {
    pub help: bool,
    pub version: bool,
    pub config_path: Option<String>,
    pub bare: bool,
    pub file: Option<String>,
}

impl Options {
    pub fn parse<T>(args: T) -> Result<Options>
    where
        T: IntoIterator<Item = String>,
    {
        let mut opts = Options::default();
        let mut it = args.into_iter();
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--help" => opts.help = true,
                "--version" => opts.version = true,
                "--config" => opts.config_path = Some(expect_value(&arg, it.next())?),
                "--bare" => opts.bare = true,
                arg if arg.starts_with("--") => return Err(Error::unexpected_arg(arg)),
                _ if opts.file.is_some() => return Err(Error::unexpected_arg(&arg)),
                _ => opts.file = Some(arg),
            }
        }
        Ok(opts)
    }
}

fn expect_value(arg: &str, next_arg: Option<String>) -> Result<String> {
    next_arg.ok_or_else(|| Error::expected_value(arg))
}
