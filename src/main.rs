//! The *r*educing *ed*itor.
//!
//! Copyright 2024 David Edwards
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! you may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//! <https://www.apache.org/licenses/LICENSE-2.0>
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.
mod ansi;
mod buffer;
mod command;
mod config;
mod control;
mod cursor;
mod error;
mod io;
mod key;
mod opt;
mod reduce;
mod render;
mod state;
mod term;
mod writer;

use crate::config::{Configuration, Settings};
use crate::control::Controller;
use crate::cursor::Cursor;
use crate::error::Result;
use crate::key::Keyboard;
use crate::opt::Options;
use crate::state::State;
use std::io::Write;
use std::ops::Drop;
use std::path::PathBuf;
use std::process::ExitCode;

/// Usage documentation for display to terminal.
const USAGE: &str = include_str!("include/usage.in");

// Version and build information.
const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_HASH: &str = env!("BUILD_HASH");
const BUILD_DATE: &str = env!("BUILD_DATE");

/// Used for restoring the terminal via [`Drop`] to its original state.
struct RestoreTerminal {
    alt_screen: bool,
}

impl Drop for RestoreTerminal {
    fn drop(&mut self) {
        term::restore().unwrap_or_else(|e| println!("error restoring terminal: {e}"));
        if self.alt_screen {
            print!("{}", ansi::alt_screen(false));
        }
        let _ = std::io::stdout().flush();
    }
}

fn main() -> ExitCode {
    match run() {
        Err(e) => {
            println!("{e}");
            ExitCode::from(1)
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}

fn run() -> Result<()> {
    let opts = Options::parse(std::env::args().skip(1))?;
    if opts.help {
        print!("{USAGE}");
        Ok(())
    } else if opts.version {
        println!("{PACKAGE_NAME} {PACKAGE_VERSION} ({BUILD_HASH} {BUILD_DATE})");
        Ok(())
    } else {
        run_opts(&opts)
    }
}

fn run_opts(opts: &Options) -> Result<()> {
    // Configuration from command line takes precedence over standard locations,
    // and bare mode ignores configuration files altogether.
    let config = if opts.bare {
        Configuration::default()
    } else if let Some(ref config_path) = opts.config_path {
        Configuration::load_file(config_path)?
    } else {
        Configuration::load()?
    };

    // Loading happens before the terminal changes mode so that failures are reported
    // on an intact terminal.
    let (state, path) = if let Some(ref file) = opts.file {
        let buffer = io::read_file(file)?;
        (State::new(buffer, Cursor::ORIGIN), Some(PathBuf::from(file)))
    } else {
        (State::blank(), None)
    };
    run_state(config.settings, state, path)
}

fn run_state(settings: Settings, state: State, path: Option<PathBuf>) -> Result<()> {
    let alt_screen = settings.alt_screen;
    let mut controller = Controller::new(
        Keyboard::new(),
        std::io::stdout(),
        settings,
        state,
        path,
    );

    // Puts terminal into raw mode prior to running main controller loop, but also
    // ensures terminal settings are restored upon exit.
    term::init()?;
    let _restore = RestoreTerminal { alt_screen };
    if alt_screen {
        print!("{}", ansi::alt_screen(true));
    }
    controller.run()
}
