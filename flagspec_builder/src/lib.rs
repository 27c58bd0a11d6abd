//! Builder module for `flagspec`.
//! See [documentation root](https://docs.rs/flagspec/latest/flagspec/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod flag;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use flag::Flag;
pub use model::*;
pub use parser::{CommandLineParser, ConfigError, InvalidCommandLine, OptionError, ParseResult};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
