//! `flagspec` is a declarative command line option parser for Rust.
//!
//! A program declares the options it recognizes up front, as a [`CommandLineSpec`].
//! `flagspec` then splits the command line into positional arguments and options, validates every option, and reports *all* of the problems it finds at once.
//! Specifically, `flagspec` attempts to prioritize the following design concerns:
//! * *Declared options*:
//! Every option is declared with a canonical key, any number of aliases, whether it is mandatory, a validator, and a help description.
//! * *Aggregated errors*:
//! A command line with several problems is rejected with all of them, not just the first.
//! * *Stable syntax*:
//! Options are always written `--key` or `--key=value` (any number of leading dashes); every other token is a positional argument.
//! * *Typed flags*:
//! On top of the raw options, [`Flag`] reads typed values (`bool`, `String`, integers) with defaults and range checks, and `#[derive(Flags)]` declares a whole struct of them.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/server_flags_d.rs")]
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/server_flags.rs")]
//! ```
//!
//! Both of these generate the same Cli program:
//! ```console
//! $ server_flags -h
//! --help [-h]  optional  Prints help
//! --host       optional  The interface to bind.
//! --port [-p]  optional  The port to listen on.
//! --verbose    optional  Log every request.
//!
//! $ server_flags --port=8000 -verbose
//! Command-line arguments error
//! Option misspelt: `-verbose`
//! Unrecognized option: -verbose
//!
//! $ server_flags -p=80 public
//! Command-line arguments error
//! Option `-p` value is invalid: `80`
//! ```
//!
//! # Builder Api
//! Declare each option as an [`ArgSpec`], and collect them in a [`CommandLineSpec`].
//! [`CommandLineSpec::new`] also declares the `--help [-h]` option; use [`CommandLineSpec::without_help`] to leave it out.
//!
//! Parse with either:
//! * [`CommandLineParser::parse`]: the pure parser, producing a [`ParseResult`] or an [`InvalidCommandLine`].
//! * [`CommandLine::of`]: the process facing parser, which prints the help listing for a lone `--help`, prints the errors of a rejected command line, and exits with code `0` or `1` respectively.
//!
//! ### Options
//! A token starting with `-` is an option; it is split on the first `=` into a key and a value.
//! The key is matched against the canonical keys and aliases of the spec.
//! The parsed options are read from [`CommandLineOptions`] by *name* (the canonical key without its leading dashes, ex: `port`), or by *key* (any declared spelling, ex: `--port` or `-p`).
//!
//! ### Errors
//! Every problem is reported, grouped in this order:
//! * ``Option `<key>` value is invalid: `<value>` ``: the validator of a declared option rejects its value.
//! * `Unrecognized option: <key>`: an undeclared option, unless [`CommandLineSpec::allow_arbitrary_options`] is on.
//! * `Mandatory option is missing: <description>`: a mandatory option is not supplied under any of its keys.
//! * ``Option misspelt: `<key>` ``: an undeclared option which matches a declared key under a different dash convention (ex: `-port` for `--port`).
//!
//! ```no_run
#![doc = include_str!("../demos/echo_args.rs")]
//! ```
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` events from the parser, the help printer, and the typed flags.
pub mod derive;
pub use flagspec_builder::*;
