//! Derive Api for `flagspec`.
//!
//! `#[derive(Flags)]` implements [`FlagSet`](crate::prelude::FlagSet) for a struct with named fields.
//! Each field becomes a [`Flag`](crate::Flag) of the field type, and the struct is read back from the parsed options field by field.
//!
//! ```no_run
#![doc = include_str!("../demos/server_flags_d.rs")]
//! ```
//!
//! ### Implicit Rules
//! Without any attributes, a field `foo_bar: T` generates `Flag::<T>::new("--foo-bar")`.
//! * The key is the field name prefixed with `--`, with each `_` replaced by `-`.
//! * A field of type `Option<T>` generates an optional `Flag<T>`.
//! The field is `None` when the option is not supplied.
//! * A field of any other type `T` must resolve to a value: the supplied value, or else the default.
//! Notice, `bool` fields default to `false`, so they are implicitly optional.
//!
//! For example:
//! ```ignore
//! #[derive(Flags)]
//! struct Server {
//!     port: u16,
//!     // the above generates:
//!     //  Flag::<u16>::new("--port")
//!
//!     log_file: Option<String>,
//!     // the above generates:
//!     //  Flag::<String>::new("--log-file").optional()
//!
//!     verbose: bool,
//!     // the above generates:
//!     //  Flag::<bool>::new("--verbose")
//! }
//! ```
//!
//! ### Explicit Rules
//! The implicit rules may be refined with `#[flag(..)]` field attributes.
//! * `#[flag(key = "..")]` replaces the implicit key.
//! * `#[flag(alias = "..")]` adds an alternate key; it may be repeated.
//! * `#[flag(help = "..")]` defines the description of the flag in the help listing.
//! * `#[flag(default = ..)]` defines the value of the flag when it is not supplied.
//! Not allowed on `Option<T>` fields.
//! * `#[flag(min = ..)]` and `#[flag(max = ..)]` bound the value (see [`Flag::min`](crate::Flag::min) and [`Flag::max`](crate::Flag::max)).
//! * `#[flag(mandatory)]` or `#[flag(optional)]` override the requirement of the flag in the spec; they may not be combined.
//!
//! For example:
//! ```ignore
//! #[derive(Flags)]
//! struct Server {
//!     #[flag(alias = "-p", default = 8080, min = 1024)]
//!     port: u16,
//!     // the above generates:
//!     //  Flag::<u16>::new("--port").alias("-p").default_value(8080).min(1024)
//!
//!     #[flag(key = "--bind", help = "The interface to bind.", mandatory)]
//!     host: String,
//!     // the above generates:
//!     //  Flag::<String>::new("--bind").help("The interface to bind.").mandatory()
//! }
//! ```
//!
//! Several `#[flag(..)]` attributes on one field are merged.
//! Apart from `alias`, each attribute may be given once per field; any other attribute, or a repeated one, is rejected at compile time.

pub use flagspec_derive::*;
