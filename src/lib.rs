pub mod cli;
pub mod config;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod git;
pub mod process;
pub mod resolver;
pub mod ui;
pub mod workdir;

pub use cli::{tag_version, TagOutcome};
pub use credentials::rewrite_url_credentials;
pub use error::{GittableError, Result};
