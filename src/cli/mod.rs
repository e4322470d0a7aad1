//! Workflows behind the command-line entry points

pub mod orchestration;

pub use orchestration::{run_tag_version, tag_if_absent, tag_version, TagOutcome, TagVersionArgs};
