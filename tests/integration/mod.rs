//! Integration tests for bindsync

mod cli_apply;
mod config_integration;
mod test_utils;

pub use test_utils::{read_json, with_env, write_json};
