#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod activity;
pub mod app;
pub mod archive;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod gateway;
pub mod generation;
pub mod prompts;
pub mod providers;
pub mod ui;
pub mod utils;

pub use config::Config;
