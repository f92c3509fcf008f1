//! CLI command implementations
//!
//! The binary is a minimal host for the pipeline: it plays the part of the
//! viewer's parameter bindings for a single invocation, or lists what a
//! session file holds.

pub mod command_traits;
pub mod place_command;
pub mod list_command;

pub use command_traits::{Command, CommandFactory};
pub use place_command::PlaceCommand;
pub use list_command::ListCommand;

use clap::ArgMatches;
use log::info;

use crate::annotation::SessionFileStore;
use crate::config::BoxDropConfig;
use crate::utils::logger::Logger;
use crate::errors::BoxDropResult;

/// Factory for creating command instances based on CLI arguments
pub struct BoxDropCommandFactory {
    config: BoxDropConfig,
}

impl BoxDropCommandFactory {
    /// Create a new factory using `config` for every command
    pub fn new(config: BoxDropConfig) -> Self {
        BoxDropCommandFactory { config }
    }
}

impl<'a> CommandFactory<'a> for BoxDropCommandFactory {
    fn create_command(&self, args: &ArgMatches, audit: &'a Logger) -> BoxDropResult<Box<dyn Command + 'a>> {
        if args.get_flag("list") {
            info!("Listing stored annotations");
            Ok(Box::new(ListCommand::new(args, &self.config)?))
        } else {
            // Default to placing a ROI
            Ok(Box::new(PlaceCommand::new(args, &self.config, audit)?))
        }
    }
}

/// Session file for the input image, from `--session` or derived from the image path
fn session_store(args: &ArgMatches, input_file: &str, config: &BoxDropConfig) -> SessionFileStore {
    match args.get_one::<String>("session") {
        Some(path) => SessionFileStore::with_session_path(input_file, path.as_str()),
        None => SessionFileStore::for_image(input_file, &config.session_suffix),
    }
}
