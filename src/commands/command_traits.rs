//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the host binary.

use crate::utils::logger::Logger;
use crate::errors::BoxDropResult;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self) -> BoxDropResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `audit` - Audit log shared by the commands
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, audit: &'a Logger) -> BoxDropResult<Box<dyn Command + 'a>>;
}
