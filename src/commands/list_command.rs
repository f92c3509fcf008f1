//! Annotation listing command

use clap::ArgMatches;

use crate::annotation::{AnnotationStore, SessionFileStore};
use crate::commands::command_traits::Command;
use crate::config::BoxDropConfig;
use crate::errors::{BoxDropError, BoxDropResult};
use crate::utils::format_utils::label_column;

/// Command printing the annotation sequence of an image's session
pub struct ListCommand {
    store: std::cell::RefCell<SessionFileStore>,
}

impl ListCommand {
    pub fn new(args: &ArgMatches, config: &BoxDropConfig) -> BoxDropResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| BoxDropError::GenericError("Missing input image".to_string()))?;

        Ok(ListCommand {
            store: std::cell::RefCell::new(super::session_store(args, input_file, config)),
        })
    }
}

impl Command for ListCommand {
    fn execute(&self) -> BoxDropResult<()> {
        let mut store = self.store.borrow_mut();
        let records = store.load()?;

        println!("{}{}", label_column("Session:"), store.session_path().display());
        println!("{}{}", label_column("Annotations:"), records.len());

        for (index, record) in records.iter().enumerate() {
            let description = if record.is_placeholder() { "(placeholder)" } else { record.description.as_str() };
            println!("  #{:<4} {:<24} {:<10} {:>4} pts  {}",
                     index, record.name, record.geometry, record.vertex_count(), description);
        }

        Ok(())
    }
}
