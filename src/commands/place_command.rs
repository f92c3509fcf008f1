//! ROI placement command
//!
//! Runs one pipeline invocation with parameters taken from the command line
//! and prints the report.

use clap::ArgMatches;
use log::info;

use crate::annotation::SessionFileStore;
use crate::commands::command_traits::Command;
use crate::config::BoxDropConfig;
use crate::errors::{BoxDropError, BoxDropResult};
use crate::geometry::BoundingBox;
use crate::pipeline::{BoxDrop, ChangeFlags, InputAnnotation, PipelineParameters};
use crate::pixel::ImageSourceFactory;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command placing a ROI on an image and optionally exporting it
pub struct PlaceCommand<'a> {
    /// Path to the input image
    input_file: String,
    /// Session file holding the image's annotations
    store: std::cell::RefCell<SessionFileStore>,
    /// Parameters of the invocation
    params: PipelineParameters,
    /// Whether to draw a progress spinner
    show_progress: bool,
    /// Audit log for the invocation
    audit: &'a Logger,
}

impl<'a> PlaceCommand<'a> {
    /// Create a new place command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Loaded configuration
    /// * `audit` - Audit log for the invocation
    ///
    /// # Returns
    /// A new PlaceCommand instance or an error
    pub fn new(args: &ArgMatches, config: &BoxDropConfig, audit: &'a Logger) -> BoxDropResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| BoxDropError::GenericError("Missing input image".to_string()))?
            .clone();
        info!("Input image: {}", input_file);

        let mut params = PipelineParameters::new(config);

        if let Some(bbox_str) = args.get_one::<String>("annotation") {
            let bbox = BoundingBox::from_string(bbox_str)
                .map_err(|e| BoxDropError::GenericError(format!("Invalid annotation: {}", e)))?;
            info!("Input annotation: {:?}", bbox);
            params = params.with_annotation(InputAnnotation::from_bbox("cli", &bbox));
        }

        if let Some(size_str) = args.get_one::<String>("size") {
            params.roi_size = size_str.parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| BoxDropError::GenericError(format!("Invalid ROI size: {}", size_str)))?;
        }

        if let Some(description) = args.get_one::<String>("description") {
            params.description = description.clone();
        }

        params.export_requested = args.get_flag("export");
        params.destination = args.get_one::<String>("output").cloned().unwrap_or_default();
        info!("Export requested: {} ({})", params.export_requested, params.destination);

        let store = super::session_store(args, &input_file, config);
        info!("Session file: {}", store.session_path().display());

        Ok(PlaceCommand {
            input_file,
            store: std::cell::RefCell::new(store),
            params,
            show_progress: !args.get_flag("quiet"),
            audit,
        })
    }
}

impl<'a> Command for PlaceCommand<'a> {
    fn execute(&self) -> BoxDropResult<()> {
        info!("Placing ROI on {}", self.input_file);

        let progress = if self.show_progress {
            ProgressTracker::new(2, "Placing ROI")
        } else {
            ProgressTracker::hidden()
        };

        let mut pipeline = BoxDrop::new(Box::new(ImageSourceFactory::new()))
            .with_audit_log(self.audit);
        progress.increment(1);
        progress.set_message("Reconciling annotations");

        // A fresh process has no previous invocation; every parameter is new
        let mut store = self.store.borrow_mut();
        let outcome = pipeline.run(&self.params, &ChangeFlags::all(), &mut *store)?;
        progress.increment(1);
        progress.finish();

        print!("{}", outcome.report);
        info!("Stored {} annotations in {}", outcome.stored_count, store.session_path().display());

        Ok(())
    }
}
