//! The BoxDrop invocation driver

use log::{debug, error, info, warn};

use crate::annotation::{AnnotationReconciler, AnnotationStore};
use crate::errors::BoxDropResult;
use crate::export::{ExportDestination, ExportError, ExportValidator, ExportWriter};
use crate::geometry::{ExtentCalculator, RoiRect};
use crate::pixel::{ExportHandle, PixelSourceFactory};
use crate::utils::logger::Logger;

use super::change_detector::{ChangeDetector, ChangeFlags};
use super::context::{ExportStatus, InvocationContext, InvocationOutcome, Overlay};
use super::parameters::{ParameterBounds, PipelineParameters};
use super::report::ReportGenerator;

/// Places ROIs, reconciles them into the annotation store and exports them
///
/// The host calls [`BoxDrop::run`] once per user action. Between runs only
/// the cached export handle and the change snapshot are kept.
pub struct BoxDrop<'a> {
    /// Opens the pixel source behind the export handle
    sources: Box<dyn PixelSourceFactory + 'a>,
    /// Cached export handle, `None` until the first invocation or after a cancel
    handle: Option<ExportHandle>,
    detector: ChangeDetector,
    validator: ExportValidator,
    writer: ExportWriter,
    report: ReportGenerator,
    /// Receives one line per invocation
    audit: Option<&'a Logger>,
}

impl<'a> BoxDrop<'a> {
    /// Create a pipeline reading pixels through `sources`
    pub fn new(sources: Box<dyn PixelSourceFactory + 'a>) -> Self {
        BoxDrop {
            sources,
            handle: None,
            detector: ChangeDetector::new(),
            validator: ExportValidator::default(),
            writer: ExportWriter::new(),
            report: ReportGenerator::new(),
            audit: None,
        }
    }

    /// Record every invocation in `logger`
    pub fn with_audit_log(mut self, logger: &'a Logger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Whether an export handle is cached
    pub fn has_export_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Parameter bounds for the image behind the cached handle
    pub fn parameter_bounds(&self) -> Option<ParameterBounds> {
        self.handle.as_ref().map(|handle| {
            let (width, height) = handle.dimensions();
            ParameterBounds::from_dimensions(width, height)
        })
    }

    /// The host aborted the run: drop the export handle
    ///
    /// The next invocation opens a fresh handle and counts as changed.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            info!("Run cancelled, dropping export handle for {}", handle.source_id());
        }
    }

    /// Run one invocation against `store`
    ///
    /// Export failures never abort the invocation; they end up in the
    /// report. Only store I/O errors are returned.
    pub fn run(&mut self,
               params: &PipelineParameters,
               flags: &ChangeFlags,
               store: &mut dyn AnnotationStore) -> BoxDropResult<InvocationOutcome> {
        let source_id = store.source_id().to_string();
        info!("Running ROI placement for {}", source_id);

        let handle_present = self.handle.as_ref()
            .is_some_and(|handle| handle.is_bound_to(&source_id));
        if !handle_present && self.handle.take().is_some() {
            debug!("Export handle was bound to another image, dropping it");
        }

        let changed = self.detector.evaluate(params, flags, handle_present);
        self.ensure_handle(&source_id);

        let roi_size = match self.parameter_bounds() {
            Some(bounds) => bounds.clamp_size(params.roi_size),
            None => params.roi_size.max(1),
        };
        let mut context = InvocationContext::new(changed, roi_size);

        if changed {
            context.roi = self.place_roi(params, roi_size);
        } else {
            debug!("Nothing changed since the last invocation, skipping placement");
        }

        // The store is rewritten on every invocation
        let reconciler = AnnotationReconciler::new(&params.description);
        let records = store.load()?;
        let reconciliation = reconciler.reconcile(records, context.roi.as_ref());
        let stored_count = reconciliation.records.len();
        let last_name = reconciliation.records.last()
            .map(|record| record.name.clone())
            .unwrap_or_default();
        store.replace(reconciliation.records);
        store.persist()?;

        context.overlay_count = reconciliation.seen_count;
        let overlay = match (&reconciliation.appended, context.roi) {
            (Some(record), Some(rect)) => {
                context.overlay_name = record.name.clone();
                Some(Overlay {
                    rect,
                    style: record.style.clone(),
                    name: record.name.clone(),
                    description: record.description.clone(),
                })
            },
            _ => {
                context.overlay_name = last_name;
                None
            }
        };

        let preview = self.export_step(params, &mut context);

        self.detector.commit(params);

        let report = self.report.generate(&context);
        self.audit_invocation(&source_id, &context);

        Ok(InvocationOutcome {
            changed,
            roi: context.roi,
            overlay,
            preview,
            export: context.export,
            stored_count,
            report,
        })
    }

    /// Open the export handle if none is cached
    fn ensure_handle(&mut self, source_id: &str) {
        if self.handle.is_some() {
            return;
        }

        match self.sources.open(source_id) {
            Ok(source) => self.handle = Some(ExportHandle::new(source)),
            Err(e) => warn!("Could not open pixel source for {}: {}", source_id, e),
        }
    }

    /// Compute the ROI for the input annotation, if the user drew one
    fn place_roi(&self, params: &PipelineParameters, roi_size: u32) -> Option<RoiRect> {
        let Some(annotation) = &params.input_annotation else {
            info!("No input annotation selected, nothing to place");
            return None;
        };

        let roi = ExtentCalculator::new(roi_size).compute(&annotation.polygons);
        if roi.is_none() {
            warn!("Input annotation '{}' has no points", annotation.id);
        }
        roi
    }

    /// Validate, extract and write; returns the extracted region
    ///
    /// Pixels are only extracted once the destination passed validation, or
    /// for the preview when no export was requested.
    fn export_step(&mut self, params: &PipelineParameters, context: &mut InvocationContext) -> Option<image::RgbImage> {
        if !context.changed {
            if params.export_requested {
                context.export = ExportStatus::Skipped;
            }
            return None;
        }

        let destination = match self.validator.validate(params.export_requested, &params.destination) {
            Ok(destination) => destination,
            Err(e) => {
                warn!("Export validation failed: {}", e);
                context.export = ExportStatus::Failed(e);
                return None;
            }
        };

        let Some(roi) = context.roi else {
            if destination.is_some() {
                debug!("No ROI placed this invocation, export skipped");
                context.export = ExportStatus::Skipped;
            }
            return None;
        };

        let region = match self.extract(&roi) {
            Ok(region) => region,
            Err(e) => {
                if let Some(destination) = destination {
                    context.export = ExportStatus::Failed(ExportError::ExportWriteFailure {
                        path: destination.path.display().to_string(),
                        reason: e,
                    });
                }
                return None;
            }
        };

        if let Some(destination) = destination {
            context.export = self.write(&region, &destination);
        }

        Some(region)
    }

    fn extract(&mut self, roi: &RoiRect) -> Result<image::RgbImage, String> {
        let Some(handle) = self.handle.as_mut() else {
            error!("No pixel source available to extract the ROI");
            return Err("no pixel source is available".to_string());
        };

        handle.extract(roi).map_err(|e| {
            error!("Failed to extract ROI: {}", e);
            e.to_string()
        })
    }

    fn write(&self, region: &image::RgbImage, destination: &ExportDestination) -> ExportStatus {
        match self.writer.write(region, destination) {
            Ok(()) => ExportStatus::Written {
                path: destination.path.clone(),
                width: region.width(),
                height: region.height(),
            },
            Err(e) => ExportStatus::Failed(e),
        }
    }

    fn audit_invocation(&self, source_id: &str, context: &InvocationContext) {
        let Some(audit) = self.audit else {
            return;
        };

        let roi = context.roi
            .map(|roi| format!("{}x{}@({},{})", roi.size, roi.size, roi.x, roi.y))
            .unwrap_or_else(|| "none".to_string());
        let line = format!("source={} changed={} roi={} overlays={} export={:?}",
                           source_id, context.changed, roi, context.overlay_count, context.export);

        if let Err(e) = audit.log(&line) {
            warn!("Failed to write audit log: {}", e);
        }
    }
}
