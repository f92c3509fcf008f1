//! Session file backed annotation store
//!
//! The viewer keeps the overlays of an image in an XML session file stored
//! next to the image. This store reads and rewrites that file. Writes go to a
//! temporary file in the same directory which then replaces the session, so
//! an interrupted persist never leaves a truncated session behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tempfile::NamedTempFile;

use crate::errors::{BoxDropError, BoxDropResult};
use crate::geometry::Point;
use super::record::{AnnotationRecord, GeometryKind, GraphicStyle};
use super::store::AnnotationStore;

/// Annotation store persisted as a viewer session file
#[derive(Debug)]
pub struct SessionFileStore {
    /// Path of the image the session describes
    image_path: String,
    /// Path of the session XML file
    session_path: PathBuf,
    /// Sequence as last read from disk
    loaded: Vec<AnnotationRecord>,
    /// Sequence waiting for `persist`
    staged: Option<Vec<AnnotationRecord>>,
}

impl SessionFileStore {
    /// Create a store for the session file that sits next to `image_path`
    ///
    /// # Arguments
    /// * `image_path` - Path of the image, also the store's source identifier
    /// * `suffix` - Suffix appended to the image path to name the session file
    pub fn for_image(image_path: &str, suffix: &str) -> Self {
        let session_path = PathBuf::from(format!("{}{}", image_path, suffix));
        Self::with_session_path(image_path, session_path)
    }

    /// Create a store for an explicitly located session file
    pub fn with_session_path(image_path: &str, session_path: impl Into<PathBuf>) -> Self {
        SessionFileStore {
            image_path: image_path.to_string(),
            session_path: session_path.into(),
            loaded: Vec::new(),
            staged: None,
        }
    }

    /// Location of the session file
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    /// Parse the annotation sequence out of session XML
    pub fn parse(xml: &str) -> BoxDropResult<Vec<AnnotationRecord>> {
        let mut reader = Reader::from_str(xml);
        let mut records = Vec::new();
        let mut current: Option<AnnotationRecord> = None;
        let mut polygon: Option<Vec<Point>> = None;
        let mut in_description = false;

        loop {
            match reader.read_event()? {
                Event::Start(element) => match element.name().as_ref() {
                    b"graphic" => current = Some(parse_graphic(&element)?),
                    b"polygon" => polygon = Some(Vec::new()),
                    b"description" => in_description = true,
                    _ => {}
                },
                Event::Empty(element) => match element.name().as_ref() {
                    b"graphic" => records.push(parse_graphic(&element)?),
                    b"point" => {
                        let point = parse_point(&element)?;
                        match polygon.as_mut() {
                            Some(points) => points.push(point),
                            None => return Err(BoxDropError::SessionFormat(
                                "<point> outside of a <polygon>".to_string())),
                        }
                    },
                    b"polygon" => {
                        if let Some(record) = current.as_mut() {
                            record.points.push(Vec::new());
                        }
                    },
                    _ => {}
                },
                Event::Text(text) if in_description => {
                    if let Some(record) = current.as_mut() {
                        record.description.push_str(&text.unescape()?);
                    }
                },
                Event::End(element) => match element.name().as_ref() {
                    b"description" => in_description = false,
                    b"polygon" => {
                        if let (Some(record), Some(points)) = (current.as_mut(), polygon.take()) {
                            record.points.push(points);
                        }
                    },
                    b"graphic" => {
                        if let Some(record) = current.take() {
                            records.push(record);
                        }
                    },
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        if current.is_some() {
            return Err(BoxDropError::SessionFormat("unterminated <graphic> element".to_string()));
        }

        Ok(records)
    }

    /// Serialize an annotation sequence as session XML
    pub fn serialize(image_path: &str, records: &[AnnotationRecord]) -> BoxDropResult<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut session = BytesStart::new("session");
        session.push_attribute(("image", image_path));
        writer.write_event(Event::Start(session))?;
        writer.write_event(Event::Start(BytesStart::new("graphics")))?;

        for record in records {
            let mut graphic = BytesStart::new("graphic");
            graphic.push_attribute(("name", record.name.as_str()));
            graphic.push_attribute(("geometry", record.geometry.name()));
            graphic.push_attribute(("style", record.style.as_str()));
            writer.write_event(Event::Start(graphic))?;

            // An empty element keeps indentation whitespace out of placeholder descriptions
            if record.description.is_empty() {
                writer.write_event(Event::Empty(BytesStart::new("description")))?;
            } else {
                writer.write_event(Event::Start(BytesStart::new("description")))?;
                writer.write_event(Event::Text(BytesText::new(&record.description)))?;
                writer.write_event(Event::End(BytesEnd::new("description")))?;
            }

            for polygon in &record.points {
                writer.write_event(Event::Start(BytesStart::new("polygon")))?;
                for point in polygon {
                    let x = point.x.to_string();
                    let y = point.y.to_string();
                    let mut vertex = BytesStart::new("point");
                    vertex.push_attribute(("x", x.as_str()));
                    vertex.push_attribute(("y", y.as_str()));
                    writer.write_event(Event::Empty(vertex))?;
                }
                writer.write_event(Event::End(BytesEnd::new("polygon")))?;
            }

            writer.write_event(Event::End(BytesEnd::new("graphic")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("graphics")))?;
        writer.write_event(Event::End(BytesEnd::new("session")))?;

        String::from_utf8(writer.into_inner())
            .map_err(|e| BoxDropError::SessionFormat(format!("session is not valid UTF-8: {}", e)))
    }

    /// Replace the session file with `contents`
    fn write_atomically(&self, contents: &str) -> BoxDropResult<()> {
        let directory = match self.session_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(directory)?;
        temp.write_all(contents.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.session_path)
            .map_err(|e| BoxDropError::IoError(e.error))?;

        Ok(())
    }
}

impl AnnotationStore for SessionFileStore {
    fn source_id(&self) -> &str {
        &self.image_path
    }

    fn load(&mut self) -> BoxDropResult<Vec<AnnotationRecord>> {
        self.staged = None;

        if !self.session_path.exists() {
            info!("No session file at {}, starting with no annotations", self.session_path.display());
            self.loaded = Vec::new();
            return Ok(Vec::new());
        }

        let xml = fs::read_to_string(&self.session_path)?;
        self.loaded = Self::parse(&xml)?;
        debug!("Loaded {} annotations from {}", self.loaded.len(), self.session_path.display());

        Ok(self.loaded.clone())
    }

    fn replace(&mut self, records: Vec<AnnotationRecord>) {
        self.staged = Some(records);
    }

    fn persist(&mut self) -> BoxDropResult<()> {
        if let Some(records) = self.staged.take() {
            self.loaded = records;
        }

        let xml = Self::serialize(&self.image_path, &self.loaded)?;
        self.write_atomically(&xml)?;
        info!("Saved {} annotations to {}", self.loaded.len(), self.session_path.display());

        Ok(())
    }
}

/// Build a record from the attributes of a `<graphic>` element
fn parse_graphic(element: &BytesStart) -> BoxDropResult<AnnotationRecord> {
    let name = attribute(element, "name")?.unwrap_or_default();
    let style = GraphicStyle(attribute(element, "style")?.unwrap_or_default());
    let geometry = attribute(element, "geometry")?
        .map(|kind| GeometryKind::from_name(&kind))
        .unwrap_or(GeometryKind::Polygon);

    Ok(AnnotationRecord::new(&name, style, geometry, Vec::new()))
}

/// Read the coordinates of a `<point>` element
fn parse_point(element: &BytesStart) -> BoxDropResult<Point> {
    let coordinate = |key: &str| -> BoxDropResult<f64> {
        let value = attribute(element, key)?
            .ok_or_else(|| BoxDropError::SessionFormat(format!("<point> without '{}'", key)))?;
        value.trim().parse::<f64>()
            .map_err(|_| BoxDropError::SessionFormat(format!("invalid {} coordinate '{}'", key, value)))
    };

    Ok(Point::new(coordinate("x")?, coordinate("y")?))
}

/// Look up and unescape an attribute value
fn attribute(element: &BytesStart, key: &str) -> BoxDropResult<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| BoxDropError::SessionFormat(e.to_string()))?;
        if attr.key.as_ref() == key.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
