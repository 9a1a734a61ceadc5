//! XML schema loader.
//!
//! The XML encoding is a namespaced document:
//!
//! ```xml
//! <repository-structure xmlns="https://repo-structure.dev/schemas/repository-structure">
//!   <metadata>...</metadata>
//!   <structure>
//!     <root-files><file>...</file></root-files>
//!     <directories><directory>...</directory></directories>
//!   </structure>
//! </repository-structure>
//! ```
//!
//! The document is read into a lightweight element tree first, then
//! converted by qualified-name lookups. Only elements bound to the schema
//! namespace participate in lookups; foreign elements are carried but
//! ignored. Optional descriptive children are copied only when present, so
//! a missing `<description>` stays unset while an empty one is the empty
//! string.

use crate::error::ParseError;
use crate::model::{DirectorySpec, FileSpec, Metadata, StructureTree};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use rsv_common::RequirementStatus;

/// Namespace every schema element must be bound to.
pub const SCHEMA_NAMESPACE: &str = "https://repo-structure.dev/schemas/repository-structure";

/// Parse an XML schema document into the canonical tree.
pub fn parse_str(text: &str) -> Result<StructureTree, ParseError> {
    let root = parse_element_tree(text)?;
    if !root.in_ns {
        return Err(ParseError::WrongNamespace(SCHEMA_NAMESPACE.to_string()));
    }

    let mut tree = StructureTree::default();

    if let Some(metadata) = root.find("metadata") {
        tree.metadata = Some(Metadata {
            name: metadata.text_of("name"),
            description: metadata.text_of("description"),
            repository_type: metadata.text_of("repository-type"),
            platform: metadata.text_of("platform"),
        });
    }

    if let Some(structure) = root.find("structure") {
        if let Some(root_files) = structure.find("root-files") {
            for file in root_files.find_all("file") {
                tree.root_files.push(file_spec(file)?);
            }
        }
        if let Some(directories) = structure.find("directories") {
            for directory in directories.find_all("directory") {
                tree.directories.push(directory_spec(directory)?);
            }
        }
    }

    Ok(tree)
}

fn file_spec(elem: &Element) -> Result<FileSpec, ParseError> {
    let name = elem
        .text_of("name")
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ParseError::MissingElement("file/name".to_string()))?;

    Ok(FileSpec {
        name,
        requirement_status: status_of(elem)?,
        description: elem.text_of("description"),
        audience: elem.text_of("audience"),
        template: elem.text_of("template"),
        extension: elem.attribute("extension").map(str::to_string),
    })
}

fn directory_spec(elem: &Element) -> Result<DirectorySpec, ParseError> {
    let name = elem
        .text_of("name")
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ParseError::MissingElement("directory/name".to_string()))?;

    let mut spec = DirectorySpec {
        name,
        path: elem.attribute("path").map(str::to_string),
        requirement_status: status_of(elem)?,
        description: elem.text_of("description"),
        purpose: elem.text_of("purpose"),
        files: Vec::new(),
        subdirectories: Vec::new(),
    };

    if let Some(files) = elem.find("files") {
        for file in files.find_all("file") {
            spec.files.push(file_spec(file)?);
        }
    }

    if let Some(subdirectories) = elem.find("subdirectories") {
        for subdirectory in subdirectories.find_all("directory") {
            spec.subdirectories.push(directory_spec(subdirectory)?);
        }
    }

    Ok(spec)
}

fn status_of(elem: &Element) -> Result<RequirementStatus, ParseError> {
    match elem.text_of("requirement-status") {
        None => Ok(RequirementStatus::default()),
        Some(raw) => Ok(raw.parse()?),
    }
}

// ============================================================================
// Element tree
// ============================================================================

/// One parsed element: local name, namespace membership, attributes,
/// children in document order, and accumulated character data.
#[derive(Debug)]
struct Element {
    name: String,
    in_ns: bool,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// First child with the given local name inside the schema namespace.
    fn find(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|child| child.in_ns && child.name == name)
    }

    /// All children with the given local name inside the schema namespace.
    fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter(move |child| child.in_ns && child.name == name)
    }

    /// Trimmed text of a named child, or `None` when the child is absent.
    fn text_of(&self, name: &str) -> Option<String> {
        self.find(name).map(|child| child.text.trim().to_string())
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Read the whole document into an element tree rooted at its root element.
fn parse_element_tree(text: &str) -> Result<Element, ParseError> {
    let mut reader = NsReader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let (resolve, event) = reader
            .read_resolved_event()
            .map_err(|err| ParseError::Xml(err.to_string()))?;

        match event {
            Event::Start(start) => {
                let element = open_element(&resolve, &start)?;
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = open_element(&resolve, &start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ParseError::Xml("unexpected closing tag".to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Text(data) => {
                if let Some(open) = stack.last_mut() {
                    let unescaped = data
                        .unescape()
                        .map_err(|err| ParseError::Xml(err.to_string()))?;
                    open.text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(open) = stack.last_mut() {
                    open.text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => return Err(ParseError::UnexpectedEof),
            // Declaration, comments, processing instructions, doctype.
            _ => {}
        }
    }
}

fn open_element(resolve: &ResolveResult, start: &BytesStart) -> Result<Element, ParseError> {
    let name = String::from_utf8_lossy(start.name().local_name().into_inner()).into_owned();
    let in_ns = matches!(
        resolve,
        ResolveResult::Bound(Namespace(uri)) if *uri == SCHEMA_NAMESPACE.as_bytes()
    );

    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|err| ParseError::Xml(err.to_string()))?;
        // Namespace declarations are reader bookkeeping, not data.
        if attribute.key.into_inner().starts_with(b"xmlns") {
            continue;
        }
        let key = String::from_utf8_lossy(attribute.key.local_name().into_inner()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|err| ParseError::Xml(err.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        in_ns,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}
