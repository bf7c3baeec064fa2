//! Implements DataLoader for XML documents.
//!
//! Layout matches what .NET `XmlSerializer` writes:
//! `<Meeting><Date/>..<ParticipantFiles><string>u1.xml</string></ParticipantFiles></Meeting>`.
//! The document is read into a small element tree with `quick_xml::Reader`; text is
//! kept exactly as written (only entities are unescaped).

use crate::adapters::loaders::read_document;
use crate::domain::{DomainError, LoadError, Meeting, User};
use crate::ports::DataLoader;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;
use tracing::{debug, info};

fn xml_err(e: impl std::fmt::Display) -> LoadError {
    LoadError::Xml(e.to_string())
}

/// One element: local name, attributes, direct text and child elements.
#[derive(Debug, Default)]
struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    fn open(start: &BytesStart<'_>) -> Result<Self, LoadError> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(xml_err)?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value().map_err(xml_err)?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            attributes,
            ..Self::default()
        })
    }

    fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Value of a field given either as a child element or as an attribute.
    /// Child elements win; the last occurrence counts.
    fn field(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .rev()
            .find(|c| c.is(name))
            .map(|c| c.text.as_str())
            .or_else(|| {
                self.attributes
                    .iter()
                    .rev()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v.as_str())
            })
    }

    fn string_field(&self, name: &str) -> String {
        self.field(name).map(str::to_string).unwrap_or_default()
    }
}

/// Attach a finished element to its parent, or return it when it is the root.
fn close(stack: &mut Vec<XmlElement>, element: XmlElement) -> Option<XmlElement> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            None
        }
        None => Some(element),
    }
}

/// Only whitespace, comments and processing instructions may follow the root.
fn expect_epilog(reader: &mut Reader<&[u8]>) -> Result<(), LoadError> {
    loop {
        match reader.read_event().map_err(xml_err)? {
            Event::Eof => return Ok(()),
            Event::Text(t) if t.iter().all(|b| b.is_ascii_whitespace()) => {}
            Event::Comment(_) | Event::PI(_) => {}
            _ => return Err(xml_err("content after root element")),
        }
    }
}

fn parse_document(text: &str) -> Result<XmlElement, LoadError> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<XmlElement> = Vec::new();
    loop {
        let root = match reader.read_event().map_err(xml_err)? {
            Event::Start(e) => {
                stack.push(XmlElement::open(&e)?);
                None
            }
            Event::Empty(e) => {
                let element = XmlElement::open(&e)?;
                close(&mut stack, element)
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| xml_err("unexpected closing tag"))?;
                close(&mut stack, element)
            }
            Event::Text(t) => {
                match stack.last_mut() {
                    Some(element) => element.text.push_str(&t.unescape().map_err(xml_err)?),
                    None if t.iter().all(|b| b.is_ascii_whitespace()) => {}
                    None => return Err(xml_err("text content outside root element")),
                }
                None
            }
            Event::CData(c) => {
                match stack.last_mut() {
                    Some(element) => element.text.push_str(&String::from_utf8_lossy(&c)),
                    None => return Err(xml_err("CDATA outside root element")),
                }
                None
            }
            Event::Eof if stack.is_empty() => {
                return Err(xml_err("document has no root element"));
            }
            Event::Eof => return Err(xml_err("unexpected end of document")),
            _ => None,
        };
        if let Some(root) = root {
            expect_epilog(&mut reader)?;
            return Ok(root);
        }
    }
}

/// XML file loader.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlDataLoader;

impl XmlDataLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse the document and check that its root element is `root`.
    fn parse(text: &str, root: &'static str) -> Result<XmlElement, LoadError> {
        let element = parse_document(text)?;
        if !element.is(root) {
            return Err(LoadError::RootMismatch {
                expected: root,
                found: format!("<{}>", element.name),
            });
        }
        Ok(element)
    }

    fn load<T>(
        path: &Path,
        root: &'static str,
        map: impl FnOnce(XmlElement) -> Result<T, LoadError>,
    ) -> Result<T, DomainError> {
        debug!(path = %path.display(), root, "reading XML document");
        read_document(path)
            .and_then(|text| Self::parse(&text, root))
            .and_then(map)
            .map_err(|e| DomainError::load(path, e))
    }
}

fn to_meeting(root: XmlElement) -> Result<Meeting, LoadError> {
    // Every child of the wrapper holds one path, whatever its name.
    let participant_files = root
        .children
        .iter()
        .rev()
        .find(|c| c.is("ParticipantFiles"))
        .map(|w| w.children.iter().map(|c| c.text.clone()).collect())
        .unwrap_or_default();
    Ok(Meeting {
        date: root.string_field("Date"),
        description: root.string_field("Description"),
        url: root.string_field("URL"),
        participant_files,
    })
}

fn to_user(root: XmlElement) -> Result<User, LoadError> {
    let id = match root.field("ID").map(str::trim) {
        None | Some("") => 0,
        Some(raw) => raw
            .parse()
            .map_err(|e| LoadError::Xml(format!("invalid ID '{}': {}", raw, e)))?,
    };
    Ok(User {
        id,
        name: root.string_field("Name"),
        avatar: root.string_field("Avatar"),
    })
}

impl DataLoader for XmlDataLoader {
    fn load_meeting(&self, path: &Path) -> Result<Meeting, DomainError> {
        let meeting = Self::load(path, "Meeting", to_meeting)?;
        info!(
            path = %path.display(),
            participants = meeting.participant_files.len(),
            "loaded meeting (XML)"
        );
        Ok(meeting)
    }

    fn load_user(&self, path: &Path) -> Result<User, DomainError> {
        let user = Self::load(path, "User", to_user)?;
        info!(path = %path.display(), id = user.id, "loaded user (XML)");
        Ok(user)
    }
}
