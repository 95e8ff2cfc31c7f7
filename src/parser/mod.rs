//! Component 1 – loading the inputs.
//!
//! `.tmx` files are read into a small owned element tree; nothing here knows
//! what a Tiled map is supposed to contain, the processor decides that.
pub mod registry;

use anyhow::{Context, Result, anyhow};
use log::debug;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// One XML element with everything the encoders look at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Raw character data directly inside this element, untrimmed.
    /// Whitespace-only text of an element with children is dropped.
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    fn from_start(start: &BytesStart) -> Result<Self> {
        let mut el = Element::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            el.attributes.push((key, value));
        }
        Ok(el)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`Element::attr`] but a missing attribute is an error.
    pub fn require_attr(&self, name: &str) -> Result<&str> {
        self.attr(name)
            .ok_or_else(|| anyhow!("<{}> missing `{}` attribute", self.tag, name))
    }

    /// First direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    pub fn first_child(&self) -> Option<&Element> {
        self.children.first()
    }
}

/// Read and parse one map file, returning its root element.
pub fn load_map(path: &Path) -> Result<Element> {
    let xml = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    debug!("{}: {} bytes", path.display(), xml.len());
    parse_document(&xml).with_context(|| format!("Parsing XML in {}", path.display()))
}

/// Parse an XML document held in memory into an element tree.
pub fn parse_document(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);

    // open elements, innermost last
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Element::from_start(&start)?),
            Event::Empty(start) => {
                let el = Element::from_start(&start)?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                let mut el = stack
                    .pop()
                    .ok_or_else(|| anyhow!("closing tag without an opening tag"))?;
                // indentation between child elements is not content
                if !el.children.is_empty() && el.text.trim().is_empty() {
                    el.text.clear();
                }
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(top) = stack.last_mut() {
                    let bytes = data.into_inner();
                    top.text.push_str(&String::from_utf8_lossy(&bytes));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(anyhow!("document ended inside <{}>", open.tag));
    }
    root.ok_or_else(|| anyhow!("document has no root element"))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, el: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None if root.is_none() => *root = Some(el),
        None => return Err(anyhow!("more than one root element (<{}>)", el.tag)),
    }
    Ok(())
}
