//! In-memory element tree built from quick-xml events.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::xpath::{Axis, XPath};
use crate::XmlError;

/// Handle to an element of a [`Document`].
///
/// Handles are ordered by document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementRef(usize);

#[derive(Debug)]
struct Element {
    name: String,
    children: Vec<Content>,
}

#[derive(Debug)]
enum Content {
    Element(ElementRef),
    Text(String),
}

/// A parsed, well-formed XML document keeping element names and text only.
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
    root: ElementRef,
}

impl Document {
    /// Parse `xml` into an element tree.
    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut elements: Vec<Element> = Vec::new();
        let mut open: Vec<usize> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let index = push_element(&e, &mut elements, &open, &mut root)?;
                    open.push(index);
                }
                Ok(Event::Empty(e)) => {
                    push_element(&e, &mut elements, &open, &mut root)?;
                }
                Ok(Event::End(_)) => {
                    if open.pop().is_none() {
                        return Err(XmlError::Malformed("end tag without start tag".into()));
                    }
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(|err| XmlError::Xml(err.to_string()))?;
                    push_text(text.into_owned(), &mut elements, &open)?;
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    push_text(text, &mut elements, &open)?;
                }
                Ok(Event::Eof) => break,
                Err(err) => return Err(XmlError::Xml(err.to_string())),
                _ => {}
            }
            buf.clear();
        }

        if let Some(&index) = open.last() {
            return Err(XmlError::Malformed(format!(
                "unclosed element <{}>",
                elements[index].name
            )));
        }
        let root = root.ok_or_else(|| XmlError::Malformed("missing root element".into()))?;
        Ok(Document { elements, root })
    }

    /// The document element.
    pub fn root(&self) -> ElementRef {
        self.root
    }

    /// Qualified tag name of `element`.
    pub fn name(&self, element: ElementRef) -> &str {
        &self.elements[element.0].name
    }

    /// XPath string value: all descendant text concatenated in document order.
    pub fn string_value(&self, element: ElementRef) -> String {
        let mut out = String::new();
        self.collect_text(element, &mut out);
        out
    }

    /// Elements selected by `path`, in document order without duplicates.
    pub fn select(&self, path: &XPath) -> Vec<ElementRef> {
        let mut steps = path.steps().iter();
        let Some(first) = steps.next() else {
            return Vec::new();
        };

        // The context of the first step is the document node, whose only
        // child is the root element.
        let mut current = match first.axis {
            Axis::Child => vec![self.root],
            Axis::Descendant => {
                let mut all = vec![self.root];
                self.collect_descendants(self.root, &mut all);
                all
            }
        };
        current.retain(|&element| first.test.matches(self.name(element)));

        for step in steps {
            let mut next = Vec::new();
            for &element in &current {
                match step.axis {
                    Axis::Child => next.extend(self.child_elements(element)),
                    Axis::Descendant => self.collect_descendants(element, &mut next),
                }
            }
            next.retain(|&element| step.test.matches(self.name(element)));
            next.sort_unstable();
            next.dedup();
            current = next;
            if current.is_empty() {
                break;
            }
        }
        current
    }

    fn child_elements(&self, element: ElementRef) -> impl Iterator<Item = ElementRef> + '_ {
        self.elements[element.0]
            .children
            .iter()
            .filter_map(|child| match child {
                Content::Element(child) => Some(*child),
                Content::Text(_) => None,
            })
    }

    // Both walks keep an explicit stack; nesting depth is unbounded.
    fn collect_descendants(&self, element: ElementRef, out: &mut Vec<ElementRef>) {
        let mut pending: Vec<ElementRef> = self.child_elements(element).collect();
        pending.reverse();
        while let Some(next) = pending.pop() {
            out.push(next);
            let start = pending.len();
            pending.extend(self.child_elements(next));
            pending[start..].reverse();
        }
    }

    fn collect_text(&self, element: ElementRef, out: &mut String) {
        let mut pending: Vec<&Content> = self.elements[element.0].children.iter().rev().collect();
        while let Some(content) = pending.pop() {
            match content {
                Content::Text(text) => out.push_str(text),
                Content::Element(child) => {
                    pending.extend(self.elements[child.0].children.iter().rev());
                }
            }
        }
    }
}

fn push_element(
    event: &BytesStart<'_>,
    elements: &mut Vec<Element>,
    open: &[usize],
    root: &mut Option<ElementRef>,
) -> Result<usize, XmlError> {
    let index = elements.len();
    let handle = ElementRef(index);
    match open.last() {
        Some(&parent) => elements[parent].children.push(Content::Element(handle)),
        None if root.is_some() => {
            return Err(XmlError::Malformed("multiple root elements".into()));
        }
        None => *root = Some(handle),
    }
    elements.push(Element {
        name: String::from_utf8_lossy(event.name().as_ref()).to_string(),
        children: Vec::new(),
    });
    Ok(index)
}

fn push_text(text: String, elements: &mut [Element], open: &[usize]) -> Result<(), XmlError> {
    match open.last() {
        Some(&parent) => {
            elements[parent].children.push(Content::Text(text));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlError::Malformed("text outside the root element".into())),
    }
}
