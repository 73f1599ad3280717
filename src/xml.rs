//! Minimal mutable XML element tree.
//!
//! Job definitions are built up in place: a translator finds or creates the
//! section it needs under the job node and appends its subtree next to
//! whatever siblings are already there. Rendering goes through quick-xml so
//! text escaping is handled uniformly.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// A single element in the job document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// Create an element with no text and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Direct children, in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First direct child with the given tag name.
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Mutable variant of [`find_child`](Self::find_child).
    pub fn find_child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Append a child after any existing siblings and return it.
    pub fn append_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        // non-empty after the push
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// First direct child with the given tag name, created and appended
    /// when absent.
    pub fn child_or_create(&mut self, name: &str) -> &mut Element {
        match self.children.iter().position(|c| c.name == name) {
            Some(idx) => &mut self.children[idx],
            None => self.append_child(Element::new(name)),
        }
    }

    /// Append a child with the given tag name and text content.
    pub fn append_text_child(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let mut child = Element::new(name);
        child.set_text(text);
        self.children.push(child);
    }

    /// Render the subtree rooted at this element as an XML string.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_into(&mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    fn write_into(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        if self.text.is_none() && self.children.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new(self.name.as_str())))?;
            return Ok(());
        }
        writer.write_event(Event::Start(BytesStart::new(self.name.as_str())))?;
        if let Some(text) = &self.text {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write_into(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_and_create() {
        let mut root = Element::new("project");
        assert!(root.find_child("properties").is_none());

        root.child_or_create("properties");
        assert!(root.find_child("properties").is_some());

        // a second call reuses the existing child
        root.child_or_create("properties");
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_append_keeps_siblings() {
        let mut root = Element::new("publishers");
        root.append_child(Element::new("mailer"));
        root.append_child(Element::new("notifier"));

        let names: Vec<_> = root.children().iter().map(|c| c.name().to_owned()).collect();
        assert_eq!(names, ["mailer", "notifier"]);
    }

    #[test]
    fn test_render_escapes_text() {
        let mut root = Element::new("room");
        root.set_text("dev <&> ops");
        assert_eq!(
            root.to_xml_string().unwrap(),
            "<room>dev &lt;&amp;&gt; ops</room>"
        );
    }

    #[test]
    fn test_render_nested() {
        let mut root = Element::new("project");
        let props = root.child_or_create("properties");
        props.append_text_child("room", "dev");

        assert_eq!(
            root.to_xml_string().unwrap(),
            "<project><properties><room>dev</room></properties></project>"
        );
    }

    #[test]
    fn test_render_empty_element() {
        let root = Element::new("publishers");
        assert_eq!(root.to_xml_string().unwrap(), "<publishers/>");
    }
}
