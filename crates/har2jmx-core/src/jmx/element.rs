//! Generic XML element tree plus the small JMeter property constructors.
//!
//! The tree is composed bottom-up with chainable builders and serialized in
//! one pass through `quick_xml::Writer`, which escapes text and attribute
//! values on the way out.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// One XML element: name, attributes, optional text, child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Adds one attribute. Attribute order is emission order.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the element text. Text is written before any children.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(value.into());
        self
    }

    /// Appends one child element (chainable).
    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Appends one child element in place.
    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First direct child with the given element name, mutable.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut XmlElement> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    pub(crate) fn write_into<W: std::io::Write>(
        &self,
        writer: &mut Writer<W>,
    ) -> Result<(), quick_xml::Error> {
        let mut start = BytesStart::new(self.name.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }
        if self.text.is_none() && self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }
        writer.write_event(Event::Start(start))?;
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

/// `<stringProp name="..">value</stringProp>`
pub fn string_prop(name: &str, value: &str) -> XmlElement {
    XmlElement::new("stringProp").attr("name", name).text(value)
}

/// `<boolProp name="..">true|false</boolProp>`
pub fn bool_prop(name: &str, value: bool) -> XmlElement {
    XmlElement::new("boolProp")
        .attr("name", name)
        .text(if value { "true" } else { "false" })
}

/// `<longProp name="..">n</longProp>`
pub fn long_prop(name: &str, value: i64) -> XmlElement {
    XmlElement::new("longProp")
        .attr("name", name)
        .text(value.to_string())
}

/// Empty `<collectionProp name=".."/>` ready to receive members.
pub fn collection_prop(name: &str) -> XmlElement {
    XmlElement::new("collectionProp").attr("name", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(element: &XmlElement) -> String {
        let mut writer = Writer::new(Vec::new());
        element.write_into(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn empty_element_self_closes() {
        assert_eq!(
            render(&collection_prop("Arguments.arguments")),
            r#"<collectionProp name="Arguments.arguments"/>"#
        );
    }

    #[test]
    fn string_prop_renders_text() {
        assert_eq!(
            render(&string_prop("HTTPSampler.method", "GET")),
            r#"<stringProp name="HTTPSampler.method">GET</stringProp>"#
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let rendered = render(&string_prop("Argument.value", "a=1&b=<2>"));
        assert!(rendered.contains("a=1&amp;b=&lt;2&gt;"));
    }

    #[test]
    fn children_nest_in_order() {
        let parent = XmlElement::new("hashTree")
            .child(string_prop("first", "1"))
            .child(bool_prop("second", false));
        let rendered = render(&parent);
        let first = rendered.find("first").unwrap();
        let second = rendered.find("second").unwrap();
        assert!(first < second);
        assert!(rendered.starts_with("<hashTree>"));
        assert!(rendered.ends_with("</hashTree>"));
    }
}
