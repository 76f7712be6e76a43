//! The JMX document: fixed test-plan skeleton plus one appended sampler
//! subtree per converted HAR entry.

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, Event};
use quick_xml::Writer;
use std::path::Path;

use crate::error::ConvertError;

use super::element::{bool_prop, collection_prop, string_prop, XmlElement};

/// Version attributes JMeter expects on the `jmeterTestPlan` root.
const TEST_PLAN_VERSION: &str = "1.2";
const PROPERTIES_VERSION: &str = "2.9";
const JMETER_VERSION: &str = "3.1 r1770033";

/// In-memory JMX test plan. Owned by a single conversion run: build the
/// skeleton once, append samplers in entry order, persist at the end.
#[derive(Debug)]
pub struct JmxDocument {
    root: XmlElement,
    samplers: usize,
}

impl JmxDocument {
    /// Builds the fixed skeleton: root element, top-level `hashTree`
    /// container, `TestPlan` settings, and the empty placeholder `hashTree`.
    /// The skeleton is never touched again; samplers only gain siblings.
    pub fn new() -> Self {
        let settings = XmlElement::new("TestPlan")
            .attr("guiclass", "TestPlanGui")
            .attr("testclass", "TestPlan")
            .attr("testname", "Test Plan")
            .attr("enabled", "true")
            .child(string_prop("TestPlan.comments", ""))
            .child(bool_prop("TestPlan.functional_mode", false))
            .child(bool_prop("TestPlan.serialize_threadgroups", false))
            .child(
                XmlElement::new("elementProp")
                    .attr("name", "TestPlan.user_defined_variables")
                    .attr("elementType", "Arguments")
                    .attr("guiclass", "ArgumentsPanel")
                    .attr("testclass", "Arguments")
                    .attr("testname", "User Defined Variables")
                    .attr("enabled", "true")
                    .child(collection_prop("Arguments.arguments")),
            )
            .child(string_prop("TestPlan.user_define_classpath", ""));

        let container = XmlElement::new("hashTree")
            .child(settings)
            .child(XmlElement::new("hashTree"));

        let root = XmlElement::new("jmeterTestPlan")
            .attr("version", TEST_PLAN_VERSION)
            .attr("properties", PROPERTIES_VERSION)
            .attr("jmeter", JMETER_VERSION)
            .child(container);

        JmxDocument { root, samplers: 0 }
    }

    /// Appends one sampler subtree, wrapped in its own `hashTree`, as a new
    /// sibling under the top-level container. Entry order is append order.
    pub fn append_sampler(&mut self, sampler: XmlElement) {
        if let Some(container) = self.root.child_mut("hashTree") {
            container.push(XmlElement::new("hashTree").child(sampler));
            self.samplers += 1;
        }
    }

    /// Number of sampler subtrees appended so far.
    pub fn sampler_count(&self) -> usize {
        self.samplers
    }

    /// Renders the document as indented XML with a UTF-8 declaration.
    pub fn to_xml(&self) -> Result<String, ConvertError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.root.write_into(&mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    /// Persists the rendered document to `path`. I/O errors propagate with
    /// context; there are no retries and no partial writes on render failure.
    pub fn save(&self, path: &Path) -> Result<()> {
        let xml = self.to_xml()?;
        std::fs::write(path, xml)
            .with_context(|| format!("write JMX file: {}", path.display()))?;
        Ok(())
    }
}

impl Default for JmxDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_has_root_attributes() {
        let xml = JmxDocument::new().to_xml().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml
            .contains(r#"<jmeterTestPlan version="1.2" properties="2.9" jmeter="3.1 r1770033">"#));
        assert!(xml.contains(r#"testname="Test Plan""#));
    }

    #[test]
    fn skeleton_is_stable_across_appends() {
        let empty = JmxDocument::new().to_xml().unwrap();

        let mut doc = JmxDocument::new();
        doc.append_sampler(XmlElement::new("HTTPSamplerProxy").attr("testname", "x"));
        let with_sampler = doc.to_xml().unwrap();

        // The settings subtree must be byte-identical regardless of entries.
        let settings_start = empty.find("<TestPlan").unwrap();
        let settings_end = empty.find("</TestPlan>").unwrap();
        let settings = &empty[settings_start..settings_end];
        assert!(with_sampler.contains(settings));
    }

    #[test]
    fn append_wraps_each_sampler_in_its_own_hash_tree() {
        let mut doc = JmxDocument::new();
        doc.append_sampler(XmlElement::new("HTTPSamplerProxy").attr("testname", "a"));
        doc.append_sampler(XmlElement::new("HTTPSamplerProxy").attr("testname", "b"));
        assert_eq!(doc.sampler_count(), 2);

        let xml = doc.to_xml().unwrap();
        let a = xml.find(r#"testname="a""#).unwrap();
        let b = xml.find(r#"testname="b""#).unwrap();
        assert!(a < b, "samplers must keep append order");
    }
}
