//! Text rendering of an assembled [`Element`] tree.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use super::cii_ns;
use super::element::Element;
use crate::core::FacturXError;

/// Rendering knobs. The default is a UTF-8 declaration and two-space indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level, `None` for compact output.
    pub indent: Option<usize>,
    /// Write `<?xml version="1.0" encoding="UTF-8"?>` first.
    pub declaration: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

fn xml_io(e: std::io::Error) -> FacturXError {
    FacturXError::Xml(format!("write error: {e}"))
}

struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    fn new(options: &RenderOptions) -> Result<Self, FacturXError> {
        let buffer = Cursor::new(Vec::new());
        let mut writer = match options.indent {
            Some(n) => Writer::new_with_indent(buffer, b' ', n),
            None => Writer::new(buffer),
        };
        if options.declaration {
            writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                .map_err(xml_io)?;
        }
        Ok(Self { writer })
    }

    fn element(&mut self, el: &Element, namespaces: bool) -> Result<(), FacturXError> {
        let mut start = BytesStart::new(el.name());
        if namespaces {
            start.push_attribute(("xmlns:rsm", cii_ns::RSM));
            start.push_attribute(("xmlns:qdt", cii_ns::QDT));
            start.push_attribute(("xmlns:ram", cii_ns::RAM));
            start.push_attribute(("xmlns:udt", cii_ns::UDT));
        }
        for (key, value) in el.attributes() {
            start.push_attribute((*key, value.as_str()));
        }

        if el.is_empty() {
            return self.writer.write_event(Event::Empty(start)).map_err(xml_io);
        }

        self.writer.write_event(Event::Start(start)).map_err(xml_io)?;
        if let Some(text) = el.text() {
            self.writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml_io)?;
        }
        for child in el.children() {
            self.element(child, false)?;
        }
        self.writer
            .write_event(Event::End(BytesEnd::new(el.name())))
            .map_err(xml_io)
    }

    fn into_string(self) -> Result<String, FacturXError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| FacturXError::Xml(format!("UTF-8 error: {e}")))
    }
}

/// Render with [`RenderOptions::default`].
pub fn to_xml_string(tree: &Element) -> Result<String, FacturXError> {
    to_xml_string_with(tree, &RenderOptions::default())
}

/// Render `tree` as an XML document. The root element receives the CII
/// namespace declarations.
pub fn to_xml_string_with(tree: &Element, options: &RenderOptions) -> Result<String, FacturXError> {
    let mut w = XmlWriter::new(options)?;
    w.element(tree, true)?;
    w.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Element {
        let mut root = Element::new("rsm:CrossIndustryInvoice");
        let mut doc = Element::new("rsm:ExchangedDocument");
        doc.push(Element::with_text("ram:ID", "A&B <1>"));
        root.push(doc);
        root.push(Element::new("ram:ApplicableHeaderTradeDelivery"));
        root
    }

    #[test]
    fn renders_namespaces_and_escapes() {
        let xml = to_xml_string(&tree()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(&format!("xmlns:rsm=\"{}\"", cii_ns::RSM)));
        assert!(xml.contains("<ram:ID>A&amp;B &lt;1&gt;</ram:ID>"));
        assert!(xml.contains("<ram:ApplicableHeaderTradeDelivery/>"));
    }

    #[test]
    fn compact_without_declaration() {
        let options = RenderOptions {
            indent: None,
            declaration: false,
        };
        let xml = to_xml_string_with(&tree(), &options).unwrap();
        assert!(xml.starts_with("<rsm:CrossIndustryInvoice "));
        assert!(!xml.contains('\n'));
        assert!(xml.ends_with("</rsm:CrossIndustryInvoice>"));
    }
}
