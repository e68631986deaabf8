use std::collections::HashMap;

use serde::Serialize;

/// A node of the emitted CII tree.
///
/// Names carry their namespace prefix (`ram:ID`). Attributes keep insertion
/// order and children keep emission order, so two trees built from the same
/// input compare equal and render identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    name: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<(&'static str, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// A leaf element carrying `text`.
    pub fn with_text(name: &'static str, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(name)
        }
    }

    pub fn with_attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn push_opt(&mut self, child: Option<Element>) {
        if let Some(child) = child {
            self.children.push(child);
        }
    }

    pub fn extend(&mut self, children: impl IntoIterator<Item = Element>) {
        self.children.extend(children);
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn attributes(&self) -> &[(&'static str, String)] {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }

    /// First direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children called `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follow a `/`-separated chain of child names, taking the first match
    /// at each step.
    ///
    /// ```
    /// use facturx::facturx::Element;
    ///
    /// let mut party = Element::new("ram:SellerTradeParty");
    /// party.push(Element::with_text("ram:Name", "Lapin SARL"));
    /// assert_eq!(party.find("ram:Name").and_then(|e| e.text()), Some("Lapin SARL"));
    /// ```
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self, |node, name| node.child(name))
    }

    /// Every element path in document order, rooted at this element.
    ///
    /// Repeated siblings get a 1-based `[n]` index, single ones none.
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        let root = format!("/{}", self.name);
        self.collect_paths(&root, &mut out);
        out
    }

    fn collect_paths(&self, here: &str, out: &mut Vec<String>) {
        out.push(here.to_string());
        let mut totals: HashMap<&str, usize> = HashMap::new();
        for child in &self.children {
            *totals.entry(child.name).or_default() += 1;
        }
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for child in &self.children {
            let path = if totals[child.name] > 1 {
                let pos = seen.entry(child.name).or_default();
                *pos += 1;
                format!("{here}/{}[{pos}]", child.name)
            } else {
                format!("{here}/{}", child.name)
            };
            child.collect_paths(&path, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        let mut root = Element::new("rsm:Root");
        let mut a = Element::new("ram:A");
        a.push(Element::with_text("ram:ID", "1").with_attr("schemeID", "0088"));
        root.push(a);
        root.push(Element::with_text("ram:Note", "x"));
        root.push(Element::with_text("ram:Note", "y"));
        root
    }

    #[test]
    fn find_and_attribute() {
        let root = sample();
        let id = root.find("ram:A/ram:ID").unwrap();
        assert_eq!(id.text(), Some("1"));
        assert_eq!(id.attribute("schemeID"), Some("0088"));
        assert!(root.find("ram:A/ram:Missing").is_none());
        assert_eq!(root.children_named("ram:Note").count(), 2);
    }

    #[test]
    fn paths_index_repeated_siblings() {
        assert_eq!(
            sample().paths(),
            vec![
                "/rsm:Root",
                "/rsm:Root/ram:A",
                "/rsm:Root/ram:A/ram:ID",
                "/rsm:Root/ram:Note[1]",
                "/rsm:Root/ram:Note[2]",
            ]
        );
    }

    #[test]
    fn paths_index_interleaved_siblings() {
        let mut root = Element::new("rsm:Root");
        for i in 0..500 {
            root.push(Element::with_text("ram:Note", i.to_string()));
            root.push(Element::new("ram:Line"));
        }
        root.push(Element::new("ram:Total"));
        let paths = root.paths();
        assert_eq!(paths.len(), 1002);
        assert_eq!(paths[1], "/rsm:Root/ram:Note[1]");
        assert_eq!(paths[2], "/rsm:Root/ram:Line[1]");
        assert_eq!(paths[999], "/rsm:Root/ram:Note[500]");
        assert_eq!(paths[1000], "/rsm:Root/ram:Line[500]");
        assert_eq!(paths[1001], "/rsm:Root/ram:Total");
    }

    #[test]
    fn push_opt_skips_none() {
        let mut e = Element::new("ram:X");
        e.push_opt(None);
        assert!(e.is_empty());
        e.push_opt(Some(Element::new("ram:Y")));
        assert_eq!(e.children().len(), 1);
    }
}
