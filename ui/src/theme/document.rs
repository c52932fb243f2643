use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// The mutable presentation surface of a page: the root element's style
/// properties, class list and attributes, plus named `<meta>` values.
pub trait DocumentSurface {
    fn set_property(&mut self, name: &str, value: &str);
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn set_attribute(&mut self, name: &str, value: &str);
    /// Create the `<meta name=..>` entry if it does not exist, then set its content.
    fn set_meta(&mut self, name: &str, content: &str);
}

/// In-memory document root that can be rendered as markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    // Insertion order is kept so the rendered `:root` block reads like the palette.
    properties: Vec<(String, String)>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    meta: BTreeMap<String, String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta.get(name).map(String::as_str)
    }

    /// The custom properties as a `:root { ... }` block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }

    /// Opening `<html>` tag carrying the class list and attributes.
    pub fn html_open_tag(&self) -> String {
        let mut tag = String::from("<html");
        if !self.classes.is_empty() {
            let classes: Vec<&str> = self.classes().collect();
            let _ = write!(tag, " class=\"{}\"", classes.join(" "));
        }
        for (name, value) in &self.attributes {
            let _ = write!(tag, " {name}=\"{value}\"");
        }
        tag.push('>');
        tag
    }

    pub fn meta_tags(&self) -> Vec<String> {
        self.meta
            .iter()
            .map(|(name, content)| format!("<meta name=\"{name}\" content=\"{content}\">"))
            .collect()
    }
}

impl DocumentSurface for Document {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .properties
                .push((name.to_string(), value.to_string())),
        }
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_meta(&mut self, name: &str, content: &str) {
        self.meta.insert(name.to_string(), content.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_keep_first_insertion_position() {
        let mut doc = Document::new();
        doc.set_property("--background", "0 0 0");
        doc.set_property("--foreground", "255 255 255");
        doc.set_property("--background", "10 14 26");

        assert_eq!(doc.property("--background"), Some("10 14 26"));
        assert_eq!(
            doc.to_css(),
            ":root {\n  --background: 10 14 26;\n  --foreground: 255 255 255;\n}\n"
        );
    }

    #[test]
    fn test_html_open_tag() {
        let mut doc = Document::new();
        assert_eq!(doc.html_open_tag(), "<html>");

        doc.add_class("style-default");
        doc.add_class("dark");
        doc.set_attribute("data-mode", "dark");
        assert_eq!(
            doc.html_open_tag(),
            "<html class=\"dark style-default\" data-mode=\"dark\">"
        );

        doc.remove_class("dark");
        assert!(!doc.has_class("dark"));
    }

    #[test]
    fn test_meta_tags() {
        let mut doc = Document::new();
        doc.set_meta("theme-color", "#000000");
        doc.set_meta("theme-color", "#ffffff");
        assert_eq!(
            doc.meta_tags(),
            vec!["<meta name=\"theme-color\" content=\"#ffffff\">".to_string()]
        );
    }
}
