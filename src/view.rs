//! View - Host-agnostic Markup Tree
//!
//! Components render into a [`View`], a plain tree of elements and text that the
//! embedding host turns into real widgets (or serializes with [`View::to_html`]).
//! Elements are built fluently: `div().class("card").child(h3().child(title))`.

use std::fmt::Write as _;

/// HTML elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["input", "img", "br", "hr", "source", "meta", "link"];

/// A rendered node
#[derive(Debug, Clone, Default, PartialEq)]
pub enum View {
    /// Renders nothing
    #[default]
    Empty,
    /// Text node
    Text(String),
    /// Element node
    Element(Element),
    /// Sibling views without a wrapper element
    Fragment(Vec<View>),
}

/// A single element with ordered attributes, classes and inline styles
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    /// `None` value marks a boolean attribute (`disabled`, `checked`, ...)
    attrs: Vec<(String, Option<String>)>,
    styles: Vec<(String, String)>,
    children: Vec<View>,
}

/// Anything that can be placed in a view tree
pub trait IntoView {
    fn into_view(self) -> View;
}

/// A component rendered once from its props
pub trait RenderOnce {
    fn render(self) -> View;
}

impl<T: RenderOnce> IntoView for T {
    fn into_view(self) -> View {
        self.render()
    }
}

impl IntoView for View {
    fn into_view(self) -> View {
        self
    }
}

impl IntoView for Element {
    fn into_view(self) -> View {
        View::Element(self)
    }
}

impl IntoView for String {
    fn into_view(self) -> View {
        View::Text(self)
    }
}

impl IntoView for &str {
    fn into_view(self) -> View {
        View::Text(self.to_string())
    }
}

impl IntoView for &String {
    fn into_view(self) -> View {
        View::Text(self.clone())
    }
}

impl<T: IntoView> IntoView for Option<T> {
    fn into_view(self) -> View {
        self.map(IntoView::into_view).unwrap_or_default()
    }
}

impl From<Element> for View {
    fn from(element: Element) -> Self {
        View::Element(element)
    }
}

/// Create an element with an arbitrary tag
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

macro_rules! tag_constructors {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Create a `<", stringify!($name), ">` element")]
            pub fn $name() -> Element {
                Element::new(stringify!($name))
            }
        )*
    };
}

tag_constructors!(
    a, button, div, footer, form, h1, h2, h3, h4, img, input, label, li, nav, option, p, section,
    select, span, textarea, ul, video,
);

impl Element {
    /// Create a new empty element
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the `id` attribute
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add one or more whitespace-separated classes
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        for name in class.as_ref().split_whitespace() {
            if !self.classes.iter().any(|c| c == name) {
                self.classes.push(name.to_string());
            }
        }
        self
    }

    /// Add classes only when `condition` holds
    pub fn class_if(self, condition: bool, class: impl AsRef<str>) -> Self {
        if condition { self.class(class) } else { self }
    }

    /// Add classes when present
    pub fn class_opt(self, class: Option<impl AsRef<str>>) -> Self {
        match class {
            Some(class) => self.class(class),
            None => self,
        }
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name.into(), Some(value.into()));
        self
    }

    /// Set an attribute when a value is present
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set or clear a boolean attribute
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        let name = name.into();
        if on {
            self.set_attr(name, None);
        } else {
            self.attrs.retain(|(n, _)| *n != name);
        }
        self
    }

    /// Add an inline style declaration, replacing any previous value
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        let property = property.into();
        let value = value.into();
        match self.styles.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.styles.push((property, value)),
        }
        self
    }

    /// Add an inline style declaration when a value is present
    pub fn style_opt(self, property: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.style(property, value),
            None => self,
        }
    }

    /// Add several inline style declarations
    pub fn styles<K, V>(mut self, styles: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (property, value) in styles {
            self = self.style(property, value);
        }
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl IntoView) -> Self {
        match child.into_view() {
            View::Empty => {}
            view => self.children.push(view),
        }
        self
    }

    /// Append several children
    pub fn children<V: IntoView>(mut self, children: impl IntoIterator<Item = V>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    fn set_attr(&mut self, name: String, value: Option<String>) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Element tag name
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Attribute value; boolean attributes read as `""`
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Whether a boolean attribute is set
    pub fn has_flag(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, v)| n == name && v.is_none())
    }

    /// Class list in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Inline style value for a property
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_children(&self) -> &[View] {
        &self.children
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// First descendant (or self) carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|e: &Element| e.has_class(class))
    }

    /// All descendants (and self) carrying `class`, in document order
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(&|e: &Element| e.has_class(class), &mut out);
        out
    }

    /// First descendant (or self) with `tag`
    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.find(&|e: &Element| e.tag == tag)
    }

    /// All descendants (and self) with `tag`, in document order
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(&|e: &Element| e.tag == tag, &mut out);
        out
    }

    fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            child.collect(pred, out);
        }
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attr(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            match value {
                Some(value) => {
                    let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
                }
                None => {
                    out.push(' ');
                    out.push_str(name);
                }
            }
        }
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(p, v)| format!("{p}: {v}"))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, " style=\"{}\"", escape_attr(&style));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl View {
    /// Build a fragment, dropping empty children
    pub fn fragment<V: IntoView>(views: impl IntoIterator<Item = V>) -> View {
        View::Fragment(
            views
                .into_iter()
                .map(IntoView::into_view)
                .filter(|v| !v.is_empty())
                .collect(),
        )
    }

    /// Whether this view renders nothing
    pub fn is_empty(&self) -> bool {
        match self {
            View::Empty => true,
            View::Text(_) | View::Element(_) => false,
            View::Fragment(children) => children.iter().all(View::is_empty),
        }
    }

    /// The root element, if this view is a single element
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            View::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of the whole tree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|e: &Element| e.has_class(class))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(&|e: &Element| e.has_class(class), &mut out);
        out
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.find(&|e: &Element| e.tag == tag)
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(&|e: &Element| e.tag == tag, &mut out);
        out
    }

    /// Serialize to HTML markup
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        match self {
            View::Element(element) => element.find(pred),
            View::Fragment(children) => children.iter().find_map(|child| child.find(pred)),
            View::Empty | View::Text(_) => None,
        }
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        match self {
            View::Element(element) => element.collect(pred, out),
            View::Fragment(children) => {
                for child in children {
                    child.collect(pred, out);
                }
            }
            View::Empty | View::Text(_) => {}
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            View::Empty => {}
            View::Text(text) => out.push_str(text),
            View::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            View::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            View::Empty => {}
            View::Text(text) => out.push_str(&escape_text(text)),
            View::Element(element) => element.write_html(out),
            View::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Format a number the way a page shows it: `100` rather than `100.0`
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_dedups_classes_and_replaces_attrs() {
        let element = div()
            .class("card has-border")
            .class("card")
            .attr("data-size", "md")
            .attr("data-size", "lg");

        assert_eq!(element.classes(), &["card".to_string(), "has-border".to_string()]);
        assert_eq!(element.get_attr("data-size"), Some("lg"));
    }

    #[test]
    fn test_empty_children_are_skipped() {
        let element = div().child(View::Empty).child(None::<&str>).child("x");
        assert_eq!(element.get_children().len(), 1);
    }

    #[test]
    fn test_to_html_escapes_and_handles_void_tags() {
        let view: View = div()
            .class("a")
            .attr("title", "say \"hi\"")
            .style("--padding-x", "2rem")
            .child("<b>&</b>")
            .child(input().attr("name", "email").flag("disabled", true))
            .into();

        assert_eq!(
            view.to_html(),
            "<div class=\"a\" title=\"say &quot;hi&quot;\" style=\"--padding-x: 2rem\">\
             &lt;b&gt;&amp;&lt;/b&gt;<input name=\"email\" disabled></div>"
        );
    }

    #[test]
    fn test_queries_walk_fragments() {
        let view = View::fragment(vec![
            div().class("slot").child(span().class("label").child("Users")),
            div().class("slot").child(span().class("label").child("Revenue")),
        ]);

        let labels: Vec<String> = view
            .find_all_by_class("label")
            .into_iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(labels, vec!["Users", "Revenue"]);
        assert!(view.find_by_tag("span").is_some());
        assert_eq!(view.text_content(), "UsersRevenue");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-3.0), "-3");
    }
}
