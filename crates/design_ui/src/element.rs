//! Renderable element descriptions emitted by the component families.
//!
//! A component render produces one [`Element`] tree: a tag from the closed
//! [`Tag`] set, an ordered list of class tokens, attributes, boolean-attr
//! toggles, and children. The tree is inert data; the external rendering
//! engine (see the `render` module) turns it into displayed UI.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
/// Closed set of element tags the design system may emit.
pub enum Tag {
    Button,
    Div,
    Span,
    Label,
    Fieldset,
    Input,
    Aside,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Li,
    Select,
    Option,
    Svg,
    Path,
}

impl Tag {
    /// The markup tag name.
    pub fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Div => "div",
            Self::Span => "span",
            Self::Label => "label",
            Self::Fieldset => "fieldset",
            Self::Input => "input",
            Self::Aside => "aside",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Li => "li",
            Self::Select => "select",
            Self::Option => "option",
            Self::Svg => "svg",
            Self::Path => "path",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A child node: a nested element or a text run.
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Text content.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One renderable element.
///
/// Class tokens, attributes, and children keep insertion order; the order of
/// class tokens matters for CSS specificity and is part of the style
/// boundary contract.
pub struct Element {
    tag: Tag,
    classes: Vec<String>,
    attrs: Vec<(&'static str, String)>,
    toggles: Vec<&'static str>,
    children: Vec<Node>,
}

impl Element {
    /// Starts an element with the given tag.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            toggles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends one class token.
    pub fn class(mut self, token: impl Into<String>) -> Self {
        self.classes.push(token.into());
        self
    }

    /// Appends class tokens in order.
    pub fn classes<I, T>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.classes.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Appends one class token when `on` is true. Modifier tokens keep
    /// their declaration order this way.
    pub fn class_if(self, token: impl Into<String>, on: bool) -> Self {
        if on {
            self.class(token)
        } else {
            self
        }
    }

    /// Appends an attribute.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Appends an attribute when a value is present.
    pub fn attr_opt(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Sets a boolean attribute when `on` is true.
    pub fn toggle(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.toggles.push(name);
        }
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends a text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// The element tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Class tokens in insertion order.
    pub fn class_list(&self) -> &[String] {
        &self.classes
    }

    /// The whitespace-joined class attribute value.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> &[(&'static str, String)] {
        &self.attrs
    }

    /// Looks up an attribute value by name.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Boolean attributes that are set.
    pub fn toggles(&self) -> &[&'static str] {
        &self.toggles
    }

    /// Whether the boolean attribute `name` is set.
    pub fn has_toggle(&self, name: &str) -> bool {
        self.toggles.iter().any(|toggle| *toggle == name)
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of the direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// First descendant with the given tag, depth-first.
    pub fn find(&self, tag: Tag) -> Option<&Element> {
        self.descendants().find(|element| element.tag() == tag)
    }

    /// All descendants with the given tag, depth-first.
    pub fn find_all(&self, tag: Tag) -> Vec<&Element> {
        self.descendants()
            .filter(|element| element.tag() == tag)
            .collect()
    }

    fn descendants(&self) -> impl Iterator<Item = &Element> {
        let mut stack: Vec<&Element> = self
            .children
            .iter()
            .rev()
            .filter_map(|node| match node {
                Node::Element(element) => Some(element),
                Node::Text(_) => None,
            })
            .collect();
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            for node in next.children.iter().rev() {
                if let Node::Element(element) = node {
                    stack.push(element);
                }
            }
            Some(next)
        })
    }
}
