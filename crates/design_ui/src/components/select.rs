//! Thin wrapper around the external dropdown widget.
//!
//! The widget owns search, async option loading, and keyboard behavior;
//! this component only supplies the styled shell: the root class prefix the
//! stylesheet targets, an optional floating title, and the option list in
//! plain markup.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Tag};
use crate::props::Props;

/// Default root class prefix the stylesheet targets.
pub const DEFAULT_CLASS_NAME_PREFIX: &str = "StyledSelect";

/// Default placeholder shown before the user types.
pub const DEFAULT_PLACEHOLDER: &str = "Type to search";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// One selectable option.
pub struct SelectOption {
    /// The option value.
    pub value: String,
    /// The user-facing option label.
    pub label: String,
}

#[derive(Debug, Clone, Default)]
/// Caller-settable props for the select wrapper.
pub struct SelectProps {
    /// Extra class prepended to the root class.
    pub class_name: Option<String>,
    /// Overrides [`DEFAULT_CLASS_NAME_PREFIX`].
    pub class_name_prefix: Option<String>,
    /// Optional floating title below the widget.
    pub title: Option<String>,
    /// Overrides [`DEFAULT_PLACEHOLDER`].
    pub placeholder: Option<String>,
    /// The option list.
    pub options: Vec<SelectOption>,
    /// The currently selected option value.
    pub value: Option<String>,
    /// The form field name.
    pub name: Option<String>,
    /// Pass-through attributes.
    pub attrs: Props,
}

/// Renders the select shell. The select never fails validation: it has no
/// enumerated props and no required test identifier of its own.
pub fn render_select(props: &SelectProps) -> Element {
    let prefix = props
        .class_name_prefix
        .clone()
        .unwrap_or_else(|| DEFAULT_CLASS_NAME_PREFIX.to_string());
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    let mut select = Element::new(Tag::Select);
    if let Some(class_name) = &props.class_name {
        select = select.class(class_name.clone());
    }
    select = select
        .class(prefix)
        .attr_opt("name", props.name.clone())
        .attr("data-placeholder", placeholder);
    for option in &props.options {
        let selected = props.value.as_deref() == Some(option.value.as_str());
        select = select.child(
            Element::new(Tag::Option)
                .attr("value", option.value.clone())
                .toggle("selected", selected)
                .text(option.label.clone()),
        );
    }

    let mut wrapper = Element::new(Tag::Div);
    if props.title.is_some() {
        wrapper = wrapper.class("SelectWrapper");
    }
    wrapper = wrapper.child(select);
    if let Some(title) = &props.title {
        wrapper = wrapper.child(Element::new(Tag::Div).class("SelectTitle").text(title.clone()));
    }
    wrapper
}
