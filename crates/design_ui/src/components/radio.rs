//! Radio buttons and radio button groups.
//!
//! The native input is hidden by the stylesheet and the visible "radio
//! button" is a facade (`<aside>`); everything here is otherwise plain
//! markup. Because the group is wired straight into an external form
//! library, unexpected pass-through props are warned about rather than
//! rejected, unlike everywhere else in the library.

use serde::{Deserialize, Serialize};

use crate::components::typography::{TypeProps, BODY_REGULAR_400};
use crate::element::{Element, Tag};
use crate::enumeration::PropAllowList;
use crate::error::ConfigError;
use crate::props::{Props, TEST_ID};

/// Class token of a single radio button.
pub const RADIO_CLASS: &str = "RadioButton";

/// Class token of the group fieldset.
pub const GROUP_CLASS: &str = "RadioButtonGroup";

/// Props a radio button understands, including the form-library
/// pass-through handler set.
pub const RADIO_PROPS: PropAllowList = PropAllowList::new(
    "RadioButton.PROPS",
    &[
        "name",
        "value",
        "checked",
        "required",
        "disabled",
        "label",
        "data-tid",
        "onBlur",
        "onChange",
        "onDragStart",
        "onDrop",
        "onFocus",
    ],
);

/// Props callers may set on a radio button group.
pub const GROUP_PUBLIC_PROPS: PropAllowList = PropAllowList::new(
    "RadioButtonGroup.PUBLIC_PROPS",
    &["name", "options", "value", "disabled", "required"],
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// One selectable option supplied to a group.
pub struct RadioOption {
    /// The value of this option, e.g. `blue`.
    pub value: String,
    /// The text label to show on the right.
    pub label: String,
    /// Whether this individual option is disabled.
    pub disabled: bool,
    /// Pass-through attributes for this option's input.
    #[serde(skip)]
    pub attrs: Props,
}

#[derive(Debug, Clone, Default)]
/// Fully resolved props for one radio button. The group computes these;
/// callers normally never build them directly.
pub struct RadioButtonProps {
    /// The name of the field, shared across the group.
    pub name: String,
    /// The value of this option.
    pub value: String,
    /// Whether this option is currently selected.
    pub checked: bool,
    /// Whether the group is required.
    pub required: bool,
    /// Whether this option is disabled.
    pub disabled: bool,
    /// The text label to show on the right.
    pub label: String,
    /// Pass-through attributes, mostly form-library handler keys.
    pub attrs: Props,
}

#[derive(Debug, Clone, Default)]
/// Caller-settable props for a radio button group.
pub struct RadioButtonGroupProps {
    /// The name of the field, e.g. `faveColor`.
    pub name: String,
    /// Props passed to the individual radios.
    pub options: Vec<RadioOption>,
    /// The currently selected option value.
    pub value: Option<String>,
    /// Disables every option in the group.
    pub disabled: bool,
    /// Whether this radio group is required.
    pub required: bool,
    /// Pass-through attributes spread onto every radio.
    pub attrs: Props,
}

/// Renders one radio button: a label wrapping the hidden input, its facade,
/// and the text label in body typography.
///
/// # Errors
///
/// Returns [`ConfigError::MissingProp`] when `name`, `value`, or `label` is
/// absent. Unexpected pass-through keys are only warned about.
pub fn render_radio_button(props: &RadioButtonProps) -> Result<Element, ConfigError> {
    if props.name.is_empty() {
        return Err(ConfigError::MissingProp { prop: "name" });
    }
    if props.value.is_empty() {
        return Err(ConfigError::MissingProp { prop: "value" });
    }
    if props.label.is_empty() {
        return Err(ConfigError::MissingProp { prop: "label" });
    }
    RADIO_PROPS.warn_foreign_keys(&props.attrs);

    let input = Element::new(Tag::Input)
        .attr("type", "radio")
        .attr("name", props.name.clone())
        .attr("value", props.value.clone())
        .attr_opt("data-tid", props.attrs.get_str(TEST_ID))
        .toggle("checked", props.checked)
        .toggle("required", props.required)
        .toggle("disabled", props.disabled);
    let label_text = BODY_REGULAR_400.render(&TypeProps {
        children: Some(props.label.clone()),
        ..TypeProps::default()
    })?;

    Ok(Element::new(Tag::Label)
        .class(RADIO_CLASS)
        .child(Element::new(Tag::Span).child(input).child(Element::new(Tag::Aside)))
        .child(label_text))
}

/// Injects the group name into every option and computes which option is
/// checked. Group-level `disabled` wins over (ORs with) option-level
/// `disabled`; group-level pass-through props win over option-level ones.
pub fn finalize_options(props: &RadioButtonGroupProps) -> Vec<RadioButtonProps> {
    props
        .options
        .iter()
        .map(|option| {
            let mut attrs = option.attrs.clone();
            for (key, value) in props.attrs.iter() {
                attrs.set(key, value.clone());
            }
            RadioButtonProps {
                name: props.name.clone(),
                value: option.value.clone(),
                checked: props.value.as_deref() == Some(option.value.as_str()),
                required: props.required,
                disabled: props.disabled || option.disabled,
                label: option.label.clone(),
                attrs,
            }
        })
        .collect()
}

/// Renders a stack of radio buttons inside a fieldset.
///
/// # Errors
///
/// Propagates whatever [`render_radio_button`] reports for an option.
pub fn render_radio_button_group(props: &RadioButtonGroupProps) -> Result<Element, ConfigError> {
    let mut fieldset = Element::new(Tag::Fieldset).class(GROUP_CLASS);
    for radio in finalize_options(props) {
        fieldset = fieldset.child(render_radio_button(&radio)?);
    }
    Ok(fieldset)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn two_option_group() -> RadioButtonGroupProps {
        RadioButtonGroupProps {
            name: "faveColor".to_string(),
            options: vec![
                RadioOption {
                    value: "a".to_string(),
                    label: "A".to_string(),
                    ..RadioOption::default()
                },
                RadioOption {
                    value: "b".to_string(),
                    label: "B".to_string(),
                    ..RadioOption::default()
                },
            ],
            value: Some("b".to_string()),
            ..RadioButtonGroupProps::default()
        }
    }

    #[test]
    fn exactly_the_matching_option_is_checked_and_names_are_shared() {
        let group = render_radio_button_group(&two_option_group()).expect("legal group");
        assert_eq!(group.tag(), Tag::Fieldset);
        assert_eq!(group.class_attr(), "RadioButtonGroup");
        let inputs = group.find_all(Tag::Input);
        assert_eq!(inputs.len(), 2);
        assert!(!inputs[0].has_toggle("checked"));
        assert!(inputs[1].has_toggle("checked"));
        assert_eq!(inputs[0].attr_value("name"), Some("faveColor"));
        assert_eq!(inputs[1].attr_value("name"), Some("faveColor"));
    }

    #[test]
    fn group_disabled_wins_over_option_disabled() {
        let mut props = two_option_group();
        props.options[0].disabled = true;
        let finalized = finalize_options(&props);
        assert!(finalized[0].disabled);
        assert!(!finalized[1].disabled);

        props.disabled = true;
        let finalized = finalize_options(&props);
        assert!(finalized.iter().all(|radio| radio.disabled));
    }

    #[test]
    fn missing_label_is_a_configuration_error() {
        let props = RadioButtonProps {
            name: "faveColor".to_string(),
            value: "a".to_string(),
            ..RadioButtonProps::default()
        };
        assert_eq!(
            render_radio_button(&props),
            Err(ConfigError::MissingProp { prop: "label" })
        );
    }

    #[test]
    fn unexpected_pass_through_props_do_not_fail_the_render() {
        let props = RadioButtonProps {
            name: "faveColor".to_string(),
            value: "a".to_string(),
            label: "A".to_string(),
            attrs: Props::new().with("onDoubleClick", "handler"),
            ..RadioButtonProps::default()
        };
        let element = render_radio_button(&props).expect("lax policy");
        assert_eq!(element.class_attr(), "RadioButton");
    }

    #[test]
    fn label_text_is_set_in_body_typography() {
        let props = RadioButtonProps {
            name: "faveColor".to_string(),
            value: "a".to_string(),
            label: "A".to_string(),
            ..RadioButtonProps::default()
        };
        let element = render_radio_button(&props).expect("legal props");
        let text = element.find(Tag::Div).expect("typography child");
        assert_eq!(text.class_attr(), "Body Theinhardt Regular400");
        assert_eq!(text.text_content(), "A");
    }

    #[test]
    fn group_level_pass_through_wins_on_collision() {
        let mut props = two_option_group();
        props.options[0].attrs = Props::new().with(TEST_ID, "option-tid");
        props.attrs = Props::new().with(TEST_ID, "group-tid");
        let finalized = finalize_options(&props);
        assert_eq!(finalized[0].attrs.get_str(TEST_ID), Some("group-tid"));
        assert_eq!(finalized[1].attrs.get_str(TEST_ID), Some("group-tid"));
    }

    #[test]
    fn options_deserialize_from_json() {
        let options: Vec<RadioOption> = serde_json::from_value(serde_json::json!([
            {"value": "a", "label": "A"},
            {"value": "b", "label": "B", "disabled": true},
        ]))
        .expect("well-formed options");
        assert_eq!(options[1].value, "b");
        assert!(options[1].disabled);
        assert!(!options[0].disabled);
    }
}
