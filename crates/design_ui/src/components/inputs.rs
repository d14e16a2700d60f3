//! Masked text inputs: the shared field shell plus the number and
//! birthdate specializations.
//!
//! The external masking widget owns keystroke behavior. A render here
//! produces the field's element description together with the mask
//! descriptor and validator the widget needs, bundled as a
//! [`MaskedInput`].

use crate::components::typography::{
    TypeColor, TypeElement, TypeProps, BODY_MEDIUM_500, CAPTION_REGULAR_400,
};
use crate::element::{Element, Tag};
use crate::enumeration::{Enumeration, PropAllowList};
use crate::error::ConfigError;
use crate::mask::{integer_mask, MaskDescriptor, NumberMask};
use crate::props::{Props, TEST_ID};
use crate::validators::{
    matches_format, min_max_birthdate_validator, DateFormat, MinMaxDateConfig, Validator,
};

/// Markup input types the masked family may use.
pub const INPUT_TYPES: Enumeration = Enumeration::new(
    "INPUT_TYPES",
    &[("TEL", "tel"), ("NUMBER", "number")],
);

/// Props callers may set on a masked input.
pub const PUBLIC_PROPS: PropAllowList = PropAllowList::new(
    "MaskedInput.PUBLIC_PROPS",
    &[
        "data-tid",
        "disabled",
        "allCaps",
        "currentValue",
        "currentError",
        "placeholder",
        "formChangeHandler",
        "setFieldTouched",
        "name",
        "labelCopy",
        "validator",
        "initialValue",
        "type",
        "mask",
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Markup input type.
pub enum InputType {
    /// Telephone-keypad input (the default; brings up the numeric keypad
    /// on touch devices).
    Tel,
    /// Native number input.
    Number,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Tel
    }
}

impl InputType {
    /// Canonical attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Tel => "tel",
            Self::Number => "number",
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Caller-settable props shared by the masked input family.
pub struct MaskedInputProps {
    /// The form field name.
    pub name: String,
    /// The label text above the field.
    pub label_copy: String,
    /// Whether the field is disabled.
    pub disabled: bool,
    /// Whether the label renders in all caps.
    pub all_caps: bool,
    /// Placeholder shown while the field is empty.
    pub placeholder: Option<String>,
    /// Value the field starts with.
    pub initial_value: Option<String>,
    /// Current value, when the surrounding form owns the state.
    pub current_value: Option<String>,
    /// Current validation message, when the surrounding form owns it.
    pub current_error: Option<String>,
    /// Markup input type; defaults to `tel`.
    pub input_type: Option<InputType>,
    /// Pass-through attributes; must contain `data-tid`.
    pub attrs: Props,
}

/// A masked field ready for the external masking widget.
pub struct MaskedInput {
    /// The field's element description.
    pub element: Element,
    /// The mask descriptor handed to the widget.
    pub mask: MaskDescriptor,
    /// The validator handed to the widget, when the field has one.
    pub validator: Option<Validator>,
}

/// The shared masked-field shell: label, input, and error line.
///
/// # Errors
///
/// [`ConfigError::MissingProp`] when `name`, `labelCopy`, or `data-tid` is
/// absent; [`ConfigError::ForeignProp`] for a bag key outside
/// [`PUBLIC_PROPS`]; [`ConfigError::IllegalValue`] for a bad input type.
pub fn render_masked_field(
    props: &MaskedInputProps,
    mask: MaskDescriptor,
    validator: Option<Validator>,
) -> Result<MaskedInput, ConfigError> {
    if props.name.is_empty() {
        return Err(ConfigError::MissingProp { prop: "name" });
    }
    if props.label_copy.is_empty() {
        return Err(ConfigError::MissingProp { prop: "labelCopy" });
    }
    PUBLIC_PROPS.assert_contains(&props.attrs, TEST_ID)?;
    PUBLIC_PROPS.assert_no_foreign_keys(&props.attrs)?;
    let input_type = props.input_type.unwrap_or_default();
    INPUT_TYPES.assert_member("type", input_type.token())?;

    let label = BODY_MEDIUM_500.render(&TypeProps {
        children: Some(props.label_copy.clone()),
        all_caps: props.all_caps,
        element: Some(TypeElement::Label),
        attrs: Props::new().with("htmlFor", props.name.as_str()),
        ..TypeProps::default()
    })?;

    let value = props.current_value.clone().or_else(|| props.initial_value.clone());
    let input = Element::new(Tag::Input)
        .class("TextInput")
        .attr("type", input_type.token())
        .attr("name", props.name.clone())
        .attr_opt("value", value)
        .attr_opt("placeholder", props.placeholder.clone())
        .attr_opt("data-tid", props.attrs.get_str(TEST_ID))
        .toggle("disabled", props.disabled);

    let mut element = Element::new(Tag::Div)
        .class("TextMaskedInput")
        .child(label)
        .child(input);
    if let Some(error) = props.current_error.as_ref().filter(|error| !error.is_empty()) {
        let error_line = CAPTION_REGULAR_400.render(&TypeProps {
            children: Some(error.clone()),
            color: Some(TypeColor::BrandSalamander),
            ..TypeProps::default()
        })?;
        element = element.child(error_line);
    }

    Ok(MaskedInput {
        element,
        mask,
        validator,
    })
}

/// A number input: the masked shell with the integer mask by default.
///
/// # Errors
///
/// Whatever [`render_masked_field`] reports.
pub fn number_input(
    props: &MaskedInputProps,
    mask: Option<NumberMask>,
    validator: Option<Validator>,
) -> Result<MaskedInput, ConfigError> {
    let mask = MaskDescriptor::Number(mask.unwrap_or_else(integer_mask));
    render_masked_field(props, mask, validator)
}

/// A birthdate input: date mask and composed format/range validator from
/// one display format.
///
/// # Errors
///
/// Whatever [`render_masked_field`] reports.
pub fn birthdate_input(
    props: &MaskedInputProps,
    format: DateFormat,
    range: Option<MinMaxDateConfig>,
) -> Result<MaskedInput, ConfigError> {
    let validator: Validator = match range {
        Some(range_config) => {
            let check_range = min_max_birthdate_validator(range_config);
            Box::new(move |value| {
                matches_format(value, format).or_else(|| check_range(value))
            })
        }
        None => Box::new(move |value| matches_format(value, format)),
    };
    render_masked_field(props, MaskDescriptor::Tokens(format.mask()), Some(validator))
}
