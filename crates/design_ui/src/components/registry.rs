//! Name-keyed validator and component generators for data-driven forms.
//!
//! Form definitions that live as data (JSON) name their validators and
//! components by string; the generators here resolve those names against
//! the library. Unknown names are configuration errors, the same taxonomy
//! as every other illegal value.

use serde_json::Value;

use crate::components::inputs::{number_input, MaskedInputProps};
use crate::components::radio::{render_radio_button_group, RadioButtonGroupProps, RadioOption};
use crate::element::Element;
use crate::error::ConfigError;
use crate::props::Props;
use crate::validators::{
    min_max_birthdate_validator, min_max_validator, validate_truthy, Validator,
};

/// Builds a validator from its registry name and JSON arguments.
///
/// `truthy` takes no arguments, `minMax` takes `[min, max]`, and
/// `minMaxDate` takes a birthdate-range configuration object.
///
/// # Errors
///
/// [`ConfigError::IllegalValue`] for an unknown name or malformed
/// arguments.
pub fn validator_generator(name: &str, args: &Value) -> Result<Validator, ConfigError> {
    match name {
        "truthy" => Ok(Box::new(|value| validate_truthy(value))),
        "minMax" => {
            let bounds = args
                .as_array()
                .filter(|bounds| bounds.len() == 2)
                .and_then(|bounds| Some((bounds[0].as_f64()?, bounds[1].as_f64()?)));
            match bounds {
                Some((min, max)) => Ok(min_max_validator(min, max)),
                None => Err(ConfigError::IllegalValue {
                    prop: "minMax",
                    value: args.to_string(),
                }),
            }
        }
        "minMaxDate" => {
            let config = serde_json::from_value(args.clone()).map_err(|_| {
                ConfigError::IllegalValue {
                    prop: "minMaxDate",
                    value: args.to_string(),
                }
            })?;
            Ok(min_max_birthdate_validator(config))
        }
        other => Err(ConfigError::IllegalValue {
            prop: "validator",
            value: other.to_string(),
        }),
    }
}

fn string_field(props: &Value, key: &str) -> Option<String> {
    props.get(key).and_then(Value::as_str).map(str::to_string)
}

fn bool_field(props: &Value, key: &str) -> bool {
    props.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Builds a component element from its registry name and JSON props.
///
/// # Errors
///
/// [`ConfigError::IllegalValue`] for an unknown name or malformed options;
/// otherwise whatever the named component reports.
pub fn component_generator(name: &str, props: &Value) -> Result<Element, ConfigError> {
    match name {
        "NumberInput" => {
            // The whole object rides along as the bag, so unknown keys hit
            // the same allow-list check as hand-written props.
            let attrs = props.as_object().map(Props::from_json).unwrap_or_default();
            let field = number_input(
                &MaskedInputProps {
                    name: string_field(props, "name").unwrap_or_default(),
                    label_copy: string_field(props, "labelCopy").unwrap_or_default(),
                    disabled: bool_field(props, "disabled"),
                    all_caps: bool_field(props, "allCaps"),
                    placeholder: string_field(props, "placeholder"),
                    initial_value: string_field(props, "initialValue"),
                    attrs,
                    ..MaskedInputProps::default()
                },
                None,
                None,
            )?;
            Ok(field.element)
        }
        "RadioButtonGroup" => {
            let options: Vec<RadioOption> = props
                .get("options")
                .cloned()
                .map(serde_json::from_value)
                .transpose()
                .map_err(|_| ConfigError::IllegalValue {
                    prop: "options",
                    value: props.to_string(),
                })?
                .unwrap_or_default();
            render_radio_button_group(&RadioButtonGroupProps {
                name: string_field(props, "name").unwrap_or_default(),
                options,
                value: string_field(props, "value"),
                disabled: bool_field(props, "disabled"),
                required: bool_field(props, "required"),
                attrs: Props::new(),
            })
        }
        other => Err(ConfigError::IllegalValue {
            prop: "component",
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::element::Tag;
    use crate::props::TEST_ID;

    #[test]
    fn known_validator_names_construct_working_validators() {
        let truthy = validator_generator("truthy", &Value::Null).expect("known name");
        assert!(truthy("").is_some());
        assert!(truthy("yes").is_none());

        let range = validator_generator("minMax", &json!([18, 100])).expect("known name");
        assert!(range("50").is_none());
        assert!(range("150").is_some());

        let birthdate = validator_generator(
            "minMaxDate",
            &json!({
                "minBirthdate": "1920-01-01",
                "maxBirthdate": "2005-01-01",
                "minAge": 18,
                "maxAge": 100,
                "dateFormat": "mm/dd/yyyy",
            }),
        )
        .expect("known name");
        assert_eq!(
            birthdate("01/01/2010"),
            Some("Sorry, you must be 18–100.".to_string())
        );
    }

    #[test]
    fn unknown_validator_names_are_configuration_errors() {
        let error = validator_generator("unknown", &Value::Null)
            .err()
            .expect("unknown name");
        assert_eq!(
            error,
            ConfigError::IllegalValue {
                prop: "validator",
                value: "unknown".to_string(),
            }
        );
    }

    #[test]
    fn malformed_min_max_arguments_are_rejected() {
        assert!(validator_generator("minMax", &json!([18])).is_err());
        assert!(validator_generator("minMax", &json!("18-100")).is_err());
    }

    #[test]
    fn radio_group_components_render_from_json_props() {
        let element = component_generator(
            "RadioButtonGroup",
            &json!({
                "name": "faveColor",
                "value": "b",
                "options": [
                    {"value": "a", "label": "A"},
                    {"value": "b", "label": "B"},
                ],
            }),
        )
        .expect("known component");
        assert_eq!(element.tag(), Tag::Fieldset);
        let inputs = element.find_all(Tag::Input);
        assert!(inputs[1].has_toggle("checked"));
    }

    #[test]
    fn number_input_components_render_from_json_props() {
        let element = component_generator(
            "NumberInput",
            &json!({
                "name": "income",
                "labelCopy": "Income",
                "data-tid": "t1",
            }),
        )
        .expect("known component");
        let input = element.find(Tag::Input).expect("input present");
        assert_eq!(input.attr_value(TEST_ID), Some("t1"));
    }

    #[test]
    fn unknown_json_keys_hit_the_component_allow_list() {
        let result = component_generator(
            "NumberInput",
            &json!({
                "name": "income",
                "labelCopy": "Income",
                "data-tid": "t1",
                "tabIndex": 3,
            }),
        );
        assert!(matches!(
            result,
            Err(ConfigError::ForeignProp { prop }) if prop == "tabIndex"
        ));
    }

    #[test]
    fn unknown_component_names_are_configuration_errors() {
        assert!(matches!(
            component_generator("Carousel", &Value::Null),
            Err(ConfigError::IllegalValue { prop: "component", .. })
        ));
    }
}
