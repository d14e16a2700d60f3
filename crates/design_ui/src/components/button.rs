//! The button family: design-approved button variants.
//!
//! `render_button` is the private component. It is ignorant of which
//! size/style combinations Design considers legal; the exported variant
//! table at the bottom of this file declares the legal set.

use crate::element::{Element, Tag};
use crate::enumeration::{Enumeration, PropAllowList};
use crate::error::ConfigError;
use crate::icon::arrow_icon_inline;
use crate::props::{Props, TEST_ID};

/// Button size tokens.
pub const SIZES: Enumeration = Enumeration::new(
    "SIZES",
    &[("MEDIUM", "Medium"), ("UNSIZED", "Unsized")],
);

/// Button color-style tokens. `Unstyled` is for semantic buttons that are
/// not styled as buttons.
pub const STYLES: Enumeration = Enumeration::new(
    "STYLES",
    &[
        ("BLACK", "Black"),
        ("BLACK_OUTLINE", "BlackOutline"),
        ("WHITE_OUTLINE", "WhiteOutline"),
        ("STATEFUL", "Stateful"),
        ("UNSTYLED", "Unstyled"),
    ],
);

/// Markup button types. `submit` makes the button a form submission button.
pub const HTML_TYPES: Enumeration = Enumeration::new(
    "HTML_TYPES",
    &[("BUTTON", "button"), ("SUBMIT", "submit")],
);

/// Props callers may set on any button variant.
pub const PUBLIC_PROPS: PropAllowList = PropAllowList::new(
    "Button.PUBLIC_PROPS",
    &[
        "children", "data-tid", "disabled", "fullWidth", "name", "onClick", "isSelected", "type",
        "arrowIcon",
    ],
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button size.
pub enum ButtonSize {
    /// Standard button height.
    Medium,
    /// No size class; the content decides.
    Unsized,
}

impl ButtonSize {
    /// Canonical class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::Unsized => "Unsized",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button color style.
pub enum ButtonStyle {
    /// Solid black.
    Black,
    /// Black outline on transparent.
    BlackOutline,
    /// White outline on transparent.
    WhiteOutline,
    /// Selectable button that reflects `isSelected`.
    Stateful,
    /// Semantic button with no button styling.
    Unstyled,
}

impl ButtonStyle {
    /// Canonical class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::BlackOutline => "BlackOutline",
            Self::WhiteOutline => "WhiteOutline",
            Self::Stateful => "Stateful",
            Self::Unstyled => "Unstyled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Markup button type.
pub enum HtmlType {
    /// Regular button (the default).
    Button,
    /// Form submission button.
    Submit,
}

impl Default for HtmlType {
    fn default() -> Self {
        Self::Button
    }
}

impl HtmlType {
    /// Canonical attribute token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Caller-settable props for the button family.
pub struct ButtonProps {
    /// The button text to display.
    pub children: Option<String>,
    /// Whether the button is disabled.
    pub disabled: bool,
    /// Whether the button stretches to its container width.
    pub full_width: bool,
    /// The form field name.
    pub name: Option<String>,
    /// `<button type="button|submit">`; defaults to `button`.
    pub html_type: Option<HtmlType>,
    /// Whether this button is currently selected (`Stateful` style only).
    pub is_selected: bool,
    /// Whether the inline arrow icon is displayed.
    pub arrow_icon: bool,
    /// Pass-through attributes; must contain `data-tid`.
    pub attrs: Props,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Private configuration baked into one button variant.
pub struct ButtonConfig {
    /// The size of the button.
    pub size: ButtonSize,
    /// The color style of the button.
    pub style: ButtonStyle,
}

impl ButtonConfig {
    /// Declares a configuration.
    pub const fn new(size: ButtonSize, style: ButtonStyle) -> Self {
        Self { size, style }
    }

    /// Builds a configuration from canonical tokens; the data-driven path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IllegalValue`] for a token outside [`SIZES`]
    /// or [`STYLES`].
    pub fn from_tokens(size: &str, style: &str) -> Result<Self, ConfigError> {
        SIZES.assert_member("size", size)?;
        STYLES.assert_member("style", style)?;
        let size = match size {
            "Medium" => ButtonSize::Medium,
            _ => ButtonSize::Unsized,
        };
        let style = match style {
            "Black" => ButtonStyle::Black,
            "BlackOutline" => ButtonStyle::BlackOutline,
            "WhiteOutline" => ButtonStyle::WhiteOutline,
            "Stateful" => ButtonStyle::Stateful,
            _ => ButtonStyle::Unstyled,
        };
        Ok(Self::new(size, style))
    }
}

/// The private button component: validates props and emits the element.
///
/// # Errors
///
/// [`ConfigError::IllegalValue`] for a bad enum token,
/// [`ConfigError::MissingProp`] when `data-tid` is absent,
/// [`ConfigError::ForeignProp`] for a bag key outside [`PUBLIC_PROPS`].
pub fn render_button(config: ButtonConfig, props: &ButtonProps) -> Result<Element, ConfigError> {
    SIZES.assert_member("size", config.size.token())?;
    STYLES.assert_member("style", config.style.token())?;
    let html_type = props.html_type.unwrap_or_default();
    HTML_TYPES.assert_member("type", html_type.token())?;

    PUBLIC_PROPS.assert_contains(&props.attrs, TEST_ID)?;
    PUBLIC_PROPS.assert_no_foreign_keys(&props.attrs)?;

    let mut element = Element::new(Tag::Button)
        .classes(["Button", config.size.token(), config.style.token()])
        .class_if("fullWidth", props.full_width)
        .class_if("isSelected", props.is_selected)
        .class_if("arrowIcon", props.arrow_icon)
        .attr("type", html_type.token())
        .attr_opt("name", props.name.clone())
        .attr_opt("data-tid", props.attrs.get_str(TEST_ID))
        .toggle("disabled", props.disabled);
    if let Some(children) = &props.children {
        element = element.text(children.clone());
    }
    if props.arrow_icon {
        element = element.child(arrow_icon_inline());
    }
    Ok(element)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Public face of the button family: one fixed design-approved
/// configuration paired with the private component.
pub struct ButtonVariant {
    config: ButtonConfig,
}

impl ButtonVariant {
    /// Declares a variant over a fixed configuration.
    pub const fn new(config: ButtonConfig) -> Self {
        Self { config }
    }

    /// The fixed configuration.
    pub fn config(&self) -> ButtonConfig {
        self.config
    }

    /// Renders with the fixed configuration injected. Size and style are
    /// not caller-settable, so the fixed configuration always wins.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ForeignProp`] for any bag key outside
    /// [`PUBLIC_PROPS`]; otherwise whatever [`render_button`] reports.
    pub fn render(&self, props: &ButtonProps) -> Result<Element, ConfigError> {
        PUBLIC_PROPS.assert_no_foreign_keys(&props.attrs)?;
        render_button(self.config, props)
    }
}

/// `Medium.Black`
pub const MEDIUM_BLACK: ButtonVariant =
    ButtonVariant::new(ButtonConfig::new(ButtonSize::Medium, ButtonStyle::Black));
/// `Medium.BlackOutline`
pub const MEDIUM_BLACK_OUTLINE: ButtonVariant = ButtonVariant::new(ButtonConfig::new(
    ButtonSize::Medium,
    ButtonStyle::BlackOutline,
));
/// `Medium.WhiteOutline`
pub const MEDIUM_WHITE_OUTLINE: ButtonVariant = ButtonVariant::new(ButtonConfig::new(
    ButtonSize::Medium,
    ButtonStyle::WhiteOutline,
));
/// `Medium.Stateful`
pub const MEDIUM_STATEFUL: ButtonVariant =
    ButtonVariant::new(ButtonConfig::new(ButtonSize::Medium, ButtonStyle::Stateful));
/// `Unstyled`
pub const UNSTYLED: ButtonVariant =
    ButtonVariant::new(ButtonConfig::new(ButtonSize::Unsized, ButtonStyle::Unstyled));

/// The design-approved button variant table, keyed by dotted path.
/// Declared once; never mutated.
pub const BUTTON_VARIANTS: &[(&str, &ButtonVariant)] = &[
    ("Medium.Black", &MEDIUM_BLACK),
    ("Medium.BlackOutline", &MEDIUM_BLACK_OUTLINE),
    ("Medium.WhiteOutline", &MEDIUM_WHITE_OUTLINE),
    ("Medium.Stateful", &MEDIUM_STATEFUL),
    ("Unstyled", &UNSTYLED),
];

/// Resolves a dotted variant path, e.g. `"Medium.Black"`.
pub fn button_variant(path: &str) -> Option<&'static ButtonVariant> {
    BUTTON_VARIANTS
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, variant)| *variant)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::element::{Node, Tag};

    fn minimal_props() -> ButtonProps {
        ButtonProps {
            attrs: Props::new().with(TEST_ID, "t1"),
            ..ButtonProps::default()
        }
    }

    #[test]
    fn medium_black_renders_the_exact_class_list() {
        let props = ButtonProps {
            children: Some("Go".to_string()),
            ..minimal_props()
        };
        let element = MEDIUM_BLACK.render(&props).expect("legal props");
        assert_eq!(element.tag(), Tag::Button);
        assert_eq!(element.class_attr(), "Button Medium Black");
        assert_eq!(element.attr_value("type"), Some("button"));
        assert_eq!(element.attr_value("data-tid"), Some("t1"));
        assert_eq!(element.text_content(), "Go");
    }

    #[test]
    fn modifier_classes_follow_base_classes_in_declaration_order() {
        let props = ButtonProps {
            full_width: true,
            is_selected: true,
            arrow_icon: true,
            ..minimal_props()
        };
        let element = MEDIUM_STATEFUL.render(&props).expect("legal props");
        assert_eq!(
            element.class_attr(),
            "Button Medium Stateful fullWidth isSelected arrowIcon"
        );
    }

    #[test]
    fn arrow_icon_appends_the_inline_glyph_after_the_children() {
        let props = ButtonProps {
            children: Some("Next".to_string()),
            arrow_icon: true,
            ..minimal_props()
        };
        let element = MEDIUM_BLACK.render(&props).expect("legal props");
        match element.children() {
            [Node::Text(text), Node::Element(icon)] => {
                assert_eq!(text, "Next");
                assert_eq!(icon.tag(), Tag::Svg);
                assert_eq!(icon.class_attr(), "arrowIconInline");
            }
            other => panic!("unexpected children: {other:?}"),
        }
    }

    #[test]
    fn missing_test_identifier_is_a_configuration_error() {
        let props = ButtonProps::default();
        assert_eq!(
            MEDIUM_BLACK.render(&props),
            Err(ConfigError::MissingProp { prop: TEST_ID })
        );
    }

    #[test]
    fn foreign_props_are_rejected_before_rendering() {
        let props = ButtonProps {
            attrs: Props::new().with(TEST_ID, "t1").with("autoFocus", true),
            ..ButtonProps::default()
        };
        assert_eq!(
            MEDIUM_BLACK.render(&props),
            Err(ConfigError::ForeignProp {
                prop: "autoFocus".to_string(),
            })
        );
    }

    #[test]
    fn private_configuration_cannot_be_overridden_through_the_bag() {
        let props = ButtonProps {
            attrs: Props::new().with(TEST_ID, "t1").with("style", "WhiteOutline"),
            ..ButtonProps::default()
        };
        assert_eq!(
            MEDIUM_BLACK.render(&props),
            Err(ConfigError::ForeignProp {
                prop: "style".to_string(),
            })
        );
    }

    #[test]
    fn only_required_props_still_render_from_fixed_configuration() {
        let element = UNSTYLED.render(&minimal_props()).expect("legal props");
        assert_eq!(element.class_attr(), "Button Unsized Unstyled");
        assert!(!element.has_toggle("disabled"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let props = ButtonProps {
            children: Some("Again".to_string()),
            disabled: true,
            html_type: Some(HtmlType::Submit),
            ..minimal_props()
        };
        let first = MEDIUM_BLACK_OUTLINE.render(&props).expect("legal props");
        let second = MEDIUM_BLACK_OUTLINE.render(&props).expect("legal props");
        assert_eq!(first, second);
        assert_eq!(first.attr_value("type"), Some("submit"));
        assert!(first.has_toggle("disabled"));
    }

    #[test]
    fn variant_table_resolves_every_declared_path() {
        for (path, variant) in BUTTON_VARIANTS {
            assert_eq!(
                button_variant(path).map(ButtonVariant::config),
                Some(variant.config())
            );
        }
        assert!(button_variant("Tiny.Blue").is_none());
    }

    #[test]
    fn config_from_tokens_validates_through_the_enumerations() {
        let config = ButtonConfig::from_tokens("Medium", "Stateful").expect("legal tokens");
        assert_eq!(config, MEDIUM_STATEFUL.config());
        assert_eq!(
            ButtonConfig::from_tokens("Tiny", "Black"),
            Err(ConfigError::IllegalValue {
                prop: "size",
                value: "Tiny".to_string(),
            })
        );
    }
}
