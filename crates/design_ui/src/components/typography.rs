//! The type family: design-approved typography variants.
//!
//! `render_type` is the private component: it validates enumerated props
//! and emits an element with the computed class tokens, ignorant of which
//! combinations Design considers legal. [`TypeVariant`] is the public face;
//! the exported variant table at the bottom of this file is the set of
//! legal combinations.

use crate::element::{Element, Tag};
use crate::enumeration::{Enumeration, PropAllowList};
use crate::error::ConfigError;
use crate::props::Props;

/// Type subtype tokens, smallest to largest.
pub const SUBTYPES: Enumeration = Enumeration::new(
    "SUBTYPES",
    &[
        ("CAPTION", "Caption"),
        ("FOOTNOTE", "Footnote"),
        ("BODY", "Body"),
        ("TITLE_SMALL", "TitleSmall"),
        ("TITLE_MEDIUM", "TitleMedium"),
        ("TITLE_LARGE", "TitleLarge"),
        ("TITLE_XLARGE", "TitleXLarge"),
        ("TITLE_XXLARGE", "TitleXXLarge"),
    ],
);

/// Typeface tokens: the sans and the serif.
pub const TYPEFACES: Enumeration = Enumeration::new(
    "TYPEFACES",
    &[("THEINHARDT", "Theinhardt"), ("CAMBON", "Cambon")],
);

/// Typeface weight tokens. Weights vary per typeface; the variant table is
/// what pairs them legally.
pub const WEIGHTS: Enumeration = Enumeration::new(
    "WEIGHTS",
    &[
        ("LIGHT_300", "Light300"),
        ("REGULAR_400", "Regular400"),
        ("MEDIUM_500", "Medium500"),
        ("BOOK_500", "Book500"),
        ("DEMI_600", "Demi600"),
    ],
);

/// Text color tokens, brand palette plus grayscale.
pub const COLORS: Enumeration = Enumeration::new(
    "COLORS",
    &[
        ("BRAND_FOREST", "BrandForest"),
        ("BRAND_SALAMANDER", "BrandSalamander"),
        ("GRAY_PRIMARY", "GrayPrimary"),
        ("GRAY_SECONDARY", "GraySecondary"),
        ("GRAY_STROKE_AND_DISABLED", "GrayStrokeAndDisabled"),
        ("WHITE", "White"),
    ],
);

/// Structural elements the type family may render as.
pub const ELEMENTS: Enumeration = Enumeration::new(
    "ELEMENTS",
    &[
        ("H1", "h1"),
        ("H2", "h2"),
        ("H3", "h3"),
        ("H4", "h4"),
        ("H5", "h5"),
        ("H6", "h6"),
        ("DIV", "div"),
        ("LI", "li"),
        ("SPAN", "span"),
        ("LABEL", "label"),
    ],
);

/// Props callers may set on any type variant.
pub const PUBLIC_PROPS: PropAllowList = PropAllowList::new(
    "Type.PUBLIC_PROPS",
    &[
        "children", "centered", "allCaps", "color", "element", "htmlFor", "data-tid", "id",
    ],
);

/// Pass-through attributes the private component renders verbatim.
pub const WHITELISTED_PROPS: PropAllowList =
    PropAllowList::new("Type.WHITELISTED_PROPS", &["htmlFor", "data-tid", "id"]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Type subtype, smallest to largest.
pub enum TypeSubtype {
    /// Smallest text.
    Caption,
    /// Fine print.
    Footnote,
    /// Default running text.
    Body,
    /// Smallest title.
    TitleSmall,
    /// Medium title.
    TitleMedium,
    /// Large title.
    TitleLarge,
    /// Extra-large title.
    TitleXLarge,
    /// Largest title.
    TitleXXLarge,
}

impl TypeSubtype {
    /// Canonical class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Caption => "Caption",
            Self::Footnote => "Footnote",
            Self::Body => "Body",
            Self::TitleSmall => "TitleSmall",
            Self::TitleMedium => "TitleMedium",
            Self::TitleLarge => "TitleLarge",
            Self::TitleXLarge => "TitleXLarge",
            Self::TitleXXLarge => "TitleXXLarge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Typeface.
pub enum Typeface {
    /// The sans.
    Theinhardt,
    /// The serif.
    Cambon,
}

impl Typeface {
    /// Canonical class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Theinhardt => "Theinhardt",
            Self::Cambon => "Cambon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Typeface weight.
pub enum TypeWeight {
    /// Light, 300.
    Light300,
    /// Regular, 400.
    Regular400,
    /// Medium, 500 (sans).
    Medium500,
    /// Book, 500 (serif).
    Book500,
    /// Demi, 600.
    Demi600,
}

impl TypeWeight {
    /// Canonical class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Light300 => "Light300",
            Self::Regular400 => "Regular400",
            Self::Medium500 => "Medium500",
            Self::Book500 => "Book500",
            Self::Demi600 => "Demi600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text color.
pub enum TypeColor {
    /// Primary brand green.
    BrandForest,
    /// Brand accent orange.
    BrandSalamander,
    /// Primary gray.
    GrayPrimary,
    /// Secondary gray.
    GraySecondary,
    /// Stroke and disabled gray.
    GrayStrokeAndDisabled,
    /// White, for dark surfaces.
    White,
}

impl TypeColor {
    /// Canonical class token.
    pub fn token(self) -> &'static str {
        match self {
            Self::BrandForest => "BrandForest",
            Self::BrandSalamander => "BrandSalamander",
            Self::GrayPrimary => "GrayPrimary",
            Self::GraySecondary => "GraySecondary",
            Self::GrayStrokeAndDisabled => "GrayStrokeAndDisabled",
            Self::White => "White",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
/// Structural element override for a type variant.
pub enum TypeElement {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Div,
    Li,
    Span,
    Label,
}

impl TypeElement {
    /// Canonical tag token.
    pub fn token(self) -> &'static str {
        self.tag().token()
    }

    fn tag(self) -> Tag {
        match self {
            Self::H1 => Tag::H1,
            Self::H2 => Tag::H2,
            Self::H3 => Tag::H3,
            Self::H4 => Tag::H4,
            Self::H5 => Tag::H5,
            Self::H6 => Tag::H6,
            Self::Div => Tag::Div,
            Self::Li => Tag::Li,
            Self::Span => Tag::Span,
            Self::Label => Tag::Label,
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Caller-settable props for the type family.
pub struct TypeProps {
    /// The text to display.
    pub children: Option<String>,
    /// Whether to center the text.
    pub centered: bool,
    /// Whether to render the text in all caps.
    pub all_caps: bool,
    /// Optional text color.
    pub color: Option<TypeColor>,
    /// Overrides the default `div` element.
    pub element: Option<TypeElement>,
    /// Pass-through attributes (`htmlFor`, `data-tid`, `id`).
    pub attrs: Props,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Private configuration baked into one type variant.
pub struct TypeConfig {
    /// Subtype, e.g. `Caption` vs. `TitleSmall`.
    pub subtype: TypeSubtype,
    /// Typeface.
    pub typeface: Typeface,
    /// Typeface weight.
    pub weight: TypeWeight,
}

impl TypeConfig {
    /// Declares a configuration.
    pub const fn new(subtype: TypeSubtype, typeface: Typeface, weight: TypeWeight) -> Self {
        Self {
            subtype,
            typeface,
            weight,
        }
    }
}

/// The private type component: validates props and emits the element.
///
/// # Errors
///
/// [`ConfigError::IllegalValue`] for a bad enum token,
/// [`ConfigError::ForeignProp`] for a pass-through key outside the
/// whitelist.
pub fn render_type(config: TypeConfig, props: &TypeProps) -> Result<Element, ConfigError> {
    SUBTYPES.assert_member("subtype", config.subtype.token())?;
    TYPEFACES.assert_member("typeface", config.typeface.token())?;
    WEIGHTS.assert_member("weight", config.weight.token())?;
    COLORS.assert_member_opt("color", props.color.map(TypeColor::token))?;
    if let Some(element) = props.element {
        ELEMENTS.assert_member("element", element.token())?;
    }
    WHITELISTED_PROPS.assert_no_foreign_keys(&props.attrs)?;

    let tag = props.element.map_or(Tag::Div, |element| element.tag());
    let mut element = Element::new(tag).classes([
        config.subtype.token(),
        config.typeface.token(),
        config.weight.token(),
    ]);
    if let Some(color) = props.color {
        element = element.class(color.token());
    }
    if props.centered {
        element = element.class("Centered");
    }
    if props.all_caps {
        element = element.class("AllCaps");
    }
    for (key, value) in props.attrs.iter() {
        element = match key {
            "htmlFor" => element.attr("for", value.as_attr()),
            "data-tid" => element.attr("data-tid", value.as_attr()),
            "id" => element.attr("id", value.as_attr()),
            _ => element,
        };
    }
    if let Some(children) = &props.children {
        element = element.text(children.clone());
    }
    Ok(element)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Public face of the type family: one fixed design-approved configuration
/// paired with the private component.
pub struct TypeVariant {
    config: TypeConfig,
}

impl TypeVariant {
    /// Declares a variant over a fixed configuration.
    pub const fn new(config: TypeConfig) -> Self {
        Self { config }
    }

    /// The fixed configuration.
    pub fn config(&self) -> TypeConfig {
        self.config
    }

    /// Renders with the fixed configuration injected. Subtype, typeface,
    /// and weight are not caller-settable, so the fixed configuration
    /// always wins.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ForeignProp`] for any bag key outside
    /// [`PUBLIC_PROPS`]; otherwise whatever [`render_type`] reports.
    pub fn render(&self, props: &TypeProps) -> Result<Element, ConfigError> {
        PUBLIC_PROPS.assert_no_foreign_keys(&props.attrs)?;
        render_type(self.config, props)
    }
}

const fn sans(subtype: TypeSubtype, weight: TypeWeight) -> TypeVariant {
    TypeVariant::new(TypeConfig::new(subtype, Typeface::Theinhardt, weight))
}

const fn serif(subtype: TypeSubtype, weight: TypeWeight) -> TypeVariant {
    TypeVariant::new(TypeConfig::new(subtype, Typeface::Cambon, weight))
}

/// `Caption.Regular400`
pub const CAPTION_REGULAR_400: TypeVariant = sans(TypeSubtype::Caption, TypeWeight::Regular400);
/// `Caption.Medium500`
pub const CAPTION_MEDIUM_500: TypeVariant = sans(TypeSubtype::Caption, TypeWeight::Medium500);
/// `Footnote.Regular400`
pub const FOOTNOTE_REGULAR_400: TypeVariant = sans(TypeSubtype::Footnote, TypeWeight::Regular400);
/// `Body.Regular400`
pub const BODY_REGULAR_400: TypeVariant = sans(TypeSubtype::Body, TypeWeight::Regular400);
/// `Body.Medium500`
pub const BODY_MEDIUM_500: TypeVariant = sans(TypeSubtype::Body, TypeWeight::Medium500);
/// `TitleSmall.Sans`
pub const TITLE_SMALL_SANS: TypeVariant = sans(TypeSubtype::TitleSmall, TypeWeight::Medium500);
/// `TitleSmall.Serif`
pub const TITLE_SMALL_SERIF: TypeVariant = serif(TypeSubtype::TitleSmall, TypeWeight::Book500);
/// `TitleMedium.Sans`
pub const TITLE_MEDIUM_SANS: TypeVariant = sans(TypeSubtype::TitleMedium, TypeWeight::Medium500);
/// `TitleMedium.Serif`
pub const TITLE_MEDIUM_SERIF: TypeVariant = serif(TypeSubtype::TitleMedium, TypeWeight::Book500);
/// `TitleLarge.Sans`
pub const TITLE_LARGE_SANS: TypeVariant = sans(TypeSubtype::TitleLarge, TypeWeight::Medium500);
/// `TitleLarge.Serif`
pub const TITLE_LARGE_SERIF: TypeVariant = serif(TypeSubtype::TitleLarge, TypeWeight::Book500);
/// `TitleXLarge.Sans`
pub const TITLE_XLARGE_SANS: TypeVariant = sans(TypeSubtype::TitleXLarge, TypeWeight::Medium500);
/// `TitleXLarge.Serif`
pub const TITLE_XLARGE_SERIF: TypeVariant = serif(TypeSubtype::TitleXLarge, TypeWeight::Book500);
/// `TitleXXLarge.Sans`
pub const TITLE_XXLARGE_SANS: TypeVariant = sans(TypeSubtype::TitleXXLarge, TypeWeight::Medium500);
/// `TitleXXLarge.Serif`
pub const TITLE_XXLARGE_SERIF: TypeVariant = serif(TypeSubtype::TitleXXLarge, TypeWeight::Book500);

/// The design-approved typography variant table, keyed by dotted path.
/// Declared once; never mutated.
pub const TYPE_VARIANTS: &[(&str, &TypeVariant)] = &[
    ("Caption.Regular400", &CAPTION_REGULAR_400),
    ("Caption.Medium500", &CAPTION_MEDIUM_500),
    ("Footnote.Regular400", &FOOTNOTE_REGULAR_400),
    ("Body.Regular400", &BODY_REGULAR_400),
    ("Body.Medium500", &BODY_MEDIUM_500),
    ("TitleSmall.Sans", &TITLE_SMALL_SANS),
    ("TitleSmall.Serif", &TITLE_SMALL_SERIF),
    ("TitleMedium.Sans", &TITLE_MEDIUM_SANS),
    ("TitleMedium.Serif", &TITLE_MEDIUM_SERIF),
    ("TitleLarge.Sans", &TITLE_LARGE_SANS),
    ("TitleLarge.Serif", &TITLE_LARGE_SERIF),
    ("TitleXLarge.Sans", &TITLE_XLARGE_SANS),
    ("TitleXLarge.Serif", &TITLE_XLARGE_SERIF),
    ("TitleXXLarge.Sans", &TITLE_XXLARGE_SANS),
    ("TitleXXLarge.Serif", &TITLE_XXLARGE_SERIF),
];

/// Resolves a dotted variant path, e.g. `"Body.Regular400"`.
pub fn type_variant(path: &str) -> Option<&'static TypeVariant> {
    TYPE_VARIANTS
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, variant)| *variant)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::element::Tag;

    #[test]
    fn base_classes_come_first_then_modifiers_in_declaration_order() {
        let props = TypeProps {
            children: Some("Fine print".to_string()),
            centered: true,
            all_caps: true,
            color: Some(TypeColor::GraySecondary),
            ..TypeProps::default()
        };
        let element = CAPTION_REGULAR_400.render(&props).expect("legal props");
        assert_eq!(
            element.class_attr(),
            "Caption Theinhardt Regular400 GraySecondary Centered AllCaps"
        );
    }

    #[test]
    fn zero_props_render_from_fixed_configuration_alone() {
        let element = BODY_REGULAR_400
            .render(&TypeProps::default())
            .expect("no props required");
        assert_eq!(element.tag(), Tag::Div);
        assert_eq!(element.class_attr(), "Body Theinhardt Regular400");
        assert!(element.attrs().is_empty());
    }

    #[test]
    fn element_override_is_restricted_to_the_enumeration() {
        let props = TypeProps {
            element: Some(TypeElement::H2),
            ..TypeProps::default()
        };
        let element = TITLE_LARGE_SERIF.render(&props).expect("legal override");
        assert_eq!(element.tag(), Tag::H2);
    }

    #[test]
    fn foreign_pass_through_keys_are_rejected() {
        let props = TypeProps {
            attrs: Props::new().with("data-tid", "t1").with("style", "color: red"),
            ..TypeProps::default()
        };
        assert_eq!(
            BODY_MEDIUM_500.render(&props),
            Err(ConfigError::ForeignProp {
                prop: "style".to_string(),
            })
        );
    }

    #[test]
    fn whitelisted_attributes_are_rendered_verbatim() {
        let props = TypeProps {
            children: Some("Name".to_string()),
            element: Some(TypeElement::Label),
            attrs: Props::new().with("htmlFor", "name").with("data-tid", "t1"),
            ..TypeProps::default()
        };
        let element = BODY_MEDIUM_500.render(&props).expect("legal props");
        assert_eq!(element.tag(), Tag::Label);
        assert_eq!(element.attr_value("for"), Some("name"));
        assert_eq!(element.attr_value("data-tid"), Some("t1"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let props = TypeProps {
            children: Some("Same".to_string()),
            centered: true,
            ..TypeProps::default()
        };
        let first = TITLE_SMALL_SANS.render(&props).expect("legal props");
        let second = TITLE_SMALL_SANS.render(&props).expect("legal props");
        assert_eq!(first, second);
    }

    #[test]
    fn variant_table_resolves_every_declared_path() {
        for (path, variant) in TYPE_VARIANTS {
            assert_eq!(
                type_variant(path).map(TypeVariant::config),
                Some(variant.config())
            );
        }
        assert!(type_variant("Body.Demi600").is_none());
    }
}
