//! Design-approved form primitives.
//!
//! The crate owns the enumeration tables and allow lists behind the design
//! system's prop contracts, the private component renderers and their
//! public variant tables, the mask/validator surface handed to the
//! external text-masking widget, and the element-description boundary the
//! rendering engine consumes. Apps should compose the exported variants
//! instead of emitting ad hoc form markup; the variant tables are the set
//! of combinations Design has approved.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod element;
mod enumeration;
mod error;
mod icon;
mod mask;
mod props;
mod render;

pub mod components;
pub mod validators;

pub use element::{Element, Node, Tag};
pub use enumeration::{Enumeration, PropAllowList};
pub use error::ConfigError;
pub use mask::{integer_mask, Mask, MaskDescriptor, MaskToken, NumberMask};
pub use props::{PropValue, Props, TEST_ID};

/// Convenience imports for application crates consuming the library.
pub mod prelude {
    pub use crate::components::button::{
        button_variant, ButtonProps, ButtonVariant, MEDIUM_BLACK, MEDIUM_BLACK_OUTLINE,
        MEDIUM_STATEFUL, MEDIUM_WHITE_OUTLINE, UNSTYLED,
    };
    pub use crate::components::inputs::{
        birthdate_input, number_input, InputType, MaskedInput, MaskedInputProps,
    };
    pub use crate::components::radio::{
        render_radio_button_group, RadioButtonGroupProps, RadioOption,
    };
    pub use crate::components::select::{render_select, SelectOption, SelectProps};
    pub use crate::components::typography::{
        type_variant, TypeColor, TypeElement, TypeProps, TypeVariant, BODY_MEDIUM_500,
        BODY_REGULAR_400, CAPTION_MEDIUM_500, CAPTION_REGULAR_400, FOOTNOTE_REGULAR_400,
        TITLE_LARGE_SANS, TITLE_LARGE_SERIF, TITLE_MEDIUM_SANS, TITLE_MEDIUM_SERIF,
        TITLE_SMALL_SANS, TITLE_SMALL_SERIF, TITLE_XLARGE_SANS, TITLE_XLARGE_SERIF,
        TITLE_XXLARGE_SANS, TITLE_XXLARGE_SERIF,
    };
    pub use crate::validators::{
        matches_format, max_date_validator, min_date_validator, min_max_birthdate_validator,
        DateFormat, MaxDateConfig, MinDateConfig, MinMaxDateConfig, Validator,
    };
    pub use crate::{ConfigError, Element, Props, TEST_ID};
}
