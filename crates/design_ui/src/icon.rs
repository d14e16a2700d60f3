//! Inline icon elements shared by the component families.

use crate::element::{Element, Tag};

const ARROW_PATH: &str = "M7.00016 0.333374L5.82516 1.50837L10.4752 6.16671H0.333496V7.83337H10.4752L5.82516 12.4917L7.00016 13.6667L13.6668 7.00004L7.00016 0.333374Z";

/// The 14×14 inline arrow glyph appended to arrow-icon buttons.
pub(crate) fn arrow_icon_inline() -> Element {
    Element::new(Tag::Svg)
        .class("arrowIconInline")
        .attr("width", "14")
        .attr("height", "14")
        .attr("viewBox", "0 0 14 14")
        .attr("fill", "none")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .child(Element::new(Tag::Path).attr("d", ARROW_PATH).attr("fill", "white"))
}
