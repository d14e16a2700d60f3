//! Conversion of element descriptions into Leptos views.
//!
//! This is the render boundary: everything upstream of it is inert data.
//! The [`Tag`] set is closed, so each tag maps onto its concrete Leptos
//! builder here and nowhere else.

use leptos::html::{ElementDescriptor, HtmlElement};
use leptos::{html, svg, IntoView, View};

use crate::element::{Element, Node, Tag};

fn apply<El>(builder: HtmlElement<El>, description: &Element) -> View
where
    El: ElementDescriptor + 'static,
{
    let mut builder = builder;
    let class_attr = description.class_attr();
    if !class_attr.is_empty() {
        builder = builder.attr("class", class_attr);
    }
    for (name, value) in description.attrs() {
        builder = builder.attr(*name, value.clone());
    }
    for name in description.toggles() {
        builder = builder.attr(*name, true);
    }
    for child in description.children() {
        builder = match child {
            Node::Element(element) => builder.child(view_of(element)),
            Node::Text(text) => builder.child(text.clone()),
        };
    }
    builder.into_view()
}

fn view_of(description: &Element) -> View {
    match description.tag() {
        Tag::Button => apply(html::button(), description),
        Tag::Div => apply(html::div(), description),
        Tag::Span => apply(html::span(), description),
        Tag::Label => apply(html::label(), description),
        Tag::Fieldset => apply(html::fieldset(), description),
        Tag::Input => apply(html::input(), description),
        Tag::Aside => apply(html::aside(), description),
        Tag::H1 => apply(html::h1(), description),
        Tag::H2 => apply(html::h2(), description),
        Tag::H3 => apply(html::h3(), description),
        Tag::H4 => apply(html::h4(), description),
        Tag::H5 => apply(html::h5(), description),
        Tag::H6 => apply(html::h6(), description),
        Tag::Li => apply(html::li(), description),
        Tag::Select => apply(html::select(), description),
        Tag::Option => apply(html::option(), description),
        Tag::Svg => apply(svg::svg(), description),
        Tag::Path => apply(svg::path(), description),
    }
}

impl IntoView for &Element {
    fn into_view(self) -> View {
        view_of(self)
    }
}

impl IntoView for Element {
    fn into_view(self) -> View {
        view_of(&self)
    }
}
