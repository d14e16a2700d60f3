//! The gallery surface: one section per variant family.

use design_ui::components::button::BUTTON_VARIANTS;
use design_ui::components::typography::TYPE_VARIANTS;
use design_ui::prelude::*;
use leptos::{logging, *};

/// Renders a component result, surfacing configuration errors inline
/// instead of unwinding the whole gallery.
fn rendered(result: Result<Element, ConfigError>) -> View {
    match result {
        Ok(element) => element.into_view(),
        Err(err) => {
            logging::warn!("gallery render failed: {err}");
            view! { <pre class="GalleryError">{err.to_string()}</pre> }.into_view()
        }
    }
}

#[component]
fn ButtonSection() -> impl IntoView {
    let buttons = BUTTON_VARIANTS
        .iter()
        .map(|(path, variant)| {
            rendered(variant.render(&ButtonProps {
                children: Some(path.to_string()),
                attrs: Props::new().with(TEST_ID, format!("gallery-button-{path}")),
                ..ButtonProps::default()
            }))
        })
        .collect_view();
    view! {
        <section>
            <h2>"Buttons"</h2>
            {buttons}
        </section>
    }
}

#[component]
fn TypographySection() -> impl IntoView {
    let samples = TYPE_VARIANTS
        .iter()
        .map(|(path, variant)| {
            rendered(variant.render(&TypeProps {
                children: Some(path.to_string()),
                ..TypeProps::default()
            }))
        })
        .collect_view();
    view! {
        <section>
            <h2>"Typography"</h2>
            {samples}
        </section>
    }
}

#[component]
fn RadioSection() -> impl IntoView {
    let selected = create_rw_signal("green".to_string());
    let group = move || {
        rendered(render_radio_button_group(&RadioButtonGroupProps {
            name: "faveColor".to_string(),
            options: vec![
                RadioOption {
                    value: "green".to_string(),
                    label: "Green".to_string(),
                    ..RadioOption::default()
                },
                RadioOption {
                    value: "orange".to_string(),
                    label: "Orange".to_string(),
                    ..RadioOption::default()
                },
            ],
            value: Some(selected.get()),
            ..RadioButtonGroupProps::default()
        }))
    };
    // The form library owns option events; these stand-in controls play
    // that role for the gallery.
    view! {
        <section>
            <h2>"Radio group"</h2>
            {group}
            <button on:click=move |_| selected.set("green".to_string())>"Select green"</button>
            <button on:click=move |_| selected.set("orange".to_string())>"Select orange"</button>
        </section>
    }
}

#[component]
fn BirthdateSection() -> impl IntoView {
    let value = create_rw_signal(String::new());
    let message = move || {
        let validate = min_max_birthdate_validator(MinMaxDateConfig {
            min_birthdate: "1920-01-01".to_string(),
            max_birthdate: "2005-01-01".to_string(),
            min_age: 18,
            max_age: 100,
            date_format: DateFormat::MmDdYyyy,
            custom_error_message: None,
        });
        matches_format(&value.get(), DateFormat::MmDdYyyy)
            .or_else(|| validate(&value.get()))
            .unwrap_or_default()
    };
    let field = move || {
        let result = birthdate_input(
            &MaskedInputProps {
                name: "birthdate".to_string(),
                label_copy: "Birthdate".to_string(),
                placeholder: Some("mm/dd/yyyy".to_string()),
                current_value: Some(value.get()),
                current_error: Some(message()),
                attrs: Props::new().with(TEST_ID, "gallery-birthdate"),
                ..MaskedInputProps::default()
            },
            DateFormat::MmDdYyyy,
            None,
        );
        rendered(result.map(|field| field.element))
    };
    // The masking widget owns keystrokes; a plain input stands in for it.
    view! {
        <section>
            <h2>"Birthdate input"</h2>
            {field}
            <input
                placeholder="type here to drive the field"
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </section>
    }
}

#[component]
fn NumberSection() -> impl IntoView {
    let field = number_input(
        &MaskedInputProps {
            name: "estimatedIncome".to_string(),
            label_copy: "Estimated income".to_string(),
            all_caps: true,
            placeholder: Some("e.g. 50,000".to_string()),
            attrs: Props::new().with(TEST_ID, "gallery-income"),
            ..MaskedInputProps::default()
        },
        None,
        None,
    );
    view! {
        <section>
            <h2>"Number input"</h2>
            {rendered(field.map(|field| field.element))}
        </section>
    }
}

#[component]
fn SelectSection() -> impl IntoView {
    let element = render_select(&SelectProps {
        title: Some("Favorite color".to_string()),
        options: vec![
            SelectOption {
                value: "green".to_string(),
                label: "Green".to_string(),
            },
            SelectOption {
                value: "orange".to_string(),
                label: "Orange".to_string(),
            },
        ],
        value: Some("green".to_string()),
        name: Some("faveColor".to_string()),
        ..SelectProps::default()
    });
    view! {
        <section>
            <h2>"Select"</h2>
            {element}
        </section>
    }
}

#[component]
/// Gallery page contents.
pub fn GalleryApp() -> impl IntoView {
    view! {
        <main class="Gallery">
            <h1>"Design system gallery"</h1>
            <ButtonSection />
            <TypographySection />
            <RadioSection />
            <NumberSection />
            <BirthdateSection />
            <SelectSection />
        </main>
    }
}
