use dioxus::prelude::*;

use crate::model::measurement::MeasurementsDto;

fn number_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_field(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

/// Editable measurement set, used for the signed-in profile and for each
/// child. Blank fields save as empty, every save replaces the whole set.
#[component]
pub fn MeasurementForm(
    initial: Option<MeasurementsDto>,
    on_save: EventHandler<MeasurementsDto>,
) -> Element {
    let MeasurementsDto {
        height_cm,
        weight_kg,
        chest_cm,
        waist_cm,
        hips_cm,
        inseam_cm,
        shoe_size,
    } = initial.unwrap_or_default();

    let height_cm = use_signal(move || number_field(height_cm));
    let weight_kg = use_signal(move || number_field(weight_kg));
    let chest_cm = use_signal(move || number_field(chest_cm));
    let waist_cm = use_signal(move || number_field(waist_cm));
    let hips_cm = use_signal(move || number_field(hips_cm));
    let inseam_cm = use_signal(move || number_field(inseam_cm));
    let shoe_size = use_signal(move || number_field(shoe_size));

    rsx!(
        form {
            class: "flex flex-col gap-2",
            onsubmit: move |_| {
                on_save.call(MeasurementsDto {
                    height_cm: parse_field(&height_cm.read()),
                    weight_kg: parse_field(&weight_kg.read()),
                    chest_cm: parse_field(&chest_cm.read()),
                    waist_cm: parse_field(&waist_cm.read()),
                    hips_cm: parse_field(&hips_cm.read()),
                    inseam_cm: parse_field(&inseam_cm.read()),
                    shoe_size: parse_field(&shoe_size.read()),
                });
            },
            div { class: "grid grid-cols-2 gap-2",
                MeasurementInput { label: "Height", unit: "cm", field: height_cm }
                MeasurementInput { label: "Weight", unit: "kg", field: weight_kg }
                MeasurementInput { label: "Chest", unit: "cm", field: chest_cm }
                MeasurementInput { label: "Waist", unit: "cm", field: waist_cm }
                MeasurementInput { label: "Hips", unit: "cm", field: hips_cm }
                MeasurementInput { label: "Inseam", unit: "cm", field: inseam_cm }
                MeasurementInput { label: "Shoe size", unit: "EU", field: shoe_size }
            }
            div {
                button {
                    class: "btn btn-primary w-48",
                    r#type: "submit",
                    "Save measurements"
                }
            }
        }
    )
}

#[component]
fn MeasurementInput(label: &'static str, unit: &'static str, field: Signal<String>) -> Element {
    rsx!(
        label { class: "form-control w-full",
            div { class: "label",
                span { class: "label-text", "{label}" }
                span { class: "label-text-alt", "{unit}" }
            }
            input {
                r#type: "number",
                step: "0.1",
                min: "0",
                class: "input input-bordered w-full",
                value: "{field}",
                oninput: move |event| {
                    let mut field = field;
                    field.set(event.value());
                },
            }
        }
    )
}
