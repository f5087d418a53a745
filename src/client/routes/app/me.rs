use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::{MeasurementForm, Page};
use crate::model::measurement::MeasurementsDto;
use crate::model::profile::MeViewDto;

#[component]
pub fn Me() -> Element {
    let mut view = use_signal(|| None::<MeViewDto>);
    let mut load_error = use_signal(|| None::<String>);

    // Retrieve the profile view on page load
    #[cfg(feature = "web")]
    {
        let future = use_resource(|| async move { crate::client::util::api::get_me().await });

        match &*future.read_unchecked() {
            Some(Ok(fetched)) => {
                if view.read().is_none() {
                    view.set(Some(fetched.clone()));
                }
            }
            Some(Err(err)) => {
                tracing::error!(err);
                if load_error.read().is_none() {
                    load_error.set(Some(err.clone()));
                }
            }
            None => (),
        }
    }

    rsx!(
        Title { "My Sizes | SizeVault" }
        Meta {
            name: "description",
            content: "Your measurements and your children's, all in one place."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] p-6 flex flex-col gap-4",
                if let Some(err) = load_error() {
                    div { class: "alert alert-error", "{err}" }
                }
                if view.read().is_some() {
                    ProfileCard { view }
                    MeasurementsCard { view }
                    ChildrenCard { view }
                } else if load_error.read().is_none() {
                    div { class: "skeleton h-40 w-full" }
                    div { class: "skeleton h-64 w-full" }
                    div { class: "skeleton h-64 w-full" }
                }
            }
        }
    )
}

#[component]
fn ProfileCard(view: Signal<Option<MeViewDto>>) -> Element {
    let mut full_name = use_signal(|| {
        view.peek()
            .as_ref()
            .and_then(|v| v.profile.full_name.clone())
            .unwrap_or_default()
    });
    let mut error = use_signal(|| None::<String>);
    let mut saved = use_signal(|| false);

    let email = view
        .read()
        .as_ref()
        .map(|v| v.profile.email.clone())
        .unwrap_or_default();

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Profile"
                }
                p { "Signed in as {email}" }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
                form {
                    class: "flex flex-wrap items-end gap-2",
                    onsubmit: move |_| {
                        #[cfg(feature = "web")]
                        {
                            error.set(None);
                            saved.set(false);
                            spawn(async move {
                                use crate::client::util::api;
                                use crate::model::profile::UpdateNameDto;

                                let update = UpdateNameDto {
                                    full_name: full_name.peek().clone(),
                                };

                                match api::update_name(&update).await {
                                    Ok(updated) => {
                                        if let Some(current) = view.write().as_mut() {
                                            current.profile = updated;
                                        }
                                        saved.set(true);
                                    }
                                    Err(err) => error.set(Some(err)),
                                }
                            });
                        }
                    },
                    label { class: "form-control",
                        div { class: "label",
                            span { class: "label-text", "Display name" }
                        }
                        input {
                            class: "input input-bordered",
                            value: "{full_name}",
                            oninput: move |event| full_name.set(event.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        "Save name"
                    }
                    if saved() {
                        span { class: "badge badge-success", "Saved" }
                    }
                }
            }
        }
    )
}

#[component]
fn MeasurementsCard(view: Signal<Option<MeViewDto>>) -> Element {
    let mut error = use_signal(|| None::<String>);
    let mut saved = use_signal(|| false);

    let initial = view.peek().as_ref().and_then(|v| v.measurements.clone());

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "My Measurements"
                }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
                if saved() {
                    p { class: "text-success", "Measurements saved." }
                }
                MeasurementForm {
                    initial,
                    on_save: move |measurements: MeasurementsDto| {
                        #[cfg(feature = "web")]
                        {
                            error.set(None);
                            saved.set(false);
                            spawn(async move {
                                use crate::client::util::api;

                                match api::save_my_measurements(&measurements).await {
                                    Ok(stored) => {
                                        if let Some(current) = view.write().as_mut() {
                                            current.measurements = Some(stored);
                                        }
                                        saved.set(true);
                                    }
                                    Err(err) => error.set(Some(err)),
                                }
                            });
                        }
                    },
                }
            }
        }
    )
}

#[component]
fn ChildrenCard(view: Signal<Option<MeViewDto>>) -> Element {
    let mut child_name = use_signal(String::new);
    let mut child_birthdate = use_signal(String::new);
    let mut add_error = use_signal(|| None::<String>);
    let mut save_error = use_signal(|| None::<String>);
    let mut saved_child = use_signal(|| None::<i32>);

    let children = view
        .read()
        .as_ref()
        .map(|v| v.children.clone())
        .unwrap_or_default();

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Children"
                }
                if let Some(err) = add_error() {
                    p { class: "text-error", "{err}" }
                }
                form {
                    class: "flex flex-wrap items-end gap-2",
                    onsubmit: move |_| {
                        #[cfg(feature = "web")]
                        {
                            add_error.set(None);
                            spawn(async move {
                                use crate::client::util::api;
                                use crate::model::profile::CreateChildDto;

                                let child = CreateChildDto {
                                    name: child_name.peek().clone(),
                                    birthdate: child_birthdate.peek().clone(),
                                };

                                match api::create_child(&child).await {
                                    Ok(created) => {
                                        if let Some(current) = view.write().as_mut() {
                                            let insert_at = current
                                                .children
                                                .iter()
                                                .position(|existing| existing.birthdate > created.birthdate)
                                                .unwrap_or(current.children.len());
                                            current.children.insert(insert_at, created);
                                        }
                                        child_name.set(String::new());
                                        child_birthdate.set(String::new());
                                    }
                                    Err(err) => add_error.set(Some(err)),
                                }
                            });
                        }
                    },
                    label { class: "form-control",
                        div { class: "label",
                            span { class: "label-text", "Name" }
                        }
                        input {
                            class: "input input-bordered",
                            required: true,
                            value: "{child_name}",
                            oninput: move |event| child_name.set(event.value()),
                        }
                    }
                    label { class: "form-control",
                        div { class: "label",
                            span { class: "label-text", "Birthdate" }
                        }
                        input {
                            r#type: "date",
                            class: "input input-bordered",
                            required: true,
                            value: "{child_birthdate}",
                            oninput: move |event| child_birthdate.set(event.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        r#type: "submit",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaPlus
                        }
                        "Add child"
                    }
                }
                if children.is_empty() {
                    p { "No children added yet." }
                }
                if let Some(err) = save_error() {
                    p { class: "text-error", "{err}" }
                }
                div { class: "flex flex-col gap-4",
                    {children.iter().map(|child| {
                        let child_id = child.id;
                        let initial = child.measurements.clone();

                        rsx!(
                            div {
                                key: "{child_id}",
                                class: "border border-base-300 rounded-lg p-4 flex flex-col gap-2",
                                div { class: "flex items-center gap-2",
                                    h3 { class: "text-lg font-semibold", "{child.name}" }
                                    p { class: "text-sm", "Born {child.birthdate}" }
                                    if saved_child() == Some(child_id) {
                                        span { class: "badge badge-success", "Saved" }
                                    }
                                }
                                MeasurementForm {
                                    initial,
                                    on_save: move |measurements: MeasurementsDto| {
                                        #[cfg(feature = "web")]
                                        {
                                            save_error.set(None);
                                            saved_child.set(None);
                                            spawn(async move {
                                                use crate::client::util::api;

                                                match api::save_child_measurements(child_id, &measurements).await {
                                                    Ok(stored) => {
                                                        if let Some(current) = view.write().as_mut() {
                                                            if let Some(entry) = current
                                                                .children
                                                                .iter_mut()
                                                                .find(|entry| entry.id == child_id)
                                                            {
                                                                entry.measurements = Some(stored);
                                                            }
                                                        }
                                                        saved_child.set(Some(child_id));
                                                    }
                                                    Err(err) => save_error.set(Some(err)),
                                                }
                                            });
                                        }
                                    },
                                }
                            }
                        )
                    })}
                }
            }
        }
    )
}
