use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUserGroup;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::Page;
use crate::model::family::{FamilyOverviewDto, InviteDto};
use crate::model::measurement::MeasurementsDto;

/// Re-fetch the overview and move the page state to whatever came back.
#[cfg(feature = "web")]
async fn reload_overview(
    member: Option<String>,
    mut overview: Signal<Option<FamilyOverviewDto>>,
    mut not_in_family: Signal<bool>,
    mut error: Signal<Option<String>>,
) {
    use crate::client::util::api;

    match api::get_family_overview(member.as_deref()).await {
        Ok(Some(fetched)) => {
            overview.set(Some(fetched));
            not_in_family.set(false);
        }
        Ok(None) => {
            overview.set(None);
            not_in_family.set(true);
        }
        Err(err) => error.set(Some(err)),
    }
}

#[component]
pub fn Family() -> Element {
    let mut overview = use_signal(|| None::<FamilyOverviewDto>);
    let mut not_in_family = use_signal(|| false);
    let mut load_error = use_signal(|| None::<String>);

    // Retrieve the family overview on page load
    #[cfg(feature = "web")]
    {
        let future =
            use_resource(|| async move { crate::client::util::api::get_family_overview(None).await });

        match &*future.read_unchecked() {
            Some(Ok(Some(fetched))) => {
                if overview.read().is_none() && !*not_in_family.read() {
                    overview.set(Some(fetched.clone()));
                }
            }
            Some(Ok(None)) => {
                if overview.read().is_none() {
                    not_in_family.set(true);
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
        Title { "Family | SizeVault" }
        Meta {
            name: "description",
            content: "Your family group, its members, and their sizes."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] p-6 flex flex-col gap-4",
                if let Some(err) = load_error() {
                    div { class: "alert alert-error", "{err}" }
                }
                if *not_in_family.read() {
                    div { class: "flex flex-wrap gap-4",
                        CreateFamilyCard { overview, not_in_family }
                        JoinFamilyCard { overview, not_in_family }
                    }
                } else if overview.read().is_some() {
                    MembersCard { overview, not_in_family }
                    InviteCard { }
                    MemberDetailCard { overview }
                } else if load_error.read().is_none() {
                    div { class: "skeleton h-64 w-full" }
                    div { class: "skeleton h-40 w-full" }
                }
            }
        }
    )
}

#[component]
fn CreateFamilyCard(
    overview: Signal<Option<FamilyOverviewDto>>,
    not_in_family: Signal<bool>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    rsx!(
        div {
            class: "card shadow-sm flex-1 min-w-80",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaUserGroup
                    }
                    "Start a family group"
                }
                p { "Create a group, then invite the rest of the family." }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
                form {
                    class: "flex flex-col gap-2",
                    onsubmit: move |_| {
                        #[cfg(feature = "web")]
                        {
                            error.set(None);
                            is_pending.set(true);
                            spawn(async move {
                                use crate::client::util::api;
                                use crate::model::family::CreateFamilyDto;

                                let family = CreateFamilyDto {
                                    name: name.peek().clone(),
                                };

                                match api::create_family(&family).await {
                                    Ok(_) => {
                                        reload_overview(None, overview, not_in_family, error).await;
                                    }
                                    Err(err) => error.set(Some(err)),
                                }

                                is_pending.set(false);
                            });
                        }
                    },
                    label { class: "form-control",
                        div { class: "label",
                            span { class: "label-text", "Family name" }
                        }
                        input {
                            class: "input input-bordered",
                            required: true,
                            value: "{name}",
                            oninput: move |event| name.set(event.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: is_pending(),
                        "Create family"
                    }
                }
            }
        }
    )
}

#[component]
fn JoinFamilyCard(
    overview: Signal<Option<FamilyOverviewDto>>,
    not_in_family: Signal<bool>,
) -> Element {
    let mut token = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    rsx!(
        div {
            class: "card shadow-sm flex-1 min-w-80",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Join with an invite"
                }
                p { "Paste the invite token you were sent, or just open the invite link." }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
                form {
                    class: "flex flex-col gap-2",
                    onsubmit: move |_| {
                        #[cfg(feature = "web")]
                        {
                            error.set(None);
                            is_pending.set(true);
                            spawn(async move {
                                use crate::client::util::api;
                                use crate::model::family::AcceptInviteDto;

                                let invite = AcceptInviteDto {
                                    token: token.peek().clone(),
                                };

                                match api::accept_invite(&invite).await {
                                    Ok(_) => {
                                        reload_overview(None, overview, not_in_family, error).await;
                                    }
                                    Err(err) => error.set(Some(err)),
                                }

                                is_pending.set(false);
                            });
                        }
                    },
                    label { class: "form-control",
                        div { class: "label",
                            span { class: "label-text", "Invite token" }
                        }
                        input {
                            class: "input input-bordered",
                            required: true,
                            value: "{token}",
                            oninput: move |event| token.set(event.value()),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: is_pending(),
                        "Join family"
                    }
                }
            }
        }
    )
}

#[component]
fn MembersCard(
    overview: Signal<Option<FamilyOverviewDto>>,
    not_in_family: Signal<bool>,
) -> Element {
    let mut error = use_signal(|| None::<String>);

    let Some(current) = overview.read().clone() else {
        return rsx!();
    };

    let family_name = current.family.name.clone();
    let selected_id = current.selected.profile_id.clone();

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaUserGroup
                    }
                    "{family_name}"
                }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-md",
                        thead {
                            tr {
                                th { "Member" }
                                th { "Role" }
                                th { "Joined" }
                                th { }
                            }
                        }
                        tbody {
                            {current.members.iter().map(|member| {
                                let profile_id = member.profile_id.clone();
                                let is_selected = member.profile_id == selected_id;

                                rsx!(
                                    tr {
                                        key: "{member.profile_id}",
                                        td { "{member.display_name}" }
                                        td {
                                            span { class: "badge badge-outline", "{member.role}" }
                                        }
                                        td {
                                            {member.joined_at.format("%Y-%m-%d").to_string()}
                                        }
                                        td {
                                            button {
                                                class: if is_selected {
                                                    "btn btn-sm btn-primary"
                                                } else {
                                                    "btn btn-sm btn-outline"
                                                },
                                                onclick: move |_| {
                                                    #[cfg(feature = "web")]
                                                    {
                                                        let member_id = profile_id.clone();
                                                        error.set(None);
                                                        spawn(async move {
                                                            reload_overview(
                                                                Some(member_id),
                                                                overview,
                                                                not_in_family,
                                                                error,
                                                            )
                                                            .await;
                                                        });
                                                    }
                                                },
                                                "View sizes"
                                            }
                                        }
                                    }
                                )
                            })}
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn InviteCard() -> Element {
    let mut invite = use_signal(|| None::<InviteDto>);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Invite someone"
                }
                p {
                    "Anyone with the link below can join this family until the link
                    expires, seven days after it is created."
                }
                if let Some(err) = error() {
                    p { class: "text-error", "{err}" }
                }
                button {
                    class: "btn btn-primary w-48",
                    disabled: is_pending(),
                    onclick: move |_| {
                        #[cfg(feature = "web")]
                        {
                            error.set(None);
                            is_pending.set(true);
                            spawn(async move {
                                use crate::client::util::api;

                                match api::create_invite().await {
                                    Ok(created) => invite.set(Some(created)),
                                    Err(err) => error.set(Some(err)),
                                }

                                is_pending.set(false);
                            });
                        }
                    },
                    "Create invite link"
                }
                if let Some(created) = invite() {
                    div { class: "flex flex-col gap-1",
                        p { class: "font-semibold", "Share this link:" }
                        code { class: "bg-base-200 rounded p-2 break-all", "{created.invite_url}" }
                        p { class: "text-sm",
                            {format!("Expires {}", created.expires_at.format("%Y-%m-%d %H:%M UTC"))}
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn MemberDetailCard(overview: Signal<Option<FamilyOverviewDto>>) -> Element {
    let Some(current) = overview.read().clone() else {
        return rsx!();
    };

    let detail = current.selected;
    let detail_name = current
        .members
        .iter()
        .find(|member| member.profile_id == detail.profile_id)
        .map(|member| member.display_name.clone())
        .unwrap_or_else(|| "Member".to_string());

    rsx!(
        div {
            class: "card shadow-sm w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Sizes for {detail_name}"
                }
                MeasurementTable { measurements: detail.measurements.clone() }
                if detail.children.is_empty() {
                    p { "No children added by this member." }
                } else {
                    h3 { class: "text-lg", "Children" }
                    div { class: "flex flex-col gap-4",
                        {detail.children.iter().map(|child| rsx!(
                            div {
                                key: "{child.id}",
                                class: "border border-base-300 rounded-lg p-4 flex flex-col gap-2",
                                div { class: "flex items-center gap-2",
                                    h3 { class: "text-lg font-semibold", "{child.name}" }
                                    p { class: "text-sm", "Born {child.birthdate}" }
                                }
                                MeasurementTable { measurements: child.measurements.clone() }
                            }
                        ))}
                    }
                }
            }
        }
    )
}

#[component]
fn MeasurementTable(measurements: Option<MeasurementsDto>) -> Element {
    let measurements = measurements.unwrap_or_default();

    let rows = [
        ("Height", measurements.height_cm, "cm"),
        ("Weight", measurements.weight_kg, "kg"),
        ("Chest", measurements.chest_cm, "cm"),
        ("Waist", measurements.waist_cm, "cm"),
        ("Hips", measurements.hips_cm, "cm"),
        ("Inseam", measurements.inseam_cm, "cm"),
        ("Shoe size", measurements.shoe_size, "EU"),
    ];

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { class: "w-48", "Measurement" }
                        th { "Value" }
                    }
                }
                tbody {
                    {rows.iter().map(|(label, value, unit)| {
                        let value = match value {
                            Some(value) => format!("{} {}", value, unit),
                            None => "-".to_string(),
                        };

                        rsx!(
                            tr {
                                td { class: "w-48", "{label}" }
                                td { "{value}" }
                            }
                        )
                    })}
                }
            }
        }
    )
}
