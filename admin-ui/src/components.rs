use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use admin_core::{
    submit_draft, CollectionClient, DeleteConfirm, FormController, ItemDraft, ItemField,
    ListController, Mode, SubmitOutcome, UserDraft, UserField,
};
use shared_types::{Item, Status, User};

use crate::api::{ItemsApi, UsersApi, ITEMS_PAGE_SIZE};

const AVATAR_INPUT_ID: &str = "user-avatar-input";

// ============================================================================
// Items (paginated variant)
// ============================================================================

#[component]
pub fn ItemsAdmin() -> Element {
    let mut list = use_signal(|| ListController::<Item>::paginated(ITEMS_PAGE_SIZE));
    let mut form = use_signal(FormController::<ItemDraft, web_sys::File>::new);
    let mut confirm = use_signal(DeleteConfirm::default);
    let mut saving = use_signal(|| false);
    let mut banner = use_signal(|| None::<String>);

    // Initial page load.
    use_effect(move || {
        spawn(async move {
            let mut ctrl = ListController::paginated(ITEMS_PAGE_SIZE);
            if let Err(e) = ctrl.load_page(&ItemsApi, 1).await {
                dioxus_logger::tracing::error!("Failed to fetch items: {e}");
            }
            list.set(ctrl);
        });
    });

    let step_page = use_callback(move |step: i32| {
        spawn(async move {
            let mut ctrl = list();
            let result = if step < 0 {
                ctrl.retreat(&ItemsApi).await
            } else {
                ctrl.advance(&ItemsApi).await
            };
            if let Err(e) = result {
                dioxus_logger::tracing::error!("Failed to fetch items: {e}");
            }
            list.set(ctrl);
        });
    });

    let on_submit = use_callback(move |_: ()| {
        // One submit in flight at a time; the button is disabled too.
        if saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            let mut current = form();
            match submit_draft(&ItemsApi, &mut current).await {
                SubmitOutcome::Saved(_) => {
                    banner.set(None);
                    let mut ctrl = list();
                    if let Err(e) = ctrl.refresh(&ItemsApi).await {
                        dioxus_logger::tracing::error!("Failed to refresh items: {e}");
                    }
                    list.set(ctrl);
                }
                SubmitOutcome::Invalid(fields) => {
                    banner.set(Some(format!("Required: {}", fields.join(", "))));
                }
                SubmitOutcome::UploadFailed(reason) => banner.set(Some(reason)),
                SubmitOutcome::SaveFailed(err) => banner.set(Some(err.to_string())),
            }
            form.set(current);
            saving.set(false);
        });
    });

    let on_confirm_delete = use_callback(move |_: ()| {
        let Some(id) = confirm.write().confirm() else {
            return;
        };
        spawn(async move {
            match ItemsApi.delete(&id).await {
                Ok(()) => {
                    let mut ctrl = list();
                    if let Err(e) = ctrl.refresh(&ItemsApi).await {
                        dioxus_logger::tracing::error!("Failed to refresh items: {e}");
                    }
                    list.set(ctrl);
                }
                // Stale-but-consistent: the current page stays as is.
                Err(e) => dioxus_logger::tracing::error!("Failed to delete item: {e}"),
            }
        });
    });

    let draft = form.read().draft().clone();
    let editing = form.read().mode() == Mode::Edit;
    let records = list.read().records().to_vec();
    let banner_text = banner().unwrap_or_default();
    let delete_label = confirm
        .read()
        .awaiting()
        .map(|(_, label)| label.to_string())
        .unwrap_or_default();
    let submit_label = if editing { "Update Item" } else { "Create Item" };
    let form_title = if editing { "Edit Item" } else { "Add New Item" };

    rsx! {
        div { class: "panel",
            h2 { "Item Management" }

            div { class: "form-card",
                h3 { "{form_title}" }

                if !banner_text.is_empty() {
                    div { class: "banner", "{banner_text}" }
                }

                input {
                    class: "field",
                    placeholder: "Item Name",
                    value: "{draft.item_name}",
                    oninput: move |e: FormEvent| {
                        let _ = form.write().update(ItemField::Name(e.value()));
                    },
                }
                input {
                    class: "field",
                    placeholder: "Category",
                    value: "{draft.item_category}",
                    oninput: move |e: FormEvent| {
                        let _ = form.write().update(ItemField::Category(e.value()));
                    },
                }
                input {
                    class: "field",
                    placeholder: "Price",
                    inputmode: "decimal",
                    value: "{draft.item_price}",
                    oninput: move |e: FormEvent| {
                        let _ = form.write().update(ItemField::Price(e.value()));
                    },
                }
                StatusSelect {
                    value: draft.status,
                    on_change: move |status| {
                        let _ = form.write().update(ItemField::Status(status));
                    },
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: move |_| on_submit.call(()),
                        if saving() { "Saving..." } else { "{submit_label}" }
                    }
                    if editing {
                        button {
                            class: "btn",
                            onclick: move |_| {
                                banner.set(None);
                                form.write().cancel();
                            },
                            "Cancel"
                        }
                    }
                }
            }

            if !delete_label.is_empty() {
                ConfirmBar {
                    label: delete_label.clone(),
                    on_confirm: move |_| on_confirm_delete.call(()),
                    on_dismiss: move |_| confirm.write().dismiss(),
                }
            }

            table { class: "records",
                thead {
                    tr {
                        th { "Name" }
                        th { "Category" }
                        th { "Price" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for item in records {
                        ItemRow {
                            key: "{item.id}",
                            item: item.clone(),
                            on_edit: move |item: Item| {
                                banner.set(None);
                                form.write().start_edit(&item);
                            },
                            on_delete: move |item: Item| {
                                confirm.write().request(item.id.clone(), item.item_name.clone());
                            },
                        }
                    }
                }
            }

            PaginationBar {
                can_retreat: list.read().can_retreat(),
                can_advance: list.read().can_advance(),
                label: list.read().page_label(),
                on_step: move |step| step_page.call(step),
            }
        }
    }
}

#[component]
fn ItemRow(item: Item, on_edit: Callback<Item>, on_delete: Callback<Item>) -> Element {
    let edit_item = item.clone();
    let delete_item = item.clone();

    rsx! {
        tr {
            td { "{item.item_name}" }
            td { "{item.item_category}" }
            td { "${item.item_price}" }
            td { "{item.status.as_str()}" }
            td {
                button {
                    class: "btn",
                    onclick: move |_| on_edit.call(edit_item.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_delete.call(delete_item.clone()),
                    "Delete"
                }
            }
        }
    }
}

// ============================================================================
// Users (non-paginated variant, with profile image upload)
// ============================================================================

#[component]
pub fn UsersAdmin() -> Element {
    let mut list = use_signal(ListController::<User>::load_all);
    let mut form = use_signal(FormController::<UserDraft, web_sys::File>::new);
    let mut confirm = use_signal(DeleteConfirm::default);
    let mut saving = use_signal(|| false);
    let mut banner = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            let mut ctrl = ListController::load_all();
            if let Err(e) = ctrl.load_page(&UsersApi, 1).await {
                dioxus_logger::tracing::error!("Failed to fetch users: {e}");
            }
            list.set(ctrl);
        });
    });

    let on_submit = use_callback(move |_: ()| {
        if saving() {
            return;
        }
        saving.set(true);
        spawn(async move {
            let mut current = form();
            match submit_draft(&UsersApi, &mut current).await {
                SubmitOutcome::Saved(_) => {
                    banner.set(None);
                    reset_file_input(AVATAR_INPUT_ID);
                    let mut ctrl = list();
                    if let Err(e) = ctrl.refresh(&UsersApi).await {
                        dioxus_logger::tracing::error!("Failed to refresh users: {e}");
                    }
                    list.set(ctrl);
                }
                SubmitOutcome::Invalid(fields) => {
                    banner.set(Some(format!("Required: {}", fields.join(", "))));
                }
                SubmitOutcome::UploadFailed(reason) => banner.set(Some(reason)),
                SubmitOutcome::SaveFailed(err) => banner.set(Some(err.to_string())),
            }
            form.set(current);
            saving.set(false);
        });
    });

    let on_confirm_delete = use_callback(move |_: ()| {
        let Some(id) = confirm.write().confirm() else {
            return;
        };
        spawn(async move {
            match UsersApi.delete(&id).await {
                Ok(()) => {
                    let mut ctrl = list();
                    if let Err(e) = ctrl.refresh(&UsersApi).await {
                        dioxus_logger::tracing::error!("Failed to refresh users: {e}");
                    }
                    list.set(ctrl);
                }
                Err(e) => dioxus_logger::tracing::error!("Failed to delete user: {e}"),
            }
        });
    });

    let draft = form.read().draft().clone();
    let editing = form.read().mode() == Mode::Edit;
    let records = list.read().records().to_vec();
    let banner_text = banner().unwrap_or_default();
    let pending_file_name = form
        .read()
        .pending_file()
        .map(|f| f.name())
        .unwrap_or_default();
    let delete_label = confirm
        .read()
        .awaiting()
        .map(|(_, label)| label.to_string())
        .unwrap_or_default();
    let submit_label = if editing { "Update User" } else { "Create User" };
    let form_title = if editing { "Edit User" } else { "Add New User" };

    rsx! {
        div { class: "panel",
            h2 { "User Management" }

            div { class: "form-card",
                h3 { "{form_title}" }

                if !banner_text.is_empty() {
                    div { class: "banner", "{banner_text}" }
                }

                input {
                    class: "field",
                    placeholder: "Username",
                    value: "{draft.username}",
                    readonly: editing,
                    oninput: move |e: FormEvent| {
                        if let Err(err) = form.write().update(UserField::Username(e.value())) {
                            dioxus_logger::tracing::warn!("{err}");
                        }
                    },
                }
                input {
                    class: "field",
                    placeholder: "Email",
                    value: "{draft.email}",
                    oninput: move |e: FormEvent| {
                        let _ = form.write().update(UserField::Email(e.value()));
                    },
                }
                input {
                    class: "field",
                    placeholder: "First Name",
                    value: "{draft.firstname}",
                    oninput: move |e: FormEvent| {
                        let _ = form.write().update(UserField::Firstname(e.value()));
                    },
                }
                input {
                    class: "field",
                    placeholder: "Last Name",
                    value: "{draft.lastname}",
                    oninput: move |e: FormEvent| {
                        let _ = form.write().update(UserField::Lastname(e.value()));
                    },
                }
                // No password field in Edit mode: a blank value could be
                // mistaken for "clear the password".
                if !editing {
                    input {
                        class: "field",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{draft.password}",
                        oninput: move |e: FormEvent| {
                            let _ = form.write().update(UserField::Password(e.value()));
                        },
                    }
                }
                StatusSelect {
                    value: draft.status,
                    on_change: move |status| {
                        let _ = form.write().update(UserField::Status(status));
                    },
                }

                div { class: "file-row",
                    label { r#for: AVATAR_INPUT_ID, "Profile image" }
                    input {
                        id: AVATAR_INPUT_ID,
                        r#type: "file",
                        accept: "image/*",
                        onchange: move |_| {
                            if let Some(file) = selected_file(AVATAR_INPUT_ID) {
                                form.write().select_file(file);
                            }
                        },
                    }
                    if !pending_file_name.is_empty() {
                        span { class: "file-pending", "{pending_file_name} (not uploaded yet)" }
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: saving(),
                        onclick: move |_| on_submit.call(()),
                        if saving() { "Saving..." } else { "{submit_label}" }
                    }
                    if editing {
                        button {
                            class: "btn",
                            onclick: move |_| {
                                banner.set(None);
                                reset_file_input(AVATAR_INPUT_ID);
                                form.write().cancel();
                            },
                            "Cancel"
                        }
                    }
                }
            }

            if !delete_label.is_empty() {
                ConfirmBar {
                    label: delete_label.clone(),
                    on_confirm: move |_| on_confirm_delete.call(()),
                    on_dismiss: move |_| confirm.write().dismiss(),
                }
            }

            table { class: "records",
                thead {
                    tr {
                        th { "" }
                        th { "Username" }
                        th { "Email" }
                        th { "Name" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for user in records {
                        UserRow {
                            key: "{user.id}",
                            user: user.clone(),
                            on_edit: move |user: User| {
                                banner.set(None);
                                reset_file_input(AVATAR_INPUT_ID);
                                form.write().start_edit(&user);
                            },
                            on_delete: move |user: User| {
                                confirm.write().request(user.id.clone(), user.username.clone());
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: Callback<User>, on_delete: Callback<User>) -> Element {
    let edit_user = user.clone();
    let delete_user = user.clone();
    let avatar = user.profile_image.clone().unwrap_or_default();

    rsx! {
        tr {
            td {
                if !avatar.is_empty() {
                    img { class: "avatar", src: "{avatar}", alt: "{user.username}" }
                }
            }
            td { "{user.username}" }
            td { "{user.email}" }
            td { "{user.firstname} {user.lastname}" }
            td { "{user.status.as_str()}" }
            td {
                button {
                    class: "btn",
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_delete.call(delete_user.clone()),
                    "Delete"
                }
            }
        }
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

#[component]
fn StatusSelect(value: Status, on_change: Callback<Status>) -> Element {
    rsx! {
        select {
            class: "field",
            value: "{value.as_str()}",
            onchange: move |e: FormEvent| {
                if let Some(status) = Status::from_label(&e.value()) {
                    on_change.call(status);
                }
            },
            option { value: "Active", "Active" }
            option { value: "Inactive", "Inactive" }
        }
    }
}

#[component]
fn ConfirmBar(label: String, on_confirm: Callback<()>, on_dismiss: Callback<()>) -> Element {
    rsx! {
        div { class: "confirm-bar",
            span { "Delete \"{label}\"? This cannot be undone." }
            button {
                class: "btn btn-danger",
                onclick: move |_| on_confirm.call(()),
                "Delete"
            }
            button {
                class: "btn",
                onclick: move |_| on_dismiss.call(()),
                "Cancel"
            }
        }
    }
}

#[component]
fn PaginationBar(
    can_retreat: bool,
    can_advance: bool,
    label: String,
    on_step: Callback<i32>,
) -> Element {
    rsx! {
        div { class: "pagination",
            button {
                class: "btn",
                disabled: !can_retreat,
                onclick: move |_| on_step.call(-1),
                "Previous"
            }
            span { "{label}" }
            button {
                class: "btn",
                disabled: !can_advance,
                onclick: move |_| on_step.call(1),
                "Next"
            }
        }
    }
}

fn selected_file(input_id: &str) -> Option<web_sys::File> {
    let document = web_sys::window()?.document()?;
    let input = document
        .get_element_by_id(input_id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

fn reset_file_input(input_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(input) = document
        .get_element_by_id(input_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        input.set_value("");
    }
}

// Console-wide CSS
pub const ADMIN_STYLES: &str = r#"
body {
    margin: 0;
    background: #0f172a;
    color: #f8fafc;
    font-family: system-ui, sans-serif;
}

.console {
    max-width: 860px;
    margin: 0 auto;
    padding: 1.5rem;
}

.tabs {
    display: flex;
    gap: 0.5rem;
    margin-bottom: 1rem;
}

.panel h2 {
    margin: 0 0 1rem 0;
}

.form-card {
    display: grid;
    gap: 0.6rem;
    padding: 1rem;
    margin-bottom: 1.25rem;
    background: #1e293b;
    border: 1px solid #334155;
    border-radius: 8px;
}

.form-card h3 {
    margin: 0;
}

.field {
    padding: 0.55rem 0.75rem;
    background: #0f172a;
    color: #f8fafc;
    border: 1px solid #334155;
    border-radius: 6px;
    font-size: 0.9375rem;
}

.field:focus {
    outline: none;
    border-color: #3b82f6;
}

.banner {
    padding: 0.5rem 0.75rem;
    background: #7f1d1d;
    border: 1px solid #b91c1c;
    border-radius: 6px;
    font-size: 0.875rem;
}

.form-actions {
    display: flex;
    gap: 0.5rem;
}

.file-row {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    font-size: 0.875rem;
}

.file-pending {
    color: #f59e0b;
    font-style: italic;
}

.btn {
    padding: 0.5rem 0.9rem;
    background: #1e293b;
    color: #f8fafc;
    border: 1px solid #334155;
    border-radius: 6px;
    cursor: pointer;
    font-size: 0.875rem;
}

.btn:hover:not(:disabled) {
    border-color: #3b82f6;
}

.btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.btn-primary {
    background: #3b82f6;
    border-color: #3b82f6;
}

.btn-danger {
    color: #fca5a5;
    border-color: #7f1d1d;
}

.tab-active {
    background: #3b82f6;
    border-color: #3b82f6;
}

.confirm-bar {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.6rem 0.9rem;
    margin-bottom: 1rem;
    background: #422006;
    border: 1px solid #b45309;
    border-radius: 6px;
}

.records {
    width: 100%;
    border-collapse: collapse;
    margin-bottom: 1.25rem;
}

.records th,
.records td {
    padding: 0.5rem 0.6rem;
    border-bottom: 1px solid #334155;
    text-align: left;
    font-size: 0.9rem;
}

.records td .btn {
    margin-right: 0.4rem;
}

.avatar {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    object-fit: cover;
}

.pagination {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
}
"#;
