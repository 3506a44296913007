//! View of the product form: text inputs, stored images kept from the
//! product (edit only), previews of newly picked files, submit button.

use common::form::{Field, FormMode, FormPhase};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::helpers::take_selected_files;
use crate::routes::Route;

use super::messages::Msg;
use super::state::ProductForm;

pub fn view(component: &ProductForm, ctx: &Context<ProductForm>) -> Html {
    let form = &component.form;
    let link = ctx.link();

    if form.phase() == FormPhase::Loading {
        return html! {
            <div class="loading-container">
                <div class="loading-spinner"></div>
                <p>{"Đang tải thông tin sản phẩm..."}</p>
            </div>
        };
    }

    let (root_class, title) = match form.mode() {
        FormMode::Create => ("add-product", "Thêm sản phẩm mới"),
        FormMode::Edit { .. } => ("edit-product", "Chỉnh sửa sản phẩm"),
    };
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class={root_class}>
            <div class="form-header">
                <h2>{ title }</h2>
                { back_link(form.mode()) }
            </div>

            {
                if let Some(error) = form.error() {
                    html! { <div class="error-message">{ error }</div> }
                } else {
                    html! {}
                }
            }

            <form {onsubmit}>
                { text_input(component, link, Field::Name, "name", "Tên sản phẩm:", "text", "Nhập tên sản phẩm") }
                { text_input(component, link, Field::Price, "price", "Giá:", "number", "Nhập giá sản phẩm") }
                { text_input(component, link, Field::Quantity, "quantity", "Số lượng:", "number", "Nhập số lượng") }
                { text_input(component, link, Field::Category, "category", "Danh mục:", "text", "Nhập danh mục") }
                { description_input(component, link) }

                <div class="form-group">
                    <label for="images">{"Hình ảnh sản phẩm:"}</label>
                    { existing_images(component, link) }
                    <input
                        type="file"
                        id="images"
                        multiple=true
                        accept="image/*"
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::FilesSelected(take_selected_files(&input))
                        })}
                    />
                    { new_previews(component, link) }
                </div>

                <div class="form-actions">
                    { submit_button(component) }
                </div>
            </form>
        </div>
    }
}

fn back_link(mode: FormMode) -> Html {
    match mode {
        FormMode::Create => html! {},
        FormMode::Edit { id } => html! {
            <Link<Route> to={Route::ProductDetail { id }} classes="back-link">
                {"← Quay lại"}
            </Link<Route>>
        },
    }
}

fn text_input(
    component: &ProductForm,
    link: &Scope<ProductForm>,
    field: Field,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    let min = (input_type == "number").then_some("0");
    html! {
        <div class="form-group">
            <label for={id}>{ label }</label>
            <input
                type={input_type}
                {id}
                value={component.form.draft().get(field).to_string()}
                {placeholder}
                {min}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::SetField(field, e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        </div>
    }
}

fn description_input(component: &ProductForm, link: &Scope<ProductForm>) -> Html {
    html! {
        <div class="form-group">
            <label for="description">{"Mô tả:"}</label>
            <textarea
                id="description"
                value={component.form.draft().description.clone()}
                placeholder="Nhập mô tả sản phẩm"
                rows="4"
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetField(Field::Description, e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        </div>
    }
}

/// Stored images of the edited product, each removable before saving.
fn existing_images(component: &ProductForm, link: &Scope<ProductForm>) -> Html {
    let images = component.form.draft().existing_images();
    if images.is_empty() {
        return html! {};
    }
    let config = api::config();
    html! {
        <div class="existing-images">
            { for images.iter().enumerate().map(|(index, reference)| html! {
                <div key={format!("{index}-{reference}")} class="preview-container">
                    <img
                        src={config.upload_url(reference)}
                        alt={format!("Ảnh {}", index + 1)}
                        class="preview-image"
                    />
                    <button
                        type="button"
                        class="remove-preview"
                        onclick={link.callback(move |_| Msg::RemoveExisting(index))}
                    >
                        {"×"}
                    </button>
                </div>
            }) }
        </div>
    }
}

fn new_previews(component: &ProductForm, link: &Scope<ProductForm>) -> Html {
    html! {
        <div class="image-previews">
            { for component.form.draft().attachments().iter().enumerate().map(|(index, attachment)| html! {
                <div key={attachment.preview.url().to_string()} class="preview-container">
                    <img
                        src={attachment.preview.url().to_string()}
                        alt={format!("Preview {}", index + 1)}
                        class="preview-image"
                    />
                    <button
                        type="button"
                        class="remove-preview"
                        onclick={link.callback(move |_| Msg::RemoveAttachment(index))}
                    >
                        {"×"}
                    </button>
                </div>
            }) }
        </div>
    }
}

fn submit_button(component: &ProductForm) -> Html {
    let submitting = component.form.is_submitting();
    let label = match (submitting, component.form.mode()) {
        (true, _) => "Đang xử lý...",
        (false, FormMode::Create) => "Thêm sản phẩm",
        (false, FormMode::Edit { .. }) => "Lưu thay đổi",
    };
    html! {
        <button type="submit" class="submit-btn" disabled={submitting}>
            { label }
        </button>
    }
}
