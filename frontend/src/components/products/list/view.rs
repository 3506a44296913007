//! Card grid of the product list.

use common::display::{format_vnd, tooltip, StockStatus};
use common::model::product::Product;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::products::image::stored_image;
use crate::routes::Route;

use super::messages::Msg;
use super::state::ProductList;

pub fn view(component: &ProductList, ctx: &Context<ProductList>) -> Html {
    let list = &component.list;
    let link = ctx.link();

    if list.is_loading() && list.products().is_empty() {
        return html! {
            <div class="loading-container">
                <div class="loading-spinner"></div>
                <p>{"Đang tải danh sách sản phẩm..."}</p>
            </div>
        };
    }

    html! {
        <div class="product-list">
            {
                if let Some(error) = list.error() {
                    html! { <div class="error-message">{ error }</div> }
                } else {
                    html! {}
                }
            }
            { search_summary(component) }
            <div class="products-grid">
                { for list.products().iter().map(|product| product_card(component, product, link)) }
            </div>
        </div>
    }
}

/// Line above the grid telling what the search matched.
fn search_summary(component: &ProductList) -> Html {
    let list = &component.list;
    let term = list.search().trim();
    if !list.config().enable_search || term.is_empty() || list.is_loading() {
        return html! {};
    }
    if list.products().is_empty() {
        html! { <p class="search-summary">{ format!("Không tìm thấy sản phẩm nào cho \"{}\"", term) }</p> }
    } else {
        html! {
            <p class="search-summary">
                { format!("{} sản phẩm cho \"{}\"", list.products().len(), term) }
            </p>
        }
    }
}

fn product_card(component: &ProductList, product: &Product, link: &Scope<ProductList>) -> Html {
    let id = product.id;
    let status = StockStatus::of(product);
    let data_tooltip = component
        .list
        .config()
        .show_tooltips
        .then(|| tooltip(product));

    html! {
        <div key={id} class="product-card" data-tooltip={data_tooltip}>
            <Link<Route> to={Route::ProductDetail { id }} classes="product-link">
                <div class="product-image-container">
                    { stored_image(product.primary_image(), &product.name, "product-image") }
                </div>
            </Link<Route>>
            <div class="product-info">
                <Link<Route> to={Route::ProductDetail { id }} classes="product-name-link">
                    <h3>{ product.name.clone() }</h3>
                </Link<Route>>
                <span class="product-category">{ product.category.clone() }</span>
                <div class="product-status">
                    <span class={status.css_class()}>{ status.label() }</span>
                </div>
                <p class="product-price">{ format_vnd(product.price) }</p>
                <div class="product-actions">
                    <button
                        class="action-btn cart-btn"
                        disabled={!status.can_add_to_cart()}
                        title="Thêm vào giỏ hàng"
                    >
                        {"🛒"}
                    </button>
                    <button
                        class="action-btn edit-btn"
                        onclick={link.callback(move |_| Msg::Edit(id))}
                        title="Sửa sản phẩm"
                    >
                        {"✎"}
                    </button>
                    <button
                        class="action-btn delete-btn"
                        onclick={link.callback(move |_| Msg::Delete(id))}
                        title="Xóa sản phẩm"
                    >
                        {"🗑"}
                    </button>
                </div>
            </div>
        </div>
    }
}
