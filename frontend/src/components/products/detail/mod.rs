//! Product page: gallery, price, stock and description of one product.

use common::catalog::ProductPage;
use common::display::{format_vnd, StockStatus};
use common::error::Result;
use common::model::product::Product;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::products::image::stored_image;
use crate::routes::Route;

/// Properties for the `ProductDetail` component.
#[derive(Properties, PartialEq, Clone)]
pub struct ProductDetailProps {
    /// Product to show, taken from the `/product/:id` route.
    pub id: i64,
}

/// Messages of the product page. `Loaded` carries the id it was fetched
/// for; answers for an id the page no longer shows are dropped.
pub enum Msg {
    Loaded(i64, Result<Product>),
    SelectImage(usize),
}

pub struct ProductDetail {
    page: ProductPage,
}

impl Component for ProductDetail {
    type Message = Msg;
    type Properties = ProductDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let id = ctx.props().id;
        spawn_load(ctx, id);
        Self {
            page: ProductPage::new(id),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(id, result) => self.page.on_loaded(id, result),
            Msg::SelectImage(index) => self.page.select_image(index),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let id = ctx.props().id;
        if !self.page.show(id) {
            return false;
        }
        spawn_load(ctx, id);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.page.is_loading() {
            return html! {
                <div class="loading-container">
                    <div class="loading-spinner"></div>
                    <p>{"Đang tải thông tin sản phẩm..."}</p>
                </div>
            };
        }
        match (self.page.product(), self.page.error()) {
            (Some(product), _) => self.product_view(product, ctx),
            (None, Some(error)) => html! {
                <div class="product-detail">
                    <div class="error-message">{ error }</div>
                    <Link<Route> to={Route::Home} classes="back-link">{"Quay lại"}</Link<Route>>
                </div>
            },
            (None, None) => html! {},
        }
    }
}

impl ProductDetail {
    fn product_view(&self, product: &Product, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let status = StockStatus::of(product);
        let selected = self.page.selected_image();

        html! {
            <div class="product-detail">
                <div class="product-detail-header">
                    <Link<Route> to={Route::Home} classes="back-link">{"← Quay lại"}</Link<Route>>
                    <Link<Route> to={Route::EditProduct { id: product.id }} classes="edit-link">
                        {"Sửa sản phẩm"}
                    </Link<Route>>
                </div>
                <div class="product-detail-body">
                    <div class="product-gallery">
                        { stored_image(selected, &product.name, "main-image") }
                        <div class="thumbnails">
                            { for product.image_urls.iter().enumerate().map(|(index, reference)| {
                                let class = if index == self.page.selected_index() { "thumbnail active" } else { "thumbnail" };
                                html! {
                                    <button key={index} type="button" {class}
                                        onclick={link.callback(move |_| Msg::SelectImage(index))}>
                                        { stored_image(Some(reference), &product.name, "thumbnail-image") }
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                    <div class="product-summary">
                        <h2>{ product.name.clone() }</h2>
                        <span class="product-category">{ product.category.clone() }</span>
                        <p class="product-price">{ format_vnd(product.price) }</p>
                        <div class="product-status">
                            <span class={status.css_class()}>{ status.label() }</span>
                            {
                                if status.can_add_to_cart() {
                                    html! { <span class="stock-count">{ format!(" ({} sản phẩm)", product.quantity) }</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                        <p class="product-description">{ product.description.clone() }</p>
                        <button class="cart-btn" disabled={!status.can_add_to_cart()}>
                            {"Thêm vào giỏ hàng"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}

/// Fetches product `id` and reports back with `Msg::Loaded`, tagged with
/// that id.
fn spawn_load(ctx: &Context<ProductDetail>, id: i64) {
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::Loaded(id, api::fetch_product(id).await));
    });
}
