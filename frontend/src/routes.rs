//! Client-side routes of the storefront.
//!
//! The catalog page reads its search term from the `search` query parameter
//! and hands it to the list as a property, so the list never looks at the URL
//! itself.

use common::catalog::{search_term_from_query, ListConfig};
use common::form::FormMode;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::products::detail::ProductDetail;
use crate::components::products::form::ProductForm;
use crate::components::products::list::ProductList;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/products")]
    Products,
    #[at("/product/:id")]
    ProductDetail { id: i64 },
    #[at("/add-product")]
    AddProduct,
    #[at("/product/edit/:id")]
    EditProduct { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string of [`Route::Products`], written when the header search box
/// is submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
}

/// Renders the page of `route` inside the layout.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <ProductList config={ListConfig::home()} /> },
        Route::Products => html! { <CatalogPage /> },
        Route::ProductDetail { id } => html! { <ProductDetail {id} /> },
        Route::AddProduct => html! { <ProductForm mode={FormMode::Create} /> },
        Route::EditProduct { id } => html! { <ProductForm mode={FormMode::Edit { id }} /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h2>{"Không tìm thấy trang"}</h2>
                <Link<Route> to={Route::Home}>{"Về trang chủ"}</Link<Route>>
            </div>
        },
    }
}

#[function_component]
fn CatalogPage() -> Html {
    let search = use_location()
        .map(|location| search_term_from_query(location.query_str()))
        .unwrap_or_default();

    html! {
        <ProductList config={ListConfig::searchable()} {search} />
    }
}
