//! Page frame shared by every route: header with navigation and search box,
//! the routed content, and the footer.

use common::catalog::search_term_from_query;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::history::Location;
use yew_router::prelude::*;
use yew_router::scope_ext::LocationHandle;

use crate::routes::{Route, SearchQuery};

/// Properties for the `Layout` component.
#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    /// Routed page rendered between header and footer.
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    SetSearch(String),
    Search,
    /// The URL changed; show its search term in the box.
    LocationChanged(Location),
}

/// State of the `Layout` component.
pub struct Layout {
    /// Current content of the header search box.
    search: String,

    /// Keeps the location listener registered while the layout lives.
    _location_listener: Option<LocationHandle>,
}

impl Component for Layout {
    type Message = Msg;
    type Properties = LayoutProps;

    /// Seeds the search box from the URL the page was opened with, so a
    /// direct visit to `/products?search=x` shows `x`.
    fn create(ctx: &Context<Self>) -> Self {
        let search = ctx
            .link()
            .location()
            .map(|location| search_term_from_query(location.query_str()))
            .unwrap_or_default();
        let _location_listener = ctx
            .link()
            .add_location_listener(ctx.link().callback(Msg::LocationChanged));
        Self {
            search,
            _location_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LocationChanged(location) => {
                let search = search_term_from_query(location.query_str());
                if search == self.search {
                    return false;
                }
                self.search = search;
                true
            }
            Msg::SetSearch(value) => {
                self.search = value;
                false
            }
            Msg::Search => {
                if let Some(navigator) = ctx.link().navigator() {
                    let search = self.search.trim().to_string();
                    if search.is_empty() {
                        navigator.push(&Route::Products);
                    } else if let Err(err) =
                        navigator.push_with_query(&Route::Products, &SearchQuery { search })
                    {
                        gloo_console::error!("Could not open search results:", err.to_string());
                    }
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Search
        });
        let oninput = link.callback(|e: InputEvent| {
            Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
        });

        html! {
            <div class="layout">
                <header class="header">
                    <div class="header-container">
                        <Link<Route> to={Route::Home} classes="logo">
                            <h1>{"E-Commerce"}</h1>
                        </Link<Route>>
                        <nav class="nav-links">
                            <Link<Route> to={Route::Home} classes="nav-link">{"Trang chủ"}</Link<Route>>
                            <Link<Route> to={Route::Products} classes="nav-link">{"Sản phẩm"}</Link<Route>>
                            <Link<Route> to={Route::AddProduct} classes="nav-link">{"Thêm sản phẩm"}</Link<Route>>
                        </nav>
                        <form class="search-form" {onsubmit}>
                            <input
                                type="search"
                                placeholder="Tìm kiếm sản phẩm..."
                                value={self.search.clone()}
                                {oninput}
                            />
                            <button type="submit">{"Tìm"}</button>
                        </form>
                    </div>
                </header>

                <main class="main-content">
                    { ctx.props().children.clone() }
                </main>

                { footer() }
            </div>
        }
    }
}

fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-section">
                    <h3>{"Về chúng tôi"}</h3>
                    <p>{"E-Commerce - Nền tảng mua sắm trực tuyến hàng đầu"}</p>
                </div>
                <div class="footer-section">
                    <h3>{"Liên hệ"}</h3>
                    <p>{"Email: contact@ecommerce.com"}</p>
                    <p>{"Điện thoại: (84) 123-456-789"}</p>
                </div>
                <div class="footer-section">
                    <h3>{"Theo dõi"}</h3>
                    <div class="social-links">
                        <a href="#" class="social-link">{"Facebook"}</a>
                        <a href="#" class="social-link">{"Instagram"}</a>
                        <a href="#" class="social-link">{"Twitter"}</a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 E-Commerce. All rights reserved."}</p>
            </div>
        </footer>
    }
}
