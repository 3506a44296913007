//! Product list: one component for the home page and the searchable catalog.
//!
//! The [`ListConfig`](common::catalog::ListConfig) property decides ordering,
//! search filtering and card tooltips. The search term arrives as a property;
//! every change of it, and every successful delete, triggers a full reload.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProductListProps;
pub use state::ProductList;

use crate::api;

impl Component for ProductList {
    type Message = Msg;
    type Properties = ProductListProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut component = ProductList::new(props.config.clone(), props.search.clone());
        if component.list.request_load() {
            spawn_load(ctx);
        }
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        let config_reload = self.list.set_config(props.config.clone());
        let search_reload = self.list.set_search(props.search.clone());
        if config_reload || search_reload {
            spawn_load(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

/// Fetches the whole collection and reports back with `Msg::Loaded`.
pub(crate) fn spawn_load(ctx: &Context<ProductList>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::fetch_products().await;
        link.send_message(Msg::Loaded(result));
    });
}
