use common::catalog::DeleteOutcome;
use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::api;
use crate::helpers::{alert, confirm};
use crate::routes::Route;

use super::messages::Msg;
use super::spawn_load;
use super::state::ProductList;

pub const DELETE_CONFIRM: &str = "Bạn có chắc chắn muốn xóa sản phẩm này?";

pub fn update(component: &mut ProductList, ctx: &Context<ProductList>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(result) => {
            if component.list.on_loaded(result) {
                spawn_load(ctx);
            }
            true
        }
        Msg::Edit(id) => {
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::EditProduct { id });
            }
            false
        }
        Msg::Delete(id) => {
            let Some(id) = component.list.delete_target(id, confirm(DELETE_CONFIRM)) else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::delete_product(id).await;
                link.send_message(Msg::Deleted(result));
            });
            false
        }
        Msg::Deleted(result) => match component.list.on_deleted(result) {
            DeleteOutcome::Reload => {
                log!("Product deleted, reloading list");
                if component.list.request_load() {
                    spawn_load(ctx);
                }
                true
            }
            DeleteOutcome::Alert(message) => {
                alert(&message);
                false
            }
        },
    }
}
