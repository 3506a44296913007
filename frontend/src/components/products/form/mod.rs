//! Product form used both to add a product and to edit one.
//!
//! Responsibilities
//! - Hold the draft (text fields, stored images kept, new files with their
//!   previews) through [`FormController`](common::form::FormController).
//! - When editing, load the product on first render before showing inputs.
//! - Submit the draft as a multipart request and navigate away on success.
//!
//! Previews are owned by the draft, so they are revoked when the component
//! is destroyed, whatever the reason.

use common::form::FormMode;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProductFormProps;
pub use state::ProductForm;

use crate::api;

impl Component for ProductForm {
    type Message = Msg;
    type Properties = ProductFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        ProductForm::new(ctx.props().mode)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().mode == old_props.mode {
            return false;
        }
        // Another product (or add vs edit): start over with a fresh draft.
        *self = ProductForm::new(ctx.props().mode);
        load_if_editing(self, ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            load_if_editing(self, ctx);
        }
    }
}

fn load_if_editing(component: &mut ProductForm, ctx: &Context<ProductForm>) {
    if component.loaded {
        return;
    }
    component.loaded = true;
    if let FormMode::Edit { id } = component.form.mode() {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(id, api::fetch_product(id).await));
        });
    }
}
