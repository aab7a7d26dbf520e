//! Car listing form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ListingFormProps`, `ListingFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, optionally pre-fill the form with the dataset passed
//!   through props. The photo preview always starts hidden, whatever the
//!   browser may have restored into the file input.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ListingFormProps;
pub use state::ListingFormComponent;

impl Component for ListingFormComponent {
    type Message = Msg;
    type Properties = ListingFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ListingFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(example) = ctx.props().initial {
                ctx.link().send_message(Msg::LoadExample(example));
            }
        }
    }
}
