use crate::components::imports::*;

// Sets document.title as a side effect of rendering. Evaluation order is
// top to bottom, so only use it from top-level components.
pub struct PageTitle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
}

impl Component for PageTitle {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        gloo_utils::document().set_title(&ctx.props().title);
        html! {}
    }
}
