use crate::router::Route;
use crate::switch::switch;

use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[function_component(App)]
pub fn app() -> Html {
    use crate::components::{DefaultStyling, WithTheme};

    html! {
        <WithTheme>
            <DefaultStyling>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </DefaultStyling>
        </WithTheme>
    }
}
