use crate::components::imports::*;

#[styled_component]
pub fn NotFound() -> Html {
    let css = css! {"
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;

        h1 {
            color: rgb(248 83 20);
        }
    "};

    html! {
        <div class={css}>
            <h1>{ "not found 404" }</h1>
            <Link<Route> to={Route::Home}>{ "back home" }</Link<Route>>
        </div>
    }
}
