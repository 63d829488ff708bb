mod app;
mod components;
mod content;
mod router;
mod scroll;
mod switch;

fn main() {
    // WithTheme resolves and applies the theme while mounting, before the
    // browser gets a chance to paint.
    yew::Renderer::<app::App>::new().render();
}
