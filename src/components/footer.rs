use crate::components::imports::*;
use crate::content::{footer_links, PROFILE};
use crate::scroll;

pub struct Footer {
    theme_ctx: ThemeCtxSub,
    year: u32,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
    ScrollToTop,
}

impl Component for Footer {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
            year: js_sys::Date::new_0().get_full_year(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::ScrollToTop => {
                scroll::scroll_to_top();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        // the footer stays dark in both themes
        let theme = self.theme_ctx.as_ref();
        let accent_color = &theme.accent_color;

        let footer_style = css!(
            "
                padding: 3rem 1.5rem;
                background-color: #111827;
                color: white;
            "
        );

        let row_style = css!(
            "
                max-width: 72rem;
                margin: 0 auto;
                display: flex;
                flex-direction: column;
                justify-content: space-between;
                align-items: center;
                gap: 1.5rem;

                @media (min-width: 768px) {
                    flex-direction: row;
                }
            "
        );

        let brand_style = css!(
            "
                background: none;
                border: none;
                padding: 0;
                cursor: pointer;
                font: inherit;
                font-size: 1.25rem;
                font-weight: 700;
                color: white;
                transition: color 0.3s;

                :hover {
                    color: #60a5fa;
                }
            "
        );

        let social_style = css!(
            "
                color: #9ca3af;
                text-decoration: none;
                transition: all 0.3s;

                :hover {
                    color: white;
                    transform: translateY(-0.25rem);
                }
            "
        );

        let up_style = css!(
            "
                margin-left: 0.5rem;
                padding: 0.5rem 0.75rem;
                border: none;
                border-radius: 9999px;
                cursor: pointer;
                background-color: #1f2937;
                color: #9ca3af;
                transition: all 0.3s;

                :hover {
                    color: ${accent_color};
                    transform: translateY(-0.25rem);
                }
            ",
            accent_color = accent_color,
        );

        let on_top = ctx.link().callback(|_| Msg::ScrollToTop);

        html! {
            <footer class={ footer_style }>
                <div class={ row_style }>
                    <div>
                        <button class={ brand_style } onclick={ on_top.clone() }>
                            { PROFILE.brand }
                            <span class={ css!("color: #60a5fa;") }>{ PROFILE.brand_accent }</span>
                        </button>
                        <p class={ css!("margin: 0.5rem 0 0; color: #9ca3af;") }>
                            { format!("© {}  {}", self.year, PROFILE.copyright_note) }
                        </p>
                    </div>
                    <div class={ css!("display: flex; align-items: center; gap: 1.5rem;") }>
                        { for footer_links().map(|link| html! {
                            <a
                                href={ link.href }
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={ link.label }
                                class={ social_style.clone() }
                            >
                                { link.glyph }
                            </a>
                        }) }
                        <button class={ up_style } onclick={ on_top } aria-label="Scroll to top">
                            { "↑" }
                        </button>
                    </div>
                </div>
            </footer>
        }
    }
}
