use gloo_events::EventListener;

use crate::components::imports::*;
use crate::components::ThemeToggle;
use crate::content::{PROFILE, SECTIONS};
use crate::scroll;

const OPAQUE_AFTER_PX: f64 = 10.0;

fn is_opaque(scroll_y: f64) -> bool {
    scroll_y > OPAQUE_AFTER_PX
}

pub struct Header {
    theme_ctx: ThemeCtxSub,
    opaque: bool,
    menu_open: bool,
    _scroll_listener: EventListener,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
    Scrolled(f64),
    ToggleMenu,
    Navigate(&'static str),
}

impl Component for Header {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let _scroll_listener = {
            let link = ctx.link().clone();
            EventListener::new(&gloo_utils::window(), "scroll", move |_| {
                link.send_message(Msg::Scrolled(scroll::window_scroll_y()));
            })
        };

        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
            opaque: is_opaque(scroll::window_scroll_y()),
            menu_open: false,
            _scroll_listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                console::log!("WithTheme context updated from Header");
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::Scrolled(scroll_y) => {
                let opaque = is_opaque(scroll_y);
                let changed = opaque != self.opaque;
                self.opaque = opaque;
                changed
            }
            Self::Message::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Self::Message::Navigate(section_id) => {
                scroll::scroll_to_section(section_id);
                let was_open = self.menu_open;
                self.menu_open = false;
                was_open
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.as_ref();
        let bg_color = &theme.bg_color;
        let text_color = &theme.text_color;
        let muted_text_color = &theme.muted_text_color;
        let accent_color = &theme.accent_color;

        let (header_bg, header_padding, header_shadow) = if self.opaque {
            (bg_color.clone(), "1rem", "0 4px 6px -1px rgba(0, 0, 0, 0.15)")
        } else {
            ("transparent".into(), "1.5rem", "none")
        };

        let header_style = css!(
            "
                position: fixed; top: 0; left: 0;
                width: 100%;
                z-index: 50;
                padding: ${header_padding} 0;
                background-color: ${header_bg};
                box-shadow: ${header_shadow};
                transition: all 0.3s;
            ",
            header_padding = header_padding,
            header_bg = header_bg,
            header_shadow = header_shadow,
        );

        let bar_style = css!(
            "
                max-width: 72rem;
                margin: 0 auto;
                padding: 0 1.5rem;
                display: flex;
                justify-content: space-between;
                align-items: center;
            "
        );

        let brand_style = css!(
            "
                font-size: 1.25rem;
                font-weight: 700;
                letter-spacing: -0.025em;
                text-decoration: none;
                color: ${text_color};
                transition: color 0.3s;

                :hover {
                    color: ${accent_color};
                }
            ",
            text_color = text_color,
            accent_color = accent_color,
        );

        let accent_style = css!("color: ${accent_color};", accent_color = accent_color);

        let nav_style = css!(
            "
                display: none;
                align-items: center;
                gap: 2rem;

                @media (min-width: 768px) {
                    display: flex;
                }
            "
        );

        let mobile_style = css!(
            "
                display: flex;
                align-items: center;
                gap: 1rem;

                @media (min-width: 768px) {
                    display: none;
                }
            "
        );

        let link_style = css!(
            "
                position: relative;
                text-decoration: none;
                color: ${muted_text_color};
                transition: color 0.3s;

                ::after {
                    content: '';
                    position: absolute;
                    left: 0; bottom: -4px;
                    height: 2px; width: 0;
                    background-color: ${accent_color};
                    transition: width 0.3s;
                }

                :hover {
                    color: ${accent_color};
                }

                :hover::after {
                    width: 100%;
                }
            ",
            muted_text_color = muted_text_color,
            accent_color = accent_color,
        );

        let menu_btn_style = css!(
            "
                background: none;
                border: none;
                font-size: 1.5rem;
                cursor: pointer;
                color: ${muted_text_color};
            ",
            muted_text_color = muted_text_color,
        );

        let mobile_menu_style = css!(
            "
                position: absolute; top: 100%; left: 0;
                width: 100%;
                padding: 1rem 0;
                background-color: ${bg_color};
                box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.15);

                a {
                    display: block;
                    padding: 0.75rem 1.5rem;
                }

                @media (min-width: 768px) {
                    display: none;
                }
            ",
            bg_color = bg_color,
        );

        let nav_links = |link_class: StyleSource| {
            SECTIONS
                .iter()
                .map(|section| {
                    let id = section.id;
                    let onclick = ctx.link().callback(move |e: MouseEvent| {
                        e.prevent_default();
                        Msg::Navigate(id)
                    });

                    html! {
                        <a key={ id } href={ format!("#{id}") } class={ link_class.clone() } {onclick}>
                            { section.label }
                        </a>
                    }
                })
                .collect::<Html>()
        };

        let on_brand_click = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            Msg::Navigate("home")
        });
        let on_menu_click = ctx.link().callback(|_| Msg::ToggleMenu);

        let mobile_menu = if self.menu_open {
            html! {
                <nav class={ mobile_menu_style }>
                    { nav_links(link_style.clone()) }
                </nav>
            }
        } else {
            html! {}
        };

        html! {
            <header class={ header_style }>
                <div class={ bar_style }>
                    <a href="#home" class={ brand_style } onclick={ on_brand_click }>
                        { PROFILE.brand }<span class={ accent_style }>{ PROFILE.brand_accent }</span>
                    </a>

                    <nav class={ nav_style }>
                        { nav_links(link_style.clone()) }
                        <ThemeToggle/>
                    </nav>

                    <div class={ mobile_style }>
                        <ThemeToggle/>
                        <button class={ menu_btn_style } onclick={ on_menu_click } aria-label="Toggle menu">
                            { if self.menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>
                { mobile_menu }
            </header>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_opaque_past_threshold() {
        assert!(!is_opaque(0.0));
        assert!(!is_opaque(OPAQUE_AFTER_PX));
        assert!(is_opaque(OPAQUE_AFTER_PX + 0.5));
    }
}
