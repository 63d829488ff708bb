use super::theme_ctx::{ThemeCtx, ThemeCtxSub};
use crate::components::imports::*;

// Sun, switch, moon. The switch knob slides right for the dark theme.
pub struct ThemeToggle {
    theme_ctx: ThemeCtxSub,
}

pub enum ThemeToggleMsg {
    ThemeContextUpdate(ThemeCtx),
    ToggleTheme,
}

impl Component for ThemeToggle {
    type Message = ThemeToggleMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_| Self::Message::ToggleTheme);

        let theme = self.theme_ctx.as_ref();
        let dark = theme.id.is_dark();

        let accent_color = &theme.accent_color;
        let track_color = if dark { accent_color.clone() } else { "#e5e7eb".into() };
        let knob_offset = if dark { "1.5rem" } else { "0.25rem" };

        let glyph_style = |active: bool| {
            let (opacity, scale) = if active { (1.0, 1.0) } else { (0.5, 0.9) };
            css!(
                "
                    font-size: 16px;
                    opacity: ${opacity};
                    transform: scale(${scale});
                    transition: all 1s cubic-bezier(0.34, 1.56, 0.64, 1);
                ",
                opacity = opacity,
                scale = scale,
            )
        };

        let track_style = css!(
            "
                position: relative;
                display: inline-flex;
                align-items: center;
                height: 1.5rem; width: 2.75rem;
                border: none;
                border-radius: 9999px;
                background-color: ${track_color};
                cursor: pointer;
                transition: background-color 1s cubic-bezier(0.34, 1.56, 0.64, 1);

                :focus-visible {
                    outline: 2px solid ${accent_color};
                    outline-offset: 2px;
                }
            ",
            track_color = track_color,
            accent_color = accent_color,
        );

        let knob_style = css!(
            "
                position: absolute;
                left: ${knob_offset};
                height: 1rem; width: 1rem;
                border-radius: 9999px;
                background-color: white;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.3);
                transition: left 1s cubic-bezier(0.34, 1.56, 0.64, 1);
            ",
            knob_offset = knob_offset,
        );

        let sr_only = css!(
            "
                position: absolute;
                width: 1px; height: 1px;
                overflow: hidden;
                clip: rect(0, 0, 0, 0);
            "
        );

        let wrapper_style = css!("display: flex; align-items: center; gap: 0.5rem;");

        html! {
            <div class={ wrapper_style }>
                <span class={ glyph_style(!dark) }>{ "☀" }</span>
                <button
                    {onclick}
                    class={ track_style }
                    role="switch"
                    aria-checked={ dark.to_string() }
                >
                    <span class={ knob_style }/>
                    <span class={ sr_only }>{ "Toggle theme" }</span>
                </button>
                <span class={ glyph_style(dark) }>{ "☾" }</span>
            </div>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::ToggleTheme => {
                self.theme_ctx.toggle();
                false
            }
        }
    }
}
