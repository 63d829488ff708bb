use crate::components::imports::*;

pub struct DefaultStyling {
    theme_ctx: ThemeCtxSub,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

impl Component for DefaultStyling {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.as_ref();

        let bg_color = &theme.bg_color;
        let text_color = &theme.text_color;
        let color_scheme = theme.id.as_str();

        let global_style = css!(
            "
                html {
                    color-scheme: ${color_scheme};
                }

                body {
                    margin: 0;
                    min-height: 100vh;
                    font-family: ui-sans-serif, system-ui, -apple-system, sans-serif;
                    background-color: ${bg_color};
                    color: ${text_color};
                    transition: background-color 0.3s, color 0.3s;
                }
            ",
            color_scheme = color_scheme,
            bg_color = bg_color,
            text_color = text_color,
        );

        html! {
            <>
                <Global css={global_style}/>
                { for ctx.props().children.iter() }
            </>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                console::log!("WithTheme context updated from DefaultStyling");
                self.theme_ctx.set(theme_ctx);
                true
            }
        }
    }
}
