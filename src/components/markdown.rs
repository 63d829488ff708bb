use crate::components::imports::*;

pub struct Markdown {
    theme_ctx: ThemeCtxSub,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub file: AttrValue,
}

impl Component for Markdown {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.as_ref();
        let muted_text_color = &theme.muted_text_color;
        let accent_color = &theme.accent_color;

        let style = css!(
            "
                color: ${muted_text_color};
                line-height: 1.625;

                p {
                    margin: 0 0 1.5rem;
                }

                a {
                    color: ${accent_color};
                }
            ",
            muted_text_color = muted_text_color,
            accent_color = accent_color,
        );

        html! {
            <div class={ classes!("markdown-body", style) }>
                { parse_md(&ctx.props().file) }
            </div>
        }
    }
}

pub fn render_md(markdown_input: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown_input, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

pub fn parse_md(markdown_input: &str) -> Html {
    Html::from_html_unchecked(render_md(markdown_input).into())
}

#[cfg(test)]
mod tests {
    use super::render_md;

    #[test]
    fn paragraphs_become_separate_blocks() {
        let html = render_md("first\n\nsecond");
        assert_eq!(html, "<p>first</p>\n<p>second</p>\n");
    }

    #[test]
    fn strikethrough_is_enabled() {
        assert!(render_md("~~old~~ new").contains("<del>old</del>"));
    }

    #[test]
    fn about_copy_renders() {
        let html = render_md(include_str!("../../md/about.md"));
        assert!(html.starts_with("<p>"));
    }
}
