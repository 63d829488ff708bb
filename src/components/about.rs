use crate::components::imports::*;
use crate::components::styles::{
    card_style, container_style, heading_style, muted_text_style, primary_btn_style,
    section_style, two_columns_style,
};
use crate::components::Markdown;
use crate::content::{Skill, PROFILE, SKILLS};

pub struct About {
    theme_ctx: ThemeCtxSub,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

impl About {
    fn skill_card(theme: &Theme, skill: &Skill) -> Html {
        let accent_color = &theme.accent_color;
        let text_color = &theme.text_color;

        html! {
            <div class={ card_style(theme) }>
                <div class={ css!("font-size: 2rem; margin-bottom: 1rem; color: ${c};", c = accent_color) }>
                    { skill.glyph }
                </div>
                <h3 class={ css!("font-size: 1.125rem; font-weight: 600; margin: 0 0 0.5rem; color: ${c};", c = text_color) }>
                    { skill.title }
                </h3>
                <p class={ muted_text_style(theme) }>{ skill.description }</p>
            </div>
        }
    }
}

impl Component for About {
    type Message = Msg;
    type Properties = ();

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

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.as_ref();

        let grid_style = css!(
            "
                display: grid;
                grid-template-columns: 1fr;
                gap: 1rem;

                @media (min-width: 640px) {
                    grid-template-columns: repeat(2, 1fr);
                }
            "
        );

        let skills = SKILLS
            .iter()
            .map(|skill| Self::skill_card(theme, skill))
            .collect::<Html>();

        html! {
            <section id="about" class={ section_style(&theme.bg_color) }>
                <div class={ classes!(container_style(), two_columns_style()) }>
                    <div>
                        <h2 class={ heading_style(theme) }>{ "About Me" }</h2>
                        <Markdown file={ include_str!("../../md/about.md") }/>
                        <a
                            href={ PROFILE.cv_href }
                            download={ PROFILE.cv_file_name }
                            class={ primary_btn_style() }
                        >
                            <span>{ "↓" }</span>{ "Download CV" }
                        </a>
                    </div>
                    <div class={ grid_style }>
                        { skills }
                    </div>
                </div>
            </section>
        }
    }
}
