use crate::components::imports::*;
use crate::components::styles::{container_style, heading_style, muted_text_style, section_style};
use crate::content::{Project, PROJECTS};

pub struct Projects {
    theme_ctx: ThemeCtxSub,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

impl Component for Projects {
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
                gap: 2rem;

                @media (min-width: 768px) {
                    grid-template-columns: repeat(2, 1fr);
                }

                @media (min-width: 1024px) {
                    grid-template-columns: repeat(3, 1fr);
                }
            "
        );

        html! {
            <section id="projects" class={ section_style(&theme.contrast_bg_color) }>
                <div class={ container_style() }>
                    <h2 class={ heading_style(theme) }>{ "My Projects" }</h2>
                    <p class={ classes!(muted_text_style(theme), css!("max-width: 42rem; margin: 0 0 3rem;")) }>
                        { "A selection of recent work across web applications, design systems, and interactive experiences." }
                    </p>
                    <div class={ grid_style }>
                        { for PROJECTS.iter().map(|project| html! { <ProjectCard key={ project.id } { project }/> }) }
                    </div>
                </div>
            </section>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
}

pub struct ProjectCard {
    theme_ctx: ThemeCtxSub,
    hovered: bool,
}

pub enum ProjectCardMsg {
    ThemeContextUpdate(ThemeCtx),
    Hover(bool),
}

impl Component for ProjectCard {
    type Message = ProjectCardMsg;
    type Properties = ProjectCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
            hovered: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::Hover(hovered) => {
                let changed = self.hovered != hovered;
                self.hovered = hovered;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let project = ctx.props().project;
        let theme = self.theme_ctx.as_ref();

        let card_bg_color = if theme.id.is_dark() {
            theme.card_bg_color.clone()
        } else {
            theme.bg_color.clone()
        };
        let text_color = &theme.text_color;
        let accent_color = &theme.accent_color;
        let muted_text_color = &theme.muted_text_color;
        let tag_bg_color = &theme.box_border_color;

        let card_style = css!(
            "
                border-radius: 0.5rem;
                overflow: hidden;
                background-color: ${card_bg_color};
                transition: box-shadow 0.3s;

                :hover {
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.2);
                }

                :hover h3 {
                    color: ${accent_color};
                }
            ",
            card_bg_color = card_bg_color,
            accent_color = accent_color,
        );

        let scale = if self.hovered { 1.05 } else { 1.0 };
        let image_style = css!(
            "
                width: 100%; height: 15rem;
                object-fit: cover;
                display: block;
                transform: scale(${scale});
                transition: transform 0.7s;
            ",
            scale = scale,
        );

        let title_style = css!(
            "
                font-size: 1.25rem;
                font-weight: 700;
                margin: 0 0 0.5rem;
                color: ${text_color};
                transition: color 0.3s;
            ",
            text_color = text_color,
        );

        let tag_style = css!(
            "
                padding: 0.25rem 0.75rem;
                font-size: 0.875rem;
                border-radius: 9999px;
                background-color: ${tag_bg_color};
                color: ${text_color};
            ",
            tag_bg_color = tag_bg_color,
            text_color = text_color,
        );

        let link_style = css!(
            "
                display: flex;
                align-items: center;
                gap: 0.25rem;
                text-decoration: none;
                color: ${accent_color};

                :hover {
                    color: ${muted_text_color};
                }
            ",
            accent_color = accent_color,
            muted_text_color = muted_text_color,
        );

        let external_link = |label: &'static str, glyph: &'static str, href: Option<&'static str>| {
            match href {
                Some(href) => html! {
                    <a {href} target="_blank" rel="noopener noreferrer" class={ link_style.clone() }>
                        <span>{ label }</span><span>{ glyph }</span>
                    </a>
                },
                None => html! {},
            }
        };

        let onmouseenter = ctx.link().callback(|_| ProjectCardMsg::Hover(true));
        let onmouseleave = ctx.link().callback(|_| ProjectCardMsg::Hover(false));

        html! {
            <div class={ card_style } {onmouseenter} {onmouseleave}>
                <div class={ css!("overflow: hidden;") }>
                    <img src={ project.image_url() } alt={ project.title } class={ image_style }/>
                </div>
                <div class={ css!("padding: 1.5rem;") }>
                    <h3 class={ title_style }>{ project.title }</h3>
                    <p class={ classes!(muted_text_style(theme), css!("margin: 0 0 1rem;")) }>
                        { project.description }
                    </p>
                    <div class={ css!("display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem;") }>
                        { for project.technologies.iter().map(|tech| html! { <span class={ tag_style.clone() }>{ *tech }</span> }) }
                    </div>
                    <div class={ css!("display: flex; gap: 1rem;") }>
                        { external_link("Live Demo", "↗", project.live_url) }
                        { external_link("Repository", "⌥", project.repository_url) }
                    </div>
                </div>
            </div>
        }
    }
}
