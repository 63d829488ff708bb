use gloo_events::EventListener;
use gloo_timers::callback::Timeout;

use crate::components::imports::*;
use crate::components::styles::{outline_btn_style, primary_btn_style};
use crate::content::PROFILE;
use crate::scroll;

// title, subtitle, calls to action
const STAGES: u8 = 3;

/// Delay before revealing the element at `stage`, `None` once all are shown.
fn reveal_delay(stage: u8) -> Option<u32> {
    match stage {
        0 => Some(100),
        s if s < STAGES => Some(200),
        _ => None,
    }
}

/// Title and subtitle offsets for the parallax effect.
fn parallax_offsets(scroll_y: f64) -> (f64, f64) {
    let rate = scroll_y * 0.3;
    (rate, rate * 0.8)
}

// Below the first screen the hero is out of view and its offsets stop mattering.
fn parallax_scroll(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y.clamp(0.0, viewport_height.max(0.0))
}

// Scroll-driven values stay out of `css!`, each distinct one would register a new class.
fn translate_style(offset: f64) -> String {
    format!("transform: translateY({offset}px);")
}

fn viewport_height() -> f64 {
    gloo_utils::window()
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(f64::INFINITY)
}

pub struct Hero {
    theme_ctx: ThemeCtxSub,
    revealed: u8,
    scroll_y: f64,
    _reveal_timer: Option<Timeout>,
    _scroll_listener: EventListener,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
    Reveal,
    Scrolled(f64),
    Navigate(&'static str),
}

impl Hero {
    fn schedule_reveal(ctx: &Context<Self>, stage: u8) -> Option<Timeout> {
        let link = ctx.link().clone();
        reveal_delay(stage).map(|delay| Timeout::new(delay, move || link.send_message(Msg::Reveal)))
    }

    fn is_revealed(&self, stage: u8) -> bool {
        self.revealed > stage
    }

    fn stage_class(&self, stage: u8) -> StyleSource {
        let opacity = if self.is_revealed(stage) { 1 } else { 0 };

        css!(
            "
                opacity: ${opacity};
                transition: opacity 0.8s ease, transform 0.8s ease;
                will-change: transform;
            ",
            opacity = opacity,
        )
    }

    fn stage_transform(&self, stage: u8, offset: f64) -> String {
        translate_style(if self.is_revealed(stage) { offset } else { 20.0 })
    }
}

impl Component for Hero {
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
            revealed: 0,
            scroll_y: 0.0,
            _reveal_timer: Self::schedule_reveal(ctx, 0),
            _scroll_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::Reveal => {
                self.revealed = (self.revealed + 1).min(STAGES);
                self._reveal_timer = Self::schedule_reveal(ctx, self.revealed);
                true
            }
            Self::Message::Scrolled(scroll_y) => {
                let scroll_y = parallax_scroll(scroll_y, viewport_height());
                let changed = scroll_y != self.scroll_y;
                self.scroll_y = scroll_y;
                changed
            }
            Self::Message::Navigate(section_id) => {
                scroll::scroll_to_section(section_id);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.as_ref();
        let bg_color = &theme.bg_color;
        let text_color = &theme.text_color;
        let muted_text_color = &theme.muted_text_color;

        let section_style = css!(
            "
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 5rem 1.5rem 0;
                overflow: hidden;
                background-color: ${bg_color};
                transition: background-color 0.3s;
            ",
            bg_color = bg_color,
        );

        let title_style = css!(
            "
                font-size: clamp(2.25rem, 6vw, 3.75rem);
                font-weight: 700;
                line-height: 1.25;
                margin: 0 0 1.5rem;
                color: ${text_color};
            ",
            text_color = text_color,
        );

        let subtitle_style = css!(
            "
                font-size: clamp(1.25rem, 3vw, 1.5rem);
                line-height: 1.625;
                margin: 0 auto 2.5rem;
                color: ${muted_text_color};
            ",
            muted_text_color = muted_text_color,
        );

        let cta_style = css!(
            "
                display: flex;
                flex-direction: column;
                justify-content: center;
                gap: 1rem;

                @media (min-width: 640px) {
                    flex-direction: row;
                }
            "
        );

        let (title_offset, subtitle_offset) = parallax_offsets(self.scroll_y);

        let navigate = |section_id: &'static str| {
            ctx.link().callback(move |e: MouseEvent| {
                e.prevent_default();
                Msg::Navigate(section_id)
            })
        };

        html! {
            <section id="home" class={ section_style }>
                <div class={ css!("max-width: 56rem; margin: 0 auto; text-align: center;") }>
                    <h1
                        class={ classes!(title_style, self.stage_class(0)) }
                        style={ self.stage_transform(0, title_offset) }
                    >
                        { format!("Hi, I'm {}.", PROFILE.name) }
                    </h1>
                    <p
                        class={ classes!(subtitle_style, self.stage_class(1)) }
                        style={ self.stage_transform(1, subtitle_offset) }
                    >
                        { PROFILE.tagline }
                    </p>
                    <div class={ classes!(cta_style, self.stage_class(2)) } style={ self.stage_transform(2, 0.0) }>
                        <a href="#projects" class={ primary_btn_style() } onclick={ navigate("projects") }>
                            { "View My Work" }<span>{ "→" }</span>
                        </a>
                        <a href="#contact" class={ outline_btn_style(theme) } onclick={ navigate("contact") }>
                            { "Get In Touch" }
                        </a>
                    </div>
                </div>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_reveal_in_sequence_then_stop() {
        assert_eq!(reveal_delay(0), Some(100));
        assert_eq!(reveal_delay(1), Some(200));
        assert_eq!(reveal_delay(2), Some(200));
        assert_eq!(reveal_delay(STAGES), None);
    }

    #[test]
    fn subtitle_drifts_slower_than_title() {
        assert_eq!(parallax_offsets(0.0), (0.0, 0.0));

        let (title, subtitle) = parallax_offsets(100.0);
        assert!((title - 30.0).abs() < 1e-9);
        assert!((subtitle - 24.0).abs() < 1e-9);
    }

    #[test]
    fn offset_goes_inline_not_into_a_class() {
        assert_eq!(translate_style(0.0), "transform: translateY(0px);");
        assert_eq!(translate_style(20.0), "transform: translateY(20px);");
        assert_eq!(translate_style(37.5), "transform: translateY(37.5px);");
    }

    #[test]
    fn scrolling_past_the_first_screen_stops_moving_the_hero() {
        assert_eq!(parallax_scroll(120.0, 800.0), 120.0);
        assert_eq!(parallax_scroll(800.0, 800.0), 800.0);
        assert_eq!(parallax_scroll(2500.0, 800.0), 800.0);
        assert_eq!(parallax_scroll(9000.0, 800.0), parallax_scroll(2500.0, 800.0));
        // overscroll bounce reports negative positions
        assert_eq!(parallax_scroll(-12.0, 800.0), 0.0);
    }
}
