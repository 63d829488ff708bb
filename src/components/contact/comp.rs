use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use super::domain::{ContactState, Field, NOTICE_MS, SEND_DELAY_MS};
use crate::components::imports::*;
use crate::components::styles::{
    container_style, heading_style, link_style, muted_text_style, section_style,
    two_columns_style,
};
use crate::content::{external, CONTACT_LINKS};

pub struct Contact {
    theme_ctx: ThemeCtxSub,
    state: ContactState,
    // dropping the timeout cancels it
    timer: Option<Timeout>,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
    Edit(Field, String),
    Submit,
    Delivered,
    DismissNotice,
}

impl Contact {
    fn schedule(ctx: &Context<Self>, millis: u32, msg: fn() -> Msg) -> Option<Timeout> {
        let link = ctx.link().clone();
        Some(Timeout::new(millis, move || link.send_message(msg())))
    }
}

impl Component for Contact {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
            state: ContactState::default(),
            timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::Edit(field, value) => {
                self.state.edit(field, value);
                true
            }
            Self::Message::Submit => {
                if !self.state.submit() {
                    return false;
                }
                console::log!("contact form: sending");
                self.timer = Self::schedule(ctx, SEND_DELAY_MS, || Msg::Delivered);
                true
            }
            Self::Message::Delivered => {
                if !self.state.delivered() {
                    return false;
                }
                console::log!("contact form: delivered");
                self.timer = Self::schedule(ctx, NOTICE_MS, || Msg::DismissNotice);
                true
            }
            Self::Message::DismissNotice => {
                self.timer = None;
                self.state.dismiss_notice()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.as_ref();
        let dark = theme.id.is_dark();

        let card_bg_color = &theme.card_bg_color;
        let box_border_color = &theme.box_border_color;
        let text_color = &theme.text_color;
        let muted_text_color = &theme.muted_text_color;

        let (notice_bg, notice_fg) = if dark {
            ("rgba(20, 83, 45, 0.5)", "#4ade80")
        } else {
            ("#f0fdf4", "#15803d")
        };

        let notice_style = css!(
            "
                padding: 1rem;
                border-radius: 0.5rem;
                background-color: ${notice_bg};
                color: ${notice_fg};
            ",
            notice_bg = notice_bg,
            notice_fg = notice_fg,
        );

        let label_style = css!(
            "
                display: block;
                margin-bottom: 0.5rem;
                color: ${muted_text_color};
            ",
            muted_text_color = muted_text_color,
        );

        let input_style = css!(
            "
                box-sizing: border-box;
                width: 100%;
                padding: 0.75rem 1rem;
                border-radius: 0.5rem;
                border: 1px solid ${box_border_color};
                background-color: ${card_bg_color};
                color: ${text_color};
                font: inherit;
                transition: border-color 0.3s;

                :focus {
                    outline: none;
                    border-color: #3b82f6;
                    box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.5);
                }
            ",
            box_border_color = box_border_color,
            card_bg_color = card_bg_color,
            text_color = text_color,
        );

        let submitting = self.state.is_submitting();
        let (btn_opacity, btn_cursor) = if submitting {
            ("0.7", "not-allowed")
        } else {
            ("1", "pointer")
        };
        let button_style = css!(
            "
                width: 100%;
                padding: 1rem 1.5rem;
                border: none;
                border-radius: 0.5rem;
                font: inherit;
                font-weight: 500;
                color: white;
                background-color: #2563eb;
                opacity: ${btn_opacity};
                cursor: ${btn_cursor};
                transition: all 0.3s;

                :hover {
                    background-color: #1d4ed8;
                }
            ",
            btn_opacity = btn_opacity,
            btn_cursor = btn_cursor,
        );

        let form_style = css!("display: flex; flex-direction: column; gap: 1.5rem;");

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let oninput_field = |field: Field| {
            ctx.link().callback(move |e: InputEvent| {
                Msg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
            })
        };
        let oninput_message = ctx.link().callback(|e: InputEvent| {
            Msg::Edit(
                Field::Message,
                e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            )
        });

        let links = CONTACT_LINKS
            .iter()
            .map(|link| {
                let (target, rel) = if external(link.href) {
                    (Some("_blank"), Some("noopener noreferrer"))
                } else {
                    (None, None)
                };
                html! {
                    <a href={ link.href } {target} {rel} class={ link_style(theme) }>
                        <span>{ link.glyph }</span>
                        <span>{ link.label }</span>
                    </a>
                }
            })
            .collect::<Html>();

        let form = &self.state.form;

        html! {
            <section id="contact" class={ section_style(&theme.bg_color) }>
                <div class={ classes!(container_style(), two_columns_style()) }>
                    <div>
                        <h2 class={ heading_style(theme) }>{ "Get In Touch" }</h2>
                        <p class={ classes!(muted_text_style(theme), css!("margin: 0 0 2rem;")) }>
                            { "Have a project in mind or want to chat about web development? \
                               I'm always open to discussing new opportunities and ideas." }
                        </p>
                        <div class={ css!("display: flex; flex-direction: column; gap: 1rem;") }>
                            { links }
                        </div>
                    </div>

                    <form {onsubmit} class={ form_style }>
                        if self.state.show_notice() {
                            <div class={ notice_style }>
                                { "Thanks for your message! I'll get back to you soon." }
                            </div>
                        }
                        <div>
                            <label for="name" class={ label_style.clone() }>{ "Name" }</label>
                            <input
                                type="text" id="name" name="name" required=true
                                value={ form.name.clone() }
                                oninput={ oninput_field(Field::Name) }
                                class={ input_style.clone() }
                            />
                        </div>
                        <div>
                            <label for="email" class={ label_style.clone() }>{ "Email" }</label>
                            <input
                                type="email" id="email" name="email" required=true
                                value={ form.email.clone() }
                                oninput={ oninput_field(Field::Email) }
                                class={ input_style.clone() }
                            />
                        </div>
                        <div>
                            <label for="message" class={ label_style }>{ "Message" }</label>
                            <textarea
                                id="message" name="message" required=true rows="5"
                                value={ form.message.clone() }
                                oninput={ oninput_message }
                                class={ input_style }
                            />
                        </div>
                        <button type="submit" disabled={ submitting } class={ button_style }>
                            { self.state.button_label() }
                        </button>
                    </form>
                </div>
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timer = None;
    }
}
