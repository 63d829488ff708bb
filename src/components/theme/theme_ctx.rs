use derivative::Derivative;

use super::browser::{DocumentAttribute, LocalPreference, MediaQueryPreference, ThemeSettings};
use super::resolver::ThemeResolver;
use super::themes::Theme;
use crate::components::imports::*;

/// What consumers get: the palette of the resolved theme and a way to flip it.
#[derive(Derivative)]
#[derivative(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,

    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    toggle: Callback<()>,
}

impl ThemeState {
    pub fn toggle(&self) {
        self.toggle.emit(());
    }
}

pub type ThemeCtx = Rc<ThemeState>;

pub struct ThemeCtxSub {
    ctx: ThemeCtx,
    // keep handle for component rerender after the theme changes
    _ctx_handle: ContextHandle<ThemeCtx>,
}

impl AsRef<Theme> for ThemeCtxSub {
    fn as_ref(&self) -> &Theme {
        &self.ctx.theme
    }
}

impl ThemeCtxSub {
    fn new(ctx: ThemeCtx, _ctx_handle: ContextHandle<ThemeCtx>) -> Self {
        Self { ctx, _ctx_handle }
    }

    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ThemeCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("Theme context does not exist");

        Self::new(ctx, _ctx_handle)
    }

    pub fn set(&mut self, ctx: ThemeCtx) {
        self.ctx = ctx;
    }

    pub fn toggle(&self) {
        self.ctx.toggle();
    }
}

type BrowserResolver = ThemeResolver<LocalPreference, MediaQueryPreference, DocumentAttribute>;

// Owns the resolver, so the system preference listener is released when
// this component is destroyed.
pub struct WithTheme {
    resolver: BrowserResolver,
    toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    ToggleTheme,
    SystemPreferenceChanged(bool),
}

impl Component for WithTheme {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let settings = ThemeSettings::DEFAULT;

        let resolver = ThemeResolver::initialize(
            LocalPreference::new(&settings),
            MediaQueryPreference::new(&settings),
            DocumentAttribute::new(&settings),
            ctx.link().callback(Msg::SystemPreferenceChanged),
        );

        console::log!(format!(
            "theme resolved to {} ({:?})",
            resolver.current(),
            resolver.mode()
        ));

        Self {
            resolver,
            toggle: ctx.link().callback(|()| Msg::ToggleTheme),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = Rc::new(ThemeState {
            theme: Theme::from(self.resolver.current()),
            toggle: self.toggle.clone(),
        });

        html! {
            <ContextProvider<ThemeCtx> context={state}>
                { ctx.props().children.clone() }
            </ContextProvider<ThemeCtx>>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ToggleTheme => {
                let theme = self.resolver.toggle();
                console::log!(format!("theme toggled to {theme}"));
                true
            }
            Self::Message::SystemPreferenceChanged(prefers_dark) => {
                let before = self.resolver.current();
                let after = self.resolver.on_system_change(prefers_dark);
                if before != after {
                    console::log!(format!("theme follows system preference: {after}"));
                }
                before != after
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        console::log!("WithTheme destroyed, releasing system preference listener");
    }
}
