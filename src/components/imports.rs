pub use crate::components::theme::{Theme, ThemeCtx, ThemeCtxSub};
pub use crate::router::Route;

pub use std::rc::Rc;

pub use gloo_console as console;
pub use stylist::yew::{styled_component, Global};
pub use stylist::{css, StyleSource};
pub use yew::prelude::*;
pub use yew_router::prelude::*;
