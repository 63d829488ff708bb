use std::fmt;

use yew::AttrValue;

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Themes {
    Light,
    Dark,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl Themes {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Text form used both for the persisted preference and the document attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Themes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Themes {
    type Error = UnknownTheme;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTheme(value.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: AttrValue,
    pub id: Themes,
    pub bg_color: AttrValue,
    pub contrast_bg_color: AttrValue,
    pub card_bg_color: AttrValue,
    pub text_color: AttrValue,
    pub muted_text_color: AttrValue,
    pub accent_color: AttrValue,
    pub box_border_color: AttrValue,
}

struct RawTheme<'a> {
    pub name: &'a str,
    pub id: Themes,
    pub bg_color: &'a str,
    pub contrast_bg_color: &'a str,
    pub card_bg_color: &'a str,
    pub text_color: &'a str,
    pub muted_text_color: &'a str,
    pub accent_color: &'a str,
    pub box_border_color: &'a str,
}

impl<'a> RawTheme<'a> {
    pub fn light() -> Self {
        Self {
            name: "Light",
            id: Themes::Light,
            bg_color: "#ffffff",
            contrast_bg_color: "#f9fafb",
            card_bg_color: "#f9fafb",
            text_color: "#111827",
            muted_text_color: "#4b5563",
            accent_color: "#2563eb",
            box_border_color: "#d1d5db",
        }
    }

    pub fn dark() -> Self {
        let bg = "#111827";
        Self {
            name: "Dark",
            id: Themes::Dark,
            bg_color: bg,
            contrast_bg_color: bg,
            card_bg_color: "#1f2937",
            text_color: "#f3f4f6",
            muted_text_color: "#d1d5db",
            accent_color: "#60a5fa",
            box_border_color: "#374151",
        }
    }
}

impl<'a> From<RawTheme<'a>> for Theme {
    fn from(theme: RawTheme<'a>) -> Self {
        Theme {
            name: theme.name.to_owned().into(),
            id: theme.id,
            bg_color: theme.bg_color.to_owned().into(),
            contrast_bg_color: theme.contrast_bg_color.to_owned().into(),
            card_bg_color: theme.card_bg_color.to_owned().into(),
            text_color: theme.text_color.to_owned().into(),
            muted_text_color: theme.muted_text_color.to_owned().into(),
            accent_color: theme.accent_color.to_owned().into(),
            box_border_color: theme.box_border_color.to_owned().into(),
        }
    }
}

impl From<Themes> for Theme {
    fn from(value: Themes) -> Self {
        match value {
            Themes::Light => RawTheme::light(),
            Themes::Dark => RawTheme::dark(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_form_parses_back() {
        for theme in [Themes::Light, Themes::Dark] {
            assert_eq!(Themes::try_from(theme.as_str()), Ok(theme));
            assert_eq!(theme.to_string(), theme.as_str());
        }
    }

    #[test]
    fn only_lowercase_names_are_themes() {
        for text in ["", "Dark", "LIGHT", "pastel", " dark", "\"dark\""] {
            assert_eq!(Themes::try_from(text), Err(UnknownTheme(text.to_owned())));
        }
    }

    #[test]
    fn toggled_flips_between_two_states() {
        assert_eq!(Themes::Light.toggled(), Themes::Dark);
        assert_eq!(Themes::Dark.toggled(), Themes::Light);
        assert_eq!(Themes::Light.toggled().toggled(), Themes::Light);
    }

    #[test]
    fn system_signal_maps_to_theme() {
        assert_eq!(Themes::from_prefers_dark(true), Themes::Dark);
        assert_eq!(Themes::from_prefers_dark(false), Themes::Light);
    }

    #[test]
    fn palette_carries_its_id() {
        assert_eq!(Theme::from(Themes::Light).id, Themes::Light);
        assert_eq!(Theme::from(Themes::Dark).id, Themes::Dark);
        assert_ne!(
            Theme::from(Themes::Light).bg_color,
            Theme::from(Themes::Dark).bg_color
        );
    }
}
