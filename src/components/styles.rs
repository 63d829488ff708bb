use crate::components::imports::*;

pub fn section_style(bg_color: &AttrValue) -> StyleSource {
    css!(
        "
            padding: 6rem 1.5rem;
            background-color: ${bg_color};
            transition: background-color 0.3s;
        ",
        bg_color = bg_color,
    )
}

pub fn container_style() -> StyleSource {
    css! {"
        max-width: 72rem;
        margin: 0 auto;
    "}
}

pub fn two_columns_style() -> StyleSource {
    css! {"
        display: flex;
        flex-direction: column;
        gap: 4rem;

        & > * {
            flex: 1;
        }

        @media (min-width: 768px) {
            flex-direction: row;
        }
    "}
}

pub fn heading_style(theme: &Theme) -> StyleSource {
    let text_color = &theme.text_color;
    css!(
        "
            font-size: 1.875rem;
            font-weight: 700;
            margin: 0 0 1.5rem;
            color: ${text_color};
        ",
        text_color = text_color,
    )
}

pub fn muted_text_style(theme: &Theme) -> StyleSource {
    let muted_text_color = &theme.muted_text_color;
    css!(
        "
            line-height: 1.625;
            color: ${muted_text_color};
        ",
        muted_text_color = muted_text_color,
    )
}

fn lift_on_hover() -> StyleSource {
    css! {"
        transition: all 0.3s;
        :hover {
            transform: translateY(-0.25rem);
        }
    "}
}

pub fn primary_btn_style() -> Classes {
    classes!(
        lift_on_hover(),
        css! {"
            display: inline-flex;
            align-items: center;
            justify-content: center;
            gap: 0.5rem;
            padding: 1rem 2rem;
            border: none;
            border-radius: 0.5rem;
            font-weight: 500;
            text-decoration: none;
            cursor: pointer;
            color: white;
            background-color: #2563eb;

            :hover {
                background-color: #1d4ed8;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
            }
        "}
    )
}

pub fn outline_btn_style(theme: &Theme) -> Classes {
    let box_border_color = &theme.box_border_color;
    let accent_color = &theme.accent_color;
    classes!(
        lift_on_hover(),
        css!(
            "
                display: inline-flex;
                align-items: center;
                justify-content: center;
                padding: 1rem 2rem;
                border: 1px solid ${box_border_color};
                border-radius: 0.5rem;
                font-weight: 500;
                text-decoration: none;
                color: inherit;

                :hover {
                    border-color: ${accent_color};
                    color: ${accent_color};
                }
            ",
            box_border_color = box_border_color,
            accent_color = accent_color,
        )
    )
}

pub fn card_style(theme: &Theme) -> Classes {
    let card_bg_color = &theme.card_bg_color;
    classes!(
        lift_on_hover(),
        css!(
            "
                padding: 1.5rem;
                border-radius: 0.5rem;
                background-color: ${card_bg_color};

                :hover {
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.15);
                }
            ",
            card_bg_color = card_bg_color,
        )
    )
}

pub fn link_style(theme: &Theme) -> StyleSource {
    let muted_text_color = &theme.muted_text_color;
    let accent_color = &theme.accent_color;
    css!(
        "
            display: flex;
            align-items: center;
            gap: 0.75rem;
            text-decoration: none;
            color: ${muted_text_color};
            transition: color 0.3s;

            :hover {
                color: ${accent_color};
            }
        ",
        muted_text_color = muted_text_color,
        accent_color = accent_color,
    )
}
