// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn disabled_style(theme: &Theme) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    button::Style {
        background: Some(Background::Color(if is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_200
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Next / retry / details actions.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Active | button::Status::Pressed => (palette::PRIMARY_500, shadow::SM),
        button::Status::Hovered => (palette::PRIMARY_400, shadow::MD),
        button::Status::Disabled => return disabled_style(theme),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Language selector button; `active` marks the current language.
pub fn language(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            return primary(theme, status);
        }
        let colors = ColorScheme::for_theme(theme);
        let border_color = match status {
            button::Status::Hovered => colors.brand_primary,
            _ => palette::GRAY_400,
        };

        button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: colors.text_secondary,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Related-article link inside the details panel.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.text_primary,
        _ => colors.brand_primary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_primary_is_grayed_out() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn active_language_uses_primary_style() {
        let active = language(true)(&Theme::Dark, button::Status::Active);
        let inactive = language(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            active.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(inactive.background, Some(Background::Color(Color::TRANSPARENT)));
    }
}
