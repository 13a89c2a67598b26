// SPDX-License-Identifier: MPL-2.0
//! Blocking alert dialog.
//!
//! The message is resolved when the alert is raised, so a later language
//! switch does not retranslate an alert that is already on screen.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, center, column, container, opaque, text, Stack};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    message: String,
}

impl Alert {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Layers the alert over `base`. The backdrop swallows every event, so
    /// the page below stays inert until `on_dismiss` is emitted.
    pub fn overlay<'a, Message: Clone + 'a>(
        &'a self,
        base: impl Into<Element<'a, Message>>,
        dismiss_label: String,
        on_dismiss: Message,
    ) -> Element<'a, Message> {
        let dialog = container(
            column![
                text(self.message.as_str()).size(typography::BODY_LG),
                button(text(dismiss_label).size(typography::BODY))
                    .on_press(on_dismiss)
                    .padding([spacing::XS, spacing::MD])
                    .style(button_styles::primary),
            ]
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fixed(sizing::ALERT_WIDTH))
        .padding(spacing::LG)
        .style(container_styles::dialog);

        let backdrop = center(dialog).style(container_styles::backdrop);

        Stack::new().push(base).push(opaque(backdrop)).into()
    }
}
