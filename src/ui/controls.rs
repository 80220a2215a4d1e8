// SPDX-License-Identifier: MPL-2.0
//! Footer controls: labelled buttons, icon buttons and the circle button.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Svg, Text};
use iced::{alignment, Element, Length};

/// Full-width labelled button. `primary` gets the accent ring.
pub fn labeled<'a, Message: Clone + 'a>(
    label: String,
    primary: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let label = Container::new(Text::new(label).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(label)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding(spacing::XXS)
        .style(if primary {
            styles::button::primary
        } else {
            styles::button::secondary
        })
        .on_press(on_press)
        .into()
}

/// Icon with a caption underneath.
pub fn icon_button<'a, Message: Clone + 'a>(
    icon: Svg<'static>,
    label: String,
    on_press: Message,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icon, sizing::ICON_MD).style(styles::overlay::tint(palette::WHITE)))
        .push(Text::new(label).size(typography::CAPTION));

    button(content)
        .padding(spacing::XS)
        .style(styles::button::icon)
        .on_press(on_press)
        .into()
}

/// Round accent-ringed button with a plus sign.
pub fn circle_button<'a, Message: Clone + 'a + 'static>(on_press: Message) -> Element<'a, Message> {
    let plus = Container::new(
        icons::sized(icons::plus(), sizing::ICON_LG)
            .style(styles::overlay::tint(palette::SLATE_900)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    button(plus)
        .width(Length::Fixed(sizing::CIRCLE_BUTTON))
        .height(Length::Fixed(sizing::CIRCLE_BUTTON))
        .padding(0)
        .style(styles::button::circle)
        .on_press(on_press)
        .into()
}
