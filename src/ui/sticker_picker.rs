// SPDX-License-Identifier: MPL-2.0
//! Bottom sheet listing the bundled stickers.

use crate::i18n::fluent::I18n;
use crate::media::StickerId;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, mouse_area, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Select(StickerId),
    Close,
}

/// Renders the sheet anchored to the bottom of the window over a dim backdrop.
///
/// Clicking the backdrop closes the sheet.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let header = Container::new(
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("sticker-picker-title")).size(typography::TITLE_SM))
            .push(Space::new().width(Length::Fill))
            .push(
                button(
                    icons::sized(icons::close(), sizing::ICON_MD)
                        .style(styles::overlay::tint(palette::WHITE)),
                )
                .padding(spacing::XXS)
                .style(styles::button::icon)
                .on_press(Message::Close),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::SHEET_HEADER_HEIGHT))
    .padding([0.0, spacing::LG])
    .align_y(alignment::Vertical::Center)
    .style(styles::container::sheet_header);

    let stickers = StickerId::ALL.iter().fold(
        Row::new().spacing(spacing::MD).padding([spacing::MD, spacing::LG]),
        |row, &id| {
            row.push(
                button(icons::sized(icons::sticker(id), sizing::STICKER_THUMB))
                    .padding(0)
                    .style(styles::button::icon)
                    .on_press(Message::Select(id)),
            )
        },
    );

    let list = scrollable(stickers).direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new(),
    ));

    let sheet = Container::new(Column::new().push(header).push(list))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SHEET_HEIGHT))
        .style(styles::container::sheet);

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim),
    )
    .on_press(Message::Close);

    Column::new().push(backdrop).push(sheet).into()
}
