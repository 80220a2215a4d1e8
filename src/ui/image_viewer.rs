// SPDX-License-Identifier: MPL-2.0
//! The 320x440 image canvas with the placed sticker on top.
//!
//! The background is a pre-composed raster (rounded corners included) so the
//! screen shows exactly what an export produces. The sticker is drawn as a
//! vector on top and can be dragged or double-clicked to change its size.

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::session::PlacedSticker;
use crate::ui::icons;
use iced::widget::image::{Handle, Image};
use iced::widget::{mouse_area, Container, Space, Stack};
use iced::{Element, Length, Padding, Point, Vector};

/// Pointer state of an ongoing drag.
#[derive(Debug, Default, Clone, Copy)]
pub struct State {
    /// Last known cursor position in canvas coordinates.
    cursor: Option<Point>,
    /// Offset from the cursor to the sticker's top-left corner while dragging.
    grab: Option<Vector>,
}

impl State {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    CursorMoved(Point),
    StickerPressed,
    Released,
    StickerDoubleClicked,
}

/// Requests for the workflow controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    MoveSticker { x: f32, y: f32 },
    ToggleStickerScale,
}

pub struct ViewContext<'a> {
    /// Composed background; `None` while it is being rendered.
    pub background: Option<&'a Handle>,
    pub sticker: Option<&'a PlacedSticker>,
    /// Whether the sticker reacts to the pointer.
    pub interactive: bool,
}

pub fn update(state: &mut State, message: Message, sticker: Option<&PlacedSticker>) -> Event {
    match message {
        Message::CursorMoved(position) => {
            state.cursor = Some(position);
            match state.grab {
                Some(grab) => {
                    let target = position + grab;
                    Event::MoveSticker {
                        x: target.x,
                        y: target.y,
                    }
                }
                None => Event::None,
            }
        }
        Message::StickerPressed => {
            if let (Some(cursor), Some(placed)) = (state.cursor, sticker) {
                state.grab = Some(Point::new(placed.placement.x, placed.placement.y) - cursor);
            }
            Event::None
        }
        Message::Released => {
            state.grab = None;
            Event::None
        }
        Message::StickerDoubleClicked => {
            state.grab = None;
            Event::ToggleStickerScale
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let width = Length::Fixed(CANVAS_WIDTH as f32);
    let height = Length::Fixed(CANVAS_HEIGHT as f32);

    let background: Element<'a, Message> = match ctx.background {
        Some(handle) => Image::new(handle.clone()).width(width).height(height).into(),
        None => Space::new().width(width).height(height).into(),
    };

    let mut layers = Stack::new().width(width).height(height).push(background);

    if let Some(placed) = ctx.sticker {
        let size = placed.placement.size() as f32;
        let mut sticker = mouse_area(icons::sized(icons::sticker(placed.id), size));
        if ctx.interactive {
            sticker = sticker
                .on_press(Message::StickerPressed)
                .on_double_click(Message::StickerDoubleClicked);
        }

        layers = layers.push(
            Container::new(sticker)
                .width(width)
                .height(height)
                .padding(Padding {
                    top: placed.placement.y,
                    left: placed.placement.x,
                    ..Padding::ZERO
                }),
        );
    }

    mouse_area(layers)
        .on_move(Message::CursorMoved)
        .on_release(Message::Released)
        .into()
}
