// SPDX-License-Identifier: MPL-2.0
//! Editing session: state, transitions and the workflow controller.

pub mod controller;
pub mod state;

pub use controller::{Action, Effect, Notice, NoticeKind, WorkflowController};
pub use state::{
    ImageRef, PlacedSticker, SessionState, StickerPlacement, TransitionError, WorkflowMode,
};
