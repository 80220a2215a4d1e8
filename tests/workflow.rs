// SPDX-License-Identifier: MPL-2.0
//! End-to-end workflow scenarios driven through `WorkflowController::run`
//! with deterministic capability fakes.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use sticker_smash::capability::{
    Capabilities, CaptureError, CaptureOptions, ExportError, ExportReceipt, Exporter,
    GallerySaveExporter, ImagePicker, MediaLibrary, MediaPermission, PermissionStatus,
    PickOutcome, SaveError, ViewCapture,
};
use sticker_smash::media::{StickerId, ViewSnapshot};
use sticker_smash::session::controller::{NOTICE_NO_IMAGE_PICKED, NOTICE_SAVE_FAILED};
use sticker_smash::session::{
    Action, ImageRef, NoticeKind, SessionState, StickerPlacement, WorkflowController,
    WorkflowMode,
};

/// Returns queued outcomes in order, then cancels.
#[derive(Default)]
struct ScriptedPicker {
    outcomes: Mutex<VecDeque<PickOutcome>>,
}

impl ScriptedPicker {
    fn with(outcomes: impl IntoIterator<Item = PickOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ImagePicker for ScriptedPicker {
    async fn pick_image(&self) -> PickOutcome {
        self.outcomes
            .lock()
            .expect("picker lock")
            .pop_front()
            .unwrap_or(PickOutcome::Cancelled)
    }
}

struct FixedPermission {
    status: PermissionStatus,
    granted_on_request: PermissionStatus,
    requests: AtomicUsize,
}

impl FixedPermission {
    fn new(status: PermissionStatus, granted_on_request: PermissionStatus) -> Self {
        Self {
            status,
            granted_on_request,
            requests: AtomicUsize::new(0),
        }
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaPermission for FixedPermission {
    async fn status(&self) -> PermissionStatus {
        self.status
    }

    async fn request(&self) -> PermissionStatus {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.granted_on_request
    }
}

struct OkCapture;

#[async_trait]
impl ViewCapture for OkCapture {
    async fn capture_view(
        &self,
        _snapshot: &ViewSnapshot,
        _options: CaptureOptions,
    ) -> Result<PathBuf, CaptureError> {
        Ok(PathBuf::from("/tmp/capture.png"))
    }
}

struct FailingLibrary {
    calls: AtomicUsize,
}

#[async_trait]
impl MediaLibrary for FailingLibrary {
    async fn save_to_library(&self, _path: &Path) -> Result<PathBuf, SaveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SaveError::Io("permission denied".into()))
    }
}

/// Records every snapshot it is asked to export.
#[derive(Default)]
struct RecordingExporter {
    fail: bool,
    snapshots: Mutex<Vec<ViewSnapshot>>,
}

#[async_trait]
impl Exporter for RecordingExporter {
    async fn export(&self, snapshot: ViewSnapshot) -> Result<ExportReceipt, ExportError> {
        self.snapshots.lock().expect("exporter lock").push(snapshot);
        if self.fail {
            Err(ExportError::Save(SaveError::Unavailable("offline".into())))
        } else {
            Ok(ExportReceipt::SavedToGallery {
                path: "/gallery/sticker.png".into(),
            })
        }
    }
}

fn controller_with(picker: ScriptedPicker, exporter: Arc<dyn Exporter>) -> WorkflowController {
    WorkflowController::new(Capabilities {
        image_picker: Arc::new(picker),
        permission: Arc::new(FixedPermission::new(
            PermissionStatus::Granted,
            PermissionStatus::Granted,
        )),
        exporter,
    })
}

fn picked(uri: &str) -> PickOutcome {
    PickOutcome::Picked {
        uri: ImageRef::from(uri),
    }
}

async fn editing_controller() -> WorkflowController {
    let mut controller = controller_with(
        ScriptedPicker::with([picked("img1")]),
        Arc::new(RecordingExporter::default()),
    );
    controller.run(Action::PickImage).await;
    controller
}

#[tokio::test]
async fn picking_an_image_enters_editing() {
    let mut controller = controller_with(
        ScriptedPicker::with([picked("img1")]),
        Arc::new(RecordingExporter::default()),
    );

    controller.run(Action::PickImage).await;

    let state = controller.state();
    assert_eq!(state.selected_image(), Some(&ImageRef::from("img1")));
    assert_eq!(state.mode(), WorkflowMode::Editing);
    assert!(controller.take_notices().is_empty());
}

#[tokio::test]
async fn cancelled_pick_leaves_state_and_emits_one_notice() {
    let mut controller = controller_with(
        ScriptedPicker::default(),
        Arc::new(RecordingExporter::default()),
    );

    controller.run(Action::PickImage).await;

    assert_eq!(controller.state(), &SessionState::new());
    let notices = controller.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Info);
    assert_eq!(notices[0].key, NOTICE_NO_IMAGE_PICKED);
}

#[tokio::test]
async fn choosing_from_picker_places_sticker_and_closes_it() {
    let mut controller = editing_controller().await;
    assert!(controller.state().sticker().is_none());

    controller.run(Action::OpenStickerPicker).await;
    assert!(controller.state().sticker_picker_open());

    controller.run(Action::SelectSticker(StickerId::Grin)).await;

    let state = controller.state();
    assert!(!state.sticker_picker_open());
    let sticker = state.sticker().expect("sticker placed");
    assert_eq!(sticker.id, StickerId::Grin);
    assert_eq!(sticker.placement, StickerPlacement::default());
}

#[tokio::test]
async fn failed_gallery_save_with_denied_permission_reports_once() {
    let permission = Arc::new(FixedPermission::new(
        PermissionStatus::Denied,
        PermissionStatus::Denied,
    ));
    let library = Arc::new(FailingLibrary {
        calls: AtomicUsize::new(0),
    });
    let exporter =
        GallerySaveExporter::new(Arc::new(OkCapture), permission.clone(), library.clone());
    let mut controller = WorkflowController::new(Capabilities {
        image_picker: Arc::new(ScriptedPicker::with([picked("img1")])),
        permission: permission.clone(),
        exporter: Arc::new(exporter),
    });
    controller.run(Action::CheckPermission).await;
    controller.run(Action::PickImage).await;
    assert_eq!(controller.state().media_permission(), PermissionStatus::Denied);
    let before = controller.state().clone();

    controller.run(Action::Export).await;

    assert_eq!(controller.state(), &before);
    assert_eq!(library.calls.load(Ordering::SeqCst), 1);
    assert_eq!(permission.requests(), 1);
    let notices = controller.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].key, NOTICE_SAVE_FAILED);
}

struct AcceptingLibrary;

#[async_trait]
impl MediaLibrary for AcceptingLibrary {
    async fn save_to_library(&self, _path: &Path) -> Result<PathBuf, SaveError> {
        Ok(PathBuf::from("/gallery/sticker.png"))
    }
}

#[tokio::test]
async fn permission_granted_during_export_leaves_session_untouched() {
    let permission = Arc::new(FixedPermission::new(
        PermissionStatus::Denied,
        PermissionStatus::Granted,
    ));
    let exporter = GallerySaveExporter::new(
        Arc::new(OkCapture),
        permission.clone(),
        Arc::new(AcceptingLibrary),
    );
    let mut controller = WorkflowController::new(Capabilities {
        image_picker: Arc::new(ScriptedPicker::with([picked("img1")])),
        permission: permission.clone(),
        exporter: Arc::new(exporter),
    });
    controller.run(Action::CheckPermission).await;
    controller.run(Action::PickImage).await;
    let before = controller.state().clone();

    controller.run(Action::Export).await;

    assert_eq!(permission.requests(), 1);
    assert_eq!(controller.state(), &before);
    assert_eq!(controller.state().media_permission(), PermissionStatus::Denied);
    let notices = controller.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
}

#[tokio::test]
async fn reset_keeps_image_and_sticker() {
    let mut controller = editing_controller().await;
    controller.run(Action::OpenStickerPicker).await;
    controller.run(Action::SelectSticker(StickerId::Star)).await;

    controller.run(Action::Reset).await;

    let state = controller.state();
    assert_eq!(state.mode(), WorkflowMode::Initial);
    assert_eq!(state.selected_image(), Some(&ImageRef::from("img1")));
    assert_eq!(state.sticker().map(|s| s.id), Some(StickerId::Star));
}

#[tokio::test]
async fn selected_image_tracks_latest_successful_pick() {
    let mut controller = controller_with(
        ScriptedPicker::with([
            picked("a"),
            picked("b"),
            PickOutcome::Cancelled,
            picked("c"),
            PickOutcome::Cancelled,
        ]),
        Arc::new(RecordingExporter::default()),
    );

    let mut latest = None;
    for expected in ["a", "b", "b", "c", "c"] {
        controller.run(Action::PickImage).await;
        latest = controller.state().selected_image().cloned();
        assert_eq!(latest, Some(ImageRef::from(expected)));
        assert_eq!(controller.state().mode(), WorkflowMode::Editing);
    }
    assert_eq!(latest, Some(ImageRef::from("c")));
}

#[tokio::test]
async fn reset_is_idempotent_from_any_state() {
    let mut controller = editing_controller().await;
    controller.run(Action::OpenStickerPicker).await;

    controller.run(Action::Reset).await;
    let once = controller.state().clone();
    controller.run(Action::Reset).await;

    assert_eq!(controller.state(), &once);
    assert_eq!(once.mode(), WorkflowMode::Initial);

    let mut fresh = controller_with(
        ScriptedPicker::default(),
        Arc::new(RecordingExporter::default()),
    );
    fresh.run(Action::Reset).await;
    assert_eq!(fresh.state().mode(), WorkflowMode::Initial);
}

#[tokio::test]
async fn sticker_cannot_be_selected_with_picker_closed() {
    let mut controller = editing_controller().await;

    controller.run(Action::SelectSticker(StickerId::Heart)).await;
    assert!(controller.state().sticker().is_none());

    controller.run(Action::OpenStickerPicker).await;
    controller.run(Action::CloseStickerPicker).await;
    controller.run(Action::SelectSticker(StickerId::Heart)).await;
    assert!(controller.state().sticker().is_none());
}

#[tokio::test]
async fn export_never_changes_state() {
    for fail in [false, true] {
        let exporter = Arc::new(RecordingExporter {
            fail,
            ..RecordingExporter::default()
        });
        let mut controller =
            controller_with(ScriptedPicker::with([picked("img1")]), exporter.clone());
        controller.run(Action::PickImage).await;
        controller.run(Action::OpenStickerPicker).await;
        controller.run(Action::SelectSticker(StickerId::Party)).await;
        controller.run(Action::MoveSticker { x: 30.0, y: 200.0 }).await;
        let before = controller.state().clone();

        controller.run(Action::Export).await;

        assert_eq!(controller.state(), &before);
        let snapshots = exporter.snapshots.lock().expect("exporter lock");
        assert_eq!(snapshots.as_slice(), &[before.snapshot()]);
        let notices = controller.take_notices();
        assert_eq!(notices.len(), 1);
        let expected = if fail {
            NoticeKind::Error
        } else {
            NoticeKind::Success
        };
        assert_eq!(notices[0].kind, expected);
    }
}

#[tokio::test]
async fn export_is_ignored_before_editing() {
    let exporter = Arc::new(RecordingExporter::default());
    let mut controller = controller_with(ScriptedPicker::default(), exporter.clone());

    controller.run(Action::Export).await;

    assert!(exporter.snapshots.lock().expect("exporter lock").is_empty());
    assert!(controller.take_notices().is_empty());
}

#[tokio::test]
async fn startup_permission_is_requested_only_once() {
    let permission = Arc::new(FixedPermission::new(
        PermissionStatus::Unknown,
        PermissionStatus::Granted,
    ));
    let mut controller = WorkflowController::new(Capabilities {
        image_picker: Arc::new(ScriptedPicker::default()),
        permission: permission.clone(),
        exporter: Arc::new(RecordingExporter::default()),
    });

    controller.run(Action::CheckPermission).await;
    assert_eq!(controller.state().media_permission(), PermissionStatus::Granted);

    controller.run(Action::CheckPermission).await;
    assert_eq!(permission.requests(), 1);
    // The fake keeps reporting `Unknown` without requesting
    assert_eq!(controller.state().media_permission(), PermissionStatus::Unknown);
}

#[tokio::test]
async fn denied_permission_is_not_requested_at_startup() {
    let permission = Arc::new(FixedPermission::new(
        PermissionStatus::Denied,
        PermissionStatus::Granted,
    ));
    let mut controller = WorkflowController::new(Capabilities {
        image_picker: Arc::new(ScriptedPicker::default()),
        permission: permission.clone(),
        exporter: Arc::new(RecordingExporter::default()),
    });

    controller.run(Action::CheckPermission).await;

    assert_eq!(permission.requests(), 0);
    assert_eq!(controller.state().media_permission(), PermissionStatus::Denied);
    assert_eq!(controller.state().mode(), WorkflowMode::Initial);
}
