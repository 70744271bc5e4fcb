//! Edit session state: the photo being annotated and everything drawn on it.

use crate::draw::{Color, Stroke, StrokeHistory, color::RED};
use crate::image::ImageRef;
use crate::input::{
    DrawingRecorder, GestureTarget, InteractionMode, TouchEvent, TouchPhase, TouchRouter,
};
use crate::sticker::{DEFAULT_STICKER_FOOTPRINT, PlacedSticker, StickerPlacer, StickerTemplate};

/// Default thickness of freehand segments in pixels.
pub const DEFAULT_STROKE_THICKNESS: f64 = 5.0;

/// Tunables applied when a session is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    /// Pen color selected when the editor opens
    pub default_color: Color,
    /// Thickness of every rendered stroke segment
    pub stroke_thickness: f64,
    /// Width and height of placed stickers
    pub sticker_footprint: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            default_color: RED,
            stroke_thickness: DEFAULT_STROKE_THICKNESS,
            sticker_footprint: DEFAULT_STICKER_FOOTPRINT,
        }
    }
}

/// Full in-memory state of one photo annotation.
///
/// The session exclusively owns its strokes and stickers; nothing is shared
/// outside it and nothing outlives [`discard`](Self::discard). All mutation
/// goes through `&mut self`, so a single screen is the only writer.
#[derive(Debug)]
pub struct EditSession {
    /// Captured photo; `None` means the camera preview is showing
    photo: Option<ImageRef>,
    /// Committed strokes in z-order
    history: StrokeHistory,
    /// Live stroke state machine
    recorder: DrawingRecorder,
    /// Placed stickers in z-order
    stickers: Vec<PlacedSticker>,
    caption: String,
    mode: InteractionMode,
    /// Template the next sticker gesture will place
    armed: Option<StickerTemplate>,
    /// Pen color selector value
    current_color: Color,
    router: TouchRouter,
    placer: StickerPlacer,
    settings: SessionSettings,
    /// Whether the canvas must be re-composed
    needs_redraw: bool,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl EditSession {
    /// Creates an empty session with no captured photo.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            photo: None,
            history: StrokeHistory::new(),
            recorder: DrawingRecorder::new(),
            stickers: Vec::new(),
            caption: String::new(),
            mode: InteractionMode::default(),
            armed: None,
            current_color: settings.default_color,
            router: TouchRouter::new(),
            placer: StickerPlacer::new(settings.sticker_footprint),
            settings,
            needs_redraw: true,
        }
    }

    /// Enters edit mode on a freshly captured photo.
    ///
    /// Any leftover annotations from a previous photo are dropped first.
    pub fn begin(&mut self, photo: ImageRef) {
        self.clear_annotations();
        log::info!("Editing captured photo {}", photo);
        self.photo = Some(photo);
        self.needs_redraw = true;
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    pub fn photo(&self) -> Option<&ImageRef> {
        self.photo.as_ref()
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Switches the interaction mode.
    ///
    /// Entering `Drawing` disarms any armed sticker so that drawing and
    /// placing are never both possible.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if mode == InteractionMode::Drawing
            && let Some(template) = self.armed.take()
        {
            log::debug!("Disarmed sticker template {} on drawing mode", template.id);
        }
        if self.mode != mode {
            log::debug!("Interaction mode: {} -> {}", self.mode, mode);
            self.mode = mode;
            self.needs_redraw = true;
        }
    }

    /// Marks `template` as the sticker the next touch will place.
    ///
    /// Only legal in sticker mode; returns `false` (and arms nothing) while
    /// drawing.
    pub fn arm_sticker(&mut self, template: StickerTemplate) -> bool {
        if self.mode != InteractionMode::Sticker {
            log::warn!(
                "Ignoring sticker {} selection while in {} mode",
                template.id,
                self.mode
            );
            return false;
        }
        log::debug!("Armed sticker template {}", template.id);
        self.armed = Some(template);
        true
    }

    pub fn disarm_sticker(&mut self) {
        self.armed = None;
    }

    pub fn armed_sticker(&self) -> Option<&StickerTemplate> {
        self.armed.as_ref()
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Changes the pen color. Takes effect from the next touch event, even in
    /// the middle of a gesture.
    pub fn select_color(&mut self, color: Color) {
        self.current_color = color;
        self.needs_redraw = true;
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    pub fn strokes(&self) -> &StrokeHistory {
        &self.history
    }

    /// The stroke being traced right now, if any.
    pub fn live_stroke(&self) -> Option<&Stroke> {
        self.recorder.live_stroke()
    }

    pub fn stickers(&self) -> &[PlacedSticker] {
        &self.stickers
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Returns whether the canvas changed since the last call and clears the
    /// flag. Hosts call it once per frame and re-run
    /// [`compose`](Self::compose) when it is `true`.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Feeds one touch event through the router.
    ///
    /// Returns whether the session changed. Touches before a photo exists are
    /// ignored.
    pub fn handle_touch(&mut self, event: TouchEvent) -> bool {
        if self.photo.is_none() {
            log::debug!("Touch {:?} ignored without a captured photo", event.phase);
            return false;
        }

        let target = self
            .router
            .route(&event, self.mode, self.armed.is_some());

        let changed = match (target, event.phase) {
            (GestureTarget::Drawing, TouchPhase::Start) => {
                self.recorder
                    .on_touch_start(event.x, event.y, self.current_color);
                true
            }
            (GestureTarget::Drawing, TouchPhase::Move) => {
                self.recorder
                    .on_touch_move(event.x, event.y, self.current_color)
            }
            (GestureTarget::Drawing, TouchPhase::End) => {
                self.recorder.on_touch_end(&mut self.history)
            }
            (GestureTarget::Sticker, TouchPhase::Start) => match self.armed.take() {
                Some(template) => {
                    let sticker = self.placer.place(&template, event.x, event.y);
                    self.stickers.push(sticker);
                    true
                }
                None => false,
            },
            (GestureTarget::Sticker, _) | (GestureTarget::Ignored, _) => false,
        };

        if changed {
            self.needs_redraw = true;
        }
        changed
    }

    /// Feeds a sequence of touch events, returning whether any changed state.
    pub fn handle_touches(&mut self, events: impl IntoIterator<Item = TouchEvent>) -> bool {
        events
            .into_iter()
            .fold(false, |changed, event| self.handle_touch(event) || changed)
    }

    /// Throws the photo and all annotations away, returning to the camera.
    ///
    /// Mode and pen color survive so the next photo opens with the same tools.
    pub fn discard(&mut self) {
        self.clear_annotations();
        if self.photo.take().is_some() {
            log::info!("Discarded edit session");
        }
        self.needs_redraw = true;
    }

    fn clear_annotations(&mut self) {
        self.history.clear();
        self.recorder.reset();
        self.router.reset();
        self.stickers.clear();
        self.caption.clear();
        self.armed = None;
    }
}
