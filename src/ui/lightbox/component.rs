// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating state and update logic.
//!
//! The component owns five spring-animated values (opacity and the four
//! geometry channels), the drag-to-dismiss recognizer, and the transition
//! phase. The host drives it with [`Message`]s and reacts to the
//! [`Effect`] returned by [`State::handle`]; `Effect::Closed` is the only
//! way the host learns the overlay fully closed.

use crate::platform::{NoopStatusBar, StatusBar};
use crate::ui::lightbox::geometry::{
    self, AnimatedValues, DismissTarget, Frame, OriginRect,
};
use crate::ui::lightbox::header;
use crate::ui::styles;
use crate::ui::state::{PanRecognizer, Release, Spring, SpringParams};
use iced::widget::{container, stack, Space};
use iced::{event, mouse, touch, window, Color, Element, Length, Padding, Point, Size};
use std::fmt;
use std::time::{Duration, Instant};

/// Default distance (logical pixels) a drag must travel vertically before
/// releasing it dismisses the overlay.
pub const DRAG_DISMISS_THRESHOLD: f32 = 150.0;

/// Nominal animation tick cadence; also used as the fallback delta for the
/// first tick after an idle period.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

const DEFAULT_WINDOW: Size = Size {
    width: 800.0,
    height: 600.0,
};

/// Static configuration of an overlay instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Enables the drag-to-dismiss gesture recognizer.
    pub swipe_to_dismiss: bool,
    /// Backdrop fill behind the content.
    pub background_color: Color,
    /// Release classification distance in logical pixels.
    pub drag_dismiss_threshold: f32,
    /// Spring tuning shared by every animated value.
    pub spring: SpringParams,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            swipe_to_dismiss: true,
            background_color: Color::BLACK,
            drag_dismiss_threshold: DRAG_DISMISS_THRESHOLD,
            spring: SpringParams::default(),
        }
    }
}

/// Transition phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Messages consumed by the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// The host's open flag turned true; expand from `origin`.
    Open { origin: OriginRect },
    /// Explicit close trigger (header button, escape key, backdrop tap).
    Close,
    /// Animation heartbeat from the host's tick subscription.
    Tick(Instant),
    /// Native window/mouse/touch event routed in by the host.
    RawEvent { event: event::Event },
}

/// Lifecycle notifications returned from [`State::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The open animation settled; the overlay is fully presented.
    Opened,
    /// A close began; fired before any close animation runs.
    WillClose,
    /// The close animation settled; the host should unmount the overlay.
    Closed,
}

/// Overlay state. All animation and gesture state is owned here; nothing
/// is shared between instances.
pub struct State {
    options: Options,
    phase: Phase,
    origin: OriginRect,
    target: DismissTarget,
    opacity: Spring,
    position_x: Spring,
    position_y: Spring,
    width: Spring,
    height: Spring,
    pan: PanRecognizer,
    /// Spring returning the pan offset to zero after an under-threshold
    /// release.
    pan_return: Spring,
    snapping_back: bool,
    cursor: Option<Point>,
    window: Size,
    last_tick: Option<Instant>,
    status_bar: Box<dyn StatusBar>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("phase", &self.phase)
            .field("origin", &self.origin)
            .field("target", &self.target)
            .field("is_panning", &self.is_panning())
            .finish()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl State {
    /// Creates a closed overlay with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            phase: Phase::Closed,
            origin: OriginRect::default(),
            target: DismissTarget::default(),
            opacity: Spring::resting_at(0.0),
            position_x: Spring::resting_at(0.0),
            position_y: Spring::resting_at(0.0),
            width: Spring::resting_at(0.0),
            height: Spring::resting_at(0.0),
            pan: PanRecognizer::default(),
            pan_return: Spring::resting_at(0.0),
            snapping_back: false,
            cursor: None,
            window: DEFAULT_WINDOW,
            last_tick: None,
            status_bar: Box::new(NoopStatusBar),
        }
    }

    /// Replaces the status-bar capability (tests inject a recording fake).
    pub fn set_status_bar(&mut self, status_bar: Box<dyn StatusBar>) {
        self.status_bar = status_bar;
    }

    /// Sets the window size used as the expanded endpoint. Also tracked
    /// automatically from routed `Resized` events.
    pub fn set_window_size(&mut self, size: Size) {
        self.window = size;
    }

    /// Handles an overlay message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open { origin } => self.open(origin),
            Message::Close => self.begin_close(),
            Message::Tick(now) => self.tick(now),
            Message::RawEvent { event } => self.raw_event(event),
        }
    }

    /// Whether the gesture recognizer may claim a new drag right now.
    /// Animations in flight keep the answer negative; a snap-back in
    /// progress does not (grabbing mid-return restarts the drag).
    #[must_use]
    pub fn can_claim_gesture(&self) -> bool {
        self.options.swipe_to_dismiss && self.phase == Phase::Open
    }

    /// True while an open or close transition is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Opening | Phase::Closing)
    }

    /// True while a drag owns the gesture or the pan offset is springing
    /// back to zero.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_active() || self.snapping_back
    }

    /// True from the start of an open until the close settles.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Whether the host should keep the tick subscription alive.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.opacity.is_live()
            || self.position_x.is_live()
            || self.position_y.is_live()
            || self.width.is_live()
            || self.height.is_live()
            || self.snapping_back
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn target(&self) -> DismissTarget {
        self.target
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Live pan offset: the raw drag delta while the gesture is owned, the
    /// springing value during snap-back, none otherwise.
    #[must_use]
    pub fn pan_offset(&self) -> Option<f32> {
        if self.pan.is_active() {
            Some(self.pan.dy())
        } else if self.snapping_back {
            Some(self.pan_return.value())
        } else {
            None
        }
    }

    /// Current render geometry.
    #[must_use]
    pub fn frame(&self) -> Frame {
        geometry::compute_frame(
            self.animated_values(),
            self.origin,
            self.target,
            self.window,
            self.pan_offset(),
        )
    }

    fn animated_values(&self) -> AnimatedValues {
        AnimatedValues {
            opacity: self.opacity.value(),
            position_x: self.position_x.value(),
            position_y: self.position_y.value(),
            width: self.width.value(),
            height: self.height.value(),
        }
    }

    /// Clears the tick anchor when no animation was running, so the first
    /// tick of a new transition integrates one nominal interval instead of
    /// the idle gap.
    fn wake(&mut self) {
        if !self.needs_tick() {
            self.last_tick = None;
        }
    }

    fn open(&mut self, origin: OriginRect) -> Effect {
        self.wake();
        self.origin = origin;
        self.target = DismissTarget::default();
        self.pan.cancel();
        self.snapping_back = false;
        self.pan_return.set(0.0);

        // Geometry rests at the expanded endpoint; the open transition is
        // an opacity fade. A reopen preempting a running close keeps the
        // current opacity and fades up from there.
        self.position_x.set(0.0);
        self.position_y.set(0.0);
        self.width.set(0.0);
        self.height.set(0.0);
        if self.phase == Phase::Closed {
            self.opacity.set(0.0);
        }
        self.opacity.retarget(1.0);

        self.phase = Phase::Opening;
        self.status_bar.set_hidden(true);
        Effect::None
    }

    fn begin_close(&mut self) -> Effect {
        if matches!(self.phase, Phase::Closed | Phase::Closing) {
            return Effect::None;
        }
        self.wake();
        self.pan.cancel();
        self.snapping_back = false;
        self.pan_return.set(0.0);

        self.phase = Phase::Closing;
        self.opacity.retarget(0.0);
        self.status_bar.set_hidden(false);
        Effect::WillClose
    }

    fn tick(&mut self, now: Instant) -> Effect {
        let dt = match self.last_tick {
            Some(previous) => now.saturating_duration_since(previous),
            None => TICK_INTERVAL,
        };
        self.last_tick = Some(now);

        let params = self.options.spring;
        let opacity_settled = self.opacity.step(dt, params);
        self.position_x.step(dt, params);
        self.position_y.step(dt, params);
        self.width.step(dt, params);
        self.height.step(dt, params);

        if self.snapping_back && self.pan_return.step(dt, params) {
            self.snapping_back = false;
        }

        match self.phase {
            Phase::Opening if opacity_settled => {
                self.phase = Phase::Open;
                Effect::Opened
            }
            Phase::Closing if opacity_settled => {
                self.phase = Phase::Closed;
                self.last_tick = None;
                Effect::Closed
            }
            _ => Effect::None,
        }
    }

    fn raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                self.window = size;
                Effect::None
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Some(position);
                self.pan.update(position);
                Effect::None
            }
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(cursor) = self.cursor {
                    self.press(cursor);
                }
                Effect::None
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.release()
            }
            event::Event::Mouse(mouse::Event::CursorLeft) => self.release(),
            event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                self.cursor = Some(position);
                self.press(position);
                Effect::None
            }
            event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                self.pan.update(position);
                Effect::None
            }
            event::Event::Touch(
                touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
            ) => self.release(),
            _ => Effect::None,
        }
    }

    fn press(&mut self, position: Point) {
        if !self.can_claim_gesture() || self.pan.is_active() {
            return;
        }
        if !self.frame().contains(position) {
            return;
        }
        self.snapping_back = false;
        self.pan_return.set(0.0);
        self.pan.grant(position);
    }

    fn release(&mut self) -> Effect {
        match self.pan.release(self.options.drag_dismiss_threshold) {
            None => Effect::None,
            Some(Release::SnapBack { dy }) => {
                self.wake();
                self.pan_return.set(dy);
                self.pan_return.retarget(0.0);
                // A press released without movement has nothing to return.
                self.snapping_back = self.pan_return.is_live();
                Effect::None
            }
            Some(Release::Dismiss { dx, dy }) => {
                self.target = DismissTarget {
                    x: dx,
                    y: dy,
                    opacity: geometry::pan_opacity(dy, self.window.height),
                };
                // Continue the fade from the panned opacity instead of
                // snapping the backdrop back to full.
                self.opacity.set(self.target.opacity);
                self.begin_close()
            }
        }
    }
}

/// Renders the overlay with the default header.
pub fn view<'a>(state: &State, content: Element<'a, Message>) -> Element<'a, Message> {
    let frame = state.frame();
    layered(state, frame, content, header::default_header(frame.opacity))
}

/// Renders the overlay with a caller-supplied header. The factory receives
/// the close trigger to wire into its own widgets.
pub fn view_with_header<'a>(
    state: &State,
    content: Element<'a, Message>,
    render_header: impl FnOnce(Message) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let frame = state.frame();
    layered(state, frame, content, render_header(Message::Close))
}

fn layered<'a>(
    state: &State,
    frame: Frame,
    content: Element<'a, Message>,
    header: Element<'a, Message>,
) -> Element<'a, Message> {
    let background = container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop(
            state.options.background_color,
            frame.opacity,
        ));

    // Containers cannot offset content past the window edge; clamp.
    let content_box = container(content)
        .width(Length::Fixed(frame.width.max(0.0)))
        .height(Length::Fixed(frame.height.max(0.0)))
        .clip(true);
    let positioned = container(content_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: frame.y.max(0.0),
            left: frame.x.max(0.0),
            right: 0.0,
            bottom: 0.0,
        });

    let header_layer = container(header)
        .width(Length::Fill)
        .style(styles::overlay::header_container);

    stack![background, positioned, header_layer].into()
}
