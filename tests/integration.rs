// SPDX-License-Identifier: MPL-2.0
//! Lifecycle tests driving the overlay through its public API, the same
//! way the application update loop does: messages in, effects out.

use approx::assert_abs_diff_eq;
use iced_lightbox::ui::lightbox::{
    DismissTarget, Effect, Message, Options, OriginRect, Phase, State, TICK_INTERVAL,
};
use iced::{event, mouse, Point, Size};
use std::time::Instant;

const WINDOW: Size = Size {
    width: 800.0,
    height: 600.0,
};

fn thumbnail_origin() -> OriginRect {
    OriginRect {
        x: 24.0,
        y: 24.0,
        width: 200.0,
        height: 140.0,
    }
}

fn new_overlay(options: Options) -> State {
    let mut state = State::new(options);
    state.set_window_size(WINDOW);
    state
}

fn cursor_moved(state: &mut State, x: f32, y: f32) -> Effect {
    state.handle(Message::RawEvent {
        event: event::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        }),
    })
}

fn press(state: &mut State) -> Effect {
    state.handle(Message::RawEvent {
        event: event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
    })
}

fn release(state: &mut State) -> Effect {
    state.handle(Message::RawEvent {
        event: event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
    })
}

/// Ticks until the overlay goes idle, collecting every non-trivial effect.
fn drain_effects(state: &mut State, mut now: Instant) -> (Vec<Effect>, Instant) {
    let mut effects = Vec::new();
    for _ in 0..1000 {
        if !state.needs_tick() {
            break;
        }
        now += TICK_INTERVAL;
        match state.handle(Message::Tick(now)) {
            Effect::None => {}
            effect => effects.push(effect),
        }
    }
    (effects, now)
}

fn open_fully(state: &mut State) -> Instant {
    state.handle(Message::Open {
        origin: thumbnail_origin(),
    });
    let (effects, now) = drain_effects(state, Instant::now());
    assert_eq!(effects, vec![Effect::Opened]);
    now
}

#[test]
fn open_notifies_exactly_once_after_fade_in() {
    let mut overlay = new_overlay(Options::default());
    overlay.handle(Message::Open {
        origin: thumbnail_origin(),
    });

    let (effects, _) = drain_effects(&mut overlay, Instant::now());

    assert_eq!(effects, vec![Effect::Opened]);
    assert_eq!(overlay.phase(), Phase::Open);
    assert_abs_diff_eq!(overlay.frame().opacity, 1.0);
}

#[test]
fn close_notifies_will_close_before_closed() {
    let mut overlay = new_overlay(Options::default());
    let now = open_fully(&mut overlay);

    let mut effects = vec![overlay.handle(Message::Close)];
    let (rest, _) = drain_effects(&mut overlay, now);
    effects.extend(rest);

    assert_eq!(effects, vec![Effect::WillClose, Effect::Closed]);
    assert!(!overlay.is_visible());
}

#[test]
fn disabled_swipe_ignores_drag_input() {
    let mut overlay = new_overlay(Options {
        swipe_to_dismiss: false,
        ..Options::default()
    });
    open_fully(&mut overlay);

    cursor_moved(&mut overlay, 400.0, 200.0);
    press(&mut overlay);
    cursor_moved(&mut overlay, 400.0, 560.0);
    let effect = release(&mut overlay);

    assert_eq!(effect, Effect::None);
    assert!(!overlay.is_panning());
    assert_abs_diff_eq!(overlay.frame().y, 0.0);
    assert_abs_diff_eq!(overlay.frame().opacity, 1.0);
    assert_eq!(overlay.phase(), Phase::Open);
}

#[test]
fn short_drag_springs_back_without_closing() {
    let mut overlay = new_overlay(Options::default());
    let now = open_fully(&mut overlay);

    cursor_moved(&mut overlay, 400.0, 200.0);
    press(&mut overlay);
    cursor_moved(&mut overlay, 400.0, 350.0); // dy = 150, at the threshold
    let effect = release(&mut overlay);
    assert_eq!(effect, Effect::None);

    let (effects, _) = drain_effects(&mut overlay, now);
    assert!(effects.is_empty(), "no close may fire: {effects:?}");
    assert_eq!(overlay.phase(), Phase::Open);
    assert!(!overlay.is_panning());
    assert_abs_diff_eq!(overlay.frame().y, 0.0);
}

#[test]
fn long_drag_dismisses_with_gesture_target() {
    let mut overlay = new_overlay(Options::default());
    let now = open_fully(&mut overlay);

    cursor_moved(&mut overlay, 400.0, 200.0);
    press(&mut overlay);
    cursor_moved(&mut overlay, 440.0, 401.0); // dx = 40, dy = 201
    let effect = release(&mut overlay);
    assert_eq!(effect, Effect::WillClose);

    let target = overlay.target();
    assert_abs_diff_eq!(target.x, 40.0);
    assert_abs_diff_eq!(target.y, 201.0);
    assert_abs_diff_eq!(target.opacity, 1.0 - 201.0 / WINDOW.height);

    let (effects, _) = drain_effects(&mut overlay, now);
    assert_eq!(effects, vec![Effect::Closed]);
}

#[test]
fn pan_opacity_interpolates_symmetrically() {
    let mut overlay = new_overlay(Options::default());
    open_fully(&mut overlay);

    cursor_moved(&mut overlay, 400.0, 300.0);
    press(&mut overlay);

    // At rest the backdrop is fully opaque.
    assert_abs_diff_eq!(overlay.frame().opacity, 1.0);

    // A full window-height down fades it out entirely...
    cursor_moved(&mut overlay, 400.0, 300.0 + WINDOW.height);
    assert_abs_diff_eq!(overlay.frame().opacity, 0.0);

    // ...and so does a full window-height up.
    cursor_moved(&mut overlay, 400.0, 300.0 - WINDOW.height);
    assert_abs_diff_eq!(overlay.frame().opacity, 0.0);

    // Halfway matches the linear fraction on either side.
    cursor_moved(&mut overlay, 400.0, 300.0 + WINDOW.height / 2.0);
    assert_abs_diff_eq!(overlay.frame().opacity, 0.5);
}

#[test]
fn reopen_resets_target_and_pan() {
    let mut overlay = new_overlay(Options::default());
    let now = open_fully(&mut overlay);

    // Dismiss by drag, leaving a non-default target behind.
    cursor_moved(&mut overlay, 400.0, 200.0);
    press(&mut overlay);
    cursor_moved(&mut overlay, 380.0, 520.0);
    release(&mut overlay);
    let (effects, now) = drain_effects(&mut overlay, now);
    assert_eq!(effects, vec![Effect::Closed]);
    assert_ne!(overlay.target(), DismissTarget::default());

    overlay.handle(Message::Open {
        origin: thumbnail_origin(),
    });
    assert_eq!(overlay.target(), DismissTarget::default());
    assert_eq!(overlay.pan_offset(), None);

    let (effects, _) = drain_effects(&mut overlay, now);
    assert_eq!(effects, vec![Effect::Opened]);
}

#[test]
fn closed_effect_fires_once_per_close() {
    let mut overlay = new_overlay(Options::default());
    let now = open_fully(&mut overlay);

    overlay.handle(Message::Close);
    // A second close request while already closing must not double up.
    let repeat = overlay.handle(Message::Close);
    assert_eq!(repeat, Effect::None);

    let (effects, _) = drain_effects(&mut overlay, now);
    assert_eq!(effects, vec![Effect::Closed]);
}

#[test]
fn close_during_open_preempts_the_fade() {
    let mut overlay = new_overlay(Options::default());
    overlay.handle(Message::Open {
        origin: thumbnail_origin(),
    });

    // Advance partway into the fade-in.
    let mut now = Instant::now();
    for _ in 0..3 {
        now += TICK_INTERVAL;
        overlay.handle(Message::Tick(now));
    }
    let mid = overlay.frame().opacity;
    assert!(mid > 0.0 && mid < 1.0);

    assert_eq!(overlay.handle(Message::Close), Effect::WillClose);
    let (effects, _) = drain_effects(&mut overlay, now);

    assert_eq!(effects, vec![Effect::Closed]);
    assert!(!overlay.is_visible());
}
