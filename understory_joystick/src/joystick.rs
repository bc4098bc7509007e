// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The joystick state machine.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Circle, Point, Size};
use log::{debug, trace};

use crate::config::{ConfigError, JoystickConfig};
use crate::constrain::{Constrained, displace_within_travel, project_onto_travel};
use crate::drag::KnobDrag;
use crate::layout::JoystickLayout;
use crate::output::{AxisMax, OutputValue};
use crate::paint::JoystickPainter;
use crate::recenter::RecenterAnimation;

bitflags::bitflags! {
    /// What changed as the result of feeding an event to a [`Joystick`].
    ///
    /// Hosts use this to decide whether to schedule a repaint or to forward
    /// the new [`OutputValue`] elsewhere.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// The knob or track moved; the widget should be repainted.
        const REPAINT = 0b0000_0001;
        /// [`Joystick::output`] changed and the output listener was notified.
        const OUTPUT  = 0b0000_0010;
        /// [`Joystick::phase`] changed.
        const PHASE   = 0b0000_0100;
        /// The track limited the knob during this drag update.
        const CLAMPED = 0b0000_1000;
    }
}

/// Interaction phase of a [`Joystick`].
///
/// Exactly one phase is active at a time, so a drag and a recenter animation
/// can never run together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Knob at rest in the center.
    Idle,
    /// The pointer holds the knob.
    Dragging,
    /// The knob is animating back to the center.
    Recentering,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Idle,
    Dragging(KnobDrag),
    Recentering {
        animation: RecenterAnimation,
        progress: f64,
    },
}

type OutputListener = Box<dyn FnMut(OutputValue)>;

/// A headless on-screen joystick.
///
/// The joystick owns its geometry and interaction state; the host feeds it
/// resize, pointer, and animation-frame events in widget-local coordinates
/// (y pointing down) and acts on the returned [`Changes`].
///
/// - Pressing on the knob starts a drag (interrupting any recenter animation).
/// - While dragging, the knob follows the pointer's movement but never leaves
///   the track.
/// - Releasing starts a recenter animation; the host drives it with
///   [`Joystick::on_animation_frame`] (or [`Joystick::set_recenter_progress`])
///   while [`Joystick::wants_animation_frame`] is `true`.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_joystick::{Joystick, Phase};
///
/// let mut joystick = Joystick::new();
/// joystick.on_resize(Size::new(400.0, 400.0));
///
/// joystick.on_pointer_down(Point::new(200.0, 200.0));
/// joystick.on_pointer_move(Point::new(260.0, 200.0));
/// assert_eq!(joystick.output().x, 37.5);
///
/// joystick.on_pointer_up(1_000);
/// assert_eq!(joystick.phase(), Phase::Recentering);
/// joystick.on_animation_frame(1_250);
/// assert_eq!(joystick.phase(), Phase::Idle);
/// assert!(joystick.output().is_zero());
/// ```
pub struct Joystick {
    config: JoystickConfig,
    size: Size,
    layout: JoystickLayout,
    knob_center: Point,
    axis_max: AxisMax,
    output: OutputValue,
    motion: Motion,
    listener: Option<OutputListener>,
}

impl Joystick {
    /// Smallest size at which the joystick remains usable.
    pub const MIN_SIZE: Size = Size::new(100.0, 100.0);
    /// Size hosts should allocate when they have no other constraint.
    pub const PREFERRED_SIZE: Size = Size::new(200.0, 200.0);

    /// Creates a joystick with the default configuration and zero size.
    ///
    /// Call [`Joystick::on_resize`] before feeding pointer events.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(JoystickConfig::default())
    }

    /// Creates a joystick with a custom configuration.
    pub fn with_config(config: JoystickConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: JoystickConfig) -> Self {
        let layout = JoystickLayout::from_size(Size::ZERO, &config);
        Self {
            config,
            size: Size::ZERO,
            layout,
            knob_center: layout.center(),
            axis_max: config.axis_max,
            output: OutputValue::ZERO,
            motion: Motion::Idle,
            listener: None,
        }
    }

    /// The configuration this joystick was built with.
    #[must_use]
    pub fn config(&self) -> &JoystickConfig {
        &self.config
    }

    /// Current widget size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current track and knob geometry.
    #[must_use]
    pub fn layout(&self) -> &JoystickLayout {
        &self.layout
    }

    /// Current knob center in widget coordinates.
    #[must_use]
    pub fn knob_center(&self) -> Point {
        self.knob_center
    }

    /// Current knob circle.
    #[must_use]
    pub fn knob(&self) -> Circle {
        self.layout.knob_at(self.knob_center)
    }

    /// Current output reading.
    #[must_use]
    pub fn output(&self) -> OutputValue {
        self.output
    }

    /// Current axis maxima.
    #[must_use]
    pub fn axis_max(&self) -> AxisMax {
        self.axis_max
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.motion {
            Motion::Idle => Phase::Idle,
            Motion::Dragging(_) => Phase::Dragging,
            Motion::Recentering { .. } => Phase::Recentering,
        }
    }

    /// Recenter progress: `1.0` while dragging, the animated value while
    /// recentering, and `0.0` at rest.
    #[must_use]
    pub fn recenter_progress(&self) -> f64 {
        match self.motion {
            Motion::Idle => 0.0,
            Motion::Dragging(_) => 1.0,
            Motion::Recentering { progress, .. } => progress,
        }
    }

    /// Returns `true` while a recenter animation needs frames.
    #[must_use]
    pub fn wants_animation_frame(&self) -> bool {
        matches!(self.motion, Motion::Recentering { .. })
    }

    /// Sets both axis maxima.
    ///
    /// The new maxima apply from the next output recompute; the current
    /// reading is not rescaled.
    pub fn set_axis_max(&mut self, axis_max: AxisMax) {
        if self.axis_max != axis_max {
            debug!("joystick axis max {:?} -> {:?}", self.axis_max, axis_max);
            self.axis_max = axis_max;
        }
    }

    /// Sets the maximum of the horizontal axis. See [`Joystick::set_axis_max`].
    pub fn set_axis_max_x(&mut self, max: u32) {
        self.set_axis_max(AxisMax::new(max, self.axis_max.y));
    }

    /// Sets the maximum of the vertical axis. See [`Joystick::set_axis_max`].
    pub fn set_axis_max_y(&mut self, max: u32) {
        self.set_axis_max(AxisMax::new(self.axis_max.x, max));
    }

    /// Installs a callback invoked whenever the output reading changes.
    ///
    /// Replaces any previously installed listener.
    pub fn set_output_listener(&mut self, listener: impl FnMut(OutputValue) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the output listener, if any.
    pub fn clear_output_listener(&mut self) {
        self.listener = None;
    }

    /// Handles a widget resize.
    ///
    /// Track and knob are re-derived from the new size and the knob returns
    /// to the new center. A drag in progress continues from there, with
    /// pointer movement measured from the new knob center; a recenter
    /// animation in progress is finished immediately.
    pub fn on_resize(&mut self, size: Size) -> Changes {
        self.size = size;
        self.layout = JoystickLayout::from_size(size, &self.config);
        debug!(
            "joystick resized to {}x{}: track radius {}, knob radius {}",
            size.width,
            size.height,
            self.layout.track_radius(),
            self.layout.knob_radius()
        );

        let mut changes = Changes::REPAINT;
        self.knob_center = self.layout.center();
        if let Motion::Dragging(drag) = &mut self.motion {
            // Later moves are measured from the re-centered knob.
            debug!(
                "joystick drag re-anchored from ({}, {})",
                drag.last_pos().x,
                drag.last_pos().y
            );
            *drag = KnobDrag::start(self.knob_center);
        } else if let Motion::Recentering { .. } = self.motion {
            self.motion = Motion::Idle;
            changes |= Changes::PHASE;
        }
        changes | self.recompute_output()
    }

    /// Handles a pointer press at `pos`.
    ///
    /// Only presses on the knob are accepted. A press during a recenter
    /// animation stops it and grabs the knob where it currently is.
    pub fn on_pointer_down(&mut self, pos: Point) -> Changes {
        if matches!(self.motion, Motion::Dragging(_))
            || !self.layout.hit_knob(self.knob_center, pos)
        {
            return Changes::empty();
        }
        if let Motion::Recentering { progress, .. } = self.motion {
            debug!("joystick recenter interrupted at progress {progress}");
        }
        debug!("joystick drag started at ({}, {})", pos.x, pos.y);
        self.motion = Motion::Dragging(KnobDrag::start(pos));
        Changes::PHASE
    }

    /// Handles a pointer move to `pos`.
    ///
    /// Ignored unless dragging. While the pointer is on the track the knob is
    /// displaced by the pointer's movement; once it leaves the track the knob
    /// snaps to the pointer's direction at the edge of its travel.
    pub fn on_pointer_move(&mut self, pos: Point) -> Changes {
        let Motion::Dragging(drag) = &mut self.motion else {
            return Changes::empty();
        };
        let delta = drag.update(pos);
        let center = self.layout.center();
        let travel = self.layout.travel();
        let Constrained { position, clamped } = if self.layout.hit_track(pos) {
            displace_within_travel(center, travel, self.knob_center, delta)
        } else {
            project_onto_travel(center, travel, pos)
        };
        trace!(
            "joystick drag to ({}, {}), knob ({}, {}), clamped {clamped}",
            pos.x, pos.y, position.x, position.y
        );

        let mut changes = Changes::empty();
        if clamped {
            changes |= Changes::CLAMPED;
        }
        if position != self.knob_center {
            self.knob_center = position;
            changes |= Changes::REPAINT;
        }
        changes | self.recompute_output()
    }

    /// Handles a pointer release.
    ///
    /// Ends a drag and starts the recenter animation at `now_ms`.
    pub fn on_pointer_up(&mut self, now_ms: u64) -> Changes {
        if !matches!(self.motion, Motion::Dragging(_)) {
            return Changes::empty();
        }
        let release_offset = self.layout.offset_of(self.knob_center);
        let animation = RecenterAnimation::new(
            now_ms,
            self.config.recenter_duration_ms,
            release_offset,
            self.config.recenter_easing,
        );
        debug!(
            "joystick released at offset ({}, {}), recentering over {} ms",
            release_offset.x,
            release_offset.y,
            animation.duration_ms()
        );
        self.motion = Motion::Recentering {
            animation,
            progress: 1.0,
        };
        Changes::PHASE
    }

    /// Advances the recenter animation to `now_ms`.
    ///
    /// Ignored unless recentering. When the animation ends the knob sits
    /// exactly at the center and the output reads zero.
    pub fn on_animation_frame(&mut self, now_ms: u64) -> Changes {
        let Motion::Recentering { animation, .. } = self.motion else {
            return Changes::empty();
        };
        let progress = if animation.is_finished(now_ms) {
            0.0
        } else {
            animation.progress(now_ms)
        };
        self.apply_recenter(animation, progress)
    }

    /// Sets the recenter progress directly, for hosts that run their own
    /// animation engine.
    ///
    /// `progress` is clamped to `[0, 1]`; `0.0` finishes the animation.
    /// Ignored unless recentering.
    pub fn set_recenter_progress(&mut self, progress: f64) -> Changes {
        let Motion::Recentering { animation, .. } = self.motion else {
            return Changes::empty();
        };
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.apply_recenter(animation, progress)
    }

    fn apply_recenter(&mut self, animation: RecenterAnimation, progress: f64) -> Changes {
        self.knob_center = self.layout.center() + animation.offset_at(progress);
        let mut changes = Changes::REPAINT;
        if progress <= 0.0 {
            debug!("joystick recentered");
            self.motion = Motion::Idle;
            changes |= Changes::PHASE;
        } else {
            trace!("joystick recenter progress {progress}");
            self.motion = Motion::Recentering {
                animation,
                progress,
            };
        }
        changes | self.recompute_output()
    }

    fn recompute_output(&mut self) -> Changes {
        let output = OutputValue::from_offset(
            self.layout.offset_of(self.knob_center),
            self.layout.travel(),
            self.axis_max,
        );
        if output == self.output {
            return Changes::empty();
        }
        self.output = output;
        if let Some(listener) = &mut self.listener {
            listener(output);
        }
        Changes::OUTPUT
    }

    /// Paints the track and then the knob.
    pub fn paint(&self, painter: &mut impl JoystickPainter) {
        let style = &self.config.style;
        painter.fill_circle(self.layout.track(), style.track);
        painter.fill_circle(self.knob(), style.knob);
    }
}

impl Default for Joystick {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Joystick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Joystick")
            .field("config", &self.config)
            .field("size", &self.size)
            .field("layout", &self.layout)
            .field("knob_center", &self.knob_center)
            .field("axis_max", &self.axis_max)
            .field("output", &self.output)
            .field("motion", &self.motion)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;
    use crate::paint::JoystickScene;

    fn sized() -> Joystick {
        let mut j = Joystick::new();
        j.on_resize(Size::new(400.0, 400.0));
        j
    }

    #[test]
    fn starts_idle_and_centered() {
        let j = sized();
        assert_eq!(j.phase(), Phase::Idle);
        assert_eq!(j.knob_center(), Point::new(200.0, 200.0));
        assert_eq!(j.output(), OutputValue::ZERO);
        assert_eq!(j.recenter_progress(), 0.0);
        assert!(!j.wants_animation_frame());
    }

    #[test]
    fn press_outside_knob_is_ignored() {
        let mut j = sized();
        assert_eq!(j.on_pointer_down(Point::new(250.0, 200.0)), Changes::empty());
        assert_eq!(j.phase(), Phase::Idle);
        assert_eq!(j.on_pointer_move(Point::new(260.0, 200.0)), Changes::empty());
        assert_eq!(j.knob_center(), Point::new(200.0, 200.0));
    }

    #[test]
    fn drag_follows_pointer_delta() {
        let mut j = sized();
        // Grab off-center; the knob must not jump to the pointer.
        assert_eq!(j.on_pointer_down(Point::new(210.0, 205.0)), Changes::PHASE);
        let changes = j.on_pointer_move(Point::new(220.0, 205.0));
        assert!(changes.contains(Changes::REPAINT | Changes::OUTPUT));
        assert!(!changes.contains(Changes::CLAMPED));
        assert_eq!(j.knob_center(), Point::new(210.0, 200.0));
    }

    #[test]
    fn leaving_the_track_projects_onto_the_edge() {
        let mut j = sized();
        j.on_pointer_down(Point::new(200.0, 200.0));
        let changes = j.on_pointer_move(Point::new(200.0, 0.0));
        assert!(changes.contains(Changes::CLAMPED));
        assert!((j.knob_center().y - 120.0).abs() < 1e-9);
        assert!((j.output().y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn release_starts_recentering_and_frames_finish_it() {
        let mut j = sized();
        j.on_pointer_down(Point::new(200.0, 200.0));
        j.on_pointer_move(Point::new(240.0, 170.0));
        assert_eq!(j.on_pointer_up(500), Changes::PHASE);
        assert_eq!(j.phase(), Phase::Recentering);
        assert_eq!(j.recenter_progress(), 1.0);

        let changes = j.on_animation_frame(600);
        assert!(changes.contains(Changes::REPAINT));
        assert!(j.recenter_progress() > 0.0 && j.recenter_progress() < 1.0);

        let changes = j.on_animation_frame(750);
        assert!(changes.contains(Changes::PHASE | Changes::OUTPUT));
        assert_eq!(j.phase(), Phase::Idle);
        assert_eq!(j.knob_center(), Point::new(200.0, 200.0));
        assert_eq!(j.output(), OutputValue::ZERO);
        assert_eq!(j.on_animation_frame(800), Changes::empty());
    }

    #[test]
    fn release_without_drag_is_ignored() {
        let mut j = sized();
        assert_eq!(j.on_pointer_up(0), Changes::empty());
        assert_eq!(j.phase(), Phase::Idle);
    }

    #[test]
    fn host_driven_progress() {
        let mut j = sized();
        j.on_pointer_down(Point::new(200.0, 200.0));
        j.on_pointer_move(Point::new(280.0, 200.0));
        j.on_pointer_up(0);

        j.set_recenter_progress(0.5);
        assert!((j.knob_center().x - 240.0).abs() < 1e-9);
        assert!((j.output().x - 25.0).abs() < 1e-9);

        j.set_recenter_progress(-1.0);
        assert_eq!(j.phase(), Phase::Idle);
        assert_eq!(j.output(), OutputValue::ZERO);
        assert_eq!(j.set_recenter_progress(0.5), Changes::empty());
    }

    #[test]
    fn press_during_recenter_grabs_partial_position() {
        let mut j = sized();
        j.on_pointer_down(Point::new(200.0, 200.0));
        j.on_pointer_move(Point::new(280.0, 200.0));
        j.on_pointer_up(0);
        j.set_recenter_progress(0.5);
        let partial = j.knob_center();

        assert_eq!(j.on_pointer_down(partial), Changes::PHASE);
        assert_eq!(j.phase(), Phase::Dragging);
        assert_eq!(j.knob_center(), partial);
        // Later frames of the cancelled animation have no effect.
        assert_eq!(j.on_animation_frame(10_000), Changes::empty());

        j.on_pointer_move(partial + kurbo::Vec2::new(-5.0, 0.0));
        assert!((j.knob_center().x - (partial.x - 5.0)).abs() < 1e-9);
    }

    #[test]
    fn axis_max_applies_on_next_recompute() {
        let mut j = sized();
        j.on_pointer_down(Point::new(200.0, 200.0));
        j.on_pointer_move(Point::new(240.0, 200.0));
        assert_eq!(j.output().x, 25.0);

        j.set_axis_max_x(100);
        assert_eq!(j.axis_max(), AxisMax::new(100, 50));
        assert_eq!(j.output().x, 25.0);

        j.on_pointer_move(Point::new(241.0, 200.0));
        assert!((j.output().x - 51.25).abs() < 1e-9);
    }

    #[test]
    fn listener_sees_every_output_change() {
        let seen: Rc<RefCell<Vec<OutputValue>>> = Rc::default();
        let mut j = sized();
        let sink = seen.clone();
        j.set_output_listener(move |v| sink.borrow_mut().push(v));

        j.on_pointer_down(Point::new(200.0, 200.0));
        j.on_pointer_move(Point::new(216.0, 200.0));
        j.on_pointer_move(Point::new(216.0, 200.0));
        j.on_pointer_up(0);
        j.on_animation_frame(250);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], OutputValue { x: 10.0, y: 0.0 });
        assert_eq!(seen[1], OutputValue::ZERO);
    }

    #[test]
    fn resize_recenters_and_finishes_animation() {
        let mut j = sized();
        j.on_pointer_down(Point::new(200.0, 200.0));
        j.on_pointer_move(Point::new(250.0, 200.0));
        j.on_pointer_up(0);

        let changes = j.on_resize(Size::new(600.0, 300.0));
        assert!(changes.contains(Changes::PHASE | Changes::REPAINT | Changes::OUTPUT));
        assert_eq!(j.phase(), Phase::Idle);
        assert_eq!(j.knob_center(), Point::new(300.0, 150.0));
        assert_eq!(j.layout().track_radius(), 75.0);
        assert_eq!(j.layout().knob_radius(), 15.0);
    }

    #[test]
    fn resize_during_drag_reanchors() {
        let mut j = sized();
        j.on_pointer_down(Point::new(200.0, 200.0));
        j.on_pointer_move(Point::new(230.0, 200.0));

        j.on_resize(Size::new(200.0, 200.0));
        assert_eq!(j.phase(), Phase::Dragging);
        assert_eq!(j.knob_center(), Point::new(100.0, 100.0));

        // The pointer is outside the new track; the knob goes to its edge.
        j.on_pointer_move(Point::new(235.0, 100.0));
        assert!((j.knob_center().x - 140.0).abs() < 1e-9);
    }

    #[test]
    fn resize_during_drag_measures_moves_from_new_center() {
        let mut j = sized();
        j.on_pointer_down(Point::new(200.0, 200.0));
        j.on_pointer_move(Point::new(230.0, 200.0));

        j.on_resize(Size::new(200.0, 200.0));
        // A small move on the new track displaces the knob by that move.
        let changes = j.on_pointer_move(Point::new(110.0, 100.0));
        assert!(!changes.contains(Changes::CLAMPED));
        assert_eq!(j.knob_center(), Point::new(110.0, 100.0));
        assert!((j.output().x - 12.5).abs() < 1e-9);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = JoystickConfig {
            knob_ratio: 0.9,
            ..JoystickConfig::default()
        };
        assert!(Joystick::with_config(config).is_err());
    }

    #[test]
    fn paints_track_then_knob() {
        let mut j = sized();
        j.on_pointer_down(Point::new(200.0, 200.0));
        j.on_pointer_move(Point::new(210.0, 200.0));

        let mut scene = JoystickScene::new();
        j.paint(&mut scene);
        assert_eq!(scene.fills.len(), 2);
        assert_eq!(scene.fills[0].0, Circle::new((200.0, 200.0), 100.0));
        assert_eq!(scene.fills[1].0, Circle::new((210.0, 200.0), 20.0));
        assert_eq!(scene.fills[1].1, j.config().style.knob);
    }

    #[test]
    fn debug_output_mentions_listener() {
        let j = Joystick::default();
        let text = alloc::format!("{j:?}");
        assert!(text.contains("listener: false"));
    }
}
