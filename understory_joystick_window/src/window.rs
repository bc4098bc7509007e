// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Circle, Point, Rect, Size, Vec2};
use log::debug;
use peniko::Color;
use understory_joystick::{
    AxisMax, Changes, ConfigError, Joystick, JoystickConfig, JoystickPainter, OutputValue, Phase,
};

use crate::spin_box::SpinBox;

bitflags::bitflags! {
    /// What a [`JoystickWindow`] event changed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WindowChanges: u8 {
        /// The joystick cell needs repainting.
        const JOYSTICK = 0b0000_0001;
        /// One of the spin boxes changed value and needs repainting.
        const CONTROLS = 0b0000_0010;
        /// The joystick output changed.
        const OUTPUT   = 0b0000_0100;
        /// Cell rectangles moved.
        const LAYOUT   = 0b0000_1000;
    }
}

impl WindowChanges {
    fn from_joystick(changes: Changes) -> Self {
        let mut out = Self::empty();
        if changes.intersects(Changes::REPAINT | Changes::PHASE) {
            out |= Self::JOYSTICK;
        }
        if changes.contains(Changes::OUTPUT) {
            out |= Self::OUTPUT;
        }
        out
    }
}

/// Which axis-maximum input an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisInput {
    /// The horizontal axis maximum.
    X,
    /// The vertical axis maximum.
    Y,
}

/// Host window composing a [`Joystick`] with two axis-maximum spin boxes.
///
/// The window is laid out as a one-column grid: a control row holding the
/// x and y spin boxes side by side, and the joystick filling the rest.
/// Pointer events arrive in window coordinates and are forwarded to the
/// joystick in its local coordinates. While the joystick is dragging it
/// captures the pointer, so moves and the release reach it even outside its
/// cell.
///
/// Spin box edits are wired one way into the joystick's axis maxima and take
/// effect on its next output update.
#[derive(Debug)]
pub struct JoystickWindow {
    size: Size,
    joystick: Joystick,
    x_max: SpinBox,
    y_max: SpinBox,
    x_max_rect: Rect,
    y_max_rect: Rect,
    joystick_rect: Rect,
    pointer_captured: bool,
}

impl JoystickWindow {
    /// Window title.
    pub const TITLE: &'static str = "Joystick";
    /// Margin around the grid.
    pub const MARGIN: f64 = 9.0;
    /// Spacing between grid cells.
    pub const SPACING: f64 = 6.0;
    /// Height of the control row.
    pub const CONTROL_HEIGHT: f64 = 24.0;

    /// Creates a window around a default joystick, with zero size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_joystick(Joystick::new())
    }

    /// Creates a window around a joystick built from `config`.
    pub fn with_config(config: JoystickConfig) -> Result<Self, ConfigError> {
        Joystick::with_config(config).map(Self::with_joystick)
    }

    fn with_joystick(joystick: Joystick) -> Self {
        let AxisMax { x, y } = joystick.axis_max();
        Self {
            size: Size::ZERO,
            joystick,
            x_max: SpinBox::new(x),
            y_max: SpinBox::new(y),
            x_max_rect: Rect::ZERO,
            y_max_rect: Rect::ZERO,
            joystick_rect: Rect::ZERO,
            pointer_captured: false,
        }
    }

    /// Smallest window size that still gives the joystick its minimum size.
    #[must_use]
    pub fn minimum_size() -> Size {
        let min = Joystick::MIN_SIZE;
        Size::new(
            min.width + 2.0 * Self::MARGIN,
            min.height + Self::CONTROL_HEIGHT + Self::SPACING + 2.0 * Self::MARGIN,
        )
    }

    /// Current window size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The hosted joystick.
    #[must_use]
    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    /// Mutable access to the hosted joystick, e.g. to install an output listener.
    pub fn joystick_mut(&mut self) -> &mut Joystick {
        &mut self.joystick
    }

    /// Current joystick reading.
    #[must_use]
    pub fn output(&self) -> OutputValue {
        self.joystick.output()
    }

    /// The spin box for `axis`.
    #[must_use]
    pub fn input(&self, axis: AxisInput) -> &SpinBox {
        match axis {
            AxisInput::X => &self.x_max,
            AxisInput::Y => &self.y_max,
        }
    }

    /// Window-space rectangle of the spin box for `axis`.
    #[must_use]
    pub fn input_rect(&self, axis: AxisInput) -> Rect {
        match axis {
            AxisInput::X => self.x_max_rect,
            AxisInput::Y => self.y_max_rect,
        }
    }

    /// Window-space rectangle of the joystick cell.
    #[must_use]
    pub fn joystick_rect(&self) -> Rect {
        self.joystick_rect
    }

    /// Returns `true` while the joystick holds the pointer capture.
    #[must_use]
    pub fn has_pointer_capture(&self) -> bool {
        self.pointer_captured
    }

    /// Lays the window out for `size` and resizes the joystick cell.
    pub fn on_resize(&mut self, size: Size) -> WindowChanges {
        self.size = size;
        let inner = Rect::new(
            Self::MARGIN,
            Self::MARGIN,
            (size.width - Self::MARGIN).max(Self::MARGIN),
            (size.height - Self::MARGIN).max(Self::MARGIN),
        );

        let row_bottom = (inner.y0 + Self::CONTROL_HEIGHT).min(inner.y1);
        let half = ((inner.width() - Self::SPACING) / 2.0).max(0.0);
        self.x_max_rect = Rect::new(inner.x0, inner.y0, inner.x0 + half, row_bottom);
        self.y_max_rect = Rect::new(inner.x1 - half, inner.y0, inner.x1, row_bottom);

        let joystick_top = (row_bottom + Self::SPACING).min(inner.y1);
        self.joystick_rect = Rect::new(inner.x0, joystick_top, inner.x1, inner.y1);
        debug!(
            "window resized to {}x{}, joystick cell {:?}",
            size.width, size.height, self.joystick_rect
        );

        let changes = self.joystick.on_resize(self.joystick_rect.size());
        WindowChanges::LAYOUT | WindowChanges::CONTROLS | WindowChanges::from_joystick(changes)
    }

    fn to_joystick(&self, pos: Point) -> Point {
        pos - self.joystick_rect.origin().to_vec2()
    }

    /// Handles a pointer press in window coordinates.
    pub fn on_pointer_down(&mut self, pos: Point) -> WindowChanges {
        if self.pointer_captured || !self.joystick_rect.contains(pos) {
            return WindowChanges::empty();
        }
        let changes = self.joystick.on_pointer_down(self.to_joystick(pos));
        if self.joystick.phase() == Phase::Dragging {
            self.pointer_captured = true;
        }
        WindowChanges::from_joystick(changes)
    }

    /// Handles a pointer move in window coordinates.
    ///
    /// Only delivered to the joystick while it holds the capture.
    pub fn on_pointer_move(&mut self, pos: Point) -> WindowChanges {
        if !self.pointer_captured {
            return WindowChanges::empty();
        }
        let changes = self.joystick.on_pointer_move(self.to_joystick(pos));
        WindowChanges::from_joystick(changes)
    }

    /// Handles a pointer release at `now_ms`, releasing the capture.
    pub fn on_pointer_up(&mut self, now_ms: u64) -> WindowChanges {
        if !self.pointer_captured {
            return WindowChanges::empty();
        }
        self.pointer_captured = false;
        WindowChanges::from_joystick(self.joystick.on_pointer_up(now_ms))
    }

    /// Returns `true` while the joystick is animating.
    #[must_use]
    pub fn wants_animation_frame(&self) -> bool {
        self.joystick.wants_animation_frame()
    }

    /// Advances animations to `now_ms`.
    pub fn on_animation_frame(&mut self, now_ms: u64) -> WindowChanges {
        WindowChanges::from_joystick(self.joystick.on_animation_frame(now_ms))
    }

    /// Sets the value of an axis-maximum input.
    ///
    /// When the (clamped) value changes, the joystick's axis maximum is
    /// updated immediately.
    pub fn set_input(&mut self, axis: AxisInput, value: u32) -> WindowChanges {
        let changed = match axis {
            AxisInput::X => self.x_max.set_value(value),
            AxisInput::Y => self.y_max.set_value(value),
        };
        self.apply_input(axis, changed)
    }

    /// Steps an axis-maximum input by `steps` (negative steps move down).
    pub fn step_input(&mut self, axis: AxisInput, steps: i32) -> WindowChanges {
        let changed = match axis {
            AxisInput::X => self.x_max.step_by(steps),
            AxisInput::Y => self.y_max.step_by(steps),
        };
        self.apply_input(axis, changed)
    }

    fn apply_input(&mut self, axis: AxisInput, changed: Option<u32>) -> WindowChanges {
        let Some(value) = changed else {
            return WindowChanges::empty();
        };
        debug!("axis max input {axis:?} changed to {value}");
        match axis {
            AxisInput::X => self.joystick.set_axis_max_x(value),
            AxisInput::Y => self.joystick.set_axis_max_y(value),
        }
        WindowChanges::CONTROLS
    }

    /// Paints the joystick in window coordinates.
    ///
    /// Spin boxes are drawn by the host toolkit at [`JoystickWindow::input_rect`].
    pub fn paint_joystick(&self, painter: &mut impl JoystickPainter) {
        let mut offset = OffsetPainter {
            inner: painter,
            offset: self.joystick_rect.origin().to_vec2(),
        };
        self.joystick.paint(&mut offset);
    }
}

impl Default for JoystickWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// Translates joystick-local paint commands into window space.
struct OffsetPainter<'a, P> {
    inner: &'a mut P,
    offset: Vec2,
}

impl<P: JoystickPainter> JoystickPainter for OffsetPainter<'_, P> {
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.inner
            .fill_circle(Circle::new(circle.center + self.offset, circle.radius), color);
    }
}
