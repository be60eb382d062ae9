#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D translation applied to a view when it is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Transform {
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
        }
    }

    /// CSS `transform` value, always a `translate3d`.
    ///
    /// ```rust
    /// use glide_core::Transform;
    /// assert_eq!(Transform::translate(-200.0, 0.0).to_css(), "translate3d(-200px, 0, 0)");
    /// ```
    pub fn to_css(&self) -> String {
        let x = css_px(self.translate_x);
        if self.translate_y == 0.0 {
            format!("translate3d({x}, 0, 0)")
        } else {
            format!("translate3d({x}, {}, 0)", css_px(self.translate_y))
        }
    }
}

fn css_px(v: f32) -> String {
    // `-0` and non-finite values never reach the stylesheet.
    let v = if v.is_finite() { v + 0.0 } else { 0.0 };
    format!("{v}px")
}
