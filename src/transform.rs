/// A 2D affine transform.
///
/// Maps a point as `x' = a·x + c·y + tx`, `y' = b·x + d·y + ty`, which is the
/// same layout as SVG's `matrix(a b c d e f)`. Screen coordinates grow
/// downward, so positive rotation angles turn clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform {
    /// Identity transform (no transformation)
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            tx: x,
            ty: y,
            ..Self::IDENTITY
        }
    }

    /// Rotation around the origin
    pub fn rotate(angle_radians: f32) -> Self {
        let (sin, cos) = angle_radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn rotate_degrees(angle_degrees: f32) -> Self {
        Self::rotate(angle_degrees.to_radians())
    }

    /// Rotation around the point (cx, cy)
    pub fn rotate_degrees_about(angle_degrees: f32, cx: f32, cy: f32) -> Self {
        Self::translate(cx, cy)
            .then(&Self::rotate_degrees(angle_degrees))
            .then(&Self::translate(-cx, -cy))
    }

    pub fn scale(s: f32) -> Self {
        Self {
            a: s,
            d: s,
            ..Self::IDENTITY
        }
    }

    /// Compose this transform with another: self * other
    /// Applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Value for an SVG `transform` attribute
    pub fn to_svg_matrix(&self) -> String {
        format!(
            "matrix({} {} {} {} {} {})",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
