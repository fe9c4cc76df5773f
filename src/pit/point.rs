/// One STR row: `interior, x, y, z, none, type`. Only `x`, `y` and `z` are
/// used for reconstruction; the rest is carried for completeness.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PitPoint {
    pub interior: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub none: Option<String>,
    pub kind: Option<String>,
}

impl PitPoint {
    /// A point with only coordinates set.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x: Some(x), y: Some(y), z: Some(z), ..Default::default() }
    }

    /// `[x, y, z]` when all three are present.
    #[inline]
    pub fn xyz(&self) -> Option<[f64; 3]> {
        Some([self.x?, self.y?, self.z?])
    }
}
