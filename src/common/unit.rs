//! Unit conversion utilities.
//!
//! Presentation geometry is expressed in EMUs (English Metric Units) while the
//! calendar layout is authored in centimetres and font sizes in points.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;

#[inline]
pub fn cm_to_emu(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64).round() as i64
}

#[inline]
pub fn mm_to_emu(mm: f64) -> i64 {
    (mm * EMUS_PER_MM as f64).round() as i64
}

#[inline]
pub fn emu_to_cm(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_CM as f64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Font size in points to the hundredths-of-a-point value used by `a:rPr/@sz`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// An axis-aligned rectangle in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmuRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl EmuRect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from centimetre coordinates.
    pub fn from_cm(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(cm_to_emu(x), cm_to_emu(y), cm_to_emu(width), cm_to_emu(height))
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_and_mm_agree() {
        assert_eq!(cm_to_emu(38.0), mm_to_emu(380.0));
        assert_eq!(cm_to_emu(52.0), 18_720_000);
        assert_eq!(cm_to_emu(0.5), 180_000);
    }

    #[test]
    fn test_emu_to_cm() {
        assert!((emu_to_cm(EMUS_PER_CM * 3) - 3.0).abs() < f64::EPSILON);
        assert_eq!(EMUS_PER_INCH, EMUS_PER_CM * 254 / 100);
    }

    #[test]
    fn test_font_units() {
        assert_eq!(pt_to_centipoints(60.0), 6000);
        assert_eq!(pt_to_centipoints(55.0), 5500);
        assert_eq!(pt_to_emu_f64(1.0), EMUS_PER_PT);
    }

    #[test]
    fn test_rect_from_cm() {
        let rect = EmuRect::from_cm(1.0, 23.0, 36.0, 28.0);
        assert_eq!(rect.x, 360_000);
        assert_eq!(rect.right(), cm_to_emu(37.0));
        assert_eq!(rect.bottom(), cm_to_emu(51.0));
    }
}
