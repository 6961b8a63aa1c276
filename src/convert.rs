//! LCH <-> sRGB conversion.
//!
//! Follows the CSS Color 4 sample conversion code: LCH is relative to a D50
//! white, sRGB to D65, and the two are joined by a Bradford adaptation. The
//! matrices are the rounded published values so results match browsers
//! implementing the same pipeline.

use crate::error::{LchError, Result};
use crate::types::{DisplayColour, Lch};

/// 29^3 / 3^3
const KAPPA: f64 = 903.296_296_296_296_3;

/// 6^3 / 29^3
const EPSILON: f64 = 0.008_856_451_679_035_631;

/// D50 reference white.
const D50: [f64; 3] = [0.964_22, 1.0, 0.825_21];

/// Slack on both ends of [0, 1] when testing gamut membership.
pub const GAMUT_EPSILON: f64 = 5e-6;

type Matrix = [[f64; 3]; 3];

const BRADFORD_D50_TO_D65: Matrix = [
    [0.955_576_6, -0.023_039_3, 0.063_163_6],
    [-0.028_289_5, 1.009_941_6, 0.021_007_7],
    [0.012_298_2, -0.020_483, 1.329_909_8],
];

const BRADFORD_D65_TO_D50: Matrix = [
    [1.047_811_2, 0.022_886_6, -0.050_127],
    [0.029_542_4, 0.990_484_4, -0.017_049_1],
    [-0.009_234_5, 0.015_043_6, 0.752_131_6],
];

const XYZ_TO_LINEAR_SRGB: Matrix = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266, 1.876_010_8, 0.041_556],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

const LINEAR_SRGB_TO_XYZ: Matrix = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175],
    [0.019_333_9, 0.119_192, 0.950_304_1],
];

#[inline]
fn mul(m: &Matrix, v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[inline]
fn gamma_encode(v: f64) -> f64 {
    if v > 0.003_130_8 {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    } else {
        v * 12.92
    }
}

#[inline]
fn gamma_decode(v: f64) -> f64 {
    if v < 0.040_45 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn in_unit_range(v: f64) -> bool {
    (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&v)
}

/// Convert LCH to gamma-encoded sRGB.
///
/// Returns the unclamped channel values and whether all of them are within
/// [0, 1] (up to [`GAMUT_EPSILON`]). Out-of-gamut colours still come back
/// so the caller can decide how to show them.
pub fn lch_to_srgb(lch: Lch) -> ([f64; 3], bool) {
    let hue = lch.h.to_radians();
    let a = lch.c * hue.cos();
    let b = lch.c * hue.sin();

    // Lab -> XYZ (D50)
    let f1 = (lch.l + 16.0) / 116.0;
    let f0 = a / 500.0 + f1;
    let f2 = f1 - b / 200.0;

    let f0_cube = f0 * f0 * f0;
    let f2_cube = f2 * f2 * f2;
    let x = if f0_cube > EPSILON {
        f0_cube
    } else {
        (116.0 * f0 - 16.0) / KAPPA
    };
    let y = if lch.l > KAPPA * EPSILON {
        f1 * f1 * f1
    } else {
        lch.l / KAPPA
    };
    let z = if f2_cube > EPSILON {
        f2_cube
    } else {
        (116.0 * f2 - 16.0) / KAPPA
    };
    let xyz_d50 = [x * D50[0], y * D50[1], z * D50[2]];

    let xyz_d65 = mul(&BRADFORD_D50_TO_D65, xyz_d50);
    let linear = mul(&XYZ_TO_LINEAR_SRGB, xyz_d65);
    let rgb = linear.map(gamma_encode);

    let in_gamut = rgb.iter().all(|&v| in_unit_range(v));
    (rgb, in_gamut)
}

/// Convert gamma-encoded sRGB channels in [0, 1] to LCH.
///
/// Hue is normalized to [0, 360).
pub fn srgb_to_lch(rgb: [f64; 3]) -> Lch {
    let linear = rgb.map(gamma_decode);
    let xyz_d65 = mul(&LINEAR_SRGB_TO_XYZ, linear);
    let xyz_d50 = mul(&BRADFORD_D65_TO_D50, xyz_d65);

    let f = |t: f64| {
        if t > EPSILON {
            t.cbrt()
        } else {
            (KAPPA * t + 16.0) / 116.0
        }
    };
    let f0 = f(xyz_d50[0] / D50[0]);
    let f1 = f(xyz_d50[1] / D50[1]);
    let f2 = f(xyz_d50[2] / D50[2]);

    let l = 116.0 * f1 - 16.0;
    let a = 500.0 * (f0 - f1);
    let b = 200.0 * (f1 - f2);

    let hue = b.atan2(a).to_degrees();
    let h = if hue >= 0.0 { hue } else { hue + 360.0 };
    // atan2 of a tiny negative b gives -0.0 + 360 rounding to exactly 360.
    let h = if h >= 360.0 { h - 360.0 } else { h };

    Lch::new(l, a.hypot(b), h)
}

/// Quantize a channel in [0, 1] to 0..=255, rounding half up.
pub fn float_to_int8(v: f64) -> u8 {
    (v * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Convert LCH to a display colour, clamping out-of-gamut channels.
pub fn lch_to_display(lch: Lch) -> DisplayColour {
    let (rgb, in_gamut) = lch_to_srgb(lch);
    DisplayColour::new(rgb.map(float_to_int8), in_gamut)
}

/// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb` (any case) to channels in
/// [0, 1].
pub fn hex_to_srgb(text: &str) -> Result<[f64; 3]> {
    Ok(hex_to_srgb8(text)?.map(|v| f64::from(v) / 255.0))
}

/// Parse a hex colour to 8-bit channels.
pub fn hex_to_srgb8(text: &str) -> Result<[u8; 3]> {
    let invalid = || LchError::InvalidHex {
        input: text.to_string(),
    };
    let hex = text.strip_prefix('#').unwrap_or(text);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let digits: Vec<u8> = hex
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();

    match digits.as_slice() {
        [r, g, b] => Ok([r << 4 | r, g << 4 | g, b << 4 | b]),
        [r1, r0, g1, g0, b1, b0] => Ok([r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0]),
        _ => Err(invalid()),
    }
}

/// Whether `text` is a well-formed 3 or 6 digit hex colour.
pub fn is_hex_colour(text: &str) -> bool {
    hex_to_srgb8(text).is_ok()
}

/// Format 8-bit channels as lowercase `#rrggbb`.
pub fn srgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Convert 8-bit sRGB channels to LCH.
pub fn srgb8_to_lch(rgb: [u8; 3]) -> Lch {
    srgb_to_lch(rgb.map(|v| f64::from(v) / 255.0))
}

/// Parse a hex colour straight to LCH.
pub fn hex_to_lch(text: &str) -> Result<Lch> {
    Ok(srgb_to_lch(hex_to_srgb(text)?))
}
