use image::{DynamicImage, GrayImage, RgbImage};

use crate::palette::PaletteColor;

/// How a resized copy gets remapped before it is written out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Plain resize, colors left untouched.
    Resize,
    /// Two-color split: brightness below `255 * ratio` becomes a barrier,
    /// everything else a free node.
    Binary { ratio: f32 },
    /// Six-color split over five brightness thresholds, sorted ascending.
    FiveSplit { thresholds: [u8; 5] },
}

impl Mode {
    /// Builds a fivesplit mode; threshold order does not matter.
    pub fn five_split(mut thresholds: [u8; 5]) -> Self {
        thresholds.sort_unstable();
        Mode::FiveSplit { thresholds }
    }
}

pub fn binary_color(brightness: u8, ratio: f32) -> PaletteColor {
    if f32::from(brightness) < 255.0 * ratio {
        PaletteColor::Barrier
    } else {
        PaletteColor::Free
    }
}

/// Bands are half-open `[prev, t)`, so every brightness lands in exactly one
/// of the six colors and 255 always maps to `Free` unless a threshold tops
/// out the range.
pub fn five_split_color(brightness: u8, thresholds: &[u8; 5]) -> PaletteColor {
    let [t0, t1, t2, t3, t4] = *thresholds;
    if brightness < t0 {
        PaletteColor::Barrier
    } else if brightness < t1 {
        PaletteColor::Weight4
    } else if brightness < t2 {
        PaletteColor::Weight3
    } else if brightness < t3 {
        PaletteColor::Weight2
    } else if brightness < t4 {
        PaletteColor::Weight1
    } else {
        PaletteColor::Free
    }
}

/// Applies `mode` to a resized copy, producing the image to write.
pub fn apply(mode: Mode, image: RgbImage) -> RgbImage {
    match mode {
        Mode::Resize => image,
        Mode::Binary { ratio } => quantize(&to_luma(image), |b| binary_color(b, ratio)),
        Mode::FiveSplit { thresholds } => {
            quantize(&to_luma(image), |b| five_split_color(b, &thresholds))
        }
    }
}

fn to_luma(image: RgbImage) -> GrayImage {
    DynamicImage::ImageRgb8(image).to_luma8()
}

fn quantize(gray: &GrayImage, color_of: impl Fn(u8) -> PaletteColor) -> RgbImage {
    let mut out = RgbImage::new(gray.width(), gray.height());
    for (x, y, pixel) in gray.enumerate_pixels() {
        out.put_pixel(x, y, color_of(pixel.0[0]).rgb());
    }
    out
}
