use image::Rgb;

/// Fixed output palette for converted grid maps.
///
/// `Barrier` and `Free` mark impassable and open cells; the four weight
/// variants are the graded bands produced by fivesplit conversion, ordered
/// from heaviest (`Weight4`, darkest) to lightest (`Weight1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Barrier,
    Weight4,
    Weight3,
    Weight2,
    Weight1,
    Free,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Barrier,
        PaletteColor::Weight4,
        PaletteColor::Weight3,
        PaletteColor::Weight2,
        PaletteColor::Weight1,
        PaletteColor::Free,
    ];

    pub const fn rgb(self) -> Rgb<u8> {
        match self {
            PaletteColor::Barrier => Rgb([0, 0, 0]),
            PaletteColor::Weight4 => Rgb([51, 51, 51]),
            PaletteColor::Weight3 => Rgb([102, 102, 102]),
            PaletteColor::Weight2 => Rgb([153, 153, 153]),
            PaletteColor::Weight1 => Rgb([204, 204, 204]),
            PaletteColor::Free => Rgb([255, 255, 255]),
        }
    }
}
