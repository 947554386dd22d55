/// An RGB color, independent of any drawing library.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// Used for empty cells and for tiles beyond 2048.
pub const DEFAULT_TILE_COLOR: Rgb = WHITE;

static TILE_COLORS: [(u32, Rgb); 11] = [
    (2, Rgb(255, 255, 178)),
    (4, Rgb(255, 204, 102)),
    (8, Rgb(255, 153, 51)),
    (16, Rgb(255, 102, 0)),
    (32, Rgb(255, 51, 51)),
    (64, Rgb(255, 0, 0)),
    (128, Rgb(255, 102, 178)),
    (256, Rgb(255, 0, 255)),
    (512, Rgb(204, 0, 204)),
    (1024, Rgb(102, 0, 102)),
    (2048, Rgb(51, 0, 51)),
];

/// The background color of a cell holding `value`.
pub fn tile_color(value: u32) -> Rgb {
    TILE_COLORS
        .iter()
        .find(|&&(v, _)| v == value)
        .map(|&(_, color)| color)
        .unwrap_or(DEFAULT_TILE_COLOR)
}

/// The color of the number drawn on a tile.
///
/// Black, except on the two darkest backgrounds.
pub fn text_color(value: u32) -> Rgb {
    match value {
        1024 | 2048 => WHITE,
        _ => BLACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tiles_have_their_own_color() {
        assert_eq!(tile_color(2), Rgb(255, 255, 178));
        assert_eq!(tile_color(64), Rgb(255, 0, 0));
        assert_eq!(tile_color(2048), Rgb(51, 0, 51));
        for (i, &(value, _)) in TILE_COLORS.iter().enumerate() {
            assert_eq!(value, 2 << i);
            assert_ne!(tile_color(value), DEFAULT_TILE_COLOR);
        }
    }

    #[test]
    fn other_values_fall_back_to_default() {
        assert_eq!(tile_color(0), DEFAULT_TILE_COLOR);
        assert_eq!(tile_color(4096), DEFAULT_TILE_COLOR);
        assert_eq!(tile_color(131072), DEFAULT_TILE_COLOR);
    }

    #[test]
    fn dark_tiles_get_light_text() {
        assert_eq!(text_color(2), BLACK);
        assert_eq!(text_color(4096), BLACK);
        assert_eq!(text_color(1024), WHITE);
    }
}
