mod table;
mod utils;

use smart_leds::RGB8;

pub use table::{
    BLANK, COLOR_TABLE, HUE_COUNT, HUE_START, PASTEL_COUNT, PASTEL_START, WHITE, pack_color,
    unpack_color,
};
pub use utils::{blend_colors, scale_color};

pub type Rgb = RGB8;
