//! PNG rasterization of a configured UPC-A render.

use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};

use crate::error::UpcError;
use crate::upc::UpcARender;

const BLACK: Luma<u8> = Luma([0x00]);
const WHITE: Luma<u8> = Luma([0xFF]);

/// Rasterizes the symbol into a square grayscale image and encodes it as
/// PNG. Bars are full-height vertical stripes on a white background.
pub(crate) fn encode_png(render: &UpcARender) -> Result<Vec<u8>, UpcError> {
    let scanline: Vec<Luma<u8>> = render
        .scanline()
        .map(|on| if on { BLACK } else { WHITE })
        .collect();

    let img = GrayImage::from_fn(render.width(), render.height(), |x, _| scanline[x as usize]);

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use crate::UpcA;

    fn decode(png: &[u8]) -> image::GrayImage {
        image::load_from_memory(png).expect("valid PNG").to_luma8()
    }

    #[test]
    fn png_is_square_at_module_width() {
        let upc: UpcA = "036000291452".parse().unwrap();

        let img = decode(&upc.to_png(1).unwrap());
        assert_eq!(img.dimensions(), (113, 113));

        let img = decode(&upc.to_png(2).unwrap());
        assert_eq!(img.dimensions(), (226, 226));
    }

    #[test]
    fn background_is_white_and_guards_are_black() {
        let upc: UpcA = "036000291452".parse().unwrap();
        let img = decode(&upc.to_png(2).unwrap());

        // Quiet zone corner.
        assert_eq!(img.get_pixel(0, 0).0, [0xFF]);
        // First start guard bar: module 9, scale 2 -> pixels 18 and 19,
        // spanning the full height.
        assert_eq!(img.get_pixel(18, 0).0, [0x00]);
        assert_eq!(img.get_pixel(19, 225).0, [0x00]);
        // The blank module inside the start guard.
        assert_eq!(img.get_pixel(20, 100).0, [0xFF]);
    }

    #[test]
    fn inverted_render_swaps_colors() {
        let upc: UpcA = "036000291452".parse().unwrap();
        let png = upc.render().set_inverted(true).to_png().unwrap();
        let img = decode(&png);

        assert_eq!(img.get_pixel(0, 0).0, [0x00]);
        assert_eq!(img.get_pixel(9, 0).0, [0xFF]);
    }
}
