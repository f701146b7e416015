//! `embedded-graphics` integration: draw a configured render onto any
//! [`DrawTarget`] with binary colors.

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    Drawable,
};

use crate::upc::UpcARender;

impl Drawable for UpcARender {
    type Color = BinaryColor;
    type Output = ();

    /// Draws each bar as a full-height rectangle at the origin of the
    /// target. Background modules are left untouched so the target's
    /// existing contents show through, as with the PNG renderer's white
    /// background.
    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let height = self.height();
        let mut run_start: Option<i32> = None;

        for (x, on) in self.scanline().chain(core::iter::once(false)).enumerate() {
            match (on, run_start) {
                (true, None) => run_start = Some(x as i32),
                (false, Some(start)) => {
                    let area = Rectangle::new(
                        Point::new(start, 0),
                        Size::new(x as u32 - start as u32, height),
                    );
                    target.fill_solid(&area, BinaryColor::On)?;
                    run_start = None;
                }
                _ => {}
            }
        }

        Ok(())
    }
}
