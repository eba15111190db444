//! Plain-text PPM (P3) image output.

use std::io::{self, Write};

use crate::renderer::{color_to_rgb, ImageBuffer};

/// Write an image as ASCII PPM: `P3`, dimensions, `255`, then one
/// gamma-encoded `r g b` line per pixel in row-major order.
pub fn write_ppm<W: Write>(writer: &mut W, image: &ImageBuffer) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Color;

    #[test]
    fn test_write_ppm() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.25, 0.0));

        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 128 0\n0 0 0\n");
    }
}
