/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::colour::Spectrum;
use crate::Float;

/// Characters used for terminal previews, from dark to bright
const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

/// A buffer with all the colours in the image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// All the pixels, iterating from top
    /// to bottom, left to right
    pub pixels: Vec<Spectrum>,
}

impl std::ops::IndexMut<(usize, usize)> for ImageBuffer {
    fn index_mut(&mut self, pixel: (usize, usize)) -> &mut Self::Output {
        let (x, y) = pixel;
        let i = y * self.width + x;
        &mut self.pixels[i]
    }
}

impl std::ops::Index<(usize, usize)> for ImageBuffer {
    type Output = Spectrum;

    fn index(&self, pixel: (usize, usize)) -> &Self::Output {
        let (x, y) = pixel;
        let i = y * self.width + x;
        &self.pixels[i]
    }
}

impl ImageBuffer {
    /// Creates a new black [`ImageBuffer`]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Spectrum::BLACK; width * height],
        }
    }

    /// Creates an [`ImageBuffer`] from its pixels
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Spectrum>) -> Result<Self, String> {
        if pixels.len() != width * height {
            return Err(format!("Width ({}) and Height ({}) does not match the number of pixels (n_pixels is {}... expecting width*height={})", width, height, pixels.len(), width*height));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Gets the absolute difference between two `ImageBuffer`
    pub fn diff(&self, other: &Self) -> Result<Self, String> {
        if (self.width, self.height) != (other.width, other.height) {
            return Err(format!(
                "Size mismatch: comparing image of size '{}x{}' with another one of size '{}x{}'",
                self.width, self.height, other.width, other.height
            ));
        }

        let pixels = self
            .pixels
            .iter()
            .zip(other.pixels.iter())
            .map(|(a, b)| Spectrum::gray((a.luminance() - b.luminance()).abs()))
            .collect();

        Self::from_pixels(self.width, self.height, pixels)
    }

    /// The average colour of the image
    pub fn mean(&self) -> Spectrum {
        if self.pixels.is_empty() {
            return Spectrum::BLACK;
        }
        let sum: Spectrum = self.pixels.iter().copied().sum();
        sum / self.pixels.len() as Float
    }

    /// A rough preview of the image, made of ASCII characters.
    ///
    /// The image is shrunk to `columns` characters per line. Since
    /// terminal characters are about twice as tall as they are wide,
    /// each character covers two rows' worth of pixels.
    pub fn to_ascii(&self, columns: usize) -> String {
        if self.pixels.is_empty() || columns == 0 {
            return String::new();
        }
        let columns = columns.min(self.width);
        let step = self.width as Float / columns as Float;
        let rows = ((self.height as Float / (2. * step)).round() as usize).max(1);
        let row_step = self.height as Float / rows as Float;

        let max = self
            .pixels
            .iter()
            .map(|p| p.luminance())
            .fold(0. as Float, Float::max);
        let max = if max > 0. { max } else { 1. };

        let mut ret = String::with_capacity((columns + 1) * rows);
        for row in 0..rows {
            let y = ((row as Float + 0.5) * row_step) as usize;
            for col in 0..columns {
                let x = ((col as Float + 0.5) * step) as usize;
                let l = (self[(x.min(self.width - 1), y.min(self.height - 1))].luminance() / max)
                    .clamp(0., 1.);
                let i = (l * (ASCII_RAMP.len() - 1) as Float).round() as usize;
                ret.push(ASCII_RAMP[i] as char);
            }
            ret.push('\n');
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels() {
        assert!(ImageBuffer::from_pixels(2, 2, vec![Spectrum::BLACK; 3]).is_err());
        let img = ImageBuffer::from_pixels(2, 1, vec![Spectrum::BLACK, Spectrum::WHITE]);
        assert!(img.is_ok());
    }

    #[test]
    fn test_index() {
        let mut img = ImageBuffer::new(3, 2);
        img[(2, 1)] = Spectrum::RED;
        assert_eq!(img.pixels[5], Spectrum::RED);
        assert_eq!(img[(0, 0)], Spectrum::BLACK);
    }

    #[test]
    fn test_diff() -> Result<(), String> {
        let a = ImageBuffer::from_pixels(2, 1, vec![Spectrum::WHITE, Spectrum::BLACK])?;
        let b = ImageBuffer::new(2, 1);
        let d = a.diff(&b)?;
        assert!(d.pixels[1].is_black());
        assert!(!d.pixels[0].is_black());
        assert!(a.diff(&ImageBuffer::new(1, 2)).is_err());
        Ok(())
    }

    #[test]
    fn test_mean() -> Result<(), String> {
        let a = ImageBuffer::from_pixels(2, 1, vec![Spectrum::WHITE, Spectrum::BLACK])?;
        assert_eq!(a.mean(), Spectrum::gray(0.5));
        Ok(())
    }

    #[test]
    fn test_ascii() -> Result<(), String> {
        let mut img = ImageBuffer::new(4, 4);
        img[(0, 0)] = Spectrum::WHITE;
        img[(0, 1)] = Spectrum::WHITE;
        let ascii = img.to_ascii(4);
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "@   ");
        assert_eq!(lines[1], "    ");
        Ok(())
    }
}
