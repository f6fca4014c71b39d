use image::Bgr;
use image::Pixel;
use image::RgbImage;

use crate::error::BlendError;
use crate::error::BlendResult;


pub const CHANNELS: usize = 3;

/// Tightly packed BGR pixels, bottom row first as stored in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {

    width: i32,

    height: i32,

    data: Vec<u8>,
}

impl Image {

    /// Byte count of a `width` x `height` buffer, `None` if either side is not positive or the product overflows.
    pub fn buffer_len(width: i32, height: i32) -> Option<usize> {
        if width <= 0 || height <= 0 {
            return None;
        }
        let len = (width as usize).checked_mul(height as usize)?.checked_mul(CHANNELS)?;
        // the historical size field was a signed 32-bit value
        if len > i32::MAX as usize {
            return None;
        }
        Some(len)
    }

    pub fn from_raw(width: i32, height: i32, data: Vec<u8>) -> BlendResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(BlendError::InvalidDimensions { width, height });
        }
        match Self::buffer_len(width, height) {
            Some(len) if len == data.len() => Ok(Image { width, height, data }),
            _ => Err(BlendError::InvalidSize { width, height }),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn as_raw(&self) -> &[u8] {
        self.data.as_slice()
    }

    pub fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.row_len())
    }

    pub fn pixels<'a>(&'a self) -> impl Iterator<Item = &'a Bgr<u8>> + 'a {
        self.data.chunks_exact(CHANNELS).map(Bgr::from_slice)
    }

    /// Top-down RGB copy, for formats that do not store rows bottom-up.
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.width as u32;
        let height = self.height as u32;
        let row_len = self.row_len();
        RgbImage::from_fn(width, height, |x, y| {
            let row = (height - 1 - y) as usize;
            let i = row * row_len + x as usize * CHANNELS;
            Bgr::from_slice(&self.data[i .. i + CHANNELS]).to_rgb()
        })
    }
}


#[cfg(test)]
mod test {

    use image::Rgb;

    use super::Image;
    use crate::error::BlendError;

    #[test]
    fn test_buffer_len() {
        assert_eq!(Image::buffer_len(2, 2), Some(12));
        assert_eq!(Image::buffer_len(0, 2), None);
        assert_eq!(Image::buffer_len(2, -1), None);
        assert_eq!(Image::buffer_len(i32::MAX, i32::MAX), None);
        assert_eq!(Image::buffer_len(65536, 65536), None);
    }

    #[test]
    fn test_from_raw() {
        assert!(Image::from_raw(2, 1, vec![0; 6]).is_ok());
        match Image::from_raw(2, 1, vec![0; 5]) {
            Err(BlendError::InvalidSize { width: 2, height: 1 }) => {},
            other => panic!("unexpected {:?}", other),
        }
        match Image::from_raw(-2, 1, vec![]) {
            Err(BlendError::InvalidDimensions { width: -2, height: 1 }) => {},
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rgb_flip() {
        // bottom row: blue, green ; top row: red, white
        let data = vec![
            255, 0, 0,   0, 255, 0,
            0, 0, 255,   255, 255, 255,
        ];
        let img = Image::from_raw(2, 2, data).unwrap();
        let rgb = img.to_rgb_image();
        assert_eq!(rgb.dimensions(), (2, 2));
        assert_eq!(*rgb.get_pixel(0, 0), Rgb([255, 0, 0]));
        assert_eq!(*rgb.get_pixel(1, 0), Rgb([255, 255, 255]));
        assert_eq!(*rgb.get_pixel(0, 1), Rgb([0, 0, 255]));
        assert_eq!(*rgb.get_pixel(1, 1), Rgb([0, 255, 0]));
    }

    #[test]
    fn test_rows_and_pixels() {
        let img = Image::from_raw(1, 3, (0 .. 9).collect()).unwrap();
        assert_eq!(img.rows().count(), 3);
        assert_eq!(img.pixels().nth(1).map(|p| p.0), Some([3, 4, 5]));
    }
}
