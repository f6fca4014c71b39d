use image::Pixel;

use crate::bmp::raster::Image;
use crate::error::BlendError;
use crate::error::BlendResult;
use crate::ratio::Ratio;


/// Linear interpolation of one channel byte, clamped and truncated.
pub fn mix(a: u8, b: u8, ratio: f32, inverse: f32) -> u8 {
    let v = a as f32 * ratio + b as f32 * inverse;
    if v > 255.0 {
        255
    } else if v < 0.0 {
        0
    } else {
        v as u8
    }
}

/// Weighs `a` by `ratio` and `b` by the rest, channel by channel.
pub fn blend(a: &Image, b: &Image, ratio: Ratio) -> BlendResult<Image> {
    if a.dimensions() != b.dimensions() {
        return Err(BlendError::DimensionMismatch {
            width_a: a.width(),
            height_a: a.height(),
            width_b: b.width(),
            height_b: b.height(),
        });
    }
    let (r, ir) = (ratio.value(), ratio.inverse());
    let mut data = Vec::with_capacity(a.as_raw().len());
    for (pa, pb) in a.pixels().zip(b.pixels()) {
        let p = pa.map2(pb, |x, y| mix(x, y, r, ir));
        data.extend_from_slice(p.channels());
    }
    log::debug!("blended {} bytes at ratio {}", data.len(), r);
    Image::from_raw(a.width(), a.height(), data)
}
