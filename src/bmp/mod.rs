pub mod decode;
pub mod encode;
pub mod header;
pub mod raster;


use self::raster::CHANNELS;

/// On-disk arrangement of pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout {
    /// Every row is zero-padded to a multiple of four bytes.
    Aligned,
    /// Rows are stored back to back; on write, one zero byte per row is appended when rows are misaligned.
    Packed,
}

impl Default for RowLayout {

    fn default() -> Self {
        RowLayout::Aligned
    }
}

impl RowLayout {

    pub fn row_len(&self, width: i32) -> usize {
        width as usize * CHANNELS
    }

    /// Zero bytes needed after a row of `width` pixels to reach a four-byte boundary.
    pub fn padding(&self, width: i32) -> usize {
        (4 - self.row_len(width) % 4) % 4
    }
}
