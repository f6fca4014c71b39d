pub const HEADER_SIZE: usize = 54;

const OFFSET_SIGNATURE: usize = 0;
const OFFSET_DATA: usize = 10;
const OFFSET_WIDTH: usize = 18;
const OFFSET_HEIGHT: usize = 22;
const OFFSET_BIT_COUNT: usize = 28;
const OFFSET_COMPRESSION: usize = 30;

/// The first 54 bytes of a bitmap file, kept as an opaque blob.
///
/// Field accessors assume a BITMAPFILEHEADER directly followed by a
/// BITMAPINFOHEADER. Other header variants are read at the same offsets
/// regardless, so their values are only meaningful for that layout.
#[derive(Clone, PartialEq, Eq)]
pub struct BmpHeader {
    raw: [u8; HEADER_SIZE],
}

impl BmpHeader {

    pub fn from_raw(raw: [u8; HEADER_SIZE]) -> Self {
        BmpHeader { raw }
    }

    /// A minimal 24-bit BITMAPINFOHEADER with stride-aligned rows.
    #[cfg(test)]
    pub fn new_24bit(width: i32, height: i32) -> Self {
        let stride = (width as u32 * 3 + 3) & !3;
        let image_size = stride * height as u32;
        let mut raw = [0u8; HEADER_SIZE];
        raw[0..2].copy_from_slice(b"BM");
        raw[2..6].copy_from_slice(&(HEADER_SIZE as u32 + image_size).to_le_bytes());
        raw[10..14].copy_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
        raw[14..18].copy_from_slice(&40u32.to_le_bytes());
        raw[18..22].copy_from_slice(&width.to_le_bytes());
        raw[22..26].copy_from_slice(&height.to_le_bytes());
        raw[26..28].copy_from_slice(&1u16.to_le_bytes());
        raw[28..30].copy_from_slice(&24u16.to_le_bytes());
        raw[34..38].copy_from_slice(&image_size.to_le_bytes());
        BmpHeader { raw }
    }

    pub fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.raw
    }

    pub fn signature(&self) -> [u8; 2] {
        [self.raw[OFFSET_SIGNATURE], self.raw[OFFSET_SIGNATURE + 1]]
    }

    pub fn data_offset(&self) -> i32 {
        self.read_i32(OFFSET_DATA)
    }

    pub fn width(&self) -> i32 {
        self.read_i32(OFFSET_WIDTH)
    }

    pub fn height(&self) -> i32 {
        self.read_i32(OFFSET_HEIGHT)
    }

    pub fn bit_count(&self) -> u16 {
        u16::from_le_bytes([self.raw[OFFSET_BIT_COUNT], self.raw[OFFSET_BIT_COUNT + 1]])
    }

    pub fn compression(&self) -> u32 {
        u32::from_le_bytes(self.slice4(OFFSET_COMPRESSION))
    }

    /// Fields that disagree with an uncompressed 24-bit bitmap, as `(name, value)`.
    pub fn unexpected_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if &self.signature() != b"BM" {
            fields.push(("signature", format!("{:?}", self.signature())));
        }
        if self.bit_count() != 24 {
            fields.push(("bit count", self.bit_count().to_string()));
        }
        if self.compression() != 0 {
            fields.push(("compression", self.compression().to_string()));
        }
        fields
    }

    fn read_i32(&self, offset: usize) -> i32 {
        i32::from_le_bytes(self.slice4(offset))
    }

    fn slice4(&self, offset: usize) -> [u8; 4] {
        [self.raw[offset], self.raw[offset + 1], self.raw[offset + 2], self.raw[offset + 3]]
    }
}

impl std::fmt::Debug for BmpHeader {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BmpHeader")
            .field("signature", &self.signature())
            .field("data_offset", &self.data_offset())
            .field("width", &self.width())
            .field("height", &self.height())
            .field("bit_count", &self.bit_count())
            .field("compression", &self.compression())
            .finish()
    }
}


#[cfg(test)]
mod test {

    use super::BmpHeader;
    use super::HEADER_SIZE;

    #[test]
    fn test_fields() {
        let h = BmpHeader::new_24bit(3, 2);
        assert_eq!(h.signature(), *b"BM");
        assert_eq!(h.data_offset(), 54);
        assert_eq!(h.width(), 3);
        assert_eq!(h.height(), 2);
        assert_eq!(h.bit_count(), 24);
        assert_eq!(h.compression(), 0);
        // 3 px * 3 bytes = 9, padded to 12, two rows
        assert_eq!(u32::from_le_bytes([h.as_bytes()[2], h.as_bytes()[3], h.as_bytes()[4], h.as_bytes()[5]]), 54 + 24);
        assert!(h.unexpected_fields().is_empty());
    }

    #[test]
    fn test_negative_fields() {
        let mut raw = [0u8; HEADER_SIZE];
        raw[18..22].copy_from_slice(&(-4i32).to_le_bytes());
        raw[22..26].copy_from_slice(&0x7fff_ffffi32.to_le_bytes());
        let h = BmpHeader::from_raw(raw);
        assert_eq!(h.width(), -4);
        assert_eq!(h.height(), i32::MAX);
        let names: Vec<_> = h.unexpected_fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["signature", "bit count"]);
    }
}
