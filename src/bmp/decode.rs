use std::io;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;

use super::header::BmpHeader;
use super::header::HEADER_SIZE;
use super::raster::Image;
use super::RowLayout;
use crate::error::BlendError;
use crate::error::BlendResult;


/// Reads the leading header blob, leaving the reader right after it.
pub fn extract_header<R: Read>(reader: &mut R) -> BlendResult<BmpHeader> {
    let mut raw = [0u8; HEADER_SIZE];
    reader.read_exact(&mut raw).map_err(BlendError::HeaderRead)?;
    Ok(BmpHeader::from_raw(raw))
}

pub fn decode<R: Read + Seek>(reader: &mut R, layout: RowLayout) -> BlendResult<Image> {
    reader.seek(SeekFrom::Start(0)).map_err(BlendError::Seek)?;
    let header = extract_header(reader)?;
    log::debug!("{:?}", header);

    let (width, height) = (header.width(), header.height());
    if width <= 0 || height <= 0 {
        return Err(BlendError::InvalidDimensions { width, height });
    }
    for (name, value) in header.unexpected_fields() {
        log::warn!("unexpected BMP {} `{}`, reading as 24-bit uncompressed anyway", name, value);
    }

    let offset = header.data_offset();
    if offset < 0 {
        let e = io::Error::new(io::ErrorKind::InvalidData, format!("negative pixel data offset {}", offset));
        return Err(BlendError::Seek(e));
    }
    reader.seek(SeekFrom::Start(offset as u64)).map_err(BlendError::Seek)?;

    let size = Image::buffer_len(width, height).ok_or(BlendError::InvalidSize { width, height })?;
    let mut data = vec![0u8; size];
    match layout {
        RowLayout::Packed => {
            reader.read_exact(&mut data).map_err(BlendError::PixelRead)?;
        },
        RowLayout::Aligned => {
            let row_len = layout.row_len(width);
            let padding = layout.padding(width);
            let mut skip = [0u8; 3];
            let mut rows = data.chunks_exact_mut(row_len).peekable();
            while let Some(row) = rows.next() {
                reader.read_exact(row).map_err(BlendError::PixelRead)?;
                // trailing padding of the last row is not required
                if rows.peek().is_some() {
                    reader.read_exact(&mut skip[.. padding]).map_err(BlendError::PixelRead)?;
                }
            }
        }
    }
    Image::from_raw(width, height, data)
}
