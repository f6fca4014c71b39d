use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use super::header::BmpHeader;
use super::raster::Image;
use super::RowLayout;
use crate::error::BlendError;
use crate::error::BlendResult;


/// Writes `header` verbatim followed by the pixel rows. The header is not
/// patched, so its size fields keep describing the file it came from.
pub fn encode<W: Write>(writer: &mut W, image: &Image, header: &BmpHeader, layout: RowLayout) -> BlendResult<()> {
    writer.write_all(header.as_bytes()).map_err(BlendError::Write)?;
    let zeros = [0u8; 3];
    match layout {
        RowLayout::Aligned => {
            let padding = layout.padding(image.width());
            for row in image.rows() {
                writer.write_all(row).map_err(BlendError::Write)?;
                writer.write_all(&zeros[.. padding]).map_err(BlendError::Write)?;
            }
        },
        RowLayout::Packed => {
            writer.write_all(image.as_raw()).map_err(BlendError::Write)?;
            // one byte per row whatever the misalignment, as older outputs did
            if layout.padding(image.width()) > 0 {
                for _ in 0 .. image.height() {
                    writer.write_all(&zeros[.. 1]).map_err(BlendError::Write)?;
                }
            }
        }
    }
    Ok(())
}

pub fn encode_file(path: &Path, image: &Image, header: &BmpHeader, layout: RowLayout) -> BlendResult<()> {
    let file = File::create(path).map_err(|source| BlendError::Create { path: path.to_path_buf(), source })?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, image, header, layout)?;
    writer.flush().map_err(BlendError::Write)
}
