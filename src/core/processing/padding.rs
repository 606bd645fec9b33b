use tracing::info;

/// Center an interleaved image on a zero-filled canvas of the target size.
/// Used by letterbox mode after the aspect-preserving resize.
pub fn pad_to_target(
    data: &[u8],
    cols: usize,
    rows: usize,
    target_cols: usize,
    target_rows: usize,
    channels: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if cols > target_cols || rows > target_rows {
        return Err(format!(
            "Image {}x{} exceeds target canvas {}x{}",
            cols, rows, target_cols, target_rows
        )
        .into());
    }

    let pad_cols = (target_cols - cols) / 2;
    let pad_rows = (target_rows - rows) / 2;

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );
    info!("Final dimensions: {}x{}", target_cols, target_rows);

    let mut padded = vec![0u8; target_cols * target_rows * channels];
    let src_stride = cols * channels;
    let dst_stride = target_cols * channels;
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset = row * src_stride;
        let dst_offset = (row + pad_rows) * dst_stride + pad_cols * channels;
        let src_slice = &data[src_offset..src_offset + src_stride];
        let dst_slice = &mut padded[dst_offset..dst_offset + src_stride];
        dst_slice.copy_from_slice(src_slice);
    }
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_symmetrically_with_zeros() {
        // 2x2 gray image into a 4x4 canvas: one row/col of padding on each side
        let data = vec![9u8; 2 * 2];
        let padded = pad_to_target(&data, 2, 2, 4, 4, 1).unwrap();
        assert_eq!(padded.len(), 16);

        let expected = vec![
            0, 0, 0, 0, //
            0, 9, 9, 0, //
            0, 9, 9, 0, //
            0, 0, 0, 0,
        ];
        assert_eq!(padded, expected);
    }

    #[test]
    fn respects_interleaved_channels() {
        // 1x1 rgb pixel centered in 3x1
        let data = vec![1u8, 2, 3];
        let padded = pad_to_target(&data, 1, 1, 3, 1, 3).unwrap();
        assert_eq!(padded, vec![0, 0, 0, 1, 2, 3, 0, 0, 0]);
    }

    #[test]
    fn oversized_image_is_an_error() {
        let data = vec![0u8; 5 * 5];
        assert!(pad_to_target(&data, 5, 5, 4, 4, 1).is_err());
    }
}
