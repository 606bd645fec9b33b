use ndarray::Array3;

/// Swap R and B of an interleaved 3-channel buffer in place. Works in both
/// directions; no-op for other channel counts.
pub fn swap_channel_order(data: &mut [u8], channels: usize) {
    if channels != 3 {
        return;
    }
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
}

/// Permute an interleaved HWC buffer into planar CHW element order
pub fn hwc_to_chw_u8(
    data: Vec<u8>,
    rows: usize,
    cols: usize,
    channels: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let hwc = Array3::from_shape_vec((rows, cols, channels), data)?;
    let chw = hwc.permuted_axes([2, 0, 1]);
    Ok(chw.iter().copied().collect())
}

/// Permute an interleaved HWC f32 buffer into planar CHW element order
pub fn hwc_to_chw_f32(
    data: Vec<f32>,
    rows: usize,
    cols: usize,
    channels: usize,
) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let hwc = Array3::from_shape_vec((rows, cols, channels), data)?;
    let chw = hwc.permuted_axes([2, 0, 1]);
    Ok(chw.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_r_and_b() {
        let mut data = vec![1u8, 2, 3, 4, 5, 6];
        swap_channel_order(&mut data, 3);
        assert_eq!(data, vec![3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn swap_is_a_noop_for_gray() {
        let mut data = vec![1u8, 2, 3];
        swap_channel_order(&mut data, 1);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn chw_groups_each_channel_into_a_plane() {
        // 1 row, 2 cols, 3 channels: [[r0 g0 b0] [r1 g1 b1]]
        let data = vec![10u8, 20, 30, 11, 21, 31];
        let chw = hwc_to_chw_u8(data, 1, 2, 3).unwrap();
        assert_eq!(chw, vec![10, 11, 20, 21, 30, 31]);
    }

    #[test]
    fn chw_matches_manual_offsets_for_2x2() {
        let rows = 2;
        let cols = 2;
        let channels = 3;
        let data: Vec<f32> = (0..rows * cols * channels).map(|i| i as f32).collect();
        let chw = hwc_to_chw_f32(data.clone(), rows, cols, channels).unwrap();

        for r in 0..rows {
            for c in 0..cols {
                for ch in 0..channels {
                    let hwc_idx = (r * cols + c) * channels + ch;
                    let chw_idx = ch * rows * cols + r * cols + c;
                    assert_eq!(chw[chw_idx], data[hwc_idx]);
                }
            }
        }
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        assert!(hwc_to_chw_u8(vec![0u8; 5], 2, 2, 3).is_err());
    }
}
