use crate::core::processing::padding::pad_to_target;
use crate::types::{ColorMode, ResizeFilter};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{info, warn};

fn resize_alg(filter: ResizeFilter) -> ResizeAlg {
    match filter {
        ResizeFilter::Nearest => ResizeAlg::Nearest,
        ResizeFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResizeFilter::Cubic => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResizeFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Largest aspect-preserving fit of `src` inside the `dst` box
pub fn calculate_letterbox_dimensions(
    src_cols: usize,
    src_rows: usize,
    dst_cols: usize,
    dst_rows: usize,
) -> (usize, usize) {
    let scale_x = dst_cols as f64 / src_cols as f64;
    let scale_y = dst_rows as f64 / src_rows as f64;
    let scale = scale_x.min(scale_y);

    let fit_cols = ((src_cols as f64 * scale).round() as usize)
        .max(1)
        .min(dst_cols);
    let fit_rows = ((src_rows as f64 * scale).round() as usize)
        .max(1)
        .min(dst_rows);
    (fit_cols, fit_rows)
}

pub fn resize_rgb_image(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
    filter: ResizeFilter,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8x3,
    )?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8x3);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

pub fn resize_gray_image(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
    filter: ResizeFilter,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let resize_options = ResizeOptions::new().resize_alg(resize_alg(filter));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8,
    )?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

fn resize_plane(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
    color: ColorMode,
    filter: ResizeFilter,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match color {
        ColorMode::Rgb => resize_rgb_image(
            data,
            original_cols,
            original_rows,
            target_cols,
            target_rows,
            filter,
        ),
        ColorMode::Gray => resize_gray_image(
            data,
            original_cols,
            original_rows,
            target_cols,
            target_rows,
            filter,
        ),
    }
}

/// Resample an interleaved plane to the exact target box. In letterbox mode
/// the content is fit aspect-preserving and centered on a zero canvas; the
/// returned dimensions are always `(target_cols, target_rows)`.
pub fn resize_image_data(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
    color: ColorMode,
    filter: ResizeFilter,
    letterbox: bool,
) -> Result<(usize, usize, Vec<u8>), Box<dyn std::error::Error>> {
    let channels = color.channels();

    if target_cols > original_cols || target_rows > original_rows {
        warn!(
            "Target {}x{} upscales the original {}x{}",
            target_cols, target_rows, original_cols, original_rows
        );
    }

    if letterbox {
        let (fit_cols, fit_rows) =
            calculate_letterbox_dimensions(original_cols, original_rows, target_cols, target_rows);
        info!(
            "Letterbox: {}x{} -> fit {}x{} in {}x{}",
            original_cols, original_rows, fit_cols, fit_rows, target_cols, target_rows
        );

        let fitted = if fit_cols == original_cols && fit_rows == original_rows {
            data.to_vec()
        } else {
            resize_plane(
                data,
                original_cols,
                original_rows,
                fit_cols,
                fit_rows,
                color,
                filter,
            )?
        };
        let padded = pad_to_target(&fitted, fit_cols, fit_rows, target_cols, target_rows, channels)?;
        return Ok((target_cols, target_rows, padded));
    }

    // Resizing to the source's own size is a copy, not a resample
    if original_cols == target_cols && original_rows == target_rows {
        return Ok((target_cols, target_rows, data.to_vec()));
    }

    info!(
        "Resizing {}x{} -> {}x{} ({})",
        original_cols, original_rows, target_cols, target_rows, filter
    );
    let resized = resize_plane(
        data,
        original_cols,
        original_rows,
        target_cols,
        target_rows,
        color,
        filter,
    )?;
    Ok((target_cols, target_rows, resized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_output_length_is_width_height_channels() {
        let src = vec![100u8; 16 * 10 * 3];
        let out = resize_rgb_image(&src, 16, 10, 8, 5, ResizeFilter::Bilinear).unwrap();
        assert_eq!(out.len(), 8 * 5 * 3);
    }

    #[test]
    fn gray_output_length_is_width_height() {
        let src = vec![100u8; 16 * 10];
        let out = resize_gray_image(&src, 16, 10, 8, 5, ResizeFilter::Bilinear).unwrap();
        assert_eq!(out.len(), 8 * 5);
    }

    #[test]
    fn bilinear_on_constant_image_stays_constant() {
        let src = vec![77u8; 32 * 32 * 3];
        let out = resize_rgb_image(&src, 32, 32, 224, 224, ResizeFilter::Bilinear).unwrap();
        assert!(out.iter().all(|&v| v == 77));
    }

    #[test]
    fn resampling_is_deterministic() {
        let src: Vec<u8> = (0..24 * 18 * 3).map(|i| (i % 251) as u8).collect();
        let a = resize_rgb_image(&src, 24, 18, 224, 224, ResizeFilter::Bilinear).unwrap();
        let b = resize_rgb_image(&src, 24, 18, 224, 224, ResizeFilter::Bilinear).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn letterbox_dimensions_preserve_aspect() {
        // 2:1 source into a square box fills the width
        assert_eq!(calculate_letterbox_dimensions(200, 100, 224, 224), (224, 112));
        // 1:2 source fills the height
        assert_eq!(calculate_letterbox_dimensions(100, 200, 224, 224), (112, 224));
        assert_eq!(calculate_letterbox_dimensions(50, 50, 224, 224), (224, 224));
    }

    #[test]
    fn letterbox_output_hits_the_exact_target() {
        let src = vec![255u8; 20 * 10 * 3];
        let (w, h, out) =
            resize_image_data(&src, 20, 10, 224, 224, ColorMode::Rgb, ResizeFilter::Bilinear, true)
                .unwrap();
        assert_eq!((w, h), (224, 224));
        assert_eq!(out.len(), 224 * 224 * 3);
        // Top rows are padding
        assert!(out[..224 * 3].iter().all(|&v| v == 0));
    }

    #[test]
    fn same_size_resize_is_a_copy() {
        let src: Vec<u8> = (0..6 * 4 * 3).map(|i| i as u8).collect();
        let (_, _, out) =
            resize_image_data(&src, 6, 4, 6, 4, ColorMode::Rgb, ResizeFilter::Bilinear, false)
                .unwrap();
        assert_eq!(out, src);
    }
}
