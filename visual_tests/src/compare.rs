use crate::{Result, VisualTestError};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use image_compare::Algorithm;
use std::path::Path;

/// Result of comparing two images
pub struct CompareResult {
    /// Similarity score from 0.0 to 1.0
    pub similarity: f64,
}

/// Compare two PNG files using SSIM
pub fn compare_images(reference: &Path, captured: &Path) -> Result<CompareResult> {
    let ref_img = image::open(reference)?.to_rgba8();
    let cap_img = image::open(captured)?.to_rgba8();
    compare_rgba(&ref_img, &cap_img)
}

/// Compare two in-memory captures using SSIM.
///
/// Captures have a transparent background, so both are flattened onto white
/// first; otherwise every uncovered pixel would compare as black.
pub fn compare_rgba(reference: &RgbaImage, captured: &RgbaImage) -> Result<CompareResult> {
    if reference.dimensions() != captured.dimensions() {
        return Err(VisualTestError::Compare(format!(
            "Image dimensions don't match: reference {:?} vs captured {:?}",
            reference.dimensions(),
            captured.dimensions()
        )));
    }

    let result = image_compare::rgb_similarity_structure(
        &Algorithm::MSSIMSimple,
        &flatten_on_white(reference),
        &flatten_on_white(captured),
    )
    .map_err(|e| VisualTestError::Compare(format!("SSIM comparison failed: {}", e)))?;

    Ok(CompareResult {
        similarity: result.score,
    })
}

/// Generate a diff image highlighting differences between two images
pub fn generate_diff_image(reference: &Path, captured: &Path, output: &Path) -> Result<()> {
    let ref_rgb = flatten_on_white(&image::open(reference)?.to_rgba8());
    let cap_rgb = flatten_on_white(&image::open(captured)?.to_rgba8());

    let (width, height) = ref_rgb.dimensions();
    let mut diff_img = RgbaImage::new(width, height);

    for (x, y, ref_pixel) in ref_rgb.enumerate_pixels() {
        let Some(cap_pixel) = cap_rgb.get_pixel_checked(x, y) else {
            continue;
        };

        if pixel_difference(ref_pixel, cap_pixel) > 10 {
            diff_img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
        } else {
            // Show the capture faded so the highlighted pixels stand out
            let [r, g, b] = cap_pixel.0.map(|c| c / 3);
            diff_img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    diff_img.save(output)?;
    Ok(())
}

fn flatten_on_white(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        let alpha = a as u16;
        let blend = |c: u8| ((c as u16 * alpha + 255 * (255 - alpha)) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Calculate the maximum channel difference between two pixels
fn pixel_difference(a: &Rgb<u8>, b: &Rgb<u8>) -> u8 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(x, y)| x.abs_diff(*y))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_transparent_is_white() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        let flat = flatten_on_white(&image);
        assert!(flat.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_flatten_opaque_is_unchanged() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([0x90, 0xD9, 0x7E, 255]));
        assert_eq!(flatten_on_white(&image).get_pixel(0, 0).0, [0x90, 0xD9, 0x7E]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = RgbaImage::new(8, 8);
        let b = RgbaImage::new(8, 4);
        assert!(matches!(
            compare_rgba(&a, &b),
            Err(VisualTestError::Compare(_))
        ));
    }

    #[test]
    fn test_pixel_difference() {
        assert_eq!(pixel_difference(&Rgb([10, 200, 0]), &Rgb([12, 100, 0])), 100);
    }
}
