//! Row ("shelf") packing of images that have already been bucketed by height.

use std::convert::TryFrom;

use crate::{
    error::PackError,
    histogram::HeightBucket,
    layout::Layout,
    types::{InputImage, Offset, PlacedImage},
};

/// Finds the smallest shelf layout of `buckets` over every sensible sheet
/// width.
///
/// Trial widths run from the widest bucket laid out in a single row down to the
/// widest single image. When two widths give the same area, the wider one wins
/// since it was tried first. The search stops at the first width whose layout
/// is too tall for `u32` coordinates, and returns [`PackError::TooLarge`] if
/// that was the very first width tried.
///
/// [`PackError::TooLarge`]: enum.PackError.html#variant.TooLarge
pub fn pack_shelves(buckets: &[HeightBucket]) -> Result<Layout, PackError> {
    let min_width = buckets
        .iter()
        .flat_map(|bucket| bucket.images.iter())
        .map(InputImage::width)
        .max()
        .ok_or(PackError::Empty)?;

    let max_width = buckets
        .iter()
        .map(HeightBucket::total_width)
        .max()
        .ok_or(PackError::Empty)?;
    let max_width = u32::try_from(max_width).unwrap_or(u32::MAX);

    log::trace!(
        "Packing {} buckets at widths {} down to {}",
        buckets.len(),
        max_width,
        min_width
    );

    let mut best: Option<(u32, Layout)> = None;
    let mut width = max_width;

    while width >= min_width {
        let layout = match pack_shelves_at_width(buckets, width) {
            Ok(layout) => layout,
            Err(PackError::TooLarge) => {
                // Walking on past this point could take billions of trials, one
                // pixel at a time.
                log::trace!("Width {} does not fit in 32-bit coordinates", width);
                break;
            }
            Err(err) => return Err(err),
        };

        log::trace!(
            "Width {} packed into {}x{} (area {})",
            width,
            layout.width(),
            layout.height(),
            layout.area()
        );

        // Rows only break when they would grow past the trial width, so every
        // width between the layout's real width and this trial width produces
        // exactly this layout again. Skip straight past them.
        let next_width = layout.width().checked_sub(1);

        let is_better = match &best {
            Some((_, best_layout)) => layout.area() < best_layout.area(),
            None => true,
        };

        if is_better {
            best = Some((width, layout));
        }

        match next_width {
            Some(next_width) => width = next_width,
            None => break,
        }
    }

    let (best_width, best_layout) = best.ok_or(PackError::TooLarge)?;

    log::debug!(
        "Best shelf packing is width {} (tried at {}) with area {}",
        best_layout.width(),
        best_width,
        best_layout.area()
    );

    Ok(best_layout)
}

/// Lays out `buckets` as shelves no wider than `width`.
///
/// Buckets are stacked top to bottom in order and each bucket starts a fresh
/// row. Every row is as tall as its tallest image. Fails with
/// [`PackError::TooLarge`] if the rows don't fit in `u32` coordinates.
///
/// [`PackError::TooLarge`]: enum.PackError.html#variant.TooLarge
pub fn pack_shelves_at_width(buckets: &[HeightBucket], width: u32) -> Result<Layout, PackError> {
    let mut placed = Vec::new();
    let mut y: u32 = 0;

    for bucket in buckets {
        for row in shelve(&bucket.images, width) {
            let mut x: u32 = 0;
            let mut row_height = 0;

            for image in row {
                placed.push(PlacedImage::new(image.clone(), Offset::new(x, y)));
                x = x.checked_add(image.width).ok_or(PackError::TooLarge)?;
                row_height = row_height.max(image.height);
            }

            y = y.checked_add(row_height).ok_or(PackError::TooLarge)?;
        }
    }

    Layout::new(placed)
}

/// Splits `images` into rows greedily, left to right, starting a new row
/// whenever the next image would push the current one past `width`.
///
/// An image wider than `width` still gets a row of its own.
fn shelve(images: &[InputImage], width: u32) -> Vec<&[InputImage]> {
    let mut rows = Vec::new();
    let mut row_start = 0;
    let mut row_width: u64 = 0;

    for (index, image) in images.iter().enumerate() {
        let image_width = u64::from(image.width);

        if index > row_start && row_width + image_width > u64::from(width) {
            rows.push(&images[row_start..index]);
            row_start = index;
            row_width = 0;
        }

        row_width += image_width;
    }

    if row_start < images.len() {
        rows.push(&images[row_start..]);
    }

    rows
}
