//! Packing the whole image set rotated by 90 degrees, in case rows of the
//! rotated images bucket more tightly than the originals do.

use crate::{
    error::PackError,
    histogram::{by_height, HeightBucket},
    layout::Layout,
    types::InputImage,
};

/// Which way a set of images was packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Rotated,
}

/// Runs `pack` over `images` bucketed by height, then again with every image
/// rotated, and returns the smaller layout in the images' original frame.
///
/// The upright packing wins ties. If one orientation is too large for `u32`
/// coordinates, the other one is used.
pub fn best_orientation<F>(images: &[InputImage], pack: F) -> Result<Layout, PackError>
where
    F: FnMut(&[HeightBucket]) -> Result<Layout, PackError>,
{
    best_orientation_with(images, pack).map(|(layout, _)| layout)
}

/// Like [`best_orientation`], but also reports which orientation won.
///
/// [`best_orientation`]: fn.best_orientation.html
pub fn best_orientation_with<F>(
    images: &[InputImage],
    mut pack: F,
) -> Result<(Layout, Orientation), PackError>
where
    F: FnMut(&[HeightBucket]) -> Result<Layout, PackError>,
{
    let upright = pack(&by_height(images.iter().cloned()));
    let rotated = pack(&by_height(images.iter().map(InputImage::transposed)));

    let (upright, rotated) = match (upright, rotated) {
        (Ok(upright), Ok(rotated)) => (upright, rotated),
        (Ok(upright), Err(PackError::TooLarge)) => {
            log::debug!("Rotated packing is too large, keeping upright packing");
            return Ok((upright, Orientation::Upright));
        }
        (Err(PackError::TooLarge), Ok(rotated)) => {
            log::debug!("Upright packing is too large, keeping rotated packing");
            return Ok((rotated.transposed(), Orientation::Rotated));
        }
        (Err(err), _) | (_, Err(err)) => return Err(err),
    };

    log::trace!("Upright packing has area {}", upright.area());
    log::trace!("Rotated packing has area {}", rotated.area());

    if rotated.area() < upright.area() {
        log::debug!(
            "Rotated packing wins with area {} over {}",
            rotated.area(),
            upright.area()
        );

        Ok((rotated.transposed(), Orientation::Rotated))
    } else {
        log::debug!(
            "Upright packing wins with area {} over {}",
            upright.area(),
            rotated.area()
        );

        Ok((upright, Orientation::Upright))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        shelf::pack_shelves,
        types::{Offset, PlacedImage},
    };

    #[test]
    fn upright_wins_ties() {
        let images = vec![InputImage::new("square", 4, 4)];

        let (layout, orientation) = best_orientation_with(&images, pack_shelves).unwrap();

        assert_eq!(orientation, Orientation::Upright);
        assert_eq!(layout.area(), 16);
    }

    #[test]
    fn rotated_results_are_transposed_back() {
        // Upright, the wide image forces a 3 pixel wide sheet with a gap next
        // to the tall one. Rotated, both fit in a 2 pixel wide column.
        let images = vec![InputImage::new("a", 3, 1), InputImage::new("b", 1, 2)];

        let upright = pack_shelves(&by_height(images.iter().cloned())).unwrap();
        assert_eq!(upright.area(), 9);

        let (layout, orientation) = best_orientation_with(&images, pack_shelves).unwrap();

        assert_eq!(orientation, Orientation::Rotated);
        assert_eq!(layout.area(), 8);
        assert_eq!(layout.width(), 4);
        assert_eq!(layout.height(), 2);
        assert_eq!(
            layout.images(),
            &[
                PlacedImage::new(InputImage::new("b", 1, 2), Offset::new(0, 0)),
                PlacedImage::new(InputImage::new("a", 3, 1), Offset::new(1, 0)),
            ]
        );
    }

    #[test]
    fn returns_the_smaller_branch() {
        let images = vec![
            InputImage::new("a", 1, 6),
            InputImage::new("b", 2, 6),
            InputImage::new("c", 5, 2),
        ];

        let mut areas = Vec::new();
        let layout = best_orientation(&images, |buckets: &[HeightBucket]| {
            let layout = pack_shelves(buckets)?;
            areas.push(layout.area());
            Ok(layout)
        })
        .unwrap();

        assert_eq!(areas.len(), 2);
        assert_eq!(layout.area(), areas[0].min(areas[1]));
    }

    #[test]
    fn too_large_orientation_is_skipped() {
        // Upright, the two heights stack past u32::MAX. Rotated, they share a
        // single short row.
        let images = vec![
            InputImage::new("a", 1, 3_000_000_000),
            InputImage::new("b", 1, 2_000_000_000),
        ];

        let (layout, orientation) = best_orientation_with(&images, pack_shelves).unwrap();

        assert_eq!(orientation, Orientation::Rotated);
        assert_eq!(layout.width(), 2);
        assert_eq!(layout.height(), 3_000_000_000);
    }

    #[test]
    fn errors_propagate() {
        let images = vec![InputImage::new("a", 1, 1)];
        let result = best_orientation(&images, |_: &[HeightBucket]| Err(PackError::Empty));

        assert_eq!(result, Err(PackError::Empty));
    }
}
