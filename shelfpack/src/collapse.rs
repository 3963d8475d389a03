//! Trades row count against wasted row height by merging the shortest height
//! buckets together before shelf packing.

use std::iter;

use crate::{error::PackError, histogram::HeightBucket, layout::Layout, shelf::pack_shelves};

/// Shelf packs every way of merging the shortest buckets into one and keeps the
/// smallest result.
///
/// Merging nothing is always one of the candidates, so this never does worse
/// than [`pack_shelves`] on the same buckets. On ties, the candidate that
/// merged the fewest buckets wins. Candidates too large for `u32` coordinates
/// are skipped.
///
/// [`pack_shelves`]: fn.pack_shelves.html
pub fn collapse_small_heights(buckets: &[HeightBucket]) -> Result<Layout, PackError> {
    let mut best: Option<Layout> = None;
    let mut skipped_too_large = false;

    for index in 0..buckets.len() {
        let collapsed = collapse_through(buckets, index);

        let layout = match pack_shelves(&collapsed) {
            Ok(layout) => layout,
            Err(PackError::TooLarge) => {
                log::trace!(
                    "Collapsing all heights up to {} is too large",
                    buckets[index].height
                );
                skipped_too_large = true;
                continue;
            }
            Err(err) => return Err(err),
        };

        log::debug!(
            "Collapsing all heights up to {} => area {}",
            buckets[index].height,
            layout.area()
        );

        let is_better = match &best {
            Some(best_layout) => layout.area() < best_layout.area(),
            None => true,
        };

        if is_better {
            best = Some(layout);
        }
    }

    let best = match best {
        Some(best) => best,
        None if skipped_too_large => return Err(PackError::TooLarge),
        None => return Err(PackError::Empty),
    };

    log::debug!("Best collapsed packing has area {}", best.area());

    Ok(best)
}

/// Merges `buckets[0..=index]` into a single bucket as tall as
/// `buckets[index]`, leaving the remaining buckets untouched.
///
/// Panics if `index` is out of bounds.
pub(crate) fn collapse_through(buckets: &[HeightBucket], index: usize) -> Vec<HeightBucket> {
    let (merged, rest) = buckets.split_at(index + 1);

    let images = merged
        .iter()
        .flat_map(|bucket| bucket.images.iter().cloned())
        .collect();
    let height = merged[index].height;

    iter::once(HeightBucket::new(height, images))
        .chain(rest.iter().cloned())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{histogram::by_height, types::InputImage};

    fn sample() -> Vec<HeightBucket> {
        by_height(vec![
            InputImage::new("a", 2, 1),
            InputImage::new("b", 2, 3),
            InputImage::new("c", 3, 1),
            InputImage::new("d", 4, 5),
        ])
    }

    #[test]
    fn collapse_nothing() {
        let buckets = sample();
        assert_eq!(collapse_through(&buckets, 0), buckets);
    }

    #[test]
    fn collapse_prefix() {
        let buckets = sample();
        let collapsed = collapse_through(&buckets, 1);

        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed[0].height, 3);

        let names: Vec<&str> = collapsed[0]
            .images
            .iter()
            .map(|image| image.name().as_ref())
            .collect();
        assert_eq!(names, vec!["a", "c", "b"]);
        assert_eq!(collapsed[1], buckets[2]);
    }

    #[test]
    fn collapse_everything() {
        let buckets = sample();
        let collapsed = collapse_through(&buckets, 2);

        assert_eq!(collapsed.len(), 1);
        assert_eq!(collapsed[0].height, 5);
        assert_eq!(collapsed[0].images.len(), 4);
    }

    #[test]
    fn never_worse_than_plain_shelves() {
        let buckets = sample();

        let plain = pack_shelves(&buckets).unwrap();
        let collapsed = collapse_small_heights(&buckets).unwrap();

        assert!(collapsed.area() <= plain.area());
    }

    #[test]
    fn merging_short_rows_helps() {
        // Short images of different heights each get a mostly empty row of
        // their own unless they're merged.
        let buckets = by_height(vec![
            InputImage::new("one", 1, 1),
            InputImage::new("two", 1, 2),
            InputImage::new("wide", 4, 4),
        ]);

        let plain = pack_shelves(&buckets).unwrap();
        let collapsed = collapse_small_heights(&buckets).unwrap();

        assert_eq!(plain.area(), 28);
        assert_eq!(collapsed.area(), 24);
    }

    #[test]
    fn ties_keep_the_fewest_merged_buckets() {
        // Unmerged, the two images stack into a 2x3 column. Merged, they sit
        // side by side in a 3x2 row. Both cover 6 pixels.
        let buckets = by_height(vec![InputImage::new("small", 1, 1), InputImage::new("big", 2, 2)]);

        let unmerged = pack_shelves(&collapse_through(&buckets, 0)).unwrap();
        let merged = pack_shelves(&collapse_through(&buckets, 1)).unwrap();
        assert_eq!(unmerged.area(), merged.area());
        assert_ne!(unmerged, merged);

        let best = collapse_small_heights(&buckets).unwrap();

        assert_eq!(best, unmerged);
        assert_ne!(best, merged);
    }

    #[test]
    fn too_large_candidates_are_skipped() {
        // Kept apart, the two heights always stack past u32::MAX. Merged into
        // one bucket, they fit side by side.
        let buckets = by_height(vec![
            InputImage::new("a", 1, 3_000_000_000),
            InputImage::new("b", 1, 2_000_000_000),
        ]);

        assert_eq!(pack_shelves(&buckets), Err(PackError::TooLarge));

        let best = collapse_small_heights(&buckets).unwrap();
        assert_eq!(best.width(), 2);
        assert_eq!(best.height(), 3_000_000_000);
    }

    #[test]
    fn nothing_to_collapse() {
        assert_eq!(collapse_small_heights(&[]), Err(PackError::Empty));
    }
}
