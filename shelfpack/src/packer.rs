use crate::{
    collapse::collapse_small_heights,
    error::PackError,
    histogram::{by_height, HeightBucket},
    layout::Layout,
    orientation::best_orientation,
    shelf::pack_shelves,
    types::InputImage,
};

/// Packs images into shelves, searching over sheet widths, merged height
/// buckets, and the orientation of the whole image set.
///
/// Both searches are enabled by default. Turning them off only makes packing
/// faster; the result can never get smaller.
#[derive(Debug, Clone, Copy)]
pub struct ShelfPacker {
    collapse: bool,
    transpose: bool,
}

impl ShelfPacker {
    pub fn new() -> Self {
        Self {
            collapse: true,
            transpose: true,
        }
    }

    /// Whether to try merging the shortest height buckets together.
    pub fn collapse(self, collapse: bool) -> Self {
        Self { collapse, ..self }
    }

    /// Whether to also try packing every image rotated by 90 degrees.
    pub fn transpose(self, transpose: bool) -> Self {
        Self { transpose, ..self }
    }

    pub fn pack(&self, images: &[InputImage]) -> Result<Layout, PackError> {
        validate(images)?;

        log::trace!(
            "Packing {} images (collapse: {}, transpose: {})",
            images.len(),
            self.collapse,
            self.transpose
        );

        let collapse = self.collapse;
        let pack_buckets = |buckets: &[HeightBucket]| {
            if collapse {
                collapse_small_heights(buckets)
            } else {
                pack_shelves(buckets)
            }
        };

        let layout = if self.transpose {
            best_orientation(images, pack_buckets)?
        } else {
            pack_buckets(&by_height(images.iter().cloned()))?
        };

        log::trace!(
            "Finished packing {} images into {}x{}",
            images.len(),
            layout.width(),
            layout.height()
        );

        Ok(layout)
    }
}

impl Default for ShelfPacker {
    fn default() -> Self {
        Self::new()
    }
}

/// Packs `images` with every search enabled.
pub fn pack(images: &[InputImage]) -> Result<Layout, PackError> {
    ShelfPacker::new().pack(images)
}

/// Checks that there's at least one image and that none of them are empty.
pub fn validate(images: &[InputImage]) -> Result<(), PackError> {
    if images.is_empty() {
        return Err(PackError::Empty);
    }

    for image in images {
        if image.width == 0 || image.height == 0 {
            return Err(PackError::DegenerateImage {
                name: image.name.clone(),
                width: image.width,
                height: image.height,
            });
        }
    }

    Ok(())
}
