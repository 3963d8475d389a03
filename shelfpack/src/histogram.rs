//! Stable grouping of images by one of their attributes.

use crate::types::InputImage;

/// Groups images by the key `key` returns, with groups sorted ascending by key.
///
/// Images that share a key keep the relative order they had in `images`.
/// Later packing steps rely on this to produce the same layout for the same
/// input every time.
pub fn histogram<I, K, F>(images: I, key: F) -> Vec<(K, Vec<InputImage>)>
where
    I: IntoIterator<Item = InputImage>,
    K: Ord,
    F: Fn(&InputImage) -> K,
{
    let mut images: Vec<_> = images.into_iter().collect();
    images.sort_by_key(|image| key(image));

    let mut groups: Vec<(K, Vec<InputImage>)> = Vec::new();

    for image in images {
        let image_key = key(&image);

        if let Some((last_key, members)) = groups.last_mut() {
            if *last_key == image_key {
                members.push(image);
                continue;
            }
        }

        groups.push((image_key, vec![image]));
    }

    groups
}

/// All of the images sharing a single height.
///
/// When buckets are merged together, `height` is the tallest height among the
/// merged images and `images` may contain shorter images too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightBucket {
    pub height: u32,
    pub images: Vec<InputImage>,
}

impl HeightBucket {
    pub fn new(height: u32, images: Vec<InputImage>) -> Self {
        Self { height, images }
    }

    /// The total width of every image in this bucket laid end to end.
    pub fn total_width(&self) -> u64 {
        self.images
            .iter()
            .map(|image| u64::from(image.width))
            .sum()
    }
}

/// Buckets images by height, shortest first.
pub fn by_height<I: IntoIterator<Item = InputImage>>(images: I) -> Vec<HeightBucket> {
    histogram(images, InputImage::height)
        .into_iter()
        .map(|(height, images)| HeightBucket::new(height, images))
        .collect()
}
