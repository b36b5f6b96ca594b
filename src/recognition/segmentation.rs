use image::{GrayImage, Luma};
use imageproc::region_labelling::{connected_components, Connectivity};
use std::collections::HashMap;

use crate::models::Blob;

/// Find connected ink components in a binary mask and return one blob per
/// maximal 8-connected foreground region. Holes inside a component (the
/// loop of a "0") are background and never produce a blob of their own.
///
/// Blobs come back sorted by label id, which is the raster order in which
/// the labelling pass first touched each component. Callers must not read
/// any spatial meaning into it.
pub fn find_blobs(mask: &GrayImage) -> Vec<Blob> {
    let labeled = connected_components(mask, Connectivity::Eight, Luma([0u8]));

    let mut regions: HashMap<u32, (u32, u32, u32, u32, u32)> = HashMap::new();

    for (x, y, label) in labeled.enumerate_pixels() {
        let label_val = label[0];
        if label_val == 0 {
            continue; // Skip background
        }

        regions
            .entry(label_val)
            .and_modify(|(min_x, min_y, max_x, max_y, count)| {
                *min_x = (*min_x).min(x);
                *min_y = (*min_y).min(y);
                *max_x = (*max_x).max(x);
                *max_y = (*max_y).max(y);
                *count += 1;
            })
            .or_insert((x, y, x, y, 1));
    }

    let mut blobs: Vec<Blob> = regions
        .into_iter()
        .map(|(label, (min_x, min_y, max_x, max_y, count))| Blob {
            label,
            min_x,
            min_y,
            max_x,
            max_y,
            pixel_count: count,
        })
        .collect();

    // HashMap iteration order is arbitrary; sort so repeated runs on the
    // same mask discover blobs in the same order.
    blobs.sort_by_key(|b| b.label);
    blobs
}
