mod common;

use common::fixtures::{blank_capture, paint_rect, paint_ring};
use digitpad::recognition::preprocessing::{binarize, to_grayscale};
use digitpad::recognition::segmentation::find_blobs;
use image::GrayImage;

fn mask_of(capture: &image::RgbImage) -> GrayImage {
    binarize(&to_grayscale(capture), 100)
}

#[test]
fn separated_blobs_get_one_box_each() {
    let mut capture = blank_capture(120, 120);
    paint_rect(&mut capture, 10, 10, 25, 30);
    paint_rect(&mut capture, 70, 60, 30, 25);

    let blobs = find_blobs(&mask_of(&capture));

    assert_eq!(blobs.len(), 2);
    for blob in &blobs {
        let bbox = blob.bounding_box();
        assert!(bbox.width > 0 && bbox.height > 0);
        assert!(bbox.right() <= 120);
        assert!(bbox.bottom() <= 120);
    }
}

#[test]
fn box_extents_are_exact() {
    let mut capture = blank_capture(80, 80);
    paint_rect(&mut capture, 12, 20, 25, 30);

    let blobs = find_blobs(&mask_of(&capture));

    assert_eq!(blobs.len(), 1);
    let bbox = blobs[0].bounding_box();
    assert_eq!((bbox.x, bbox.y, bbox.width, bbox.height), (12, 20, 25, 30));
    assert_eq!(blobs[0].area(), 25 * 30);
}

#[test]
fn interior_holes_are_not_reported() {
    // A ring reads like a drawn "0": the hole is background, so only the
    // outer blob is found and its box spans the full outer extent.
    let mut capture = blank_capture(100, 100);
    paint_ring(&mut capture, 20, 20, 40, 6);

    let blobs = find_blobs(&mask_of(&capture));

    assert_eq!(blobs.len(), 1);
    let bbox = blobs[0].bounding_box();
    assert_eq!((bbox.x, bbox.y, bbox.width, bbox.height), (20, 20, 40, 40));
}

#[test]
fn segmentation_is_idempotent() {
    let mut capture = blank_capture(100, 100);
    paint_rect(&mut capture, 5, 5, 22, 22);
    paint_rect(&mut capture, 50, 40, 30, 35);
    paint_ring(&mut capture, 10, 60, 25, 4);

    let mask = mask_of(&capture);
    let first: Vec<_> = find_blobs(&mask).iter().map(|b| b.bounding_box()).collect();
    let second: Vec<_> = find_blobs(&mask).iter().map(|b| b.bounding_box()).collect();

    assert_eq!(first, second);
}

#[test]
fn empty_mask_has_no_blobs() {
    let capture = blank_capture(50, 50);
    assert!(find_blobs(&mask_of(&capture)).is_empty());
}

#[test]
fn diagonal_contact_joins_blobs() {
    // 8-connectivity: two squares touching only at a corner are one blob.
    let mut capture = blank_capture(60, 60);
    paint_rect(&mut capture, 10, 10, 10, 10);
    paint_rect(&mut capture, 20, 20, 10, 10);

    let blobs = find_blobs(&mask_of(&capture));

    assert_eq!(blobs.len(), 1);
    let bbox = blobs[0].bounding_box();
    assert_eq!((bbox.width, bbox.height), (20, 20));
}
