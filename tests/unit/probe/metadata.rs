use std::io::Cursor;

use super::*;

fn encode(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 20, 30]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

#[test]
fn reads_png_and_jpeg_dimensions() {
    let png = encode(37, 21, image::ImageFormat::Png);
    assert_eq!(
        read_dimensions(&png).unwrap(),
        Dimensions {
            width: 37,
            height: 21
        }
    );

    let jpg = encode(64, 48, image::ImageFormat::Jpeg);
    assert_eq!(
        read_dimensions(&jpg).unwrap(),
        Dimensions {
            width: 64,
            height: 48
        }
    );
}

#[test]
fn short_prefix_asks_for_more() {
    let png = encode(10, 10, image::ImageFormat::Png);
    assert_eq!(scan_header(&png[..8]), HeaderScan::NeedMore);
    assert_eq!(scan_header(&[]), HeaderScan::NeedMore);
}

#[test]
fn non_image_bytes_are_unsupported() {
    let text = b"<html><body>404 not found, this is definitely not an image</body></html>";
    assert!(matches!(scan_header(text), HeaderScan::Unsupported(_)));
    assert!(matches!(
        read_dimensions(text),
        Err(MetadataFetchError::Decode(_))
    ));
}

#[test]
fn truncated_file_is_a_decode_error() {
    let png = encode(10, 10, image::ImageFormat::Png);
    let err = read_dimensions(&png[..12]).unwrap_err();
    assert!(err.to_string().contains("truncated image header"));
}
