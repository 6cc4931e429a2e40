//! Image fixtures: a single frame of the 640x480 test pattern.

use super::{FormatEntry, SyntheticSource};

pub const IMAGE_SOURCE: SyntheticSource =
    SyntheticSource::with_frames("testsrc=duration=1:size=640x480:rate=1", 1);

/// Two frames for the animated PNG.
const APNG_SOURCE: SyntheticSource =
    SyntheticSource::with_frames("testsrc=duration=0.1:size=640x480:rate=10", 2);

pub const IMAGE_ENTRIES: [FormatEntry; 11] = [
    FormatEntry::new("example.apng", &["-codec:v", "apng"]).with_source(APNG_SOURCE),
    FormatEntry::new("example.avif", &["-codec:v", "libavif", "-quality", "80"]).optional_codec(),
    FormatEntry::new("example.png", &["-codec:v", "png"]),
    FormatEntry::new("example.jpg", &["-codec:v", "mjpeg", "-q:v", "5"]),
    FormatEntry::new("example.jpeg", &["-codec:v", "mjpeg", "-q:v", "5"]),
    FormatEntry::new("example.bmp", &["-codec:v", "bmp"]),
    FormatEntry::new("example.gif", &["-codec:v", "gif"]),
    FormatEntry::new("example.webp", &["-codec:v", "libwebp", "-quality", "80"]),
    FormatEntry::new("example.tif", &["-codec:v", "tiff"]),
    FormatEntry::new("example.tiff", &["-codec:v", "tiff"]),
    FormatEntry::new("example.ico", &["-codec:v", "bmp", "-s", "32x32"]),
];

/// 32x32 frame that becomes the cursor image.
const CURSOR_SOURCE: SyntheticSource =
    SyntheticSource::with_frames("testsrc=duration=0.1:size=32x32:rate=1", 1);

/// Intermediate bitmap for the cursor; removed once the cursor is written.
pub const CURSOR_BITMAP: FormatEntry = FormatEntry::new("example_cur_temp.bmp", &["-codec:v", "bmp"])
    .with_source(CURSOR_SOURCE);

pub const CURSOR_FILENAME: &str = "example.cur";
pub const SVG_FILENAME: &str = "example.svg";
pub const SVGZ_FILENAME: &str = "example.svgz";
