//! Video fixtures: 5 seconds of the 640x480 test pattern at 30 fps.

use super::{FormatEntry, SyntheticSource};

pub const VIDEO_SOURCE: SyntheticSource =
    SyntheticSource::new("testsrc=duration=5:size=640x480:rate=30");

const H264_YUV420: &[&str] = &["-codec:v", "libx264", "-codec:a", "aac", "-pix_fmt", "yuv420p"];
const MPEG_PS: &[&str] = &["-codec:v", "mpeg2video", "-codec:a", "mp2", "-f", "mpeg"];

pub const VIDEO_ENTRIES: [FormatEntry; 19] = [
    // Mobile containers need a smaller frame.
    FormatEntry::new(
        "example.3gp",
        &["-codec:v", "libx264", "-codec:a", "aac", "-s", "320x240", "-f", "3gp"],
    ),
    FormatEntry::new(
        "example.3g2",
        &["-codec:v", "libx264", "-codec:a", "aac", "-s", "320x240", "-f", "3g2"],
    ),
    FormatEntry::new("example.flv", &["-codec:v", "libx264", "-codec:a", "aac", "-f", "flv"]),
    FormatEntry::new("example.mp4", H264_YUV420),
    FormatEntry::new("example.mp4v", H264_YUV420),
    FormatEntry::new("example.mpg4", H264_YUV420),
    FormatEntry::new("example.webm", &["-codec:v", "libvpx-vp9", "-codec:a", "libopus"]),
    FormatEntry::new("example.ogv", &["-codec:v", "libtheora", "-codec:a", "libvorbis"]),
    FormatEntry::new("example.avi", &["-codec:v", "libx264", "-codec:a", "aac", "-f", "avi"]),
    FormatEntry::new("example.mov", &["-codec:v", "libx264", "-codec:a", "aac", "-f", "mov"]),
    FormatEntry::new("example.qt", &["-codec:v", "libx264", "-codec:a", "aac", "-f", "mov"]),
    FormatEntry::new(
        "example.mkv",
        &["-codec:v", "libx264", "-codec:a", "aac", "-f", "matroska"],
    ),
    FormatEntry::new("example.mpeg", MPEG_PS),
    FormatEntry::new("example.mpg", MPEG_PS),
    FormatEntry::new("example.mpe", MPEG_PS),
    FormatEntry::new("example.m1v", &["-codec:v", "mpeg2video", "-f", "mpeg1video"]),
    FormatEntry::new("example.m2v", &["-codec:v", "mpeg2video", "-f", "mpeg2video"]),
    FormatEntry::new("example.mpa", &["-codec:a", "mp2", "-f", "mpeg"]),
    FormatEntry::new("example.h264", H264_YUV420),
];
