//! Audio fixtures: a 2 second 440 Hz sine tone.

use super::{FormatEntry, SyntheticSource};

pub const AUDIO_SOURCE: SyntheticSource = SyntheticSource::new("sine=frequency=440:duration=2");

pub const AUDIO_ENTRIES: [FormatEntry; 11] = [
    FormatEntry::new("example.wma", &["-codec:a", "wmav2", "-b:a", "128k"]).optional_codec(),
    FormatEntry::new("example.mp3", &["-codec:a", "libmp3lame", "-b:a", "128k"]),
    FormatEntry::new("example.wav", &["-codec:a", "pcm_s16le"]),
    FormatEntry::new("example.ogg", &["-codec:a", "libvorbis", "-b:a", "128k"]),
    FormatEntry::new("example.oga", &["-codec:a", "libvorbis", "-b:a", "128k"]),
    FormatEntry::new("example.spx", &["-codec:a", "libspeex", "-b:a", "16k"]),
    FormatEntry::new("example.aac", &["-codec:a", "aac", "-b:a", "128k"]),
    FormatEntry::new("example.adts", &["-codec:a", "aac", "-b:a", "128k"]),
    FormatEntry::new("example.flac", &["-codec:a", "flac"]),
    FormatEntry::new("example.m4a", &["-codec:a", "aac", "-b:a", "128k", "-f", "mp4"]),
    FormatEntry::new("example.weba", &["-codec:a", "libopus", "-b:a", "128k", "-f", "webm"]),
];
