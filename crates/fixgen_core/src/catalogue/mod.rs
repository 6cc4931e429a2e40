//! Static catalogue of transcoder-produced fixtures.
//!
//! Each media category has a synthetic source (an ffmpeg `lavfi` filter)
//! and a table of output files with their codec/format flags. Tables are
//! listed in run order.

mod audio;
mod images;
mod video;

pub use audio::{AUDIO_ENTRIES, AUDIO_SOURCE};
pub use images::{
    CURSOR_BITMAP, CURSOR_FILENAME, IMAGE_ENTRIES, IMAGE_SOURCE, SVGZ_FILENAME, SVG_FILENAME,
};
pub use video::{VIDEO_ENTRIES, VIDEO_SOURCE};

use std::ffi::OsString;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Output category; one generator per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Audio,
    Video,
    Images,
    Compressed,
    Other,
}

impl Category {
    /// All categories, in run order.
    pub const ALL: [Category; 5] = [
        Category::Audio,
        Category::Video,
        Category::Images,
        Category::Compressed,
        Category::Other,
    ];

    /// Label used in console messages ("Generating image files...").
    pub fn label(&self) -> &'static str {
        match self {
            Category::Audio => "audio",
            Category::Video => "video",
            Category::Images => "image",
            Category::Compressed => "compressed",
            Category::Other => "other binary",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Audio => write!(f, "audio"),
            Category::Video => write!(f, "video"),
            Category::Images => write!(f, "images"),
            Category::Compressed => write!(f, "compressed"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// Procedurally generated transcoder input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticSource {
    /// `lavfi` filter graph, e.g. `sine=frequency=440:duration=2`.
    pub filter: &'static str,
    /// Limit on output video frames.
    pub frames: Option<u32>,
}

impl SyntheticSource {
    pub const fn new(filter: &'static str) -> Self {
        Self {
            filter,
            frames: None,
        }
    }

    pub const fn with_frames(filter: &'static str, frames: u32) -> Self {
        Self {
            filter,
            frames: Some(frames),
        }
    }

    /// Input-side arguments, ending with `-y` (overwrite outputs).
    pub fn input_args(&self) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            "lavfi".to_string(),
            "-i".to_string(),
            self.filter.to_string(),
        ];
        if let Some(frames) = self.frames {
            args.push("-frames:v".to_string());
            args.push(frames.to_string());
        }
        args.push("-y".to_string());
        args
    }
}

/// One transcoder output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatEntry {
    pub filename: &'static str,
    /// Codec and container flags placed between input and output path.
    pub args: &'static [&'static str],
    /// Source used instead of the category's source.
    pub source: Option<SyntheticSource>,
    /// The encoder is commonly missing from ffmpeg builds.
    pub optional_codec: bool,
}

impl FormatEntry {
    pub const fn new(filename: &'static str, args: &'static [&'static str]) -> Self {
        Self {
            filename,
            args,
            source: None,
            optional_codec: false,
        }
    }

    pub const fn with_source(self, source: SyntheticSource) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }

    pub const fn optional_codec(self) -> Self {
        Self {
            optional_codec: true,
            ..self
        }
    }

    /// Full ffmpeg argument list for writing this entry to `output`.
    pub fn ffmpeg_args(&self, default_source: &SyntheticSource, output: &Path) -> Vec<OsString> {
        let source = self.source.as_ref().unwrap_or(default_source);
        let mut args: Vec<OsString> = source.input_args().into_iter().map(OsString::from).collect();
        args.extend(self.args.iter().map(OsString::from));
        args.push(output.as_os_str().to_os_string());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn audio_args_follow_source_then_codec() {
        let wav = AUDIO_ENTRIES
            .iter()
            .find(|e| e.filename == "example.wav")
            .unwrap();
        let args = wav.ffmpeg_args(&AUDIO_SOURCE, Path::new("/out/example.wav"));
        assert_eq!(
            strings(&args),
            vec![
                "-f",
                "lavfi",
                "-i",
                "sine=frequency=440:duration=2",
                "-y",
                "-codec:a",
                "pcm_s16le",
                "/out/example.wav",
            ]
        );
    }

    #[test]
    fn image_source_limits_frames() {
        let png = IMAGE_ENTRIES
            .iter()
            .find(|e| e.filename == "example.png")
            .unwrap();
        let args = strings(&png.ffmpeg_args(&IMAGE_SOURCE, Path::new("example.png")));
        assert_eq!(&args[4..7], &["-frames:v", "1", "-y"]);
    }

    #[test]
    fn apng_uses_its_own_source() {
        let apng = IMAGE_ENTRIES
            .iter()
            .find(|e| e.filename == "example.apng")
            .unwrap();
        let args = strings(&apng.ffmpeg_args(&IMAGE_SOURCE, Path::new("example.apng")));
        assert_eq!(args[3], "testsrc=duration=0.1:size=640x480:rate=10");
        assert_eq!(&args[4..6], &["-frames:v", "2"]);
    }

    #[test]
    fn filenames_are_unique_per_category() {
        for entries in [&AUDIO_ENTRIES[..], &VIDEO_ENTRIES[..], &IMAGE_ENTRIES[..]] {
            let names: HashSet<_> = entries.iter().map(|e| e.filename).collect();
            assert_eq!(names.len(), entries.len());
        }
    }

    #[test]
    fn catalogue_sizes() {
        assert_eq!(AUDIO_ENTRIES.len(), 11);
        assert_eq!(VIDEO_ENTRIES.len(), 19);
        assert_eq!(IMAGE_ENTRIES.len(), 11);
    }

    #[test]
    fn optional_codecs_are_flagged() {
        let optional: Vec<_> = AUDIO_ENTRIES
            .iter()
            .chain(IMAGE_ENTRIES.iter())
            .filter(|e| e.optional_codec)
            .map(|e| e.filename)
            .collect();
        assert_eq!(optional, vec!["example.wma", "example.avif"]);
    }
}
