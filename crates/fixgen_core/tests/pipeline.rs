//! End-to-end runs against a stub transcoder.
//!
//! The stub writes a small `BM...` file to its last argument, which is
//! enough for every transcoded output and for the cursor assembly. Archives
//! use the native backend so no zip/gzip/tar install is needed.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tempfile::TempDir;

use fixgen_core::catalogue::{Category, AUDIO_ENTRIES, IMAGE_ENTRIES, VIDEO_ENTRIES};
use fixgen_core::config::{ArchiveBackendKind, PathSettings, Settings};
use fixgen_core::logging::{init_test_tracing, LogConfig, RunLogger};
use fixgen_core::payloads::{self, MIDI_FILENAMES, PLACEHOLDER_EXTENSIONS};
use fixgen_core::pipeline::{run_with_tools, RunSummary};
use fixgen_core::tools::{Tool, ToolSet};

const STUB_FFMPEG: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "ffmpeg version stub"
    exit 0
fi
for last; do :; done
printf 'BM%062d' 0 > "$last"
"#;

/// Same stub, but without a WMA encoder.
const STUB_FFMPEG_NO_WMA: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "ffmpeg version stub"
    exit 0
fi
case " $* " in
    *" wmav2 "*) echo "Unknown encoder 'wmav2'" >&2; exit 1 ;;
esac
for last; do :; done
printf 'BM%062d' 0 > "$last"
"#;

struct Fixture {
    root: TempDir,
    settings: Settings,
    stub: PathBuf,
}

impl Fixture {
    fn new(script: &str) -> Self {
        init_test_tracing();
        let root = tempfile::tempdir().unwrap();
        let stub = root.path().join("ffmpeg-stub");
        fs::write(&stub, script).unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let mut settings = Settings::default();
        settings.paths = PathSettings {
            project_root: root.path().join("project").display().to_string(),
            ..Default::default()
        };
        settings.generation.archive_backend = ArchiveBackendKind::Native;

        Self {
            root,
            settings,
            stub,
        }
    }

    fn tools(&self) -> ToolSet {
        ToolSet::from_paths([(Tool::Ffmpeg, Some(self.stub.clone()))])
    }

    fn dir(&self, name: &str) -> PathBuf {
        self.root.path().join("project").join(name)
    }

    fn run(&self, tools: &ToolSet) -> (RunSummary, Vec<String>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let logger = RunLogger::new(
            LogConfig::default(),
            Some(Box::new(move |line: &str| sink.lock().push(line.to_string()))),
        );
        let summary = run_with_tools(&self.settings, tools, &logger);
        let lines = lines.lock().clone();
        (summary, lines)
    }
}

fn expected_outputs() -> Vec<(&'static str, String)> {
    let mut files = Vec::new();
    for entry in AUDIO_ENTRIES {
        files.push(("audio", entry.filename.to_string()));
    }
    for name in MIDI_FILENAMES {
        files.push(("audio", name.to_string()));
    }
    for entry in VIDEO_ENTRIES {
        files.push(("video", entry.filename.to_string()));
    }
    for entry in IMAGE_ENTRIES {
        files.push(("images", entry.filename.to_string()));
    }
    for name in ["example.cur", "example.svg", "example.svgz"] {
        files.push(("images", name.to_string()));
    }
    for name in [
        "example.zip",
        "example.gz",
        "example.tgz",
        "example.bin",
        "example.pdf",
        "example.wasm",
    ] {
        files.push(("other", name.to_string()));
    }
    for ext in PLACEHOLDER_EXTENSIONS {
        files.push(("other", format!("example.{ext}")));
    }
    files
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn every_listed_file_is_generated() {
    let fixture = Fixture::new(STUB_FFMPEG);
    let (summary, lines) = fixture.run(&fixture.tools());

    for (dir, name) in expected_outputs() {
        let path = fixture.dir(dir).join(&name);
        let len = fs::metadata(&path)
            .unwrap_or_else(|_| panic!("{} missing", path.display()))
            .len();
        assert!(len > 0, "{} is empty", path.display());
    }

    assert!(!summary.has_failures(), "{:?}", summary.summary_lines());
    assert_eq!(summary.generated_count(), expected_outputs().len());
    assert!(lines.contains(&"Generated example.wav".to_string()));
    assert!(lines.contains(&"Generating other binary files...".to_string()));
}

#[test]
fn scratch_files_do_not_survive() {
    let fixture = Fixture::new(STUB_FFMPEG);
    fixture.run(&fixture.tools());

    assert!(!fixture.dir("other").join("sample.txt").exists());
    assert!(!fixture.dir("images").join("example_cur_temp.bmp").exists());
}

#[test]
fn literals_match_exactly() {
    let fixture = Fixture::new(STUB_FFMPEG);
    fixture.run(&fixture.tools());

    let audio = fixture.dir("audio");
    for name in MIDI_FILENAMES {
        assert_eq!(fs::read(audio.join(name)).unwrap(), payloads::MIDI);
    }
    let other = fixture.dir("other");
    assert_eq!(fs::read(other.join("example.wasm")).unwrap(), payloads::WASM);
    assert_eq!(fs::read(other.join("example.pdf")).unwrap(), payloads::PDF);
    assert_eq!(fs::read(other.join("example.bin")).unwrap(), payloads::binary_pattern());
    assert_eq!(
        fs::read_to_string(fixture.dir("images").join("example.svg")).unwrap(),
        payloads::SVG
    );

    // The stub bitmap is 64 bytes, so the cursor image is 50.
    let cursor = fs::read(fixture.dir("images").join("example.cur")).unwrap();
    assert_eq!(cursor.len(), 22 + 50);
    assert_eq!(
        &cursor[..22],
        &[
            0x00, 0x00, 0x02, 0x00, 0x01, 0x00, 0x20, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x32, 0x00, 0x00, 0x00, 0x16, 0x00, 0x00, 0x00,
        ]
    );
}

#[test]
fn missing_transcoder_skips_media_only() {
    let fixture = Fixture::new(STUB_FFMPEG);
    let (summary, lines) = fixture.run(&ToolSet::default());

    for category in [Category::Audio, Category::Video, Category::Images] {
        let report = summary.report(category).unwrap();
        assert_eq!(report.skipped.as_deref(), Some("ffmpeg not found"));
        assert!(report.generated.is_empty());
    }
    assert!(lines.contains(&"Warning: ffmpeg not found. Skipping audio file generation.".to_string()));
    assert!(lines.contains(&"Warning: ffmpeg not found. Skipping image file generation.".to_string()));

    assert_eq!(summary.report(Category::Compressed).unwrap().generated.len(), 3);
    assert_eq!(summary.report(Category::Other).unwrap().generated.len(), 6);
    assert!(!fixture.dir("audio").join("example.mid").exists());
    assert!(!summary.has_failures());
}

#[test]
fn layout_exists_without_any_tools() {
    let fixture = Fixture::new(STUB_FFMPEG);
    fixture.run(&ToolSet::default());

    for name in ["audio", "video", "images", "other"] {
        assert!(fixture.dir(name).is_dir(), "{name}/ not created");
    }
    assert!(listing(&fixture.dir("audio")).is_empty());
    assert!(listing(&fixture.dir("images")).is_empty());
}

#[test]
fn second_run_overwrites_in_place() {
    let fixture = Fixture::new(STUB_FFMPEG);
    let tools = fixture.tools();

    fixture.run(&tools);
    let first: Vec<_> = ["audio", "video", "images", "other"]
        .iter()
        .map(|d| listing(&fixture.dir(d)))
        .collect();

    let (summary, _) = fixture.run(&tools);
    let second: Vec<_> = ["audio", "video", "images", "other"]
        .iter()
        .map(|d| listing(&fixture.dir(d)))
        .collect();

    assert_eq!(first, second);
    assert!(!summary.has_failures());
}

#[test]
fn failing_codec_leaves_file_absent() {
    let fixture = Fixture::new(STUB_FFMPEG_NO_WMA);
    let (summary, lines) = fixture.run(&fixture.tools());

    assert!(!fixture.dir("audio").join("example.wma").exists());
    assert!(fixture.dir("audio").join("example.mp3").exists());
    assert!(lines
        .contains(&"Warning: Could not generate example.wma (codec may not be available)".to_string()));

    let audio = summary.report(Category::Audio).unwrap();
    assert_eq!(audio.failed.len(), 1);
    assert!(audio.failed[0].reason.contains("Unknown encoder 'wmav2'"));
    assert!(summary.has_failures());
}

#[test]
fn disabled_categories_write_nothing() {
    let mut fixture = Fixture::new(STUB_FFMPEG);
    fixture.settings.generation.video = false;
    fixture.settings.generation.compressed = false;

    let (summary, _) = fixture.run(&fixture.tools());

    assert!(listing(&fixture.dir("video")).is_empty());
    assert!(!fixture.dir("other").join("example.zip").exists());
    assert!(fixture.dir("other").join("example.bin").exists());
    assert_eq!(
        summary.report(Category::Video).unwrap().skipped.as_deref(),
        Some("disabled in configuration")
    );
}
