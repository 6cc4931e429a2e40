//! Literal payloads for formats the external tools cannot produce.
//!
//! These are fixed byte sequences, not format-aware writers. The only
//! assembly done here is wrapping a BMP body in a Windows cursor header.

use thiserror::Error;

/// Minimal single-track MIDI file: one middle-C note at 600000 us/quarter.
pub const MIDI: [u8; 41] = [
    0x4D, 0x54, 0x68, 0x64, 0x00, 0x00, 0x00, 0x06, // MThd, header length 6
    0x00, 0x01, 0x00, 0x01, 0x00, 0x60, // format 1, 1 track, 96 ticks/quarter
    0x4D, 0x54, 0x72, 0x6B, 0x00, 0x00, 0x00, 0x0B, // MTrk, declared length 11
    0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, // set tempo
    0x00, 0x90, 0x3C, 0x60, // note on
    0x60, 0x80, 0x3C, 0x00, // note off
    0x00, 0xFF, 0x2F, 0x00, // end of track
];

/// File names that all receive the MIDI payload.
pub const MIDI_FILENAMES: [&str; 4] = ["example.mid", "example.midi", "example.kar", "example.rmi"];

/// Empty WebAssembly module: magic number and version 1.
pub const WASM: [u8; 8] = [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];

/// Single-page PDF showing "Example PDF Document".
///
/// The xref offsets are fixed literals, not recomputed.
pub const PDF: &[u8] = b"%PDF-1.4
1 0 obj
<<
/Type /Catalog
/Pages 2 0 R
>>
endobj
2 0 obj
<<
/Type /Pages
/Kids [3 0 R]
/Count 1
>>
endobj
3 0 obj
<<
/Type /Page
/Parent 2 0 R
/MediaBox [0 0 612 792]
/Contents 4 0 R
/Resources <<
/Font <<
/F1 <<
/Type /Font
/Subtype /Type1
/BaseFont /Helvetica
>>
>>
>>
>>
endobj
4 0 obj
<<
/Length 44
>>
stream
BT
/F1 12 Tf
100 700 Td
(Example PDF Document) Tj
ET
endstream
endobj
xref
0 5
0000000000 65535 f
0000000009 00000 n
0000000058 00000 n
0000000115 00000 n
0000000306 00000 n
trailer
<<
/Size 5
/Root 1 0 R
>>
startxref
400
%%EOF";

/// 640x480 SVG with a gradient, a circle and a caption.
pub const SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="640" height="480" viewBox="0 0 640 480">
  <defs>
    <linearGradient id="grad1" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:rgb(255,0,0);stop-opacity:1" />
      <stop offset="100%" style="stop-color:rgb(0,0,255);stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect width="640" height="480" fill="url(#grad1)"/>
  <circle cx="320" cy="240" r="100" fill="white" opacity="0.8"/>
  <text x="320" y="250" font-family="Arial" font-size="24" fill="black" text-anchor="middle">Example SVG</text>
</svg>"#;

/// Sentence repeated to build the compression sample.
pub const SAMPLE_SENTENCE: &str = "This is a sample text file for compression testing. ";

/// Number of sentence repetitions in the compression sample.
pub const SAMPLE_REPEAT: usize = 50;

/// Number of 0..=255 runs in `example.bin`.
pub const BINARY_REPEAT: usize = 10;

/// Size of the dmg/iso/img placeholders.
pub const PLACEHOLDER_LEN: usize = 1024;

/// Extensions that receive the truncated binary pattern.
pub const PLACEHOLDER_EXTENSIONS: [&str; 3] = ["dmg", "iso", "img"];

/// Text compressed into the zip/gz/tgz fixtures.
pub fn sample_text() -> String {
    SAMPLE_SENTENCE.repeat(SAMPLE_REPEAT)
}

/// Bytes 0..=255 repeated `BINARY_REPEAT` times (2560 bytes).
pub fn binary_pattern() -> Vec<u8> {
    (0..=255u8)
        .cycle()
        .take(256 * BINARY_REPEAT)
        .collect()
}

/// Leading `PLACEHOLDER_LEN` bytes of the binary pattern.
pub fn placeholder_bytes() -> Vec<u8> {
    let mut bytes = binary_pattern();
    bytes.truncate(PLACEHOLDER_LEN);
    bytes
}

/// Length of the BMP file header dropped when embedding in a cursor.
pub const BMP_FILE_HEADER_LEN: usize = 14;

/// Cursor file header: reserved, type 2 (cursor), one image.
pub const CURSOR_HEADER: [u8; 6] = [0x00, 0x00, 0x02, 0x00, 0x01, 0x00];

/// Directory entry prefix: 32x32, no palette, hotspot (0, 0).
pub const CURSOR_ENTRY_PREFIX: [u8; 8] = [0x20, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Offset of the image data: 6 header bytes + 16 entry bytes.
pub const CURSOR_IMAGE_OFFSET: u32 = 22;

/// Errors assembling a payload from tool output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("bitmap is {0} bytes, shorter than its file header")]
    BitmapTooShort(usize),

    #[error("bitmap does not start with the BM signature")]
    NotABitmap,
}

/// Wrap a BMP file in a single-image cursor header.
///
/// The BMP's 14-byte file header is dropped; the DIB header and pixel data
/// become the cursor image.
pub fn build_cursor(bmp: &[u8]) -> Result<Vec<u8>, PayloadError> {
    if bmp.len() < BMP_FILE_HEADER_LEN {
        return Err(PayloadError::BitmapTooShort(bmp.len()));
    }
    if &bmp[..2] != b"BM" {
        return Err(PayloadError::NotABitmap);
    }

    let body = &bmp[BMP_FILE_HEADER_LEN..];
    let mut cursor = Vec::with_capacity(CURSOR_IMAGE_OFFSET as usize + body.len());
    cursor.extend_from_slice(&CURSOR_HEADER);
    cursor.extend_from_slice(&CURSOR_ENTRY_PREFIX);
    cursor.extend_from_slice(&(body.len() as u32).to_le_bytes());
    cursor.extend_from_slice(&CURSOR_IMAGE_OFFSET.to_le_bytes());
    cursor.extend_from_slice(body);
    Ok(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midi_has_header_and_track() {
        assert_eq!(&MIDI[..4], b"MThd");
        assert_eq!(&MIDI[14..18], b"MTrk");
        assert_eq!(&MIDI[MIDI.len() - 3..], &[0xFF, 0x2F, 0x00]);
    }

    #[test]
    fn wasm_is_magic_and_version() {
        assert_eq!(WASM, *b"\0asm\x01\0\0\0");
    }

    #[test]
    fn midi_bytes_are_pinned() {
        let expected: [u8; 41] = [
            0x4D, 0x54, 0x68, 0x64, 0x00, 0x00, 0x00, 0x06, 0x00, 0x01, 0x00, 0x01, 0x00, 0x60,
            0x4D, 0x54, 0x72, 0x6B, 0x00, 0x00, 0x00, 0x0B, 0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1,
            0x20, 0x00, 0x90, 0x3C, 0x60, 0x60, 0x80, 0x3C, 0x00, 0x00, 0xFF, 0x2F, 0x00,
        ];
        assert_eq!(MIDI, expected);
    }

    #[test]
    fn wasm_bytes_are_pinned() {
        assert_eq!(WASM, [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn pdf_bytes_are_pinned() {
        // FNV-1a over the whole literal.
        let hash = PDF.iter().fold(0x811c_9dc5_u32, |h, &b| {
            (h ^ u32::from(b)).wrapping_mul(0x0100_0193)
        });
        assert_eq!(PDF.len(), 549);
        assert_eq!(PDF.iter().map(|&b| u32::from(b)).sum::<u32>(), 36931);
        assert_eq!(PDF.iter().filter(|&&b| b == b'\n').count(), 57);
        assert_eq!(hash, 0x479a_1cde);
    }

    #[test]
    fn pdf_is_framed() {
        assert!(PDF.starts_with(b"%PDF-1.4\n"));
        assert!(PDF.ends_with(b"%%EOF"));
        let text = std::str::from_utf8(PDF).unwrap();
        assert!(text.contains("(Example PDF Document) Tj"));
    }

    #[test]
    fn binary_pattern_cycles() {
        let bytes = binary_pattern();
        assert_eq!(bytes.len(), 2560);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[255], 255);
        assert_eq!(bytes[256], 0);
        assert_eq!(bytes[2559], 255);

        let placeholder = placeholder_bytes();
        assert_eq!(placeholder.len(), 1024);
        assert_eq!(placeholder[..], bytes[..1024]);
    }

    #[test]
    fn sample_text_repeats_sentence() {
        let text = sample_text();
        assert_eq!(text.len(), SAMPLE_SENTENCE.len() * 50);
        assert!(text.starts_with("This is a sample text file"));
    }

    #[test]
    fn cursor_wraps_bitmap_body() {
        let mut bmp = b"BM".to_vec();
        bmp.extend_from_slice(&[0xAA; 12]);
        bmp.extend_from_slice(&[1, 2, 3, 4, 5]);

        let cursor = build_cursor(&bmp).unwrap();

        assert_eq!(
            cursor,
            vec![
                0x00, 0x00, 0x02, 0x00, 0x01, 0x00, // header
                0x20, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 32x32, hotspot 0,0
                0x05, 0x00, 0x00, 0x00, // body size
                0x16, 0x00, 0x00, 0x00, // offset 22
                1, 2, 3, 4, 5,
            ]
        );
    }

    #[test]
    fn cursor_rejects_short_or_foreign_input() {
        assert_eq!(build_cursor(b"BM12"), Err(PayloadError::BitmapTooShort(4)));
        assert_eq!(build_cursor(&[0u8; 20]), Err(PayloadError::NotABitmap));
    }
}
