use std::{borrow::Cow, io::Read};

use super::*;
use crate::compose::frame::RawFrame;
use crate::foundation::core::Rgba8;
use crate::foundation::error::GifErrorKind;

// Index 0 is transparent black.
const PALETTE: [u8; 12] = [0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255];
const T: u8 = 0;
const R: u8 = 1;
const G: u8 = 2;

struct Spec {
    rect: (u16, u16, u16, u16),
    indices: Vec<u8>,
    dispose: gif::DisposalMethod,
    delay: u16,
}

fn encode(width: u16, height: u16, frames: &[Spec]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut enc = gif::Encoder::new(&mut buf, width, height, &PALETTE).unwrap();
        for spec in frames {
            let mut frame = gif::Frame::default();
            (frame.left, frame.top, frame.width, frame.height) = spec.rect;
            frame.buffer = Cow::Owned(spec.indices.clone());
            frame.transparent = Some(T);
            frame.dispose = spec.dispose;
            frame.delay = spec.delay;
            enc.write_frame(&frame).unwrap();
        }
    }
    buf
}

fn three_frame_gif() -> Vec<u8> {
    encode(
        2,
        2,
        &[
            Spec {
                rect: (0, 0, 2, 2),
                indices: vec![R; 4],
                dispose: gif::DisposalMethod::Any,
                delay: 10,
            },
            Spec {
                rect: (0, 0, 2, 2),
                indices: vec![T, G, G, G],
                dispose: gif::DisposalMethod::Keep,
                delay: 20,
            },
            Spec {
                rect: (0, 0, 2, 2),
                indices: vec![T; 4],
                dispose: gif::DisposalMethod::Background,
                delay: 30,
            },
        ],
    )
}

#[test]
fn decode_frames_adapts_decoder_output() {
    let bytes = three_frame_gif();
    let decoded = decode_frames(bytes.as_slice(), &LoadOptions::default()).unwrap();
    assert_eq!(decoded.frames.len(), 3);
    assert_eq!(decoded.delays, vec![10, 20, 30]);
    assert_eq!(decoded.frames[1].disposal(), DisposalMethod::DoNotDispose);
    assert_eq!(decoded.frames[1].sample(0, 0), Rgba8::TRANSPARENT);
    assert_eq!(decoded.frames[1].sample(1, 0), Rgba8::opaque(0, 255, 0));
}

#[test]
fn load_bytes_resolves_disposal_scenario() {
    let player = load_bytes(&three_frame_gif(), &LoadOptions::default()).unwrap();
    assert_eq!((player.width(), player.height()), (2, 2));
    assert_eq!(player.frame_count(), 3);

    let red = Rgba8::opaque(255, 0, 0);
    let green = Rgba8::opaque(0, 255, 0);
    let f1 = player.frame(1).unwrap();
    assert_eq!(f1.pixel(0, 0), Some(red));
    assert_eq!(f1.pixel(1, 1), Some(green));
    let f2 = player.frame(2).unwrap();
    assert!(f2.data().chunks_exact(4).all(|px| px[3] == 0));
}

#[test]
fn sub_rectangles_keep_their_offsets() {
    let bytes = encode(
        3,
        3,
        &[
            Spec {
                rect: (0, 0, 3, 3),
                indices: vec![R; 9],
                dispose: gif::DisposalMethod::Keep,
                delay: 5,
            },
            Spec {
                rect: (1, 1, 1, 1),
                indices: vec![G],
                dispose: gif::DisposalMethod::Keep,
                delay: 5,
            },
        ],
    );
    let player = load_bytes(&bytes, &LoadOptions::default()).unwrap();
    let f1 = player.frame(1).unwrap();
    assert_eq!(f1.pixel(1, 1), Some(Rgba8::opaque(0, 255, 0)));
    assert_eq!(f1.pixel(0, 0), Some(Rgba8::opaque(255, 0, 0)));
    assert_eq!(f1.pixel(2, 2), Some(Rgba8::opaque(255, 0, 0)));
}

#[test]
fn max_frames_stops_decoding_early() {
    let opts = LoadOptions {
        max_frames: Some(2),
        ..LoadOptions::default()
    };
    let player = load_bytes(&three_frame_gif(), &opts).unwrap();
    assert_eq!(player.frame_count(), 2);
    assert_eq!(player.metadata().delays, vec![10, 20]);
}

#[test]
fn canvas_limit_rejects_large_animations() {
    let opts = LoadOptions {
        max_canvas_pixels: Some(3),
        ..LoadOptions::default()
    };
    let err = load_bytes(&three_frame_gif(), &opts).unwrap_err();
    assert_eq!(err.kind(), GifErrorKind::InvalidAnimation);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = load_bytes(b"definitely not a gif", &LoadOptions::default()).unwrap_err();
    assert_eq!(err.kind(), GifErrorKind::DecodeFailed);
}

#[test]
fn missing_file_is_source_unavailable() {
    let path = std::env::temp_dir().join("gifplay_missing_file_does_not_exist.gif");
    let err = load_path(&path, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.kind(), GifErrorKind::SourceUnavailable);
    assert!(err.to_string().contains("gifplay_missing_file_does_not_exist"));
}

#[test]
fn invalid_options_fail_before_reading() {
    let opts = LoadOptions {
        max_frames: Some(0),
        ..LoadOptions::default()
    };
    let err = load_bytes(&three_frame_gif(), &opts).unwrap_err();
    assert_eq!(err.kind(), GifErrorKind::Config);
}

#[test]
fn offset_pixel_cannot_inflate_canvas_under_default_options() {
    let bytes = encode(
        1,
        1,
        &[Spec {
            rect: (65534, 65534, 1, 1),
            indices: vec![R],
            dispose: gif::DisposalMethod::Any,
            delay: 10,
        }],
    );
    let err = load_bytes(&bytes, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.kind(), GifErrorKind::InvalidAnimation);
    assert!(err.to_string().contains("65535x65535"));
}

#[test]
fn reserved_disposal_code_decodes_as_none() {
    let mut bytes = three_frame_gif();
    let gce = bytes
        .windows(3)
        .enumerate()
        .filter(|(_, w)| *w == [0x21, 0xF9, 0x04])
        .map(|(i, _)| i)
        .nth(1)
        .unwrap();
    let packed = &mut bytes[gce + 3];
    *packed = (*packed & !0b1_1100) | (5 << 2);

    let decoded = decode_frames(bytes.as_slice(), &LoadOptions::default()).unwrap();
    assert_eq!(decoded.frames[1].disposal(), DisposalMethod::None);
    load_bytes(&bytes, &LoadOptions::default()).unwrap();
}

#[test]
fn frame_errors_name_the_index_once() {
    let err = DecodedFrame::new(0, 0, 2, 2, vec![0; 12], DisposalMethod::None)
        .map_err(|e| at_frame(e, 2))
        .unwrap_err();
    let msg = err.to_string();
    assert_eq!(err.kind(), GifErrorKind::InvalidAnimation);
    assert!(msg.starts_with("invalid animation: frame 2: frame 2x2 expects 16 bytes"));
    assert_eq!(msg.matches("invalid animation:").count(), 1);

    let other = at_frame(GifError::config("x"), 2);
    assert_eq!(other.kind(), GifErrorKind::Config);
}

struct Disconnected;

impl Read for Disconnected {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("connection reset"))
    }
}

#[test]
fn reader_failure_mid_stream_is_source_unavailable() {
    let reader = (&b"GIF89a"[..]).chain(Disconnected);
    let err = load_reader(reader, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.kind(), GifErrorKind::SourceUnavailable);
    assert!(err.to_string().contains("read gif stream"));
}

#[test]
fn truncated_stream_is_decode_failure() {
    let bytes = three_frame_gif();
    let err = load_bytes(&bytes[..bytes.len() / 2], &LoadOptions::default()).unwrap_err();
    assert_eq!(err.kind(), GifErrorKind::DecodeFailed);
}

#[cfg(unix)]
#[test]
fn read_errors_carry_the_path() {
    let dir = std::env::temp_dir().join(format!("gifplay_dir_as_file_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let err = load_path(&dir, &LoadOptions::default()).unwrap_err();
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(err.kind(), GifErrorKind::SourceUnavailable);
    let msg = err.to_string();
    assert!(msg.contains("read gif stream from"));
    assert!(msg.contains("gifplay_dir_as_file_"));
}
