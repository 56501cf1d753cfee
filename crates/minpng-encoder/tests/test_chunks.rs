/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Check the raw chunk layout of encoded streams

use std::io::Read;

use flate2::read::ZlibDecoder;
use minpng_encoder::minpng_core::colorspace::ColorSpace;
use minpng_encoder::minpng_core::options::EncoderOptions;
use minpng_encoder::{encode_image, PngEncoder, TextEncoding, PARAMETERS_KEYWORD};

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

struct RawChunk {
    name:         [u8; 4],
    data:         Vec<u8>,
    declared_len: u32,
    declared_crc: u32
}

/// Split a stream into chunks, without interpreting them
fn split_chunks(stream: &[u8]) -> Vec<RawChunk> {
    assert_eq!(&stream[..8], &SIGNATURE);

    let mut chunks = vec![];
    let mut position = 8;

    while position < stream.len() {
        let declared_len = u32::from_be_bytes(stream[position..position + 4].try_into().unwrap());
        let name: [u8; 4] = stream[position + 4..position + 8].try_into().unwrap();
        let data_end = position + 8 + declared_len as usize;
        let data = stream[position + 8..data_end].to_vec();
        let declared_crc = u32::from_be_bytes(stream[data_end..data_end + 4].try_into().unwrap());

        chunks.push(RawChunk {
            name,
            data,
            declared_len,
            declared_crc
        });
        position = data_end + 4;
    }
    assert_eq!(position, stream.len(), "stream has trailing garbage");
    chunks
}

fn names(chunks: &[RawChunk]) -> Vec<&[u8]> {
    chunks.iter().map(|c| &c.name[..]).collect()
}

fn encode_with_texts(texts: &[(&str, &str)]) -> Vec<u8> {
    let pixels: Vec<u8> = (0..40 * 20 * 3).map(|x| (x % 256) as u8).collect();
    let mut encoder = PngEncoder::new(&pixels, EncoderOptions::new(40, 20, ColorSpace::RGB));
    for (keyword, text) in texts {
        encoder.add_text(*keyword, *text);
    }
    let mut sink = vec![];
    encoder.encode(&mut sink).unwrap();
    sink
}

#[test]
fn test_lengths_and_crcs() {
    let stream = encode_with_texts(&[("source", "test"), ("Title", "checks")]);

    for chunk in split_chunks(&stream) {
        assert_eq!(chunk.declared_len as usize, chunk.data.len());

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&chunk.name);
        hasher.update(&chunk.data);
        assert_eq!(
            chunk.declared_crc,
            hasher.finalize(),
            "bad crc on {:?}",
            String::from_utf8_lossy(&chunk.name)
        );
    }
}

#[test]
fn test_chunk_order_without_text() {
    let stream = encode_with_texts(&[]);
    let chunks = split_chunks(&stream);

    assert_eq!(names(&chunks), [b"IHDR", b"IDAT", b"IEND"]);
}

#[test]
fn test_stream_ends_with_iend() {
    let mut sink = vec![];
    encode_image(&mut sink, &[0; 6], 2, 1, 3).unwrap();

    assert_eq!(
        &sink[sink.len() - 12..],
        &[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
    );
}

#[test]
fn test_single_text_entry_follows_ihdr() {
    let stream = encode_with_texts(&[("source", "test")]);
    let chunks = split_chunks(&stream);

    assert_eq!(names(&chunks), [b"IHDR", b"tEXt", b"IDAT", b"IEND"]);
    assert_eq!(chunks[1].data, b"source\0test");
    assert_eq!(chunks[1].declared_len, 11);
}

#[test]
fn test_text_entries_keep_insertion_order() {
    let entries = [
        ("zeta", "1"),
        (PARAMETERS_KEYWORD, "steps: 20, seed: 42"),
        ("alpha", "3"),
        ("zeta", "again")
    ];
    let stream = encode_with_texts(&entries);
    let chunks = split_chunks(&stream);

    let idat_index = chunks.iter().position(|c| &c.name == b"IDAT").unwrap();
    let texts: Vec<(usize, &RawChunk)> = chunks
        .iter()
        .enumerate()
        .filter(|(_, c)| &c.name == b"tEXt")
        .collect();

    assert_eq!(texts.len(), entries.len());

    for ((index, chunk), (keyword, text)) in texts.iter().zip(entries) {
        assert!(*index < idat_index);
        assert_eq!(chunk.data, [keyword.as_bytes(), &b"\0"[..], text.as_bytes()].concat());
    }
}

#[test]
fn test_utf8_text_is_written_verbatim() {
    let pixels = [0_u8; 4];
    let mut encoder = PngEncoder::new(&pixels, EncoderOptions::new(2, 2, ColorSpace::Luma));
    encoder.set_text_encoding(TextEncoding::Utf8);
    encoder.add_text(PARAMETERS_KEYWORD, "ein Hund, 犬");

    let mut sink = vec![];
    encoder.encode(&mut sink).unwrap();

    let chunks = split_chunks(&sink);
    assert_eq!(chunks[1].data, "parameters\0ein Hund, 犬".as_bytes());
}

#[test]
fn test_idat_holds_unfiltered_scanlines() {
    let (width, height) = (3, 2);
    let pixels = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18];
    let mut sink = vec![];
    encode_image(&mut sink, &pixels, width, height, 3).unwrap();

    let chunks = split_chunks(&sink);
    let idat: Vec<&RawChunk> = chunks.iter().filter(|c| &c.name == b"IDAT").collect();
    assert_eq!(idat.len(), 1);

    let mut inflated = vec![];
    ZlibDecoder::new(&idat[0].data[..])
        .read_to_end(&mut inflated)
        .unwrap();

    assert_eq!(inflated.len(), height * (1 + width * 3));
    assert_eq!(
        inflated,
        [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 10, 11, 12, 13, 14, 15, 16, 17, 18]
    );
}

#[test]
fn test_color_type_per_channel_count() {
    for (channels, color_type) in [(1, 0), (2, 4), (3, 2), (4, 6)] {
        let pixels = vec![0; 2 * 2 * channels];
        let mut sink = vec![];
        encode_image(&mut sink, &pixels, 2, 2, channels).unwrap();

        let chunks = split_chunks(&sink);
        assert_eq!(&chunks[0].name, b"IHDR");
        assert_eq!(chunks[0].data.len(), 13);
        // bit depth, color type, compression, filter, interlace
        assert_eq!(&chunks[0].data[8..], &[8, color_type, 0, 0, 0]);
    }
}
