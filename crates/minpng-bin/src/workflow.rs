/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fmt::{Debug, Formatter};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use log::{debug, info, trace, warn};
use minpng_core::colorspace::ColorSpace;
use minpng_core::options::EncoderOptions;
use minpng_encoder::{PngEncodeErrors, PngEncoder};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::pattern::{gradient, PATTERN_HEIGHT, PATTERN_SOURCE, PATTERN_WIDTH};

/// Stand in path for standard input and output
const STD_STREAM: &str = "-";

pub enum CliErrors {
    Args(String),
    Io(std::io::Error),
    Encode(PngEncodeErrors)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Args(reason) => writeln!(f, "{reason}"),
            Self::Io(err) => writeln!(f, "I/O error: {err}"),
            Self::Encode(err) => writeln!(f, "{err:?}")
        }
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PngEncodeErrors> for CliErrors {
    fn from(value: PngEncodeErrors) -> Self {
        Self::Encode(value)
    }
}

/// Pixels plus the dimensions they should be encoded with
struct SourceImage {
    pixels: Vec<u8>,
    width:  usize,
    height: usize
}

fn read_input(path: &OsStr) -> Result<Vec<u8>, CliErrors> {
    let mut contents = vec![];

    if path == STD_STREAM {
        debug!("Reading pixels from stdin");
        std::io::stdin().lock().read_to_end(&mut contents)?;
    } else {
        debug!("Reading pixels from {:?}", path);
        File::open(path)?.read_to_end(&mut contents)?;
    }
    info!("Read {} bytes of pixel data", contents.len());
    Ok(contents)
}

fn load_source(options: &CmdOptions) -> Result<SourceImage, CliErrors> {
    match &options.input {
        Some(path) => {
            let (width, height) = match (options.width, options.height) {
                (Some(w), Some(h)) => (w, h),
                _ => {
                    return Err(CliErrors::Args(
                        "Raw input needs both --width and --height".to_string()
                    ))
                }
            };
            Ok(SourceImage {
                pixels: read_input(path)?,
                width,
                height
            })
        }
        None => {
            let width = options.width.unwrap_or(PATTERN_WIDTH);
            let height = options.height.unwrap_or(PATTERN_HEIGHT);

            if options.stride.is_some() {
                warn!("Ignoring --stride, the test pattern has packed rows");
            }
            Ok(SourceImage {
                pixels: gradient(width, height, options.channels)?,
                width,
                height
            })
        }
    }
}

fn build_encoder<'a>(
    source: &'a SourceImage, colorspace: ColorSpace, options: &CmdOptions
) -> PngEncoder<'a> {
    // the generated pattern never has padded rows
    let stride = options.input.as_ref().and(options.stride);

    let encoder_options = EncoderOptions::new(source.width, source.height, colorspace)
        .set_stride(stride)
        .set_effort(options.level);

    let mut encoder = PngEncoder::new(&source.pixels, encoder_options);
    encoder.set_filter_strategy(options.filter);
    encoder.set_text_encoding(options.text_encoding);

    if options.input.is_none() {
        encoder.add_text(PATTERN_SOURCE.0, PATTERN_SOURCE.1);
    }
    for chunk in &options.texts {
        trace!("Adding text entry {:?}", chunk.keyword);
        encoder.add_text(chunk.keyword.as_str(), chunk.text.as_str());
    }
    encoder
}

fn write_output(encoder: &PngEncoder, options: &CmdOptions) -> Result<usize, CliErrors> {
    let output = options.output.as_os_str();

    if output == STD_STREAM {
        debug!("Writing png to stdout");
        let stdout = std::io::stdout();
        return Ok(encoder.encode(BufWriter::new(stdout.lock()))?);
    }

    // encode first, a rejected image must not leave an empty file behind
    let mut png = vec![];
    let written = encoder.encode(&mut png)?;

    let path = Path::new(output);
    debug!("Saving image to {:?}", path);

    // without -y, creating the file and checking it is new happen in one step
    let file = if options.override_files {
        File::create(path)?
    } else {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|err| match err.kind() {
                ErrorKind::AlreadyExists => {
                    CliErrors::Args(format!("{path:?} already exists, pass -y to overwrite it"))
                }
                _ => CliErrors::Io(err)
            })?
    };
    let mut writer = BufWriter::new(file);
    writer.write_all(&png)?;
    writer.flush()?;

    Ok(written)
}

pub fn create_and_exec_workflow_from_cmd(options: &CmdOptions) -> Result<(), CliErrors> {
    // checked up front, the pattern generator relies on it
    let colorspace = ColorSpace::from_num_components(options.channels)
        .ok_or(PngEncodeErrors::InvalidChannelCount(options.channels))?;

    let source = load_source(options)?;
    let encoder = build_encoder(&source, colorspace, options);

    let written = write_output(&encoder, options)?;

    info!(
        "Wrote {}x{} image, {} bytes",
        source.width, source.height, written
    );
    Ok(())
}
