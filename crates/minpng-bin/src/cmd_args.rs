/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use minpng_encoder::FilterStrategy;

pub mod help_strings;

/// Scanline filter choices exposed on the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum FilterOption {
    None,
    Sub,
    Up,
    Average,
    Paeth,
    Adaptive
}

impl FilterOption {
    pub const fn to_strategy(self) -> FilterStrategy {
        match self {
            Self::None => FilterStrategy::None,
            Self::Sub => FilterStrategy::Sub,
            Self::Up => FilterStrategy::Up,
            Self::Average => FilterStrategy::Average,
            Self::Paeth => FilterStrategy::Paeth,
            Self::Adaptive => FilterStrategy::Adaptive
        }
    }
}

impl ValueEnum for FilterOption {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::None,
            Self::Sub,
            Self::Up,
            Self::Average,
            Self::Paeth,
            Self::Adaptive
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::None => PossibleValue::new("none"),
            Self::Sub => PossibleValue::new("sub"),
            Self::Up => PossibleValue::new("up"),
            Self::Average => PossibleValue::new("average"),
            Self::Paeth => PossibleValue::new("paeth"),
            Self::Adaptive => PossibleValue::new("adaptive")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("minpng")
        .about("Write raw 8 bit pixels as a png image")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Raw interleaved pixel file to read, - for stdin")
            .required_unless_present("pattern"))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Png file to write, - for stdout")
            .required(true))
        .arg(Arg::new("pattern")
            .long("pattern")
            .action(ArgAction::SetTrue)
            .conflicts_with("in")
            .help("Write a generated gradient test image instead of reading input"))
        .arg(Arg::new("yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite the output file if it exists"))
        .arg(Arg::new("width")
            .long("width")
            .help_heading("IMAGE")
            .help("Image width in pixels")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("height")
            .long("height")
            .help_heading("IMAGE")
            .help("Image height in pixels")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("channels")
            .long("channels")
            .help_heading("IMAGE")
            .help("Samples per pixel: 1 gray, 2 gray+alpha, 3 rgb, 4 rgba")
            .default_value("3")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("stride")
            .long("stride")
            .help_heading("IMAGE")
            .help("Bytes between the starts of two rows in the input")
            .long_help(help_strings::STRIDE_HELP)
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("level")
            .long("level")
            .help_heading("ENCODING")
            .help("Compression level, 0 to 9")
            .value_parser(value_parser!(u8).range(0..=9)))
        .arg(Arg::new("filter")
            .long("filter")
            .help_heading("ENCODING")
            .help("Scanline filter")
            .long_help(help_strings::FILTER_HELP)
            .default_value("none")
            .value_parser(value_parser!(FilterOption)))
        .arg(Arg::new("text")
            .long("text")
            .help_heading("METADATA")
            .value_name("KEY=VALUE")
            .action(ArgAction::Append)
            .help("Add a text entry, can be repeated"))
        .arg(Arg::new("parameters")
            .long("parameters")
            .help_heading("METADATA")
            .value_name("TEXT")
            .help("Store generation parameters under the `parameters` keyword"))
        .arg(Arg::new("utf8-text")
            .long("utf8-text")
            .help_heading("METADATA")
            .action(ArgAction::SetTrue)
            .help("Write text as UTF-8 instead of Latin-1")
            .long_help(help_strings::UTF8_TEXT_HELP))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the encoding options"))
}
