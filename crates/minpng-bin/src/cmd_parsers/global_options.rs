/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use minpng_encoder::{FilterStrategy, TextChunk, TextEncoding, PARAMETERS_KEYWORD};

use crate::cmd_args::FilterOption;
use crate::workflow::CliErrors;

/// Everything the workflow needs, pulled out of the command line
#[derive(Debug, Clone)]
pub struct CmdOptions {
    /// `None` when a test pattern is requested
    pub input:          Option<OsString>,
    pub output:         OsString,
    pub width:          Option<usize>,
    pub height:         Option<usize>,
    pub channels:       usize,
    pub stride:         Option<usize>,
    pub level:          Option<u8>,
    pub filter:         FilterStrategy,
    pub texts:          Vec<TextChunk>,
    pub text_encoding:  TextEncoding,
    pub override_files: bool
}

/// Split a `KEY=VALUE` argument
fn parse_text_entry(entry: &str) -> Result<TextChunk, CliErrors> {
    match entry.split_once('=') {
        Some((keyword, text)) => Ok(TextChunk::new(keyword, text)),
        None => Err(CliErrors::Args(format!(
            "Text entry {entry:?} is not of the form KEY=VALUE"
        )))
    }
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, CliErrors> {
    let output = options
        .get_one::<String>("out")
        .map(OsString::from)
        .ok_or_else(|| CliErrors::Args("No output given".to_string()))?;

    let input = if options.get_flag("pattern") {
        info!("Using generated test pattern as input");
        None
    } else {
        let input = options
            .get_one::<String>("in")
            .ok_or_else(|| CliErrors::Args("No input given".to_string()))?;
        Some(OsString::from(input))
    };

    let mut texts = options
        .get_many::<String>("text")
        .into_iter()
        .flatten()
        .map(|entry| parse_text_entry(entry))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(parameters) = options.get_one::<String>("parameters") {
        texts.push(TextChunk::new(PARAMETERS_KEYWORD, parameters.as_str()));
    }

    let text_encoding = if options.get_flag("utf8-text") {
        info!("Writing text as UTF-8");
        TextEncoding::Utf8
    } else {
        TextEncoding::Latin1
    };

    let filter = options
        .get_one::<FilterOption>("filter")
        .map_or(FilterStrategy::None, |f| f.to_strategy());

    if options.value_source("yes") == Some(ValueSource::CommandLine) {
        info!("Overwriting existing files");
    }

    Ok(CmdOptions {
        input,
        output,
        width: options.get_one::<usize>("width").copied(),
        height: options.get_one::<usize>("height").copied(),
        channels: options.get_one::<usize>("channels").copied().unwrap_or(3),
        stride: options.get_one::<usize>("stride").copied(),
        level: options.get_one::<u8>("level").copied(),
        filter,
        texts,
        text_encoding,
        override_files: options.get_flag("yes")
    })
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_args::create_cmd_args;

    fn parse(args: &[&str]) -> Result<CmdOptions, CliErrors> {
        let matches = create_cmd_args()
            .try_get_matches_from(std::iter::once("minpng").chain(args.iter().copied()))
            .unwrap();
        parse_options(&matches)
    }

    #[test]
    fn test_defaults() {
        let options = parse(&["-i", "in.raw", "-o", "out.png", "--width", "4", "--height", "2"]).unwrap();

        assert_eq!(options.input, Some(OsString::from("in.raw")));
        assert_eq!(options.output, OsString::from("out.png"));
        assert_eq!((options.width, options.height), (Some(4), Some(2)));
        assert_eq!(options.channels, 3);
        assert_eq!(options.stride, None);
        assert_eq!(options.level, None);
        assert_eq!(options.filter, FilterStrategy::None);
        assert_eq!(options.text_encoding, TextEncoding::Latin1);
        assert!(options.texts.is_empty());
        assert!(!options.override_files);
    }

    #[test]
    fn test_text_entries_keep_order() {
        let options = parse(&[
            "--pattern",
            "-o",
            "out.png",
            "--text",
            "source=minpng",
            "--text",
            "Comment=a=b",
            "--parameters",
            "steps: 20"
        ])
        .unwrap();

        assert_eq!(options.input, None);
        assert_eq!(
            options.texts,
            [
                TextChunk::new("source", "minpng"),
                TextChunk::new("Comment", "a=b"),
                TextChunk::new(PARAMETERS_KEYWORD, "steps: 20")
            ]
        );
    }

    #[test]
    fn test_text_without_separator() {
        let result = parse(&["--pattern", "-o", "out.png", "--text", "novalue"]);
        assert!(matches!(result, Err(CliErrors::Args(_))));
    }

    #[test]
    fn test_encoding_flags() {
        let options = parse(&[
            "--pattern",
            "-o",
            "-",
            "--level",
            "9",
            "--filter",
            "adaptive",
            "--utf8-text",
            "--channels",
            "4",
            "-y"
        ])
        .unwrap();

        assert_eq!(options.level, Some(9));
        assert_eq!(options.filter, FilterStrategy::Adaptive);
        assert_eq!(options.text_encoding, TextEncoding::Utf8);
        assert_eq!(options.channels, 4);
        assert!(options.override_files);
    }

    #[test]
    fn test_level_out_of_range() {
        let result = create_cmd_args().try_get_matches_from([
            "minpng", "--pattern", "-o", "out.png", "--level", "12"
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_or_pattern_required() {
        let result = create_cmd_args().try_get_matches_from(["minpng", "-o", "out.png"]);
        assert!(result.is_err());
    }
}
