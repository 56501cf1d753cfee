/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream writer
//! with endian aware writes and a counted position.
//!
//! Encoders never talk to files or sockets directly, they
//! write through [`ZWriter`], which wraps anything implementing
//! [`ZByteWriterTrait`].

pub use traits::ZByteWriterTrait;
pub use writer::ZWriter;

mod traits;
mod writer;

use core::fmt::Formatter;

/// Errors raised by a byte sink
pub enum ZByteIoError {
    /// The underlying `std::io` writer failed
    StdIoError(std::io::Error)
}

impl core::fmt::Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
        }
    }
}

impl core::fmt::Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ZByteIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ZByteIoError::StdIoError(err) => Some(err)
        }
    }
}

impl From<std::io::Error> for ZByteIoError {
    fn from(value: std::io::Error) -> Self {
        ZByteIoError::StdIoError(value)
    }
}
