/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The sink trait used by minpng encoders

use std::io::Write;

use crate::bytestream::ZByteIoError;

/// The writer trait implemented for encoder sinks
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images.
///
/// It is implemented for every [`std::io::Write`], so files, sockets,
/// `Vec<u8>` and `&mut [u8]` all work out of the box.
/// The encoder only writes and flushes, closing the sink is left to the caller.
pub trait ZByteWriterTrait {
    /// Write all bytes to the buffer or return an error if something occurred
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError>;
    /// Write a fixed number of bytes and error out if we can't write the bytes
    ///
    /// This is provided to allow for optimized writes where possible. (when the compiler can const fold them)
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError>;
    /// Ensure bytes are written to the sink.
    ///
    /// After this, the encoder should be able to guarantee that everything it
    /// wrote has been handed over to the underlying device
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError>;
}

impl<T: Write> ZByteWriterTrait for T {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.write_all(buf).map_err(ZByteIoError::StdIoError)
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.write_all_bytes(buf)
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        self.flush().map_err(ZByteIoError::StdIoError)
    }
}
