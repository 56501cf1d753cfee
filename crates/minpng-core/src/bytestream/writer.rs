/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::mem::size_of;

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

/// Encapsulates a simple byte writer with
/// support for endian aware writes
///
/// The writer keeps count of how many bytes went into the
/// sink, which encoders report back to their callers.
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the sink
    ///
    /// # Example
    /// ```
    /// use minpng_core::bytestream::ZWriter;
    /// let mut storage = vec![];
    ///
    /// let writer = ZWriter::new(&mut storage);
    /// assert_eq!(writer.bytes_written(), 0);
    /// ```
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }

    /// Write all of `buf` to the sink or error out
    ///
    /// # Example
    /// ```
    /// use minpng_core::bytestream::ZWriter;
    /// let mut storage = vec![];
    /// let mut writer = ZWriter::new(&mut storage);
    /// writer.write_all(b"IEND").unwrap();
    /// assert_eq!(writer.bytes_written(), 4);
    /// ```
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Write a fixed size array to the sink
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.buffer.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }

    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use minpng_core::bytestream::ZWriter;
    /// let mut storage = vec![];
    /// let stream = ZWriter::new(&mut storage);
    /// assert_eq!(stream.bytes_written(), 0);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Ask the sink to push out anything it buffered
    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
}

macro_rules! write_single_type {
    ($name:tt,$int_type:tt) => {
        impl<T: ZByteWriterTrait> ZWriter<T> {
            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name(&mut self, byte: $int_type) -> Result<(), ZByteIoError> {
                const SIZE: usize = size_of::<$int_type>();
                let bytes: [u8; SIZE] = byte.to_be_bytes();
                self.write_const_bytes(&bytes)
            }
        }
    };
}

// png stores every multi byte integer in network order
write_single_type!(write_u64_be_err, u64);

write_single_type!(write_u32_be_err, u32);

#[cfg(test)]
mod tests {
    use crate::bytestream::{ZByteIoError, ZWriter};

    #[test]
    fn test_endian_writes() {
        let mut sink = vec![];
        let mut writer = ZWriter::new(&mut sink);

        writer.write_u32_be_err(0x0102_0304).unwrap();
        writer.write_const_bytes(&[5, 6]).unwrap();
        writer.write_u64_be_err(0x89504E47_0D0A1A0A).unwrap();
        assert_eq!(writer.bytes_written(), 14);

        assert_eq!(
            sink,
            [1, 2, 3, 4, 5, 6, 0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]
        );
    }

    #[test]
    fn test_short_slice_sink_errors() {
        let mut storage = [0_u8; 3];
        let mut writer = ZWriter::new(&mut storage[..]);

        let err = writer.write_u32_be_err(7).unwrap_err();
        assert!(matches!(err, ZByteIoError::StdIoError(_)));
    }

    #[test]
    fn test_failed_writes_are_not_counted() {
        let mut storage = [0_u8; 2];
        let mut writer = ZWriter::new(&mut storage[..]);

        writer.write_all(&[1]).unwrap();
        assert!(writer.write_all(&[1, 2, 3]).is_err());
        assert_eq!(writer.bytes_written(), 1);
    }
}
