/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the minpng crates
//!
//! It currently contains
//!
//! - A byte sink abstraction and an endian aware writer on top of it
//! - Colorspace information for 8 bit interleaved images
//! - Encoder options shared by the encoder and the command line front end
//!
pub mod bytestream;
pub mod colorspace;
pub mod options;
