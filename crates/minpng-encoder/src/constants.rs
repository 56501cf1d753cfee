/// The eight bytes every png stream starts with
pub const PNG_SIGNATURE: u64 = 0x89504E47_0D0A1A0A;

/// Only 8 bit samples are produced
pub const BIT_DEPTH: u8 = 8;

/// PNG limits chunk lengths and image dimensions to 2^31 - 1
pub const PNG_MAX_U31: usize = (1 << 31) - 1;

/// Length of the IHDR payload
pub const IHDR_LENGTH: usize = 13;
