#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications, unused_import_braces)]

//! This crate contains the low-level decoding primitives of dcmlite:
//! a buffered, peekable byte source with run-time configurable byte order,
//! and the specific character set registry
//! used to translate legacy text repertoires to UTF-8.

pub mod source;
pub mod text;

pub use source::ByteSource;
pub use text::{SpecificCharacterSet, TextCodec};

pub use byteordered::Endianness;
