#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications, unused_import_braces)]

//! This crate works on top of `dcmlite-encoding`
//! to decode individual DICOM data elements from a byte stream,
//! including nested sequence items and encapsulated pixel data fragments.
//!
//! The reader is stateful:
//! whether the stream is in implicit or explicit VR form,
//! and in which byte order,
//! is configured at run time by the data set assembler
//! (see the `dcmlite-object` crate),
//! typically with the help of the [`detect`] probe.

pub mod detect;
pub mod read;

pub use detect::{detect_encoding, EncodingHint};
pub use read::ElementReader;
