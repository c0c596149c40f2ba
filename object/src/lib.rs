#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications, unused_import_braces)]

//! This crate provides the highest-level abstraction of dcmlite:
//! reading a complete DICOM object
//! from a Part-10 file or an arbitrary byte stream
//! into an in-memory [`Dicom`] value,
//! with the file meta group,
//! the main data set,
//! and any pixel data frames readily accessible.
//!
//! ## Examples
//!
//! Read an object from a file and fetch an attribute:
//!
//! ```no_run
//! use dcmlite_object::open_file;
//! use dcmlite_dictionary_std::tags;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("0001.dcm")?;
//! let patient_name = obj.element(tags::PATIENT_NAME)?.string()?;
//! # Ok(())
//! # }
//! ```

pub mod mem;
pub mod meta;
pub mod pixeldata;

pub use crate::mem::{Dicom, ReadError};
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use crate::pixeldata::PixelData;

pub use dcmlite_encoding::text::SpecificCharacterSet;

use std::io::Read;
use std::path::Path;

/// The UID of the implementation class of dcmlite,
/// as written to synthetic file meta groups.
pub const IMPLEMENTATION_CLASS_UID: &str = "1.2.826.0.1.3680043.10.1455.1";

/// The name of this implementation version,
/// as written to synthetic file meta groups.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMLITE01";

/// Read a DICOM object from a file by path.
#[inline]
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Dicom, ReadError> {
    Dicom::open_file(path)
}

/// Read a DICOM object from an arbitrary byte source.
#[inline]
pub fn from_reader<S: Read>(source: S) -> Result<Dicom, ReadError> {
    Dicom::from_reader(source)
}
