#![crate_type = "lib"]
#![deny(trivial_casts, trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(missing_debug_implementations, unused_qualifications, unused_import_braces)]

//! This is the core library of dcmlite,
//! containing the data structures shared by every other crate
//! in the workspace:
//! the DICOM attribute tag, value representation, and length types,
//! the in-memory model of data elements, items, and data sets,
//! the attribute and UID dictionary traits,
//! and typed access to data element values.
//!
//! Decoding streams into these structures
//! is the responsibility of the `dcmlite-parser`
//! and `dcmlite-object` crates.

pub mod dataset;
pub mod dictionary;
pub mod header;
pub mod value;

pub use dataset::Dataset;
pub use dictionary::{AttributeRecord, DataDictionary};
pub use header::{DataElement, ElementValue, Item, Length, Tag, VR};
pub use value::{CastValueError, C};

pub use byteordered::Endianness;
