//! This crate implements the standard DICOM dictionaries used by the
//! dcmlite decoder.
//!
//! ## Run-time dictionaries
//!
//! - [`data_element`]: attribute records for the DICOM tags known to the
//!   decoder, compiled offline from the standard's data dictionary and
//!   embedded as a static table. Looking up a tag which is not in the
//!   table yields a synthesized placeholder record (see
//!   [`DataDictionary::record_for`][1]).
//! - [`uid`]: registered unique identifiers, such as transfer syntaxes
//!   and SOP classes, looked up by UID string or by keyword.
//!
//! Each dictionary is provided as a singleton behind a unit type
//! for efficiency and ease of use.
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for well-known DICOM unique identifiers
//!
//! [1]: dcmlite_core::dictionary::DataDictionary::record_for

pub mod data_element;
pub mod tags;
pub mod uid;
pub mod uids;

mod entries;

pub use data_element::StandardDataDictionary;
pub use uid::StandardUidDictionary;

#[cfg(test)]
mod tests {
    use dcmlite_core::Tag;

    /// tests for just a few attributes to make sure that the tag constants
    /// were well installed into the crate
    #[test]
    fn tags_constants_available() {
        use crate::tags::*;
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(SPECIFIC_CHARACTER_SET, Tag(0x0008, 0x0005));
        assert_eq!(SEQUENCE_DELIMITATION_ITEM, Tag(0xFFFE, 0xE0DD));
    }

    /// tests for the presence of a few UID constants
    #[test]
    fn uids_constants_available() {
        use crate::uids::*;
        assert_eq!(IMPLICIT_VR_LITTLE_ENDIAN, "1.2.840.10008.1.2");
        assert_eq!(EXPLICIT_VR_LITTLE_ENDIAN, "1.2.840.10008.1.2.1");
        assert_eq!(VERIFICATION, "1.2.840.10008.1.1");
    }
}
