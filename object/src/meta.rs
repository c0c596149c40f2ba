//! DICOM file meta information table and the synthetic meta group writer.
//!
//! Decoded objects keep their meta group as a plain data set;
//! this module offers a typed mirror of its relevant attributes,
//! and the minimal writer used to produce synthetic test files:
//! a zeroed preamble, the `DICM` magic code,
//! and the six meta data elements
//! preceded by a back-filled group length.

use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmlite_core::header::{Tag, VR};
use dcmlite_core::Dataset;
use dcmlite_dictionary_std::tags;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::Write;

use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};

/// An error building or writing a file meta group.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// A required file meta data element is missing.
    #[snafu(display("Missing data element `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },

    /// A value is too long for its length field on the wire.
    #[snafu(display(
        "Value length {} of element tagged {} exceeds the length field constraint",
        length,
        tag
    ))]
    LengthOverflow {
        tag: Tag,
        length: usize,
        backtrace: Backtrace,
    },

    /// The destination stream could not be written.
    #[snafu(display("Could not write file meta group data set"))]
    WriteStream {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// DICOM file meta information table.
///
/// This data type contains the parts of the file meta information
/// relevant to the decoder, as specified in
/// [part 10, chapter 7](https://dicom.nema.org/medical/dicom/current/output/chtml/part10/chapter_7.html).
///
/// Creating a new table from scratch
/// is more easily done using a [`FileMetaTableBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// File Meta Information Group Length
    pub information_group_length: u32,
    /// File Meta Information Version
    pub information_version: [u8; 2],
    /// Media Storage SOP Class UID
    pub media_storage_sop_class_uid: String,
    /// Media Storage SOP Instance UID
    pub media_storage_sop_instance_uid: String,
    /// Transfer Syntax UID
    pub transfer_syntax: String,
    /// Implementation Class UID
    pub implementation_class_uid: String,
    /// Implementation Version Name
    pub implementation_version_name: String,
}

impl FileMetaTable {
    /// Build a typed mirror of a decoded file meta group data set.
    pub fn from_dataset(meta: &Dataset) -> Result<Self> {
        let text_of = |tag: Tag, alias: &'static str| -> Result<String> {
            meta.get(tag)
                .and_then(|elem| elem.string().ok())
                .context(MissingElementSnafu { alias })
        };

        let information_version = meta
            .get(tags::FILE_META_INFORMATION_VERSION)
            .map(|elem| {
                let data = elem.data();
                [
                    data.first().copied().unwrap_or(0),
                    data.get(1).copied().unwrap_or(1),
                ]
            })
            .unwrap_or([0, 1]);

        let mut table = FileMetaTable {
            information_group_length: 0,
            information_version,
            media_storage_sop_class_uid: text_of(
                tags::MEDIA_STORAGE_SOP_CLASS_UID,
                "MediaStorageSOPClassUID",
            )?,
            media_storage_sop_instance_uid: text_of(
                tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
                "MediaStorageSOPInstanceUID",
            )?,
            transfer_syntax: text_of(tags::TRANSFER_SYNTAX_UID, "TransferSyntaxUID")?,
            implementation_class_uid: text_of(
                tags::IMPLEMENTATION_CLASS_UID,
                "ImplementationClassUID",
            )?,
            implementation_version_name: meta
                .get(tags::IMPLEMENTATION_VERSION_NAME)
                .and_then(|elem| elem.string().ok())
                .unwrap_or_default(),
        };
        table.information_group_length = meta
            .get(tags::FILE_META_INFORMATION_GROUP_LENGTH)
            .and_then(|elem| elem.uint32().ok())
            .unwrap_or_else(|| table.calculate_information_group_length());
        Ok(table)
    }

    /// Getter for the transfer syntax UID,
    /// with trailing characters already excluded.
    pub fn transfer_syntax(&self) -> &str {
        self.transfer_syntax
            .trim_end_matches(|c: char| c.is_whitespace() || c == '\0')
    }

    /// Calculate the expected file meta group length
    /// according to the attributes currently set,
    /// excluding the group length element itself.
    fn calculate_information_group_length(&self) -> u32 {
        14 + 8
            + even_len(&self.media_storage_sop_class_uid)
            + 8
            + even_len(&self.media_storage_sop_instance_uid)
            + 8
            + even_len(&self.transfer_syntax)
            + 8
            + even_len(&self.implementation_class_uid)
            + 8
            + even_len(&self.implementation_version_name)
    }

    /// Write the full file head:
    /// a zeroed 128-byte preamble, the `DICM` magic code,
    /// the group length element,
    /// and the six file meta data elements
    /// in explicit VR little endian.
    pub fn write<W: Write>(&self, mut to: W) -> Result<()> {
        to.write_all(&[0u8; 128]).context(WriteStreamSnafu)?;
        to.write_all(b"DICM").context(WriteStreamSnafu)?;

        let group_length = self.calculate_information_group_length();
        write_short_header(
            &mut to,
            tags::FILE_META_INFORMATION_GROUP_LENGTH,
            VR::UL,
            4,
        )?;
        let mut buf = [0u8; 4];
        LittleEndian::write_u32(&mut buf, group_length);
        to.write_all(&buf).context(WriteStreamSnafu)?;

        // (0002,0001) carries its value through the 32-bit length form
        write_long_header(&mut to, tags::FILE_META_INFORMATION_VERSION, VR::OB, 2)?;
        to.write_all(&self.information_version)
            .context(WriteStreamSnafu)?;

        write_text_element(
            &mut to,
            tags::MEDIA_STORAGE_SOP_CLASS_UID,
            VR::UI,
            &self.media_storage_sop_class_uid,
        )?;
        write_text_element(
            &mut to,
            tags::MEDIA_STORAGE_SOP_INSTANCE_UID,
            VR::UI,
            &self.media_storage_sop_instance_uid,
        )?;
        write_text_element(
            &mut to,
            tags::TRANSFER_SYNTAX_UID,
            VR::UI,
            &self.transfer_syntax,
        )?;
        write_text_element(
            &mut to,
            tags::IMPLEMENTATION_CLASS_UID,
            VR::UI,
            &self.implementation_class_uid,
        )?;
        write_text_element(
            &mut to,
            tags::IMPLEMENTATION_VERSION_NAME,
            VR::SH,
            &self.implementation_version_name,
        )?;
        Ok(())
    }
}

/// A builder for DICOM file meta information tables.
#[derive(Debug, Default, Clone)]
pub struct FileMetaTableBuilder {
    information_version: Option<[u8; 2]>,
    media_storage_sop_class_uid: Option<String>,
    media_storage_sop_instance_uid: Option<String>,
    transfer_syntax: Option<String>,
    implementation_class_uid: Option<String>,
    implementation_version_name: Option<String>,
}

impl FileMetaTableBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        FileMetaTableBuilder::default()
    }

    /// Define the file meta information version.
    pub fn information_version(mut self, value: [u8; 2]) -> Self {
        self.information_version = Some(value);
        self
    }

    /// Define the media storage SOP class UID.
    pub fn media_storage_sop_class_uid<T: Into<String>>(mut self, value: T) -> Self {
        self.media_storage_sop_class_uid = Some(value.into());
        self
    }

    /// Define the media storage SOP instance UID.
    pub fn media_storage_sop_instance_uid<T: Into<String>>(mut self, value: T) -> Self {
        self.media_storage_sop_instance_uid = Some(value.into());
        self
    }

    /// Define the transfer syntax UID.
    pub fn transfer_syntax<T: Into<String>>(mut self, value: T) -> Self {
        self.transfer_syntax = Some(value.into());
        self
    }

    /// Define the implementation class UID.
    pub fn implementation_class_uid<T: Into<String>>(mut self, value: T) -> Self {
        self.implementation_class_uid = Some(value.into());
        self
    }

    /// Define the implementation version name.
    pub fn implementation_version_name<T: Into<String>>(mut self, value: T) -> Self {
        self.implementation_version_name = Some(value.into());
        self
    }

    /// Build the table, with the group length already computed.
    ///
    /// The media storage attributes and the transfer syntax are mandatory;
    /// implementation identifiers fall back to the ones of this library.
    pub fn build(self) -> Result<FileMetaTable> {
        let media_storage_sop_class_uid = self.media_storage_sop_class_uid.context(
            MissingElementSnafu {
                alias: "MediaStorageSOPClassUID",
            },
        )?;
        let media_storage_sop_instance_uid = self.media_storage_sop_instance_uid.context(
            MissingElementSnafu {
                alias: "MediaStorageSOPInstanceUID",
            },
        )?;
        let transfer_syntax = self.transfer_syntax.context(MissingElementSnafu {
            alias: "TransferSyntaxUID",
        })?;
        let mut table = FileMetaTable {
            information_group_length: 0,
            information_version: self.information_version.unwrap_or([0, 1]),
            media_storage_sop_class_uid,
            media_storage_sop_instance_uid,
            transfer_syntax,
            implementation_class_uid: self
                .implementation_class_uid
                .unwrap_or_else(|| IMPLEMENTATION_CLASS_UID.to_string()),
            implementation_version_name: self
                .implementation_version_name
                .unwrap_or_else(|| IMPLEMENTATION_VERSION_NAME.to_string()),
        };
        table.information_group_length = table.calculate_information_group_length();
        Ok(table)
    }
}

/// the on-wire length of a text value, padded to the next even number
fn even_len(value: &str) -> u32 {
    (value.len() as u32 + 1) & !1
}

fn write_short_header<W: Write>(to: &mut W, tag: Tag, vr: VR, len: u16) -> Result<()> {
    let mut buf = [0u8; 8];
    LittleEndian::write_u16(&mut buf[0..2], tag.group());
    LittleEndian::write_u16(&mut buf[2..4], tag.element());
    buf[4..6].copy_from_slice(&vr.to_bytes());
    LittleEndian::write_u16(&mut buf[6..8], len);
    to.write_all(&buf).context(WriteStreamSnafu)
}

fn write_long_header<W: Write>(to: &mut W, tag: Tag, vr: VR, len: u32) -> Result<()> {
    let mut buf = [0u8; 12];
    LittleEndian::write_u16(&mut buf[0..2], tag.group());
    LittleEndian::write_u16(&mut buf[2..4], tag.element());
    buf[4..6].copy_from_slice(&vr.to_bytes());
    // two reserved bytes stay zero
    LittleEndian::write_u32(&mut buf[8..12], len);
    to.write_all(&buf).context(WriteStreamSnafu)
}

/// Write a short-form text element,
/// padding the value to even length
/// with a NUL byte (unique identifiers) or a space (other VRs).
fn write_text_element<W: Write>(to: &mut W, tag: Tag, vr: VR, value: &str) -> Result<()> {
    let mut data = value.as_bytes().to_vec();
    if data.len() % 2 != 0 {
        data.push(if vr == VR::UI { 0x00 } else { 0x20 });
    }
    ensure!(
        data.len() <= u16::MAX as usize,
        LengthOverflowSnafu {
            tag,
            length: data.len(),
        }
    );
    write_short_header(to, tag, vr, data.len() as u16)?;
    to.write_all(&data).context(WriteStreamSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmlite_dictionary_std::uids;

    fn sample_table() -> FileMetaTable {
        FileMetaTableBuilder::new()
            .media_storage_sop_class_uid(uids::CT_IMAGE_STORAGE)
            .media_storage_sop_instance_uid("1.2.3.4.5.6")
            .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
            .build()
            .unwrap()
    }

    #[test]
    fn builder_requires_storage_attributes() {
        let err = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingElement { .. }));
    }

    #[test]
    fn group_length_covers_all_elements_after_it() {
        let table = sample_table();
        let mut out = Vec::new();
        table.write(&mut out).unwrap();

        // preamble + magic + group length element
        let body_start = 128 + 4 + 12;
        assert_eq!(&out[128..132], b"DICM");
        let written_length = LittleEndian::read_u32(&out[140..144]);
        assert_eq!(written_length as usize, out.len() - body_start);
        assert_eq!(written_length, table.information_group_length);
    }

    #[test]
    fn values_are_padded_to_even_length() {
        let table = sample_table();
        let mut out = Vec::new();
        table.write(&mut out).unwrap();

        // "1.2.3.4.5.6" has odd length, so a NUL pad must follow
        let needle = b"1.2.3.4.5.6\0";
        assert!(out.windows(needle.len()).any(|w| w == needle));
    }

    #[test]
    fn oversized_value_is_a_length_overflow() {
        let mut table = sample_table();
        table.implementation_version_name = "X".repeat(0x1_0000);
        let err = table.write(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, Error::LengthOverflow { .. }));
    }
}
