//! In-memory DICOM object representation and data set assembly.
//!
//! [`Dicom`] is built in a single pass over the input stream:
//! the 128-byte preamble is probed,
//! the file meta group is read in explicit VR little endian,
//! the encoding of the main data set is auto-detected
//! at the group boundary,
//! and the elements that follow are collected,
//! with pixel data routed to the frame assembler
//! and text payloads re-encoded to UTF-8
//! once the specific character set is known.

use byteordered::byteorder::{ByteOrder, LittleEndian};
use byteordered::Endianness;
use dcmlite_core::header::{DataElement, Item, Tag};
use dcmlite_core::Dataset;
use dcmlite_dictionary_std::{tags, uids};
use dcmlite_encoding::source::{self, ByteSource};
use dcmlite_encoding::text::{SpecificCharacterSet, TextCodec};
use dcmlite_parser::detect::{detect_encoding, EncodingHint};
use dcmlite_parser::read::{self, ElementReader};
use snafu::{Backtrace, ResultExt, Snafu};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::pixeldata::PixelData;

const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

/// An error reading a DICOM object from a stream or file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    /// The file could not be opened.
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// A data element could not be decoded from the stream.
    #[snafu(display("Could not decode data element"))]
    DecodeElement {
        #[snafu(backtrace)]
        source: read::Error,
    },

    /// The requested data element is not present in the object.
    #[snafu(display("No such data element {}", tag))]
    NoSuchDataElement { tag: Tag, backtrace: Backtrace },
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;

/// An in-memory DICOM object:
/// the preamble, the file meta group, the main data set,
/// and any pixel data frames.
///
/// A `Dicom` value is created by one of the decoding entry points
/// ([`from_reader`](Dicom::from_reader), [`open_file`](Dicom::open_file)),
/// populated in a single pass,
/// and read-only from there on.
#[derive(Debug, Clone)]
pub struct Dicom {
    preamble: [u8; 128],
    meta: Dataset,
    dataset: Dataset,
    pixel_data: PixelData,
    character_set: SpecificCharacterSet,
}

impl Dicom {
    /// Read a DICOM object from a file by path.
    ///
    /// The file is open for the duration of the call
    /// and released on every exit path.
    pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        Dicom::from_reader(BufReader::new(file))
    }

    /// Read a DICOM object from an arbitrary byte source.
    pub fn from_reader<S: Read>(source: S) -> Result<Self> {
        Dicom::build(ElementReader::new(ByteSource::new(source)))
    }

    /// The 128-byte preamble.
    /// All zeros when the stream carried none.
    pub fn preamble(&self) -> &[u8; 128] {
        &self.preamble
    }

    /// The file meta group data set.
    pub fn meta(&self) -> &Dataset {
        &self.meta
    }

    /// The main data set.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The pixel data frames of the object.
    pub fn pixel_data(&self) -> &PixelData {
        &self.pixel_data
    }

    /// The specific character set the object's text was declared in.
    ///
    /// Text elements have already been re-encoded to UTF-8 on decoding.
    pub fn character_set(&self) -> SpecificCharacterSet {
        self.character_set
    }

    /// Fetch a data element by tag,
    /// looking at the main data set first
    /// and falling back to the file meta group.
    pub fn get_element(&self, tag: Tag) -> Option<&DataElement> {
        self.dataset.get(tag).or_else(|| self.meta.get(tag))
    }

    /// Fetch a data element by tag,
    /// with a [`NoSuchDataElement`](ReadError::NoSuchDataElement) error
    /// when it is absent from the object.
    pub fn element(&self, tag: Tag) -> Result<&DataElement> {
        self.get_element(tag)
            .ok_or_else(|| NoSuchDataElementSnafu { tag }.build())
    }

    /// Run the decoding pipeline to completion.
    fn build<S: Read>(mut reader: ElementReader<S>) -> Result<Self> {
        let mut preamble = [0u8; 128];
        let mut meta = Dataset::new();
        let mut dataset = Dataset::new();
        let mut staged: Vec<DataElement> = Vec::new();
        let mut pixel_data = PixelData::new();
        let mut character_set = SpecificCharacterSet::DEFAULT;

        // probe for the preamble: 132 bytes of look-ahead,
        // with the magic code at offset 128
        let has_preamble = match reader.peek(132) {
            Ok(bytes) => bytes[128..132] == DICM_MAGIC_CODE,
            // short streams simply have no preamble
            Err(e) if is_end_of_stream(&e) => false,
            Err(e) => return Err(e).context(DecodeElementSnafu),
        };
        if has_preamble {
            let bytes = reader.peek(132).context(DecodeElementSnafu)?;
            preamble.copy_from_slice(&bytes[0..128]);
            reader.skip(132).context(DecodeElementSnafu)?;
        }

        // the file meta group is read in explicit VR little endian,
        // driven by a group number look-ahead
        let mut reached_end = false;
        loop {
            let group = match reader.peek(2) {
                Ok(bytes) => LittleEndian::read_u16(&bytes[0..2]),
                Err(e) if is_end_of_stream(&e) => {
                    reached_end = true;
                    break;
                }
                Err(e) => return Err(e).context(DecodeElementSnafu),
            };
            if group != 0x0002 {
                break;
            }
            let elem = reader.read_element().context(DecodeElementSnafu)?;
            meta.put(elem);
        }

        // infer the encoding of the elements that follow,
        // rather than trusting the declared transfer syntax
        if !reached_end {
            match reader.peek(6) {
                Ok(bytes) => {
                    let mut probe = [0u8; 6];
                    probe.copy_from_slice(bytes);
                    let hint = detect_encoding(probe);
                    cross_check_transfer_syntax(&meta, hint);
                    reader.set_byte_order(hint.endianness);
                    reader.set_implicit_vr(!hint.explicit_vr);
                }
                Err(e) if is_end_of_stream(&e) => reached_end = true,
                Err(e) => return Err(e).context(DecodeElementSnafu),
            }
        }

        while !reached_end && !reader.at_end().context(DecodeElementSnafu)? {
            let elem = reader.read_element().context(DecodeElementSnafu)?;
            match elem.tag() {
                tags::PIXEL_DATA => pixel_data.extend_from_element(&elem),
                tags::SPECIFIC_CHARACTER_SET => {
                    // applied immediately, as it drives the text re-encoding
                    character_set = resolve_character_set(&elem);
                    dataset.put(elem);
                }
                _ => staged.push(elem),
            }
        }

        // with the character set settled, bring all staged text to UTF-8
        for mut elem in staged {
            reencode_text(&mut elem, character_set);
            dataset.put(elem);
        }

        Ok(Dicom {
            preamble,
            meta,
            dataset,
            pixel_data,
            character_set,
        })
    }
}

/// whether the error is a plain end-of-stream condition,
/// which the assembly loops treat as a regular stopping point
fn is_end_of_stream(e: &read::Error) -> bool {
    matches!(
        e,
        read::Error::DecodeElementHeader {
            source: source::Error::UnexpectedEndOfStream { .. },
            ..
        }
    )
}

/// Resolve the character set declared by a (0008,0005) element,
/// keeping the last value when the element is multi-valued.
/// Unsupported identifiers fall back to the default repertoire.
fn resolve_character_set(elem: &DataElement) -> SpecificCharacterSet {
    let values = elem.strings().unwrap_or_default();
    match values.last() {
        Some(code) => SpecificCharacterSet::from_code(code.trim()).unwrap_or_else(|| {
            tracing::warn!(
                "unsupported specific character set {:?}, using the default repertoire",
                code
            );
            SpecificCharacterSet::DEFAULT
        }),
        None => SpecificCharacterSet::DEFAULT,
    }
}

/// Re-encode the textual payload of the element to UTF-8,
/// recursing into sequence items.
fn reencode_text(elem: &mut DataElement, character_set: SpecificCharacterSet) {
    if elem.vr().is_specific_charset_text() && !elem.data().is_empty() {
        let decoded = character_set.decode(elem.data());
        elem.set_data(decoded.into_bytes());
    }
    if let Some(items) = elem.items_mut() {
        for item in items {
            if let Item::Dataset(dataset) = item {
                for inner in dataset.iter_mut() {
                    reencode_text(inner, character_set);
                }
            }
        }
    }
}

/// Compare the detected encoding against the declared transfer syntax,
/// if one is present and recognised. The detected encoding always wins,
/// but a disagreement is worth a warning.
fn cross_check_transfer_syntax(meta: &Dataset, hint: EncodingHint) {
    let uid = match meta
        .get(tags::TRANSFER_SYNTAX_UID)
        .and_then(|elem| elem.string().ok())
    {
        Some(uid) => uid,
        None => return,
    };
    let declared = match uid.as_str() {
        uids::IMPLICIT_VR_LITTLE_ENDIAN => Some((Endianness::Little, false)),
        uids::EXPLICIT_VR_LITTLE_ENDIAN
        | uids::ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN => {
            Some((Endianness::Little, true))
        }
        uids::EXPLICIT_VR_BIG_ENDIAN => Some((Endianness::Big, true)),
        _ => None,
    };
    if let Some((endianness, explicit_vr)) = declared {
        if endianness != hint.endianness || explicit_vr != hint.explicit_vr {
            tracing::warn!(
                "transfer syntax {} disagrees with the detected data set encoding, \
                 proceeding with the detected one",
                uid
            );
        }
    }
}
