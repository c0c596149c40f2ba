//! Stateful decoding of DICOM data elements.
//!
//! [`ElementReader`] owns the byte source
//! and carries the two pieces of state
//! that decide how element headers are interpreted:
//! whether the VR is implicit,
//! and the byte order (held by the source).
//! Both are reconfigured by the data set assembler
//! when crossing the boundary between
//! the file meta group and the main data set.
//!
//! Reading one element resolves the tag against the attribute dictionary,
//! honours the implicit/explicit length forms,
//! recurses through sequence items,
//! collects encapsulated pixel data fragments,
//! and strips value padding.

use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use dcmlite_core::dictionary::DataDictionary;
use dcmlite_core::header::{DataElement, ElementValue, Item, Length, Tag, VR};
use dcmlite_core::Dataset;
use dcmlite_dictionary_std::{tags, StandardDataDictionary};
use dcmlite_encoding::source::{self, ByteSource};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::io::Read;

/// Maximum item nesting before decoding aborts,
/// guarding against pathological input.
const MAX_NESTING_DEPTH: u32 = 64;

/// An error while decoding a data element from the stream.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// A data element header could not be fetched.
    #[snafu(display("Could not decode element header at position {}", position))]
    DecodeElementHeader {
        position: u64,
        #[snafu(backtrace)]
        source: source::Error,
    },

    /// The value bytes of a data element could not be fetched.
    #[snafu(display("Could not read value of element {} at position {}", tag, position))]
    ReadValueData {
        tag: Tag,
        position: u64,
        #[snafu(backtrace)]
        source: source::Error,
    },

    /// An item header or delimiter could not be fetched.
    #[snafu(display("Could not decode item header at position {}", position))]
    DecodeItemHeader {
        position: u64,
        #[snafu(backtrace)]
        source: source::Error,
    },

    /// An item start tag was required at this position of the stream.
    #[snafu(display("Expected item start at position {}, found tag {}", position, tag))]
    UnexpectedItemTag {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },

    /// Items are nested too deeply.
    #[snafu(display("Too many levels of item nesting at position {}", position))]
    ExcessiveNesting { position: u64, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A stateful reader of DICOM data elements.
///
/// `S` is the type of the underlying byte source,
/// `D` the attribute dictionary consulted for tag metadata.
///
/// The reader starts in explicit VR little endian,
/// which is the mandatory encoding of the file meta group.
#[derive(Debug)]
pub struct ElementReader<S, D = StandardDataDictionary> {
    source: ByteSource<S>,
    dict: D,
    implicit_vr: bool,
}

impl<S> ElementReader<S, StandardDataDictionary>
where
    S: Read,
{
    /// Create an element reader over the given source,
    /// consulting the standard attribute dictionary.
    pub fn new(source: ByteSource<S>) -> Self {
        ElementReader::new_with_dictionary(source, StandardDataDictionary)
    }
}

impl<S, D> ElementReader<S, D>
where
    S: Read,
    D: DataDictionary,
{
    /// Create an element reader over the given source
    /// with a custom attribute dictionary.
    pub fn new_with_dictionary(source: ByteSource<S>, dict: D) -> Self {
        ElementReader {
            source,
            dict,
            implicit_vr: false,
        }
    }

    /// Whether the reader is currently in implicit VR mode.
    #[inline]
    pub fn implicit_vr(&self) -> bool {
        self.implicit_vr
    }

    /// Switch the reader between implicit and explicit VR mode.
    #[inline]
    pub fn set_implicit_vr(&mut self, implicit_vr: bool) {
        self.implicit_vr = implicit_vr;
    }

    /// The byte order currently applied to multi-byte integers.
    #[inline]
    pub fn byte_order(&self) -> Endianness {
        self.source.byte_order()
    }

    /// Switch the byte order applied to multi-byte integers.
    #[inline]
    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.source.set_byte_order(byte_order);
    }

    /// The number of bytes consumed from the stream so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.source.position()
    }

    /// Check whether the stream is exhausted.
    pub fn at_end(&mut self) -> Result<bool> {
        self.source.at_end().context(DecodeElementHeaderSnafu {
            position: self.source.position(),
        })
    }

    /// Fetch the next `n` bytes without consuming them.
    pub fn peek(&mut self, n: usize) -> Result<&[u8]> {
        let position = self.source.position();
        self.source
            .peek(n)
            .context(DecodeElementHeaderSnafu { position })
    }

    /// Consume and discard the next `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        let position = self.source.position();
        self.source
            .skip(n)
            .context(DecodeElementHeaderSnafu { position })
    }

    /// Read one complete data element at the current position,
    /// including any nested items.
    pub fn read_element(&mut self) -> Result<DataElement> {
        self.read_element_nested(0)
    }

    fn read_element_nested(&mut self, depth: u32) -> Result<DataElement> {
        let position = self.source.position();
        let tag = self
            .read_tag()
            .context(DecodeElementHeaderSnafu { position })?;
        let record = self.dict.record_for(tag);
        let endianness = self.source.byte_order();

        // resolve the element's VR: implicit streams take it from the
        // dictionary, explicit streams carry it in the next two bytes
        let (vr, stream_vr) = if self.implicit_vr {
            (record.vr, record.vr)
        } else {
            let mut buf = [0u8; 2];
            self.source
                .read_exact(&mut buf)
                .context(DecodeElementHeaderSnafu { position })?;
            let stream_vr = match VR::from_binary(buf) {
                Some(vr) => vr,
                None => {
                    tracing::warn!(
                        "unrecognised VR code {:?} in element {}, coerced to UN",
                        String::from_utf8_lossy(&buf),
                        tag
                    );
                    VR::UN
                }
            };
            // the stream VR overrides the dictionary
            // when the dictionary is not more specific than UN
            let vr = if record.vr == VR::UN && stream_vr != VR::UN {
                stream_vr
            } else {
                record.vr
            };
            (vr, stream_vr)
        };

        let len = self.read_length(stream_vr, position)?;

        let (value, len) = if len.is_undefined() {
            let items = self.read_items_until_delimiter(tag, depth)?;
            (ElementValue::Items(items), len)
        } else if stream_vr == VR::SQ {
            let items = self.read_items_to_position(
                tag,
                self.source.position() + u64::from(len.0),
                depth,
            )?;
            (ElementValue::Items(items), len)
        } else {
            let position = self.source.position();
            let mut data = self
                .source
                .read_vec(len.0 as usize)
                .context(ReadValueDataSnafu { tag, position })?;
            if stream_vr.is_padded() {
                strip_padding(&mut data, tag);
            }
            let len = Length(data.len() as u32);
            (ElementValue::Bytes(data), len)
        };

        Ok(DataElement::new(
            tag,
            record.alias,
            record.vm,
            vr,
            endianness,
            len,
            value,
        ))
    }

    /// Read the element length field, whose form depends on the VR
    /// found in the stream when in explicit mode.
    fn read_length(&mut self, stream_vr: VR, position: u64) -> Result<Length> {
        let len = if self.implicit_vr {
            self.source
                .read_u32()
                .context(DecodeElementHeaderSnafu { position })?
        } else if stream_vr.has_reserved_length() {
            self.source
                .skip(2)
                .context(DecodeElementHeaderSnafu { position })?;
            self.source
                .read_u32()
                .context(DecodeElementHeaderSnafu { position })?
        } else {
            u32::from(
                self.source
                    .read_u16()
                    .context(DecodeElementHeaderSnafu { position })?,
            )
        };
        Ok(Length(len))
    }

    /// Read items until the sequence delimitation item is peeked,
    /// then discard the 8-byte delimiter.
    fn read_items_until_delimiter(&mut self, enclosing: Tag, depth: u32) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        loop {
            let position = self.source.position();
            let tag = self
                .peek_tag()
                .context(DecodeItemHeaderSnafu { position })?;
            if tag == tags::SEQUENCE_DELIMITATION_ITEM {
                // delimiter tag plus its zero length field
                self.source
                    .skip(8)
                    .context(DecodeItemHeaderSnafu { position })?;
                break;
            }
            items.push(self.read_item(enclosing, depth)?);
        }
        Ok(items)
    }

    /// Read items while the stream position has not reached
    /// the end of a defined-length sequence.
    fn read_items_to_position(
        &mut self,
        enclosing: Tag,
        end: u64,
        depth: u32,
    ) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        while self.source.position() < end {
            items.push(self.read_item(enclosing, depth)?);
        }
        Ok(items)
    }

    /// Read a single item. Whether it holds an embedded data set or a raw
    /// fragment is decided by the enclosing element's tag.
    fn read_item(&mut self, enclosing: Tag, depth: u32) -> Result<Item> {
        let position = self.source.position();
        ensure!(
            depth < MAX_NESTING_DEPTH,
            ExcessiveNestingSnafu { position }
        );
        let tag = self
            .read_tag()
            .context(DecodeItemHeaderSnafu { position })?;
        ensure!(
            tag == tags::ITEM,
            UnexpectedItemTagSnafu { tag, position }
        );
        let len = Length(
            self.source
                .read_u32()
                .context(DecodeItemHeaderSnafu { position })?,
        );
        let in_pixel_data = enclosing == tags::PIXEL_DATA;

        if len.is_undefined() {
            if in_pixel_data {
                self.read_fragment_until_delimiter().map(Item::Fragment)
            } else {
                self.read_item_dataset_until_delimiter(depth).map(Item::Dataset)
            }
        } else if len.0 == 0 {
            // empty items do occur in real data sets
            if in_pixel_data {
                Ok(Item::Fragment(Vec::new()))
            } else {
                Ok(Item::Dataset(Dataset::new()))
            }
        } else if in_pixel_data {
            let position = self.source.position();
            self.source
                .read_vec(len.0 as usize)
                .context(ReadValueDataSnafu {
                    tag: enclosing,
                    position,
                })
                .map(Item::Fragment)
        } else {
            let end = self.source.position() + u64::from(len.0);
            let mut dataset = Dataset::new();
            while self.source.position() < end {
                dataset.put(self.read_element_nested(depth + 1)?);
            }
            Ok(Item::Dataset(dataset))
        }
    }

    /// Collect an undefined-length fragment in 4-byte steps
    /// until the item delimitation item is peeked.
    fn read_fragment_until_delimiter(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        loop {
            let position = self.source.position();
            let tag = self
                .peek_tag()
                .context(DecodeItemHeaderSnafu { position })?;
            if tag == tags::ITEM_DELIMITATION_ITEM {
                self.source
                    .skip(8)
                    .context(DecodeItemHeaderSnafu { position })?;
                break;
            }
            let mut chunk = [0u8; 4];
            self.source
                .read_exact(&mut chunk)
                .context(DecodeItemHeaderSnafu { position })?;
            data.extend_from_slice(&chunk);
        }
        Ok(data)
    }

    /// Collect embedded elements of an undefined-length item
    /// until the item delimitation item is peeked.
    fn read_item_dataset_until_delimiter(&mut self, depth: u32) -> Result<Dataset> {
        let mut dataset = Dataset::new();
        loop {
            let position = self.source.position();
            let tag = self
                .peek_tag()
                .context(DecodeItemHeaderSnafu { position })?;
            if tag == tags::ITEM_DELIMITATION_ITEM {
                self.source
                    .skip(8)
                    .context(DecodeItemHeaderSnafu { position })?;
                break;
            }
            dataset.put(self.read_element_nested(depth + 1)?);
        }
        Ok(dataset)
    }

    /// Read the next four bytes as a data element tag.
    /// The group occupies the first two bytes and the element the next two,
    /// each in the current byte order.
    fn read_tag(&mut self) -> Result<Tag, source::Error> {
        let group = self.source.read_u16()?;
        let element = self.source.read_u16()?;
        Ok(Tag(group, element))
    }

    /// Fetch the tag at the current position without consuming it.
    fn peek_tag(&mut self) -> Result<Tag, source::Error> {
        let byte_order = self.source.byte_order();
        let bytes = self.source.peek(4)?;
        Ok(match byte_order {
            Endianness::Little => Tag(
                LittleEndian::read_u16(&bytes[0..2]),
                LittleEndian::read_u16(&bytes[2..4]),
            ),
            Endianness::Big => Tag(
                BigEndian::read_u16(&bytes[0..2]),
                BigEndian::read_u16(&bytes[2..4]),
            ),
        })
    }
}

/// Strip at most one pad byte (NUL or space) from each end of the value.
/// Padding at the head of the value is not standard-conformant,
/// so removing it is worth a warning.
fn strip_padding(data: &mut Vec<u8>, tag: Tag) {
    if let Some(&last) = data.last() {
        if last == 0x00 || last == 0x20 {
            data.pop();
        }
    }
    if let Some(&first) = data.first() {
        if first == 0x00 || first == 0x20 {
            tracing::warn!("stripping non-conformant leading pad byte in element {}", tag);
            data.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader_for(data: &[u8]) -> ElementReader<Cursor<Vec<u8>>> {
        ElementReader::new(ByteSource::new(Cursor::new(data.to_vec())))
    }

    #[test]
    fn read_explicit_vr_element() {
        // (0010,0010) PN, length 8, "Smith^J " (padded with a space)
        let mut raw = vec![0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00];
        raw.extend_from_slice(b"Smith^J ");
        let mut reader = reader_for(&raw);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0010, 0x0010));
        assert_eq!(elem.vr(), VR::PN);
        assert_eq!(elem.name(), "PatientName");
        // trailing pad stripped, declared length decremented
        assert_eq!(elem.len().get(), Some(7));
        assert_eq!(elem.data(), b"Smith^J");
        assert!(reader.at_end().unwrap());
    }

    #[test]
    fn read_implicit_vr_element_takes_vr_from_dictionary() {
        // (0010,0010), length 8, "Smith^J " in implicit VR little endian
        let mut raw = vec![0x10, 0x00, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00];
        raw.extend_from_slice(b"Smith^J ");
        let mut reader = reader_for(&raw);
        reader.set_implicit_vr(true);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.vr(), VR::PN);
        assert_eq!(elem.data(), b"Smith^J");
    }

    #[test]
    fn stream_vr_overrides_unknown_dictionary_vr() {
        // private tag, not in the dictionary, explicit VR LO
        let mut raw = vec![0x09, 0x00, 0x01, 0x10, b'L', b'O', 0x04, 0x00];
        raw.extend_from_slice(b"ACME");
        let mut reader = reader_for(&raw);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0009, 0x1001));
        assert_eq!(elem.vr(), VR::LO);
        assert_eq!(elem.name(), "Unknown(0009,1001)");
        assert_eq!(elem.data(), b"ACME");
    }

    #[test]
    fn unrecognised_stream_vr_is_coerced_to_un() {
        // the length field takes the 32-bit form of the coerced UN
        let mut raw = vec![
            0x09, 0x00, 0x01, 0x10, b'Z', b'Z', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00,
        ];
        raw.extend_from_slice(&[0xAB, 0xCD]);
        let mut reader = reader_for(&raw);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.vr(), VR::UN);
        assert_eq!(elem.data(), &[0xAB, 0xCD]);
    }

    #[test]
    fn read_element_with_zero_length() {
        let raw = vec![0x08, 0x00, 0x50, 0x00, b'S', b'H', 0x00, 0x00];
        let mut reader = reader_for(&raw);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0008, 0x0050));
        assert!(elem.is_empty());
        assert_eq!(elem.len().get(), Some(0));
    }

    #[test]
    fn read_element_with_reserved_length_field() {
        // (7FE0,0010) OB, reserved bytes, 32-bit length 4
        let mut raw = vec![
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
        ];
        raw.extend_from_slice(&[0x01, 0x02, 0x03, 0x05]);
        let mut reader = reader_for(&raw);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x7FE0, 0x0010));
        // the dictionary VR for pixel data prevails over the stream's OB
        assert_eq!(elem.vr(), VR::OW);
        assert_eq!(elem.data(), &[0x01, 0x02, 0x03, 0x05]);
    }

    #[test]
    fn read_sequence_with_undefined_length() {
        // (0040,0275) SQ, undefined length, two undefined-length items with
        // one element each, closed by the sequence delimitation item
        let mut raw = vec![
            0x40, 0x00, 0x75, 0x02, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        for _ in 0..2 {
            // item, undefined length
            raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF]);
            // (0040,A040) CS, length 4, "TEXT"
            raw.extend_from_slice(&[0x40, 0x00, 0x40, 0xA0, b'C', b'S', 0x04, 0x00]);
            raw.extend_from_slice(b"TEXT");
            // item delimitation
            raw.extend_from_slice(&[0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00]);
        }
        // sequence delimitation
        raw.extend_from_slice(&[0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00]);
        let mut reader = reader_for(&raw);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0040, 0x0275));
        assert_eq!(elem.vr(), VR::SQ);
        assert_eq!(elem.items().len(), 2);
        for item in elem.items() {
            let dataset = item.dataset().expect("sequence items hold data sets");
            assert_eq!(dataset.len(), 1);
            let inner = dataset.get(Tag(0x0040, 0xA040)).unwrap();
            assert_eq!(inner.string().unwrap(), "TEXT");
        }
        assert!(reader.at_end().unwrap());
    }

    #[test]
    fn read_sequence_with_defined_length_items() {
        // (0008,1140) SQ with defined length holding one item of
        // defined length with a single (0008,1155) UI element
        let item_payload_len = 8 + 6; // element header + value
        let mut raw = vec![0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0x00, 0x00];
        raw.extend_from_slice(&(8u32 + item_payload_len as u32).to_le_bytes());
        raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0]);
        raw.extend_from_slice(&(item_payload_len as u32).to_le_bytes());
        raw.extend_from_slice(&[0x08, 0x00, 0x55, 0x11, b'U', b'I', 0x06, 0x00]);
        raw.extend_from_slice(b"1.2.3\0");
        let mut reader = reader_for(&raw);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.items().len(), 1);
        let dataset = elem.items()[0].dataset().unwrap();
        let inner = dataset.get(Tag(0x0008, 0x1155)).unwrap();
        // NUL pad is stripped from the UI value
        assert_eq!(inner.data(), b"1.2.3");
        assert!(reader.at_end().unwrap());
    }

    #[test]
    fn read_undefined_length_sequence_with_no_items() {
        let mut raw = vec![
            0x40, 0x00, 0x75, 0x02, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        raw.extend_from_slice(&[0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00]);
        let mut reader = reader_for(&raw);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.vr(), VR::SQ);
        assert!(elem.items().is_empty());
    }

    #[test]
    fn read_zero_length_item_in_sequence() {
        let mut raw = vec![
            0x40, 0x00, 0x75, 0x02, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        // a defined zero-length item
        raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00]);
        raw.extend_from_slice(&[0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00]);
        let mut reader = reader_for(&raw);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.items().len(), 1);
        let dataset = elem.items()[0].dataset().unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn read_encapsulated_pixel_data_fragments() {
        // (7FE0,0010) OB, undefined length, offset table + two fragments
        let mut raw = vec![
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        // basic offset table with two entries
        raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0x08, 0x00, 0x00, 0x00]);
        raw.extend_from_slice(&0u32.to_le_bytes());
        raw.extend_from_slice(&4u32.to_le_bytes());
        // two fragments of 4 bytes
        raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00]);
        raw.extend_from_slice(b"AAAA");
        raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00]);
        raw.extend_from_slice(b"BBBB");
        raw.extend_from_slice(&[0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00]);
        let mut reader = reader_for(&raw);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x7FE0, 0x0010));
        let items = elem.items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].fragment().unwrap().len(), 8);
        assert_eq!(items[1].fragment().unwrap(), b"AAAA");
        assert_eq!(items[2].fragment().unwrap(), b"BBBB");
    }

    #[test]
    fn big_endian_element_reading() {
        // (0028,0010) US, length 2, value 256, big endian
        let raw = vec![0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x01, 0x00];
        let mut reader = reader_for(&raw);
        reader.set_byte_order(Endianness::Big);

        let elem = reader.read_element().unwrap();
        assert_eq!(elem.tag(), Tag(0x0028, 0x0010));
        assert_eq!(elem.endianness(), Endianness::Big);
        assert_eq!(elem.uint16().unwrap(), 256);
    }

    #[test]
    fn missing_item_start_is_a_structure_error() {
        // undefined-length sequence followed by a plain element tag
        let mut raw = vec![
            0x40, 0x00, 0x75, 0x02, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        raw.extend_from_slice(&[0x08, 0x00, 0x50, 0x00, 0x00, 0x00, 0x00, 0x00]);
        let mut reader = reader_for(&raw);

        let err = reader.read_element().unwrap_err();
        assert!(matches!(err, Error::UnexpectedItemTag { .. }));
    }

    #[test]
    fn truncated_element_is_end_of_stream() {
        let raw = vec![0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00, b'S', b'm'];
        let mut reader = reader_for(&raw);

        let err = reader.read_element().unwrap_err();
        assert!(matches!(
            err,
            Error::ReadValueData {
                source: source::Error::UnexpectedEndOfStream { .. },
                ..
            }
        ));
    }

    #[test]
    fn nesting_limit_aborts_pathological_input() {
        // an unbounded chain of undefined-length sequences and items
        let mut raw = Vec::new();
        for _ in 0..80 {
            // (0008,1140) SQ undefined length + item with undefined length
            raw.extend_from_slice(&[
                0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            ]);
            raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF]);
        }
        let mut reader = reader_for(&raw);

        let err = reader.read_element().unwrap_err();
        assert!(matches!(err, Error::ExcessiveNesting { .. }));
    }
}
