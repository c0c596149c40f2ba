//! Pixel data frame assembly.
//!
//! The pixel data element (7FE0,0010) is routed here by the data set
//! assembler instead of being stored with the other attributes.
//! Encapsulated payloads carry a basic offset table in their first item,
//! followed by one or more fragments;
//! the offsets slice the fragment concatenation into frames.
//! Native payloads form a single frame.

use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmlite_core::DataElement;

/// The pixel data of a DICOM object,
/// as an ordered sequence of frames.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PixelData {
    frames: Vec<Vec<u8>>,
}

impl PixelData {
    /// Create an empty pixel data holder.
    pub fn new() -> Self {
        PixelData::default()
    }

    /// The number of frames.
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no frames at all.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Fetch a single frame by index.
    pub fn frame(&self, index: usize) -> Option<&[u8]> {
        self.frames.get(index).map(|frame| frame.as_slice())
    }

    /// Obtain an iterator over all frames in order.
    pub fn frames(&self) -> impl Iterator<Item = &[u8]> {
        self.frames.iter().map(|frame| frame.as_slice())
    }

    /// Append the frames carried by the given pixel data element.
    ///
    /// Encapsulated elements have their first item interpreted as the
    /// basic offset table (32-bit little endian offsets into the
    /// concatenation of the remaining fragments).
    /// An empty offset table yields a single frame
    /// holding the full concatenation.
    /// A native element contributes its payload as one frame.
    pub(crate) fn extend_from_element(&mut self, elem: &DataElement) {
        let items = elem.items();
        if !items.is_empty() {
            let offset_table = items[0].fragment().unwrap_or(&[]);
            let offsets: Vec<u32> = offset_table
                .chunks_exact(4)
                .map(LittleEndian::read_u32)
                .collect();

            let mut concatenation = Vec::new();
            for item in &items[1..] {
                if let Some(fragment) = item.fragment() {
                    concatenation.extend_from_slice(fragment);
                }
            }

            if offsets.is_empty() {
                self.frames.push(concatenation);
            } else {
                for (i, &offset) in offsets.iter().enumerate() {
                    let start = (offset as usize).min(concatenation.len());
                    let end = offsets
                        .get(i + 1)
                        .map(|&next| next as usize)
                        .unwrap_or(concatenation.len())
                        .clamp(start, concatenation.len());
                    self.frames.push(concatenation[start..end].to_vec());
                }
            }
        } else if !elem.data().is_empty() {
            self.frames.push(elem.data().to_vec());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteordered::Endianness;
    use dcmlite_core::header::{ElementValue, Item, Length, Tag, VR};
    use std::borrow::Cow;

    fn pixel_element(value: ElementValue) -> DataElement {
        DataElement::new(
            Tag(0x7FE0, 0x0010),
            Cow::Borrowed("PixelData"),
            Cow::Borrowed("1"),
            VR::OW,
            Endianness::Little,
            Length::UNDEFINED,
            value,
        )
    }

    fn offset_table(offsets: &[u32]) -> Item {
        let mut data = Vec::new();
        for &offset in offsets {
            let mut buf = [0u8; 4];
            LittleEndian::write_u32(&mut buf, offset);
            data.extend_from_slice(&buf);
        }
        Item::Fragment(data)
    }

    #[test]
    fn frames_sliced_by_offset_table() {
        let elem = pixel_element(ElementValue::Items(vec![
            offset_table(&[0, 4]),
            Item::Fragment(b"AAAA".to_vec()),
            Item::Fragment(b"BBBB".to_vec()),
        ]));
        let mut pixel_data = PixelData::new();
        pixel_data.extend_from_element(&elem);

        assert_eq!(pixel_data.num_frames(), 2);
        assert_eq!(pixel_data.frame(0).unwrap(), b"AAAA");
        assert_eq!(pixel_data.frame(1).unwrap(), b"BBBB");
        assert_eq!(pixel_data.frame(2), None);
    }

    #[test]
    fn frame_boundaries_may_span_fragments() {
        let elem = pixel_element(ElementValue::Items(vec![
            offset_table(&[0, 6]),
            Item::Fragment(b"AAAA".to_vec()),
            Item::Fragment(b"BBBB".to_vec()),
        ]));
        let mut pixel_data = PixelData::new();
        pixel_data.extend_from_element(&elem);

        assert_eq!(pixel_data.num_frames(), 2);
        assert_eq!(pixel_data.frame(0).unwrap(), b"AAAABB");
        assert_eq!(pixel_data.frame(1).unwrap(), b"BB");
    }

    #[test]
    fn empty_offset_table_yields_single_frame() {
        let elem = pixel_element(ElementValue::Items(vec![
            Item::Fragment(Vec::new()),
            Item::Fragment(b"AAAA".to_vec()),
            Item::Fragment(b"BBBB".to_vec()),
        ]));
        let mut pixel_data = PixelData::new();
        pixel_data.extend_from_element(&elem);

        assert_eq!(pixel_data.num_frames(), 1);
        assert_eq!(pixel_data.frame(0).unwrap(), b"AAAABBBB");
    }

    #[test]
    fn native_payload_is_a_single_frame() {
        let elem = pixel_element(ElementValue::Bytes(vec![1, 2, 3, 4, 5, 6]));
        let mut pixel_data = PixelData::new();
        pixel_data.extend_from_element(&elem);

        assert_eq!(pixel_data.num_frames(), 1);
        assert_eq!(pixel_data.frame(0).unwrap(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn out_of_bounds_offsets_are_clamped() {
        let elem = pixel_element(ElementValue::Items(vec![
            offset_table(&[0, 100]),
            Item::Fragment(b"AAAA".to_vec()),
        ]));
        let mut pixel_data = PixelData::new();
        pixel_data.extend_from_element(&elem);

        assert_eq!(pixel_data.num_frames(), 2);
        assert_eq!(pixel_data.frame(0).unwrap(), b"AAAA");
        assert_eq!(pixel_data.frame(1).unwrap(), b"");
    }

    #[test]
    fn element_without_payload_contributes_nothing() {
        let elem = pixel_element(ElementValue::Bytes(Vec::new()));
        let mut pixel_data = PixelData::new();
        pixel_data.extend_from_element(&elem);
        assert!(pixel_data.is_empty());
    }
}
