//! End-to-end decoding scenarios over complete byte streams.

use dcmlite_core::VR;
use dcmlite_dictionary_std::tags;
use dcmlite_dictionary_std::uids;
use dcmlite_object::{from_reader, open_file, FileMetaTable, FileMetaTableBuilder};
use dcmlite_object::SpecificCharacterSet;

#[test]
fn minimal_file_with_preamble() {
    // 128 zero bytes, the magic code, and a single meta element
    let mut raw = vec![0u8; 128];
    raw.extend_from_slice(b"DICM");
    raw.extend_from_slice(&[0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00]);
    raw.extend_from_slice(&[0, 0, 0, 0]);

    let obj = from_reader(&raw[..]).unwrap();
    assert_eq!(obj.preamble(), &[0u8; 128]);
    assert_eq!(obj.meta().len(), 1);
    assert!(obj.dataset().is_empty());
    assert!(obj.pixel_data().is_empty());

    // the merged view resolves meta attributes as well
    let group_length = obj
        .element(tags::FILE_META_INFORMATION_GROUP_LENGTH)
        .unwrap();
    assert_eq!(group_length.vr(), VR::UL);
    assert_eq!(group_length.uint32().unwrap(), 0);
}

#[test]
fn implicit_stream_without_preamble() {
    // no preamble and no meta group; implicit VR little endian
    let mut raw = vec![0x10, 0x00, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00];
    raw.extend_from_slice(b"Smith^J ");

    let obj = from_reader(&raw[..]).unwrap();
    assert_eq!(obj.preamble(), &[0u8; 128]);
    assert!(obj.meta().is_empty());

    let elem = obj.element(tags::PATIENT_NAME).unwrap();
    // the VR comes from the dictionary
    assert_eq!(elem.vr(), VR::PN);
    // the trailing pad byte is stripped and the length decremented
    assert_eq!(elem.len().get(), Some(7));
    assert_eq!(elem.string().unwrap(), "Smith^J");
}

#[test]
fn latin1_text_is_reencoded_to_utf8() {
    // explicit VR little endian with an ISO_IR 100 character set
    let mut raw = vec![0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x0A, 0x00];
    raw.extend_from_slice(b"ISO_IR 100");
    raw.extend_from_slice(&[0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x06, 0x00]);
    raw.extend_from_slice(&[0xC4, 0x6F, 0x65, 0x20, 0x20, 0x20]);

    let obj = from_reader(&raw[..]).unwrap();
    assert_eq!(obj.character_set(), SpecificCharacterSet::ISO_IR_100);

    let elem = obj.element(tags::PATIENT_NAME).unwrap();
    assert!(std::str::from_utf8(elem.data()).is_ok());
    assert_eq!(elem.string().unwrap(), "Äoe");
}

#[test]
fn nested_sequence_text_is_reencoded() {
    let mut raw = vec![0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x0A, 0x00];
    raw.extend_from_slice(b"ISO_IR 100");
    // (0040,0275) SQ, undefined length, one item holding a PN element
    raw.extend_from_slice(&[
        0x40, 0x00, 0x75, 0x02, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ]);
    raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF]);
    raw.extend_from_slice(&[0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x04, 0x00]);
    raw.extend_from_slice(&[0xC4, 0x6F, 0x65, 0x20]);
    raw.extend_from_slice(&[0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00]);
    raw.extend_from_slice(&[0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00]);

    let obj = from_reader(&raw[..]).unwrap();
    let seq = obj.element(tags::REQUEST_ATTRIBUTES_SEQUENCE).unwrap();
    let inner = seq.items()[0]
        .dataset()
        .unwrap()
        .get(tags::PATIENT_NAME)
        .unwrap();
    assert_eq!(inner.string().unwrap(), "Äoe");
}

#[test]
fn sequence_with_two_items() {
    let mut raw = vec![
        0x40, 0x00, 0x75, 0x02, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ];
    for _ in 0..2 {
        raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF]);
        raw.extend_from_slice(&[0x40, 0x00, 0x40, 0xA0, b'C', b'S', 0x04, 0x00]);
        raw.extend_from_slice(b"TEXT");
        raw.extend_from_slice(&[0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00]);
    }
    raw.extend_from_slice(&[0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00]);

    let obj = from_reader(&raw[..]).unwrap();
    let seq = obj.element(tags::REQUEST_ATTRIBUTES_SEQUENCE).unwrap();
    assert_eq!(seq.vr(), VR::SQ);
    assert_eq!(seq.items().len(), 2);
    for item in seq.items() {
        let dataset = item.dataset().unwrap();
        assert_eq!(dataset.len(), 1);
        let value_type = dataset.get(tags::VALUE_TYPE).unwrap();
        assert_eq!(value_type.string().unwrap(), "TEXT");
    }
}

#[test]
fn encapsulated_pixel_data_frames() {
    // (7FE0,0010) OB with undefined length:
    // basic offset table [0, 4], then two 4-byte fragments
    let mut raw = vec![
        0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
    ];
    raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0x08, 0x00, 0x00, 0x00]);
    raw.extend_from_slice(&0u32.to_le_bytes());
    raw.extend_from_slice(&4u32.to_le_bytes());
    raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00]);
    raw.extend_from_slice(b"AAAA");
    raw.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00]);
    raw.extend_from_slice(b"BBBB");
    raw.extend_from_slice(&[0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00]);

    let obj = from_reader(&raw[..]).unwrap();
    // pixel data is routed to the frame list, not the data set
    assert!(obj.get_element(tags::PIXEL_DATA).is_none());
    let pixel_data = obj.pixel_data();
    assert_eq!(pixel_data.num_frames(), 2);
    assert_eq!(pixel_data.frame(0).unwrap(), b"AAAA");
    assert_eq!(pixel_data.frame(1).unwrap(), b"BBBB");
}

#[test]
fn big_endian_stream_is_detected() {
    // explicit VR big endian, starting at the pixel data element
    let mut raw = vec![0x7F, 0xE0, 0x00, 0x10, b'O', b'W', 0x00, 0x00];
    raw.extend_from_slice(&4u32.to_be_bytes());
    raw.extend_from_slice(&[1, 2, 3, 4]);

    let obj = from_reader(&raw[..]).unwrap();
    assert!(obj.dataset().is_empty());
    assert_eq!(obj.pixel_data().num_frames(), 1);
    assert_eq!(obj.pixel_data().frame(0).unwrap(), &[1, 2, 3, 4]);
}

#[test]
fn truncated_element_reports_failure() {
    // implicit VR element declaring 32 bytes with only one present
    let raw = vec![
        0x10, 0x00, 0x10, 0x00, 0x20, 0x00, 0x00, 0x00, b'A',
    ];
    assert!(from_reader(&raw[..]).is_err());
}

#[test]
fn synthetic_meta_writer_round_trip() {
    let table = FileMetaTableBuilder::new()
        .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
        .media_storage_sop_instance_uid("1.2.3.4")
        .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
        .build()
        .unwrap();
    let mut out = Vec::new();
    table.write(&mut out).unwrap();
    // a small data set in the declared transfer syntax
    out.extend_from_slice(&[0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00]);
    out.extend_from_slice(b"OT");

    let obj = from_reader(&out[..]).unwrap();
    assert_eq!(obj.meta().len(), 7);
    assert_eq!(obj.element(tags::MODALITY).unwrap().string().unwrap(), "OT");

    let decoded = FileMetaTable::from_dataset(obj.meta()).unwrap();
    assert_eq!(decoded.transfer_syntax(), uids::EXPLICIT_VR_LITTLE_ENDIAN);
    assert_eq!(
        decoded.information_group_length,
        table.information_group_length
    );
    assert_eq!(
        decoded.media_storage_sop_instance_uid,
        table.media_storage_sop_instance_uid
    );
}

#[test]
fn open_file_reads_from_path() {
    let table = FileMetaTableBuilder::new()
        .media_storage_sop_class_uid(uids::SECONDARY_CAPTURE_IMAGE_STORAGE)
        .media_storage_sop_instance_uid("1.2.3.4.5")
        .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
        .build()
        .unwrap();
    let mut contents = Vec::new();
    table.write(&mut contents).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("synthetic.dcm");
    std::fs::write(&path, &contents).unwrap();

    let obj = open_file(&path).unwrap();
    assert_eq!(obj.meta().len(), 7);
    assert!(obj.dataset().is_empty());

    assert!(open_file(dir.path().join("missing.dcm")).is_err());
}
