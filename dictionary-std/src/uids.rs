//! UID declarations.
// Automatically generated. Edit at your own risk.

use dcmlite_core::dictionary::{UidDictionaryEntryRef, UidType};

/// SOP Class: Verification SOP Class
pub const VERIFICATION: &str = "1.2.840.10008.1.1";
/// Transfer Syntax: Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Transfer Syntax: Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Transfer Syntax: Encapsulated Uncompressed Explicit VR Little Endian
pub const ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.98";
/// Transfer Syntax: Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Transfer Syntax: Explicit VR Big Endian (Retired)
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// Transfer Syntax: JPEG Baseline (Process 1)
pub const JPEG_BASELINE8_BIT: &str = "1.2.840.10008.1.2.4.50";
/// Transfer Syntax: JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED12_BIT: &str = "1.2.840.10008.1.2.4.51";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS: &str = "1.2.840.10008.1.2.4.57";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14, SV1)
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
/// Transfer Syntax: JPEG-LS Lossless Image Compression
pub const JPEGLS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
/// Transfer Syntax: JPEG-LS Lossy (Near-Lossless) Image Compression
pub const JPEGLS_NEAR_LOSSLESS: &str = "1.2.840.10008.1.2.4.81";
/// Transfer Syntax: JPEG 2000 Image Compression (Lossless Only)
pub const JPEG2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
/// Transfer Syntax: JPEG 2000 Image Compression
pub const JPEG2000: &str = "1.2.840.10008.1.2.4.91";
/// Transfer Syntax: RLE Lossless
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
/// SOP Class: Media Storage Directory Storage
pub const MEDIA_STORAGE_DIRECTORY_STORAGE: &str = "1.2.840.10008.1.3.10";
/// Coding Scheme: DICOM Controlled Terminology
pub const DICOM_CONTROLLED_TERMINOLOGY: &str = "1.2.840.10008.2.16.4";
/// SOP Class: Computed Radiography Image Storage
pub const COMPUTED_RADIOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.1";
/// SOP Class: Digital X-Ray Image Storage - For Presentation
pub const DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.1";
/// SOP Class: CT Image Storage
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
/// SOP Class: MR Image Storage
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
/// SOP Class: Enhanced MR Image Storage
pub const ENHANCED_MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4.1";
/// SOP Class: Ultrasound Image Storage
pub const ULTRASOUND_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.6.1";
/// SOP Class: Secondary Capture Image Storage
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";
/// SOP Class: Nuclear Medicine Image Storage
pub const NUCLEAR_MEDICINE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.20";
/// SOP Class: Basic Text SR Storage
pub const BASIC_TEXT_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.11";
/// SOP Class: Enhanced SR Storage
pub const ENHANCED_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.22";
/// SOP Class: Comprehensive SR Storage
pub const COMPREHENSIVE_SR_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.88.33";
/// SOP Class: Encapsulated PDF Storage
pub const ENCAPSULATED_PDF_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.104.1";
/// SOP Class: Positron Emission Tomography Image Storage
pub const POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.128";
/// SOP Class: RT Image Storage
pub const RT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.481.1";

#[rustfmt::skip]
pub(crate) const UID_ENTRIES: &[UidDictionaryEntryRef<'static>] = &[
    UidDictionaryEntryRef::new(VERIFICATION, "Verification SOP Class", "Verification", UidType::SopClass, false),
    UidDictionaryEntryRef::new(IMPLICIT_VR_LITTLE_ENDIAN, "Implicit VR Little Endian: Default Transfer Syntax for DICOM", "ImplicitVRLittleEndian", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(EXPLICIT_VR_LITTLE_ENDIAN, "Explicit VR Little Endian", "ExplicitVRLittleEndian", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN, "Encapsulated Uncompressed Explicit VR Little Endian", "EncapsulatedUncompressedExplicitVRLittleEndian", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN, "Deflated Explicit VR Little Endian", "DeflatedExplicitVRLittleEndian", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(EXPLICIT_VR_BIG_ENDIAN, "Explicit VR Big Endian", "ExplicitVRBigEndian", UidType::TransferSyntax, true),
    UidDictionaryEntryRef::new(JPEG_BASELINE8_BIT, "JPEG Baseline (Process 1)", "JPEGBaseline8Bit", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG_EXTENDED12_BIT, "JPEG Extended (Process 2 & 4)", "JPEGExtended12Bit", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG_LOSSLESS, "JPEG Lossless, Non-Hierarchical (Process 14)", "JPEGLossless", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG_LOSSLESS_SV1, "JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1])", "JPEGLosslessSV1", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEGLS_LOSSLESS, "JPEG-LS Lossless Image Compression", "JPEGLSLossless", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEGLS_NEAR_LOSSLESS, "JPEG-LS Lossy (Near-Lossless) Image Compression", "JPEGLSNearLossless", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG2000_LOSSLESS, "JPEG 2000 Image Compression (Lossless Only)", "JPEG2000Lossless", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(JPEG2000, "JPEG 2000 Image Compression", "JPEG2000", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(RLE_LOSSLESS, "RLE Lossless", "RLELossless", UidType::TransferSyntax, false),
    UidDictionaryEntryRef::new(MEDIA_STORAGE_DIRECTORY_STORAGE, "Media Storage Directory Storage", "MediaStorageDirectoryStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DICOM_CONTROLLED_TERMINOLOGY, "DICOM Controlled Terminology", "DCM", UidType::CodingScheme, false),
    UidDictionaryEntryRef::new(COMPUTED_RADIOGRAPHY_IMAGE_STORAGE, "Computed Radiography Image Storage", "ComputedRadiographyImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION, "Digital X-Ray Image Storage - For Presentation", "DigitalXRayImageStorageForPresentation", UidType::SopClass, false),
    UidDictionaryEntryRef::new(CT_IMAGE_STORAGE, "CT Image Storage", "CTImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(MR_IMAGE_STORAGE, "MR Image Storage", "MRImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_MR_IMAGE_STORAGE, "Enhanced MR Image Storage", "EnhancedMRImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ULTRASOUND_IMAGE_STORAGE, "Ultrasound Image Storage", "UltrasoundImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(SECONDARY_CAPTURE_IMAGE_STORAGE, "Secondary Capture Image Storage", "SecondaryCaptureImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(NUCLEAR_MEDICINE_IMAGE_STORAGE, "Nuclear Medicine Image Storage", "NuclearMedicineImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(BASIC_TEXT_SR_STORAGE, "Basic Text SR Storage", "BasicTextSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENHANCED_SR_STORAGE, "Enhanced SR Storage", "EnhancedSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(COMPREHENSIVE_SR_STORAGE, "Comprehensive SR Storage", "ComprehensiveSRStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(ENCAPSULATED_PDF_STORAGE, "Encapsulated PDF Storage", "EncapsulatedPDFStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE, "Positron Emission Tomography Image Storage", "PositronEmissionTomographyImageStorage", UidType::SopClass, false),
    UidDictionaryEntryRef::new(RT_IMAGE_STORAGE, "RT Image Storage", "RTImageStorage", UidType::SopClass, false),
];
