//! Data element dictionary entry declarations.
// Automatically generated. Edit at your own risk.

use dcmlite_core::dictionary::DataDictionaryEntryRef;
use dcmlite_core::{Tag, VR};

const fn entry(
    tag: Tag,
    alias: &'static str,
    name: &'static str,
    vr: VR,
    vm: &'static str,
    retired: bool,
) -> DataDictionaryEntryRef<'static> {
    DataDictionaryEntryRef {
        tag,
        alias,
        name,
        vr,
        vm,
        retired,
    }
}

#[rustfmt::skip]
pub(crate) const ENTRIES: &[DataDictionaryEntryRef<'static>] = &[
    entry(Tag(0x0002, 0x0000), "FileMetaInformationGroupLength", "File Meta Information Group Length", VR::UL, "1", false),
    entry(Tag(0x0002, 0x0001), "FileMetaInformationVersion", "File Meta Information Version", VR::OB, "1", false),
    entry(Tag(0x0002, 0x0002), "MediaStorageSOPClassUID", "Media Storage SOP Class UID", VR::UI, "1", false),
    entry(Tag(0x0002, 0x0003), "MediaStorageSOPInstanceUID", "Media Storage SOP Instance UID", VR::UI, "1", false),
    entry(Tag(0x0002, 0x0010), "TransferSyntaxUID", "Transfer Syntax UID", VR::UI, "1", false),
    entry(Tag(0x0002, 0x0012), "ImplementationClassUID", "Implementation Class UID", VR::UI, "1", false),
    entry(Tag(0x0002, 0x0013), "ImplementationVersionName", "Implementation Version Name", VR::SH, "1", false),
    entry(Tag(0x0002, 0x0016), "SourceApplicationEntityTitle", "Source Application Entity Title", VR::AE, "1", false),
    entry(Tag(0x0002, 0x0017), "SendingApplicationEntityTitle", "Sending Application Entity Title", VR::AE, "1", false),
    entry(Tag(0x0002, 0x0018), "ReceivingApplicationEntityTitle", "Receiving Application Entity Title", VR::AE, "1", false),
    entry(Tag(0x0002, 0x0100), "PrivateInformationCreatorUID", "Private Information Creator UID", VR::UI, "1", false),
    entry(Tag(0x0002, 0x0102), "PrivateInformation", "Private Information", VR::OB, "1", false),
    entry(Tag(0x0008, 0x0001), "LengthToEnd", "Length to End", VR::UL, "1", true),
    entry(Tag(0x0008, 0x0005), "SpecificCharacterSet", "Specific Character Set", VR::CS, "1-n", false),
    entry(Tag(0x0008, 0x0008), "ImageType", "Image Type", VR::CS, "2-n", false),
    entry(Tag(0x0008, 0x0010), "RecognitionCode", "Recognition Code", VR::SH, "1", true),
    entry(Tag(0x0008, 0x0012), "InstanceCreationDate", "Instance Creation Date", VR::DA, "1", false),
    entry(Tag(0x0008, 0x0013), "InstanceCreationTime", "Instance Creation Time", VR::TM, "1", false),
    entry(Tag(0x0008, 0x0014), "InstanceCreatorUID", "Instance Creator UID", VR::UI, "1", false),
    entry(Tag(0x0008, 0x0016), "SOPClassUID", "SOP Class UID", VR::UI, "1", false),
    entry(Tag(0x0008, 0x0018), "SOPInstanceUID", "SOP Instance UID", VR::UI, "1", false),
    entry(Tag(0x0008, 0x0020), "StudyDate", "Study Date", VR::DA, "1", false),
    entry(Tag(0x0008, 0x0021), "SeriesDate", "Series Date", VR::DA, "1", false),
    entry(Tag(0x0008, 0x0022), "AcquisitionDate", "Acquisition Date", VR::DA, "1", false),
    entry(Tag(0x0008, 0x0023), "ContentDate", "Content Date", VR::DA, "1", false),
    entry(Tag(0x0008, 0x0030), "StudyTime", "Study Time", VR::TM, "1", false),
    entry(Tag(0x0008, 0x0031), "SeriesTime", "Series Time", VR::TM, "1", false),
    entry(Tag(0x0008, 0x0032), "AcquisitionTime", "Acquisition Time", VR::TM, "1", false),
    entry(Tag(0x0008, 0x0033), "ContentTime", "Content Time", VR::TM, "1", false),
    entry(Tag(0x0008, 0x0050), "AccessionNumber", "Accession Number", VR::SH, "1", false),
    entry(Tag(0x0008, 0x0060), "Modality", "Modality", VR::CS, "1", false),
    entry(Tag(0x0008, 0x0061), "ModalitiesInStudy", "Modalities in Study", VR::CS, "1-n", false),
    entry(Tag(0x0008, 0x0064), "ConversionType", "Conversion Type", VR::CS, "1", false),
    entry(Tag(0x0008, 0x0070), "Manufacturer", "Manufacturer", VR::LO, "1", false),
    entry(Tag(0x0008, 0x0080), "InstitutionName", "Institution Name", VR::LO, "1", false),
    entry(Tag(0x0008, 0x0081), "InstitutionAddress", "Institution Address", VR::ST, "1", false),
    entry(Tag(0x0008, 0x0090), "ReferringPhysicianName", "Referring Physician's Name", VR::PN, "1", false),
    entry(Tag(0x0008, 0x0100), "CodeValue", "Code Value", VR::SH, "1", false),
    entry(Tag(0x0008, 0x0102), "CodingSchemeDesignator", "Coding Scheme Designator", VR::SH, "1", false),
    entry(Tag(0x0008, 0x0104), "CodeMeaning", "Code Meaning", VR::LO, "1", false),
    entry(Tag(0x0008, 0x0201), "TimezoneOffsetFromUTC", "Timezone Offset From UTC", VR::SH, "1", false),
    entry(Tag(0x0008, 0x1010), "StationName", "Station Name", VR::SH, "1", false),
    entry(Tag(0x0008, 0x1030), "StudyDescription", "Study Description", VR::LO, "1", false),
    entry(Tag(0x0008, 0x103E), "SeriesDescription", "Series Description", VR::LO, "1", false),
    entry(Tag(0x0008, 0x1040), "InstitutionalDepartmentName", "Institutional Department Name", VR::LO, "1", false),
    entry(Tag(0x0008, 0x1048), "PhysiciansOfRecord", "Physician(s) of Record", VR::PN, "1-n", false),
    entry(Tag(0x0008, 0x1050), "PerformingPhysicianName", "Performing Physician's Name", VR::PN, "1-n", false),
    entry(Tag(0x0008, 0x1060), "NameOfPhysiciansReadingStudy", "Name of Physician(s) Reading Study", VR::PN, "1-n", false),
    entry(Tag(0x0008, 0x1070), "OperatorsName", "Operators' Name", VR::PN, "1-n", false),
    entry(Tag(0x0008, 0x1080), "AdmittingDiagnosesDescription", "Admitting Diagnoses Description", VR::LO, "1-n", false),
    entry(Tag(0x0008, 0x1090), "ManufacturerModelName", "Manufacturer's Model Name", VR::LO, "1", false),
    entry(Tag(0x0008, 0x1110), "ReferencedStudySequence", "Referenced Study Sequence", VR::SQ, "1", false),
    entry(Tag(0x0008, 0x1111), "ReferencedPerformedProcedureStepSequence", "Referenced Performed Procedure Step Sequence", VR::SQ, "1", false),
    entry(Tag(0x0008, 0x1115), "ReferencedSeriesSequence", "Referenced Series Sequence", VR::SQ, "1", false),
    entry(Tag(0x0008, 0x1120), "ReferencedPatientSequence", "Referenced Patient Sequence", VR::SQ, "1", false),
    entry(Tag(0x0008, 0x1125), "ReferencedVisitSequence", "Referenced Visit Sequence", VR::SQ, "1", false),
    entry(Tag(0x0008, 0x1140), "ReferencedImageSequence", "Referenced Image Sequence", VR::SQ, "1", false),
    entry(Tag(0x0008, 0x1150), "ReferencedSOPClassUID", "Referenced SOP Class UID", VR::UI, "1", false),
    entry(Tag(0x0008, 0x1155), "ReferencedSOPInstanceUID", "Referenced SOP Instance UID", VR::UI, "1", false),
    entry(Tag(0x0008, 0x1160), "ReferencedFrameNumber", "Referenced Frame Number", VR::IS, "1-n", false),
    entry(Tag(0x0008, 0x2111), "DerivationDescription", "Derivation Description", VR::ST, "1", false),
    entry(Tag(0x0008, 0x2112), "SourceImageSequence", "Source Image Sequence", VR::SQ, "1", false),
    entry(Tag(0x0008, 0x2218), "AnatomicRegionSequence", "Anatomic Region Sequence", VR::SQ, "1", false),
    entry(Tag(0x0008, 0x9215), "DerivationCodeSequence", "Derivation Code Sequence", VR::SQ, "1", false),
    entry(Tag(0x0010, 0x0010), "PatientName", "Patient's Name", VR::PN, "1", false),
    entry(Tag(0x0010, 0x0020), "PatientID", "Patient ID", VR::LO, "1", false),
    entry(Tag(0x0010, 0x0021), "IssuerOfPatientID", "Issuer of Patient ID", VR::LO, "1", false),
    entry(Tag(0x0010, 0x0030), "PatientBirthDate", "Patient's Birth Date", VR::DA, "1", false),
    entry(Tag(0x0010, 0x0032), "PatientBirthTime", "Patient's Birth Time", VR::TM, "1", false),
    entry(Tag(0x0010, 0x0040), "PatientSex", "Patient's Sex", VR::CS, "1", false),
    entry(Tag(0x0010, 0x1000), "OtherPatientIDs", "Other Patient IDs", VR::LO, "1-n", true),
    entry(Tag(0x0010, 0x1001), "OtherPatientNames", "Other Patient Names", VR::PN, "1-n", false),
    entry(Tag(0x0010, 0x1010), "PatientAge", "Patient's Age", VR::AS, "1", false),
    entry(Tag(0x0010, 0x1020), "PatientSize", "Patient's Size", VR::DS, "1", false),
    entry(Tag(0x0010, 0x1030), "PatientWeight", "Patient's Weight", VR::DS, "1", false),
    entry(Tag(0x0010, 0x1040), "PatientAddress", "Patient's Address", VR::LO, "1", false),
    entry(Tag(0x0010, 0x2154), "PatientTelephoneNumbers", "Patient's Telephone Numbers", VR::SH, "1-n", false),
    entry(Tag(0x0010, 0x2160), "EthnicGroup", "Ethnic Group", VR::SH, "1", false),
    entry(Tag(0x0010, 0x21B0), "AdditionalPatientHistory", "Additional Patient History", VR::LT, "1", false),
    entry(Tag(0x0010, 0x4000), "PatientComments", "Patient Comments", VR::LT, "1", false),
    entry(Tag(0x0018, 0x0010), "ContrastBolusAgent", "Contrast/Bolus Agent", VR::LO, "1", false),
    entry(Tag(0x0018, 0x0015), "BodyPartExamined", "Body Part Examined", VR::CS, "1", false),
    entry(Tag(0x0018, 0x0020), "ScanningSequence", "Scanning Sequence", VR::CS, "1-n", false),
    entry(Tag(0x0018, 0x0021), "SequenceVariant", "Sequence Variant", VR::CS, "1-n", false),
    entry(Tag(0x0018, 0x0022), "ScanOptions", "Scan Options", VR::CS, "1-n", false),
    entry(Tag(0x0018, 0x0023), "MRAcquisitionType", "MR Acquisition Type", VR::CS, "1", false),
    entry(Tag(0x0018, 0x0050), "SliceThickness", "Slice Thickness", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0060), "KVP", "KVP", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0080), "RepetitionTime", "Repetition Time", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0081), "EchoTime", "Echo Time", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0082), "InversionTime", "Inversion Time", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0083), "NumberOfAverages", "Number of Averages", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0084), "ImagingFrequency", "Imaging Frequency", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0085), "ImagedNucleus", "Imaged Nucleus", VR::SH, "1", false),
    entry(Tag(0x0018, 0x0086), "EchoNumbers", "Echo Number(s)", VR::IS, "1-n", false),
    entry(Tag(0x0018, 0x0087), "MagneticFieldStrength", "Magnetic Field Strength", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0088), "SpacingBetweenSlices", "Spacing Between Slices", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0089), "NumberOfPhaseEncodingSteps", "Number of Phase Encoding Steps", VR::IS, "1", false),
    entry(Tag(0x0018, 0x0091), "EchoTrainLength", "Echo Train Length", VR::IS, "1", false),
    entry(Tag(0x0018, 0x0093), "PercentSampling", "Percent Sampling", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0094), "PercentPhaseFieldOfView", "Percent Phase Field of View", VR::DS, "1", false),
    entry(Tag(0x0018, 0x0095), "PixelBandwidth", "Pixel Bandwidth", VR::DS, "1", false),
    entry(Tag(0x0018, 0x1000), "DeviceSerialNumber", "Device Serial Number", VR::LO, "1", false),
    entry(Tag(0x0018, 0x1020), "SoftwareVersions", "Software Versions", VR::LO, "1-n", false),
    entry(Tag(0x0018, 0x1030), "ProtocolName", "Protocol Name", VR::LO, "1", false),
    entry(Tag(0x0018, 0x1050), "SpatialResolution", "Spatial Resolution", VR::DS, "1", false),
    entry(Tag(0x0018, 0x1100), "ReconstructionDiameter", "Reconstruction Diameter", VR::DS, "1", false),
    entry(Tag(0x0018, 0x1110), "DistanceSourceToDetector", "Distance Source to Detector", VR::DS, "1", false),
    entry(Tag(0x0018, 0x1111), "DistanceSourceToPatient", "Distance Source to Patient", VR::DS, "1", false),
    entry(Tag(0x0018, 0x1120), "GantryDetectorTilt", "Gantry/Detector Tilt", VR::DS, "1", false),
    entry(Tag(0x0018, 0x1130), "TableHeight", "Table Height", VR::DS, "1", false),
    entry(Tag(0x0018, 0x1140), "RotationDirection", "Rotation Direction", VR::CS, "1", false),
    entry(Tag(0x0018, 0x1150), "ExposureTime", "Exposure Time", VR::IS, "1", false),
    entry(Tag(0x0018, 0x1151), "XRayTubeCurrent", "X-Ray Tube Current", VR::IS, "1", false),
    entry(Tag(0x0018, 0x1152), "Exposure", "Exposure", VR::IS, "1", false),
    entry(Tag(0x0018, 0x1160), "FilterType", "Filter Type", VR::SH, "1", false),
    entry(Tag(0x0018, 0x1170), "GeneratorPower", "Generator Power", VR::IS, "1", false),
    entry(Tag(0x0018, 0x1190), "FocalSpots", "Focal Spot(s)", VR::DS, "1-n", false),
    entry(Tag(0x0018, 0x1210), "ConvolutionKernel", "Convolution Kernel", VR::SH, "1-n", false),
    entry(Tag(0x0018, 0x5100), "PatientPosition", "Patient Position", VR::CS, "1", false),
    entry(Tag(0x0018, 0x5101), "ViewPosition", "View Position", VR::CS, "1", false),
    entry(Tag(0x0020, 0x000D), "StudyInstanceUID", "Study Instance UID", VR::UI, "1", false),
    entry(Tag(0x0020, 0x000E), "SeriesInstanceUID", "Series Instance UID", VR::UI, "1", false),
    entry(Tag(0x0020, 0x0010), "StudyID", "Study ID", VR::SH, "1", false),
    entry(Tag(0x0020, 0x0011), "SeriesNumber", "Series Number", VR::IS, "1", false),
    entry(Tag(0x0020, 0x0012), "AcquisitionNumber", "Acquisition Number", VR::IS, "1", false),
    entry(Tag(0x0020, 0x0013), "InstanceNumber", "Instance Number", VR::IS, "1", false),
    entry(Tag(0x0020, 0x0020), "PatientOrientation", "Patient Orientation", VR::CS, "2", false),
    entry(Tag(0x0020, 0x0032), "ImagePositionPatient", "Image Position (Patient)", VR::DS, "3", false),
    entry(Tag(0x0020, 0x0037), "ImageOrientationPatient", "Image Orientation (Patient)", VR::DS, "6", false),
    entry(Tag(0x0020, 0x0052), "FrameOfReferenceUID", "Frame of Reference UID", VR::UI, "1", false),
    entry(Tag(0x0020, 0x0060), "Laterality", "Laterality", VR::CS, "1", false),
    entry(Tag(0x0020, 0x1002), "ImagesInAcquisition", "Images in Acquisition", VR::IS, "1", false),
    entry(Tag(0x0020, 0x1040), "PositionReferenceIndicator", "Position Reference Indicator", VR::LO, "1", false),
    entry(Tag(0x0020, 0x1041), "SliceLocation", "Slice Location", VR::DS, "1", false),
    entry(Tag(0x0020, 0x4000), "ImageComments", "Image Comments", VR::LT, "1", false),
    entry(Tag(0x0028, 0x0002), "SamplesPerPixel", "Samples per Pixel", VR::US, "1", false),
    entry(Tag(0x0028, 0x0004), "PhotometricInterpretation", "Photometric Interpretation", VR::CS, "1", false),
    entry(Tag(0x0028, 0x0005), "ImageDimensions", "Image Dimensions", VR::US, "1", true),
    entry(Tag(0x0028, 0x0006), "PlanarConfiguration", "Planar Configuration", VR::US, "1", false),
    entry(Tag(0x0028, 0x0008), "NumberOfFrames", "Number of Frames", VR::IS, "1", false),
    entry(Tag(0x0028, 0x0009), "FrameIncrementPointer", "Frame Increment Pointer", VR::AT, "1-n", false),
    entry(Tag(0x0028, 0x0010), "Rows", "Rows", VR::US, "1", false),
    entry(Tag(0x0028, 0x0011), "Columns", "Columns", VR::US, "1", false),
    entry(Tag(0x0028, 0x0030), "PixelSpacing", "Pixel Spacing", VR::DS, "2", false),
    entry(Tag(0x0028, 0x0034), "PixelAspectRatio", "Pixel Aspect Ratio", VR::IS, "2", false),
    entry(Tag(0x0028, 0x0040), "ImageFormat", "Image Format", VR::CS, "1", true),
    entry(Tag(0x0028, 0x0100), "BitsAllocated", "Bits Allocated", VR::US, "1", false),
    entry(Tag(0x0028, 0x0101), "BitsStored", "Bits Stored", VR::US, "1", false),
    entry(Tag(0x0028, 0x0102), "HighBit", "High Bit", VR::US, "1", false),
    entry(Tag(0x0028, 0x0103), "PixelRepresentation", "Pixel Representation", VR::US, "1", false),
    entry(Tag(0x0028, 0x0106), "SmallestImagePixelValue", "Smallest Image Pixel Value", VR::US, "1", false),
    entry(Tag(0x0028, 0x0107), "LargestImagePixelValue", "Largest Image Pixel Value", VR::US, "1", false),
    entry(Tag(0x0028, 0x0120), "PixelPaddingValue", "Pixel Padding Value", VR::US, "1", false),
    entry(Tag(0x0028, 0x1050), "WindowCenter", "Window Center", VR::DS, "1-n", false),
    entry(Tag(0x0028, 0x1051), "WindowWidth", "Window Width", VR::DS, "1-n", false),
    entry(Tag(0x0028, 0x1052), "RescaleIntercept", "Rescale Intercept", VR::DS, "1", false),
    entry(Tag(0x0028, 0x1053), "RescaleSlope", "Rescale Slope", VR::DS, "1", false),
    entry(Tag(0x0028, 0x1054), "RescaleType", "Rescale Type", VR::LO, "1", false),
    entry(Tag(0x0028, 0x1055), "WindowCenterWidthExplanation", "Window Center & Width Explanation", VR::LO, "1-n", false),
    entry(Tag(0x0028, 0x2110), "LossyImageCompression", "Lossy Image Compression", VR::CS, "1", false),
    entry(Tag(0x0028, 0x2112), "LossyImageCompressionRatio", "Lossy Image Compression Ratio", VR::DS, "1-n", false),
    entry(Tag(0x0032, 0x000A), "StudyStatusID", "Study Status ID", VR::CS, "1", true),
    entry(Tag(0x0032, 0x1030), "ReasonForStudy", "Reason for Study", VR::LO, "1", true),
    entry(Tag(0x0032, 0x1032), "RequestingPhysician", "Requesting Physician", VR::PN, "1", false),
    entry(Tag(0x0032, 0x1033), "RequestingService", "Requesting Service", VR::LO, "1", false),
    entry(Tag(0x0032, 0x1060), "RequestedProcedureDescription", "Requested Procedure Description", VR::LO, "1", false),
    entry(Tag(0x0032, 0x1064), "RequestedProcedureCodeSequence", "Requested Procedure Code Sequence", VR::SQ, "1", false),
    entry(Tag(0x0032, 0x4000), "StudyComments", "Study Comments", VR::LT, "1", true),
    entry(Tag(0x0038, 0x0010), "AdmissionID", "Admission ID", VR::LO, "1", false),
    entry(Tag(0x0038, 0x0050), "SpecialNeeds", "Special Needs", VR::LO, "1", false),
    entry(Tag(0x0038, 0x0300), "CurrentPatientLocation", "Current Patient Location", VR::LO, "1", false),
    entry(Tag(0x0038, 0x0500), "PatientState", "Patient State", VR::LO, "1", false),
    entry(Tag(0x0040, 0x0001), "ScheduledStationAETitle", "Scheduled Station AE Title", VR::AE, "1-n", false),
    entry(Tag(0x0040, 0x0002), "ScheduledProcedureStepStartDate", "Scheduled Procedure Step Start Date", VR::DA, "1", false),
    entry(Tag(0x0040, 0x0003), "ScheduledProcedureStepStartTime", "Scheduled Procedure Step Start Time", VR::TM, "1", false),
    entry(Tag(0x0040, 0x0006), "ScheduledPerformingPhysicianName", "Scheduled Performing Physician's Name", VR::PN, "1", false),
    entry(Tag(0x0040, 0x0007), "ScheduledProcedureStepDescription", "Scheduled Procedure Step Description", VR::LO, "1", false),
    entry(Tag(0x0040, 0x0009), "ScheduledProcedureStepID", "Scheduled Procedure Step ID", VR::SH, "1", false),
    entry(Tag(0x0040, 0x0010), "ScheduledStationName", "Scheduled Station Name", VR::SH, "1-n", false),
    entry(Tag(0x0040, 0x0100), "ScheduledProcedureStepSequence", "Scheduled Procedure Step Sequence", VR::SQ, "1", false),
    entry(Tag(0x0040, 0x0244), "PerformedProcedureStepStartDate", "Performed Procedure Step Start Date", VR::DA, "1", false),
    entry(Tag(0x0040, 0x0245), "PerformedProcedureStepStartTime", "Performed Procedure Step Start Time", VR::TM, "1", false),
    entry(Tag(0x0040, 0x0253), "PerformedProcedureStepID", "Performed Procedure Step ID", VR::SH, "1", false),
    entry(Tag(0x0040, 0x0254), "PerformedProcedureStepDescription", "Performed Procedure Step Description", VR::LO, "1", false),
    entry(Tag(0x0040, 0x0260), "PerformedProtocolCodeSequence", "Performed Protocol Code Sequence", VR::SQ, "1", false),
    entry(Tag(0x0040, 0x0275), "RequestAttributesSequence", "Request Attributes Sequence", VR::SQ, "1", false),
    entry(Tag(0x0040, 0x1001), "RequestedProcedureID", "Requested Procedure ID", VR::SH, "1", false),
    entry(Tag(0x0040, 0xA010), "RelationshipType", "Relationship Type", VR::CS, "1", false),
    entry(Tag(0x0040, 0xA027), "VerifyingOrganization", "Verifying Organization", VR::LO, "1", false),
    entry(Tag(0x0040, 0xA040), "ValueType", "Value Type", VR::CS, "1", false),
    entry(Tag(0x0040, 0xA043), "ConceptNameCodeSequence", "Concept Name Code Sequence", VR::SQ, "1", false),
    entry(Tag(0x0040, 0xA050), "ContinuityOfContent", "Continuity Of Content", VR::CS, "1", false),
    entry(Tag(0x0040, 0xA120), "DateTime", "DateTime", VR::DT, "1", false),
    entry(Tag(0x0040, 0xA121), "Date", "Date", VR::DA, "1", false),
    entry(Tag(0x0040, 0xA122), "Time", "Time", VR::TM, "1", false),
    entry(Tag(0x0040, 0xA123), "PersonName", "Person Name", VR::PN, "1", false),
    entry(Tag(0x0040, 0xA160), "TextValue", "Text Value", VR::UT, "1", false),
    entry(Tag(0x0040, 0xA168), "ConceptCodeSequence", "Concept Code Sequence", VR::SQ, "1", false),
    entry(Tag(0x0040, 0xA730), "ContentSequence", "Content Sequence", VR::SQ, "1", false),
    entry(Tag(0x7FE0, 0x0008), "FloatPixelData", "Float Pixel Data", VR::OF, "1", false),
    entry(Tag(0x7FE0, 0x0009), "DoubleFloatPixelData", "Double Float Pixel Data", VR::OD, "1", false),
    entry(Tag(0x7FE0, 0x0010), "PixelData", "Pixel Data", VR::OW, "1", false),
];
