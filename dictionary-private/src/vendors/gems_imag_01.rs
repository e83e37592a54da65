//! Private attributes of GE Medical Systems image data.
// Automatically generated. Edit at your own risk.

use crate::entry::PrivateDictionaryEntryRef;

/// Private creator identifier
pub const PRIVATE_CREATOR: &str = "GEMS_IMAG_01";

/// Image Archive Flag
#[rustfmt::skip]
pub const IMAGE_ARCHIVE_FLAG: &str = "0027xx06";
/// Scout Type
#[rustfmt::skip]
pub const SCOUT_TYPE: &str = "0027xx10";
/// Vma Mamp
#[rustfmt::skip]
pub const VMA_MAMP: &str = "0027xx1C";
/// Vma Phase
#[rustfmt::skip]
pub const VMA_PHASE: &str = "0027xx1D";
/// Vma Mod
#[rustfmt::skip]
pub const VMA_MOD: &str = "0027xx1E";
/// Vma Clip or Noise Index by 10
#[rustfmt::skip]
pub const VMA_CLIP_OR_NOISE_INDEX_BY_10: &str = "0027xx1F";
/// Smart Scan On Off Flag
#[rustfmt::skip]
pub const SMART_SCAN_ON_OFF_FLAG: &str = "0027xx20";
/// Foreign Image Revision
#[rustfmt::skip]
pub const FOREIGN_IMAGE_REVISION: &str = "0027xx30";
/// Imaging Mode
#[rustfmt::skip]
pub const IMAGING_MODE: &str = "0027xx31";
/// Pulse Sequence
#[rustfmt::skip]
pub const PULSE_SEQUENCE: &str = "0027xx32";
/// Imaging Options
#[rustfmt::skip]
pub const IMAGING_OPTIONS: &str = "0027xx33";
/// Plane Type
#[rustfmt::skip]
pub const PLANE_TYPE: &str = "0027xx35";
/// Oblique Plane
#[rustfmt::skip]
pub const OBLIQUE_PLANE: &str = "0027xx36";
/// RAS Letter Of Image Location
#[rustfmt::skip]
pub const RAS_LETTER_OF_IMAGE_LOCATION: &str = "0027xx40";
/// Image Location
#[rustfmt::skip]
pub const IMAGE_LOCATION: &str = "0027xx41";
/// Center R Coord Of Plane Image
#[rustfmt::skip]
pub const CENTER_R_COORD_OF_PLANE_IMAGE: &str = "0027xx42";
/// Center A Coord Of Plane Image
#[rustfmt::skip]
pub const CENTER_A_COORD_OF_PLANE_IMAGE: &str = "0027xx43";
/// Center S Coord Of Plane Image
#[rustfmt::skip]
pub const CENTER_S_COORD_OF_PLANE_IMAGE: &str = "0027xx44";
/// Normal R Coord
#[rustfmt::skip]
pub const NORMAL_R_COORD: &str = "0027xx45";
/// Normal A Coord
#[rustfmt::skip]
pub const NORMAL_A_COORD: &str = "0027xx46";
/// Normal S Coord
#[rustfmt::skip]
pub const NORMAL_S_COORD: &str = "0027xx47";
/// R Coord Of Top Right Corner
#[rustfmt::skip]
pub const R_COORD_OF_TOP_RIGHT_CORNER: &str = "0027xx48";
/// A Coord Of Top Right Corner
#[rustfmt::skip]
pub const A_COORD_OF_TOP_RIGHT_CORNER: &str = "0027xx49";
/// S Coord Of Top Right Corner
#[rustfmt::skip]
pub const S_COORD_OF_TOP_RIGHT_CORNER: &str = "0027xx4A";
/// R Coord Of Bottom Right Corner
#[rustfmt::skip]
pub const R_COORD_OF_BOTTOM_RIGHT_CORNER: &str = "0027xx4B";
/// A Coord Of Bottom Right Corner
#[rustfmt::skip]
pub const A_COORD_OF_BOTTOM_RIGHT_CORNER: &str = "0027xx4C";
/// S Coord Of Bottom Right Corner
#[rustfmt::skip]
pub const S_COORD_OF_BOTTOM_RIGHT_CORNER: &str = "0027xx4D";
/// Table Start Location (Scout)
#[rustfmt::skip]
pub const TABLE_START_LOCATION_SCOUT: &str = "0027xx50";
/// Table End Location (Scout)
#[rustfmt::skip]
pub const TABLE_END_LOCATION_SCOUT: &str = "0027xx51";
/// RAS Letter For Side Of Image
#[rustfmt::skip]
pub const RAS_LETTER_FOR_SIDE_OF_IMAGE: &str = "0027xx52";
/// RAS Letter For Anterior Posterior
#[rustfmt::skip]
pub const RAS_LETTER_FOR_ANTERIOR_POSTERIOR: &str = "0027xx53";
/// RAS Letter For Scout Start Loc
#[rustfmt::skip]
pub const RAS_LETTER_FOR_SCOUT_START_LOC: &str = "0027xx54";
/// RAS Letter For Scout End Loc
#[rustfmt::skip]
pub const RAS_LETTER_FOR_SCOUT_END_LOC: &str = "0027xx55";
/// Image Dimension X
#[rustfmt::skip]
pub const IMAGE_DIMENSION_X: &str = "0027xx60";
/// Image Dimension Y
#[rustfmt::skip]
pub const IMAGE_DIMENSION_Y: &str = "0027xx61";
/// Number Of Excitations
#[rustfmt::skip]
pub const NUMBER_OF_EXCITATIONS: &str = "0027xx62";

type E = PrivateDictionaryEntryRef<'static>;

#[rustfmt::skip]
pub const ENTRIES: &[E] = &[
    E { pattern: "0027xx06", name: "Image Archive Flag" },
    E { pattern: "0027xx10", name: "Scout Type" },
    E { pattern: "0027xx1C", name: "Vma Mamp" },
    E { pattern: "0027xx1D", name: "Vma Phase" },
    E { pattern: "0027xx1E", name: "Vma Mod" },
    E { pattern: "0027xx1F", name: "Vma Clip or Noise Index by 10" },
    E { pattern: "0027xx20", name: "Smart Scan On Off Flag" },
    E { pattern: "0027xx30", name: "Foreign Image Revision" },
    E { pattern: "0027xx31", name: "Imaging Mode" },
    E { pattern: "0027xx32", name: "Pulse Sequence" },
    E { pattern: "0027xx33", name: "Imaging Options" },
    E { pattern: "0027xx35", name: "Plane Type" },
    E { pattern: "0027xx36", name: "Oblique Plane" },
    E { pattern: "0027xx40", name: "RAS Letter Of Image Location" },
    E { pattern: "0027xx41", name: "Image Location" },
    E { pattern: "0027xx42", name: "Center R Coord Of Plane Image" },
    E { pattern: "0027xx43", name: "Center A Coord Of Plane Image" },
    E { pattern: "0027xx44", name: "Center S Coord Of Plane Image" },
    E { pattern: "0027xx45", name: "Normal R Coord" },
    E { pattern: "0027xx46", name: "Normal A Coord" },
    E { pattern: "0027xx47", name: "Normal S Coord" },
    E { pattern: "0027xx48", name: "R Coord Of Top Right Corner" },
    E { pattern: "0027xx49", name: "A Coord Of Top Right Corner" },
    E { pattern: "0027xx4A", name: "S Coord Of Top Right Corner" },
    E { pattern: "0027xx4B", name: "R Coord Of Bottom Right Corner" },
    E { pattern: "0027xx4C", name: "A Coord Of Bottom Right Corner" },
    E { pattern: "0027xx4D", name: "S Coord Of Bottom Right Corner" },
    E { pattern: "0027xx50", name: "Table Start Location (Scout)" },
    E { pattern: "0027xx51", name: "Table End Location (Scout)" },
    E { pattern: "0027xx52", name: "RAS Letter For Side Of Image" },
    E { pattern: "0027xx53", name: "RAS Letter For Anterior Posterior" },
    E { pattern: "0027xx54", name: "RAS Letter For Scout Start Loc" },
    E { pattern: "0027xx55", name: "RAS Letter For Scout End Loc" },
    E { pattern: "0027xx60", name: "Image Dimension X" },
    E { pattern: "0027xx61", name: "Image Dimension Y" },
    E { pattern: "0027xx62", name: "Number Of Excitations" },
];
