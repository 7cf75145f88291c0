//! Face tables and the die/face image lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{Die, Face};
use crate::error::{FarhomeError, FarhomeResult};

/// Every Farhome die has six faces.
pub const FACES_PER_DIE: usize = 6;

type FaceTable = [Face; FACES_PER_DIE];

const HERO: FaceTable = [
    Face::Success,
    Face::Success,
    Face::DoubleSuccess,
    Face::DoubleSuccess,
    Face::DoubleSuccess,
    Face::CriticalSuccess,
];

const SUPERIOR: FaceTable = [
    Face::Blank,
    Face::Success,
    Face::Success,
    Face::DoubleSuccess,
    Face::DoubleSuccess,
    Face::CriticalSuccess,
];

const ENHANCED: FaceTable = [
    Face::Blank,
    Face::Blank,
    Face::Success,
    Face::Success,
    Face::DoubleSuccess,
    Face::CriticalSuccess,
];

const NORMAL: FaceTable = [
    Face::Failure,
    Face::Blank,
    Face::Blank,
    Face::Success,
    Face::Success,
    Face::CriticalSuccess,
];

const BAD: FaceTable = [
    Face::CriticalFailure,
    Face::Failure,
    Face::Failure,
    Face::Blank,
    Face::Blank,
    Face::Success,
];

const TERRIBLE: FaceTable = [
    Face::CriticalFailure,
    Face::DoubleFailure,
    Face::Failure,
    Face::Failure,
    Face::Blank,
    Face::Blank,
];

const SUPERIOR_DEFENSE: FaceTable = [
    Face::Blank,
    Face::Defense,
    Face::Defense,
    Face::DoubleDefense,
    Face::DoubleDefense,
    Face::CriticalDefense,
];

const DEFENSE: FaceTable = [
    Face::Blank,
    Face::Blank,
    Face::Defense,
    Face::Defense,
    Face::DoubleDefense,
    Face::CriticalDefense,
];

const GUARANTEED_WOUND: FaceTable = [Face::Wound; FACES_PER_DIE];

const WOUND: FaceTable = [
    Face::Blank,
    Face::Blank,
    Face::Blank,
    Face::Wound,
    Face::Wound,
    Face::Wound,
];

/// The six faces of a die, indexed by rolled value minus one.
pub fn face_table(die: Die) -> &'static FaceTable {
    match die {
        Die::Hero => &HERO,
        Die::Superior => &SUPERIOR,
        Die::Enhanced => &ENHANCED,
        Die::Normal => &NORMAL,
        Die::Bad => &BAD,
        Die::Terrible => &TERRIBLE,
        Die::SuperiorDefense => &SUPERIOR_DEFENSE,
        Die::Defense => &DEFENSE,
        Die::GuaranteedWound => &GUARANTEED_WOUND,
        Die::Wound => &WOUND,
    }
}

/// Image names keyed by die, then by face.
///
/// Only faces that actually appear on a die have an entry.
static IMAGES: LazyLock<HashMap<Die, HashMap<Face, String>>> = LazyLock::new(|| {
    Die::ALL
        .into_iter()
        .map(|die| {
            let faces: HashMap<Face, String> = face_table(die)
                .iter()
                .map(|&face| (face, format!("{}-{}.webp", die.id(), face.id())))
                .collect();
            (die, faces)
        })
        .collect()
});

/// Resolve the image name for a face on a die.
pub fn image_name(die: Die, face: Face) -> FarhomeResult<&'static str> {
    IMAGES
        .get(&die)
        .and_then(|faces| faces.get(&face))
        .map(String::as_str)
        .ok_or(FarhomeError::UnknownImage { die, face })
}
