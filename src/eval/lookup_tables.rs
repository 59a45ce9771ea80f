use crate::domain::dice::Hand;
use crate::domain::die::{FACE_MAX, FACE_MIN};

/// Фиксированные очки комбинаций.
pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
pub const YAHTZEE_SCORE: u32 = 50;

/// Битовая маска выпавших граней.
///
/// Используем 6 бит: бит 0 = единица, бит 5 = шестёрка.
pub type FaceMask = u8;

/// Счётчики граней: индексы 1..=6, индекс 0 не используется.
pub type FaceCounts = [u8; 7];

/// Малые стриты (4 подряд). Рука подходит, если её маска – надмножество
/// хотя бы одной из масок.
pub const SMALL_STRAIGHT_MASKS: [FaceMask; 3] = [
    // 1234
    mask_from_faces(&[1, 2, 3, 4]),
    // 2345
    mask_from_faces(&[2, 3, 4, 5]),
    // 3456
    mask_from_faces(&[3, 4, 5, 6]),
];

/// Большие стриты (5 подряд). Маска руки должна совпасть в точности.
pub const LARGE_STRAIGHT_MASKS: [FaceMask; 2] = [
    // 12345
    mask_from_faces(&[1, 2, 3, 4, 5]),
    // 23456
    mask_from_faces(&[2, 3, 4, 5, 6]),
];

/// Получить битовую маску для одной грани.
pub fn face_to_bit(face: u8) -> FaceMask {
    1u8 << face.saturating_sub(FACE_MIN)
}

/// Построить маску из списка граней.
pub const fn mask_from_faces(faces: &[u8]) -> FaceMask {
    let mut mask: FaceMask = 0;
    let mut i = 0;
    while i < faces.len() {
        mask |= 1 << (faces[i] - 1);
        i += 1;
    }
    mask
}

pub fn face_mask(hand: &Hand) -> FaceMask {
    hand.iter().fold(0, |mask, &face| mask | face_to_bit(face))
}

pub fn count_faces(hand: &Hand) -> FaceCounts {
    let mut counts = [0u8; 7];
    for &face in hand.iter() {
        counts[face as usize] += 1;
    }
    counts
}

/// Паттерн повторов по убыванию: например [5], [4,1], [3,2], [2,2,1], [1,1,1,1,1].
pub fn count_pattern(counts: &FaceCounts) -> Vec<u8> {
    let mut pattern: Vec<u8> = counts[FACE_MIN as usize..=FACE_MAX as usize]
        .iter()
        .copied()
        .filter(|&c| c > 0)
        .collect();
    pattern.sort_unstable_by(|a, b| b.cmp(a));
    pattern
}

pub fn contains_small_straight(mask: FaceMask) -> bool {
    SMALL_STRAIGHT_MASKS.iter().any(|&sm| mask & sm == sm)
}

pub fn is_large_straight(mask: FaceMask) -> bool {
    LARGE_STRAIGHT_MASKS.contains(&mask)
}
