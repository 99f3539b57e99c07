use fastrand::Rng;
use std::collections::HashSet;

/// Uniformly random permutation of `0..key_length`, used for the opening
/// key and for every restart.
pub fn random_key(rng: &mut Rng, key_length: usize) -> Vec<u8> {
    let mut key: Vec<u8> = (0..key_length).map(|v| v as u8).collect();
    rng.shuffle(&mut key);
    key
}

/// One random move on a copy of `key`.
///
/// One mutation in `rotation_odds` is a cyclic rotation by `1..key_length`;
/// the rest are swaps of two independently chosen slots, which may coincide
/// (a no-op swap is a legal, if wasted, attempt). `rotation_odds == 0`
/// disables rotations entirely. The input key is never mutated.
pub fn mutate_key(rng: &mut Rng, key: &[u8], rotation_odds: u32) -> Vec<u8> {
    let mut next = key.to_vec();
    let key_length = key.len();
    if key_length < 2 {
        return next;
    }

    if rotation_odds > 0 && rng.u32(0..rotation_odds) == 0 {
        next.rotate_right(rng.usize(1..key_length));
    } else {
        let a = rng.usize(0..key_length);
        let b = rng.usize(0..key_length);
        next.swap(a, b);
    }
    next
}

/// Proposes a neighbor of `current` that is not yet in `used`, giving up
/// after `max_attempts` mutations.
///
/// `None` means the local neighborhood is exhausted and the caller should
/// restart from a fresh random key. On success the caller is responsible
/// for inserting the returned key into `used`.
pub fn next_unused_key(
    rng: &mut Rng,
    current: &[u8],
    used: &HashSet<Vec<u8>>,
    max_attempts: usize,
    rotation_odds: u32,
) -> Option<Vec<u8>> {
    for _ in 0..max_attempts {
        let candidate = mutate_key(rng, current, rotation_odds);
        if !used.contains(&candidate) {
            return Some(candidate);
        }
    }
    None
}
