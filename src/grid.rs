use crate::error::{CbResult, ColBreakError};

/// Keys are byte-packed, so every slot index must fit in a `u8`.
pub const MAX_KEY_LENGTH: usize = 256;

/// Ciphertext laid out as `key_length` rows of `col_size` bytes each.
///
/// Built once and never permuted in place; `decode` reads the rows through
/// a key without touching the stored bytes.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<u8>,
    key_length: usize,
    col_size: usize,
}

impl Grid {
    /// Slices `ciphertext` into `key_length` contiguous rows of
    /// `len / key_length` bytes. Trailing bytes that do not fill a full
    /// column are dropped; with `strict` set they are an error instead.
    pub fn build(ciphertext: &str, key_length: usize, strict: bool) -> CbResult<Self> {
        if !ciphertext.is_ascii() {
            return Err(ColBreakError::InvalidInput(
                "ciphertext must be ASCII".to_string(),
            ));
        }
        let len = ciphertext.len();
        if key_length == 0 || key_length > len {
            return Err(ColBreakError::InvalidInput(format!(
                "key length {} is outside 1..={}",
                key_length, len
            )));
        }
        if key_length > MAX_KEY_LENGTH {
            return Err(ColBreakError::InvalidInput(format!(
                "key length {} exceeds the supported maximum of {}",
                key_length, MAX_KEY_LENGTH
            )));
        }
        if strict && len % key_length != 0 {
            return Err(ColBreakError::InvalidInput(format!(
                "ciphertext length {} is not a multiple of key length {}",
                len, key_length
            )));
        }

        let col_size = len / key_length;
        let cells = ciphertext.as_bytes()[..key_length * col_size].to_vec();

        Ok(Self {
            cells,
            key_length,
            col_size,
        })
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    pub fn col_size(&self) -> usize {
        self.col_size
    }

    /// Bytes the grid actually holds (remainder excluded).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.col_size + col
    }

    /// Renders the candidate plaintext for `key`: for each column, the rows
    /// are visited in key order. Pure and deterministic.
    ///
    /// A key that is not a bijection on `0..key_length` is an internal bug
    /// in whoever produced it and surfaces as `InvalidKey`.
    pub fn decode(&self, key: &[u8]) -> CbResult<String> {
        if !is_permutation(key, self.key_length) {
            return Err(ColBreakError::InvalidKey(format!(
                "{:?} is not a permutation of 0..{}",
                key, self.key_length
            )));
        }

        let mut out = String::with_capacity(self.cells.len());
        for col in 0..self.col_size {
            for &row in key {
                out.push(self.cells[self.idx(row as usize, col)] as char);
            }
        }
        Ok(out)
    }
}

/// True when `key` uses every value in `0..key_length` exactly once.
pub fn is_permutation(key: &[u8], key_length: usize) -> bool {
    if key.len() != key_length {
        return false;
    }
    let mut seen = vec![false; key_length];
    for &slot in key {
        let slot = slot as usize;
        if slot >= key_length || seen[slot] {
            return false;
        }
        seen[slot] = true;
    }
    true
}
