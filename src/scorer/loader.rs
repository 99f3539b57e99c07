use crate::error::CbResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Tetragram rows as read from disk, before table construction.
pub struct RawTetragrams {
    pub entries: Vec<([u8; 4], f64)>,
}

/// Parses a tab-separated `tetragram<TAB>count` stream.
///
/// Rows that are not exactly four ASCII bytes, or whose count fails to
/// parse as a non-negative finite number, are skipped. Grams are
/// lowercased and counts divided by `table_scale`.
pub fn load_tetragrams<R: Read>(reader: R, table_scale: f64) -> CbResult<RawTetragrams> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut lines_read = 0usize;

    for rec in rdr.records().flatten() {
        lines_read += 1;
        if rec.len() < 2 {
            continue;
        }

        let s = rec[0].trim().to_ascii_lowercase();
        let bytes = s.as_bytes();
        if bytes.len() != 4 || !s.is_ascii() {
            continue;
        }

        let count: f64 = match rec[1].trim().parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        if !count.is_finite() || count < 0.0 {
            continue;
        }

        let mut gram = [0u8; 4];
        gram.copy_from_slice(bytes);
        entries.push((gram, count / table_scale));
    }

    debug!(
        "Scanned {} rows, kept {} tetragrams",
        lines_read,
        entries.len()
    );

    Ok(RawTetragrams { entries })
}

pub fn load_tetragrams_from_path<P: AsRef<Path>>(
    path: P,
    table_scale: f64,
) -> CbResult<RawTetragrams> {
    info!("📚 Loading tetragram table: {}", path.as_ref().display());
    let file = File::open(path)?;
    load_tetragrams(file, table_scale)
}
