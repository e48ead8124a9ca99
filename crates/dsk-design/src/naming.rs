//! Design-file names: `[PREF] <project> - <MMDD_HHMM> - <6 hex>`.

use chrono::NaiveDateTime;
use rand::Rng;

const PREFIX_CHARS: usize = 4;

/// Unique, human-readable name for a published design file.
///
/// The prefix is the first four characters of `domain`, uppercased.
pub fn design_file_name<R: Rng + ?Sized>(
    project: &str,
    domain: &str,
    at: NaiveDateTime,
    rng: &mut R,
) -> String {
    let prefix = domain
        .chars()
        .take(PREFIX_CHARS)
        .collect::<String>()
        .to_uppercase();
    let suffix = rng.random_range(0..=0x00ff_ffff_u32);
    format!("[{prefix}] {project} - {} - {suffix:06x}", at.format("%m%d_%H%M"))
}
