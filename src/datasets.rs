//! Bundled sample inputs used by the demo binary and the benches.

use crate::config::DatasetKind;

pub static MIXED: [f64; 20] = [
    -10.0, 20.9, 15.7, 12.4, -40.0, 40.2, 4.7, 60.8, 12.3, -7.6, //
    27.6, 4.1, 18.9, 22.7, 31.4, 15.6, 6.2, 29.8, 24.5, 8.9,
];

pub static LARGE: [f64; 98] = [
    21.4, 18.6, 33.9, -7.2, 14.8, -26.5, 40.1, -11.3, 9.7, 35.8, //
    27.6, -4.1, 18.9, -22.7, 31.4, -15.6, 6.2, 29.8, 24.5, 8.9, //
    37.2, -13.4, 11.0, -41.6, 28.1, 17.9, 4.8, -32.5, 19.6, -10.2, //
    34.7, -6.5, 16.3, 25.1, 42.0, -14.7, 7.9, -38.4, 22.8, -9.6, //
    30.5, 20.3, 12.7, -27.4, 39.1, -5.8, 17.2, -33.9, 26.0, 11.8, //
    44.6, 16.5, 8.3, -36.2, 21.9, -7.4, 29.8, -23.6, 14.1, 40.9, //
    35.0, -12.1, 10.6, 28.7, 18.4, 6.9, 41.3, 19.2, 25.7, -9.1, //
    32.6, 15.4, 5.0, -34.1, 20.3, -8.6, 38.8, -17.0, 13.5, 26.8, //
    43.9, 11.6, 16.8, -30.4, 24.1, -7.8, 28.9, -21.7, 9.4, 39.5, //
    34.2, -14.9, 6.7, -27.1, 19.8, -10.5, 36.4, -18.3,
];

pub static NEGATIVES: [f64; 20] = [
    -21.4, -8.6, -33.9, -7.2, -14.8, -26.5, -40.1, -11.3, -9.7, -35.8, //
    -27.6, -4.1, -18.9, -22.7, -31.4, -15.6, -6.2, -29.8, -24.5, -8.9,
];

pub static POSITIVES: [f64; 20] = [
    21.4, 8.6, 33.9, 7.2, 14.8, 26.5, 40.1, 11.3, 9.7, 35.8, //
    27.6, 4.1, 18.9, 22.7, 31.4, 15.6, 6.2, 29.8, 24.5, 8.9,
];

/// Named datasets selected by `kind`, in display order.
pub fn samples(kind: DatasetKind) -> Vec<(&'static str, &'static [f64])> {
    match kind {
        DatasetKind::Mixed => vec![("mixed", &MIXED[..])],
        DatasetKind::Large => vec![("large", &LARGE[..])],
        DatasetKind::Negatives => vec![("negatives", &NEGATIVES[..])],
        DatasetKind::Positives => vec![("positives", &POSITIVES[..])],
        DatasetKind::All => vec![
            ("mixed", &MIXED[..]),
            ("large", &LARGE[..]),
            ("negatives", &NEGATIVES[..]),
            ("positives", &POSITIVES[..]),
        ],
    }
}
