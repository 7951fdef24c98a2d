//! Invoice and receipt number generation.
//!
//! Format fixed by the school's paper records: a document prefix, the
//! two-digit year and month, and a four-digit random suffix. Collisions are
//! not checked; at a few hundred documents a month the risk is accepted.

use chrono::{Datelike, Utc};
use rand::Rng;

/// Generate an invoice number, e.g. `INV26081234`.
pub fn invoice_number() -> String {
    document_number("INV")
}

/// Generate a receipt number, e.g. `RCP26080042`.
pub fn receipt_number() -> String {
    document_number("RCP")
}

fn document_number(prefix: &str) -> String {
    let now = Utc::now();
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!(
        "{}{:02}{:02}{:04}",
        prefix,
        now.year() % 100,
        now.month(),
        suffix
    )
}
