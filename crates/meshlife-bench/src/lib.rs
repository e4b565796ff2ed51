//! Shared fixtures for the meshlife benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use meshlife_core::Field;

/// Fill roughly a third of `field` with live cells, deterministically.
///
/// Uses an LCG-style hash of the flat index so benchmarks need no RNG
/// dependency and every run sees the same soup.
pub fn seed_soup(field: &mut Field) {
    let cols = field.cols();
    for index in 0..field.cell_count() {
        let bits = (index as u64)
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        if bits % 3 == 0 {
            field.set_alive(index / cols, index % cols, true);
        }
    }
}
