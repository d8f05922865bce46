//! Fixed price buckets for the shop's price filter.

// ---------------------------------------------------------------------------
// PriceBucket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBucket {
    pub id: u32,
    pub label: &'static str,
    /// Inclusive `[min, max]` range; empty means "no price constraint".
    pub range: &'static [i64],
}

/// The selectable buckets, in display order. The open-ended top bucket is
/// capped at 99 by the fixture itself.
pub const PRICE_BUCKETS: [PriceBucket; 6] = [
    PriceBucket {
        id: 0,
        label: "Any",
        range: &[],
    },
    PriceBucket {
        id: 1,
        label: "$0 to $9",
        range: &[0, 9],
    },
    PriceBucket {
        id: 2,
        label: "$10 to $19",
        range: &[10, 19],
    },
    PriceBucket {
        id: 3,
        label: "$20 to $29",
        range: &[20, 29],
    },
    PriceBucket {
        id: 4,
        label: "$30 to $39",
        range: &[30, 39],
    },
    PriceBucket {
        id: 5,
        label: "More than $40",
        range: &[40, 99],
    },
];

/// Range for a bucket id, scanning the fixture; ids with no bucket resolve
/// to the empty range, same as "Any".
pub fn price_range_for(id: u32) -> Vec<i64> {
    let mut range: &[i64] = &[];
    for bucket in &PRICE_BUCKETS {
        if bucket.id == id {
            range = bucket.range;
        }
    }
    range.to_vec()
}
