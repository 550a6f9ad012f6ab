use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::Index;
use std::sync::OnceLock;

use crate::error::{ClockError, ClockResult};

/// English cardinal names for 1..=60, indexed by `numeral - 1`.
pub const NUMBER_NAMES: [&str; 60] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen", "twenty",
    "twenty-one", "twenty-two", "twenty-three", "twenty-four", "twenty-five",
    "twenty-six", "twenty-seven", "twenty-eight", "twenty-nine", "thirty",
    "thirty-one", "thirty-two", "thirty-three", "thirty-four", "thirty-five",
    "thirty-six", "thirty-seven", "thirty-eight", "thirty-nine", "forty",
    "forty-one", "forty-two", "forty-three", "forty-four", "forty-five",
    "forty-six", "forty-seven", "forty-eight", "forty-nine", "fifty",
    "fifty-one", "fifty-two", "fifty-three", "fifty-four", "fifty-five",
    "fifty-six", "fifty-seven", "fifty-eight", "fifty-nine", "sixty",
];

/// Numerals on the hour ring.
pub const HOUR_LABELS: u32 = 12;
/// Numerals on the minute/second ring.
pub const ALL_LABELS: u32 = 60;

/// Maps a numeral to the 1-based alphabetical rank of its English name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOrderMap {
    // ranks[numeral - 1]
    ranks: Vec<u32>,
}

impl LabelOrderMap {
    /// Ranks the names of 1..=n alphabetically, ties broken by numeral.
    pub fn build(n: u32) -> ClockResult<Self> {
        if n == 0 || n as usize > NUMBER_NAMES.len() {
            return Err(ClockError::UnsupportedLabelDomain(n));
        }

        let mut numerals: Vec<u32> = (1..=n).collect();
        numerals.sort_by(|a, b| {
            NUMBER_NAMES[(*a - 1) as usize]
                .cmp(NUMBER_NAMES[(*b - 1) as usize])
                .then(a.cmp(b))
        });

        let mut ranks = vec![0; n as usize];
        for (position, numeral) in numerals.iter().enumerate() {
            ranks[(*numeral - 1) as usize] = position as u32 + 1;
        }

        Ok(Self { ranks })
    }

    /// Rank of `numeral`, or `None` when it is outside the map's domain.
    pub fn rank(&self, numeral: u32) -> Option<u32> {
        let index = numeral.checked_sub(1)? as usize;
        self.ranks.get(index).copied()
    }

    /// Size of the domain.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Always false for a built map.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// `(numeral, rank)` pairs in ascending numeral order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.ranks
            .iter()
            .enumerate()
            .map(|(index, rank)| (index as u32 + 1, *rank))
    }
}

impl Index<u32> for LabelOrderMap {
    type Output = u32;

    fn index(&self, numeral: u32) -> &u32 {
        &self.ranks[(numeral - 1) as usize]
    }
}

impl Serialize for LabelOrderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ranks.len()))?;
        for (numeral, rank) in self.iter() {
            map.serialize_entry(&numeral.to_string(), &rank)?;
        }
        map.end()
    }
}

static LABEL_MAPS: OnceLock<(LabelOrderMap, LabelOrderMap)> = OnceLock::new();

/// Process-wide `(hour_map, all_map)`, built on first use.
pub fn label_maps() -> &'static (LabelOrderMap, LabelOrderMap) {
    LABEL_MAPS.get_or_init(|| {
        let build = |n| LabelOrderMap::build(n).unwrap_or_else(|_| unreachable!("{n} has names"));
        (build(HOUR_LABELS), build(ALL_LABELS))
    })
}
