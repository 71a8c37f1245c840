//! Mineral and artifact pools sampled when cracking geodes open.
//!
//! Pool order matters: the drop index comes straight off an RNG draw.

/// Minerals found in regular geodes.
pub const GEODE_MINERALS: &[i32] = &[
    538, 542, 548, 549, 552, 555, 556, 557, 558, 566, 568, 569, 571, 574, 576, 121,
];

/// Minerals found in frozen geodes.
pub const FROZEN_MINERALS: &[i32] = &[
    541, 544, 545, 546, 550, 551, 559, 560, 561, 564, 567, 572, 573, 577, 123,
];

/// Minerals found in magma geodes.
pub const MAGMA_MINERALS: &[i32] = &[
    539, 540, 543, 547, 553, 554, 562, 563, 565, 570, 575, 578, 122,
];

/// Minerals found in omni geodes: all three pools plus the dwarven trio.
pub const OMNI_MINERALS: &[i32] = &[
    538, 542, 548, 549, 552, 555, 556, 557, 558, 566, 568, 569, 571, 574, 576, 541, 544, 545, 546,
    550, 551, 559, 560, 561, 564, 567, 572, 573, 577, 539, 540, 543, 547, 553, 554, 562, 563, 565,
    570, 575, 578, 121, 122, 123,
];

/// Artifacts found in artifact troves.
pub const TROVE_ITEMS: &[i32] = &[
    100, 101, 103, 104, 105, 106, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119, 120,
    121, 122, 123, 124, 125, 166, 373, 797,
];
