//! The generic fallback path for lengths the radix-2/4/8 kernel can't
//! handle (`AlgorithmFlag::Any`, spec.md §4.7).

pub mod dft;
