//! Factors a transform length into the stage schedule the mixed-radix
//! kernel reads (spec.md §3, §4.1).

/// Maximum number of butterfly stages a schedule may hold.
pub const MAX_FACTORS: usize = 32;

/// Which radices the resulting schedule is allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFlag {
    /// Only radices 2 and 4 (the leading 2 silently promoted to 8 by the kernel).
    Mixed24,
    /// A generic mixed-radix composite, handled by the fallback DFT path.
    Any,
}

/// One butterfly stage as recorded during factoring: `(radix, remaining)`,
/// where `remaining` is `n` divided by the product of every radix pulled out
/// so far, including this one.
pub type Stage = (usize, usize);

/// The factor schedule the kernel walks, in kernel processing order (the
/// *last* radix pulled out during factoring runs first, per spec.md §9's
/// note on the radix-2→8 promotion: Ne10's `factors[]` array encodes this
/// same reversal through its index arithmetic; here it is realized by
/// literally storing `stages` in processing order instead).
#[derive(Debug, Clone)]
pub struct Factors {
    pub n: usize,
    pub stages: Vec<Stage>,
    pub algorithm_flag: AlgorithmFlag,
    /// Whether the kernel should fuse the leading radix-2 with the
    /// following radix-4 into a single radix-8 pass. Set at construction
    /// time by `factor()`'s `mode` argument rather than derived from the
    /// stage shape, since `Default` and `Eight` read the identical leading
    /// `(2, _)` stage two different ways (spec.md §4.1).
    promoted: bool,
}

impl Factors {
    /// The radix of the leading (first-processed) stage: `2` (promoted to a
    /// radix-8 pass by the kernel, unless `n == 2`, or left as a bare
    /// radix-2 pass under `FactorMode::Default`), or `4`.
    pub fn first_radix(&self) -> usize {
        self.stages[0].0
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Whether the kernel fuses the leading radix-2 with the following
    /// radix-4 into a single radix-8 pass.
    pub fn is_promoted(&self) -> bool {
        self.promoted
    }

    /// `(fstride, mstride)` for every stage after the first, in the order
    /// the kernel processes them. Each such stage is a full radix-4 pass
    /// over the whole `n`-length buffer, so `fstride * mstride * 4 == n`
    /// must hold at every stage (not just `n` divided by what's left to
    /// factor) — that's what makes a stage touch every position exactly
    /// once rather than leave the untouched remainder as pass-through.
    /// The first stage consumed a leading radix of 2 (bare), 4, or 8
    /// (promoted); the first trailing stage starts from
    /// `fstride = n / (leading_radix * 4)` and each subsequent stage
    /// quarters `fstride` (`mstride` follows from the invariant, so it
    /// quadruples automatically). Grounded on
    /// `ne10_mixed_radix_butterfly_float32_c`'s post-stage bookkeeping
    /// (`fstride /= 4;`), with `mstride` recomputed from `fstride` instead
    /// of tracked separately so the invariant can't drift.
    pub fn trailing_stage_strides(&self) -> Vec<(usize, usize)> {
        let leading_radix = if self.is_promoted() { 8 } else { self.first_radix() };
        let leading_stages_consumed = if self.is_promoted() { 2 } else { 1 };
        let trailing = self.stage_count() - leading_stages_consumed;

        let mut fstride = self.n / (leading_radix * 4);
        (0..trailing)
            .map(|_| {
                let mstride = self.n / (4 * fstride);
                let pair = (fstride, mstride);
                fstride /= 4;
                pair
            })
            .collect()
    }
}

/// Factoring mode (spec.md §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorMode {
    /// Extract radix-4 stages greedily; leave a trailing radix-2 if an odd
    /// power of two remains.
    Default,
    /// Like `Default`, but the kernel fuses a leading radix-2 with the
    /// following radix-4 into a single radix-8 pass.
    Eight,
}

/// Construction-time failure (spec.md §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// `n < 1`.
    NonPositiveSize,
    /// Factoring would need more than `MAX_FACTORS` stages.
    TooManyFactors,
    /// C2C requires a power of two of at least 2.
    NotPowerOfTwo,
    /// R2C/C2R requires `N = 2^k` with `k >= 2`, i.e. `N >= 4` (spec.md §6).
    OddSize,
}

impl std::fmt::Display for FftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FftError::NonPositiveSize => write!(f, "FFT size must be at least 1"),
            FftError::TooManyFactors => {
                write!(f, "FFT size factors into more than {MAX_FACTORS} stages")
            }
            FftError::NotPowerOfTwo => write!(f, "FFT size must be a power of two"),
            FftError::OddSize => write!(f, "FFT size is not a supported power of two"),
        }
    }
}

impl std::error::Error for FftError {}

/// Decomposes `n` into the stage schedule the butterfly kernel consumes.
///
/// `n` must be a power of two for the `Mixed24`/`Eight` radix-2/4/8 kernel
/// to apply; other lengths factor down via trial division and come back
/// flagged `AlgorithmFlag::Any`, which callers fall back to the generic DFT
/// for (spec.md §4.7).
///
/// `mode` decides whether a leading `(2, _)` stage is left as a bare
/// radix-2 pass (`Default`) or fused by the kernel into a radix-8 pass
/// (`Eight`) — the one place the two modes actually differ (spec.md §4.1).
pub fn factor(n: usize, mode: FactorMode) -> Result<Factors, FftError> {
    if n < 1 {
        return Err(FftError::NonPositiveSize);
    }

    // Recorded in construction order (biggest chunk of `n` divided out
    // first); reversed below into kernel processing order.
    let mut recorded: Vec<Stage> = Vec::new();
    let mut remaining = n;

    while remaining % 4 == 0 {
        remaining /= 4;
        recorded.push((4, remaining));
    }
    if remaining % 2 == 0 {
        remaining /= 2;
        recorded.push((2, remaining));
    }
    let mut divisor = 3;
    while remaining > 1 {
        while remaining % divisor == 0 {
            remaining /= divisor;
            recorded.push((divisor, remaining));
        }
        divisor += 2;
        if divisor * divisor > remaining && remaining > 1 {
            recorded.push((remaining, 1));
            remaining = 1;
        }
    }

    let algorithm_flag = if recorded.iter().all(|&(radix, _)| radix == 2 || radix == 4) {
        AlgorithmFlag::Mixed24
    } else {
        AlgorithmFlag::Any
    };

    if recorded.is_empty() {
        recorded.push((1, 1)); // n == 1: a single no-op stage.
    }
    if recorded.len() > MAX_FACTORS {
        return Err(FftError::TooManyFactors);
    }

    let mut stages = recorded;
    stages.reverse();

    let promoted = mode == FactorMode::Eight
        && algorithm_flag == AlgorithmFlag::Mixed24
        && stages.len() >= 2
        && stages[0].0 == 2;

    Ok(Factors {
        n,
        stages,
        algorithm_flag,
        promoted,
    })
}
