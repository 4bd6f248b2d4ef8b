/// Minimum (assassinations + target survivals) per round before the
/// auto penalty kicks in.
pub const PENALTY_RATIO_THRESHOLD: f64 = 0.12;

/// Extra rounds charged per missing objective under the auto penalty.
pub const PENALTY_ROUNDS_PER_MISS: f64 = 3.0;

/// Final OP scale factors.
pub const COMPETITIVE_OP_SCALE: f64 = 529.0 / 20.0;
pub const CASUAL_OP_SCALE: f64 = 55.0 / 2.0;

/// SDI slopes for the two skill multipliers.
pub const SDI_SLOPE_A: f64 = 2.0 / 3.0;
pub const SDI_SLOPE_B: f64 = 4.0 / 3.0;

/// Number of whitespace separated values in a competitive copypasta.
pub const COMPETITIVE_FIELD_COUNT: usize = 16;

/// Number of whitespace separated values in a casual copypasta.
pub const CASUAL_FIELD_COUNT: usize = 18;

/// Rounds played at which a casual sheet is treated as lifetime stats.
pub const LIFETIME_ROUNDS: u32 = 9216;

/// Rounds played at which a casual sheet is treated as casual stats.
pub const CASUAL_ROUNDS: u32 = 1536;

pub const DEFAULT_SDI: f64 = 1.0;
pub const DEFAULT_DEVICE: &str = "pc";
