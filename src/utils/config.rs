//! Constants describing the trace line format and output defaults.

/// Current JSON export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Grammar of a significant trace line: indentation markers, a sample
/// count, a single space, then the frame text.
///
/// Marker characters are space, `+`, `!`, `:` and `|`. The number of
/// marker characters is the raw depth of the line.
pub const SAMPLE_LINE_PATTERN: &str = r"^([ +!:|]+)([0-9]+) (.*)";

// Top-level frames are indented by four markers; every nesting level adds two.
pub const BASE_DEPTH: usize = 4;
pub const DEPTH_STEP: usize = 2;

/// Raw depth jump that the format sometimes emits for a single nesting step
pub const QUIRK_DEPTH_JUMP: usize = 4;

/// A child whose ratio exceeds this share of its siblings' total is
/// expanded together with its parent
pub const HOT_RATIO_THRESHOLD: f64 = 0.5;

/// Width in characters of the ratio bar drawn by the outline renderer
pub const DEFAULT_BAR_WIDTH: usize = 20;

/// Default number of hot paths listed by `--summary`
pub const DEFAULT_TOP_PATHS: usize = 10;
