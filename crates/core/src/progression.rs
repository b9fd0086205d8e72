//! Progression rules - scoring table and drop-speed-by-level formula.

use gridfall_types::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_MS};

/// Points awarded for clearing `lines` rows at once at the given level.
///
/// Base scores are `[0, 100, 300, 500, 800]` multiplied by the level at
/// lock time. More than four simultaneous rows only happens on
/// artificially prepared boards; those score as a quad.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    let idx = lines.min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx] * level
}

/// Level for a running total of cleared lines: one level per ten lines,
/// starting at 1.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for a level: 1000ms at level 1,
/// 100ms faster per level, floored at 100ms.
pub fn drop_interval_ms(level: u32) -> u64 {
    BASE_DROP_MS
        .saturating_sub(u64::from(level.saturating_sub(1)) * DROP_STEP_MS)
        .max(MIN_DROP_MS)
}
