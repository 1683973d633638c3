// 🧹 Act Name Normalizer - Raw lineup text → comparison form
//
// "Daft Punk (Live Set)"            → "daft punk"
// "Above & Beyond"                  → "above and beyond"
// "Insomniac presents Eric Prydz"   → "insomniac"
//
// The "presents" rule keeps the promoter, not the headliner. That is a
// known simplification for billing lines.

/// Billing separator; everything from here on is dropped
const PRESENTS: &str = " presents ";

/// Normalize a raw act name for comparison
///
/// Steps (order matters):
/// 1. Lowercase
/// 2. `&` → `and`
/// 3. Strip trailing whitespace
/// 4. Cut at the first " presents "
/// 5. Cut at the first `(`
/// 6. Strip trailing whitespace again
///
/// The result may be empty; callers drop empty names.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('&', "and");
    let mut name = lowered.trim_end();

    if let Some(pos) = name.find(PRESENTS) {
        name = &name[..pos];
    }

    if let Some(pos) = name.find('(') {
        name = &name[..pos];
    }

    name.trim_end().to_string()
}

// ============================================================================
// TESTS
// ============================================================================
