/// Calendar date format, also the build-hash bucket: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO-8601 UTC timestamp used for `TIMESTAMP` and snapshot audits
pub(crate) const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Fallback value when a skill or vessel has no name
pub(crate) const UNKNOWN: &str = "UNKNOWN";

/// Score assumed for skills that don't carry one
pub(crate) const DEFAULT_SCORE: i64 = 50;

/// Emitted in place of a git revision outside a repository
pub(crate) const GIT_SHA_SENTINEL: &str = "DEV-UNCOMMITTED";

pub(crate) const DEFAULT_QUOTE_TEXT: &str =
    "Complexity is debt; simplicity is the ultimate sophistication.";
pub(crate) const DEFAULT_QUOTE_AUTHOR: &str = "Operator Axiom";

pub(crate) const DEFAULT_GLYPH: &str = "𖢧ꛅ𖤢 ꚽꚳꛈ𖢧ꛕꛅ";
pub(crate) const DEFAULT_GEN_VERSION: &str = "QuantumProfileSurface/v10.0";

/// Number of characters printed by a dry run before truncation
pub(crate) const PREVIEW_CHARS: usize = 2000;
