/// Currency prices are stored in before localization
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Decimal precision for localized prices
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
