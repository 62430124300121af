/// Standing instructions given to the advisory model on every run.
///
/// Process-wide constant; callers that want different rules pass their own
/// text to [`crate::compose`] instead of mutating this.
pub const DEFAULT_POLICY: &str = "\
Keep the portfolio diversified. Don't put all the money into the same \
country or the same originator, and don't put all the funds into a single \
loan. In general go for the investment with a high discount on the \
secondary market. Higher interest is preferred. When there is no \
attractive investment it is fine not to invest. Long term (1 year or \
longer) loans are not attractive. There may be more information available \
in the market and secondary market data; please take that information \
into consideration too.";
