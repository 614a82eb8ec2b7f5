/// Whitespace/indentation options from `params.options` in spec.md §6.
///
/// Any fields an LSP client sends beyond these two are ignored, per the
/// input contract ("any additional options are ignored").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Width of one unit-indent when `insert_spaces` is true.
    pub tab_size: u32,
    /// Whether to indent with `tab_size` spaces (`true`) or one tab (`false`).
    pub insert_spaces: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            tab_size: 2,
            insert_spaces: true,
        }
    }
}

/// User-facing configuration beyond whitespace options: `cfg.lowercaseKeywords`
/// from spec.md §6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatConfig {
    pub lowercase_keywords: bool,
}
