/// Default cap on nesting depth. The root level counts as depth 1.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Nesting levels the JSON decoder accepts; each level takes two array
/// levels of its 128-level recursion limit.
pub const MAX_DECODE_DEPTH: usize = 64;

/// Options controlling compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Deepest nesting level accepted before compilation fails
    pub max_depth: usize,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
