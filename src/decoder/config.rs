use std::sync::OnceLock;

use super::terminator::Terminator;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static MAX_INPUT_LEN: OnceLock<Option<usize>> = OnceLock::new();

/// Input length cap from `GS1_MAX_INPUT_LEN` (unset or 0 = unbounded)
pub(crate) fn max_input_len() -> Option<usize> {
    *MAX_INPUT_LEN.get_or_init(|| match parse_env_usize("GS1_MAX_INPUT_LEN", 0) {
        0 => None,
        v => Some(v),
    })
}

static TERMINATOR: OnceLock<Terminator> = OnceLock::new();

/// Variable-field terminator from `GS1_TERMINATOR` (`marker` or `gs`)
pub(crate) fn terminator() -> Terminator {
    *TERMINATOR.get_or_init(|| {
        std::env::var("GS1_TERMINATOR")
            .ok()
            .and_then(|v| Terminator::from_name(&v))
            .unwrap_or_default()
    })
}

/// Scanner settings
///
/// `Default` reproduces the reference behavior: `"240"` marker termination
/// and no input bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// Rule that ends LotNumber and SerialNumber payloads
    pub terminator: Terminator,
    /// Characters past this index are ignored
    pub max_input_len: Option<usize>,
}

impl ScanOptions {
    /// Options from `GS1_TERMINATOR` and `GS1_MAX_INPUT_LEN`
    pub fn from_env() -> Self {
        Self {
            terminator: terminator(),
            max_input_len: max_input_len(),
        }
    }

    /// Set the variable-field terminator
    pub fn with_terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// Bound the number of characters scanned
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = Some(max_input_len);
        self
    }
}
