//! Observable events of the filtering layer

use std::fmt;

/// Typed event names written by [`Logger`](super::Logger)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A cached result finished materializing
    CachedResultBuilt,
    /// A cached result was refused or aborted
    CachedResultRejected,
    /// Filter configuration loaded
    ConfigLoaded,
    /// A caller asked a result for its inactive representation
    RepresentationMismatch,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::CachedResultBuilt => "CACHED_RESULT_BUILT",
            Event::CachedResultRejected => "CACHED_RESULT_REJECTED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RepresentationMismatch => "REPRESENTATION_MISMATCH",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::CachedResultBuilt.as_str(), "CACHED_RESULT_BUILT");
        assert_eq!(Event::ConfigLoaded.to_string(), "CONFIG_LOADED");
    }
}
