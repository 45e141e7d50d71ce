//! Benchmark pattern definitions

/// Supported benchmark patterns, in default run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    // === Single-threaded access patterns ===
    Sequential,
    Random,
    /// One element per cache line
    CacheMiss,

    // === Increment strategies ===
    /// Relaxed fetch-add from every thread
    Atomic,
    /// Unsynchronized read-then-write from every thread
    Race,
    /// Single-threaded volatile accumulation
    Volatile,
}

impl Pattern {
    /// Every pattern, in the order `run_all` executes them by default
    pub const ALL: [Pattern; 6] = [
        Self::Sequential,
        Self::Random,
        Self::CacheMiss,
        Self::Atomic,
        Self::Race,
        Self::Volatile,
    ];

    /// Parse pattern from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "seq" => Some(Self::Sequential),
            "random" | "rand" => Some(Self::Random),
            "cache-miss" | "cache_miss" | "cachemiss" | "strided" => Some(Self::CacheMiss),
            "atomic" => Some(Self::Atomic),
            "race" | "racy" | "race-condition" | "race_condition" => Some(Self::Race),
            "volatile" => Some(Self::Volatile),
            _ => None,
        }
    }

    /// Short machine-friendly name (used in JSON/CSV)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random => "random",
            Self::CacheMiss => "cache-miss",
            Self::Atomic => "atomic",
            Self::Race => "race",
            Self::Volatile => "volatile",
        }
    }

    /// Heading printed above the result
    pub fn title(&self) -> &'static str {
        match self {
            Self::Sequential => "Sequential Access",
            Self::Random => "Random Access",
            Self::CacheMiss => "Cache Miss Access",
            Self::Atomic => "Atomic Access",
            Self::Race => "Race Condition",
            Self::Volatile => "Volatile Access",
        }
    }

    /// Check if pattern spreads work over the configured thread count
    pub fn is_concurrent(&self) -> bool {
        matches!(self, Self::Atomic | Self::Race)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patterns() {
        assert_eq!(Pattern::parse("atomic"), Some(Pattern::Atomic));
        assert_eq!(Pattern::parse("ATOMIC"), Some(Pattern::Atomic));
        assert_eq!(Pattern::parse("cache_miss"), Some(Pattern::CacheMiss));
        assert_eq!(Pattern::parse(" race "), Some(Pattern::Race));
        assert_eq!(Pattern::parse("unknown"), None);
    }

    #[test]
    fn test_parse_roundtrips_names() {
        for pattern in Pattern::ALL {
            assert_eq!(Pattern::parse(pattern.as_str()), Some(pattern));
        }
    }

    #[test]
    fn test_is_concurrent() {
        assert!(Pattern::Atomic.is_concurrent());
        assert!(Pattern::Race.is_concurrent());
        assert!(!Pattern::Volatile.is_concurrent());
        assert!(!Pattern::Sequential.is_concurrent());
    }
}
