use super::RegexpError;

/// Per-pattern compile flags, spelled the Ruby way (`i`, `m`, `x`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RegexpOptions {
    /// `i`: case-insensitive matching.
    pub ignore_case: bool,
    /// `x`: whitespace and `#` comments in the source are ignored.
    pub extended: bool,
    /// `m`: `.` also matches `\n`.
    pub multiline: bool,
}

impl RegexpOptions {
    pub const fn new() -> Self {
        Self {
            ignore_case: false,
            extended: false,
            multiline: false,
        }
    }

    pub const fn ignore_case(mut self, yes: bool) -> Self {
        self.ignore_case = yes;
        self
    }

    pub const fn extended(mut self, yes: bool) -> Self {
        self.extended = yes;
        self
    }

    pub const fn multiline(mut self, yes: bool) -> Self {
        self.multiline = yes;
        self
    }

    /// Parse a flag string such as `"im"`. Repeated flags are accepted.
    pub fn from_flags(flags: &str) -> Result<Self, RegexpError> {
        let mut options = Self::new();
        for flag in flags.chars() {
            match flag {
                'i' => options.ignore_case = true,
                'x' => options.extended = true,
                'm' => options.multiline = true,
                other => return Err(RegexpError::UnknownFlag { flag: other }),
            }
        }
        Ok(options)
    }

    /// Flags in canonical `mix` order, as Ruby prints them.
    pub fn to_flags(&self) -> String {
        let mut flags = String::with_capacity(3);
        if self.multiline {
            flags.push('m');
        }
        if self.ignore_case {
            flags.push('i');
        }
        if self.extended {
            flags.push('x');
        }
        flags
    }
}

/// Size limits handed to the regex engine builder.
#[derive(Debug, Clone)]
pub struct EngineLimits {
    /// Upper bound on the compiled NFA, in bytes.
    pub nfa_size_limit: Option<usize>,
    /// Capacity of the lazy DFA cache, in bytes.
    pub hybrid_cache_capacity: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            nfa_size_limit: Some(10 * (1 << 20)),
            hybrid_cache_capacity: 2 * (1 << 20),
        }
    }
}
