use bitflags::bitflags;
use std::str::FromStr;

bitflags! {
    /// Describes how the indentation level changes around a single line.
    ///
    /// Flags combine freely, e.g., a line can decrement the level before it is emitted
    /// and increment it again afterwards.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Directive: u8 {
        /// Increment the level before emitting the line.
        const INCREMENT_BEFORE = 1 << 0;
        /// Increment the level after emitting the line.
        const INCREMENT_AFTER = 1 << 1;
        /// Decrement the level before emitting the line.
        const DECREMENT_BEFORE = 1 << 2;
        /// Decrement the level after emitting the line.
        const DECREMENT_AFTER = 1 << 3;
        /// Decrement the level twice before emitting the line.
        const DECREMENT_BEFORE_DOUBLE = 1 << 4;
        /// Lines following this one are emitted without indentation.
        const VERBATIM_START = 1 << 5;
        /// Last line emitted without indentation. Following lines are indented again.
        const VERBATIM_END = 1 << 6;
        /// Emit this line without indentation.
        const UNINDENTED = 1 << 7;
    }
}

const NAMES: [(&str, Directive); 8] = [
    ("increment-before", Directive::INCREMENT_BEFORE),
    ("increment-after", Directive::INCREMENT_AFTER),
    ("decrement-before", Directive::DECREMENT_BEFORE),
    ("decrement-after", Directive::DECREMENT_AFTER),
    ("decrement-before-double", Directive::DECREMENT_BEFORE_DOUBLE),
    ("verbatim-start", Directive::VERBATIM_START),
    ("verbatim-end", Directive::VERBATIM_END),
    ("unindented", Directive::UNINDENTED),
];

impl Directive {
    /// Number of levels to remove before the line is emitted.
    pub(crate) fn decrements_before(self) -> usize {
        if self.contains(Directive::DECREMENT_BEFORE_DOUBLE) {
            2
        } else if self.contains(Directive::DECREMENT_BEFORE) {
            1
        } else {
            0
        }
    }
}

impl FromStr for Directive {
    type Err = crate::CodeStoreError;

    /// Parses a `+` separated list of flag names, e.g., `increment-after+decrement-before`.
    /// The name `none` gives an empty directive.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut directive = Directive::empty();
        for name in text.split('+').map(str::trim) {
            if name == "none" {
                continue;
            }
            let Some((_, flag)) = NAMES.iter().find(|(known, _)| *known == name) else {
                return Err(crate::CodeStoreError::InvalidRule(format!(
                    "Unknown directive '{}', expected one of none, {}",
                    name,
                    NAMES
                        .iter()
                        .map(|(known, _)| *known)
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            };
            directive |= *flag;
        }
        Ok(directive)
    }
}
