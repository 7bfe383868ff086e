//! Positions identifying where a violation was found.

use std::fmt;

/// Where a violation was found: a real argument position, or a
/// synthetic label when the finding is about the validation call
/// itself rather than an argument's content.
///
/// Synthetic positions render with the `check:` prefix so reports keep
/// the two kinds apart; the class-tag position renders as
/// `<index>:class()` next to the argument it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The argument at this index.
    Arg(usize),
    /// The class tag of the argument at this index.
    ClassTag(usize),
    /// The argument collection as a whole.
    Args,
    /// The descriptor at this index.
    Descriptor(usize),
    /// The `opt` field of the descriptor at this index.
    DescriptorOpt(usize),
}

impl Position {
    /// Returns true for positions describing misuse of the validation
    /// call (argument collection shape, descriptor shape, argument
    /// count) rather than a checked value.
    pub fn is_meta(&self) -> bool {
        matches!(
            self,
            Position::Args | Position::Descriptor(_) | Position::DescriptorOpt(_)
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Arg(index) => write!(f, "{}", index),
            Position::ClassTag(index) => write!(f, "{}:class()", index),
            Position::Args => write!(f, "check:cargs"),
            Position::Descriptor(index) => write!(f, "check:checks:{}", index),
            Position::DescriptorOpt(index) => write!(f, "check:checks:{}:opt", index),
        }
    }
}
