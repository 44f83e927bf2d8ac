use thiserror::Error as ThisError;

///
/// SafeCmpError
///
/// The only failure callers can observe. Incomparable values are always
/// resolved inside the comparator and never surface here.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum SafeCmpError {
    #[error("{op}() arg is an empty sequence")]
    EmptySequence { op: &'static str },
}

impl SafeCmpError {
    pub(crate) const fn empty_sequence(op: &'static str) -> Self {
        Self::EmptySequence { op }
    }
}
