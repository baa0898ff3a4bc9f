//! Binding availability and invocation mode selection.

use std::fmt;

/// Whether the generated message/stub bindings were compiled in.
///
/// All-or-nothing: the `bindings` feature brings the complete generated
/// module set, otherwise none of it exists.
pub const fn bindings_available() -> bool {
    cfg!(feature = "bindings")
}

/// How calls are made for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Typed requests through the generated stub.
    Typed,
    /// Opaque bytes against a wire method name.
    Raw,
}

impl InvocationMode {
    /// Decide the mode once at startup.
    ///
    /// Missing bindings are not an error; they select [`InvocationMode::Raw`].
    pub fn detect(force_raw: bool) -> Self {
        Self::select(bindings_available(), force_raw)
    }

    fn select(bindings: bool, force_raw: bool) -> Self {
        if bindings && !force_raw {
            Self::Typed
        } else {
            Self::Raw
        }
    }
}

impl fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typed => write!(f, "typed"),
            Self::Raw => write!(f, "raw"),
        }
    }
}
