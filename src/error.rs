//! Launch-time failures at the host boundary
//!
//! Nothing inside the simulation can fail; only acquiring the drawing surface
//! and DOM anchors can. A failed launch is logged and leaves no session behind.

use core::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchError {
    NoWindow,
    NoDocument,
    /// A required element (named by its selector or id) is absent
    MissingAnchor(String),
    /// The canvas refused to hand out a 2D context
    NoContext,
    /// A DOM call threw
    Js(String),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no window object"),
            Self::NoDocument => write!(f, "no document object"),
            Self::MissingAnchor(what) => write!(f, "missing DOM anchor `{what}`"),
            Self::NoContext => write!(f, "canvas has no 2d context"),
            Self::Js(msg) => write!(f, "DOM call failed: {msg}"),
        }
    }
}

impl std::error::Error for LaunchError {}
