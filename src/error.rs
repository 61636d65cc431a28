// glcaps/src/error.rs
//
//! Various errors that methods can produce.

/// Various errors that methods can produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// Looking up an OpenGL function address failed.
    ///
    /// The name that failed to resolve is reported on the `warn` log level;
    /// slots resolved before the failure keep their addresses.
    GLFunctionNotFound,
    /// The function used to query the context version could not be resolved.
    ///
    /// Nothing can be loaded without it, since every version gate depends on
    /// the parsed context version.
    VersionQueryUnavailable,
    /// The version string reported by the context could not be parsed.
    InvalidVersionString(VersionStringError),
    /// The context version does not meet the minimum declared by the group.
    ///
    /// This is a guarded skip rather than a driver failure: the group is left
    /// untouched and no resolution is attempted.
    UnsupportedGLVersion,
}

/// The ways a `GL_VERSION` string can fail to parse.
///
/// Only the `major.minor` prefix is examined. Each variant corresponds to one
/// byte position of that prefix, so a log line carrying the variant pins down
/// exactly where the driver's string went off the rails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VersionStringError {
    /// The context returned a null string.
    NullString,
    /// The first byte is not an ASCII digit.
    BadMajorDigit,
    /// The second byte is not `.`.
    MissingPeriod,
    /// The third byte is not an ASCII digit.
    BadMinorDigit,
    /// The fourth byte is not the end of the string, a space, or `.`.
    BadSuffix,
}
