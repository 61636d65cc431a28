// glcaps/src/info.rs
//
//! OpenGL version information.

/// An OpenGL version, either reported by the active context or declared as
/// the minimum a group of entry points requires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GLVersion {
    pub major: u8,
    pub minor: u8,
}

impl GLVersion {
    #[inline]
    pub fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Returns true if this version meets the given minimum.
    ///
    /// A higher major always satisfies the minimum regardless of minor;
    /// equal majors compare minors.
    #[inline]
    pub fn at_least(self, min: GLVersion) -> bool {
        (self.major == min.major && self.minor >= min.minor) || self.major > min.major
    }
}
