// glcaps/src/context.rs
//
//! Per-context version state and the loading protocol.

use crate::dispatch::FunctionGroup;
use crate::error::{Error, VersionStringError};
use crate::ffi::{self, GetStringFn};
use crate::info::GLVersion;

use log::debug;

use std::ffi::CStr;
use std::mem;
use std::os::raw::{c_char, c_void};

/// The loader's view of one native OpenGL context.
///
/// Create a `Context` after the native context has been made current on the
/// calling thread, pass it by mutable reference into every load call, and
/// drop it before the native context is destroyed. The parsed version is
/// recorded on first use and never changes for the life of the value.
pub struct Context {
    version: Option<GLVersion>,
}

impl Context {
    pub fn new() -> Context {
        Context { version: None }
    }

    /// The parsed context version, if [`ensure_version`](Context::ensure_version)
    /// has succeeded.
    #[inline]
    pub fn version(&self) -> Option<GLVersion> {
        self.version
    }

    /// Returns true if the parsed context version meets the given minimum.
    ///
    /// Always false before the version has been parsed.
    #[inline]
    pub fn supports(&self, min: GLVersion) -> bool {
        self.version.map_or(false, |version| version.at_least(min))
    }

    /// Queries and parses the context's `GL_VERSION` string.
    ///
    /// The first call resolves `glGetString` through `resolver` and parses
    /// the reply; once a version has been recorded, later calls return it
    /// without touching the driver. The load methods call this themselves, so
    /// hosts only need it to inspect the version directly.
    pub fn ensure_version<F>(&mut self, mut resolver: F) -> Result<GLVersion, Error>
    where
        F: FnMut(&str) -> *const c_void,
    {
        if let Some(version) = self.version {
            return Ok(version);
        }

        let address = resolver("glGetString");
        if address.is_null() {
            return Err(Error::VersionQueryUnavailable);
        }
        let get_string: GetStringFn = unsafe { mem::transmute(address) };

        let version_string = get_string(ffi::GL_VERSION);
        if version_string.is_null() {
            return Err(Error::InvalidVersionString(VersionStringError::NullString));
        }
        let bytes = unsafe { CStr::from_ptr(version_string as *const c_char) }.to_bytes();

        let version = parse_version_string(bytes)?;
        debug!("context is GL {}.{}", version.major, version.minor);
        self.version = Some(version);
        Ok(version)
    }

    /// Loads a version-gated group of entry points.
    ///
    /// Idempotent: a group that already loaded returns success immediately.
    /// Otherwise the context version is parsed if it hasn't been, the group's
    /// minimum is checked against it, and only then are the group's names
    /// resolved. A group whose gate fails is left untouched; a group with a
    /// missing symbol is left unmarked with its earlier slots populated.
    pub fn load_version_functions<F>(
        &mut self,
        group: &mut FunctionGroup,
        mut resolver: F,
    ) -> Result<(), Error>
    where
        F: FnMut(&str) -> *const c_void,
    {
        if group.loaded() {
            return Ok(());
        }
        let version = self.ensure_version(&mut resolver)?;
        if let Some(min) = group.min_version() {
            if !version.at_least(min) {
                return Err(Error::UnsupportedGLVersion);
            }
        }
        group.resolve(resolver)
    }

    /// Loads an extension group of entry points.
    ///
    /// Same contract as [`load_version_functions`](Context::load_version_functions)
    /// minus the version gate. The caller is expected to have confirmed the
    /// extension is advertised via [`ExtensionSet::contains`](crate::ExtensionSet::contains);
    /// loading an unadvertised extension typically fails on its first name.
    pub fn load_extension_functions<F>(
        &mut self,
        group: &mut FunctionGroup,
        mut resolver: F,
    ) -> Result<(), Error>
    where
        F: FnMut(&str) -> *const c_void,
    {
        if group.loaded() {
            return Ok(());
        }
        self.ensure_version(&mut resolver)?;
        group.resolve(resolver)
    }
}

/// Parses the `major.minor` prefix of a `GL_VERSION` string.
///
/// The string is `major.minor`, optionally followed by `.release`, and any of
/// these may carry a vendor suffix after a space. Only single-digit majors
/// and minors are accepted; verifying the suffix byte keeps a hypothetical
/// `3.12` from silently parsing as `3.1`.
pub(crate) fn parse_version_string(bytes: &[u8]) -> Result<GLVersion, Error> {
    let major = match bytes.first() {
        Some(&(digit @ b'0'..=b'9')) => digit - b'0',
        _ => {
            return Err(Error::InvalidVersionString(
                VersionStringError::BadMajorDigit,
            ))
        }
    };
    if bytes.get(1) != Some(&b'.') {
        return Err(Error::InvalidVersionString(VersionStringError::MissingPeriod));
    }
    let minor = match bytes.get(2) {
        Some(&(digit @ b'0'..=b'9')) => digit - b'0',
        _ => {
            return Err(Error::InvalidVersionString(
                VersionStringError::BadMinorDigit,
            ))
        }
    };
    match bytes.get(3) {
        None | Some(&b' ') | Some(&b'.') => {}
        Some(_) => return Err(Error::InvalidVersionString(VersionStringError::BadSuffix)),
    }
    Ok(GLVersion::new(major, minor))
}
