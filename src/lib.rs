// glcaps/src/lib.rs
//
//! Runtime resolution of OpenGL entry points and extension capabilities.
//!
//! OpenGL entry points can't usefully be linked statically: which functions
//! exist depends on the driver the process ends up talking to. This crate
//! fills caller-declared dispatch tables at context-initialization time
//! through a host-supplied resolver (usually the windowing library's
//! `GetProcAddress` equivalent, or [`platform::get_proc_address`]), gates
//! groups of entry points on the reported context version, and answers
//! extension membership queries against the driver's advertised extension
//! list.
//!
//! The crate pairs with a generator that emits the packed name lists and the
//! typed dispatch wrappers; everything here works against those lists at
//! runtime. Creating the native context itself is out of scope: bring your
//! own windowing library, make the context current, and only then start
//! loading.
//!
//! One [`Context`] corresponds to one native context bound to one thread.
//! Nothing here is synchronized; calling in from multiple threads without
//! external locking is not supported.

pub mod platform;

mod error;
pub use crate::error::{Error, VersionStringError};

mod context;
pub use crate::context::Context;

mod dispatch;
pub use crate::dispatch::{resolve_names, FunctionGroup};

mod extensions;
pub use crate::extensions::ExtensionSet;

pub mod ffi;

mod info;
pub use crate::info::GLVersion;
