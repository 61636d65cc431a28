// glcaps/src/ffi.rs
//
//! The handful of GL definitions the bootstrap calls need.
//!
//! Generated dispatch tables carry their own typed wrappers; this module only
//! covers what the crate itself calls through the resolver: `glGetString`,
//! `glGetIntegerv`, and `glGetStringi`.

use std::os::raw::{c_int, c_uchar, c_uint};

pub type GLenum = c_uint;
pub type GLuint = c_uint;
pub type GLint = c_int;
pub type GLubyte = c_uchar;

pub const GL_VERSION: GLenum = 0x1f02;
pub const GL_EXTENSIONS: GLenum = 0x1f03;
pub const GL_NUM_EXTENSIONS: GLenum = 0x821d;

pub(crate) type GetStringFn = extern "system" fn(GLenum) -> *const GLubyte;
pub(crate) type GetStringiFn = extern "system" fn(GLenum, GLuint) -> *const GLubyte;
pub(crate) type GetIntegervFn = extern "system" fn(GLenum, *mut GLint);
