// glcaps/src/platform/unix.rs
//
//! OpenGL function pointer loading via GLX.

use libc::{dlopen, dlsym, RTLD_LAZY};

use std::ffi::CString;
use std::mem;
use std::os::raw::{c_char, c_void};
use std::ptr;

static GL_LIBRARY_NAMES: [&[u8]; 2] = [b"libGL.so.1\0", b"libGL.so\0"];

type GlXGetProcAddressFn = unsafe extern "C" fn(*const c_char) -> *const c_void;

thread_local! {
    static GL_LIBRARY: GLLibrary = GLLibrary::open();
}

struct GLLibrary {
    handle: *mut c_void,
    glx_get_proc_address: Option<GlXGetProcAddressFn>,
}

impl GLLibrary {
    fn open() -> GLLibrary {
        unsafe {
            let mut handle = ptr::null_mut();
            for library_name in &GL_LIBRARY_NAMES {
                handle = dlopen(library_name.as_ptr() as *const c_char, RTLD_LAZY);
                if !handle.is_null() {
                    break;
                }
            }
            if handle.is_null() {
                return GLLibrary {
                    handle,
                    glx_get_proc_address: None,
                };
            }

            let glx_get_proc_address = dlsym(
                handle,
                b"glXGetProcAddressARB\0".as_ptr() as *const c_char,
            );
            let glx_get_proc_address = if glx_get_proc_address.is_null() {
                None
            } else {
                Some(mem::transmute::<*mut c_void, GlXGetProcAddressFn>(
                    glx_get_proc_address,
                ))
            };

            GLLibrary {
                handle,
                glx_get_proc_address,
            }
        }
    }

    fn get(&self, symbol_name: &str) -> *const c_void {
        if self.handle.is_null() {
            return ptr::null();
        }
        let symbol_name = CString::new(symbol_name).unwrap();
        if let Some(glx_get_proc_address) = self.glx_get_proc_address {
            let address = unsafe { glx_get_proc_address(symbol_name.as_ptr()) };
            if !address.is_null() {
                return address;
            }
        }
        // Core 1.x entry points may only be exported from the library itself.
        unsafe { dlsym(self.handle, symbol_name.as_ptr()) as *const c_void }
    }
}

pub fn get_proc_address(symbol_name: &str) -> *const c_void {
    GL_LIBRARY.with(|library| library.get(symbol_name))
}
