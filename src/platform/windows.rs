// glcaps/src/platform/windows.rs
//
//! OpenGL function pointer loading via WGL.

use winapi::shared::minwindef::HMODULE;
use winapi::um::libloaderapi;
use winapi::um::wingdi::wglGetProcAddress;
use winapi::um::winnt::LPCSTR;

use std::ffi::CString;
use std::os::raw::c_void;

thread_local! {
    static OPENGL_LIBRARY: HMODULE = {
        unsafe { libloaderapi::LoadLibraryA(&b"opengl32.dll\0"[0] as *const u8 as LPCSTR) }
    };
}

pub fn get_proc_address(symbol_name: &str) -> *const c_void {
    OPENGL_LIBRARY.with(|&module| unsafe {
        let symbol_name: CString = CString::new(symbol_name).unwrap();
        let symbol_ptr = symbol_name.as_ptr() as LPCSTR;
        let address = wglGetProcAddress(symbol_ptr);
        // wglGetProcAddress hands back small sentinel values for entry points
        // that live in opengl32.dll itself rather than the ICD.
        match address as isize {
            -1 | 0 | 1 | 2 | 3 => libloaderapi::GetProcAddress(module, symbol_ptr) as *const c_void,
            _ => address as *const c_void,
        }
    })
}
