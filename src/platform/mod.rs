// glcaps/src/platform/mod.rs
//
//! Default symbol resolvers for hosts without a windowing library.
//!
//! Windowing libraries usually provide the resolver themselves (GLFW's
//! `glfwGetProcAddress`, SDL's `SDL_GL_GetProcAddress`, and so on), and when
//! one is available it should be preferred, since it knows which driver the
//! context actually came from. These fallbacks go straight to the platform's
//! OpenGL library and still require a current context on the calling thread.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::get_proc_address;

#[cfg(all(unix, not(target_os = "macos")))]
mod unix;
#[cfg(all(unix, not(target_os = "macos")))]
pub use unix::get_proc_address;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use windows::get_proc_address;
