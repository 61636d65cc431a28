// glcaps/src/dispatch.rs
//
//! Packed name lists and the function groups resolved from them.
//!
//! The generator packs each group's symbol names into one byte buffer:
//! consecutive NUL-terminated ASCII names, with an empty name (two NUL bytes
//! in a row) marking the end of the list. Name order is significant: it is
//! the slot index the generated wrappers dispatch through.

use crate::error::Error;
use crate::info::GLVersion;

use log::warn;

use std::os::raw::c_void;
use std::ptr;
use std::str;

/// Resolves every name in a packed list, in encounter order, into `funcs`
/// starting at slot 0.
///
/// The walk stops at the first name the resolver misses and returns that
/// name's bytes; slots filled before the miss keep their addresses. On
/// success the number of names resolved is returned. An empty list resolves
/// zero names. `funcs` must have at least one slot per name.
pub fn resolve_names<'a, F>(
    names: &'a [u8],
    funcs: &mut [*const c_void],
    mut resolver: F,
) -> Result<usize, &'a [u8]>
where
    F: FnMut(&str) -> *const c_void,
{
    let mut count = 0;
    for name in names.split(|&byte| byte == 0) {
        // An empty name is the end-of-list marker.
        if name.is_empty() {
            break;
        }
        let address = match str::from_utf8(name) {
            Ok(name) => resolver(name),
            Err(_) => ptr::null(),
        };
        if address.is_null() {
            return Err(name);
        }
        funcs[count] = address;
        count += 1;
    }
    Ok(count)
}

/// A group of entry points loaded together: a core version's commands gated
/// on a minimum context version, or an extension's commands, ungated.
///
/// The generator declares one group per version or extension it emits; the
/// group owns the function-pointer slots its wrappers dispatch through. A
/// group loads at most once: a successful load marks it, and later load
/// calls on a marked group return without touching the driver.
pub struct FunctionGroup {
    min_version: Option<GLVersion>,
    loaded: bool,
    names: &'static [u8],
    funcs: Box<[*const c_void]>,
}

impl FunctionGroup {
    /// Creates a group gated on the given minimum context version.
    pub fn versioned(major: u8, minor: u8, names: &'static [u8]) -> FunctionGroup {
        FunctionGroup::with_gate(Some(GLVersion::new(major, minor)), names)
    }

    /// Creates an ungated extension group.
    ///
    /// Check [`ExtensionSet::contains`](crate::ExtensionSet::contains) before
    /// loading one of these; the load itself does not consult the advertised
    /// extension list.
    pub fn extension(names: &'static [u8]) -> FunctionGroup {
        FunctionGroup::with_gate(None, names)
    }

    fn with_gate(min_version: Option<GLVersion>, names: &'static [u8]) -> FunctionGroup {
        let count = names
            .split(|&byte| byte == 0)
            .take_while(|name| !name.is_empty())
            .count();
        FunctionGroup {
            min_version,
            loaded: false,
            names,
            funcs: vec![ptr::null(); count].into_boxed_slice(),
        }
    }

    /// True once a load has fully succeeded.
    #[inline]
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// The minimum context version this group requires, if any.
    #[inline]
    pub fn min_version(&self) -> Option<GLVersion> {
        self.min_version
    }

    /// The number of function slots in this group.
    #[inline]
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Returns the address in the given slot.
    ///
    /// Slots follow name order in the packed list. A slot is null until a
    /// load has written it; after a failed load, slots before the failing
    /// name hold addresses even though the group is not marked loaded, so
    /// check [`loaded`](FunctionGroup::loaded) before dispatching.
    #[inline]
    pub fn get(&self, index: usize) -> *const c_void {
        self.funcs[index]
    }

    pub(crate) fn resolve<F>(&mut self, resolver: F) -> Result<(), Error>
    where
        F: FnMut(&str) -> *const c_void,
    {
        match resolve_names(self.names, &mut self.funcs, resolver) {
            Ok(_) => {
                self.loaded = true;
                Ok(())
            }
            Err(name) => {
                warn!(
                    "failed to resolve GL function `{}`",
                    String::from_utf8_lossy(name)
                );
                Err(Error::GLFunctionNotFound)
            }
        }
    }
}
