// C entry points for the comparator. Every call is wrapped in catch_unwind so
// a panic never crosses the FFI boundary.
use crate::core::collator::{word_compare, Collator};
use libc::{c_char, c_int};
use std::cmp::Ordering;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

/// Null pointers and invalid UTF-8 read as the empty string.
unsafe fn str_arg<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map(CString::into_raw).unwrap_or(ptr::null_mut())
}

/// Compares two NUL-terminated UTF-8 strings in Tamil alphabetical order.
/// Returns -1, 0 or 1.
///
/// # Safety
/// `a` and `b` must each be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn thamil_word_compare(a: *const c_char, b: *const c_char) -> c_int {
    let a = str_arg(a);
    let b = str_arg(b);
    let result = catch_unwind(|| word_compare(a, b));
    match result {
        Ok(Ordering::Less) => -1,
        Ok(Ordering::Equal) => 0,
        Ok(Ordering::Greater) => 1,
        Err(_) => {
            eprintln!("[Rust FATAL] Panic in thamil_word_compare.");
            0
        }
    }
}

/// Sorts a JSON array of strings and returns the sorted array as JSON.
/// Malformed input yields `"[]"`. Free the result with
/// [`thamil_free_string`].
///
/// # Safety
/// `words_json` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn thamil_sort_json(words_json: *const c_char) -> *mut c_char {
    let input = str_arg(words_json);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut words: Vec<String> = serde_json::from_str(input).unwrap_or_default();
        Collator::default().sort(&mut words);
        serde_json::to_string(&words).unwrap_or_else(|_| "[]".to_string())
    }));
    let json_string = result.unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in thamil_sort_json.");
        "[]".to_string()
    });
    into_c_string(json_string)
}

/// Releases a string returned by this library.
///
/// # Safety
/// `s` must be null or a pointer returned by [`thamil_sort_json`] that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn thamil_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
