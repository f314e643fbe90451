// C-callable surface. Stateless: every call builds its own engine, so hosts
// may call from any thread. Panics are caught at the boundary.
use crate::ChandasEngine;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn analyze_to_json(text: &str) -> String {
    match ChandasEngine::new().analyze(text) {
        Ok(analysis) => serde_json::to_string(&analysis).unwrap_or_else(|e| error_json(&e.to_string())),
        Err(e) => error_json(&e.to_string()),
    }
}

/// Analyzes a NUL-terminated UTF-8 verse and returns a JSON document, either
/// the full analysis or `{"error": ...}`. The caller must release the result
/// with [`chandas_free_string`]. Returns null only if `text` is null.
#[no_mangle]
pub extern "C" fn chandas_analyze(text: *const c_char) -> *mut c_char {
    if text.is_null() {
        return ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(text) };
    let json = match c_str.to_str() {
        Ok(verse) => catch_unwind(AssertUnwindSafe(|| analyze_to_json(verse))).unwrap_or_else(|_| {
            eprintln!("[Rust FATAL] Panic in chandas_analyze.");
            error_json("internal error")
        }),
        Err(_) => error_json("input is not valid UTF-8"),
    };
    // serde_json escapes control characters, so the payload holds no NUL
    CString::new(json).map_or(ptr::null_mut(), CString::into_raw)
}

#[no_mangle]
pub extern "C" fn chandas_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(input: &str) -> serde_json::Value {
        let c_input = CString::new(input).unwrap();
        let out = chandas_analyze(c_input.as_ptr());
        assert!(!out.is_null());
        let json = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_string();
        chandas_free_string(out);
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn returns_analysis_json() {
        let value = call("ई");
        assert_eq!(value["result"]["meter"], "Unknown Pattern");
        assert_eq!(value["result"]["confidence"], "Low");
        assert_eq!(value["result"]["pattern"], serde_json::json!(["Long"]));
    }

    #[test]
    fn reports_user_errors_as_json() {
        let value = call("   ");
        assert!(value["error"].as_str().unwrap().contains("no analyzable text"));
    }

    #[test]
    fn null_in_null_out() {
        assert!(chandas_analyze(ptr::null()).is_null());
        chandas_free_string(ptr::null_mut());
    }
}
