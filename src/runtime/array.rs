//! C ABI over `IntVector` handles.
//!
//! Every function taking a handle requires a pointer returned by
//! `int_vector_create` that has not yet been passed to `int_vector_destroy`.
//! A null handle or an out-of-bounds index panics, which aborts the process
//! when it reaches the C boundary.
#![allow(clippy::missing_safety_doc)]

use int_vector::IntVector;
use libc::{c_int, size_t};

unsafe fn handle<'a>(ptr: *const IntVector) -> &'a IntVector {
    match unsafe { ptr.as_ref() } {
        Some(v) => v,
        None => panic!("null IntVector handle"),
    }
}

unsafe fn handle_mut<'a>(ptr: *mut IntVector) -> &'a mut IntVector {
    match unsafe { ptr.as_mut() } {
        Some(v) => v,
        None => panic!("null IntVector handle"),
    }
}

/// Create an empty vector with room for `capacity` values.
#[unsafe(no_mangle)]
pub extern "C" fn int_vector_create(capacity: size_t) -> *mut IntVector {
    Box::into_raw(Box::new(IntVector::with_capacity(capacity)))
}

/// Release a vector. Null is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_destroy(ptr: *mut IntVector) {
    if !ptr.is_null() {
        drop(unsafe { Box::from_raw(ptr) });
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_get_capacity(ptr: *const IntVector) -> size_t {
    let v = unsafe { handle(ptr) };
    v.capacity()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_set_capacity(ptr: *mut IntVector, capacity: size_t) {
    let v = unsafe { handle_mut(ptr) };
    v.set_capacity(capacity);
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_get_size(ptr: *const IntVector) -> size_t {
    let v = unsafe { handle(ptr) };
    v.len()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_set_size(ptr: *mut IntVector, size: size_t) {
    let v = unsafe { handle_mut(ptr) };
    v.set_size(size);
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_is_empty(ptr: *const IntVector) -> bool {
    let v = unsafe { handle(ptr) };
    v.is_empty()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_is_full(ptr: *const IntVector) -> bool {
    let v = unsafe { handle(ptr) };
    v.is_full()
}

/// Pointer to the element at `index`; invalidated by any call that may reallocate.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_at(ptr: *mut IntVector, index: size_t) -> *mut c_int {
    let v = unsafe { handle_mut(ptr) };
    v.at_mut(index) as *mut c_int
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_get_at(ptr: *const IntVector, index: size_t) -> c_int {
    let v = unsafe { handle(ptr) };
    v.get_at(index)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_set_at(ptr: *mut IntVector, index: size_t, value: c_int) {
    let v = unsafe { handle_mut(ptr) };
    v.set_at(index, value);
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_insert_at(ptr: *mut IntVector, index: size_t, value: c_int) {
    let v = unsafe { handle_mut(ptr) };
    v.insert_at(index, value);
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_push_back(ptr: *mut IntVector, value: c_int) {
    let v = unsafe { handle_mut(ptr) };
    v.push_back(value);
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_push_front(ptr: *mut IntVector, value: c_int) {
    let v = unsafe { handle_mut(ptr) };
    v.push_front(value);
}

/// Remove the element at `index` and return it.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_delete_at(ptr: *mut IntVector, index: size_t) -> c_int {
    let v = unsafe { handle_mut(ptr) };
    v.delete_at(index)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_pop_back(ptr: *mut IntVector) -> c_int {
    let v = unsafe { handle_mut(ptr) };
    v.pop_back()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_pop_front(ptr: *mut IntVector) -> c_int {
    let v = unsafe { handle_mut(ptr) };
    v.pop_front()
}

/// Index of `value`, or the size when absent.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_linear_search(ptr: *const IntVector, value: c_int) -> size_t {
    let v = unsafe { handle(ptr) };
    v.linear_search(value)
}

/// Index of `value` in an ascending vector, or the size when absent.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_binary_search(ptr: *const IntVector, value: c_int) -> size_t {
    let v = unsafe { handle(ptr) };
    v.binary_search(value)
}

/// Bubble sort; returns the number of passes made.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_bubble_sort(ptr: *mut IntVector) -> size_t {
    let v = unsafe { handle_mut(ptr) };
    v.bubble_sort()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn int_vector_quick_sort(ptr: *mut IntVector) {
    let v = unsafe { handle_mut(ptr) };
    v.quick_sort();
}
