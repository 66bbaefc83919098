//! Aligned storage for packed sample buffers
//!
//! Vector backends read whole registers at a time, so buffers handed to them
//! are allocated on register boundaries and zero-initialized. Padding lanes
//! therefore always hold `0.0`.

use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use bytemuck::Pod;

use crate::{Error, Result};

/// Alignment of the widest supported register (256 bits)
pub const SIMD_ALIGNMENT: usize = 32;

/// A properly aligned, zero-initialized buffer for type T
///
/// The length is fixed at construction; contents are mutable.
pub struct AlignedBuffer<T: Pod> {
    ptr: NonNull<T>,
    len: usize,
    layout: Option<Layout>,
    _marker: PhantomData<T>,
}

impl<T: Pod> AlignedBuffer<T> {
    /// Allocate `len` zeroed elements aligned to [`SIMD_ALIGNMENT`]
    pub fn zeroed(len: usize) -> Result<Self> {
        Self::zeroed_with_alignment(len, SIMD_ALIGNMENT)
    }

    /// Allocate `len` zeroed elements with an explicit alignment
    ///
    /// Fails with [`Error::Memory`] if the alignment is not a power of two, is
    /// below the natural alignment of `T`, or the allocation fails.
    pub fn zeroed_with_alignment(len: usize, alignment: usize) -> Result<Self> {
        if !alignment.is_power_of_two() || alignment < mem::align_of::<T>() {
            return Err(Error::Memory(format!(
                "invalid alignment {alignment} for {}-byte elements",
                mem::size_of::<T>()
            )));
        }

        let bytes = len
            .checked_mul(mem::size_of::<T>())
            .ok_or_else(|| Error::Memory(format!("buffer of {len} elements overflows")))?;

        if bytes == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len,
                layout: None,
                _marker: PhantomData,
            });
        }

        let layout = Layout::from_size_align(bytes, alignment)
            .map_err(|e| Error::Memory(format!("invalid layout: {e}")))?;

        // Safety: layout has non-zero size
        let raw = unsafe { alloc_zeroed(layout) } as *mut T;
        let ptr = NonNull::new(raw)
            .ok_or_else(|| Error::Memory(format!("allocation of {bytes} bytes failed")))?;

        Ok(Self {
            ptr,
            len,
            layout: Some(layout),
            _marker: PhantomData,
        })
    }

    /// Copy a slice into a new aligned buffer
    pub fn from_slice(data: &[T]) -> Result<Self> {
        let mut buffer = Self::zeroed(data.len())?;
        buffer.as_mut_slice().copy_from_slice(data);
        Ok(buffer)
    }

    /// Get a slice of the contents
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: ptr is valid for len initialized elements (or dangling with len 0)
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Get a mutable slice of the contents
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: as above, and &mut self guarantees exclusive access
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Copy into a fresh allocation with the same alignment
    pub fn try_clone(&self) -> Result<Self> {
        let alignment = self.layout.map_or(SIMD_ALIGNMENT, |l| l.align());
        let mut copy = Self::zeroed_with_alignment(self.len, alignment)?;
        copy.as_mut_slice().copy_from_slice(self.as_slice());
        Ok(copy)
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the buffer is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Pod> Drop for AlignedBuffer<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.layout {
            // Safety: allocated in zeroed_with_alignment with this layout
            unsafe {
                dealloc(self.ptr.as_ptr() as *mut u8, layout);
            }
        }
    }
}

impl<T: Pod> fmt::Debug for AlignedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .field("align", &self.layout.map(|l| l.align()))
            .finish()
    }
}

// Safety: AlignedBuffer owns its data and T is Send
unsafe impl<T: Pod + Send> Send for AlignedBuffer<T> {}
// Safety: AlignedBuffer owns its data and T is Sync
unsafe impl<T: Pod + Sync> Sync for AlignedBuffer<T> {}
