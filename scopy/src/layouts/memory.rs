use bytemuck::Pod;

use crate::MemoryError;

/// Size in bytes of one linear memory page.
pub const PAGE_SIZE: usize = 65536;

const PAGE_WORDS: usize = PAGE_SIZE / size_of::<u64>();

/// Maximum number of pages addressable with 32-bit byte offsets.
pub const MAX_PAGES: usize = 65536;

/// Size parameters of a [`LinearMemory`], in pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryDescriptor {
    pub initial: usize,
    pub maximum: Option<usize>,
}

impl Default for MemoryDescriptor {
    fn default() -> Self {
        Self {
            initial: 1,
            maximum: None,
        }
    }
}

impl MemoryDescriptor {
    pub fn new(initial: usize, maximum: Option<usize>) -> Self {
        Self { initial, maximum }
    }

    /// Effective upper bound on the number of pages.
    pub fn limit(&self) -> usize {
        self.maximum.unwrap_or(MAX_PAGES)
    }

    pub fn validate(&self) -> Result<(), MemoryError> {
        if self.limit() > MAX_PAGES {
            return Err(MemoryError::MaximumExceedsLimit {
                maximum: self.limit(),
                limit: MAX_PAGES,
            });
        }
        if self.initial > self.limit() {
            return Err(MemoryError::InitialExceedsMaximum {
                initial: self.initial,
                maximum: self.limit(),
            });
        }
        Ok(())
    }
}

/// Owned, zero-initialized, byte-addressable buffer sized in whole pages.
///
/// Backed by `u64` words so that the host address of byte offset `0` is
/// 8-byte aligned; typed values are stored in host byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearMemory {
    data: Vec<u64>,
    maximum: usize,
}

impl LinearMemory {
    pub fn new(desc: MemoryDescriptor) -> Result<Self, MemoryError> {
        desc.validate()?;
        log::debug!(
            "allocating linear memory: {} pages ({} bytes), maximum {} pages",
            desc.initial,
            desc.initial * PAGE_SIZE,
            desc.limit()
        );
        Ok(Self {
            data: vec![0u64; desc.initial * PAGE_WORDS],
            maximum: desc.limit(),
        })
    }

    pub(crate) fn empty() -> Self {
        Self {
            data: Vec::new(),
            maximum: 0,
        }
    }

    /// Current size in pages.
    pub fn pages(&self) -> usize {
        self.data.len() / PAGE_WORDS
    }

    pub fn maximum(&self) -> usize {
        self.maximum
    }

    pub fn byte_length(&self) -> usize {
        self.data.len() * size_of::<u64>()
    }

    /// Grows the memory by `delta` zero-filled pages and returns the previous
    /// size in pages. Existing contents are preserved.
    pub fn grow(&mut self, delta: usize) -> Result<usize, MemoryError> {
        let pages: usize = self.pages();
        if delta > self.maximum - pages {
            return Err(MemoryError::GrowExceedsMaximum {
                pages,
                delta,
                maximum: self.maximum,
            });
        }
        log::debug!("growing linear memory: {} -> {} pages", pages, pages + delta);
        self.data.resize((pages + delta) * PAGE_WORDS, 0);
        Ok(pages)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.data)
    }

    /// Zeroes the whole memory.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    fn range(&self, ptr: usize, len: usize) -> Result<std::ops::Range<usize>, MemoryError> {
        let byte_length: usize = self.byte_length();
        match ptr.checked_add(len) {
            Some(end) if end <= byte_length => Ok(ptr..end),
            _ => {
                log::trace!("rejecting access of {len} bytes at {ptr}");
                Err(MemoryError::OutOfBounds { ptr, len, byte_length })
            }
        }
    }

    /// Copies `values` into memory starting at byte offset `ptr`.
    pub fn write<T: Pod>(&mut self, ptr: usize, values: &[T]) -> Result<(), MemoryError> {
        let src: &[u8] = bytemuck::cast_slice(values);
        let range = self.range(ptr, src.len())?;
        self.as_bytes_mut()[range].copy_from_slice(src);
        Ok(())
    }

    /// Copies `values.len()` elements starting at byte offset `ptr` into `values`.
    pub fn read<T: Pod>(&self, ptr: usize, values: &mut [T]) -> Result<(), MemoryError> {
        let dst: &mut [u8] = bytemuck::cast_slice_mut(values);
        let range = self.range(ptr, dst.len())?;
        dst.copy_from_slice(&self.as_bytes()[range]);
        Ok(())
    }

    /// Borrows `len` elements starting at byte offset `ptr` as a typed slice.
    ///
    /// Fails with [`MemoryError::Misaligned`] when the host address of `ptr` is
    /// not aligned for `T`; use [`LinearMemory::read`] in that case.
    pub fn view<T: Pod>(&self, ptr: usize, len: usize) -> Result<&[T], MemoryError> {
        let range = self.range(ptr, len.saturating_mul(size_of::<T>()))?;
        bytemuck::try_cast_slice(&self.as_bytes()[range]).map_err(|_| MemoryError::Misaligned {
            ptr,
            align: align_of::<T>(),
        })
    }

    /// Mutable counterpart of [`LinearMemory::view`].
    pub fn view_mut<T: Pod>(&mut self, ptr: usize, len: usize) -> Result<&mut [T], MemoryError> {
        let range = self.range(ptr, len.saturating_mul(size_of::<T>()))?;
        bytemuck::try_cast_slice_mut(&mut self.as_bytes_mut()[range]).map_err(|_| MemoryError::Misaligned {
            ptr,
            align: align_of::<T>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_descriptor_allocates_one_page() {
        let mem: LinearMemory = LinearMemory::new(MemoryDescriptor::default()).unwrap();
        assert_eq!(mem.pages(), 1);
        assert_eq!(mem.byte_length(), PAGE_SIZE);
        assert!(mem.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn descriptor_validation() {
        assert_eq!(
            LinearMemory::new(MemoryDescriptor::new(3, Some(2))),
            Err(MemoryError::InitialExceedsMaximum {
                initial: 3,
                maximum: 2
            })
        );
        assert_eq!(
            LinearMemory::new(MemoryDescriptor::new(0, Some(MAX_PAGES + 1))),
            Err(MemoryError::MaximumExceedsLimit {
                maximum: MAX_PAGES + 1,
                limit: MAX_PAGES
            })
        );
        assert!(LinearMemory::new(MemoryDescriptor::new(0, Some(0))).is_ok());
    }

    #[test]
    fn grow_preserves_contents() {
        let mut mem: LinearMemory = LinearMemory::new(MemoryDescriptor::new(1, Some(3))).unwrap();
        mem.write(PAGE_SIZE - 4, &[1.5f32]).unwrap();
        assert_eq!(mem.grow(2), Ok(1));
        assert_eq!(mem.pages(), 3);
        let mut have: [f32; 2] = [0.0; 2];
        mem.read(PAGE_SIZE - 4, &mut have).unwrap();
        assert_eq!(have, [1.5, 0.0]);
        assert_eq!(
            mem.grow(1),
            Err(MemoryError::GrowExceedsMaximum {
                pages: 3,
                delta: 1,
                maximum: 3
            })
        );
    }

    #[test]
    fn write_read_bounds() {
        let mut mem: LinearMemory = LinearMemory::new(MemoryDescriptor::new(1, None)).unwrap();
        let values: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
        assert!(mem.write(PAGE_SIZE - 16, &values).is_ok());
        assert_eq!(
            mem.write(PAGE_SIZE - 12, &values),
            Err(MemoryError::OutOfBounds {
                ptr: PAGE_SIZE - 12,
                len: 16,
                byte_length: PAGE_SIZE
            })
        );
        let mut out: [f32; 4] = [0.0; 4];
        assert!(mem.read(usize::MAX, &mut out).is_err());
        mem.read(PAGE_SIZE - 16, &mut out).unwrap();
        assert_eq!(out, values);
    }

    #[test]
    fn clear_zeroes_every_page() {
        let mut mem: LinearMemory = LinearMemory::new(MemoryDescriptor::new(2, None)).unwrap();
        mem.write(3, &[1.0f32, -2.0]).unwrap();
        mem.write(PAGE_SIZE + 7, &[u64::MAX]).unwrap();
        mem.clear();
        assert_eq!(mem.pages(), 2);
        assert!(mem.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn write_uses_host_byte_order() {
        let mut mem: LinearMemory = LinearMemory::new(MemoryDescriptor::default()).unwrap();
        mem.write(0, &[1.0f32]).unwrap();
        assert_eq!(&mem.as_bytes()[..4], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn typed_view() {
        let mut mem: LinearMemory = LinearMemory::new(MemoryDescriptor::default()).unwrap();
        mem.write(8, &[4.0f32, 5.0, 6.0]).unwrap();
        assert_eq!(mem.view::<f32>(8, 3).unwrap(), &[4.0, 5.0, 6.0]);
        mem.view_mut::<f32>(12, 1).unwrap()[0] = 7.0;
        assert_eq!(mem.view::<f32>(8, 3).unwrap(), &[4.0, 7.0, 6.0]);
        assert_eq!(
            mem.view::<f32>(2, 1),
            Err(MemoryError::Misaligned { ptr: 2, align: 4 })
        );
    }
}
