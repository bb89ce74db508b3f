//! Opaque byte-extent accessors.

use crate::error::FieldError;
use crate::field::Field;
use crate::layout::FieldExtent;

/// A fixed-length run of raw bytes inside a container.
///
/// The extent is copied or borrowed verbatim; no endianness or bit
/// interpretation applies. Strided extents declared through
/// [`BytesField::indexed`] expose one run per occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytesField {
    field: Field,
    size: usize,
}

impl BytesField {
    /// Declares an unstrided extent of `size` bytes at `offset`.
    ///
    /// # Panics
    /// Panics during evaluation when `size` is zero; in a `const`
    /// initializer that surfaces as a compile error.
    pub const fn new(name: &'static str, offset: usize, size: usize) -> Self {
        match Self::try_new(name, offset, size) {
            Ok(field) => field,
            Err(err) => err.fail(),
        }
    }

    /// Declares a strided extent with one occurrence every `step` bytes,
    /// each displaced by `in_step_offset`.
    ///
    /// # Panics
    /// Panics during evaluation when `size` is zero; in a `const`
    /// initializer that surfaces as a compile error.
    pub const fn indexed(
        name: &'static str,
        offset: usize,
        size: usize,
        step: usize,
        in_step_offset: usize,
    ) -> Self {
        match Self::try_indexed(name, offset, size, step, in_step_offset) {
            Ok(field) => field,
            Err(err) => err.fail(),
        }
    }

    /// Fallible form of [`BytesField::new`].
    pub const fn try_new(
        name: &'static str,
        offset: usize,
        size: usize,
    ) -> Result<Self, FieldError> {
        Self::try_indexed(name, offset, size, 0, 0)
    }

    /// Fallible form of [`BytesField::indexed`].
    pub const fn try_indexed(
        name: &'static str,
        offset: usize,
        size: usize,
        step: usize,
        in_step_offset: usize,
    ) -> Result<Self, FieldError> {
        if size == 0 {
            return Err(FieldError::ZeroSize { name });
        }
        Ok(BytesField {
            field: Field {
                name,
                offset,
                step,
                in_step_offset,
            },
            size,
        })
    }

    /// Field name used in panic messages and layout lookups.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.field.name
    }

    /// Extent length in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Copies the extent out of `buf` into the front of `dst`.
    ///
    /// # Panics
    /// Panics if `dst` holds fewer than `size` bytes or the extent lies
    /// past the end of `buf`.
    #[inline]
    pub fn copy_from(&self, buf: &[u8], dst: &mut [u8]) {
        self.copy_from_at(buf, 0, dst);
    }

    /// Copies occurrence `index` of the extent out of `buf` into the front
    /// of `dst`. Bytes of `dst` past the extent are left untouched.
    ///
    /// # Panics
    /// Panics if `dst` holds fewer than `size` bytes, if `index` is
    /// non-zero for an unstrided field, or if the extent lies past the end
    /// of `buf`.
    pub fn copy_from_at(&self, buf: &[u8], index: usize, dst: &mut [u8]) {
        assert!(
            dst.len() >= self.size,
            "field {}: destination holds {} bytes, extent needs {}",
            self.field.name,
            dst.len(),
            self.size
        );
        dst[..self.size].copy_from_slice(self.data_at(buf, index));
    }

    /// Copies the front of `src` into the extent in `buf`.
    ///
    /// # Panics
    /// Panics if `src` holds fewer than `size` bytes or the extent lies
    /// past the end of `buf`.
    #[inline]
    pub fn copy_to(&self, buf: &mut [u8], src: &[u8]) {
        self.copy_to_at(buf, 0, src);
    }

    /// Copies the front of `src` into occurrence `index` of the extent in
    /// `buf`. Bytes of `src` past the extent are ignored.
    ///
    /// # Panics
    /// Panics if `src` holds fewer than `size` bytes, if `index` is
    /// non-zero for an unstrided field, or if the extent lies past the end
    /// of `buf`.
    pub fn copy_to_at(&self, buf: &mut [u8], index: usize, src: &[u8]) {
        assert!(
            src.len() >= self.size,
            "field {}: source holds {} bytes, extent needs {}",
            self.field.name,
            src.len(),
            self.size
        );
        self.data_mut_at(buf, index).copy_from_slice(&src[..self.size]);
    }

    /// Borrows the extent from `buf`.
    ///
    /// # Panics
    /// Panics if the extent lies past the end of `buf`.
    #[inline]
    pub fn data<'b>(&self, buf: &'b [u8]) -> &'b [u8] {
        self.data_at(buf, 0)
    }

    /// Borrows occurrence `index` of the extent from `buf`.
    ///
    /// # Panics
    /// Panics if `index` is non-zero for an unstrided field or the extent
    /// lies past the end of `buf`.
    pub fn data_at<'b>(&self, buf: &'b [u8], index: usize) -> &'b [u8] {
        let (start, end) = self.span(buf.len(), index);
        &buf[start..end]
    }

    /// Mutably borrows the extent from `buf`.
    ///
    /// # Panics
    /// Panics if the extent lies past the end of `buf`.
    #[inline]
    pub fn data_mut<'b>(&self, buf: &'b mut [u8]) -> &'b mut [u8] {
        self.data_mut_at(buf, 0)
    }

    /// Mutably borrows occurrence `index` of the extent from `buf`.
    ///
    /// # Panics
    /// Panics if `index` is non-zero for an unstrided field or the extent
    /// lies past the end of `buf`.
    pub fn data_mut_at<'b>(&self, buf: &'b mut [u8], index: usize) -> &'b mut [u8] {
        let (start, end) = self.span(buf.len(), index);
        &mut buf[start..end]
    }

    /// Resolves occurrence `index` and bounds-checks the extent against `len`.
    fn span(&self, len: usize, index: usize) -> (usize, usize) {
        let start = self.field.element_offset(index, 1);
        let end = match start.checked_add(self.size) {
            Some(end) => end,
            None => panic!("field {}: byte position overflow", self.field.name),
        };
        assert!(
            end <= len,
            "field {}: extent {start:#x}..{end:#x} past the end of a {len}-byte buffer",
            self.field.name
        );
        (start, end)
    }
}

impl FieldExtent for BytesField {
    fn name(&self) -> &'static str {
        self.field.name
    }

    fn extent(&self) -> usize {
        self.field.offset + self.field.in_step_offset + self.size
    }
}
