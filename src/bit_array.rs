//! Sub-byte element accessors over big-endian bit vectors.

use crate::error::FieldError;
use crate::field::Field;
use crate::layout::FieldExtent;

/// An array of 1, 2, 4, or 8-bit elements packed into a byte extent.
///
/// The extent is a big-endian bit vector: element 0 occupies the least
/// significant bits of the extent's last byte, and ascending indices walk
/// toward the most significant bits of the first byte. Devices lay out
/// per-port and per-queue state this way so that element `n` corresponds
/// to bit position `n * element_bits` of the vector as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitArrayField {
    field: Field,
    size: usize,
    element_bits: u32,
}

impl BitArrayField {
    /// Declares a bit array of `size` bytes at `offset`, split into
    /// `element_bits`-wide elements.
    ///
    /// # Panics
    /// Panics during evaluation when the descriptor is invalid; in a
    /// `const` initializer that surfaces as a compile error.
    pub const fn new(name: &'static str, offset: usize, size: usize, element_bits: u32) -> Self {
        match Self::try_new(name, offset, size, element_bits) {
            Ok(field) => field,
            Err(err) => err.fail(),
        }
    }

    /// Fallible form of [`BitArrayField::new`].
    ///
    /// The extent must be non-empty, `element_bits` must evenly divide a
    /// byte, and `offset` must be 32-bit aligned.
    pub const fn try_new(
        name: &'static str,
        offset: usize,
        size: usize,
        element_bits: u32,
    ) -> Result<Self, FieldError> {
        if size == 0 {
            return Err(FieldError::ZeroSize { name });
        }
        if element_bits == 0 || element_bits > 8 || 8 % element_bits != 0 {
            return Err(FieldError::BadElementSize { name, element_bits });
        }
        if offset % 4 != 0 {
            return Err(FieldError::UnalignedBitArray { name, offset });
        }
        Ok(BitArrayField {
            field: Field {
                name,
                offset,
                step: 0,
                in_step_offset: 0,
            },
            size,
            element_bits,
        })
    }

    /// Field name used in panic messages and layout lookups.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.field.name
    }

    /// Number of elements the extent holds.
    #[inline]
    pub const fn element_count(&self) -> usize {
        self.size * 8 / self.element_bits as usize
    }

    /// Reads element `index`, right-aligned.
    ///
    /// # Panics
    /// Panics if `index` is past the last element or the element's byte
    /// lies past the end of `buf`.
    pub fn get(&self, buf: &[u8], index: usize) -> u8 {
        let (byte, shift) = self.position(buf.len(), index);
        (buf[byte] >> shift) & self.element_mask()
    }

    /// Writes element `index`. Value bits beyond the element width are
    /// silently discarded.
    ///
    /// # Panics
    /// Panics if `index` is past the last element or the element's byte
    /// lies past the end of `buf`.
    pub fn set(&self, buf: &mut [u8], index: usize, value: u8) {
        let (byte, shift) = self.position(buf.len(), index);
        let window = self.element_mask() << shift;
        buf[byte] = (buf[byte] & !window) | ((value << shift) & window);
    }

    /// Resolves element `index` to a byte position and an in-byte shift.
    ///
    /// Indices count from the least significant end of the vector, so the
    /// byte position walks the extent backwards while the shift walks each
    /// byte forwards.
    fn position(&self, len: usize, index: usize) -> (usize, u32) {
        let max_index = self.element_count() - 1;
        assert!(
            index <= max_index,
            "field {}: element {index} past the last element {max_index}",
            self.field.name
        );
        let be_index = max_index - index;
        let byte_in_extent = (be_index * self.element_bits as usize) >> 3;
        let in_byte_index = index % (8 / self.element_bits as usize);
        let byte = self.field.offset + byte_in_extent;
        assert!(
            byte < len,
            "field {}: byte {byte:#x} past the end of a {len}-byte buffer",
            self.field.name
        );
        (byte, in_byte_index as u32 * self.element_bits)
    }

    #[inline]
    fn element_mask(&self) -> u8 {
        if self.element_bits == 8 {
            0xFF
        } else {
            (1u8 << self.element_bits) - 1
        }
    }
}

impl FieldExtent for BitArrayField {
    fn name(&self) -> &'static str {
        self.field.name
    }

    fn extent(&self) -> usize {
        self.field.offset + self.size
    }
}
