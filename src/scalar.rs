//! Bit-window accessors over big-endian storage units.

use core::marker::PhantomData;

use crate::error::FieldError;
use crate::field::Field;
use crate::layout::FieldExtent;
use crate::wire::WireInt;

/// A bit window inside a big-endian storage unit of type `T`.
///
/// The window covers `bits` bits starting `shift` bits up from the least
/// significant end of the unit. Reads return the window right-aligned and
/// writes replace only the window, leaving the rest of the unit intact.
/// A descriptor marked with [`ScalarField::preserve_shift`] exchanges
/// values in field position instead of right-aligning them.
///
/// A non-zero step declared through [`ScalarField::indexed`] turns the
/// field into a strided series; `get_at` and `set_at` address individual
/// occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarField<T> {
    field: Field,
    shift: u32,
    bits: u32,
    preserve_shift: bool,
    _unit: PhantomData<T>,
}

impl<T: WireInt> ScalarField<T> {
    /// Declares an unstrided field.
    ///
    /// # Panics
    /// Panics during evaluation when the descriptor is invalid; in a
    /// `const` initializer that surfaces as a compile error.
    pub const fn new(name: &'static str, offset: usize, shift: u32, bits: u32) -> Self {
        match Self::try_new(name, offset, shift, bits) {
            Ok(field) => field,
            Err(err) => err.fail(),
        }
    }

    /// Declares a strided field with one occurrence every `step` bytes,
    /// each displaced by `in_step_offset`.
    ///
    /// # Panics
    /// Panics during evaluation when the descriptor is invalid; in a
    /// `const` initializer that surfaces as a compile error.
    pub const fn indexed(
        name: &'static str,
        offset: usize,
        shift: u32,
        bits: u32,
        step: usize,
        in_step_offset: usize,
    ) -> Self {
        match Self::try_indexed(name, offset, shift, bits, step, in_step_offset) {
            Ok(field) => field,
            Err(err) => err.fail(),
        }
    }

    /// Fallible form of [`ScalarField::new`].
    pub const fn try_new(
        name: &'static str,
        offset: usize,
        shift: u32,
        bits: u32,
    ) -> Result<Self, FieldError> {
        Self::try_indexed(name, offset, shift, bits, 0, 0)
    }

    /// Fallible form of [`ScalarField::indexed`].
    ///
    /// Validates the descriptor against the storage unit: the window must
    /// hold at least one bit and at most `T::BITS`, the shift must stay
    /// inside the unit, and `offset`, `step`, and `in_step_offset` must
    /// each be divisible by `T::SIZE`.
    pub const fn try_indexed(
        name: &'static str,
        offset: usize,
        shift: u32,
        bits: u32,
        step: usize,
        in_step_offset: usize,
    ) -> Result<Self, FieldError> {
        if bits == 0 || bits > T::BITS {
            return Err(FieldError::WidthOutOfRange {
                name,
                bits,
                storage_bits: T::BITS,
            });
        }
        if shift >= T::BITS {
            return Err(FieldError::ShiftOutOfRange {
                name,
                shift,
                storage_bits: T::BITS,
            });
        }
        if offset % T::SIZE != 0 || step % T::SIZE != 0 || in_step_offset % T::SIZE != 0 {
            return Err(FieldError::Misaligned {
                name,
                offset,
                step,
                in_step_offset,
                width: T::SIZE,
            });
        }
        Ok(ScalarField {
            field: Field {
                name,
                offset,
                step,
                in_step_offset,
            },
            shift,
            bits,
            preserve_shift: false,
            _unit: PhantomData,
        })
    }

    /// Marks the shift as virtual: values are exchanged in field position
    /// rather than right-aligned.
    pub const fn preserve_shift(mut self) -> Self {
        self.preserve_shift = true;
        self
    }

    /// Field name used in panic messages and layout lookups.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.field.name
    }

    /// Reads the field from `buf`.
    ///
    /// # Panics
    /// Panics if the storage unit lies past the end of `buf`.
    #[inline]
    pub fn get(&self, buf: &[u8]) -> T {
        self.get_at(buf, 0)
    }

    /// Writes the field to `buf`. Value bits outside the window are
    /// silently discarded.
    ///
    /// # Panics
    /// Panics if the storage unit lies past the end of `buf`.
    #[inline]
    pub fn set(&self, buf: &mut [u8], value: T) {
        self.set_at(buf, 0, value);
    }

    /// Reads occurrence `index` of the field from `buf`.
    ///
    /// # Panics
    /// Panics if `index` is non-zero for an unstrided field, or if the
    /// resolved storage unit lies past the end of `buf`.
    pub fn get_at(&self, buf: &[u8], index: usize) -> T {
        let at = self.unit_index(buf.len(), index);
        let value = (T::read_be(buf, at) >> self.shift) & T::mask(self.bits);
        if self.preserve_shift {
            value << self.shift
        } else {
            value
        }
    }

    /// Writes occurrence `index` of the field to `buf`. Value bits outside
    /// the window are silently discarded.
    ///
    /// # Panics
    /// Panics if `index` is non-zero for an unstrided field, or if the
    /// resolved storage unit lies past the end of `buf`.
    pub fn set_at(&self, buf: &mut [u8], index: usize, value: T) {
        let at = self.unit_index(buf.len(), index);
        let window = T::mask(self.bits) << self.shift;
        let positioned = if self.preserve_shift {
            value
        } else {
            value << self.shift
        };
        let unit = (T::read_be(buf, at) & !window) | (positioned & window);
        T::write_be(buf, at, unit);
    }

    /// Resolves occurrence `index` and bounds-checks the unit against `len`.
    fn unit_index(&self, len: usize, index: usize) -> usize {
        let at = self.field.element_offset(index, T::SIZE);
        assert!(
            at < len / T::SIZE,
            "field {}: {}-byte unit {at} past the end of a {len}-byte buffer",
            self.field.name,
            T::SIZE
        );
        at
    }
}

impl<T: WireInt> FieldExtent for ScalarField<T> {
    fn name(&self) -> &'static str {
        self.field.name
    }

    fn extent(&self) -> usize {
        self.field.offset + self.field.in_step_offset + T::SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    // Three bits in the top of byte 1.
    const PRIO: ScalarField<u8> = ScalarField::new("cmd_prio", 0x1, 5, 3);

    #[test]
    fn narrow_window_round_trips() {
        let mut buf = [0u8; 4];
        PRIO.set(&mut buf, 0x5);
        assert_eq!(buf, [0x00, 0xA0, 0x00, 0x00]);
        assert_eq!(PRIO.get(&buf), 0x5);
        assert_eq!(PRIO.name(), "cmd_prio");
    }

    #[test]
    fn writes_touch_only_the_window() {
        let mut buf = [0xFF; 4];
        PRIO.set(&mut buf, 0);
        // Bits 5..8 of byte 1 cleared, everything else untouched.
        assert_eq!(buf, [0xFF, 0x1F, 0xFF, 0xFF]);
        assert_eq!(PRIO.get(&buf), 0);
    }

    #[test]
    fn value_bits_outside_the_window_are_discarded() {
        let mut buf = [0u8; 4];
        PRIO.set(&mut buf, 0xFF);
        assert_eq!(PRIO.get(&buf), 0x7);
        assert_eq!(buf[1], 0xE0);
    }

    #[test]
    fn wide_units_round_trip() {
        let speed = ScalarField::<u16>::new("cmd_speed", 0x2, 4, 9);
        let mut buf = [0u8; 4];
        speed.set(&mut buf, 0x1A5);
        // 0x1A5 << 4 = 0x1A50, big-endian across bytes 2..4.
        assert_eq!(buf, [0x00, 0x00, 0x1A, 0x50]);
        assert_eq!(speed.get(&buf), 0x1A5);

        let counter = ScalarField::<u64>::new("cmd_counter", 0x8, 0, 48);
        let mut buf = [0u8; 16];
        counter.set(&mut buf, 0xAABB_CCDD_EEFF);
        assert_eq!(counter.get(&buf), 0xAABB_CCDD_EEFF);
        assert_eq!(&buf[8..], &[0x00, 0x00, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn full_width_window_replaces_the_unit() {
        let word = ScalarField::<u32>::new("cmd_word", 0x4, 0, 32);
        let mut buf = [0xA5u8; 12];
        word.set(&mut buf, 0x0102_0304);
        assert_eq!(
            buf,
            [0xA5, 0xA5, 0xA5, 0xA5, 0x01, 0x02, 0x03, 0x04, 0xA5, 0xA5, 0xA5, 0xA5]
        );
        assert_eq!(word.get(&buf), 0x0102_0304);
    }

    #[test]
    fn virtual_shift_exchanges_values_in_field_position() {
        let flags = ScalarField::<u8>::new("cmd_flags", 0x0, 4, 4).preserve_shift();
        let mut buf = [0u8; 2];
        flags.set(&mut buf, 0x50);
        // Stored in bits 4..8 without an extra shift.
        assert_eq!(buf[0], 0x50);
        assert_eq!(flags.get(&buf), 0x50);

        // Low nibble of the value lies outside the window and is dropped.
        flags.set(&mut buf, 0x0F);
        assert_eq!(buf[0], 0x00);
    }

    #[test]
    fn strided_occurrences_resolve_per_index() {
        let rate = ScalarField::<u16>::indexed("cmd_port_rate", 0x4, 0, 12, 0x8, 0x2);
        let mut buf: [u8; 0x20] = test_support::patterned();
        let snapshot = buf;
        rate.set_at(&mut buf, 0, 0x123);
        rate.set_at(&mut buf, 2, 0x9C4);
        // Occurrence 0 at 0x4 + 0x2, occurrence 2 at 0x4 + 0x10 + 0x2; the
        // top nibble of each unit keeps its previous contents.
        assert_eq!(&buf[0x6..0x8], &[0x11, 0x23]);
        assert_eq!(&buf[0x16..0x18], &[0x29, 0xC4]);
        assert_eq!(rate.get_at(&buf, 0), 0x123);
        assert_eq!(rate.get_at(&buf, 2), 0x9C4);
        test_support::assert_untouched_outside(&snapshot, &buf, &[0x6..0x8, 0x16..0x18]);
    }

    #[test]
    fn byte_occurrences_sit_exactly_one_step_apart() {
        let status = ScalarField::<u8>::indexed("cmd_lane_status", 0x0, 0, 8, 4, 1);
        let mut buf = [0u8; 12];
        status.set_at(&mut buf, 0, 0xAA);
        status.set_at(&mut buf, 1, 0xBB);
        assert_eq!(buf, [0, 0xAA, 0, 0, 0, 0xBB, 0, 0, 0, 0, 0, 0]);
        assert_eq!(status.get_at(&buf, 0), 0xAA);
        assert_eq!(status.get_at(&buf, 1), 0xBB);
    }

    #[test]
    fn overwide_window_truncates_at_the_unit_top() {
        // Eight declared bits starting at bit 4 leave only four in the unit.
        let tail = ScalarField::<u8>::new("cmd_tail", 0x0, 4, 8);
        let mut buf = [0u8; 1];
        tail.set(&mut buf, 0x12);
        assert_eq!(buf[0], 0x20);
        assert_eq!(tail.get(&buf), 0x2);
    }

    #[test]
    #[should_panic(expected = "cmd_prio")]
    fn short_buffer_is_fatal_and_names_the_field() {
        PRIO.get(&[0u8; 1]);
    }

    #[test]
    #[should_panic(expected = "indexed access without a stride")]
    fn indexing_an_unstrided_field_is_fatal() {
        PRIO.get_at(&[0u8; 4], 2);
    }

    #[test]
    fn invalid_descriptors_are_rejected_at_construction() {
        assert_eq!(
            ScalarField::<u32>::try_new("cmd_bad", 0x3, 0, 8),
            Err(FieldError::Misaligned {
                name: "cmd_bad",
                offset: 0x3,
                step: 0,
                in_step_offset: 0,
                width: 4,
            })
        );
        assert_eq!(
            ScalarField::<u16>::try_indexed("cmd_bad", 0x0, 0, 8, 0x3, 0),
            Err(FieldError::Misaligned {
                name: "cmd_bad",
                offset: 0x0,
                step: 0x3,
                in_step_offset: 0,
                width: 2,
            })
        );
        assert_eq!(
            ScalarField::<u8>::try_new("cmd_bad", 0x0, 0, 0),
            Err(FieldError::WidthOutOfRange {
                name: "cmd_bad",
                bits: 0,
                storage_bits: 8,
            })
        );
        assert_eq!(
            ScalarField::<u32>::try_new("cmd_bad", 0x0, 0, 33),
            Err(FieldError::WidthOutOfRange {
                name: "cmd_bad",
                bits: 33,
                storage_bits: 32,
            })
        );
        assert_eq!(
            ScalarField::<u16>::try_new("cmd_bad", 0x0, 16, 1),
            Err(FieldError::ShiftOutOfRange {
                name: "cmd_bad",
                shift: 16,
                storage_bits: 16,
            })
        );
    }
}
