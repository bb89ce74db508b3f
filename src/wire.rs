//! Big-endian storage-unit access shared by every codec.
//!
//! Multi-byte loads and stores address the buffer in units of the storage
//! size, matching how strided field positions resolve to unit indices.

use core::ops::{BitAnd, BitOr, Not, Shl, Shr};

/// A big-endian storage unit a scalar window lives inside.
///
/// Implemented for `u8`, `u16`, `u32`, and `u64`. `SIZE` and `BITS` must
/// describe the same width or offset resolution and masking fall apart.
pub trait WireInt:
    Copy
    + Eq
    + core::fmt::Debug
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    /// Storage unit width in bits.
    const BITS: u32;
    /// Storage unit width in bytes.
    const SIZE: usize;

    /// Loads storage unit `at` of `buf`, counted in `SIZE`-byte units.
    fn read_be(buf: &[u8], at: usize) -> Self;
    /// Stores `value` as storage unit `at` of `buf`, counted in `SIZE`-byte units.
    fn write_be(buf: &mut [u8], at: usize, value: Self);
    /// Mask covering the low `bits` bits.
    fn mask(bits: u32) -> Self;
}

/// Generates the unit accessors and `WireInt` impl for a single width.
macro_rules! impl_wire_int {
    // Single byte - no endianness suffix
    (u8) => {
        /// Reads the byte at `at`.
        ///
        /// # Panics
        /// Panics if `at >= buf.len()`.
        #[inline]
        pub fn read_u8_at(buf: &[u8], at: usize) -> u8 {
            buf[at]
        }

        /// Writes the byte at `at`.
        ///
        /// # Panics
        /// Panics if `at >= buf.len()`.
        #[inline]
        pub fn write_u8_at(buf: &mut [u8], at: usize, value: u8) {
            buf[at] = value;
        }

        impl WireInt for u8 {
            const BITS: u32 = 8;
            const SIZE: usize = 1;

            #[inline]
            fn read_be(buf: &[u8], at: usize) -> u8 {
                read_u8_at(buf, at)
            }

            #[inline]
            fn write_be(buf: &mut [u8], at: usize, value: u8) {
                write_u8_at(buf, at, value);
            }

            #[inline]
            fn mask(bits: u32) -> u8 {
                debug_assert!(bits <= 8);
                if bits == 8 { u8::MAX } else { (1u8 << bits) - 1 }
            }
        }
    };
    // Multi-byte - big-endian, addressed in storage units
    ($type:ty, $size:literal) => {
        paste::paste! {
            #[doc = "Reads the big-endian `" $type "` at storage unit `at`."]
            #[doc = ""]
            #[doc = "`at` counts in " $size "-byte units from the start of `buf`."]
            #[doc = ""]
            #[doc = "# Panics"]
            #[doc = "Panics if `(at + 1) * " $size " > buf.len()`."]
            #[inline]
            pub fn [<read_ $type _be_at>](buf: &[u8], at: usize) -> $type {
                let offset = at * $size;
                assert!(
                    offset + $size <= buf.len(),
                    "read out of bounds: offset {} + size {} > len {}",
                    offset, $size, buf.len()
                );
                <$type>::from_be_bytes(buf[offset..offset + $size].try_into().unwrap())
            }

            #[doc = "Writes `value` as the big-endian `" $type "` at storage unit `at`."]
            #[doc = ""]
            #[doc = "`at` counts in " $size "-byte units from the start of `buf`."]
            #[doc = ""]
            #[doc = "# Panics"]
            #[doc = "Panics if `(at + 1) * " $size " > buf.len()`."]
            #[inline]
            pub fn [<write_ $type _be_at>](buf: &mut [u8], at: usize, value: $type) {
                let offset = at * $size;
                assert!(
                    offset + $size <= buf.len(),
                    "write out of bounds: offset {} + size {} > len {}",
                    offset, $size, buf.len()
                );
                buf[offset..offset + $size].copy_from_slice(&value.to_be_bytes());
            }

            impl WireInt for $type {
                const BITS: u32 = $size * 8;
                const SIZE: usize = $size;

                #[inline]
                fn read_be(buf: &[u8], at: usize) -> $type {
                    [<read_ $type _be_at>](buf, at)
                }

                #[inline]
                fn write_be(buf: &mut [u8], at: usize, value: $type) {
                    [<write_ $type _be_at>](buf, at, value);
                }

                #[inline]
                fn mask(bits: u32) -> $type {
                    debug_assert!(bits <= $size * 8);
                    if bits == $size * 8 {
                        <$type>::MAX
                    } else {
                        ((1 as $type) << bits) - 1
                    }
                }
            }
        }
    };
}

impl_wire_int!(u8);
impl_wire_int!(u16, 2);
impl_wire_int!(u32, 4);
impl_wire_int!(u64, 8);
