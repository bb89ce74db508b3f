//! Descriptor-driven accessors for fixed-layout, big-endian hardware buffers.
//!
//! Command mailboxes, register files, and DMA descriptors expose their
//! contents as fixed-size byte buffers whose fields sit at declared bit and
//! byte positions. This crate turns each declaration into a typed
//! descriptor that reads and writes its field in place, so a buffer layout
//! is stated once and every access goes through the same arithmetic.
//!
//! # Features
//!
//! - **Zero heap allocation** - Descriptors are plain `const` data over caller-owned buffers
//! - **Scalar bit windows** - Narrow fields inside big-endian `u8`/`u16`/`u32`/`u64` units
//! - **Opaque byte extents** - Copy in/out or borrow raw runs such as MAC addresses
//! - **Packed bit arrays** - 1/2/4/8-bit elements addressed from the vector's least significant end
//! - **Strided occurrences** - One descriptor covers a whole table of repeated entries
//! - **Construction-time validation** - Misdeclared fields fail before any buffer is touched
//!
//! # Layout model
//!
//! Every descriptor resolves an occurrence to a storage unit the same way:
//!
//! ```text
//! unit_index = (byte_offset + step * index + in_step_offset) / unit_size
//! ```
//!
//! Scalar fields then address a window of `bits` bits `shift` bits up from
//! the least significant end of that big-endian unit. Byte extents and bit
//! arrays work on the raw bytes; bit arrays treat their extent as one
//! big-endian bit vector with element 0 in the last byte's low bits.
//!
//! Buffers stay plain `&[u8]` / `&mut [u8]` owned by the caller. A
//! descriptor never stores buffer state, so one `const` table of fields
//! serves every buffer of that layout concurrently.
//!
//! # Example
//!
//! ```rust
//! use embedded_regfield::prelude::*;
//!
//! // Fields of a 16-byte command mailbox, declared once.
//! const OP: ScalarField<u8> = ScalarField::new("cmd_op", 0x0, 0, 8);
//! const PRIO: ScalarField<u8> = ScalarField::new("cmd_prio", 0x1, 5, 3);
//! const PORT_RATE: ScalarField<u16> =
//!     ScalarField::indexed("cmd_port_rate", 0x4, 0, 12, 0x2, 0x0);
//! const DEST_MAC: BytesField = BytesField::new("cmd_dest_mac", 0xA, 6);
//!
//! let mut buf = [0u8; 16];
//! OP.set(&mut buf, 0x21);
//! PRIO.set(&mut buf, 0x5);
//! PORT_RATE.set_at(&mut buf, 1, 0x9C4);
//! DEST_MAC.copy_to(&mut buf, &[0x02, 0x1A, 0x5E, 0x00, 0x01, 0xFF]);
//!
//! // cmd_prio occupies the top three bits of byte 1.
//! assert_eq!(buf[1], 0xA0);
//! assert_eq!(PORT_RATE.get_at(&buf, 1), 0x9C4);
//! assert_eq!(DEST_MAC.data(&buf), &[0x02, 0x1A, 0x5E, 0x00, 0x01, 0xFF]);
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod bit_array;
pub mod bytes;
pub mod error;
pub mod layout;
pub mod scalar;
pub mod wire;

pub(crate) mod field;

#[cfg(test)]
pub(crate) mod test_support;

pub use bit_array::BitArrayField;
pub use bytes::BytesField;
pub use error::FieldError;
pub use layout::{FieldExtent, Layout};
pub use scalar::ScalarField;
pub use wire::WireInt;

pub mod prelude {
    pub use crate::bit_array::BitArrayField;
    pub use crate::bytes::BytesField;
    pub use crate::error::FieldError;
    pub use crate::layout::{FieldExtent, Layout};
    pub use crate::scalar::ScalarField;
    pub use crate::wire::WireInt;
}
