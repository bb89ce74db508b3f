/// Errors raised by descriptor construction and layout registration.
///
/// Every variant is a configuration bug in a declared descriptor, never a
/// runtime condition of buffer contents. Variants carry the field name and
/// the offending values so the rendered message identifies the exact
/// declaration at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Offset, step, or in-step offset is not divisible by the access width.
    Misaligned {
        name: &'static str,
        offset: usize,
        step: usize,
        in_step_offset: usize,
        width: usize,
    },
    /// Scalar bit width is zero or wider than the storage unit.
    WidthOutOfRange {
        name: &'static str,
        bits: u32,
        storage_bits: u32,
    },
    /// Bit shift reaches past the storage unit.
    ShiftOutOfRange {
        name: &'static str,
        shift: u32,
        storage_bits: u32,
    },
    /// Byte extent of zero length.
    ZeroSize { name: &'static str },
    /// Bit-array base offset is not 32-bit aligned.
    UnalignedBitArray { name: &'static str, offset: usize },
    /// Bit-array element size does not evenly divide a byte.
    BadElementSize { name: &'static str, element_bits: u32 },
    /// A field with this name is already registered in the layout.
    DuplicateField { name: &'static str },
    /// Field extent ends past the container length declared by the layout.
    PastEnd {
        name: &'static str,
        end: usize,
        container_len: usize,
    },
    /// Layout capacity exhausted.
    TooManyFields { name: &'static str, capacity: usize },
}

impl FieldError {
    /// Const-evaluable abort for the panicking constructors.
    ///
    /// Formatting is unavailable in const context, so each arm carries a
    /// static message; the compiler's const-eval diagnostic points at the
    /// offending declaration.
    pub(crate) const fn fail(self) -> ! {
        match self {
            FieldError::Misaligned { .. } => {
                panic!("field descriptor: offset, step, or in-step offset not divisible by the access width")
            }
            FieldError::WidthOutOfRange { .. } => {
                panic!("field descriptor: bit width is zero or wider than the storage unit")
            }
            FieldError::ShiftOutOfRange { .. } => {
                panic!("field descriptor: bit shift reaches past the storage unit")
            }
            FieldError::ZeroSize { .. } => panic!("field descriptor: zero-length extent"),
            FieldError::UnalignedBitArray { .. } => {
                panic!("field descriptor: bit-array base offset not 32-bit aligned")
            }
            FieldError::BadElementSize { .. } => {
                panic!("field descriptor: element size does not evenly divide a byte")
            }
            FieldError::DuplicateField { .. } => panic!("layout: duplicate field name"),
            FieldError::PastEnd { .. } => panic!("layout: field extent past the container end"),
            FieldError::TooManyFields { .. } => panic!("layout: field capacity exhausted"),
        }
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::Misaligned {
                name,
                offset,
                step,
                in_step_offset,
                width,
            } => write!(
                f,
                "field {name}: offset {offset:#x}, step {step:#x}, or in-step offset \
                 {in_step_offset:#x} not divisible by access width {width}"
            ),
            FieldError::WidthOutOfRange {
                name,
                bits,
                storage_bits,
            } => write!(
                f,
                "field {name}: bit width {bits} invalid for a {storage_bits}-bit storage unit"
            ),
            FieldError::ShiftOutOfRange {
                name,
                shift,
                storage_bits,
            } => write!(
                f,
                "field {name}: shift {shift} out of range for a {storage_bits}-bit storage unit"
            ),
            FieldError::ZeroSize { name } => write!(f, "field {name}: zero-length extent"),
            FieldError::UnalignedBitArray { name, offset } => write!(
                f,
                "field {name}: bit-array base offset {offset:#x} not 32-bit aligned"
            ),
            FieldError::BadElementSize { name, element_bits } => write!(
                f,
                "field {name}: element size {element_bits} bits does not evenly divide a byte"
            ),
            FieldError::DuplicateField { name } => {
                write!(f, "field {name}: already registered in this layout")
            }
            FieldError::PastEnd {
                name,
                end,
                container_len,
            } => write!(
                f,
                "field {name}: extent ends at byte {end:#x}, past the {container_len}-byte container"
            ),
            FieldError::TooManyFields { name, capacity } => write!(
                f,
                "field {name}: layout already holds its maximum of {capacity} fields"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    fn render(err: FieldError) -> heapless::String<160> {
        let mut out = heapless::String::new();
        write!(out, "{err}").unwrap();
        out
    }

    #[test]
    fn display_names_the_field_and_values() {
        let message = render(FieldError::Misaligned {
            name: "reg_port_speed",
            offset: 0x3,
            step: 0x10,
            in_step_offset: 0,
            width: 4,
        });
        assert!(message.contains("reg_port_speed"));
        assert!(message.contains("0x3"));
        assert!(message.contains("0x10"));
        assert!(message.contains("width 4"));
    }

    #[test]
    fn display_reports_container_overflow() {
        let message = render(FieldError::PastEnd {
            name: "reg_padding",
            end: 0x24,
            container_len: 0x20,
        });
        assert!(message.contains("reg_padding"));
        assert!(message.contains("0x24"));
        assert!(message.contains("32-byte container"));
    }
}
