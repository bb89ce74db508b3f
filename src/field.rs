/// Byte-granular position of a field inside its container.
///
/// A field occupies either a single extent at `offset`, or one occurrence
/// per `index` when a non-zero `step` declares a strided series. Every
/// occurrence is displaced by `in_step_offset`, including the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field {
    pub(crate) name: &'static str,
    pub(crate) offset: usize,
    pub(crate) step: usize,
    pub(crate) in_step_offset: usize,
}

impl Field {
    /// Resolves occurrence `index` to a storage-unit index.
    ///
    /// `width` is the storage unit size in bytes. Constructors verify that
    /// `offset`, `step`, and `in_step_offset` are each divisible by it, so
    /// the resolved byte position always lands on a unit boundary.
    ///
    /// # Panics
    ///
    /// Panics when `index` is non-zero for a field declared without a step,
    /// and when the resolved byte position overflows `usize`.
    #[inline]
    pub(crate) fn element_offset(&self, index: usize, width: usize) -> usize {
        assert!(
            index == 0 || self.step != 0,
            "field {}: indexed access without a stride (index {index})",
            self.name
        );
        let byte = match self
            .step
            .checked_mul(index)
            .and_then(|stride| self.offset.checked_add(stride))
            .and_then(|base| base.checked_add(self.in_step_offset))
        {
            Some(byte) => byte,
            None => panic!("field {}: byte position overflow at index {index}", self.name),
        };
        byte / width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strided() -> Field {
        Field {
            name: "reg_lane",
            offset: 0x10,
            step: 0x8,
            in_step_offset: 0x4,
        }
    }

    #[test]
    fn resolves_storage_unit_index() {
        // (0x10 + 0x8 * 2 + 0x4) / 4 = 0x24 / 4
        assert_eq!(strided().element_offset(2, 4), 9);
    }

    #[test]
    fn in_step_offset_applies_to_the_first_occurrence() {
        assert_eq!(strided().element_offset(0, 1), 0x14);
    }

    #[test]
    fn plain_field_resolves_to_its_base() {
        let field = Field {
            name: "reg_status",
            offset: 0x6,
            step: 0,
            in_step_offset: 0,
        };
        assert_eq!(field.element_offset(0, 2), 3);
    }

    #[test]
    #[should_panic(expected = "indexed access without a stride")]
    fn indexing_an_unstrided_field_is_fatal() {
        let field = Field {
            name: "reg_status",
            offset: 0x6,
            step: 0,
            in_step_offset: 0,
        };
        field.element_offset(1, 2);
    }
}
