//! Container layouts and field registries.

use heapless::Vec;

use crate::error::FieldError;

/// Byte footprint of a declared field, as registered in a [`Layout`].
///
/// Strided fields report the end of their first occurrence; a layout has
/// no way to know how many occurrences a caller will address.
pub trait FieldExtent {
    /// Field name.
    fn name(&self) -> &'static str;
    /// Exclusive end byte of the field's first occurrence.
    fn extent(&self) -> usize;
}

/// A named container with a fixed byte length and the fields declared
/// inside it.
///
/// Layouts are built once at startup and shared by reference afterwards;
/// they never touch buffer contents. Registration checks each field
/// against the container length and rejects duplicate names, so a layout
/// that builds cleanly vouches for every descriptor it holds.
pub struct Layout<'a, const N: usize> {
    name: &'static str,
    len: usize,
    fields: Vec<&'a dyn FieldExtent, N>,
}

impl<'a, const N: usize> Layout<'a, N> {
    /// Creates an empty layout for a `len`-byte container.
    pub const fn new(name: &'static str, len: usize) -> Self {
        Layout {
            name,
            len,
            fields: Vec::new(),
        }
    }

    /// Container name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Container length in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Number of registered fields.
    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Registers a field.
    ///
    /// Rejects a name that is already registered, a field whose first
    /// occurrence ends past the container, and registration beyond the
    /// layout's capacity.
    pub fn add(&mut self, field: &'a dyn FieldExtent) -> Result<(), FieldError> {
        let name = field.name();
        if self.field(name).is_some() {
            return Err(FieldError::DuplicateField { name });
        }
        let end = field.extent();
        if end > self.len {
            return Err(FieldError::PastEnd {
                name,
                end,
                container_len: self.len,
            });
        }
        self.fields
            .push(field)
            .map_err(|_| FieldError::TooManyFields { name, capacity: N })?;
        Ok(())
    }

    /// Looks up a registered field by name.
    pub fn field(&self, name: &str) -> Option<&'a dyn FieldExtent> {
        self.fields.iter().copied().find(|field| field.name() == name)
    }

    /// Iterates over registered fields in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &'a dyn FieldExtent> + '_ {
        self.fields.iter().copied()
    }
}
