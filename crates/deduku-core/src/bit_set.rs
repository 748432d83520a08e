//! A fixed-shape bit vector with a configurable base index.
//!
//! [`BitSet`] stores up to 32 bits starting at an arbitrary base index, so a
//! set of Sudoku digits is simply `BitSet::new(9, 1)` and its indices *are*
//! the digits 1-9. Cardinality is cached and kept exact across every
//! mutation.
//!
//! Point operations validate their index against the set's shape and binary
//! operations require both operands to share a shape; violations surface as
//! [`BitSetError`] rather than silently touching the wrong bit.
//!
//! # Examples
//!
//! ```
//! use deduku_core::BitSet;
//!
//! let mut candidates = BitSet::new(9, 1);
//! candidates.set_all();
//! candidates.remove(4)?;
//! assert_eq!(candidates.len(), 8);
//! assert_eq!(candidates.to_string(), "{1, 2, 3, 5, 6, 7, 8, 9}");
//! # Ok::<(), deduku_core::BitSetError>(())
//! ```

use derive_more::{Display, Error};

/// An error from a [`BitSet`] operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BitSetError {
    /// The index lies outside the set's `base..=last` range.
    #[display("bit index {index} is out of permitted range {base}..={last}")]
    IndexOutOfRange {
        /// The offending index.
        index: u8,
        /// First valid index of the set.
        base: u8,
        /// Last valid index of the set.
        last: u8,
    },
    /// A binary operation was attempted on sets of differing shape.
    #[display(
        "bit set shapes differ: {size} bits at base {base} vs {other_size} bits at base {other_base}"
    )]
    ShapeMismatch {
        /// Size of the left-hand set.
        size: u8,
        /// Base of the left-hand set.
        base: u8,
        /// Size of the right-hand set.
        other_size: u8,
        /// Base of the right-hand set.
        other_base: u8,
    },
}

/// A set of small integers stored as bits in a single machine word.
///
/// The shape of a set is its `size` (number of bits, 1-32) and `base` (the
/// index of the first bit). Two sets interoperate in binary operations only
/// when their shapes match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitSet {
    size: u8,
    base: u8,
    bits: u32,
    card: u8,
}

impl BitSet {
    /// Creates an empty set of `size` bits starting at index `base`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not in the range 1-32, or if the last index
    /// `base + size - 1` does not fit in a `u8`. Shape is a construction
    /// contract, not runtime data.
    #[must_use]
    pub const fn new(size: u8, base: u8) -> Self {
        assert!(size >= 1 && size <= 32, "size is out of permitted range 1..=32");
        assert!(
            base as u16 + size as u16 - 1 <= u8::MAX as u16,
            "last bit index does not fit in u8"
        );
        Self {
            size,
            base,
            bits: 0,
            card: 0,
        }
    }

    /// Returns the number of bits this set stores.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the index of the first bit in this set.
    #[must_use]
    pub const fn base(&self) -> u8 {
        self.base
    }

    /// Returns the number of set bits (the cardinality).
    #[must_use]
    pub const fn len(&self) -> u8 {
        self.card
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if every bit is set.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.bits == self.word_mask()
    }

    /// Returns the sole set index, if exactly one bit is set.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn as_single(&self) -> Option<u8> {
        if self.card == 1 {
            Some(self.base + self.bits.trailing_zeros() as u8)
        } else {
            None
        }
    }

    const fn word_mask(&self) -> u32 {
        if self.size == 32 {
            u32::MAX
        } else {
            (1 << self.size) - 1
        }
    }

    const fn last(&self) -> u8 {
        self.base + self.size - 1
    }

    fn bit_for(&self, index: u8) -> Result<u32, BitSetError> {
        if index < self.base || index > self.last() {
            return Err(BitSetError::IndexOutOfRange {
                index,
                base: self.base,
                last: self.last(),
            });
        }
        Ok(1 << (index - self.base))
    }

    fn check_shape(&self, other: &Self) -> Result<(), BitSetError> {
        if self.size != other.size || self.base != other.base {
            return Err(BitSetError::ShapeMismatch {
                size: self.size,
                base: self.base,
                other_size: other.size,
                other_base: other.base,
            });
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn recount(&mut self) {
        self.card = self.bits.count_ones() as u8;
    }

    /// Tests whether the bit at `index` is set.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::IndexOutOfRange`] if `index` is outside the
    /// set's shape.
    pub fn contains(&self, index: u8) -> Result<bool, BitSetError> {
        Ok(self.bits & self.bit_for(index)? != 0)
    }

    /// Tests whether the bit at `index` is clear.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::IndexOutOfRange`] if `index` is outside the
    /// set's shape.
    pub fn is_clear(&self, index: u8) -> Result<bool, BitSetError> {
        Ok(self.bits & self.bit_for(index)? == 0)
    }

    /// Sets the bit at `index`, reporting whether the set changed.
    ///
    /// Cardinality is adjusted only when the bit was previously clear.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::IndexOutOfRange`] if `index` is outside the
    /// set's shape.
    pub fn insert(&mut self, index: u8) -> Result<bool, BitSetError> {
        let bit = self.bit_for(index)?;
        if self.bits & bit != 0 {
            return Ok(false);
        }
        self.bits |= bit;
        self.card += 1;
        Ok(true)
    }

    /// Clears the bit at `index`, reporting whether the set changed.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::IndexOutOfRange`] if `index` is outside the
    /// set's shape.
    pub fn remove(&mut self, index: u8) -> Result<bool, BitSetError> {
        let bit = self.bit_for(index)?;
        if self.bits & bit == 0 {
            return Ok(false);
        }
        self.bits &= !bit;
        self.card -= 1;
        Ok(true)
    }

    /// Sets every bit.
    pub const fn set_all(&mut self) {
        self.bits = self.word_mask();
        self.card = self.size;
    }

    /// Clears every bit.
    pub const fn clear_all(&mut self) {
        self.bits = 0;
        self.card = 0;
    }

    /// Sets every bit except the one at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::IndexOutOfRange`] if `index` is outside the
    /// set's shape.
    pub fn set_all_but(&mut self, index: u8) -> Result<(), BitSetError> {
        let bit = self.bit_for(index)?;
        self.bits = self.word_mask() & !bit;
        self.card = self.size - 1;
        Ok(())
    }

    /// Clears every bit except the one at `index`, which is set.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::IndexOutOfRange`] if `index` is outside the
    /// set's shape.
    pub fn clear_all_but(&mut self, index: u8) -> Result<(), BitSetError> {
        self.bits = self.bit_for(index)?;
        self.card = 1;
        Ok(())
    }

    /// Intersects this set with `other`, modifying only `self`.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::ShapeMismatch`] if the shapes differ.
    pub fn and(&mut self, other: &Self) -> Result<(), BitSetError> {
        self.check_shape(other)?;
        self.bits &= other.bits;
        self.recount();
        Ok(())
    }

    /// Unions this set with `other`, modifying only `self`.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::ShapeMismatch`] if the shapes differ.
    pub fn or(&mut self, other: &Self) -> Result<(), BitSetError> {
        self.check_shape(other)?;
        self.bits |= other.bits;
        self.recount();
        Ok(())
    }

    /// Symmetric difference with `other`, modifying only `self`.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::ShapeMismatch`] if the shapes differ.
    pub fn xor(&mut self, other: &Self) -> Result<(), BitSetError> {
        self.check_shape(other)?;
        self.bits ^= other.bits;
        self.recount();
        Ok(())
    }

    /// Removes every bit set in `other` from this set.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::ShapeMismatch`] if the shapes differ.
    pub fn and_not(&mut self, other: &Self) -> Result<(), BitSetError> {
        self.check_shape(other)?;
        self.bits &= !other.bits & self.word_mask();
        self.recount();
        Ok(())
    }

    /// Unions this set with the complement of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`BitSetError::ShapeMismatch`] if the shapes differ.
    pub fn or_not(&mut self, other: &Self) -> Result<(), BitSetError> {
        self.check_shape(other)?;
        self.bits |= !other.bits & self.word_mask();
        self.recount();
        Ok(())
    }

    /// Inverts every bit within the set's width.
    pub const fn not(&mut self) {
        self.bits = !self.bits & self.word_mask();
        self.card = self.size - self.card;
    }

    /// Iterates the indices of set bits in ascending order.
    pub fn iter_set(&self) -> impl Iterator<Item = u8> + '_ {
        self.iter_bits()
            .filter_map(|(index, set)| set.then_some(index))
    }

    /// Iterates the indices of clear bits in ascending order.
    pub fn iter_clear(&self) -> impl Iterator<Item = u8> + '_ {
        self.iter_bits()
            .filter_map(|(index, set)| (!set).then_some(index))
    }

    /// Iterates every `(index, is_set)` pair in ascending index order.
    pub fn iter_bits(&self) -> impl Iterator<Item = (u8, bool)> + '_ {
        let bits = self.bits;
        (0..self.size).map(move |offset| (self.base + offset, bits & (1 << offset) != 0))
    }

    /// Renders one `'0'` or `'1'` per bit, in ascending index order.
    #[must_use]
    pub fn to_binary_string(&self) -> String {
        self.iter_bits()
            .map(|(_, set)| if set { '1' } else { '0' })
            .collect()
    }
}

impl std::fmt::Display for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, index) in self.iter_set().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "}}")
    }
}
