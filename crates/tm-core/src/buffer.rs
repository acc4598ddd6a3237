//! Growable byte buffer.
//!
//! Capacity grows by doubling (minimum 1) whenever an append or insert finds
//! the buffer full, and never shrinks: truncation and `clear` only move the
//! logical length. The growth sequence is observable through [`GrowableBuffer::capacity`].

use crate::error::{Result, TmError};
use std::fmt;
use std::ops::Add;

/// A position inside a [`GrowableBuffer`].
///
/// Obtained from [`GrowableBuffer::begin`] / [`GrowableBuffer::end`] and moved
/// forward with `cursor + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    fn add(self, offset: usize) -> Cursor {
        Cursor(self.0 + offset)
    }
}

/// Exclusively owned byte sequence with amortized O(1) append.
#[derive(Default)]
pub struct GrowableBuffer {
    storage: Box<[u8]>,
    len: usize,
}

impl GrowableBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    fn next_capacity(&self) -> usize {
        match self.capacity() {
            0 => 1,
            cap => cap * 2,
        }
    }

    fn reallocate(&mut self, new_capacity: usize) {
        let mut storage = vec![0u8; new_capacity].into_boxed_slice();
        storage[..self.len].copy_from_slice(&self.storage[..self.len]);
        self.storage = storage;
    }

    /// Append one byte, doubling the capacity when full.
    pub fn push(&mut self, byte: u8) {
        if self.len == self.capacity() {
            self.reallocate(self.next_capacity());
        }
        self.storage[self.len] = byte;
        self.len += 1;
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        let needed = self.len + bytes.len();
        if needed > self.capacity() {
            let mut capacity = self.next_capacity();
            while capacity < needed {
                capacity *= 2;
            }
            self.reallocate(capacity);
        }
        self.storage[self.len..needed].copy_from_slice(bytes);
        self.len = needed;
    }

    pub fn get(&self, index: usize) -> Result<u8> {
        if index >= self.len {
            return Err(TmError::IndexOutOfRange { index, len: self.len });
        }
        Ok(self.storage[index])
    }

    pub fn set(&mut self, index: usize, byte: u8) -> Result<()> {
        if index >= self.len {
            return Err(TmError::IndexOutOfRange { index, len: self.len });
        }
        self.storage[index] = byte;
        Ok(())
    }

    /// Insert `byte` at `position`, shifting the suffix right.
    ///
    /// `position` may equal `len()` (append). When the buffer is full the new
    /// storage is filled with the prefix, the byte and the suffix in one pass.
    pub fn insert(&mut self, position: usize, byte: u8) -> Result<()> {
        if position > self.len {
            return Err(TmError::InvalidPosition { position, len: self.len });
        }
        if self.len == self.capacity() {
            let mut storage = vec![0u8; self.next_capacity()].into_boxed_slice();
            storage[..position].copy_from_slice(&self.storage[..position]);
            storage[position] = byte;
            storage[position + 1..=self.len].copy_from_slice(&self.storage[position..self.len]);
            self.storage = storage;
        } else {
            self.storage.copy_within(position..self.len, position + 1);
            self.storage[position] = byte;
        }
        self.len += 1;
        Ok(())
    }

    pub fn insert_at(&mut self, cursor: Cursor, byte: u8) -> Result<()> {
        self.insert(cursor.index(), byte)
    }

    /// Remove and return the byte at `index`, shifting the suffix left.
    pub fn remove(&mut self, index: usize) -> Result<u8> {
        if index >= self.len {
            return Err(TmError::IndexOutOfRange { index, len: self.len });
        }
        let byte = self.storage[index];
        self.storage.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(byte)
    }

    /// Shrink the logical length. Never extends or allocates.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Drop all contents, keeping the storage for reuse.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Swap in freshly computed contents.
    pub fn replace_with(&mut self, other: GrowableBuffer) {
        *self = other;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.storage[..self.len]
    }

    /// Bytes up to the first NUL, or the whole logical region if there is none.
    pub fn content(&self) -> &[u8] {
        let bytes = self.as_slice();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        &bytes[..end]
    }

    pub fn begin(&self) -> Cursor {
        Cursor(0)
    }

    pub fn end(&self) -> Cursor {
        Cursor(self.len)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.as_slice().iter()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }
}

impl Clone for GrowableBuffer {
    /// Deep-copies every allocated slot, not just the logical region.
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage = Box::default();
        self.len = 0;
        self.storage = source.storage.clone();
        self.len = source.len;
    }
}

impl PartialEq for GrowableBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for GrowableBuffer {}

impl fmt::Debug for GrowableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("data", &String::from_utf8_lossy(self.as_slice()))
            .finish()
    }
}

impl fmt::Display for GrowableBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_slice()))
    }
}

impl From<&[u8]> for GrowableBuffer {
    fn from(bytes: &[u8]) -> Self {
        let mut buffer = Self::new();
        buffer.extend_from_slice(bytes);
        buffer
    }
}

impl From<&str> for GrowableBuffer {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

impl Extend<u8> for GrowableBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.push(byte);
        }
    }
}

impl FromIterator<u8> for GrowableBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut buffer = Self::new();
        buffer.extend(iter);
        buffer
    }
}

impl<'a> IntoIterator for &'a GrowableBuffer {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
