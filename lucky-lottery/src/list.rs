//! Singly linked list of player records backed by an arena.
//!
//! Records live in a `Vec` of slots and link to each other by index. New
//! records are always inserted at the head, so iteration yields them in the
//! reverse of insertion order. Each `next` link points at an older slot,
//! which keeps the chain acyclic and terminated.

use crate::{PlayerRecord, Result};

#[derive(Debug, Clone)]
struct Slot {
    record: PlayerRecord,
    next: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct LuckyList {
    slots: Vec<Slot>,
    head: Option<usize>,
}

impl LuckyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        self.slots.try_reserve(additional)?;
        Ok(())
    }

    /// Insert a record at the head of the list.
    ///
    /// Fails without touching the list if the arena cannot grow.
    pub fn push_front(&mut self, record: PlayerRecord) -> Result<()> {
        self.slots.try_reserve(1)?;

        let index = self.slots.len();
        self.slots.push(Slot {
            record,
            next: self.head,
        });
        self.head = Some(index);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn head(&self) -> Option<&PlayerRecord> {
        self.head.map(|index| &self.slots[index].record)
    }

    /// Walk the chain from the head to the tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
        }
    }

    /// First record from the head that satisfies `pred`.
    pub fn find_first<P>(&self, mut pred: P) -> Option<&PlayerRecord>
    where
        P: FnMut(&PlayerRecord) -> bool,
    {
        self.iter().find(|record| pred(record))
    }
}

impl<'a> IntoIterator for &'a LuckyList {
    type Item = &'a PlayerRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head-to-tail iterator over a [`LuckyList`].
pub struct Iter<'a> {
    slots: &'a [Slot],
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a PlayerRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let slot = &self.slots[index];
        debug_assert!(slot.next.map_or(true, |next| next < index));
        self.cursor = slot.next;
        Some(&slot.record)
    }
}
