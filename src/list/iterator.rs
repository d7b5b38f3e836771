use crate::list::{OrderedWordList, WordEntry};
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the entries of an `OrderedWordList`, from head to tail.
///
/// It walks the links rather than the arena, so entries come out in word
/// order. `front..=back` is the range not yet yielded, and `len` its length.
///
/// # Examples
///
/// ```
/// use ordered_words::OrderedWordList;
///
/// let mut list = OrderedWordList::new();
/// for word in ["cat", "apple", "buy"].iter() {
///     list.sorted_insert(word).unwrap();
/// }
///
/// let mut iter = list.iter();
/// assert_eq!(iter.next().map(|e| e.word()), Some("apple"));
/// assert_eq!(iter.next_back().map(|e| e.word()), Some("cat"));
/// assert_eq!(iter.next().map(|e| e.word()), Some("buy"));
/// assert_eq!(iter.next(), None);
/// assert_eq!(iter.next_back(), None);
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    list: &'a OrderedWordList,
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(list: &'a OrderedWordList) -> Self {
        Self {
            list,
            front: list.head_slot(),
            back: list.tail_slot(),
            len: list.len(),
        }
    }
}

impl<'a> fmt::Debug for Iter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        self.clone().for_each(|entry| {
            f.field(entry);
        });
        f.finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a WordEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.len -= 1;
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.len -= 1;
        Some(&node.entry)
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a OrderedWordList {
    type Item = &'a WordEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
