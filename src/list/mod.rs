use std::fmt::{self, Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{ListError, Result};
use crate::Iter;

pub mod cursor;
pub mod iterator;

mod algorithms;

pub use algorithms::{Placement, Search};

/// The `OrderedWordList` is a doubly-linked list of unique words kept in
/// ascending byte-wise order, with a movable cursor named `current`.
///
/// Nodes live in an arena owned by the list and are linked by slot indices.
/// The list hands out [`NodeId`]s, which stay valid until the next
/// [`clear`](OrderedWordList::clear).
///
/// The `OrderedWordList` contains:
/// - the arena `nodes`, in allocation order (not list order);
/// - `head` and `tail`, the first and last node of the chain;
/// - `current`, the cursor, which may be `None` even in a non-empty list
///   (after a search for a word that sorts before the head);
/// - `epoch`, the generation of the arena, drawn from a process-wide
///   counter on creation and again on every `clear`, so no two lists and no
///   two generations of one list share it.
///
/// # Naming Conventions
///
/// - a *slot* is a `usize` index into `nodes`, only used inside the crate;
/// - a *handle* is a public [`NodeId`], a slot tagged with its epoch.
pub struct OrderedWordList {
    nodes: Vec<Node>,
    head: Link,
    tail: Link,
    current: Link,
    epoch: u64,
}

static NEXT_EPOCH: AtomicU64 = AtomicU64::new(0);

fn next_epoch() -> u64 {
    NEXT_EPOCH.fetch_add(1, Ordering::Relaxed)
}

type Link = Option<usize>;

pub(crate) struct Node {
    pub(crate) entry: WordEntry,
    pub(crate) prev: Link,
    pub(crate) next: Link,
}

/// A stable handle to a node of an [`OrderedWordList`].
///
/// A handle is only accepted by the list that issued it, and only until that
/// list is [`clear`](OrderedWordList::clear)ed. Any other use is rejected
/// with [`ListError::StaleHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    epoch: u64,
}

/// The payload of a node: an owned word and its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordEntry {
    word: Box<str>,
    count: usize,
}

impl WordEntry {
    /// Create an entry holding its own copy of `word`, with a count of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_words::WordEntry;
    ///
    /// let entry = WordEntry::new("apple");
    /// assert_eq!(entry.word(), "apple");
    /// assert_eq!(entry.count(), 1);
    /// ```
    pub fn new(word: &str) -> Self {
        Self {
            word: Box::from(word),
            count: 1,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Bump the occurrence count and return the new value.
    ///
    /// The list itself never calls this; deciding what a repeated word means
    /// is up to the caller.
    pub fn increment(&mut self) -> usize {
        self.count = self.count.saturating_add(1);
        self.count
    }
}

impl Node {
    fn new(word: &str) -> Self {
        Self {
            entry: WordEntry::new(word),
            prev: None,
            next: None,
        }
    }
}

pub(crate) fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(ListError::EmptyWord);
    }
    Ok(())
}

// private methods
impl OrderedWordList {
    pub(crate) fn node(&self, slot: usize) -> &Node {
        &self.nodes[slot]
    }

    pub(crate) fn head_slot(&self) -> Link {
        self.head
    }

    pub(crate) fn tail_slot(&self) -> Link {
        self.tail
    }

    pub(crate) fn current_slot(&self) -> Link {
        self.current
    }

    pub(crate) fn set_current_slot(&mut self, slot: Link) {
        self.current = slot;
    }

    pub(crate) fn handle(&self, slot: usize) -> NodeId {
        NodeId {
            index: slot,
            epoch: self.epoch,
        }
    }

    /// Resolve a handle to a slot, rejecting handles issued by another list
    /// or before the last `clear`.
    pub(crate) fn slot(&self, id: NodeId) -> Result<usize> {
        if id.epoch != self.epoch || id.index >= self.nodes.len() {
            return Err(ListError::StaleHandle);
        }
        Ok(id.index)
    }

    /// Allocate a detached node for `word` and return its slot.
    ///
    /// Storage is reserved before anything is pushed, so a failed allocation
    /// leaves the arena untouched.
    fn create_node(&mut self, word: &str) -> Result<usize> {
        self.nodes.try_reserve(1)?;
        self.nodes.push(Node::new(word));
        Ok(self.nodes.len() - 1)
    }

    /// Link the detached node `new` in front of the head.
    fn attach_front(&mut self, new: usize) {
        match self.head {
            Some(old) => {
                self.nodes[old].prev = Some(new);
                self.nodes[new].next = Some(old);
            }
            None => self.tail = Some(new),
        }
        self.head = Some(new);
    }

    /// Link the detached node `new` right after the node `at`.
    fn attach_after(&mut self, at: usize, new: usize) {
        let next = self.nodes[at].next;
        self.nodes[new].prev = Some(at);
        self.nodes[new].next = next;
        self.nodes[at].next = Some(new);
        match next {
            Some(next) => self.nodes[next].prev = Some(new),
            None => self.tail = Some(new),
        }
    }
}

impl OrderedWordList {
    /// Create an empty list. No allocation happens until the first insertion.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            current: None,
            epoch: next_epoch(),
        }
    }

    /// Create an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The generation of the list. It is unique to this list and changes on
    /// every [`clear`](Self::clear).
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Insert `word` as the new head of the list and move the cursor onto it.
    ///
    /// This does not keep the list sorted by itself. It is the primitive for
    /// a word known to sort before every other word, and the fallback of
    /// [`insert_after_current`](Self::insert_after_current) when the cursor
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyWord`] for `""`, or [`ListError::Alloc`] if
    /// the node cannot be allocated. The list is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_words::OrderedWordList;
    ///
    /// let mut list = OrderedWordList::new();
    /// let cat = list.insert_at_head("cat").unwrap();
    /// assert_eq!(list.head_id(), Some(cat));
    /// assert_eq!(list.tail_id(), Some(cat));
    /// assert_eq!(list.current_id(), Some(cat));
    ///
    /// list.insert_at_head("buy").unwrap();
    /// assert_eq!(list.words().collect::<Vec<_>>(), ["buy", "cat"]);
    /// assert_eq!(list.current().map(|e| e.word()), Some("buy"));
    /// ```
    pub fn insert_at_head(&mut self, word: &str) -> Result<NodeId> {
        validate_word(word)?;
        let new = self.create_node(word)?;
        self.attach_front(new);
        self.current = Some(new);
        tracing::trace!(word, slot = new, "inserted at head");
        Ok(self.handle(new))
    }

    /// Insert `word` right after the cursor and move the cursor onto it.
    ///
    /// If the cursor is `None`, either because the list is empty or because
    /// the last search placed the word before the head, the word is inserted
    /// at the head instead.
    ///
    /// Run right after a [`find`](Self::find) that returned
    /// [`Search::NotFound`], this keeps the list sorted.
    ///
    /// # Errors
    ///
    /// Same as [`insert_at_head`](Self::insert_at_head).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_words::{OrderedWordList, Search};
    ///
    /// let mut list = OrderedWordList::new();
    /// list.insert_at_head("apple").unwrap();
    /// list.insert_after_current("cat").unwrap();
    ///
    /// assert_eq!(list.find("buy"), Ok(Search::NotFound));
    /// assert_eq!(list.current().map(|e| e.word()), Some("apple"));
    /// list.insert_after_current("buy").unwrap();
    ///
    /// assert_eq!(list.words().collect::<Vec<_>>(), ["apple", "buy", "cat"]);
    /// ```
    pub fn insert_after_current(&mut self, word: &str) -> Result<NodeId> {
        validate_word(word)?;
        let at = match self.current {
            Some(at) => at,
            None => return self.insert_at_head(word),
        };
        let new = self.create_node(word)?;
        self.attach_after(at, new);
        self.current = Some(new);
        tracing::trace!(word, slot = new, after = at, "inserted after current");
        Ok(self.handle(new))
    }

    /// Release every node and return how many were released.
    ///
    /// Afterwards `head`, `tail` and `current` are all `None`, and every
    /// [`NodeId`] handed out so far is stale. The arena keeps its capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_words::OrderedWordList;
    ///
    /// let mut list = OrderedWordList::new();
    /// assert_eq!(list.clear(), 0);
    ///
    /// let id = list.sorted_insert("cat").unwrap().id();
    /// list.sorted_insert("apple").unwrap();
    /// assert_eq!(list.clear(), 2);
    /// assert!(list.is_empty());
    /// assert!(list.get(id).is_err());
    /// ```
    pub fn clear(&mut self) -> usize {
        let mut freed = 0;
        let mut victim = self.head;
        while let Some(slot) = victim {
            victim = self.nodes[slot].next;
            freed += 1;
        }
        debug_assert_eq!(freed, self.nodes.len());
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.current = None;
        self.epoch = next_epoch();
        tracing::debug!(freed, epoch = self.epoch, "cleared list");
        freed
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Iterate over the words only, from head to tail.
    pub fn words(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.iter().map(WordEntry::word)
    }
}

impl Default for OrderedWordList {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for OrderedWordList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
impl OrderedWordList {
    /// Check link symmetry, the head/tail boundaries, sort order, that the
    /// chain covers every node, and that the cursor is not dangling.
    pub(crate) fn assert_links(&self) {
        match self.head {
            None => {
                assert!(self.tail.is_none());
                assert!(self.current.is_none());
                assert!(self.nodes.is_empty());
                return;
            }
            Some(head) => assert_eq!(self.nodes[head].prev, None),
        }
        let tail = self.tail.expect("non-empty list has a tail");
        assert_eq!(self.nodes[tail].next, None);

        let mut seen = 0;
        let mut slot = self.head;
        let mut last = None;
        while let Some(at) = slot {
            let node = &self.nodes[at];
            assert_eq!(node.prev, last, "asymmetric prev-link at {}", at);
            if let Some(next) = node.next {
                assert_eq!(self.nodes[next].prev, Some(at));
                assert!(
                    node.entry.word() < self.nodes[next].entry.word(),
                    "{:?} is not before {:?}",
                    node.entry.word(),
                    self.nodes[next].entry.word(),
                );
            }
            seen += 1;
            last = Some(at);
            slot = node.next;
        }
        assert_eq!(last, Some(tail));
        assert_eq!(seen, self.nodes.len());
        if let Some(current) = self.current {
            assert!(current < self.nodes.len());
        }
    }
}
