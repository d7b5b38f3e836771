//! Access to the `current` cursor and to nodes by handle.
//!
//! The cursor of an [`OrderedWordList`] is either on a node or `None`. It is
//! moved by insertions (onto the new node), by [`find`](OrderedWordList::find)
//! (onto the match or the insertion predecessor), and by the methods here.

use crate::error::Result;
use crate::list::{NodeId, OrderedWordList, WordEntry};

impl OrderedWordList {
    /// Return the entry under the cursor, or `None` if the cursor is unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_words::OrderedWordList;
    ///
    /// let mut list = OrderedWordList::new();
    /// assert!(list.current().is_none());
    /// list.insert_at_head("cat").unwrap();
    /// assert_eq!(list.current().map(|e| e.word()), Some("cat"));
    /// ```
    pub fn current(&self) -> Option<&WordEntry> {
        self.current_slot().map(|slot| &self.node(slot).entry)
    }

    /// Return a mutable reference to the entry under the cursor.
    ///
    /// Only the count can be changed through it; the word is fixed once the
    /// node is created.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_words::{OrderedWordList, Placement};
    ///
    /// let mut list = OrderedWordList::new();
    /// list.sorted_insert("cat").unwrap();
    /// if let Placement::Existing(_) = list.sorted_insert("cat").unwrap() {
    ///     list.current_mut().unwrap().increment();
    /// }
    /// assert_eq!(list.front().unwrap().count(), 2);
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut WordEntry> {
        let slot = self.current_slot()?;
        Some(&mut self.nodes[slot].entry)
    }

    pub fn current_id(&self) -> Option<NodeId> {
        self.current_slot().map(|slot| self.handle(slot))
    }

    /// Put the cursor on the node `id`, or unset it with `None`.
    ///
    /// An unset cursor makes the next
    /// [`insert_after_current`](OrderedWordList::insert_after_current)
    /// insert at the head.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::StaleHandle`](crate::ListError::StaleHandle) if
    /// `id` was issued by another list or before the last
    /// [`clear`](OrderedWordList::clear); the cursor stays put.
    pub fn set_current(&mut self, id: Option<NodeId>) -> Result<()> {
        let slot = id.map(|id| self.slot(id)).transpose()?;
        self.set_current_slot(slot);
        Ok(())
    }

    /// Move the cursor one node toward the tail.
    ///
    /// Returns `false` and leaves the cursor alone if it is unset or already
    /// on the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_words::OrderedWordList;
    ///
    /// let mut list = OrderedWordList::new();
    /// list.sorted_insert("apple").unwrap();
    /// list.sorted_insert("buy").unwrap();
    /// list.set_current(list.head_id()).unwrap();
    ///
    /// assert!(list.move_next());
    /// assert_eq!(list.current().map(|e| e.word()), Some("buy"));
    /// assert!(!list.move_next());
    /// assert_eq!(list.current().map(|e| e.word()), Some("buy"));
    /// ```
    pub fn move_next(&mut self) -> bool {
        match self.current_slot().and_then(|slot| self.node(slot).next) {
            Some(next) => {
                self.set_current_slot(Some(next));
                true
            }
            None => false,
        }
    }

    /// Move the cursor one node toward the head.
    ///
    /// Returns `false` and leaves the cursor alone if it is unset or already
    /// on the head.
    pub fn move_prev(&mut self) -> bool {
        match self.current_slot().and_then(|slot| self.node(slot).prev) {
            Some(prev) => {
                self.set_current_slot(Some(prev));
                true
            }
            None => false,
        }
    }

    /// Return the first entry of the list.
    pub fn front(&self) -> Option<&WordEntry> {
        self.head_slot().map(|slot| &self.node(slot).entry)
    }

    /// Return the last entry of the list.
    pub fn back(&self) -> Option<&WordEntry> {
        self.tail_slot().map(|slot| &self.node(slot).entry)
    }

    pub fn head_id(&self) -> Option<NodeId> {
        self.head_slot().map(|slot| self.handle(slot))
    }

    pub fn tail_id(&self) -> Option<NodeId> {
        self.tail_slot().map(|slot| self.handle(slot))
    }

    pub fn get(&self, id: NodeId) -> Result<&WordEntry> {
        let slot = self.slot(id)?;
        Ok(&self.node(slot).entry)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut WordEntry> {
        let slot = self.slot(id)?;
        Ok(&mut self.nodes[slot].entry)
    }

    /// Return the handle of the node after `id`, or `None` if `id` is the tail.
    pub fn next_id(&self, id: NodeId) -> Result<Option<NodeId>> {
        let slot = self.slot(id)?;
        Ok(self.node(slot).next.map(|next| self.handle(next)))
    }

    /// Return the handle of the node before `id`, or `None` if `id` is the head.
    pub fn prev_id(&self, id: NodeId) -> Result<Option<NodeId>> {
        let slot = self.slot(id)?;
        Ok(self.node(slot).prev.map(|prev| self.handle(prev)))
    }
}
