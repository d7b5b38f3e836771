use crate::error::{ListError, Result};
use crate::list::{validate_word, NodeId, OrderedWordList};
use std::cmp::Ordering;

/// Outcome of [`OrderedWordList::find`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Search {
    /// The word is in the list; the cursor is on it.
    Found(NodeId),
    /// The word is not in the list; the cursor is on the node the word
    /// belongs after, or `None` if it belongs before the head.
    NotFound,
}

impl Search {
    pub fn is_found(&self) -> bool {
        matches!(self, Search::Found(_))
    }
}

/// Outcome of [`OrderedWordList::sorted_insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// A new node was linked in.
    Inserted(NodeId),
    /// The word was already present. Its count is left alone.
    Existing(NodeId),
}

impl Placement {
    pub fn id(&self) -> NodeId {
        match *self {
            Placement::Inserted(id) | Placement::Existing(id) => id,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, Placement::Inserted(_))
    }
}

impl OrderedWordList {
    /// Search the list for `word` and reposition the cursor.
    ///
    /// Words are compared byte-wise and case-sensitively, so `"A"` and `"a"`
    /// are different words, as are `"a "` and `"a"`. The scan relies on the
    /// list being sorted and stops at the first word that is not less than
    /// `word`.
    ///
    /// On [`Search::Found`] the cursor is on the match. On
    /// [`Search::NotFound`] the cursor is left where
    /// [`insert_after_current`](Self::insert_after_current) would put `word`
    /// in order:
    /// - on the tail, if every word is less than `word`;
    /// - `None`, if `word` is less than the head;
    /// - otherwise on the last word less than `word`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyWord`] or [`ListError::EmptyList`] without
    /// touching the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_words::{OrderedWordList, Search};
    ///
    /// let mut list = OrderedWordList::new();
    /// for word in ["apple", "buy", "cat"].iter() {
    ///     list.sorted_insert(word).unwrap();
    /// }
    ///
    /// assert_eq!(list.find("baby"), Ok(Search::NotFound));
    /// assert_eq!(list.current().map(|e| e.word()), Some("apple"));
    ///
    /// assert_eq!(list.find("acid"), Ok(Search::NotFound));
    /// assert!(list.current().is_none());
    ///
    /// assert_eq!(list.find("zebra"), Ok(Search::NotFound));
    /// assert_eq!(list.current().map(|e| e.word()), Some("cat"));
    ///
    /// assert!(list.find("buy").unwrap().is_found());
    /// assert_eq!(list.current().map(|e| e.word()), Some("buy"));
    /// ```
    pub fn find(&mut self, word: &str) -> Result<Search> {
        validate_word(word)?;
        let mut cursor = self.head_slot();
        if cursor.is_none() {
            return Err(ListError::EmptyList);
        }
        while let Some(slot) = cursor {
            let node = self.node(slot);
            match node.entry.word().cmp(word) {
                Ordering::Less => cursor = node.next,
                Ordering::Equal => {
                    self.set_current_slot(Some(slot));
                    tracing::trace!(word, slot, "found");
                    return Ok(Search::Found(self.handle(slot)));
                }
                Ordering::Greater => {
                    // the head has no predecessor, which unsets the cursor
                    let prev = node.prev;
                    self.set_current_slot(prev);
                    tracing::trace!(word, before = slot, "not found");
                    return Ok(Search::NotFound);
                }
            }
        }
        self.set_current_slot(self.tail_slot());
        tracing::trace!(word, "not found, belongs at tail");
        Ok(Search::NotFound)
    }

    /// Insert `word` in order, unless it is already present.
    ///
    /// This is [`find`](Self::find) followed, on a miss, by
    /// [`insert_after_current`](Self::insert_after_current). Either way the
    /// cursor ends on the node holding `word`. A repeated word is reported as
    /// [`Placement::Existing`] and its count is not changed.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyWord`] or [`ListError::Alloc`]. The list,
    /// cursor included, is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_words::{OrderedWordList, Placement};
    ///
    /// let mut list = OrderedWordList::new();
    /// let cat = list.sorted_insert("cat").unwrap();
    /// list.sorted_insert("apple").unwrap();
    /// list.sorted_insert("buy").unwrap();
    ///
    /// assert_eq!(list.sorted_insert("cat"), Ok(Placement::Existing(cat.id())));
    /// assert_eq!(list.words().collect::<Vec<_>>(), ["apple", "buy", "cat"]);
    /// ```
    pub fn sorted_insert(&mut self, word: &str) -> Result<Placement> {
        validate_word(word)?;
        if self.is_empty() {
            return self.insert_at_head(word).map(Placement::Inserted);
        }
        let saved = self.current_slot();
        if let Search::Found(id) = self.find(word)? {
            return Ok(Placement::Existing(id));
        }
        self.insert_after_current(word)
            .map(Placement::Inserted)
            .map_err(|err| {
                self.set_current_slot(saved);
                err
            })
    }

    /// Returns `true` if `word` is in the list. The cursor is not moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_words::OrderedWordList;
    ///
    /// let mut list = OrderedWordList::new();
    /// list.sorted_insert("Apple").unwrap();
    ///
    /// assert!(list.contains("Apple"));
    /// assert!(!list.contains("apple"));
    /// assert!(!list.contains(""));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        self.iter()
            .map(|entry| entry.word().cmp(word))
            .find(|ordering| *ordering != Ordering::Less)
            == Some(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::test_support::{build, current_word, words};
    use crate::list::{OrderedWordList, Placement, Search};

    #[test]
    fn find_in_the_middle_steps_back() {
        let mut list = build(&["apple", "buy", "cat"]);
        assert_eq!(list.find("baby"), Ok(Search::NotFound));
        assert_eq!(current_word(&list), Some("apple"));
        assert_eq!(list.find("bz"), Ok(Search::NotFound));
        assert_eq!(current_word(&list), Some("buy"));
    }

    #[test]
    fn find_before_head_unsets_cursor() {
        let mut list = build(&["apple", "buy", "cat"]);
        assert_eq!(list.find("acid"), Ok(Search::NotFound));
        assert!(list.current().is_none());
        assert!(list.current_id().is_none());
        assert!(!list.is_empty());
    }

    #[test]
    fn find_past_tail_lands_on_tail() {
        let mut list = build(&["apple", "buy", "cat"]);
        assert_eq!(list.find("zebra"), Ok(Search::NotFound));
        assert_eq!(list.current_id(), list.tail_id());
    }

    #[test]
    fn find_exact_match() {
        let mut list = build(&["apple", "buy", "cat"]);
        for word in &["apple", "buy", "cat"] {
            let found = list.find(word).unwrap();
            assert_eq!(found, Search::Found(list.current_id().unwrap()));
            assert_eq!(current_word(&list), Some(*word));
        }
    }

    #[test]
    fn find_single_node() {
        let mut list = build(&["m"]);
        assert_eq!(list.find("a"), Ok(Search::NotFound));
        assert!(list.current().is_none());
        assert_eq!(list.find("z"), Ok(Search::NotFound));
        assert_eq!(current_word(&list), Some("m"));
        assert!(list.find("m").unwrap().is_found());
    }

    #[test]
    fn find_is_case_sensitive() {
        let mut list = build(&["Apple"]);
        assert_eq!(list.find("apple"), Ok(Search::NotFound));
        // lowercase sorts after uppercase byte-wise
        assert_eq!(current_word(&list), Some("Apple"));

        list.insert_after_current("apple").unwrap();
        assert_eq!(words(&list), ["Apple", "apple"]);
        list.assert_links();
    }

    #[test]
    fn find_does_not_trim() {
        let mut list = build(&["a"]);
        assert_eq!(list.find("a "), Ok(Search::NotFound));
        assert_eq!(list.find(" a"), Ok(Search::NotFound));
        assert!(list.current().is_none());
    }

    #[test]
    fn find_rejects_invalid_input_without_moving_cursor() {
        let mut empty = OrderedWordList::new();
        assert_eq!(empty.find("apple"), Err(ListError::EmptyList));
        assert_eq!(empty.find(""), Err(ListError::EmptyWord));
        assert!(empty.current().is_none());

        let mut list = build(&["apple", "buy", "cat"]);
        list.set_current(list.tail_id()).unwrap();
        assert_eq!(list.find(""), Err(ListError::EmptyWord));
        assert_eq!(current_word(&list), Some("cat"));
    }

    #[test]
    fn sorted_insert_reports_existing_word() {
        let mut list = build(&["apple", "buy"]);
        let placement = list.sorted_insert("apple").unwrap();
        assert!(!placement.is_inserted());
        assert_eq!(list.len(), 2);
        assert_eq!(list.current_id(), Some(placement.id()));
        assert_eq!(list.front().unwrap().count(), 1);
    }

    #[test]
    fn sorted_insert_rejects_empty_word() {
        let mut list = build(&["apple", "buy"]);
        list.set_current(list.tail_id()).unwrap();
        assert_eq!(list.sorted_insert(""), Err(ListError::EmptyWord));
        assert_eq!(current_word(&list), Some("buy"));
        assert_eq!(words(&list), ["apple", "buy"]);
    }

    #[test]
    fn sorted_insert_keeps_order() {
        let input = [
            "pear", "Zebra", "apple", "fig", "banana", "Apple", "cherry", "zebra", "date",
            "elderberry", "grape", "aardvark", "yam", "fig", "pear", "~", "0", "apple",
        ];
        let mut list = OrderedWordList::new();
        for word in input.iter() {
            list.sorted_insert(word).unwrap();
            assert_eq!(current_word(&list), Some(*word));
            list.assert_links();
        }
        let mut expected: Vec<&str> = input.to_vec();
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(words(&list), expected);
        assert_eq!(list.clear(), expected.len());
    }

    #[test]
    fn sorted_insert_pseudo_random_words() {
        let mut state: u32 = 0x2545_f491;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        };
        let mut list = OrderedWordList::new();
        let mut expected = Vec::new();
        for _ in 0..300 {
            let len = 1 + next() % 4;
            let word: String = (0..len)
                .map(|_| char::from(b'a' + (next() % 6) as u8))
                .collect();
            let placement = list.sorted_insert(&word).unwrap();
            assert_eq!(placement.is_inserted(), !expected.contains(&word));
            if placement.is_inserted() {
                expected.push(word);
            }
        }
        list.assert_links();
        expected.sort();
        assert_eq!(words(&list), expected);
        assert_eq!(list.clear(), expected.len());
    }

    #[test]
    fn find_then_insert_scenario() {
        let mut list = OrderedWordList::new();
        list.insert_at_head("cat").unwrap();

        assert_eq!(list.find("apple"), Ok(Search::NotFound));
        assert!(list.current().is_none());
        list.insert_after_current("apple").unwrap();

        assert_eq!(list.find("buy"), Ok(Search::NotFound));
        assert_eq!(current_word(&list), Some("apple"));
        list.insert_after_current("buy").unwrap();

        assert_eq!(words(&list), ["apple", "buy", "cat"]);
        list.assert_links();
        assert_eq!(list.clear(), 3);
        list.assert_links();
    }

    #[test]
    fn duplicate_counts_are_a_caller_policy() {
        let mut list = OrderedWordList::new();
        for word in &["the", "cat", "the", "hat", "the"] {
            if let Placement::Existing(id) = list.sorted_insert(word).unwrap() {
                list.get_mut(id).unwrap().increment();
            }
        }
        let counts: Vec<_> = list.iter().map(|e| (e.word(), e.count())).collect();
        assert_eq!(counts, [("cat", 1), ("hat", 1), ("the", 3)]);
    }

    #[test]
    fn contains_does_not_move_cursor() {
        let mut list = build(&["apple", "buy", "cat"]);
        list.set_current(list.head_id()).unwrap();
        assert!(list.contains("buy"));
        assert!(!list.contains("baby"));
        assert!(!list.contains("zebra"));
        assert!(!OrderedWordList::new().contains("apple"));
        assert_eq!(current_word(&list), Some("apple"));
    }
}
