//! This crate provides an alphabetically ordered doubly-linked list of unique
//! words, each with an occurrence count, and a movable cursor.
//!
//! The [`OrderedWordList`] keeps its words in strictly ascending byte-wise
//! order. Insertion right after the cursor takes constant time; searching
//! takes *O*(*n*) time, bounded by the alphabetical order.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ordered_words::{OrderedWordList, Search};
//!
//! let mut list = OrderedWordList::new();
//!
//! list.insert_at_head("cat").unwrap(); // the first word goes in at the head
//!
//! // "apple" belongs before the head, so the search unsets the cursor
//! assert_eq!(list.find("apple"), Ok(Search::NotFound));
//! assert!(list.current().is_none());
//! list.insert_after_current("apple").unwrap(); // falls back to a head insert
//!
//! // "buy" belongs after "apple", so the search leaves the cursor there
//! assert_eq!(list.find("buy"), Ok(Search::NotFound));
//! assert_eq!(list.current().map(|e| e.word()), Some("apple"));
//! list.insert_after_current("buy").unwrap();
//!
//! assert_eq!(list.words().collect::<Vec<_>>(), ["apple", "buy", "cat"]);
//! assert_eq!(list.clear(), 3);
//! ```
//!
//! # Memory Layout
//!
//! The nodes are stored in an arena owned by the list, and linked to each
//! other by slot indices:
//! ```text
//!        head                                           tail
//!          │                                              │
//!          ↓                                              ↓
//!    ╔═══════════╗           ╔═══════════╗          ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ───────→ ║ next=None ║
//!    ╟───────────╢           ╟───────────╢          ╟───────────╢
//!    ║ prev=None ║ ←──────── ║   prev    ║ ←─────── ║   prev    ║
//!    ╟───────────╢           ╟───────────╢          ╟───────────╢
//!    ║  "apple"  ║           ║   "buy"   ║          ║   "cat"   ║
//!    ║  count 1  ║           ║  count 1  ║          ║  count 1  ║
//!    ╚═══════════╝           ╚═══════════╝          ╚═══════════╝
//!                                  ↑
//!                               current
//! ```
//! The `OrderedWordList` contains:
//! - the arena of nodes, in allocation order;
//! - `head` and `tail`, the first and the last node, or `None` if empty;
//! - `current`, the cursor, on some node or `None`;
//! - an epoch, unique to the list and renewed by [`clear`].
//!
//! Each node owns its own copy of the word. The list owns every node, so
//! dropping or clearing the list frees all of them at once.
//!
//! # Handles
//!
//! Nodes are addressed from outside by [`NodeId`] handles. A handle does not
//! borrow the list. A handle used on another list, or taken before a
//! [`clear`], is detected as stale rather than silently pointing at some
//! other node.
//!
//! # Sorted Insertion
//!
//! [`find`] leaves the cursor on the node a missing word belongs after (or
//! `None` when it belongs before the head), and [`insert_after_current`]
//! inserts right after the cursor (or at the head when the cursor is `None`).
//! Together they insert in order. [`sorted_insert`] does both in one call.
//!
//! What to do with a repeated word is up to the caller: the list reports it
//! and leaves its count alone.
//!
//! ```
//! use ordered_words::{OrderedWordList, Placement};
//!
//! let mut list = OrderedWordList::new();
//! for word in "the cat in the hat".split_whitespace() {
//!     if let Placement::Existing(id) = list.sorted_insert(word).unwrap() {
//!         list.get_mut(id).unwrap().increment();
//!     }
//! }
//! let counts: Vec<_> = list.iter().map(|e| (e.word(), e.count())).collect();
//! assert_eq!(counts, [("cat", 1), ("hat", 1), ("in", 1), ("the", 2)]);
//! ```
//!
//! [`OrderedWordList`]: crate::OrderedWordList
//! [`NodeId`]: crate::NodeId
//! [`clear`]: crate::OrderedWordList::clear
//! [`find`]: crate::OrderedWordList::find
//! [`insert_after_current`]: crate::OrderedWordList::insert_after_current
//! [`sorted_insert`]: crate::OrderedWordList::sorted_insert

#[doc(inline)]
pub use error::{ListError, Result};
#[doc(inline)]
pub use list::iterator::Iter;
#[doc(inline)]
pub use list::{NodeId, OrderedWordList, Placement, Search, WordEntry};

pub mod error;
pub mod list;
