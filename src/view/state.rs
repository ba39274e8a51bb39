//! Board page state and its reducer.
//!
//! The UI never mutates [`BoardState`] in place: each event produces a
//! [`BoardAction`] and [`reduce`] returns the next state.

use super::models::{BoardSummary, CardView, ListView};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub board: Option<BoardSummary>,
    pub lists: Vec<ListView>,
    pub cards: Vec<CardView>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    /// A board fetch started.
    Loading,
    Loaded {
        board: BoardSummary,
        lists: Vec<ListView>,
        cards: Vec<CardView>,
    },
    Failed(String),
    DismissError,
    ListAdded(ListView),
    ListUpdated(ListView),
    /// Removes the list and every card it held.
    ListRemoved(String),
    CardAdded(CardView),
    CardUpdated(CardView),
    CardRemoved(String),
    /// Server answer to a move. `previous_id` differs from `card.id` when the
    /// card changed lists.
    CardMoved {
        previous_id: String,
        card: CardView,
    },
}

impl BoardState {
    /// Lists ordered by position.
    pub fn ordered_lists(&self) -> Vec<&ListView> {
        let mut lists: Vec<&ListView> = self.lists.iter().collect();
        lists.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        lists
    }

    /// Cards of one list ordered by position.
    pub fn cards_in(&self, list_id: &str) -> Vec<&CardView> {
        let mut cards: Vec<&CardView> = self.cards.iter().filter(|c| c.list_id == list_id).collect();
        cards.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        cards
    }

    pub fn find_card(&self, id: &str) -> Option<&CardView> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn find_list(&self, id: &str) -> Option<&ListView> {
        self.lists.iter().find(|l| l.id == id)
    }
}

fn replace<T: Clone>(items: &[T], is_target: impl Fn(&T) -> bool, new: &T) -> Vec<T> {
    items
        .iter()
        .map(|item| if is_target(item) { new.clone() } else { item.clone() })
        .collect()
}

/// Compute the state that follows `action`.
pub fn reduce(state: &BoardState, action: BoardAction) -> BoardState {
    let mut next = state.clone();
    match action {
        BoardAction::Loading => {
            next.loading = true;
            next.error = None;
        }
        BoardAction::Loaded {
            board,
            lists,
            cards,
        } => {
            next = BoardState {
                board: Some(board),
                lists,
                cards,
                loading: false,
                error: None,
            };
        }
        BoardAction::Failed(message) => {
            next.loading = false;
            next.error = Some(message);
        }
        BoardAction::DismissError => next.error = None,
        BoardAction::ListAdded(list) => {
            if state.find_list(&list.id).is_none() {
                next.lists.push(list);
            }
        }
        BoardAction::ListUpdated(list) => {
            next.lists = replace(&state.lists, |l| l.id == list.id, &list);
        }
        BoardAction::ListRemoved(id) => {
            next.lists.retain(|l| l.id != id);
            next.cards.retain(|c| c.list_id != id);
        }
        BoardAction::CardAdded(card) => {
            if state.find_card(&card.id).is_none() {
                next.cards.push(card);
            }
        }
        BoardAction::CardUpdated(card) => {
            next.cards = replace(&state.cards, |c| c.id == card.id, &card);
        }
        BoardAction::CardRemoved(id) => next.cards.retain(|c| c.id != id),
        BoardAction::CardMoved { previous_id, card } => {
            next.cards.retain(|c| c.id != previous_id && c.id != card.id);
            next.cards.push(card);
        }
    }
    next
}
