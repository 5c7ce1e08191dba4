//! Ordered stack of executed move records.

use crate::game_state::move_record::MoveRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) -> &MoveRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.records.iter()
    }

    /// Move list as numbered rows, White's move first: `"1. e2e4 e7e5"`.
    ///
    /// Assumes the game started with White to move.
    pub fn numbered_rows(&self) -> Vec<String> {
        self.records
            .chunks(2)
            .enumerate()
            .map(|(index, pair)| {
                let moves: Vec<&str> = pair.iter().map(|r| r.notation.as_str()).collect();
                format!("{}. {}", index + 1, moves.join(" "))
            })
            .collect()
    }
}
