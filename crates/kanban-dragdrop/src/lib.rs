//! Kanban DragDrop
//!
//! Drag-and-drop state machinery for boards: cards move between columns,
//! columns reorder within a board. Uses native HTML5 drag events.
//!
//! The two drag protocols are mutually exclusive by construction: the
//! tagged [`DragState`] can hold a dragged card or a dragged column, never
//! both. Hover targets are separate visual-only signals.

use leptos::prelude::*;

/// What is currently being dragged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// A card grabbed from `source_column`.
    Card { card_id: u64, source_column: u64 },
    /// A column grabbed by its header.
    Column { column_id: u64 },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Id of the dragged card, if a card drag is in progress.
    pub fn dragged_card(&self) -> Option<u64> {
        match self {
            DragState::Card { card_id, .. } => Some(*card_id),
            _ => None,
        }
    }

    /// Id of the dragged column, if a column drag is in progress.
    pub fn dragged_column(&self) -> Option<u64> {
        match self {
            DragState::Column { column_id } => Some(*column_id),
            _ => None,
        }
    }
}

/// A card drop that requires a server move call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDrop {
    pub card_id: u64,
    pub target_column: u64,
}

/// A column drop that requires a server reorder call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDrop {
    pub column_id: u64,
    pub target_position: i32,
}

/// Decide what a card drop means.
///
/// Returns `None` when nothing should happen: no card drag in progress, or
/// the card was dropped back onto its source column.
pub fn card_drop(state: DragState, target_column: u64) -> Option<CardDrop> {
    match state {
        DragState::Card { card_id, source_column } if source_column != target_column => {
            Some(CardDrop { card_id, target_column })
        }
        _ => None,
    }
}

/// Decide what a column drop means.
///
/// `current_position` is the dragged column's server-assigned position at
/// drop time (`None` when the column no longer exists). Dropping a column
/// onto its own position is a no-op.
pub fn column_drop(
    state: DragState,
    current_position: Option<i32>,
    target_position: i32,
) -> Option<ColumnDrop> {
    let column_id = state.dragged_column()?;
    match current_position {
        Some(position) if position != target_position => Some(ColumnDrop {
            column_id,
            target_position,
        }),
        _ => None,
    }
}

/// DnD signal bundle, provided once per board view.
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state: ReadSignal<DragState>,
    set_state: WriteSignal<DragState>,
    /// Column currently hovered during a card drag (visual only).
    pub hover_column: ReadSignal<Option<u64>>,
    set_hover_column: WriteSignal<Option<u64>>,
    /// Position currently hovered during a column drag (visual only).
    pub hover_position: ReadSignal<Option<i32>>,
    set_hover_position: WriteSignal<Option<i32>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (state, set_state) = signal(DragState::Idle);
    let (hover_column, set_hover_column) = signal(None::<u64>);
    let (hover_position, set_hover_position) = signal(None::<i32>);
    DndSignals {
        state,
        set_state,
        hover_column,
        set_hover_column,
        hover_position,
        set_hover_position,
    }
}

impl DndSignals {
    pub fn start_card_drag(&self, card_id: u64, source_column: u64) {
        self.set_state.set(DragState::Card { card_id, source_column });
    }

    pub fn start_column_drag(&self, column_id: u64) {
        self.set_state.set(DragState::Column { column_id });
    }

    /// Mark a column as the card drop target. Ignored unless a card drag
    /// is in progress.
    pub fn hover_over_column(&self, column_id: u64) {
        if self.state.get_untracked().dragged_card().is_some() {
            self.set_hover_column.set(Some(column_id));
        }
    }

    pub fn leave_column(&self) {
        self.set_hover_column.set(None);
    }

    /// Mark a header position as the column drop target. Ignored unless a
    /// column drag is in progress.
    pub fn hover_over_position(&self, position: i32) {
        if self.state.get_untracked().dragged_column().is_some() {
            self.set_hover_position.set(Some(position));
        }
    }

    /// Clear all drag state. Called on drop and on cancel, before the
    /// resulting API call resolves.
    pub fn end_drag(&self) {
        self.set_state.set(DragState::Idle);
        self.set_hover_column.set(None);
        self.set_hover_position.set(None);
    }
}

/// `dragover` handler marking a column as card drop target.
///
/// Calls `prevent_default` so the browser allows the drop.
pub fn make_on_card_drag_over(
    dnd: DndSignals,
    column_id: u64,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        dnd.hover_over_column(column_id);
    }
}

/// `dragover` handler marking a header position as column drop target.
pub fn make_on_column_drag_over(
    dnd: DndSignals,
    position: i32,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        dnd.hover_over_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATE_CARD: DragState = DragState::Card { card_id: 7, source_column: 1 };
    const STATE_COLUMN: DragState = DragState::Column { column_id: 3 };

    #[test]
    fn card_drop_on_other_column_moves() {
        let drop = card_drop(STATE_CARD, 2);
        assert_eq!(drop, Some(CardDrop { card_id: 7, target_column: 2 }));
    }

    #[test]
    fn card_drop_on_source_column_is_noop() {
        assert_eq!(card_drop(STATE_CARD, 1), None);
    }

    #[test]
    fn card_drop_without_card_drag_is_noop() {
        assert_eq!(card_drop(DragState::Idle, 2), None);
        assert_eq!(card_drop(STATE_COLUMN, 2), None);
    }

    #[test]
    fn column_drop_on_new_position_reorders() {
        let drop = column_drop(STATE_COLUMN, Some(0), 2);
        assert_eq!(drop, Some(ColumnDrop { column_id: 3, target_position: 2 }));
    }

    #[test]
    fn column_drop_on_current_position_is_noop() {
        assert_eq!(column_drop(STATE_COLUMN, Some(2), 2), None);
    }

    #[test]
    fn column_drop_for_vanished_column_is_noop() {
        assert_eq!(column_drop(STATE_COLUMN, None, 2), None);
    }

    #[test]
    fn column_drop_without_column_drag_is_noop() {
        assert_eq!(column_drop(DragState::Idle, Some(0), 2), None);
        assert_eq!(column_drop(STATE_CARD, Some(0), 2), None);
    }
}
