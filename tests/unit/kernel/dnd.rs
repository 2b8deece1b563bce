use super::*;
use crate::models::FieldIdGen;
use crate::schema::instantiate;

fn document(n: usize) -> FormDocument {
    let mut ids = FieldIdGen::new();
    FormDocument {
        fields: (0..n)
            .map(|_| instantiate(FieldType::Text, &mut ids))
            .collect(),
        ..FormDocument::default()
    }
}

#[test]
fn reorder_targets_are_clamped() {
    let doc = document(3);
    let payload = DragPayload::CanvasField { id: FieldId(1) };

    assert_eq!(
        drop_intent(&payload, DropTarget::CanvasSlot { index: 2 }, &doc),
        Some(DropIntent::Reorder {
            id: FieldId(1),
            to: 2
        })
    );
    assert_eq!(
        drop_intent(&payload, DropTarget::CanvasSlot { index: 99 }, &doc),
        Some(DropIntent::Reorder {
            id: FieldId(1),
            to: 2
        })
    );
    assert_eq!(
        drop_intent(&payload, DropTarget::CanvasEnd, &doc),
        Some(DropIntent::Reorder {
            id: FieldId(1),
            to: 2
        })
    );
}

#[test]
fn dropping_on_own_slot_does_nothing() {
    let doc = document(2);
    let payload = DragPayload::CanvasField { id: FieldId(1) };
    assert_eq!(
        drop_intent(&payload, DropTarget::CanvasSlot { index: 0 }, &doc),
        None
    );

    let stale = DragPayload::CanvasField { id: FieldId(9) };
    assert_eq!(drop_intent(&stale, DropTarget::CanvasEnd, &doc), None);
}

#[test]
fn palette_items_insert_at_slot() {
    let doc = document(2);
    let payload = DragPayload::PaletteItem {
        field_type: FieldType::Email,
    };

    assert_eq!(
        drop_intent(&payload, DropTarget::CanvasSlot { index: 1 }, &doc),
        Some(DropIntent::Insert {
            field_type: FieldType::Email,
            at: 1
        })
    );
    assert_eq!(
        drop_intent(&payload, DropTarget::CanvasSlot { index: 8 }, &doc),
        Some(DropIntent::Insert {
            field_type: FieldType::Email,
            at: 2
        })
    );
    assert_eq!(
        drop_intent(&payload, DropTarget::CanvasEnd, &FormDocument::default()),
        Some(DropIntent::Insert {
            field_type: FieldType::Email,
            at: 0
        })
    );
}

#[test]
fn drag_state_lifecycle() {
    let mut drag = DragState::default();
    assert!(!drag.hover(DropTarget::CanvasEnd));
    assert!(drag.take().is_none());

    let payload = DragPayload::CanvasField { id: FieldId(1) };
    drag.start(payload);
    assert!(drag.is_dragging());
    assert_eq!(drag.over(), None);

    assert!(drag.hover(DropTarget::CanvasSlot { index: 1 }));
    assert!(!drag.hover(DropTarget::CanvasSlot { index: 1 }));
    assert_eq!(drag.over(), Some(DropTarget::CanvasSlot { index: 1 }));

    assert_eq!(
        drag.take(),
        Some((payload, Some(DropTarget::CanvasSlot { index: 1 })))
    );
    assert!(!drag.is_dragging());
    assert_eq!(drag.over(), None);
}

#[test]
fn end_clears_without_dropping() {
    let mut drag = DragState::default();
    assert!(!drag.end());

    drag.start(DragPayload::PaletteItem {
        field_type: FieldType::Date,
    });
    drag.hover(DropTarget::CanvasEnd);
    assert!(drag.end());
    assert_eq!(drag, DragState::default());
}
