//! Picking events or tasks out of parsed calendar documents.

use crate::component::{Component, ComponentKind};
use crate::document::CalendarDocument;
use crate::error::DystrosResult;

/// Yield the sub-components of `kind` from each document, documents in input
/// order and components in document order.
///
/// An error from `docs` is passed through once and ends the sequence.
pub fn extract_components<I>(docs: I, kind: ComponentKind) -> Components<I::IntoIter>
where
    I: IntoIterator<Item = DystrosResult<CalendarDocument>>,
{
    Components {
        docs: docs.into_iter(),
        kind,
        current: Vec::new().into_iter(),
        done: false,
    }
}

pub fn extract_events<I>(docs: I) -> Components<I::IntoIter>
where
    I: IntoIterator<Item = DystrosResult<CalendarDocument>>,
{
    extract_components(docs, ComponentKind::Event)
}

pub fn extract_todos<I>(docs: I) -> Components<I::IntoIter>
where
    I: IntoIterator<Item = DystrosResult<CalendarDocument>>,
{
    extract_components(docs, ComponentKind::Todo)
}

/// Iterator returned by [`extract_components`].
pub struct Components<I> {
    docs: I,
    kind: ComponentKind,
    current: std::vec::IntoIter<Component>,
    done: bool,
}

impl<I> Components<I> {
    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }
}

impl<I> Iterator for Components<I>
where
    I: Iterator<Item = DystrosResult<CalendarDocument>>,
{
    type Item = DystrosResult<Component>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if let Some(component) = self.current.by_ref().find(|c| c.kind == self.kind) {
                return Some(Ok(component));
            }

            match self.docs.next()? {
                Ok(doc) => self.current = doc.into_components().into_iter(),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DystrosError;

    fn component(kind: ComponentKind, uid: &str) -> Component {
        let mut c = Component::new(kind);
        c.uid = Some(uid.to_string());
        c
    }

    fn doc(components: Vec<Component>) -> DystrosResult<CalendarDocument> {
        Ok(CalendarDocument::new(Vec::new(), components))
    }

    fn uids(items: impl Iterator<Item = DystrosResult<Component>>) -> Vec<String> {
        items.map(|c| c.unwrap().uid.unwrap()).collect()
    }

    #[test]
    fn test_extract_events_keeps_order_across_documents() {
        let docs = vec![
            doc(vec![
                component(ComponentKind::Event, "e1"),
                component(ComponentKind::Todo, "t1"),
                component(ComponentKind::Event, "e2"),
            ]),
            doc(vec![]),
            doc(vec![
                component(ComponentKind::Other("VTIMEZONE".into()), "tz"),
                component(ComponentKind::Event, "e3"),
            ]),
        ];

        assert_eq!(uids(extract_events(docs)), vec!["e1", "e2", "e3"]);
    }

    #[test]
    fn test_extract_todos_ignores_events() {
        let docs = vec![doc(vec![
            component(ComponentKind::Event, "e1"),
            component(ComponentKind::Todo, "t1"),
            component(ComponentKind::Todo, "t2"),
        ])];

        assert_eq!(uids(extract_todos(docs)), vec!["t1", "t2"]);
    }

    #[test]
    fn test_error_ends_extraction() {
        let docs = vec![
            doc(vec![component(ComponentKind::Event, "e1")]),
            Err(DystrosError::Config("boom".into())),
            doc(vec![component(ComponentKind::Event, "e2")]),
        ];

        let mut events = extract_events(docs);
        assert_eq!(events.next().unwrap().unwrap().uid.as_deref(), Some("e1"));
        assert!(matches!(events.next(), Some(Err(DystrosError::Config(_)))));
        assert!(events.next().is_none());
    }

    #[test]
    fn test_extraction_is_lazy() {
        let mut pulled = 0;
        let docs = (0..100).map(|i| {
            pulled += 1;
            doc(vec![component(ComponentKind::Event, &format!("e{i}"))])
        });

        let first: Vec<_> = extract_events(docs).take(2).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(pulled, 2);
    }
}
