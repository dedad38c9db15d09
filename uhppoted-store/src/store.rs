use crate::router::{CursorEnd, Route, route};
use crate::table::{Cursor, RecordTable, Table};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uhppoted_model::{Card, Controller, Door, Event, FieldValue, Group, Interface, LogEntry};
use uhppoted_types::{EntityKind, Oid, Status};

/// What a single inbound update did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A root path named an unregistered entity, which was created.
    Created { kind: EntityKind, root: Oid },
    /// A root path updated the status of a registered entity.
    StatusChanged { kind: EntityKind, root: Oid },
    /// A field (or sub-collection entry) of an entity was written.
    FieldChanged { kind: EntityKind, root: Oid },
    /// A pagination cursor was updated.
    Cursor { kind: EntityKind, end: CursorEnd },
}

impl Applied {
    pub fn kind(&self) -> EntityKind {
        match self {
            Applied::Created { kind, .. }
            | Applied::StatusChanged { kind, .. }
            | Applied::FieldChanged { kind, .. }
            | Applied::Cursor { kind, .. } => *kind,
        }
    }

    /// The entity this update touched. `None` for cursor updates.
    pub fn root(&self) -> Option<&Oid> {
        match self {
            Applied::Created { root, .. }
            | Applied::StatusChanged { root, .. }
            | Applied::FieldChanged { root, .. } => Some(root),
            Applied::Cursor { .. } => None,
        }
    }
}

/// The cache's copy of the server object tree.
///
/// Mutated only through [`Store::apply`] (and the local delete/remove
/// operations); read directly through the public tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub interfaces: Table<Interface>,
    pub controllers: Table<Controller>,
    pub doors: Table<Door>,
    pub cards: Table<Card>,
    pub groups: Table<Group>,
    pub events: Table<Event>,
    pub logs: Table<LogEntry>,
    pub event_cursor: Cursor,
    pub log_cursor: Cursor,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes and applies one `(path, value)` update.
    ///
    /// Returns `None` when the update was dropped: an unparseable path, a
    /// path under no known kind, a write to an unregistered entity, or an
    /// unrecognised field suffix.
    pub fn apply(&mut self, path: &str, value: &str) -> Option<Applied> {
        let oid: Oid = match path.parse() {
            Ok(oid) => oid,
            Err(e) => {
                debug!("dropping update: {e}");
                return None;
            }
        };

        let Some(route) = route(&oid) else {
            debug!("dropping update for unrouted path {oid}");
            return None;
        };

        match route {
            Route::Root { kind, root } => {
                if self.write_root(kind, &root, value) {
                    Some(Applied::Created { kind, root })
                } else {
                    Some(Applied::StatusChanged { kind, root })
                }
            }
            Route::Field { kind, root, suffix } => {
                let was_new = self.status(kind, &root).is_some_and(Status::is_new);
                if self.write_field(kind, &root, &suffix, value) {
                    Some(Applied::FieldChanged { kind, root })
                } else if was_new {
                    Some(Applied::StatusChanged { kind, root })
                } else {
                    None
                }
            }
            Route::Cursor { kind, end } => {
                let cursor = self.cursor_mut(kind)?;
                let slot = match end {
                    CursorEnd::First => &mut cursor.first,
                    CursorEnd::Last => &mut cursor.last,
                };
                *slot = Some(value.to_string());
                Some(Applied::Cursor { kind, end })
            }
        }
    }

    /// Applies a batch in order, returning what landed.
    pub fn apply_all<'a, I>(&mut self, updates: I) -> Vec<Applied>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        updates
            .into_iter()
            .filter_map(|(path, value)| self.apply(path, value))
            .collect()
    }

    fn write_root(&mut self, kind: EntityKind, root: &Oid, value: &str) -> bool {
        match kind {
            EntityKind::Interface => self.interfaces.write_root(root, value),
            EntityKind::Controller => self.controllers.write_root(root, value),
            EntityKind::Door => self.doors.write_root(root, value),
            EntityKind::Card => self.cards.write_root(root, value),
            EntityKind::Group => self.groups.write_root(root, value),
            EntityKind::Event => self.events.write_root(root, value),
            EntityKind::LogEntry => self.logs.write_root(root, value),
        }
    }

    fn write_field(&mut self, kind: EntityKind, root: &Oid, suffix: &[u32], value: &str) -> bool {
        match kind {
            EntityKind::Interface => self.interfaces.write_field(root, suffix, value),
            EntityKind::Controller => self.controllers.write_field(root, suffix, value),
            EntityKind::Door => self.doors.write_field(root, suffix, value),
            EntityKind::Card => self.cards.write_field(root, suffix, value),
            EntityKind::Group => self.groups.write_field(root, suffix, value),
            EntityKind::Event => self.events.write_field(root, suffix, value),
            EntityKind::LogEntry => self.logs.write_field(root, suffix, value),
        }
    }

    pub fn table(&self, kind: EntityKind) -> &dyn RecordTable {
        match kind {
            EntityKind::Interface => &self.interfaces,
            EntityKind::Controller => &self.controllers,
            EntityKind::Door => &self.doors,
            EntityKind::Card => &self.cards,
            EntityKind::Group => &self.groups,
            EntityKind::Event => &self.events,
            EntityKind::LogEntry => &self.logs,
        }
    }

    pub fn table_mut(&mut self, kind: EntityKind) -> &mut dyn RecordTable {
        match kind {
            EntityKind::Interface => &mut self.interfaces,
            EntityKind::Controller => &mut self.controllers,
            EntityKind::Door => &mut self.doors,
            EntityKind::Card => &mut self.cards,
            EntityKind::Group => &mut self.groups,
            EntityKind::Event => &mut self.events,
            EntityKind::LogEntry => &mut self.logs,
        }
    }

    /// Every table, in routing order.
    pub fn tables_mut(&mut self) -> [&mut dyn RecordTable; 7] {
        [
            &mut self.interfaces,
            &mut self.controllers,
            &mut self.doors,
            &mut self.cards,
            &mut self.groups,
            &mut self.events,
            &mut self.logs,
        ]
    }

    pub fn cursor(&self, kind: EntityKind) -> Option<&Cursor> {
        match kind {
            EntityKind::Event => Some(&self.event_cursor),
            EntityKind::LogEntry => Some(&self.log_cursor),
            _ => None,
        }
    }

    fn cursor_mut(&mut self, kind: EntityKind) -> Option<&mut Cursor> {
        match kind {
            EntityKind::Event => Some(&mut self.event_cursor),
            EntityKind::LogEntry => Some(&mut self.log_cursor),
            _ => None,
        }
    }

    /// True while a paginated table has older records to load: its `last`
    /// cursor does not yet name a record in the table. Always false for
    /// kinds that are not paginated.
    pub fn more_available(&self, kind: EntityKind) -> bool {
        let Some(cursor) = self.cursor(kind) else {
            return false;
        };

        match cursor.last.as_deref().map(str::parse::<Oid>) {
            Some(Ok(last)) => self.table(kind).status_of(&last).is_none(),
            Some(Err(_)) | None => true,
        }
    }

    pub fn status(&self, kind: EntityKind, oid: &Oid) -> Option<&Status> {
        self.table(kind).status_of(oid)
    }

    pub fn contains(&self, kind: EntityKind, oid: &Oid) -> bool {
        self.status(kind, oid).is_some()
    }

    /// Marks `oid` deleted locally, as the server would.
    pub fn delete(&mut self, kind: EntityKind, oid: &Oid) -> bool {
        self.table_mut(kind).mark_deleted(oid)
    }

    /// Drops `oid` without waiting for the retention sweep.
    pub fn remove(&mut self, kind: EntityKind, oid: &Oid) -> bool {
        self.table_mut(kind).remove(oid)
    }

    pub fn field_values(&self, kind: EntityKind, oid: &Oid) -> Option<Vec<FieldValue>> {
        self.table(kind).field_values(oid)
    }

    pub fn ordered_oids(&self, kind: EntityKind) -> Vec<Oid> {
        self.table(kind).ordered_oids()
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        self.table(kind).record_count()
    }

    /// Total number of records across every table.
    pub fn total(&self) -> usize {
        EntityKind::ALL.iter().map(|&k| self.len(k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
