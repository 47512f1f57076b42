use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::math::Point2;

use super::room::{Room, RoomDraft};

/// A directed adjacency entry between two rooms.
///
/// `value` is [`Connection::CONNECTED`] for a confirmed adjacency and
/// [`Connection::UNDECIDED`] for a candidate the user has not confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: usize,
    pub target: usize,
    pub value: i8,
}

impl Connection {
    pub const CONNECTED: i8 = 1;
    pub const UNDECIDED: i8 = -1;

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.value == Self::CONNECTED
    }
}

/// Rooms and their connectivity edges.
///
/// Room ids are assigned densely in insertion order and never reused.
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    connectivity: Vec<Connection>,
}

impl RoomGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room at `position` and proposes an undecided edge from every
    /// existing room to it.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::IncompleteRoom` or `ModelError::UnknownRoomType`
    /// if the draft does not validate. The graph is unchanged on error.
    pub fn add_room(&mut self, draft: RoomDraft, position: Point2) -> Result<usize> {
        let room_type = draft.validate()?;
        let id = self.rooms.len();

        self.connectivity.extend(self.rooms.iter().map(|r| Connection {
            source: r.id,
            target: id,
            value: Connection::UNDECIDED,
        }));
        self.rooms.push(Room {
            id,
            x: position.x,
            y: position.y,
            room_type,
            number: draft.number,
            size: draft.size,
            name: draft.name,
        });
        debug!(id, %room_type, "added room");
        Ok(id)
    }

    /// Flips an existing edge between connected and undecided, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ConnectionNotFound` if no edge runs from `source`
    /// to `target`.
    pub fn toggle_edge(&mut self, source: usize, target: usize) -> Result<i8> {
        let edge = self
            .connectivity
            .iter_mut()
            .find(|c| c.source == source && c.target == target)
            .ok_or(ModelError::ConnectionNotFound {
                from: source,
                to: target,
            })?;
        edge.value = if edge.is_connected() {
            Connection::UNDECIDED
        } else {
            Connection::CONNECTED
        };
        Ok(edge.value)
    }

    /// Drag-to-connect: removes the directed edge if present, otherwise adds
    /// it as connected. Returns `true` if an edge was added.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::RoomNotFound` for an unknown id, or
    /// `ModelError::SelfConnection` if `source == target`.
    pub fn connect(&mut self, source: usize, target: usize) -> Result<bool> {
        for id in [source, target] {
            if self.room(id).is_none() {
                return Err(ModelError::RoomNotFound(id).into());
            }
        }
        if source == target {
            return Err(ModelError::SelfConnection(source).into());
        }

        let before = self.connectivity.len();
        self.connectivity
            .retain(|c| !(c.source == source && c.target == target));
        if self.connectivity.len() == before {
            self.connectivity.push(Connection {
                source,
                target,
                value: Connection::CONNECTED,
            });
            debug!(source, target, "connected rooms");
            Ok(true)
        } else {
            debug!(source, target, "disconnected rooms");
            Ok(false)
        }
    }

    /// Moves a room, e.g. after the layout collaborator settles.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::RoomNotFound` for an unknown id.
    pub fn move_room(&mut self, id: usize, position: Point2) -> Result<()> {
        let room = self
            .rooms
            .get_mut(id)
            .ok_or(ModelError::RoomNotFound(id))?;
        room.x = position.x;
        room.y = position.y;
        Ok(())
    }

    #[must_use]
    pub fn room(&self, id: usize) -> Option<&Room> {
        self.rooms.get(id)
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn connectivity(&self) -> &[Connection] {
        &self.connectivity
    }
}
