use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Closed set of room categories understood by the generation backend.
///
/// Each category maps to a numeric class id and a display color. The wire
/// tag is the backend's spelling, which mixes underscores and spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "living_room")]
    LivingRoom,
    #[serde(rename = "kitchen")]
    Kitchen,
    #[serde(rename = "bedroom")]
    Bedroom,
    #[serde(rename = "bathroom")]
    Bathroom,
    #[serde(rename = "balcony")]
    Balcony,
    #[serde(rename = "entrance")]
    Entrance,
    #[serde(rename = "dining room")]
    DiningRoom,
    #[serde(rename = "study room")]
    StudyRoom,
    #[serde(rename = "storage")]
    Storage,
    #[serde(rename = "front door")]
    FrontDoor,
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "interior_door")]
    InteriorDoor,
}

impl RoomType {
    /// All categories, in the backend's table order.
    pub const ALL: [RoomType; 12] = [
        RoomType::LivingRoom,
        RoomType::Kitchen,
        RoomType::Bedroom,
        RoomType::Bathroom,
        RoomType::Balcony,
        RoomType::Entrance,
        RoomType::DiningRoom,
        RoomType::StudyRoom,
        RoomType::Storage,
        RoomType::FrontDoor,
        RoomType::Unknown,
        RoomType::InteriorDoor,
    ];

    /// Numeric class id used by the generation backend. Note there is no class 9.
    #[must_use]
    pub const fn class_id(self) -> u8 {
        match self {
            RoomType::LivingRoom => 1,
            RoomType::Kitchen => 2,
            RoomType::Bedroom => 3,
            RoomType::Bathroom => 4,
            RoomType::Balcony => 5,
            RoomType::Entrance => 6,
            RoomType::DiningRoom => 7,
            RoomType::StudyRoom => 8,
            RoomType::Storage => 10,
            RoomType::FrontDoor => 11,
            RoomType::InteriorDoor => 12,
            RoomType::Unknown => 13,
        }
    }

    /// Display color as a `#RRGGBB` hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            RoomType::LivingRoom => "#FF6B6B",
            RoomType::Kitchen => "#4ECDC4",
            RoomType::Bedroom => "#45B7D1",
            RoomType::Bathroom => "#66D7D1",
            RoomType::Balcony => "#95E1D3",
            RoomType::Entrance => "#FCE38A",
            RoomType::DiningRoom => "#F38181",
            RoomType::StudyRoom => "#A8D8EA",
            RoomType::Storage => "#AA96DA",
            RoomType::FrontDoor => "#FCBAD3",
            RoomType::Unknown => "#FFFFD2",
            RoomType::InteriorDoor => "#E3FDFD",
        }
    }

    /// Wire tag, e.g. `"living_room"` or `"dining room"`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            RoomType::LivingRoom => "living_room",
            RoomType::Kitchen => "kitchen",
            RoomType::Bedroom => "bedroom",
            RoomType::Bathroom => "bathroom",
            RoomType::Balcony => "balcony",
            RoomType::Entrance => "entrance",
            RoomType::DiningRoom => "dining room",
            RoomType::StudyRoom => "study room",
            RoomType::Storage => "storage",
            RoomType::FrontDoor => "front door",
            RoomType::Unknown => "unknown",
            RoomType::InteriorDoor => "interior_door",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RoomType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| ModelError::UnknownRoomType(s.to_owned()))
    }
}

/// A room node in the layout graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub number: String,
    pub size: String,
    #[serde(default)]
    pub name: String,
}

/// Form input for a room that has not been added yet.
///
/// Fields are kept as entered; validation happens when the room is added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomDraft {
    pub room_type: String,
    pub number: String,
    pub size: String,
    pub name: String,
}

impl RoomDraft {
    #[must_use]
    pub fn new(room_type: &str, number: &str, size: &str) -> Self {
        Self {
            room_type: room_type.to_owned(),
            number: number.to_owned(),
            size: size.to_owned(),
            name: String::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    /// Checks that type, number and size are filled in and the type is known.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::IncompleteRoom` naming the first empty field, or
    /// `ModelError::UnknownRoomType` if the type tag is not recognised.
    pub fn validate(&self) -> Result<RoomType, ModelError> {
        if self.room_type.is_empty() {
            return Err(ModelError::IncompleteRoom("type"));
        }
        if self.number.is_empty() {
            return Err(ModelError::IncompleteRoom("number"));
        }
        if self.size.is_empty() {
            return Err(ModelError::IncompleteRoom("size"));
        }
        self.room_type.parse()
    }
}
