// Light domain model - fixed set of rooms with on/off state
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Room {
    Living,
    Kitchen,
    Bedroom,
}

impl Room {
    /// Display order used by the light controls card
    pub const ALL: [Room; 3] = [Room::Living, Room::Kitchen, Room::Bedroom];

    pub fn key(&self) -> &'static str {
        match self {
            Room::Living => "living",
            Room::Kitchen => "kitchen",
            Room::Bedroom => "bedroom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Room::Living => "Living",
            Room::Kitchen => "Kitchen",
            Room::Bedroom => "Bedroom",
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown room: {0}")]
pub struct UnknownRoom(pub String);

impl FromStr for Room {
    type Err = UnknownRoom;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Room::ALL
            .into_iter()
            .find(|room| room.key() == s)
            .ok_or_else(|| UnknownRoom(s.to_string()))
    }
}

/// On/off state for every room. Keys are fixed; there is no add or remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lights {
    living: bool,
    kitchen: bool,
    bedroom: bool,
}

impl Default for Lights {
    fn default() -> Self {
        Self {
            living: false,
            kitchen: true,
            bedroom: false,
        }
    }
}

impl Lights {
    pub fn is_on(&self, room: Room) -> bool {
        match room {
            Room::Living => self.living,
            Room::Kitchen => self.kitchen,
            Room::Bedroom => self.bedroom,
        }
    }

    /// Flip one room and return its new state
    pub fn toggle(&mut self, room: Room) -> bool {
        let slot = match room {
            Room::Living => &mut self.living,
            Room::Kitchen => &mut self.kitchen,
            Room::Bedroom => &mut self.bedroom,
        };
        *slot = !*slot;
        *slot
    }

    pub fn iter(&self) -> impl Iterator<Item = (Room, bool)> + '_ {
        Room::ALL.into_iter().map(|room| (room, self.is_on(room)))
    }
}
