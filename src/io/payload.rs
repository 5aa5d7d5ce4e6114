//! Serialisable views of the wall for external consumers

use crate::bond::brick::Brick;
use crate::build::session::BuildSession;
use crate::io::error::Result;
use crate::stride::window::Stride;
use crate::wall::state::Wall;
use serde::Serialize;

/// Full brick grid plus completion flag
///
/// Bricks serialise as `{placed, width, stride}` with the width in quarter units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallPayload {
    /// Courses bottom first, bricks left to right
    pub bricks: Vec<Vec<Brick>>,
    /// Whether every brick is laid
    pub is_complete: bool,
}

impl From<&Wall> for WallPayload {
    fn from(wall: &Wall) -> Self {
        Self {
            bricks: wall.rows().map(<[Brick]>::to_vec).collect(),
            is_complete: wall.is_complete(),
        }
    }
}

/// Wall plus the window currently worked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionPayload {
    /// Wall state
    pub wall: WallPayload,
    /// Active stride, `null` outside stride mode
    pub stride: Option<Stride>,
}

impl From<&BuildSession> for SessionPayload {
    fn from(session: &BuildSession) -> Self {
        Self {
            wall: session.wall().into(),
            stride: session.stride(),
        }
    }
}

/// Serialise any payload as a single JSON line
///
/// # Errors
///
/// Returns `Serialization` if the value cannot be encoded.
pub fn to_json_line(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
