use crate::{Cursor2D, Profile, SessionId, Vec2};

/// A 2D cursor viewed as a touch point
#[derive(Clone, Debug, PartialEq)]
pub struct Touch {
    pub id: SessionId,
    pub position: Vec2,
    /// Position one velocity step back
    pub previous_position: Vec2,
    /// Seconds since the listener started
    pub time: f64,
    pub source: String,
}

impl Cursor2D {
    pub fn to_touch(&self, time: f64) -> Touch {
        Touch {
            id: self.session_id(),
            position: self.position(),
            previous_position: self.position() - self.velocity(),
            time,
            source: self.source().to_string(),
        }
    }
}

/// All touches that began, moved or ended in one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchEvent {
    touches: Vec<Touch>,
}

impl TouchEvent {
    pub fn from_cursors(cursors: &[Cursor2D], time: f64) -> Self {
        Self {
            touches: cursors.iter().map(|cursor| cursor.to_touch(time)).collect(),
        }
    }

    pub fn touches(&self) -> &[Touch] {
        &self.touches
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Touch> {
        self.touches.iter()
    }
}

impl IntoIterator for TouchEvent {
    type Item = Touch;
    type IntoIter = std::vec::IntoIter<Touch>;

    fn into_iter(self) -> Self::IntoIter {
        self.touches.into_iter()
    }
}
