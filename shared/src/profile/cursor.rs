use crate::{ArgReader, ProfileError, ProfileKind, SessionId, Vec2, Vec3};

/// `/tuio/2Dcur`: a finger or pointer on a surface
#[derive(Clone, Debug, PartialEq)]
pub struct Cursor2D {
    session_id: SessionId,
    source: String,
    position: Vec2,
    velocity: Vec2,
    acceleration: f32,
}

impl Cursor2D {
    pub fn new(session_id: SessionId, position: Vec2, velocity: Vec2, acceleration: f32) -> Self {
        Self {
            session_id,
            source: String::new(),
            position,
            velocity,
            acceleration,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    // set s x y X Y m
    fn read(reader: &mut ArgReader) -> Result<Self, ProfileError> {
        let session_id = reader.read_session_id()?;
        let position = reader.read_vec2()?;
        let velocity = reader.read_vec2()?;
        let acceleration = reader.read_f32()?;
        Ok(Self::new(session_id, position, velocity, acceleration))
    }
}

impl_profile!(Cursor2D, ProfileKind::Cursor2D);

// 2.5D and 3D cursors share a layout; only the address differs.
macro_rules! spatial_cursor {
    ($(#[$doc:meta])* $cursor:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $cursor {
            session_id: SessionId,
            source: String,
            position: Vec3,
            velocity: Vec3,
            acceleration: f32,
        }

        impl $cursor {
            pub fn new(
                session_id: SessionId,
                position: Vec3,
                velocity: Vec3,
                acceleration: f32,
            ) -> Self {
                Self {
                    session_id,
                    source: String::new(),
                    position,
                    velocity,
                    acceleration,
                }
            }

            pub fn position(&self) -> Vec3 {
                self.position
            }

            pub fn velocity(&self) -> Vec3 {
                self.velocity
            }

            pub fn acceleration(&self) -> f32 {
                self.acceleration
            }

            // set s x y z X Y Z m
            fn read(reader: &mut ArgReader) -> Result<Self, ProfileError> {
                let session_id = reader.read_session_id()?;
                let position = reader.read_vec3()?;
                let velocity = reader.read_vec3()?;
                let acceleration = reader.read_f32()?;
                Ok(Self::new(session_id, position, velocity, acceleration))
            }
        }

        impl_profile!($cursor, $kind);
    };
}

spatial_cursor!(
    /// `/tuio/25Dcur`: a pointer above a surface, with height
    Cursor25D,
    ProfileKind::Cursor25D
);
spatial_cursor!(
    /// `/tuio/3Dcur`: a pointer in free space
    Cursor3D,
    ProfileKind::Cursor3D
);
