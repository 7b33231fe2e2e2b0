use crate::{ArgReader, ProfileError, ProfileKind, SessionId, Vec2, Vec3};

// set s <position> <angle> <dimensions> <geometry> <velocity> <rotation velocity> m r
macro_rules! blob {
    (
        $(#[$doc:meta])*
        $blob:ident, $kind:expr,
        vector: $vector:ty => $read_vector:ident,
        rotation: $rotation:ty => $read_rotation:ident,
        dimensions: $dimensions:ty => $read_dimensions:ident,
        geometry: $geometry:ident
    ) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $blob {
            session_id: SessionId,
            source: String,
            position: $vector,
            angle: $rotation,
            dimensions: $dimensions,
            geometry: f32,
            velocity: $vector,
            rotation_velocity: $rotation,
            acceleration: f32,
            rotation_acceleration: f32,
        }

        impl $blob {
            #[allow(clippy::too_many_arguments)]
            pub fn new(
                session_id: SessionId,
                position: $vector,
                angle: $rotation,
                dimensions: $dimensions,
                $geometry: f32,
                velocity: $vector,
                rotation_velocity: $rotation,
                acceleration: f32,
                rotation_acceleration: f32,
            ) -> Self {
                Self {
                    session_id,
                    source: String::new(),
                    position,
                    angle,
                    dimensions,
                    geometry: $geometry,
                    velocity,
                    rotation_velocity,
                    acceleration,
                    rotation_acceleration,
                }
            }

            pub fn position(&self) -> $vector {
                self.position
            }

            pub fn angle(&self) -> $rotation {
                self.angle
            }

            pub fn dimensions(&self) -> $dimensions {
                self.dimensions
            }

            pub fn $geometry(&self) -> f32 {
                self.geometry
            }

            pub fn velocity(&self) -> $vector {
                self.velocity
            }

            pub fn rotation_velocity(&self) -> $rotation {
                self.rotation_velocity
            }

            pub fn acceleration(&self) -> f32 {
                self.acceleration
            }

            pub fn rotation_acceleration(&self) -> f32 {
                self.rotation_acceleration
            }

            fn read(reader: &mut ArgReader) -> Result<Self, ProfileError> {
                let session_id = reader.read_session_id()?;
                let position = reader.$read_vector()?;
                let angle = reader.$read_rotation()?;
                let dimensions = reader.$read_dimensions()?;
                let geometry = reader.read_f32()?;
                let velocity = reader.$read_vector()?;
                let rotation_velocity = reader.$read_rotation()?;
                let acceleration = reader.read_f32()?;
                let rotation_acceleration = reader.read_f32()?;
                Ok(Self::new(
                    session_id,
                    position,
                    angle,
                    dimensions,
                    geometry,
                    velocity,
                    rotation_velocity,
                    acceleration,
                    rotation_acceleration,
                ))
            }
        }

        impl_profile!($blob, $kind);
    };
}

blob!(
    /// `/tuio/2Dblb`: an untagged shape on a surface, described by its
    /// oriented bounding box and area
    Blob2D, ProfileKind::Blob2D,
    vector: Vec2 => read_vec2,
    rotation: f32 => read_f32,
    dimensions: Vec2 => read_vec2,
    geometry: area
);

blob!(
    /// `/tuio/25Dblb`
    Blob25D, ProfileKind::Blob25D,
    vector: Vec3 => read_vec3,
    rotation: f32 => read_f32,
    dimensions: Vec2 => read_vec2,
    geometry: area
);

blob!(
    /// `/tuio/3Dblb`: an untagged volume in free space
    Blob3D, ProfileKind::Blob3D,
    vector: Vec3 => read_vec3,
    rotation: Vec3 => read_vec3,
    dimensions: Vec3 => read_vec3,
    geometry: volume
);
