use crate::{ArgReader, ProfileError, ProfileKind, SessionId, Vec2, Vec3};

// Objects are tagged fiducials: a class id plus pose and motion. The three
// variants differ only in the vector type used for position and velocity and
// in whether rotation is a single angle or three.
//
// set s i <position> <angle> <velocity> <rotation velocity> m r
macro_rules! object {
    (
        $(#[$doc:meta])*
        $object:ident, $kind:expr,
        vector: $vector:ty => $read_vector:ident,
        rotation: $rotation:ty => $read_rotation:ident
    ) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $object {
            session_id: SessionId,
            source: String,
            class_id: i32,
            position: $vector,
            angle: $rotation,
            velocity: $vector,
            rotation_velocity: $rotation,
            acceleration: f32,
            rotation_acceleration: f32,
        }

        impl $object {
            #[allow(clippy::too_many_arguments)]
            pub fn new(
                session_id: SessionId,
                class_id: i32,
                position: $vector,
                angle: $rotation,
                velocity: $vector,
                rotation_velocity: $rotation,
                acceleration: f32,
                rotation_acceleration: f32,
            ) -> Self {
                Self {
                    session_id,
                    source: String::new(),
                    class_id,
                    position,
                    angle,
                    velocity,
                    rotation_velocity,
                    acceleration,
                    rotation_acceleration,
                }
            }

            pub fn class_id(&self) -> i32 {
                self.class_id
            }

            pub fn position(&self) -> $vector {
                self.position
            }

            pub fn angle(&self) -> $rotation {
                self.angle
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
                let class_id = reader.read_i32()?;
                let position = reader.$read_vector()?;
                let angle = reader.$read_rotation()?;
                let velocity = reader.$read_vector()?;
                let rotation_velocity = reader.$read_rotation()?;
                let acceleration = reader.read_f32()?;
                let rotation_acceleration = reader.read_f32()?;
                Ok(Self::new(
                    session_id,
                    class_id,
                    position,
                    angle,
                    velocity,
                    rotation_velocity,
                    acceleration,
                    rotation_acceleration,
                ))
            }
        }

        impl_profile!($object, $kind);
    };
}

object!(
    /// `/tuio/2Dobj`: a tagged object on a surface
    Object2D, ProfileKind::Object2D,
    vector: Vec2 => read_vec2,
    rotation: f32 => read_f32
);

object!(
    /// `/tuio/25Dobj`: a tagged object above a surface, rotating about one axis
    Object25D, ProfileKind::Object25D,
    vector: Vec3 => read_vec3,
    rotation: f32 => read_f32
);

object!(
    /// `/tuio/3Dobj`: a tagged object in free space, with rotation about all three axes
    Object3D, ProfileKind::Object3D,
    vector: Vec3 => read_vec3,
    rotation: Vec3 => read_vec3
);
