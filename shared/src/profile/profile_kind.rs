use std::fmt;

use crate::ProfileKindError;

/// The nine TUIO 1.1 profiles. Each maps to exactly one OSC address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    Cursor2D,
    Cursor25D,
    Cursor3D,
    Object2D,
    Object25D,
    Object3D,
    Blob2D,
    Blob25D,
    Blob3D,
}

// Indexed by discriminant, so the order must follow the enum.
const PROFILE_ADDRESSES: [(ProfileKind, &str, usize); 9] = [
    (ProfileKind::Cursor2D, "/tuio/2Dcur", 7),
    (ProfileKind::Cursor25D, "/tuio/25Dcur", 9),
    (ProfileKind::Cursor3D, "/tuio/3Dcur", 9),
    (ProfileKind::Object2D, "/tuio/2Dobj", 11),
    (ProfileKind::Object25D, "/tuio/25Dobj", 13),
    (ProfileKind::Object3D, "/tuio/3Dobj", 17),
    (ProfileKind::Blob2D, "/tuio/2Dblb", 13),
    (ProfileKind::Blob25D, "/tuio/25Dblb", 15),
    (ProfileKind::Blob3D, "/tuio/3Dblb", 20),
];

impl ProfileKind {
    pub const ALL: [ProfileKind; 9] = [
        ProfileKind::Cursor2D,
        ProfileKind::Cursor25D,
        ProfileKind::Cursor3D,
        ProfileKind::Object2D,
        ProfileKind::Object25D,
        ProfileKind::Object3D,
        ProfileKind::Blob2D,
        ProfileKind::Blob25D,
        ProfileKind::Blob3D,
    ];

    /// The OSC address this profile's messages are sent to
    pub fn address(&self) -> &'static str {
        PROFILE_ADDRESSES[*self as usize].1
    }

    /// Number of arguments in a `set` message, including the command itself
    pub fn set_arity(&self) -> usize {
        PROFILE_ADDRESSES[*self as usize].2
    }

    pub fn from_address(address: &str) -> Result<Self, ProfileKindError> {
        PROFILE_ADDRESSES
            .iter()
            .find(|(_, kind_address, _)| *kind_address == address)
            .map(|(kind, _, _)| *kind)
            .ok_or_else(|| ProfileKindError::UnsupportedProfileType {
                address: address.to_string(),
            })
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.address())
    }
}
