use thiserror::Error;

/// Errors that can occur while mapping OSC addresses to profile kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileKindError {
    /// Address is not one of the nine TUIO 1.1 profile addresses
    #[error("Unsupported profile type at address '{address}'. Only the 2D, 2.5D and 3D cursor, object and blob profiles are supported")]
    UnsupportedProfileType { address: String },
}
