use std::fmt::Debug;

use rosc::OscMessage;

use crate::{ProfileError, ProfileKind, SessionId};

/// One tracked input entity, decoded from a single `set` message.
///
/// The session id is fixed at construction. The source label is stamped
/// afterwards by the handler that owns the profile, from the most recent
/// `source` message.
pub trait Profile: Clone + Debug + Send + 'static {
    const KIND: ProfileKind;

    fn decode(message: &OscMessage) -> Result<Self, ProfileError>;
    fn session_id(&self) -> SessionId;
    fn source(&self) -> &str;
    fn set_source(&mut self, source: &str);
}

// Shared plumbing for every profile struct: checks the `set` arity for the
// kind, skips the command, then hands the reader to the type's own `read`.
// Defined before the `mod`s below so they see it in textual scope.
macro_rules! impl_profile {
    ($profile:ident, $kind:expr) => {
        impl crate::Profile for $profile {
            const KIND: crate::ProfileKind = $kind;

            fn decode(message: &rosc::OscMessage) -> Result<Self, crate::ProfileError> {
                let mut reader = crate::ArgReader::new(message);
                reader.expect_len("set", Self::KIND.set_arity())?;
                reader.skip();
                Self::read(&mut reader)
            }

            fn session_id(&self) -> crate::SessionId {
                self.session_id
            }

            fn source(&self) -> &str {
                &self.source
            }

            fn set_source(&mut self, source: &str) {
                source.clone_into(&mut self.source);
            }
        }
    };
}

pub mod blob;
pub mod cursor;
pub mod error;
pub mod object;
pub mod profile_kind;
pub mod touch;
