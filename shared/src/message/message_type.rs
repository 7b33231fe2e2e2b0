use std::fmt;

use rosc::{OscMessage, OscType};

use crate::ProfileError;

/// The command carried in the first argument of every TUIO profile message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageType {
    Source,
    Set,
    Alive,
    Fseq,
}

impl MessageType {
    pub fn parse(message: &OscMessage) -> Result<Self, ProfileError> {
        let Some(OscType::String(command)) = message.args.first() else {
            return Err(ProfileError::MissingMessageType {
                address: message.addr.clone(),
            });
        };

        match command.as_str() {
            "source" => Ok(Self::Source),
            "set" => Ok(Self::Set),
            "alive" => Ok(Self::Alive),
            "fseq" => Ok(Self::Fseq),
            other => Err(ProfileError::UnknownMessageType {
                address: message.addr.clone(),
                message_type: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Set => "set",
            Self::Alive => "alive",
            Self::Fseq => "fseq",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
