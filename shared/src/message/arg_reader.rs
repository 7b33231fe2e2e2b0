use rosc::{OscMessage, OscType};

use crate::{ProfileError, SessionId, Vec2, Vec3};

/// Reads the positional arguments of one TUIO message in order.
///
/// Every read checks the OSC type of the argument it consumes, so a reader
/// never panics on short or mistyped input. Callers that know the exact
/// shape of a message should call [`ArgReader::expect_len`] first, which
/// turns a wrong argument count into [`ProfileError::MalformedMessage`].
pub struct ArgReader<'a> {
    address: &'a str,
    args: &'a [OscType],
    index: usize,
}

impl<'a> ArgReader<'a> {
    pub fn new(message: &'a OscMessage) -> Self {
        Self {
            address: &message.addr,
            args: &message.args,
            index: 0,
        }
    }

    pub fn address(&self) -> &'a str {
        self.address
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.args.len().saturating_sub(self.index)
    }

    pub fn expect_len(&self, message_type: &'static str, expected: usize) -> Result<(), ProfileError> {
        if self.args.len() == expected {
            Ok(())
        } else {
            Err(self.malformed(message_type, expected))
        }
    }

    pub fn expect_at_least(
        &self,
        message_type: &'static str,
        expected: usize,
    ) -> Result<(), ProfileError> {
        if self.args.len() >= expected {
            Ok(())
        } else {
            Err(self.malformed(message_type, expected))
        }
    }

    /// Skips the message type, which the caller has already classified.
    pub fn skip(&mut self) {
        self.index = (self.index + 1).min(self.args.len());
    }

    pub fn read_i32(&mut self) -> Result<i32, ProfileError> {
        match self.next_arg("an int")? {
            OscType::Int(value) => Ok(*value),
            other => Err(self.unexpected("an int", other)),
        }
    }

    pub fn read_session_id(&mut self) -> Result<SessionId, ProfileError> {
        self.read_i32()
    }

    /// Floats sent as OSC doubles are narrowed to `f32`.
    pub fn read_f32(&mut self) -> Result<f32, ProfileError> {
        match self.next_arg("a float")? {
            OscType::Float(value) => Ok(*value),
            OscType::Double(value) => Ok(*value as f32),
            other => Err(self.unexpected("a float", other)),
        }
    }

    pub fn read_str(&mut self) -> Result<&'a str, ProfileError> {
        match self.next_arg("a string")? {
            OscType::String(value) => Ok(value.as_str()),
            other => Err(self.unexpected("a string", other)),
        }
    }

    pub fn read_vec2(&mut self) -> Result<Vec2, ProfileError> {
        Ok(Vec2::new(self.read_f32()?, self.read_f32()?))
    }

    pub fn read_vec3(&mut self) -> Result<Vec3, ProfileError> {
        Ok(Vec3::new(self.read_f32()?, self.read_f32()?, self.read_f32()?))
    }

    /// Reads every argument left as an int. Used for `alive` id lists.
    pub fn read_remaining_i32(&mut self) -> Result<Vec<i32>, ProfileError> {
        let mut values = Vec::with_capacity(self.remaining());
        while self.remaining() > 0 {
            values.push(self.read_i32()?);
        }
        Ok(values)
    }

    fn next_arg(&mut self, expected: &'static str) -> Result<&'a OscType, ProfileError> {
        let args = self.args;
        let Some(arg) = args.get(self.index) else {
            return Err(ProfileError::UnexpectedArgument {
                address: self.address.to_string(),
                index: self.index,
                expected,
                received: "nothing",
            });
        };
        self.index += 1;
        Ok(arg)
    }

    // `index` has already moved past the offending argument
    fn unexpected(&self, expected: &'static str, received: &OscType) -> ProfileError {
        ProfileError::UnexpectedArgument {
            address: self.address.to_string(),
            index: self.index - 1,
            expected,
            received: osc_type_name(received),
        }
    }

    fn malformed(&self, message_type: &'static str, expected: usize) -> ProfileError {
        ProfileError::MalformedMessage {
            address: self.address.to_string(),
            message_type,
            expected,
            actual: self.args.len(),
        }
    }
}

fn osc_type_name(arg: &OscType) -> &'static str {
    match arg {
        OscType::Int(_) => "an int",
        OscType::Float(_) => "a float",
        OscType::String(_) => "a string",
        OscType::Blob(_) => "a blob",
        OscType::Long(_) => "a long",
        OscType::Double(_) => "a double",
        OscType::Bool(_) => "a bool",
        _ => "an unsupported type",
    }
}
