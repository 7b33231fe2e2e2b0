pub mod arg_reader;
pub mod error;
pub mod message_type;
