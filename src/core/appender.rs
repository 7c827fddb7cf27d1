//! Appender trait for log output destinations

use super::{error::Result, message::Message};

pub trait Appender: Send {
    fn append(&mut self, message: &Message) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
