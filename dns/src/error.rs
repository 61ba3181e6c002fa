use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DnsError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("message truncated")]
    TruncatedMessage,

    #[error("malformed compression pointer at offset {offset}, target {target}")]
    MalformedCompressionPointer { offset: usize, target: usize },

    #[error("domain name too long: {0} bytes")]
    NameTooLong(usize),

    #[error("invalid label type: {0:#04x}")]
    InvalidLabelType(u8),
}

// The codec only reads from a Cursor over a slice and writes into a Vec, so
// the one I/O failure it can see is UnexpectedEof from running off the end.
impl From<io::Error> for DnsError {
    fn from(_: io::Error) -> Self {
        DnsError::TruncatedMessage
    }
}
