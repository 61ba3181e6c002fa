// https://datatracker.ietf.org/doc/html/rfc1035#section-4

mod error;
mod flags;
mod header;
mod name;
mod question;
mod record_type;
mod request_message;
mod response_message;

pub use error::{DnsError, Result};
pub use flags::{Flags, Opcode, ResponseCode};
pub use header::{Header, HEADER_LEN};
pub use name::{
    decode_name, encode_name, read_name, write_name, MAX_LABEL_LEN, MAX_NAME_LEN,
    MAX_POINTER_HOPS,
};
pub use question::Question;
pub use record_type::{RecordType, CLASS_IN};
pub use request_message::RequestMessage;
pub use response_message::{ResponseMessage, MAX_MESSAGE_SIZE};

pub fn encode_request(id: u16, domain: &str, qtype: RecordType) -> Result<Vec<u8>> {
    let request_msg = RequestMessage::new(id, domain, qtype);
    let mut request_bytes: Vec<u8> = vec![];
    request_msg.to_bytes(&mut request_bytes)?;

    Ok(request_bytes)
}

pub fn decode_request(request_bytes: &[u8]) -> Result<RequestMessage> {
    RequestMessage::parse(request_bytes)
}

pub fn decode_response(response_bytes: &[u8]) -> Result<ResponseMessage> {
    ResponseMessage::parse_response(response_bytes)
}
