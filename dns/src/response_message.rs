use crate::error::Result;
use crate::flags::Flags;
use crate::header::{Header, HEADER_LEN};
use crate::request_message::RequestMessage;
use bytes::{Bytes, BytesMut};

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1
//
// Messages carried by UDP are restricted to 512 bytes (not counting the IP
// or UDP headers).
pub const MAX_MESSAGE_SIZE: usize = 512;

#[derive(Debug)]
pub struct ResponseMessage {
    header: Header,
}

impl ResponseMessage {
    /// ID and section counts are copied from the request and QR is set.
    /// Every other flag is left zero, and no sections are written.
    pub fn for_request(request: &RequestMessage) -> Self {
        let req = request.header();

        let mut flags = Flags::default();
        flags.set_qr(true);

        let header = Header {
            id: req.id,
            flags,
            qd_count: req.qd_count,
            an_count: req.an_count,
            ns_count: req.ns_count,
            ar_count: req.ar_count,
        };

        Self { header }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::zeroed(MAX_MESSAGE_SIZE);
        buf[..HEADER_LEN].copy_from_slice(&self.header.encode());

        buf.freeze()
    }

    // only the header of a response is looked at
    pub fn parse_response(response: &[u8]) -> Result<Self> {
        let header = Header::parse(response)?;

        Ok(Self { header })
    }
}
