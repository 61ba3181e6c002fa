// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.4

use crate::error::{DnsError, Result};
use byteorder::ReadBytesExt;
use std::io::{Cursor, Read};

pub const MAX_LABEL_LEN: usize = 63;
// labels + length bytes + terminator
pub const MAX_NAME_LEN: usize = 255;
pub const MAX_POINTER_HOPS: usize = 128;

const POINTER_MASK: u8 = 0b1100_0000;

/// Reads a (possibly compressed) name starting at the cursor position.
///
/// When the name contains a compression pointer, the cursor is left just
/// past the first pointer, no matter how many pointers were followed.
pub fn read_name(rdr: &mut Cursor<&[u8]>) -> Result<String> {
    let mut labels: Vec<String> = Vec::new();
    let mut wire_len = 1;
    let mut hops = 0;
    let mut resume_at: Option<u64> = None;
    // where the labels being read began; every jump must land below it
    let mut segment_start = rdr.position() as usize;

    loop {
        let len_pos = rdr.position() as usize;
        let len_byte = rdr.read_u8()?;

        match len_byte & POINTER_MASK {
            0 => {
                if len_byte == 0 {
                    break;
                }

                let label_len = usize::from(len_byte);
                wire_len += 1 + label_len;
                if wire_len > MAX_NAME_LEN {
                    return Err(DnsError::NameTooLong(wire_len));
                }

                let mut label = vec![0; label_len];
                rdr.read_exact(&mut label)?;
                labels.push(String::from_utf8_lossy(&label).to_string());
            }
            POINTER_MASK => {
                let low = rdr.read_u8()?;
                let target = usize::from(len_byte & !POINTER_MASK) << 8 | usize::from(low);

                // only strictly backwards jumps, and not too many of them
                hops += 1;
                if target >= segment_start || hops > MAX_POINTER_HOPS {
                    return Err(DnsError::MalformedCompressionPointer {
                        offset: len_pos,
                        target,
                    });
                }

                if resume_at.is_none() {
                    resume_at = Some(rdr.position());
                }
                rdr.set_position(target as u64);
                segment_start = target;
            }
            _ => return Err(DnsError::InvalidLabelType(len_byte)),
        }
    }

    if let Some(pos) = resume_at {
        rdr.set_position(pos);
    }

    Ok(labels.join("."))
}

/// Decodes the name at `offset`, returning it with the offset of the first
/// byte after it.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize)> {
    let mut rdr = Cursor::new(buf);
    rdr.set_position(offset as u64);

    let name = read_name(&mut rdr)?;

    Ok((name, rdr.position() as usize))
}

// "www.example.com" => [3, w, w, w, 7, e, x, a, m, p, l, e, 3, c, o, m, 0]
pub fn write_name(domain: &str, bytes: &mut Vec<u8>) -> Result<()> {
    let qname = encode_name(domain)?;
    bytes.extend_from_slice(&qname);

    Ok(())
}

pub fn encode_name(domain: &str) -> Result<Vec<u8>> {
    let mut qname: Vec<u8> = Vec::new();

    // empty labels are skipped, so "" and "." both become the root
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(DnsError::NameTooLong(label.len()));
        }

        qname.push(label.len() as u8);
        qname.extend_from_slice(label.as_bytes());
    }

    qname.push(0);

    if qname.len() > MAX_NAME_LEN {
        return Err(DnsError::NameTooLong(qname.len()));
    }

    Ok(qname)
}
