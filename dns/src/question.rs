use crate::error::Result;
use crate::name::{read_name, write_name};
use crate::record_type::{RecordType, CLASS_IN};
use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use std::io::Cursor;

// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
// |                     QNAME                     |
// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
// |                     QTYPE                     |
// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
// |                     QCLASS                    |
// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub name: String,
    pub qtype: RecordType,
    pub qclass: u16,
}

impl Question {
    pub fn new(domain: &str, qtype: RecordType) -> Self {
        Self {
            name: domain.to_string(),
            qtype,
            qclass: CLASS_IN,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<()> {
        write_name(&self.name, bytes)?;

        bytes.write_u16::<BE>(u16::from(self.qtype))?;
        bytes.write_u16::<BE>(self.qclass)?;

        Ok(())
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.to_bytes(&mut bytes)?;

        Ok(bytes)
    }

    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> Result<Self> {
        let name = read_name(rdr)?;

        let qtype = RecordType::from(rdr.read_u16::<BE>()?);
        let qclass = rdr.read_u16::<BE>()?;

        let q = Self {
            name,
            qtype,
            qclass,
        };

        Ok(q)
    }

    /// Decodes the question at `offset` of the whole message, so that
    /// compression pointers can reach back into earlier sections.
    pub fn decode(buf: &[u8], offset: usize) -> Result<(Self, usize)> {
        let mut rdr = Cursor::new(buf);
        rdr.set_position(offset as u64);

        let q = Self::parse_from_reader(&mut rdr)?;

        Ok((q, rdr.position() as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DnsError;

    #[test]
    fn to_bytes_test() {
        let q = Question::new("baidu.com", RecordType::A);

        assert_eq!(
            q.encode().unwrap(),
            vec![5, 98, 97, 105, 100, 117, 3, 99, 111, 109, 0, 0, 1, 0, 1]
        );
    }

    #[test]
    fn decode_test() {
        let bytes = [
            0xAB, // unrelated leading byte
            12, b'c', b'o', b'd', b'e', b'c', b'r', b'a', b'f', b't', b'e', b'r', b's',
            2, b'i', b'o', 0, 0, 28, 0, 1, 0xFF,
        ];

        let (q, next) = Question::decode(&bytes, 1).unwrap();
        assert_eq!(q.name, "codecrafters.io");
        assert_eq!(q.qtype, RecordType::Aaaa);
        assert_eq!(q.qclass, CLASS_IN);
        assert_eq!(next, bytes.len() - 1);
    }

    #[test]
    fn round_trip_test() {
        let questions = [
            Question::new("example.com", RecordType::Mx),
            Question::new("", RecordType::Ns),
            Question {
                name: "Mixed.Case.org".to_string(),
                qtype: RecordType::Unknown(65),
                qclass: 255,
            },
        ];

        for q in questions.iter() {
            let bytes = q.encode().unwrap();
            let (decoded, next) = Question::decode(&bytes, 0).unwrap();

            assert_eq!(&decoded, q);
            assert_eq!(next, bytes.len());
        }
    }

    #[test]
    fn compressed_name_test() {
        // "example.com" at 0, then a question whose name is "www" + pointer
        let mut bytes = vec![
            7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0,
        ];
        bytes.extend_from_slice(&[3, b'w', b'w', b'w', 0xC0, 0x00, 0, 16, 0, 1]);

        let (q, next) = Question::decode(&bytes, 13).unwrap();
        assert_eq!(q.name, "www.example.com");
        assert_eq!(q.qtype, RecordType::Txt);
        assert_eq!(q.qclass, 1);
        assert_eq!(next, bytes.len());
    }

    #[test]
    fn truncated_type_test() {
        let bytes = [3, b'c', b'o', b'm', 0, 0, 1, 0];

        let err = Question::decode(&bytes, 0).unwrap_err();
        assert!(matches!(err, DnsError::TruncatedMessage));
    }

    #[test]
    fn encode_rejects_long_label() {
        let q = Question::new(&"x".repeat(64), RecordType::A);

        assert!(matches!(q.encode().unwrap_err(), DnsError::NameTooLong(64)));
    }
}
