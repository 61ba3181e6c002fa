use crate::error::{DnsError, Result};
use crate::flags::Flags;
use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt, BE};
use std::io::Cursor;

pub const HEADER_LEN: usize = 12;

// 12 bytes, all fields big-endian
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Header {
    pub id: u16, // echoed from query to response
    pub flags: Flags,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    /// A query header with RD set, as a stub resolver would send it.
    pub fn query(id: u16, qd_count: u16) -> Self {
        let mut flags = Flags::default();
        flags.set_rd(true);

        Self {
            id,
            flags,
            qd_count,
            ..Self::default()
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<()> {
        bytes.write_u16::<BE>(self.id)?;
        bytes.write_u16::<BE>(self.flags.bits())?;
        bytes.write_u16::<BE>(self.qd_count)?;
        bytes.write_u16::<BE>(self.an_count)?;
        bytes.write_u16::<BE>(self.ns_count)?;
        bytes.write_u16::<BE>(self.ar_count)?;

        Ok(())
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        BE::write_u16(&mut buf[0..2], self.id);
        BE::write_u16(&mut buf[2..4], self.flags.bits());
        BE::write_u16(&mut buf[4..6], self.qd_count);
        BE::write_u16(&mut buf[6..8], self.an_count);
        BE::write_u16(&mut buf[8..10], self.ns_count);
        BE::write_u16(&mut buf[10..12], self.ar_count);

        buf
    }

    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> Result<Self> {
        let id = rdr.read_u16::<BE>()?;
        let flags = Flags::from_bits(rdr.read_u16::<BE>()?);
        let qd_count = rdr.read_u16::<BE>()?;
        let an_count = rdr.read_u16::<BE>()?;
        let ns_count = rdr.read_u16::<BE>()?;
        let ar_count = rdr.read_u16::<BE>()?;

        let h = Self {
            id,
            flags,
            qd_count,
            an_count,
            ns_count,
            ar_count,
        };

        Ok(h)
    }

    /// Parses the first 12 bytes of `buf`; anything after them is ignored.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_LEN {
            return Err(DnsError::TruncatedMessage);
        }

        let mut rdr = Cursor::new(&buf[..HEADER_LEN]);
        Self::parse_from_reader(&mut rdr)
    }
}
