//                                 1  1  1  1  1  1
//   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+

const QR_SHIFT: u16 = 15;
const OPCODE_SHIFT: u16 = 11;
const AA_SHIFT: u16 = 10;
const TC_SHIFT: u16 = 9;
const RD_SHIFT: u16 = 8;
const RA_SHIFT: u16 = 7;
const Z_SHIFT: u16 = 4;
const RCODE_SHIFT: u16 = 0;

const ONE_BIT: u16 = 0b1;
const THREE_BITS: u16 = 0b111;
const FOUR_BITS: u16 = 0b1111;

/// `Other` may carry a value that has a named variant; equality goes by the
/// wire value, so `Other(0) == Query`.
#[derive(Clone, Copy, Debug, Eq)]
pub enum Opcode {
    Query,
    IQuery,
    Status,
    Other(u8),
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Self {
        match code {
            0 => Opcode::Query,
            1 => Opcode::IQuery,
            2 => Opcode::Status,
            c => Opcode::Other(c),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> Self {
        match op {
            Opcode::Query => 0,
            Opcode::IQuery => 1,
            Opcode::Status => 2,
            Opcode::Other(c) => c,
        }
    }
}

/// Same equality rule as [`Opcode`].
#[derive(Clone, Copy, Debug, Eq)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Other(u8),
}

impl PartialEq for Opcode {
    fn eq(&self, other: &Self) -> bool {
        u8::from(*self) == u8::from(*other)
    }
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            c => ResponseCode::Other(c),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(rcode: ResponseCode) -> Self {
        match rcode {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Other(c) => c,
        }
    }
}

impl PartialEq for ResponseCode {
    fn eq(&self, other: &Self) -> bool {
        u8::from(*self) == u8::from(*other)
    }
}

/// The second 16-bit word of the header. Every setter only touches the bits
/// of its own field; wider values are truncated to the field width.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Flags(u16);

impl Flags {
    pub fn from_bits(bits: u16) -> Self {
        Flags(bits)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    fn get(&self, shift: u16, mask: u16) -> u16 {
        (self.0 >> shift) & mask
    }

    fn set(&mut self, shift: u16, mask: u16, value: u16) {
        self.0 = (self.0 & !(mask << shift)) | ((value & mask) << shift);
    }

    pub fn qr(&self) -> bool {
        self.get(QR_SHIFT, ONE_BIT) == 1
    }

    pub fn set_qr(&mut self, qr: bool) {
        self.set(QR_SHIFT, ONE_BIT, qr as u16);
    }

    pub fn opcode(&self) -> Opcode {
        Opcode::from(self.get(OPCODE_SHIFT, FOUR_BITS) as u8)
    }

    pub fn set_opcode(&mut self, opcode: Opcode) {
        self.set(OPCODE_SHIFT, FOUR_BITS, u16::from(u8::from(opcode)));
    }

    pub fn aa(&self) -> bool {
        self.get(AA_SHIFT, ONE_BIT) == 1
    }

    pub fn set_aa(&mut self, aa: bool) {
        self.set(AA_SHIFT, ONE_BIT, aa as u16);
    }

    pub fn tc(&self) -> bool {
        self.get(TC_SHIFT, ONE_BIT) == 1
    }

    pub fn set_tc(&mut self, tc: bool) {
        self.set(TC_SHIFT, ONE_BIT, tc as u16);
    }

    pub fn rd(&self) -> bool {
        self.get(RD_SHIFT, ONE_BIT) == 1
    }

    pub fn set_rd(&mut self, rd: bool) {
        self.set(RD_SHIFT, ONE_BIT, rd as u16);
    }

    pub fn ra(&self) -> bool {
        self.get(RA_SHIFT, ONE_BIT) == 1
    }

    pub fn set_ra(&mut self, ra: bool) {
        self.set(RA_SHIFT, ONE_BIT, ra as u16);
    }

    // reserved, zero on anything we send
    pub fn z(&self) -> u8 {
        self.get(Z_SHIFT, THREE_BITS) as u8
    }

    pub fn set_z(&mut self, z: u8) {
        self.set(Z_SHIFT, THREE_BITS, u16::from(z));
    }

    pub fn rcode(&self) -> ResponseCode {
        ResponseCode::from(self.get(RCODE_SHIFT, FOUR_BITS) as u8)
    }

    pub fn set_rcode(&mut self, rcode: ResponseCode) {
        self.set(RCODE_SHIFT, FOUR_BITS, u16::from(u8::from(rcode)));
    }
}
