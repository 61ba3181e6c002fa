use std::fmt;

pub const CLASS_IN: u16 = 1;

/// Record types defined in RFC 1035 (plus AAAA). Values with no symbolic
/// name are kept as `Unknown`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RecordType {
    A,
    Ns,
    Md,
    Mf,
    Cname,
    Soa,
    Mb,
    Mg,
    Mr,
    Null,
    Wks,
    Ptr,
    Mx,
    Txt,
    Aaaa,
    Unknown(u16),
}

impl From<u16> for RecordType {
    fn from(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            2 => RecordType::Ns,
            3 => RecordType::Md,
            4 => RecordType::Mf,
            5 => RecordType::Cname,
            6 => RecordType::Soa,
            7 => RecordType::Mb,
            8 => RecordType::Mg,
            9 => RecordType::Mr,
            10 => RecordType::Null,
            11 => RecordType::Wks,
            12 => RecordType::Ptr,
            15 => RecordType::Mx,
            16 => RecordType::Txt,
            28 => RecordType::Aaaa,
            v => RecordType::Unknown(v),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(t: RecordType) -> Self {
        match t {
            RecordType::A => 1,
            RecordType::Ns => 2,
            RecordType::Md => 3,
            RecordType::Mf => 4,
            RecordType::Cname => 5,
            RecordType::Soa => 6,
            RecordType::Mb => 7,
            RecordType::Mg => 8,
            RecordType::Mr => 9,
            RecordType::Null => 10,
            RecordType::Wks => 11,
            RecordType::Ptr => 12,
            RecordType::Mx => 15,
            RecordType::Txt => 16,
            RecordType::Aaaa => 28,
            RecordType::Unknown(v) => v,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            RecordType::A => "A",
            RecordType::Ns => "NS",
            RecordType::Md => "MD",
            RecordType::Mf => "MF",
            RecordType::Cname => "CNAME",
            RecordType::Soa => "SOA",
            RecordType::Mb => "MB",
            RecordType::Mg => "MG",
            RecordType::Mr => "MR",
            RecordType::Null => "NULL",
            RecordType::Wks => "WKS",
            RecordType::Ptr => "PTR",
            RecordType::Mx => "MX",
            RecordType::Txt => "TXT",
            RecordType::Aaaa => "AAAA",
            RecordType::Unknown(_) => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_test() {
        let known = [
            (1u16, "A"),
            (2, "NS"),
            (3, "MD"),
            (4, "MF"),
            (5, "CNAME"),
            (6, "SOA"),
            (7, "MB"),
            (8, "MG"),
            (9, "MR"),
            (10, "NULL"),
            (11, "WKS"),
            (12, "PTR"),
            (15, "MX"),
            (16, "TXT"),
            (28, "AAAA"),
        ];

        for (value, name) in known.iter() {
            let t = RecordType::from(*value);
            assert!(!matches!(t, RecordType::Unknown(_)));
            assert_eq!(u16::from(t), *value);
            assert_eq!(t.to_string(), *name);
        }
    }

    #[test]
    fn unknown_values_test() {
        for value in [0u16, 13, 14, 33, 255, 65535].iter() {
            let t = RecordType::from(*value);
            assert_eq!(t, RecordType::Unknown(*value));
            assert_eq!(u16::from(t), *value);
            assert_eq!(t.to_string(), "UNKNOWN");
        }
    }
}
