use crate::error::Result;
use crate::header::Header;
use crate::question::Question;
use crate::record_type::RecordType;
use std::io::Cursor;

#[derive(Debug)]
pub struct RequestMessage {
    header: Header,
    questions: Vec<Question>,
}

impl RequestMessage {
    pub fn new(id: u16, domain: &str, qtype: RecordType) -> Self {
        let header = Header::query(id, 1);
        let question = Question::new(domain, qtype);

        Self {
            header,
            questions: vec![question],
        }
    }

    // qd_count always follows the questions actually written
    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<()> {
        let mut header = self.header;
        header.qd_count = self.questions.len() as u16;
        header.to_bytes(bytes)?;

        for q in &self.questions {
            q.to_bytes(bytes)?;
        }

        Ok(())
    }

    /// Parses the header and up to `qd_count` questions, stopping early when
    /// the buffer ends on a question boundary. A question cut off midway is
    /// still an error. Answer, authority and additional sections are left
    /// unread.
    pub fn parse(request: &[u8]) -> Result<Self> {
        let mut reader = Cursor::new(request);

        let header = Header::parse_from_reader(&mut reader)?;

        let count = header.qd_count as usize;
        let mut questions: Vec<Question> = Vec::with_capacity(count.min(16));
        for _ in 0..count {
            if reader.position() as usize >= request.len() {
                break;
            }
            questions.push(Question::parse_from_reader(&mut reader)?);
        }

        let msg = Self { header, questions };

        Ok(msg)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }
}
