use bytes::{Bytes, BytesMut};
use dns::{RequestMessage, ResponseMessage, MAX_MESSAGE_SIZE};
use std::net::SocketAddr;
use tokio::net::UdpSocket;

pub struct DnsServer {
    socket: UdpSocket,
}

impl DnsServer {
    pub async fn bind(addr: SocketAddr) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;

        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// One datagram at a time: receive, parse, respond. A bad datagram or a
    /// failed send is logged and the loop goes on.
    pub async fn serve(&self) -> std::io::Result<()> {
        loop {
            let mut buf = BytesMut::with_capacity(MAX_MESSAGE_SIZE);
            let (size, source) = match self.socket.recv_buf_from(&mut buf).await {
                Ok(r) => r,
                Err(e) => {
                    tracing::error!("udp recv error, err: {}", e);
                    continue;
                }
            };
            tracing::debug!("received {} bytes from {}", size, source);

            let response = match handle_datagram(&buf[..size]) {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!("dropping datagram from {}, err: {}", source, e);
                    continue;
                }
            };

            if let Err(e) = self.socket.send_to(&response, source).await {
                tracing::error!("udp send to {} failed, err: {}", source, e);
            }
        }
    }
}

pub fn handle_datagram(request_bytes: &[u8]) -> dns::Result<Bytes> {
    let request = RequestMessage::parse(request_bytes)?;
    tracing::debug!("header: {:?}", request.header());
    for q in request.questions() {
        tracing::debug!("question: {} {} class {}", q.name, q.qtype, q.qclass);
    }

    let response = ResponseMessage::for_request(&request);

    Ok(response.to_bytes())
}
