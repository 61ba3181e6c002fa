extern crate tokio;

use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;
use dns::{RecordType, MAX_MESSAGE_SIZE};
use log::{info, warn};
use tokio::net::UdpSocket;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::try_init();

    let server_address = std::env::args().nth(1).unwrap_or("127.0.0.1:2053".to_string());
    let domain = std::env::args().nth(2).unwrap_or("codecrafters.io".to_string());
    let addr = server_address.parse::<SocketAddr>()?;

    // 1. binds an ephemeral local port
    let sock = UdpSocket::bind("127.0.0.1:0").await?;

    // 2. sends a single A query
    let id = (std::process::id() & 0xFFFF) as u16;
    let request = dns::encode_request(id, &domain, RecordType::A)?;
    sock.send_to(&request, addr).await?;
    info!("sent {} bytes to {}, id: {:#06x}, domain: {}", request.len(), addr, id, domain);

    // 3. waits for the reply
    let mut buf = vec![0; MAX_MESSAGE_SIZE];
    let n = match tokio::time::timeout(Duration::from_secs(3), sock.recv(&mut buf)).await {
        Ok(r) => r?,
        Err(_) => {
            warn!("no reply from {}", addr);
            return Ok(());
        }
    };

    let resp = dns::decode_response(&buf[..n])?;
    let h = resp.header();
    println!(
        "reply: {} bytes, id: {:#06x}, qr: {}, rcode: {:?}, qd: {}, an: {}, ns: {}, ar: {}",
        n,
        h.id,
        h.flags.qr(),
        h.flags.rcode(),
        h.qd_count,
        h.an_count,
        h.ns_count,
        h.ar_count
    );
    if h.id != id {
        warn!("reply id {:#06x} does not match query id {:#06x}", h.id, id);
    }

    Ok(())
}
