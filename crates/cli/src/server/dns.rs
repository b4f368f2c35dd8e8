use ferrous_recursor_infrastructure::dns::transport::udp::MAX_UDP_MESSAGE_SIZE;
use ferrous_recursor_infrastructure::dns::DnsServerHandler;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = UdpSocket::bind(socket_addr).await?;

    info!(bind_address = %socket.local_addr()?, "DNS server ready");

    serve_udp(socket, &handler, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
        }
        info!("Shutdown signal received");
    })
    .await;

    Ok(())
}

/// Receives and answers queries one at a time until `shutdown` completes.
/// A query is fully resolved before the next datagram is read.
pub async fn serve_udp<F>(socket: UdpSocket, handler: &DnsServerHandler, shutdown: F)
where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

    loop {
        let (len, client) = tokio::select! {
            _ = &mut shutdown => break,
            result = socket.recv_from(&mut recv_buf) => match result {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
            },
        };

        debug!(client = %client, bytes = len, "Datagram received");

        let Some(response) = handler.handle_raw_udp(&recv_buf[..len], client).await else {
            continue;
        };

        if let Err(e) = socket.send_to(&response, client).await {
            warn!(client = %client, error = %e, "Failed to send response");
        }
    }
}
