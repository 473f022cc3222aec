use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct VenueHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for VenueHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight venue stub that accepts any POST and replies with a
/// filled-order JSON body.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_venue_stub() -> Result<(String, VenueHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind venue stub failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("venue stub addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    thread::spawn(move || handle_client(stream));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        VenueHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

/// Spawn a venue stub or skip when socket permissions are unavailable.
///
/// # Errors
///
/// Returns an error if the stub fails for reasons other than insufficient
/// socket permissions.
pub fn spawn_venue_stub_or_skip() -> Result<Option<(String, VenueHandle)>, String> {
    match spawn_venue_stub() {
        Ok(result) => Ok(Some(result)),
        Err(err) if err.contains("Operation not permitted") => {
            eprintln!("Skipping e2e test: {}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn handle_client(mut stream: TcpStream) {
    let mut buffer = [0u8; 4096];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    let body = r#"{"status":"ok","trades":[],"remainingQuantity":0,"orderStatus":"filled"}"#;
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `orderstorm` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_orderstorm<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = orderstorm_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run orderstorm failed: {}", err))
}

fn orderstorm_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_orderstorm").map_or_else(
        || Err("CARGO_BIN_EXE_orderstorm missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
