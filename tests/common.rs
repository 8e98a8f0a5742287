#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;

pub const ACME_CSV: &str = "Company,Role,Location,Apply Link\n\
                            Acme,Analog Engineer,Remote,https://acme.example/apply\n";

pub const HEADER_ONLY_CSV: &str = "Company,Role,Location,Apply Link\n";

const PROXY_VARS: [&str; 6] = [
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// The binary, isolated from the caller's environment and run inside `dir`
pub fn rs(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("readme-sync");
    cmd.current_dir(dir)
        .env_remove("SHEET_CSV_URL")
        .env_remove("DATA_SOURCE_URL")
        .env("NO_COLOR", "1")
        .env("NO_PROXY", "127.0.0.1,localhost");
    for var in PROXY_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Fresh, empty working directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("readme_sync_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Serve the given (status, body) responses, one per connection, on 127.0.0.1.
/// Returns the base URL of the server.
pub fn serve(responses: Vec<(u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            read_request(&mut stream);

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                500 => "Internal Server Error",
                _ => "Status",
            };
            let resp = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(resp.as_bytes()).ok();
            stream.flush().ok();
        }
    });

    format!("http://{addr}/sheet.csv")
}

pub fn serve_once(status: u16, body: &str) -> String {
    serve(vec![(status, body.to_string())])
}

fn read_request(stream: &mut std::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

/// A README with prose around the listing markers
pub fn sample_readme() -> String {
    "# Hardware Internships\n\
     \n\
     Hand-written intro that must survive.\n\
     \n\
     **Last updated:** 2020-01-01 00:00 UTC\n\
     \n\
     <!-- LISTINGS:START -->\n\
     old table\n\
     <!-- LISTINGS:END -->\n\
     \n\
     ## Contributing\n\
     \n\
     Open a PR against the sheet.\n"
        .to_string()
}
