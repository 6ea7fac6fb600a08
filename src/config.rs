//! Command-line configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Directory scanned for `*.csv` files when none is given.
pub const DEFAULT_DATA_DIR: &str = "csv_files";

/// Serve a directory of CSV files as one read-only table over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Directory containing the CSV files, relative to the working directory.
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Address the HTTP server listens on.
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub addr: SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["csv-data-service"]);
        assert_eq!(config.data_dir, PathBuf::from("csv_files"));
        assert_eq!(config.addr, "127.0.0.1:8000".parse().unwrap());
    }

    #[test]
    fn overrides() {
        let config = Config::parse_from([
            "csv-data-service",
            "--data-dir",
            "/srv/data",
            "--addr",
            "0.0.0.0:9000",
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.addr.port(), 9000);
    }
}
