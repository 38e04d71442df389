//! Server configuration read from command line arguments or environment variables.

use std::{net::IpAddr, path::PathBuf};

use clap::Parser;

/// The port to serve the API from if neither `--port` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 4000;

/// The REST API server for tracking transactions.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The port to serve the API from.
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The IP address to listen on.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// The canonical name of the timezone used to display dates, e.g. "Pacific/Auckland".
    #[arg(long, env = "TIMEZONE", default_value = "Etc/UTC")]
    pub timezone: String,

    /// File path to append debug logs to, in addition to stdout.
    #[arg(long, env = "LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use clap::{CommandFactory, FromArgMatches, Parser};

    use super::{Config, DEFAULT_PORT};

    #[test]
    fn parses_all_arguments() {
        let config = Config::try_parse_from([
            "server",
            "--port",
            "8080",
            "--host",
            "0.0.0.0",
            "--timezone",
            "Pacific/Auckland",
            "--log-path",
            "debug.log",
        ])
        .expect("Could not parse arguments");

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.timezone, "Pacific/Auckland");
        assert_eq!(config.log_path, Some("debug.log".into()));
    }

    #[test]
    fn port_defaults_to_4000() {
        // Unbind `PORT` so the result does not depend on the test environment.
        let matches = Config::command()
            .mut_arg("port", |arg| arg.env(None::<&str>))
            .try_get_matches_from(["server"])
            .expect("Could not parse arguments");

        let config = Config::from_arg_matches(&matches).expect("Could not read arguments");

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(DEFAULT_PORT, 4000);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Config::try_parse_from(["server", "--port", "not-a-port"]).is_err());
    }
}
