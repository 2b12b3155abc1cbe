use clap::Parser;

use crate::config::Config;

/// Local development HTTP server with single-page-app fallback routing
///
/// Serves files from the document root; any path without a matching file
/// gets the fallback document at status 200 with the URL unchanged.
#[derive(Debug, Parser)]
#[command(name = "spaserve", version)]
pub struct Cli {
    /// TCP port to listen on
    ///
    /// Overrides the configured port. Defaults to 8000.
    pub port: Option<u16>,

    /// Host or interface to bind
    #[arg(long, value_name = "HOSTNAME_OR_IP")]
    pub host: Option<String>,

    /// Document root to serve from
    #[arg(long, value_name = "DIR")]
    pub root: Option<String>,

    /// Config file name, without extension
    #[arg(long, default_value = "spaserve")]
    pub config: String,
}

impl Cli {
    /// Overlay command-line values on the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(root) = &self.root {
            config.server.root.clone_from(root);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_port() {
        let cli = Cli::try_parse_from(["spaserve", "9090"]).unwrap();
        assert_eq!(cli.port, Some(9090));
    }

    #[test]
    fn test_no_arguments_leaves_port_unset() {
        let cli = Cli::try_parse_from(["spaserve"]).unwrap();
        assert_eq!(cli.port, None);
    }

    #[test]
    fn test_non_integer_port_is_rejected() {
        assert!(Cli::try_parse_from(["spaserve", "notaport"]).is_err());
    }

    #[test]
    fn test_out_of_range_port_is_rejected() {
        assert!(Cli::try_parse_from(["spaserve", "70000"]).is_err());
    }

    #[test]
    fn test_port_overrides_config() {
        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        let cli = Cli::try_parse_from(["spaserve", "9090", "--root", "dist"]).unwrap();
        cli.apply(&mut cfg);
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.root, "dist");
        assert_eq!(cfg.server.host, "0.0.0.0");
    }
}
