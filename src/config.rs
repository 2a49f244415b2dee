use clap::Parser;

/// In-memory order tracking with a menu-driven terminal UI.
#[derive(Debug, Parser)]
#[command(name = "order_ledger", version)]
pub struct Config {
    /// Capacity of the ledger service request channel
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..))]
    pub channel_capacity: u32,

    /// Width in characters of the longest bar in the status chart
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(1..=200))]
    pub chart_width: u32,

    /// Fallback log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["order_ledger"]).unwrap();
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.chart_width, 40);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "order_ledger",
            "--channel-capacity",
            "4",
            "--chart-width",
            "10",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.channel_capacity, 4);
        assert_eq!(config.chart_width, 10);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(Config::try_parse_from(["order_ledger", "--channel-capacity", "0"]).is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
