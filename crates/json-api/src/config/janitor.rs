//! Cart Janitor Config

use std::time::Duration;

use clap::Args;
use jiff::SignedDuration;

use storefront_app::janitor::JanitorConfig;

/// Stale cart cleanup schedule.
#[derive(Debug, Args)]
pub struct JanitorSchedule {
    /// Seconds between stale cart sweeps
    #[arg(
        long,
        env = "CART_SWEEP_INTERVAL_SECONDS",
        default_value_t = 43_200,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub cart_sweep_interval_seconds: u64,

    /// Seconds a cart may go untouched before it is deleted
    #[arg(
        long,
        env = "CART_RETENTION_SECONDS",
        default_value_t = 43_200,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    pub cart_retention_seconds: i64,

    /// Signed seconds added to the clock when computing the sweep cutoff
    #[arg(
        long,
        env = "CART_CLOCK_OFFSET_SECONDS",
        default_value_t = 0,
        allow_hyphen_values = true
    )]
    pub cart_clock_offset_seconds: i64,
}

impl JanitorSchedule {
    #[must_use]
    pub fn janitor_config(&self) -> JanitorConfig {
        JanitorConfig {
            interval: Duration::from_secs(self.cart_sweep_interval_seconds),
            retention: SignedDuration::from_secs(self.cart_retention_seconds),
            clock_offset: SignedDuration::from_secs(self.cart_clock_offset_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Wrapper {
        #[command(flatten)]
        janitor: JanitorSchedule,
    }

    #[test]
    fn negative_clock_offset_is_accepted() -> TestResult {
        let wrapper = Wrapper::try_parse_from(["test", "--cart-clock-offset-seconds", "-3600"])?;

        assert_eq!(
            wrapper.janitor.janitor_config().clock_offset,
            SignedDuration::from_hours(-1)
        );

        Ok(())
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(Wrapper::try_parse_from(["test", "--cart-sweep-interval-seconds", "0"]).is_err());
    }

    #[test]
    fn zero_or_negative_retention_is_rejected() {
        for value in ["0", "-3600"] {
            assert!(
                Wrapper::try_parse_from(["test", "--cart-retention-seconds", value]).is_err(),
                "{value}"
            );
        }
    }

    #[test]
    fn retention_is_converted_to_signed_duration() -> TestResult {
        let wrapper = Wrapper::try_parse_from(["test", "--cart-retention-seconds", "7200"])?;

        assert_eq!(
            wrapper.janitor.janitor_config().retention,
            SignedDuration::from_hours(2)
        );

        Ok(())
    }
}
