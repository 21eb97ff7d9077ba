use chrono_tz::Tz;
use clap::Parser;
use reqwest::Url;
use soil_monitoring::api::DEFAULT_BASE_URL;

#[derive(Debug, Parser)]
#[command(about = "Poll the soil sensor service and print the latest readings")]
pub struct Args {
    #[arg(long, env = "SOIL_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    #[arg(long, env = "SOIL_API_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    #[arg(
        long,
        env = "SOIL_REFRESH_INTERVAL_SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_secs: u64,

    #[arg(long, env = "TZ", default_value = "UTC")]
    pub timezone: Tz,
}
