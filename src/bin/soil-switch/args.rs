use clap::{Parser, Subcommand};
use reqwest::Url;
use soil_monitoring::api::DEFAULT_BASE_URL;

#[derive(Debug, Parser)]
#[command(about = "Read or change the irrigation switch on the soil sensor service")]
pub struct Args {
    #[arg(long, env = "SOIL_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    #[arg(long, env = "SOIL_API_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current operating mode
    Mode,

    /// Change the operating mode, e.g. `auto` or `manual`
    SetMode { mode: String },

    /// Switch the actuator while in manual mode, e.g. `on` or `off`
    Manual { state: String },
}
