use clap::Parser;

pub const DEFAULT_RESERVATION_ENDPOINT: &str =
    "https://striveschool-api.herokuapp.com/api/reservation";

#[derive(Parser, Clone, Debug)]
#[clap(name = "reservation-list", about = "Shows the current reservations")]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value = DEFAULT_RESERVATION_ENDPOINT)]
    pub reservation_endpoint: String,
}
