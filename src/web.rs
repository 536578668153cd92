//! Static web front end for the rendered charts.
//!
//! - `GET /`            index page linking to the two charts
//! - `GET /temperature` page showing `temp.svg`
//! - `GET /co2`         page showing `co2.svg`
//! - `GET /static/..`   files of the chart output directory
//!
//! Everything else is answered by warp's default rejection (404 or 405).

use super::{DEFAULT_CO2_CSV, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPERATURE_CSV, VERSION};
use clap::{value_t, App, Arg, ArgMatches};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;
use warp::{Filter, Rejection, Reply};

const INDEX_HTML: &str = include_str!("../templates/index.html");
const TEMPERATURE_HTML: &str = include_str!("../templates/temperature.html");
const CO2_HTML: &str = include_str!("../templates/co2.html");

pub const DEFAULT_MONTH: &str = "January";
pub const DEFAULT_IP: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// The three pages plus the chart directory mounted under `/static`.
pub fn routes(
    static_dir: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let index = warp::get()
        .and(warp::path::end())
        .map(|| warp::reply::html(INDEX_HTML));
    let temperature = warp::get()
        .and(warp::path("temperature"))
        .and(warp::path::end())
        .map(|| warp::reply::html(TEMPERATURE_HTML));
    let co2 = warp::get()
        .and(warp::path("co2"))
        .and(warp::path::end())
        .map(|| warp::reply::html(CO2_HTML));
    let charts = warp::get()
        .and(warp::path("static"))
        .and(warp::fs::dir(static_dir));

    index.or(temperature).or(co2).or(charts)
}

/// Runs the web server until the process is stopped.
pub async fn serve(static_dir: PathBuf, addr: SocketAddr) {
    info!(
        "serving charts from {} on http://{}",
        static_dir.display(),
        addr
    );
    let routes = routes(static_dir).with(warp::trace::request());
    warp::serve(routes).run(addr).await;
}

/// Settings of the `climate_web` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct WebConfig {
    pub temperature_csv: PathBuf,
    pub co2_csv: PathBuf,
    pub output_dir: PathBuf,
    pub addr: SocketAddr,
}

fn app() -> App<'static, 'static> {
    let arg_temperature = Arg::with_name("temperature_csv")
        .help("csv file with the temperature per month, indexed by Year")
        .short("t")
        .long("temperature")
        .takes_value(true)
        .default_value(DEFAULT_TEMPERATURE_CSV);
    let arg_co2 = Arg::with_name("co2_csv")
        .help("csv file with the Carbon column, indexed by Year")
        .short("c")
        .long("co2")
        .takes_value(true)
        .default_value(DEFAULT_CO2_CSV);
    let arg_outdir = Arg::with_name("output_dir")
        .help("directory the charts are written to and served from")
        .short("o")
        .long("outdir")
        .takes_value(true)
        .default_value(DEFAULT_OUTPUT_DIR);
    let arg_ip = Arg::with_name("ip_address")
        .help("ip address to listen on")
        .long("ip")
        .takes_value(true)
        .default_value(DEFAULT_IP);
    let arg_port = Arg::with_name("port")
        .help("port to listen on")
        .short("p")
        .long("port")
        .takes_value(true)
        .default_value("5000");
    App::new("Climate_web")
        .version(VERSION.unwrap_or("unknown"))
        .about("render the climate charts and serve them as web pages")
        .arg(arg_temperature)
        .arg(arg_co2)
        .arg(arg_outdir)
        .arg(arg_ip)
        .arg(arg_port)
}

fn config_from(cli_args: &ArgMatches) -> Result<WebConfig, clap::Error> {
    let ip = value_t!(cli_args, "ip_address", IpAddr)?;
    let port = value_t!(cli_args, "port", u16)?;
    Ok(WebConfig {
        temperature_csv: PathBuf::from(cli_args.value_of("temperature_csv").unwrap_or_default()),
        co2_csv: PathBuf::from(cli_args.value_of("co2_csv").unwrap_or_default()),
        output_dir: PathBuf::from(cli_args.value_of("output_dir").unwrap_or_default()),
        addr: SocketAddr::new(ip, port),
    })
}

/// Takes the CLI arguments of the web server; exits with clap's message on invalid values.
pub fn parse_cli() -> WebConfig {
    let cli_args = app().get_matches();
    config_from(&cli_args).unwrap_or_else(|e| e.exit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::net::Ipv4Addr;

    fn parse(args: &[&str]) -> Result<WebConfig, clap::Error> {
        let cli_args = app()
            .get_matches_from_safe(std::iter::once("climate_web").chain(args.iter().copied()))
            .expect("valid arguments");
        config_from(&cli_args)
    }

    #[tokio::test]
    async fn index_links_both_charts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let res = warp::test::request()
            .method("GET")
            .path("/")
            .reply(&routes(dir.path().to_path_buf()))
            .await;
        assert_eq!(res.status(), 200);
        let body = String::from_utf8_lossy(res.body());
        assert!(body.contains("href=\"/temperature\""));
        assert!(body.contains("href=\"/co2\""));
    }

    #[tokio::test]
    async fn chart_pages_embed_the_images() {
        let dir = tempfile::tempdir().expect("tempdir");
        let filter = routes(dir.path().to_path_buf());
        let res = warp::test::request().path("/temperature").reply(&filter).await;
        assert_eq!(res.status(), 200);
        assert!(String::from_utf8_lossy(res.body()).contains("/static/temp.svg"));
        let res = warp::test::request().path("/co2").reply(&filter).await;
        assert_eq!(res.status(), 200);
        assert!(String::from_utf8_lossy(res.body()).contains("/static/co2.svg"));
    }

    #[tokio::test]
    async fn serves_rendered_charts() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("co2.svg"), "<svg></svg>").expect("write chart");
        let filter = routes(dir.path().to_path_buf());
        let res = warp::test::request().path("/static/co2.svg").reply(&filter).await;
        assert_eq!(res.status(), 200);
        assert_eq!(res.body().as_ref(), b"<svg></svg>");
        let res = warp::test::request().path("/static/temp.svg").reply(&filter).await;
        assert_eq!(res.status(), 404);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let res = warp::test::request()
            .path("/humidity")
            .reply(&routes(dir.path().to_path_buf()))
            .await;
        assert_eq!(res.status(), 404);
    }

    #[test]
    fn cli_defaults() {
        let cfg = parse(&[]).expect("valid config");
        assert_eq!(
            cfg.addr,
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT)
        );
        assert_eq!(cfg.output_dir, PathBuf::from("static"));
    }

    #[test]
    fn cli_rejects_bad_port() {
        assert!(parse(&["--port", "70000"]).is_err());
        assert!(parse(&["--ip", "localhost"]).is_err());
        let cfg = parse(&["--ip", "0.0.0.0", "-p", "8080"]).expect("valid config");
        assert_eq!(cfg.addr.port(), 8080);
    }
}
